//! CLI command implementations.

pub mod doctor;
pub mod lint;
pub mod run;
pub mod schema;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_module_exports_entrypoints() {
        let _ = doctor::run;
        let _ = lint::run;
        let _ = run::run;
        let _ = schema::run;
    }
}
