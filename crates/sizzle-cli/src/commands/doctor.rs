//! Doctor command: checks that the bundled catalog is internally
//! consistent and that the current directory is writable.

use std::env;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use sizzle_catalog::Catalog;

pub fn run() -> Result<ExitCode> {
    println!("{}", "Sizzle Doctor".cyan().bold());
    println!("{}", "=============".cyan());
    println!();

    let mut all_ok = true;

    println!("{}", "Versions:".bold());
    println!("  {} sizzle-cli v{}", "->".green(), env!("CARGO_PKG_VERSION"));
    if let Some(sha) = option_env!("SIZZLE_GIT_SHA") {
        println!("  {} commit {}", "->".green(), &sha[..sha.len().min(12)]);
    }
    println!();

    println!("{}", "Catalog:".bold());
    let catalog = Catalog::load_embedded_default();
    println!(
        "  {} {} personalities, {} style packs, {} primitives",
        "ok".green(),
        catalog.personalities.len(),
        catalog.style_packs.len(),
        catalog.primitives.primitives.len(),
    );
    println!();

    println!("{}", "Permissions:".bold());
    match env::current_dir() {
        Ok(dir) => {
            let test_file = dir.join(".sizzle_write_test");
            match std::fs::write(&test_file, "test") {
                Ok(_) => {
                    let _ = std::fs::remove_file(&test_file);
                    println!("  {} current directory is writable ({})", "ok".green(), dir.display());
                }
                Err(e) => {
                    println!("  {} cannot write to current directory: {e}", "!!".red());
                    all_ok = false;
                }
            }
        }
        Err(e) => {
            println!("  {} cannot determine current directory: {e}", "!!".red());
            all_ok = false;
        }
    }
    println!();

    if all_ok {
        println!("{} all checks passed", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} some checks failed, see above", "WARNING".yellow().bold());
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_reports_success_in_a_writable_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let original = env::current_dir().unwrap();
        env::set_current_dir(tmp.path()).unwrap();
        let code = run().unwrap();
        env::set_current_dir(original).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
