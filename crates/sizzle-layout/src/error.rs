use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout config field '{field}' has an invalid value: {detail}")]
    InvalidConfig { field: String, detail: String },
}
