//! Catalog loading errors (spec §4.1: "fail fast if a referenced personality
//! is missing from style packs, or if enums referenced by rules are undefined").

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not locate a 'catalog' directory in the current directory ancestry")]
    RootNotFound,

    #[error("failed to read catalog document {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog document {document}: {source}")]
    Parse {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("style pack '{style_pack}' references unknown personality '{personality}'")]
    UnknownPersonality {
        style_pack: String,
        personality: String,
    },

    #[error("camera guardrails declare a personality boundary for unknown personality '{0}'")]
    UnknownPersonalityBoundary(String),
}
