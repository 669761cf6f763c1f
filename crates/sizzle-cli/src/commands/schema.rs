//! Schema command: prints a bundled catalog document as JSON, for callers
//! that want to inspect what ships inside the binary (spec §6.3).

use std::process::ExitCode;

use anyhow::Result;

use sizzle_catalog::Catalog;

use crate::cli_args::SchemaDocument;

pub fn run(document: SchemaDocument) -> Result<ExitCode> {
    let catalog = Catalog::load_embedded_default();

    let json = match document {
        SchemaDocument::Personalities => serde_json::to_string_pretty(&catalog.personalities)?,
        SchemaDocument::StylePacks => serde_json::to_string_pretty(&catalog.style_packs)?,
        SchemaDocument::ShotGrammar => serde_json::to_string_pretty(&catalog.shot_grammar)?,
        SchemaDocument::Guardrails => serde_json::to_string_pretty(&catalog.guardrails)?,
        SchemaDocument::Primitives => serde_json::to_string_pretty(&catalog.primitives)?,
    };
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_every_document_kind() {
        for document in [
            SchemaDocument::Personalities,
            SchemaDocument::StylePacks,
            SchemaDocument::ShotGrammar,
            SchemaDocument::Guardrails,
            SchemaDocument::Primitives,
        ] {
            let code = run(document).unwrap();
            assert_eq!(code, ExitCode::SUCCESS);
        }
    }
}
