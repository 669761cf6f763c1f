//! Loads and indexes the five bundled catalog documents (spec §4.1).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::CatalogError;
use crate::guardrails::CameraGuardrailsCatalog;
use crate::personality::Personality;
use crate::primitives::PrimitivesRegistry;
use crate::shot_grammar::ShotGrammarCatalog;
use crate::style_pack::StylePack;

const CATALOG_DIR_NAME: &str = "catalog";

const DEFAULT_PERSONALITIES: &str = include_str!("../../../catalog/personalities.json");
const DEFAULT_STYLE_PACKS: &str = include_str!("../../../catalog/style_packs.json");
const DEFAULT_SHOT_GRAMMAR: &str = include_str!("../../../catalog/shot_grammar.json");
const DEFAULT_CAMERA_GUARDRAILS: &str = include_str!("../../../catalog/camera_guardrails.json");
const DEFAULT_PRIMITIVES: &str = include_str!("../../../catalog/primitives.json");

/// The process-wide read-only reference catalog (spec §3.2, §9 "global
/// reference state"): personalities, style packs, shot grammar, camera
/// guardrails and the primitives registry, indexed by slug/name.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub personalities: HashMap<String, Personality>,
    pub style_packs: HashMap<String, StylePack>,
    pub shot_grammar: ShotGrammarCatalog,
    pub guardrails: CameraGuardrailsCatalog,
    pub primitives: PrimitivesRegistry,
}

impl Catalog {
    pub fn personality(&self, slug: &str) -> Option<&Personality> {
        self.personalities.get(slug)
    }

    pub fn style_pack(&self, name: &str) -> Option<&StylePack> {
        self.style_packs.get(name)
    }

    /// The personality a style pack resolves to. Per spec §7, an unknown
    /// style pack or a style pack whose personality reference slipped past
    /// `validate_consistency` is a programmer error, not a user-facing one.
    pub fn personality_for_style_pack(&self, style_pack_name: &str) -> Option<&Personality> {
        let pack = self.style_pack(style_pack_name)?;
        self.personality(&pack.personality)
    }

    /// Parses the five documents from their in-memory JSON text and checks
    /// cross-references (spec §4.1: "fail fast if a referenced personality is
    /// missing from style packs").
    pub fn from_documents(
        personalities_json: &str,
        style_packs_json: &str,
        shot_grammar_json: &str,
        camera_guardrails_json: &str,
        primitives_json: &str,
    ) -> Result<Catalog, CatalogError> {
        let personalities: HashMap<String, Personality> =
            parse(personalities_json, "personalities.json")?;
        let style_packs: HashMap<String, StylePack> = parse(style_packs_json, "style_packs.json")?;
        let shot_grammar: ShotGrammarCatalog = parse(shot_grammar_json, "shot_grammar.json")?;
        let guardrails: CameraGuardrailsCatalog =
            parse(camera_guardrails_json, "camera_guardrails.json")?;
        let primitives: PrimitivesRegistry = {
            let list: Vec<crate::primitives::Primitive> = parse(primitives_json, "primitives.json")?;
            PrimitivesRegistry { primitives: list }
        };

        let catalog = Catalog {
            personalities,
            style_packs,
            shot_grammar,
            guardrails,
            primitives,
        };
        catalog.validate_consistency()?;
        Ok(catalog)
    }

    /// Cross-document consistency check run once at load time (spec §4.1,
    /// §7 "unknown enum / catalog reference").
    fn validate_consistency(&self) -> Result<(), CatalogError> {
        for (name, pack) in &self.style_packs {
            if !self.personalities.contains_key(&pack.personality) {
                return Err(CatalogError::UnknownPersonality {
                    style_pack: name.clone(),
                    personality: pack.personality.clone(),
                });
            }
        }
        for slug in self.guardrails.personality_boundaries.keys() {
            if !self.personalities.contains_key(slug) {
                return Err(CatalogError::UnknownPersonalityBoundary(slug.clone()));
            }
        }
        Ok(())
    }

    /// Loads the bundled default catalog (spec §6.3: "Catalog JSON (bundled,
    /// read-only)"), without touching the filesystem.
    pub fn load_embedded_default() -> Catalog {
        Catalog::from_documents(
            DEFAULT_PERSONALITIES,
            DEFAULT_STYLE_PACKS,
            DEFAULT_SHOT_GRAMMAR,
            DEFAULT_CAMERA_GUARDRAILS,
            DEFAULT_PRIMITIVES,
        )
        .expect("bundled default catalog must be internally consistent")
    }

    /// Loads from a `catalog/` directory containing the five documents.
    pub fn load_from_dir(dir: &Path) -> Result<Catalog, CatalogError> {
        let personalities = read(dir, "personalities.json")?;
        let style_packs = read(dir, "style_packs.json")?;
        let shot_grammar = read(dir, "shot_grammar.json")?;
        let camera_guardrails = read(dir, "camera_guardrails.json")?;
        let primitives = read(dir, "primitives.json")?;
        Catalog::from_documents(
            &personalities,
            &style_packs,
            &shot_grammar,
            &camera_guardrails,
            &primitives,
        )
    }

    /// Resolves a catalog directory by walking up from `start` looking for a
    /// `catalog/` subdirectory (mirrors the CLI's preset-pack lookup), falling
    /// back to the embedded default if none is found.
    pub fn load_from_ancestry_or_embedded(start: &Path) -> Catalog {
        match find_catalog_root_from(start) {
            Some(root) => {
                Catalog::load_from_dir(&root).unwrap_or_else(|_| Catalog::load_embedded_default())
            }
            None => Catalog::load_embedded_default(),
        }
    }
}

fn parse<T: serde::de::DeserializeOwned>(json: &str, document: &str) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse {
        document: document.to_string(),
        source,
    })
}

fn read(dir: &Path, file_name: &str) -> Result<String, CatalogError> {
    let path = dir.join(file_name);
    std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Walks `start` and its ancestors looking for a `catalog/` directory
/// containing `personalities.json`, mirroring the teacher's preset-pack
/// ancestry search.
pub fn find_catalog_root_from(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(CATALOG_DIR_NAME);
        if candidate.join("personalities.json").is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}
