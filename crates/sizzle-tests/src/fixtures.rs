//! Scene and catalog fixtures shared across the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

use sizzle_catalog::Catalog;
use sizzle_spec::enums::{ContentType, IntentTag, MotionEnergy, VisualWeight};
use sizzle_spec::scene::{Confidence, Scene, SceneMetadata};

/// A directory of authored scene JSON files, the shape `sizzle-cli` reads
/// (spec §6.4: "loads all `*.json` from scenes-dir").
pub struct SceneDirFixture {
    pub dir: TempDir,
}

impl SceneDirFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create scenes dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write one scene as `<scene_id>.json`, stripped of the leading `sc_`
    /// prefix to exercise the filename-derived `scene_id` fallback.
    pub fn add_scene(&self, scene_id: &str, body: serde_json::Value) -> PathBuf {
        let file_name = format!("{}.json", scene_id.trim_start_matches("sc_"));
        let path = self.dir.path().join(file_name);
        fs::write(&path, serde_json::to_string_pretty(&body).unwrap())
            .expect("failed to write scene fixture");
        path
    }
}

impl Default for SceneDirFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A single brand-mark hero scene: a centered wordmark with no manual
/// metadata, matching scenario 1 (spec §8).
pub fn hero_brand_mark_scene() -> serde_json::Value {
    json!({
        "scene_id": "sc_hero_open",
        "duration_s": 3.0,
        "layout": {"template": "hero-center"},
        "layers": [
            {"id": "t", "type": "text", "depth_class": "foreground", "content": "HELLO"}
        ]
    })
}

/// An already-analyzed scene with the given content type and intent tags,
/// duration defaulting to 3.0s. Mirrors the fixture builder every pipeline
/// crate's own unit tests already use.
pub fn analyzed_scene(id: &str, content_type: ContentType, tags: Vec<IntentTag>) -> Scene {
    analyzed_scene_with_duration(id, content_type, tags, 3.0)
}

pub fn analyzed_scene_with_duration(
    id: &str,
    content_type: ContentType,
    tags: Vec<IntentTag>,
    duration_s: f64,
) -> Scene {
    Scene {
        scene_id: id.into(),
        duration_s,
        camera: None,
        shot_grammar: None,
        layout: None,
        assets: vec![],
        layers: vec![],
        metadata: Some(SceneMetadata {
            content_type,
            visual_weight: VisualWeight::Mixed,
            motion_energy: MotionEnergy::Moderate,
            intent_tags: tags,
            shot_grammar: None,
            style_override: None,
            confidence: Confidence {
                content_type: 0.8,
                visual_weight: 0.8,
                motion_energy: 0.8,
                intent_tags: 0.8,
            },
        }),
    }
}

/// The bundled default catalog (spec §6.3), loaded fresh for each test.
pub fn default_catalog() -> Catalog {
    Catalog::load_embedded_default()
}

/// The default catalog with one personality's `allowed_movements` replaced,
/// for exercising the planner's movement allow-list without hand-authoring
/// a full five-document fixture catalog (spec §9 "make the initialization
/// explicit so tests can substitute in fixture catalogs").
pub fn catalog_with_personality_movements(slug: &str, allowed: Vec<&str>) -> Catalog {
    let mut catalog = default_catalog();
    let mut personality = catalog
        .personalities
        .get(slug)
        .unwrap_or_else(|| panic!("unknown personality '{slug}' in default catalog"))
        .clone();
    personality.allowed_movements = allowed.into_iter().map(String::from).collect();
    catalog.personalities.insert(slug.to_string(), personality);
    catalog
}
