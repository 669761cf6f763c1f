//! `validateFullManifest` (spec §4.7): per-scene verdicts plus the
//! sequence-level consecutive-linear-easing check.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use sizzle_catalog::{CameraGuardrailsCatalog, Personality, ShotGrammarCatalog};
use sizzle_grammar::resolve_shot_grammar_css;
use sizzle_spec::enums::{Easing, Verdict};
use sizzle_spec::manifest::SequenceManifest;
use sizzle_spec::scene::{Camera, Scene, ShotGrammarAxes};

use crate::registry::{validate_camera_move, MoveVerdict};
use crate::rule::{GuardrailFinding, MoveContext};

/// Per-scene verdict plus the scene it judged (for report rendering).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGuardrailResult {
    pub scene: String,
    pub move_verdict: MoveVerdict,
}

/// Full-manifest guardrail result (spec §4.7 `validateFullManifest`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestGuardrailResult {
    pub overall: Verdict,
    pub per_scene: Vec<SceneGuardrailResult>,
    pub sequence_findings: Vec<GuardrailFinding>,
}

fn camera_for_entry<'a>(
    entry: &'a sizzle_spec::manifest::SceneEntry,
    scenes_by_id: &HashMap<&str, &'a Scene>,
) -> Camera {
    if let Some(co) = entry.camera_override {
        return Camera {
            move_: co.move_,
            intensity: co.intensity,
            easing: co.easing,
        };
    }
    scenes_by_id
        .get(entry.scene.as_str())
        .and_then(|s| s.camera)
        .unwrap_or(Camera {
            move_: sizzle_spec::enums::CameraMove::Static,
            intensity: 0.0,
            easing: Easing::Linear,
        })
}

fn shot_grammar_for_entry(
    entry: &sizzle_spec::manifest::SceneEntry,
    scenes_by_id: &HashMap<&str, &Scene>,
) -> ShotGrammarAxes {
    entry.shot_grammar.unwrap_or_else(|| {
        scenes_by_id
            .get(entry.scene.as_str())
            .and_then(|s| s.metadata.as_ref())
            .and_then(|m| m.shot_grammar)
            .unwrap_or_default()
    })
}

/// Validates every scene entry's camera move, plus the sequence-wide
/// consecutive-linear-easing check (never escalates past WARN on its own).
pub fn validate_full_manifest(
    manifest: &SequenceManifest,
    scenes_by_id: &HashMap<&str, &Scene>,
    personality_slug: &str,
    personality: &Personality,
    guardrails: &CameraGuardrailsCatalog,
    shot_grammar_catalog: &ShotGrammarCatalog,
) -> ManifestGuardrailResult {
    let mut per_scene = Vec::with_capacity(manifest.scenes.len());
    let mut overall = Verdict::Pass;
    let mut linear_run = 0usize;
    let mut sequence_findings = Vec::new();

    for entry in &manifest.scenes {
        let camera = camera_for_entry(entry, scenes_by_id);
        let axes = shot_grammar_for_entry(entry, scenes_by_id);
        let css = resolve_shot_grammar_css(axes, personality, shot_grammar_catalog);

        let ctx = MoveContext {
            camera: &camera,
            shot_grammar_css: &css,
            duration_s: entry.duration_s,
            personality_slug,
            personality,
            guardrails,
        };
        let move_verdict = validate_camera_move(&ctx);
        overall = overall.combine(move_verdict.verdict);

        if camera.easing == Easing::Linear {
            linear_run += 1;
            if linear_run == 3 {
                sequence_findings.push(GuardrailFinding::new(
                    Verdict::Warn,
                    "consecutive_linear_easing",
                    format!("3 or more consecutive linear easings ending at scene '{}'", entry.scene),
                ));
            }
        } else {
            linear_run = 0;
        }

        per_scene.push(SceneGuardrailResult {
            scene: entry.scene.clone(),
            move_verdict,
        });
    }

    if !sequence_findings.is_empty() {
        overall = overall.combine(Verdict::Warn);
    }

    ManifestGuardrailResult {
        overall,
        per_scene,
        sequence_findings,
    }
}
