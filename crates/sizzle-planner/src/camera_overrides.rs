//! Stage 4 — camera overrides: evaluates a style pack's
//! `CameraOverridesConfig` in fixed priority order, then checks the result
//! against the personality's `allowed_movements` (spec §4.5 Stage 4).

use sizzle_catalog::{CameraOverridesConfig, CameraSpec, Personality};
use sizzle_spec::enums::CameraMove;
use sizzle_spec::manifest::CameraOverride;
use sizzle_spec::scene::Scene;

/// `static` and `drift` are exempt from the `allowed_movements` check: static
/// is always safe to fall back to, and drift is ambient motion judged
/// separately by the guardrails' `ambient_condition`, not gated by the
/// planner's movement allow-list (spec §9 "drift classification").
fn exempt_from_allow_list(move_: CameraMove) -> bool {
    matches!(move_, CameraMove::Static | CameraMove::Drift)
}

fn pick(scene: &Scene, config: &CameraOverridesConfig) -> Option<CameraSpec> {
    if config.force_static {
        return Some(CameraSpec {
            move_: CameraMove::Static,
            intensity: 0.0,
            easing: sizzle_spec::enums::Easing::Linear,
        });
    }

    let metadata = scene.metadata.as_ref()?;
    if let Some(spec) = config.by_content_type.get(&metadata.content_type) {
        return Some(*spec);
    }

    config
        .by_intent
        .iter()
        .find(|rule| metadata.intent_tags.contains(&rule.tag))
        .map(|rule| CameraSpec {
            move_: rule.move_,
            intensity: rule.intensity,
            easing: rule.easing,
        })
}

/// Resolves the camera override for a scene, dropping it entirely (`None`)
/// if the chosen move isn't in the personality's `allowed_movements`.
pub fn assign_camera_override(
    scene: &Scene,
    config: &CameraOverridesConfig,
    personality: &Personality,
) -> Option<CameraOverride> {
    let spec = pick(scene, config)?;
    if !exempt_from_allow_list(spec.move_) && !personality.allows_movement(spec.move_.as_kebab()) {
        return None;
    }
    Some(CameraOverride {
        move_: spec.move_,
        intensity: spec.intensity,
        easing: spec.easing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizzle_catalog::Catalog;
    use sizzle_spec::scene::{Confidence, SceneMetadata};

    fn scene_with_content_type(content_type: sizzle_spec::enums::ContentType) -> Scene {
        Scene {
            scene_id: "sc_a".into(),
            duration_s: 3.0,
            camera: None,
            shot_grammar: None,
            layout: None,
            assets: vec![],
            layers: vec![],
            metadata: Some(SceneMetadata {
                content_type,
                visual_weight: sizzle_spec::enums::VisualWeight::Mixed,
                motion_energy: sizzle_spec::enums::MotionEnergy::Moderate,
                intent_tags: vec![],
                shot_grammar: None,
                style_override: None,
                confidence: Confidence::default(),
            }),
        }
    }

    #[test]
    fn force_static_always_wins() {
        let catalog = Catalog::load_embedded_default();
        let pack = catalog.style_pack("energetic-montage").unwrap();
        let personality = catalog.personality(&pack.personality).unwrap();
        let scene = scene_with_content_type(sizzle_spec::enums::ContentType::ProductShot);
        if pack.camera_overrides.force_static {
            let result = assign_camera_override(&scene, &pack.camera_overrides, personality);
            assert_eq!(result.map(|o| o.move_), Some(CameraMove::Static));
        }
    }

    #[test]
    fn disallowed_movement_is_dropped() {
        let catalog = Catalog::load_embedded_default();
        let pack = catalog.style_pack("confident-launch").unwrap();
        let mut personality = catalog.personality(&pack.personality).unwrap().clone();
        personality.allowed_movements.clear();
        let scene = scene_with_content_type(sizzle_spec::enums::ContentType::ProductShot);
        let result = assign_camera_override(&scene, &pack.camera_overrides, &personality);
        assert!(result.is_none() || exempt_from_allow_list(result.unwrap().move_));
    }
}
