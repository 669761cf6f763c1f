//! Quantified invariants that must hold across every analyzed scene, planned
//! manifest, and evaluated sequence, independent of which specific fixture
//! produced them.

use std::collections::HashMap;

use sizzle_spec::enums::{CameraMove, Easing, Verdict};
use sizzle_spec::manifest::{Fps, Resolution};
use sizzle_spec::scene::Scene;

use sizzle_tests::fixtures::{analyzed_scene, default_catalog};

const CONTENT_TYPES: &[sizzle_spec::enums::ContentType] = &[
    sizzle_spec::enums::ContentType::ProductShot,
    sizzle_spec::enums::ContentType::Portrait,
    sizzle_spec::enums::ContentType::Typography,
    sizzle_spec::enums::ContentType::UiScreenshot,
    sizzle_spec::enums::ContentType::BrandMark,
    sizzle_spec::enums::ContentType::Moodboard,
];

/// Every confidence value the analyzer emits lies in `[0, 1]`.
#[test]
fn analyzer_confidence_values_are_in_unit_range() {
    let catalog = default_catalog();
    for content_type in CONTENT_TYPES {
        let scene = Scene {
            scene_id: format!("sc_{content_type:?}"),
            duration_s: 3.0,
            camera: None,
            shot_grammar: None,
            layout: None,
            assets: vec![],
            layers: vec![],
            metadata: None,
        };
        let metadata = sizzle_analyzer::analyze_scene(&scene, &catalog);
        let c = metadata.confidence;
        for value in [c.content_type, c.visual_weight, c.motion_energy, c.intent_tags] {
            assert!((0.0..=1.0).contains(&value), "confidence {value} out of range");
        }
        let _ = content_type;
    }
}

/// Planning the same scenes under the same style pack twice produces byte-
/// identical manifests (determinism).
#[test]
fn planner_is_deterministic() {
    let catalog = default_catalog();
    let scenes = vec![
        analyzed_scene("sc_a", sizzle_spec::enums::ContentType::ProductShot, vec![]),
        analyzed_scene("sc_b", sizzle_spec::enums::ContentType::Portrait, vec![]),
        analyzed_scene("sc_c", sizzle_spec::enums::ContentType::Typography, vec![]),
        analyzed_scene("sc_d", sizzle_spec::enums::ContentType::UiScreenshot, vec![]),
    ];

    let plan_once = || {
        sizzle_planner::plan_sequence(
            &scenes,
            "confident-launch",
            "seq_det".into(),
            Resolution { w: 1080, h: 1920 },
            Fps::Fps30,
            &catalog,
        )
        .unwrap()
        .0
    };

    let first = plan_once();
    let second = plan_once();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

/// An evaluator score for an ordinary 4-8 scene manifest never drops below
/// 80, and every dimension sub-score lies in `[0, 100]`.
#[test]
fn ordinary_sequences_score_at_least_eighty() {
    let catalog = default_catalog();
    let scenes = vec![
        analyzed_scene("sc_a", sizzle_spec::enums::ContentType::ProductShot, vec![]),
        analyzed_scene("sc_b", sizzle_spec::enums::ContentType::Portrait, vec![]),
        analyzed_scene("sc_c", sizzle_spec::enums::ContentType::Typography, vec![]),
        analyzed_scene("sc_d", sizzle_spec::enums::ContentType::UiScreenshot, vec![]),
        analyzed_scene("sc_e", sizzle_spec::enums::ContentType::BrandMark, vec![]),
        analyzed_scene("sc_f", sizzle_spec::enums::ContentType::Moodboard, vec![]),
    ];

    let (manifest, _) = sizzle_planner::plan_sequence(
        &scenes,
        "confident-launch",
        "seq_score".into(),
        Resolution { w: 1080, h: 1920 },
        Fps::Fps30,
        &catalog,
    )
    .unwrap();

    let result = sizzle_evaluator::evaluate_sequence(&manifest, &scenes, "confident-launch", &catalog).unwrap();

    assert!(result.score >= 80.0, "expected score >= 80, got {}", result.score);
    for dim in [
        result.dimensions.pacing,
        result.dimensions.variety,
        result.dimensions.flow,
        result.dimensions.adherence,
    ] {
        assert!((0.0..=100.0).contains(&dim), "dimension score {dim} out of [0,100]");
    }
}

/// Analyzing the same scene twice in a row, with no authored metadata
/// present, yields identical classification metadata both times.
#[test]
fn analyzer_metadata_is_stable_under_repeated_decoration() {
    let catalog = default_catalog();
    let scene = Scene {
        scene_id: "sc_repeat".into(),
        duration_s: 4.0,
        camera: None,
        shot_grammar: None,
        layout: None,
        assets: vec![],
        layers: vec![],
        metadata: None,
    };

    let first = sizzle_analyzer::analyze_scene(&scene, &catalog);
    let second = sizzle_analyzer::analyze_scene(&scene, &catalog);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

/// A personality's `allows_movement` is consistent with membership in its
/// own `allowed_movements` list, for every declared camera move.
#[test]
fn personality_allow_list_membership_matches_allows_movement() {
    let catalog = default_catalog();
    let all_moves = [
        CameraMove::Static,
        CameraMove::Pan,
        CameraMove::PushIn,
        CameraMove::PushOut,
        CameraMove::Drift,
        CameraMove::Shake,
    ];

    for slug in ["restrained-editorial", "dramatic-dark", "rapid-montage"] {
        let personality = catalog.personality(slug).unwrap();
        for mv in all_moves {
            let in_list = personality.allowed_movements.contains(&mv.as_kebab().to_string());
            assert_eq!(
                personality.allows_movement(mv.as_kebab()),
                in_list,
                "{slug}: allows_movement disagreed with allowed_movements for {mv:?}"
            );
        }
    }
}

/// Any manifest with a BLOCK finding anywhere in its per-scene verdicts has
/// an overall verdict of BLOCK, and conversely.
#[test]
fn overall_verdict_is_block_iff_any_scene_blocks() {
    let catalog = default_catalog();
    let scene = Scene {
        scene_id: "sc_shake".into(),
        duration_s: 3.0,
        camera: None,
        shot_grammar: None,
        layout: None,
        assets: vec![],
        layers: vec![],
        metadata: None,
    };
    let scenes_by_id: HashMap<&str, &Scene> = std::iter::once(("sc_shake", &scene)).collect();

    let manifest = sizzle_spec::manifest::SequenceManifest {
        sequence_id: "seq_shake".into(),
        resolution: Resolution { w: 1080, h: 1920 },
        fps: Fps::Fps30,
        style: "confident-launch".into(),
        scenes: vec![sizzle_spec::manifest::SceneEntry {
            scene: "sc_shake".into(),
            duration_s: 3.0,
            transition_in: None,
            camera_override: Some(sizzle_spec::manifest::CameraOverride {
                move_: CameraMove::Shake,
                intensity: 0.9,
                easing: Easing::Linear,
            }),
            shot_grammar: None,
        }],
    };

    let personality = catalog.personality("restrained-editorial").unwrap();
    let result = sizzle_guardrails::validate_full_manifest(
        &manifest,
        &scenes_by_id,
        "restrained-editorial",
        personality,
        &catalog.guardrails,
        &catalog.shot_grammar,
    );

    let any_block = result
        .per_scene
        .iter()
        .any(|s| s.move_verdict.verdict == Verdict::Block);
    assert_eq!(result.overall == Verdict::Block, any_block);
}
