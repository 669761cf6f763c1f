//! Boundary behaviors at the edges of validated ranges: duration, opacity,
//! and the single-scene-manifest special cases.

use std::collections::HashSet;

use sizzle_spec::enums::{DepthClass, LayerType};
use sizzle_spec::manifest::{Fps, Resolution, SceneEntry, SequenceManifest};
use sizzle_spec::scene::{Layer, Scene};
use sizzle_spec::validate::{validate_manifest, validate_scene};

fn minimal_scene(duration_s: f64) -> Scene {
    Scene {
        scene_id: "sc_boundary".into(),
        duration_s,
        camera: None,
        shot_grammar: None,
        layout: None,
        assets: vec![],
        layers: vec![],
        metadata: None,
    }
}

fn layer_with_opacity(opacity: f64) -> Layer {
    Layer {
        id: "l1".into(),
        layer_type: LayerType::Image,
        depth_class: DepthClass::Midground,
        asset: None,
        position: None,
        slot: None,
        opacity,
        blend_mode: None,
        entrance: None,
        content: None,
        animation: None,
        style: Default::default(),
    }
}

#[test]
fn duration_0_5_and_30_0_are_valid() {
    assert!(validate_scene(&minimal_scene(0.5)).is_ok());
    assert!(validate_scene(&minimal_scene(30.0)).is_ok());
}

#[test]
fn duration_0_4_and_30_1_are_invalid() {
    assert!(!validate_scene(&minimal_scene(0.4)).is_ok());
    assert!(!validate_scene(&minimal_scene(30.1)).is_ok());
}

#[test]
fn opacity_0_and_1_are_valid() {
    let mut scene = minimal_scene(3.0);
    scene.layers = vec![layer_with_opacity(0.0)];
    assert!(validate_scene(&scene).is_ok());
    scene.layers = vec![layer_with_opacity(1.0)];
    assert!(validate_scene(&scene).is_ok());
}

#[test]
fn opacity_below_0_and_above_1_are_invalid() {
    let mut scene = minimal_scene(3.0);
    scene.layers = vec![layer_with_opacity(-0.01)];
    assert!(!validate_scene(&scene).is_ok());
    scene.layers = vec![layer_with_opacity(1.01)];
    assert!(!validate_scene(&scene).is_ok());
}

#[test]
fn empty_scenes_array_fails_manifest_validation() {
    let manifest = SequenceManifest {
        sequence_id: "seq_empty".into(),
        resolution: Resolution { w: 1080, h: 1920 },
        fps: Fps::Fps30,
        style: "confident-launch".into(),
        scenes: vec![],
    };
    let known: HashSet<&str> = HashSet::new();
    assert!(!validate_manifest(&manifest, &known).is_ok());
}

/// A single-scene manifest never carries a `transition_in` on its only
/// entry, since there is no preceding scene to transition from.
#[test]
fn single_scene_manifest_has_no_transition_in() {
    let catalog = sizzle_tests::fixtures::default_catalog();
    let scenes = vec![sizzle_tests::fixtures::analyzed_scene(
        "sc_only",
        sizzle_spec::enums::ContentType::BrandMark,
        vec![],
    )];

    let (manifest, _) = sizzle_planner::plan_sequence(
        &scenes,
        "confident-launch",
        "seq_only".into(),
        Resolution { w: 1080, h: 1920 },
        Fps::Fps30,
        &catalog,
    )
    .unwrap();

    assert_eq!(manifest.scenes.len(), 1);
    assert!(manifest.scenes[0].transition_in.is_none());
}

/// A single-scene sequence's pacing and variety sub-scores are defined as
/// 100 by convention — there is no rhythm or repetition to penalize.
#[test]
fn single_scene_sequence_pacing_and_variety_are_full_marks() {
    let catalog = sizzle_tests::fixtures::default_catalog();
    let scenes = vec![sizzle_tests::fixtures::analyzed_scene(
        "sc_only",
        sizzle_spec::enums::ContentType::BrandMark,
        vec![],
    )];

    let (manifest, _) = sizzle_planner::plan_sequence(
        &scenes,
        "confident-launch",
        "seq_only".into(),
        Resolution { w: 1080, h: 1920 },
        Fps::Fps30,
        &catalog,
    )
    .unwrap();

    let result = sizzle_evaluator::evaluate_sequence(&manifest, &scenes, "confident-launch", &catalog).unwrap();
    assert_eq!(result.dimensions.pacing, 100.0);
    assert_eq!(result.dimensions.variety, 100.0);
}

#[test]
fn transition_in_duration_ms_boundary() {
    use sizzle_spec::enums::TransitionType;
    use sizzle_spec::manifest::TransitionIn;

    let mut manifest = SequenceManifest {
        sequence_id: "seq_two".into(),
        resolution: Resolution { w: 1080, h: 1920 },
        fps: Fps::Fps30,
        style: "confident-launch".into(),
        scenes: vec![
            SceneEntry {
                scene: "sc_a".into(),
                duration_s: 3.0,
                transition_in: None,
                camera_override: None,
                shot_grammar: None,
            },
            SceneEntry {
                scene: "sc_b".into(),
                duration_s: 3.0,
                transition_in: Some(TransitionIn {
                    transition_type: TransitionType::HardCut,
                    duration_ms: 2000,
                }),
                camera_override: None,
                shot_grammar: None,
            },
        ],
    };
    let known: HashSet<&str> = HashSet::from(["sc_a", "sc_b"]);
    assert!(validate_manifest(&manifest, &known).is_ok());

    manifest.scenes[1].transition_in.as_mut().unwrap().duration_ms = 2001;
    assert!(!validate_manifest(&manifest, &known).is_ok());
}
