//! Motion energy sub-classifier (spec §4.4).

use std::collections::HashSet;

use sizzle_spec::enums::{CameraMove, LayerType, MotionEnergy, TextAnimation};
use sizzle_spec::scene::Scene;

fn camera_score(scene: &Scene) -> i32 {
    let Some(camera) = &scene.camera else {
        return 0;
    };
    if camera.move_ == CameraMove::Static {
        return 0;
    }
    if camera.intensity < 0.2 {
        1
    } else if camera.intensity <= 0.5 {
        2
    } else {
        3
    }
}

fn animation_score(scene: &Scene) -> i32 {
    scene
        .layers
        .iter()
        .filter_map(|l| l.animation)
        .map(|a| match a {
            TextAnimation::WordReveal => 2,
            TextAnimation::ScaleCascade => 6,
            TextAnimation::WeightMorph => 2,
        })
        .sum()
}

fn entrance_score(scene: &Scene) -> i32 {
    let count = scene.layers.iter().filter(|l| l.entrance.is_some()).count();
    if count >= 3 {
        3
    } else if count >= 1 {
        1
    } else {
        0
    }
}

fn stagger_score(scene: &Scene) -> i32 {
    let distinct: HashSet<u32> = scene
        .layers
        .iter()
        .filter_map(|l| l.entrance.as_ref())
        .map(|e| e.delay_ms)
        .collect();
    if distinct.len() >= 3 {
        2
    } else if distinct.len() >= 2 {
        1
    } else {
        0
    }
}

fn video_score(scene: &Scene) -> i32 {
    if scene.layers.iter().any(|l| l.layer_type == LayerType::Video) {
        1
    } else {
        0
    }
}

/// Classifies `motion_energy` from a small additive integer score over
/// camera movement, text animations, entrance staggering, and video
/// presence (spec §4.4).
pub fn classify_motion_energy(scene: &Scene) -> (MotionEnergy, f64) {
    let score = camera_score(scene)
        + animation_score(scene)
        + entrance_score(scene)
        + stagger_score(scene)
        + video_score(scene);

    let energy = match score {
        0 => MotionEnergy::Static,
        1 => MotionEnergy::Subtle,
        2..=5 => MotionEnergy::Moderate,
        _ => MotionEnergy::High,
    };

    let confidence = if score == 0 {
        0.90
    } else {
        (0.50 + 0.08 * score as f64).min(0.95)
    };

    (energy, confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_scene() -> Scene {
        Scene {
            scene_id: "sc_test".into(),
            duration_s: 3.0,
            camera: None,
            shot_grammar: None,
            layout: None,
            assets: vec![],
            layers: vec![],
            metadata: None,
        }
    }

    #[test]
    fn no_motion_is_static_with_high_confidence() {
        let (energy, conf) = classify_motion_energy(&empty_scene());
        assert_eq!(energy, MotionEnergy::Static);
        assert_eq!(conf, 0.90);
    }

    #[test]
    fn strong_camera_push_reads_high_with_scale_cascade() {
        use sizzle_spec::enums::Easing;
        use sizzle_spec::scene::{Camera, Layer};
        let mut scene = empty_scene();
        scene.camera = Some(Camera {
            move_: CameraMove::PushIn,
            intensity: 0.6,
            easing: Easing::CinematicScurve,
        });
        scene.layers.push(Layer {
            id: "t".into(),
            layer_type: LayerType::Text,
            depth_class: sizzle_spec::enums::DepthClass::Foreground,
            asset: None,
            position: None,
            slot: None,
            opacity: 1.0,
            blend_mode: None,
            entrance: None,
            content: Some("hi".into()),
            animation: Some(TextAnimation::ScaleCascade),
            style: Default::default(),
        });
        let (energy, _) = classify_motion_energy(&scene);
        assert_eq!(energy, MotionEnergy::High);
    }
}
