//! Scene Validator (spec §4.2): accumulating, non-throwing checks over a
//! single authored or analyzed `Scene`.

use std::collections::HashSet;

use crate::enums::LayerType;
use crate::error::ValidationResult;
use crate::ids::is_valid_scene_id;
use crate::layout_slots::available_slots;
use crate::scene::Scene;

const MIN_DURATION_S: f64 = 0.5;
const MAX_DURATION_S: f64 = 30.0;

/// Runs every Scene Validator check, accumulating all failures rather than
/// stopping at the first one.
pub fn validate_scene(scene: &Scene) -> ValidationResult {
    let mut result = ValidationResult::success();

    if !is_valid_scene_id(&scene.scene_id) {
        result.add_error(
            format!(
                "scene_id '{}' must match ^sc_[a-z0-9_]+$",
                scene.scene_id
            ),
            "scene_id".to_string(),
        );
    }

    if !(MIN_DURATION_S..=MAX_DURATION_S).contains(&scene.duration_s) {
        result.add_error(
            format!(
                "duration_s {} outside allowed range [{MIN_DURATION_S}, {MAX_DURATION_S}]",
                scene.duration_s
            ),
            "duration_s".to_string(),
        );
    }

    if let Some(camera) = &scene.camera {
        if !(0.0..=1.0).contains(&camera.intensity) {
            result.add_error(
                format!("camera.intensity {} outside [0, 1]", camera.intensity),
                "camera.intensity".to_string(),
            );
        }
    }

    let mut seen_asset_ids = HashSet::new();
    for (i, asset) in scene.assets.iter().enumerate() {
        if !seen_asset_ids.insert(asset.id.as_str()) {
            result.add_error(
                format!("duplicate asset id '{}'", asset.id),
                format!("assets[{i}].id"),
            );
        }
        if asset.src.trim().is_empty() {
            result.add_error("asset src must not be empty".to_string(), format!("assets[{i}].src"));
        }
    }

    let available_slot_names: Option<HashSet<String>> = scene
        .layout
        .as_ref()
        .map(|layout| available_slots(layout.template, &layout.config).into_iter().collect());

    let mut seen_layer_ids = HashSet::new();
    for (i, layer) in scene.layers.iter().enumerate() {
        if !seen_layer_ids.insert(layer.id.as_str()) {
            result.add_error(
                format!("duplicate layer id '{}'", layer.id),
                format!("layers[{i}].id"),
            );
        }

        if !(0.0..=1.0).contains(&layer.opacity) {
            result.add_error(
                format!("layer.opacity {} outside [0, 1]", layer.opacity),
                format!("layers[{i}].opacity"),
            );
        }

        if let Some(asset_id) = &layer.asset {
            if !seen_asset_ids.contains(asset_id.as_str()) {
                result.add_error(
                    format!("layer references unknown asset '{asset_id}'"),
                    format!("layers[{i}].asset"),
                );
            }
        }

        if let Some(slot) = &layer.slot {
            match &available_slot_names {
                Some(slots) if !slots.contains(slot) => {
                    result.add_error(
                        format!("layer references unknown layout slot '{slot}'"),
                        format!("layers[{i}].slot"),
                    );
                }
                None => {
                    result.add_error(
                        "layer declares a slot but scene has no layout".to_string(),
                        format!("layers[{i}].slot"),
                    );
                }
                _ => {}
            }
        }

        if layer.layer_type == LayerType::Text
            && layer.content.as_deref().unwrap_or("").trim().is_empty()
        {
            result.add_error(
                "text layer must declare non-empty content".to_string(),
                format!("layers[{i}].content"),
            );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::DepthClass;
    use crate::scene::Layer;

    fn minimal_scene() -> Scene {
        Scene {
            scene_id: "sc_hero".into(),
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
    fn rejects_bad_scene_id() {
        let mut scene = minimal_scene();
        scene.scene_id = "hero".into();
        let result = validate_scene(&scene);
        assert!(!result.is_ok());
    }

    #[test]
    fn rejects_out_of_range_duration() {
        let mut scene = minimal_scene();
        scene.duration_s = 60.0;
        assert!(!validate_scene(&scene).is_ok());
    }

    #[test]
    fn rejects_duplicate_layer_ids() {
        let mut scene = minimal_scene();
        scene.layers = vec![
            Layer {
                id: "bg".into(),
                layer_type: LayerType::Image,
                depth_class: DepthClass::Background,
                asset: None,
                position: None,
                slot: None,
                opacity: 1.0,
                blend_mode: None,
                entrance: None,
                content: None,
                animation: None,
                style: Default::default(),
            },
            Layer {
                id: "bg".into(),
                layer_type: LayerType::Image,
                depth_class: DepthClass::Midground,
                asset: None,
                position: None,
                slot: None,
                opacity: 1.0,
                blend_mode: None,
                entrance: None,
                content: None,
                animation: None,
                style: Default::default(),
            },
        ];
        assert!(!validate_scene(&scene).is_ok());
    }

    #[test]
    fn accepts_minimal_valid_scene() {
        assert!(validate_scene(&minimal_scene()).is_ok());
    }
}
