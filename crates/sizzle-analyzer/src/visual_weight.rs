//! Visual weight sub-classifier (spec §4.4).

use sizzle_spec::enums::{LayerType, VisualWeight};
use sizzle_spec::scene::Scene;

use crate::color::{parse_hex_color, relative_luminance};

fn collect_signals(scene: &Scene) -> Vec<f64> {
    let mut signals = Vec::new();
    for layer in &scene.layers {
        match layer.layer_type {
            LayerType::Text => {
                if let Some(color) = layer.style.get("color").and_then(|v| v.as_str()) {
                    if let Some((r, g, b)) = parse_hex_color(color) {
                        // Inverse luminance: white text implies a dark scene.
                        signals.push(1.0 - relative_luminance(r, g, b));
                    }
                }
            }
            LayerType::Html => {
                for value in layer.style.values() {
                    if let Some(s) = value.as_str() {
                        if let Some((r, g, b)) = parse_hex_color(s) {
                            signals.push(relative_luminance(r, g, b));
                        }
                    }
                }
            }
            _ => {}
        }
    }
    signals
}

/// Classifies `visual_weight` from text-foreground and html inline-style
/// colors (spec §4.4).
pub fn classify_visual_weight(scene: &Scene) -> (VisualWeight, f64) {
    let signals = collect_signals(scene);
    if signals.is_empty() {
        return (VisualWeight::Mixed, 0.30);
    }

    let dark_count = signals.iter().filter(|&&l| l < 0.25).count();
    let light_count = signals.iter().filter(|&&l| l > 0.60).count();
    let n = signals.len() as f64;

    let dark_ratio = dark_count as f64 / n;
    let light_ratio = light_count as f64 / n;

    if dark_ratio > 0.70 {
        (VisualWeight::Dark, 0.70 + 0.25 * dark_ratio)
    } else if light_ratio > 0.70 {
        (VisualWeight::Light, 0.70 + 0.25 * light_ratio)
    } else {
        (VisualWeight::Mixed, 0.60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizzle_spec::enums::DepthClass;
    use sizzle_spec::scene::Layer;
    use std::collections::HashMap;

    fn scene_with_text_color(color: &str) -> Scene {
        let mut style = HashMap::new();
        style.insert("color".to_string(), serde_json::json!(color));
        Scene {
            scene_id: "sc_test".into(),
            duration_s: 3.0,
            camera: None,
            shot_grammar: None,
            layout: None,
            assets: vec![],
            layers: vec![Layer {
                id: "t1".into(),
                layer_type: LayerType::Text,
                depth_class: DepthClass::Foreground,
                asset: None,
                position: None,
                slot: None,
                opacity: 1.0,
                blend_mode: None,
                entrance: None,
                content: Some("Hello".into()),
                animation: None,
                style,
            }],
            metadata: None,
        }
    }

    #[test]
    fn white_text_reads_dark() {
        let scene = scene_with_text_color("#ffffff");
        let (weight, conf) = classify_visual_weight(&scene);
        assert_eq!(weight, VisualWeight::Dark);
        assert!(conf > 0.70);
    }

    #[test]
    fn dark_text_reads_light() {
        let scene = scene_with_text_color("#000000");
        let (weight, _) = classify_visual_weight(&scene);
        assert_eq!(weight, VisualWeight::Light);
    }

    #[test]
    fn no_signals_is_mixed() {
        let mut scene = scene_with_text_color("#ffffff");
        scene.layers[0].style.clear();
        let (weight, conf) = classify_visual_weight(&scene);
        assert_eq!(weight, VisualWeight::Mixed);
        assert_eq!(conf, 0.30);
    }
}
