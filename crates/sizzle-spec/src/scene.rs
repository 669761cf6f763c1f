//! Scene types (spec §3.1, §6.1): the authored unit of imagery.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::enums::{
    Angle, BlendMode, CameraMove, ContentType, DepthClass, Easing, Framing, IntentTag, LayerType,
    LayoutTemplate, MotionEnergy, ShotSize, TextAnimation, VisualWeight,
};

/// A named media reference declared on a scene (spec §3.1, §6.1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<AssetTrim>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub muted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetTrim {
    pub start_s: f64,
    pub end_s: f64,
}

/// Pixel rectangle, either authored directly or produced by the layout
/// resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

/// Entrance timing for a layer (spec §3.1).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Entrance {
    #[serde(default)]
    pub delay_ms: u32,
}

/// A single visual element within a scene (spec §3.1, §6.1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: String,
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    pub depth_class: DepthClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Rect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance: Option<Entrance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<TextAnimation>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub style: HashMap<String, serde_json::Value>,
}

fn default_opacity() -> f64 {
    1.0
}

/// Camera directive authored on a scene (spec §3.1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    #[serde(rename = "move")]
    pub move_: CameraMove,
    pub intensity: f64,
    pub easing: Easing,
}

/// Shot grammar axes — authored, classified, or validated (spec §3.1, §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShotGrammarAxes {
    pub shot_size: ShotSize,
    pub angle: Angle,
    pub framing: Framing,
}

/// Abstract layout assignment for a scene (spec §4.3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub template: LayoutTemplate,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub config: HashMap<String, serde_json::Value>,
}

/// Per-field confidence scores attached alongside analyzer metadata
/// (spec §3.1, all values in `[0, 1]`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Confidence {
    pub content_type: f64,
    pub visual_weight: f64,
    pub motion_energy: f64,
    pub intent_tags: f64,
}

/// Computed (or manually overridden) scene classification (spec §3.1, §4.4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub content_type: ContentType,
    pub visual_weight: VisualWeight,
    pub motion_energy: MotionEnergy,
    #[serde(default)]
    pub intent_tags: Vec<IntentTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_grammar: Option<ShotGrammarAxes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_override: Option<String>,
    #[serde(rename = "_confidence")]
    pub confidence: Confidence,
}

/// The authored unit of imagery (spec §3.1, §6.1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub scene_id: String,
    pub duration_s: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<Camera>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_grammar: Option<ShotGrammarAxes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SceneMetadata>,
}

impl Scene {
    /// Layers in front-to-back presentation order (foreground first),
    /// matching the scan order most Analyzer rules rely on.
    pub fn foreground_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers
            .iter()
            .filter(|l| l.depth_class == DepthClass::Foreground)
    }

    pub fn background_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers
            .iter()
            .filter(|l| l.depth_class == DepthClass::Background)
    }

    pub fn asset_ids(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(|a| a.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let scene = Scene {
            scene_id: "sc_hero".into(),
            duration_s: 3.0,
            camera: Some(Camera {
                move_: CameraMove::PushIn,
                intensity: 0.3,
                easing: Easing::CinematicScurve,
            }),
            shot_grammar: None,
            layout: None,
            assets: vec![],
            layers: vec![],
            metadata: None,
        };
        let json = serde_json::to_string(&scene).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, back);
        assert!(json.contains("\"move\":\"push_in\""));
    }

    #[test]
    fn default_opacity_is_one() {
        let json = r#"{"id":"bg","type":"image","depth_class":"background"}"#;
        let layer: Layer = serde_json::from_str(json).unwrap();
        assert_eq!(layer.opacity, 1.0);
    }
}
