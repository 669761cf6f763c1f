//! Content type sub-classifier (spec §4.4): layout template wins first,
//! then composition rules, then a low-confidence fallback.

use sizzle_spec::enums::{ContentType, LayerType, LayoutTemplate};
use sizzle_spec::layout_slots::available_slots;
use sizzle_spec::scene::Scene;

fn haystack(scene: &Scene) -> String {
    let mut text = scene.scene_id.to_lowercase();
    for layer in &scene.layers {
        if let Some(content) = &layer.content {
            text.push(' ');
            text.push_str(&content.to_lowercase());
        }
    }
    text
}

fn by_layout_template(scene: &Scene) -> Option<(ContentType, f64)> {
    let layout = scene.layout.as_ref()?;
    match layout.template {
        LayoutTemplate::DeviceMockup => Some((ContentType::DeviceMockup, 0.95)),
        LayoutTemplate::SplitPanel => Some((ContentType::SplitPanel, 0.95)),
        LayoutTemplate::MasonryGrid => {
            let slots = available_slots(layout.template, &layout.config);
            if slots.len() >= 4 {
                Some((ContentType::Collage, 0.90))
            } else {
                Some((ContentType::Moodboard, 0.85))
            }
        }
        LayoutTemplate::FullBleed => Some((ContentType::ProductShot, 0.85)),
        LayoutTemplate::HeroCenter => {
            let foreground: Vec<_> = scene.foreground_layers().collect();
            if foreground.len() == 1 && foreground[0].layer_type == LayerType::Text {
                let words = foreground[0]
                    .content
                    .as_deref()
                    .unwrap_or("")
                    .split_whitespace()
                    .count();
                if words <= 2 {
                    Some((ContentType::BrandMark, 0.80))
                } else {
                    Some((ContentType::Typography, 0.90))
                }
            } else {
                None
            }
        }
    }
}

fn by_composition(scene: &Scene) -> Option<(ContentType, f64)> {
    let foreground: Vec<_> = scene.foreground_layers().collect();
    let background: Vec<_> = scene.background_layers().collect();
    let has_text = scene.layers.iter().any(|l| l.layer_type == LayerType::Text);
    let text = haystack(scene);

    if !foreground.is_empty()
        && foreground.iter().all(|l| l.layer_type == LayerType::Text)
        && background
            .iter()
            .all(|l| matches!(l.layer_type, LayerType::Html | LayerType::Video))
    {
        return Some((ContentType::Typography, 0.90));
    }

    let video_background = background.iter().any(|l| l.layer_type == LayerType::Video);
    let foreground_text_or_html = !foreground.is_empty()
        && foreground
            .iter()
            .all(|l| matches!(l.layer_type, LayerType::Text | LayerType::Html));

    if video_background && foreground_text_or_html && text.contains("portrait") {
        return Some((ContentType::Portrait, 0.75));
    }

    if foreground.len() == 1 && foreground[0].layer_type == LayerType::Html {
        if text.contains("brand") || text.contains("logo") {
            return Some((ContentType::BrandMark, 0.80));
        }
        if text.contains("notif") {
            return Some((ContentType::Notification, 0.80));
        }
    }

    let image_layers: Vec<_> = scene
        .layers
        .iter()
        .filter(|l| l.layer_type == LayerType::Image)
        .collect();
    if !image_layers.is_empty()
        && (text.contains("ui") || text.contains("screen") || text.contains("app"))
    {
        return Some((ContentType::UiScreenshot, 0.70));
    }

    if image_layers.len() >= 2 && !has_text {
        return Some((ContentType::Moodboard, 0.65));
    }

    if video_background && foreground.iter().any(|l| l.layer_type == LayerType::Text) {
        return Some((ContentType::ProductShot, 0.50));
    }

    None
}

/// Classifies `content_type` (spec §4.4).
pub fn classify_content_type(scene: &Scene) -> (ContentType, f64) {
    by_layout_template(scene)
        .or_else(|| by_composition(scene))
        .unwrap_or((ContentType::UiScreenshot, 0.20))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizzle_spec::enums::DepthClass;
    use sizzle_spec::scene::{Layer, Layout};

    fn hero_scene_with_text(content: &str) -> Scene {
        Scene {
            scene_id: "sc_hero".into(),
            duration_s: 3.0,
            camera: None,
            shot_grammar: None,
            layout: Some(Layout {
                template: LayoutTemplate::HeroCenter,
                config: Default::default(),
            }),
            assets: vec![],
            layers: vec![Layer {
                id: "t".into(),
                layer_type: LayerType::Text,
                depth_class: DepthClass::Foreground,
                asset: None,
                position: None,
                slot: None,
                opacity: 1.0,
                blend_mode: None,
                entrance: None,
                content: Some(content.to_string()),
                animation: None,
                style: Default::default(),
            }],
            metadata: None,
        }
    }

    #[test]
    fn short_hero_text_is_brand_mark() {
        let (ct, conf) = classify_content_type(&hero_scene_with_text("HELLO"));
        assert_eq!(ct, ContentType::BrandMark);
        assert_eq!(conf, 0.80);
    }

    #[test]
    fn long_hero_text_is_typography() {
        let (ct, conf) = classify_content_type(&hero_scene_with_text("Launching into a new era"));
        assert_eq!(ct, ContentType::Typography);
        assert_eq!(conf, 0.90);
    }

    #[test]
    fn device_mockup_layout_wins() {
        let mut scene = hero_scene_with_text("x");
        scene.layout = Some(Layout {
            template: LayoutTemplate::DeviceMockup,
            config: Default::default(),
        });
        let (ct, _) = classify_content_type(&scene);
        assert_eq!(ct, ContentType::DeviceMockup);
    }

    #[test]
    fn no_signals_falls_back_to_ui_screenshot() {
        let mut scene = hero_scene_with_text("x");
        scene.layout = None;
        scene.layers.clear();
        let (ct, conf) = classify_content_type(&scene);
        assert_eq!(ct, ContentType::UiScreenshot);
        assert_eq!(conf, 0.20);
    }
}
