//! `classifyShotGrammar` (spec §4.4, §4.6): each axis is classified
//! independently via priority-ordered rules, falling back in order from
//! layout/content-type signal down to a neutral default.

use sizzle_catalog::ShotGrammarCatalog;
use sizzle_spec::enums::{Angle, ContentType, Framing, IntentTag, ShotSize};
use sizzle_spec::scene::{Scene, ShotGrammarAxes};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotGrammarConfidence {
    pub shot_size: f64,
    pub angle: f64,
    pub framing: f64,
}

/// Classifies `{shot_size, angle, framing}` from a scene plus its
/// already-computed `content_type`/`intent_tags` (those sub-classifiers run
/// first in the Analyzer's pipeline).
pub fn classify_shot_grammar(
    scene: &Scene,
    content_type: ContentType,
    intent_tags: &[IntentTag],
    catalog: &ShotGrammarCatalog,
) -> (ShotGrammarAxes, ShotGrammarConfidence) {
    let (shot_size, size_conf) = classify_size(scene, content_type, catalog);
    let (angle, angle_conf) = classify_angle(intent_tags, content_type);
    let (framing, framing_conf) = classify_framing(scene, intent_tags);

    (
        ShotGrammarAxes { shot_size, angle, framing },
        ShotGrammarConfidence {
            shot_size: size_conf,
            angle: angle_conf,
            framing: framing_conf,
        },
    )
}

fn classify_size(scene: &Scene, content_type: ContentType, catalog: &ShotGrammarCatalog) -> (ShotSize, f64) {
    use sizzle_spec::enums::LayoutTemplate::*;
    if let Some(layout) = &scene.layout {
        let by_template = match layout.template {
            HeroCenter => Some(ShotSize::Closeup),
            SplitPanel => Some(ShotSize::Wide),
            MasonryGrid => Some(ShotSize::Wide),
            FullBleed => Some(ShotSize::Medium),
            DeviceMockup => Some(ShotSize::Medium),
        };
        if let Some(size) = by_template {
            return (size, 0.80);
        }
    }

    if let Some(size) = catalog.content_type_size_affinity.get(&content_type) {
        return (*size, 0.65);
    }

    let foreground_count = scene.foreground_layers().count();
    let size = if foreground_count >= 3 {
        ShotSize::Wide
    } else if foreground_count == 2 {
        ShotSize::Medium
    } else {
        ShotSize::Closeup
    };
    (size, 0.40)
}

fn classify_angle(intent_tags: &[IntentTag], content_type: ContentType) -> (Angle, f64) {
    if intent_tags.contains(&IntentTag::Emotional) {
        return (Angle::LowAngle, 0.70);
    }
    if intent_tags.contains(&IntentTag::Hero) {
        return (Angle::LowAngle, 0.65);
    }
    if intent_tags.contains(&IntentTag::Informational) {
        return (Angle::HighAngle, 0.60);
    }

    match content_type {
        ContentType::DataVisualization | ContentType::UiScreenshot => (Angle::HighAngle, 0.55),
        ContentType::Portrait => (Angle::EyeLevel, 0.60),
        _ => (Angle::EyeLevel, 0.30),
    }
}

fn classify_framing(scene: &Scene, intent_tags: &[IntentTag]) -> (Framing, f64) {
    use sizzle_spec::enums::LayoutTemplate::*;
    if let Some(layout) = &scene.layout {
        let by_template = match layout.template {
            SplitPanel => Some(Framing::OffCenterLeft),
            DeviceMockup => Some(Framing::OffCenterRight),
            MasonryGrid => Some(Framing::Symmetrical),
            _ => None,
        };
        if let Some(framing) = by_template {
            return (framing, 0.70);
        }
    }

    if intent_tags.contains(&IntentTag::Opening) || intent_tags.contains(&IntentTag::Closing) {
        return (Framing::Symmetrical, 0.55);
    }

    (Framing::Center, 0.30)
}
