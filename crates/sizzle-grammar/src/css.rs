//! `resolveShotGrammarCSS` (spec §4.6).

use serde::{Deserialize, Serialize};

use sizzle_catalog::Personality;
use sizzle_spec::scene::ShotGrammarAxes;

/// CSS properties a shot-grammar axis triple resolves to, post-processed
/// against a personality's `max_scale` and 3D flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotGrammarCss {
    pub scale: f64,
    pub perspective_origin: String,
    pub rotate_x: f64,
    pub rotate_z: f64,
    pub transform_origin: String,
}

/// Resolves shot-grammar axes to CSS, clamping `scale` to the personality's
/// `max_scale` and suppressing all rotation (forcing a centered perspective
/// origin) when the personality disables 3D.
pub fn resolve_shot_grammar_css(
    axes: ShotGrammarAxes,
    personality: &Personality,
    catalog: &sizzle_catalog::ShotGrammarCatalog,
) -> ShotGrammarCss {
    let size_css = catalog
        .shot_size
        .get(&axes.shot_size)
        .copied()
        .unwrap_or(sizzle_catalog::ShotSizeCss { scale: 1.0 });
    let angle_css = catalog
        .angle
        .get(&axes.angle)
        .copied()
        .unwrap_or(sizzle_catalog::AngleCss { rotate_x: 0.0 });
    let framing_css = catalog
        .framing
        .get(&axes.framing)
        .cloned()
        .unwrap_or(sizzle_catalog::FramingCss {
            transform_origin: "50% 50%".to_string(),
            rotate_z: 0.0,
        });

    let scale = size_css.scale.min(personality.max_scale);

    if personality.use_3d_rotation {
        ShotGrammarCss {
            scale,
            perspective_origin: framing_css.transform_origin.clone(),
            rotate_x: angle_css.rotate_x,
            rotate_z: framing_css.rotate_z,
            transform_origin: framing_css.transform_origin,
        }
    } else {
        ShotGrammarCss {
            scale,
            perspective_origin: "50% 50%".to_string(),
            rotate_x: 0.0,
            rotate_z: 0.0,
            transform_origin: framing_css.transform_origin,
        }
    }
}

