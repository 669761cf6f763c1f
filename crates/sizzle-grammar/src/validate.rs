//! `validateShotGrammar` (spec §4.6): corrects axes outside a personality's
//! allowed sets, reporting a human-readable correction per axis changed.

use sizzle_catalog::Personality;
use sizzle_spec::enums::{Angle, Framing, ShotSize};
use sizzle_spec::scene::ShotGrammarAxes;

pub fn validate_shot_grammar(
    axes: ShotGrammarAxes,
    personality: &Personality,
) -> (ShotGrammarAxes, Vec<String>) {
    let mut corrections = Vec::new();
    let mut corrected = axes;

    if !personality.allowed_shot_sizes.contains(&corrected.shot_size) {
        corrections.push(format!(
            "shot_size '{:?}' not allowed for this personality, falling back to medium",
            corrected.shot_size
        ));
        corrected.shot_size = ShotSize::Medium;
    }

    if !personality.allowed_angles.contains(&corrected.angle) {
        corrections.push(format!(
            "angle '{:?}' not allowed for this personality, falling back to eye_level",
            corrected.angle
        ));
        corrected.angle = Angle::EyeLevel;
    }

    if !personality.allowed_framings.contains(&corrected.framing) {
        corrections.push(format!(
            "framing '{:?}' not allowed for this personality, falling back to center",
            corrected.framing
        ));
        corrected.framing = Framing::Center;
    }

    (corrected, corrections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizzle_catalog::Catalog;

    #[test]
    fn falls_back_to_medium_when_disallowed() {
        let catalog = Catalog::load_embedded_default();
        let personality = catalog.personality("restrained-editorial").unwrap();
        let axes = ShotGrammarAxes {
            shot_size: ShotSize::ExtremeCloseup,
            angle: Angle::EyeLevel,
            framing: Framing::Center,
        };
        let (corrected, corrections) = validate_shot_grammar(axes, personality);
        assert_eq!(corrected.shot_size, ShotSize::Medium);
        assert_eq!(corrections.len(), 1);
    }

    #[test]
    fn passes_through_when_already_allowed() {
        let catalog = Catalog::load_embedded_default();
        let personality = catalog.personality("restrained-editorial").unwrap();
        let axes = ShotGrammarAxes {
            shot_size: ShotSize::Medium,
            angle: Angle::EyeLevel,
            framing: Framing::Center,
        };
        let (corrected, corrections) = validate_shot_grammar(axes, personality);
        assert_eq!(corrected, axes);
        assert!(corrections.is_empty());
    }
}
