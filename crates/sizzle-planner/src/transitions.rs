//! Stage 3 — transitions: evaluates a style pack's `TransitionsConfig` in
//! fixed priority order for each consecutive scene pair (spec §4.5 Stage 3).

use sizzle_catalog::style_pack::TransitionsConfig;
use sizzle_spec::manifest::TransitionIn;
use sizzle_spec::scene::Scene;

/// Picks the transition going into `curr`, which follows `prev` at sequence
/// position `index` (0-based; the opening scene never gets a transition).
pub fn assign_transition(
    prev: &Scene,
    curr: &Scene,
    index: usize,
    config: &TransitionsConfig,
) -> TransitionIn {
    if let Some(pattern) = &config.pattern {
        if pattern.every_nth > 0 && index % pattern.every_nth as usize == 0 && !pattern.cycle.is_empty() {
            let cycle_pos = (index / pattern.every_nth as usize).saturating_sub(1) % pattern.cycle.len();
            let spec = pattern.cycle[cycle_pos];
            return TransitionIn {
                transition_type: spec.transition_type,
                duration_ms: spec.duration_ms,
            };
        }
    }

    let prev_weight = prev.metadata.as_ref().map(|m| m.visual_weight);
    let curr_weight = curr.metadata.as_ref().map(|m| m.visual_weight);

    if prev_weight.is_some() && prev_weight == curr_weight {
        if let Some(spec) = &config.on_same_weight {
            return TransitionIn {
                transition_type: spec.transition_type,
                duration_ms: spec.duration_ms,
            };
        }
    }

    if prev_weight.is_some() && curr_weight.is_some() && prev_weight != curr_weight {
        if let Some(spec) = &config.on_weight_change {
            return TransitionIn {
                transition_type: spec.transition_type,
                duration_ms: spec.duration_ms,
            };
        }
    }

    let curr_tags = curr.metadata.as_ref().map(|m| m.intent_tags.as_slice()).unwrap_or(&[]);
    if let Some(rule) = config
        .on_intent
        .iter()
        .find(|rule| rule.tags.iter().any(|t| curr_tags.contains(t)))
    {
        return TransitionIn {
            transition_type: rule.transition.transition_type,
            duration_ms: rule.transition.duration_ms,
        };
    }

    TransitionIn {
        transition_type: config.default.transition_type,
        duration_ms: config.default.duration_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizzle_catalog::Catalog;

    fn scene_with_weight(id: &str, weight: sizzle_spec::enums::VisualWeight) -> Scene {
        Scene {
            scene_id: id.into(),
            duration_s: 3.0,
            camera: None,
            shot_grammar: None,
            layout: None,
            assets: vec![],
            layers: vec![],
            metadata: Some(sizzle_spec::scene::SceneMetadata {
                content_type: sizzle_spec::enums::ContentType::ProductShot,
                visual_weight: weight,
                motion_energy: sizzle_spec::enums::MotionEnergy::Moderate,
                intent_tags: vec![],
                shot_grammar: None,
                style_override: None,
                confidence: Default::default(),
            }),
        }
    }

    #[test]
    fn same_weight_pair_uses_on_same_weight_rule() {
        let catalog = Catalog::load_embedded_default();
        let pack = catalog.style_pack("confident-launch").unwrap();
        let prev = scene_with_weight("sc_a", sizzle_spec::enums::VisualWeight::Dark);
        let curr = scene_with_weight("sc_b", sizzle_spec::enums::VisualWeight::Dark);
        let transition = assign_transition(&prev, &curr, 1, &pack.transitions);
        assert_eq!(
            pack.transitions.on_same_weight.map(|s| s.transition_type),
            Some(transition.transition_type)
        );
    }

    #[test]
    fn falls_back_to_default_with_no_signals() {
        let catalog = Catalog::load_embedded_default();
        let pack = catalog.style_pack("confident-launch").unwrap();
        let prev = Scene {
            scene_id: "sc_a".into(),
            duration_s: 3.0,
            camera: None,
            shot_grammar: None,
            layout: None,
            assets: vec![],
            layers: vec![],
            metadata: None,
        };
        let curr = prev.clone();
        let transition = assign_transition(&prev, &curr, 1, &pack.transitions);
        assert_eq!(transition.transition_type, pack.transitions.default.transition_type);
    }
}
