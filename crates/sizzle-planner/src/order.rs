//! Stage 1 — shot order: intent-bucket assembly with variety
//! post-processing (spec §4.5 Stage 1).

use sizzle_spec::enums::IntentTag;
use sizzle_spec::scene::Scene;

const BUCKET_PRIORITY: &[IntentTag] = &[
    IntentTag::Closing,
    IntentTag::Opening,
    IntentTag::Hero,
    IntentTag::Emotional,
    IntentTag::Detail,
    IntentTag::Informational,
    IntentTag::Transition,
];

fn highest_priority_tag(scene: &Scene) -> Option<IntentTag> {
    let tags = scene.metadata.as_ref().map(|m| m.intent_tags.as_slice()).unwrap_or(&[]);
    BUCKET_PRIORITY.iter().copied().find(|p| tags.contains(p))
}

fn intent_confidence(scene: &Scene) -> f64 {
    scene.metadata.as_ref().map(|m| m.confidence.intent_tags).unwrap_or(0.0)
}

/// Orders scenes by intent bucket, then applies the bounded variety sweep
/// (spec §4.5 Stage 1, steps 1-3). Returns the reordered scene list.
pub fn order_scenes(scenes: &[Scene]) -> Vec<Scene> {
    let mut closing = Vec::new();
    let mut opening = Vec::new();
    let mut hero = Vec::new();
    let mut emotional = Vec::new();
    let mut detail = Vec::new();
    let mut informational = Vec::new();
    let mut transition = Vec::new();
    let mut untagged = Vec::new();

    for scene in scenes {
        match highest_priority_tag(scene) {
            Some(IntentTag::Closing) => closing.push(scene.clone()),
            Some(IntentTag::Opening) => opening.push(scene.clone()),
            Some(IntentTag::Hero) => hero.push(scene.clone()),
            Some(IntentTag::Emotional) => emotional.push(scene.clone()),
            Some(IntentTag::Detail) => detail.push(scene.clone()),
            Some(IntentTag::Informational) => informational.push(scene.clone()),
            Some(IntentTag::Transition) => transition.push(scene.clone()),
            None => untagged.push(scene.clone()),
        }
    }

    for bucket in [&mut closing, &mut opening, &mut hero, &mut emotional, &mut detail, &mut informational, &mut transition, &mut untagged] {
        bucket.sort_by(|a, b| intent_confidence(b).partial_cmp(&intent_confidence(a)).unwrap());
    }

    let mut middle = Vec::new();
    middle.extend(detail);
    middle.extend(informational);
    middle.extend(transition);
    middle.extend(untagged);

    let interleaved = interleave_emotional(middle, emotional);

    let mut ordered = Vec::new();
    ordered.extend(opening);
    ordered.extend(hero);
    ordered.extend(interleaved);
    ordered.extend(closing);

    variety_sweep(ordered)
}

fn interleave_emotional(middle: Vec<Scene>, emotional: Vec<Scene>) -> Vec<Scene> {
    if emotional.is_empty() {
        return middle;
    }
    let interval = (middle.len() / (emotional.len() + 1)).max(1);
    let mut result = Vec::with_capacity(middle.len() + emotional.len());
    let mut emotional_iter = emotional.into_iter();
    for (i, scene) in middle.into_iter().enumerate() {
        result.push(scene);
        if (i + 1) % interval == 0 {
            if let Some(e) = emotional_iter.next() {
                result.push(e);
            }
        }
    }
    result.extend(emotional_iter);
    result
}

fn content_type_of(scene: &Scene) -> Option<sizzle_spec::enums::ContentType> {
    scene.metadata.as_ref().map(|m| m.content_type)
}

fn visual_weight_of(scene: &Scene) -> Option<sizzle_spec::enums::VisualWeight> {
    scene.metadata.as_ref().map(|m| m.visual_weight)
}

fn motion_energy_of(scene: &Scene) -> Option<sizzle_spec::enums::MotionEnergy> {
    scene.metadata.as_ref().map(|m| m.motion_energy)
}

/// Bounded-look-ahead variety post-processing (spec §4.5 Stage 1 step 3).
fn variety_sweep(mut scenes: Vec<Scene>) -> Vec<Scene> {
    // No two adjacent scenes share a content_type.
    let mut i = 0;
    while i + 1 < scenes.len() {
        if content_type_of(&scenes[i]) == content_type_of(&scenes[i + 1]) {
            let window_end = (i + 4).min(scenes.len());
            if let Some(swap_with) = ((i + 2)..window_end)
                .find(|&j| content_type_of(&scenes[j]) != content_type_of(&scenes[i]))
            {
                scenes.swap(i + 1, swap_with);
            }
        }
        i += 1;
    }

    // No 3+ consecutive scenes share a visual_weight.
    let mut i = 0;
    while i + 2 < scenes.len() {
        if visual_weight_of(&scenes[i]) == visual_weight_of(&scenes[i + 1])
            && visual_weight_of(&scenes[i + 1]) == visual_weight_of(&scenes[i + 2])
        {
            let window_end = (i + 6).min(scenes.len());
            if let Some(swap_with) = ((i + 3)..window_end)
                .find(|&j| visual_weight_of(&scenes[j]) != visual_weight_of(&scenes[i + 2]))
            {
                scenes.swap(i + 2, swap_with);
            }
        }
        i += 1;
    }

    // Energy arc: don't open on a high-energy scene unless it's tagged
    // hero/opening.
    if let Some(first) = scenes.first() {
        let is_high = motion_energy_of(first) == Some(sizzle_spec::enums::MotionEnergy::High);
        let tagged_hero_or_opening = first
            .metadata
            .as_ref()
            .map(|m| m.intent_tags.contains(&IntentTag::Hero) || m.intent_tags.contains(&IntentTag::Opening))
            .unwrap_or(false);
        if is_high && !tagged_hero_or_opening {
            let window_end = 4.min(scenes.len());
            if let Some(swap_with) = (1..window_end).find(|&j| {
                matches!(
                    motion_energy_of(&scenes[j]),
                    Some(sizzle_spec::enums::MotionEnergy::Moderate)
                        | Some(sizzle_spec::enums::MotionEnergy::Subtle)
                        | Some(sizzle_spec::enums::MotionEnergy::Static)
                )
            }) {
                scenes.swap(0, swap_with);
            }
        }
    }

    scenes
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizzle_spec::enums::{ContentType, IntentTag, MotionEnergy, VisualWeight};
    use sizzle_spec::scene::{Confidence, SceneMetadata};

    fn tagged_scene(id: &str, content_type: ContentType, tags: Vec<IntentTag>) -> Scene {
        Scene {
            scene_id: id.to_string(),
            duration_s: 3.0,
            camera: None,
            shot_grammar: None,
            layout: None,
            assets: vec![],
            layers: vec![],
            metadata: Some(SceneMetadata {
                content_type,
                visual_weight: VisualWeight::Mixed,
                motion_energy: MotionEnergy::Moderate,
                intent_tags: tags,
                shot_grammar: None,
                style_override: None,
                confidence: Confidence {
                    content_type: 0.8,
                    visual_weight: 0.8,
                    motion_energy: 0.8,
                    intent_tags: 0.8,
                },
            }),
        }
    }

    #[test]
    fn swaps_adjacent_same_content_type() {
        let scenes = vec![
            tagged_scene("sc_a", ContentType::UiScreenshot, vec![IntentTag::Detail]),
            tagged_scene("sc_b", ContentType::UiScreenshot, vec![IntentTag::Detail]),
            tagged_scene("sc_c", ContentType::Typography, vec![IntentTag::Detail]),
            tagged_scene("sc_d", ContentType::Portrait, vec![IntentTag::Detail]),
        ];
        let ordered = order_scenes(&scenes);
        assert_ne!(
            content_type_of(&ordered[0]),
            content_type_of(&ordered[1])
        );
    }

    #[test]
    fn opening_and_closing_bookend_the_sequence() {
        let scenes = vec![
            tagged_scene("sc_mid", ContentType::ProductShot, vec![IntentTag::Detail]),
            tagged_scene("sc_open", ContentType::BrandMark, vec![IntentTag::Opening]),
            tagged_scene("sc_close", ContentType::BrandMark, vec![IntentTag::Closing]),
        ];
        let ordered = order_scenes(&scenes);
        assert_eq!(ordered.first().unwrap().scene_id, "sc_open");
        assert_eq!(ordered.last().unwrap().scene_id, "sc_close");
    }
}
