//! Slot-name vocabulary for each layout template (spec §4.2, §4.3).
//!
//! This only names the slots a template declares; turning them into pixel
//! rectangles is `sizzle-layout`'s job. Keeping the name vocabulary here lets
//! the Scene Validator check `layer.slot` references without depending on
//! the (heavier, geometry-only) layout resolver crate.

use std::collections::HashMap;

use crate::enums::LayoutTemplate;

fn config_u64(config: &HashMap<String, serde_json::Value>, key: &str, default: u64) -> u64 {
    config
        .get(key)
        .and_then(|v| v.as_u64())
        .unwrap_or(default)
}

/// Returns the slot names a layout template declares, given its config.
///
/// `masonry-grid`'s cell slots depend on `columns`/`rows` in the config
/// (defaulting to 2x2), so this takes the config rather than just the
/// template tag.
pub fn available_slots(
    template: LayoutTemplate,
    config: &HashMap<String, serde_json::Value>,
) -> Vec<String> {
    match template {
        LayoutTemplate::HeroCenter => vec!["hero".to_string()],
        LayoutTemplate::SplitPanel => vec!["left".to_string(), "right".to_string()],
        LayoutTemplate::MasonryGrid => {
            let columns = config_u64(config, "columns", 2).max(1);
            let rows = config_u64(config, "rows", 2).max(1);
            (0..columns * rows).map(|i| format!("cell_{i}")).collect()
        }
        LayoutTemplate::FullBleed => vec!["media".to_string(), "overlay".to_string()],
        LayoutTemplate::DeviceMockup => vec!["device".to_string(), "content".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masonry_grid_defaults_to_four_cells() {
        let slots = available_slots(LayoutTemplate::MasonryGrid, &HashMap::new());
        assert_eq!(slots.len(), 4);
        assert!(slots.contains(&"cell_0".to_string()));
    }

    #[test]
    fn masonry_grid_honors_config() {
        let mut config = HashMap::new();
        config.insert("columns".to_string(), serde_json::json!(3));
        config.insert("rows".to_string(), serde_json::json!(1));
        let slots = available_slots(LayoutTemplate::MasonryGrid, &config);
        assert_eq!(slots.len(), 3);
    }

    #[test]
    fn hero_center_has_single_slot() {
        assert_eq!(
            available_slots(LayoutTemplate::HeroCenter, &HashMap::new()),
            vec!["hero"]
        );
    }
}
