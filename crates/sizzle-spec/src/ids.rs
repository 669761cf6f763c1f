//! Stable-identifier regex constraints (spec §3.3).

use regex::Regex;
use std::sync::OnceLock;

fn scene_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^sc_[a-z0-9_]+$").unwrap())
}

fn sequence_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^seq_[a-z0-9_]+$").unwrap())
}

pub fn is_valid_scene_id(id: &str) -> bool {
    scene_id_re().is_match(id)
}

pub fn is_valid_sequence_id(id: &str) -> bool {
    sequence_id_re().is_match(id)
}

/// Derives a `sc_<snake_case>` scene id from a filename stem (spec §6.4:
/// "deriving `scene_id` from filename if missing").
pub fn scene_id_from_filename(stem: &str) -> String {
    let snake: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if snake.starts_with("sc_") {
        snake
    } else {
        format!("sc_{snake}")
    }
}
