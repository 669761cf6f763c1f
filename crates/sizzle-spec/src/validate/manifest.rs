//! Manifest Validator (spec §3.3): accumulating checks over a planned
//! `SequenceManifest`, including cross-references into the scene set it
//! was planned from.

use std::collections::HashSet;

use crate::error::ValidationResult;
use crate::ids::is_valid_sequence_id;
use crate::manifest::SequenceManifest;

const MIN_DURATION_S: f64 = 0.5;
const MAX_DURATION_S: f64 = 30.0;

/// Validates a manifest against the set of scene ids it was assembled from.
///
/// `known_scene_ids` lets the Planner (and anyone re-checking a manifest
/// later) catch a `scenes[].scene` entry that doesn't resolve, without this
/// crate needing to depend on wherever scenes are loaded from.
pub fn validate_manifest(
    manifest: &SequenceManifest,
    known_scene_ids: &HashSet<&str>,
) -> ValidationResult {
    let mut result = ValidationResult::success();

    if !is_valid_sequence_id(&manifest.sequence_id) {
        result.add_error(
            format!(
                "sequence_id '{}' must match ^seq_[a-z0-9_]+$",
                manifest.sequence_id
            ),
            "sequence_id".to_string(),
        );
    }

    if manifest.scenes.is_empty() {
        result.add_error(
            "sequence must contain at least one scene".to_string(),
            "scenes".to_string(),
        );
    }

    if manifest.resolution.w == 0 || manifest.resolution.h == 0 {
        result.add_error(
            "resolution width and height must be positive".to_string(),
            "resolution".to_string(),
        );
    }

    for (i, entry) in manifest.scenes.iter().enumerate() {
        if !known_scene_ids.contains(entry.scene.as_str()) {
            result.add_error(
                format!("references unknown scene '{}'", entry.scene),
                format!("scenes[{i}].scene"),
            );
        }

        if !(MIN_DURATION_S..=MAX_DURATION_S).contains(&entry.duration_s) {
            result.add_error(
                format!(
                    "duration_s {} outside allowed range [{MIN_DURATION_S}, {MAX_DURATION_S}]",
                    entry.duration_s
                ),
                format!("scenes[{i}].duration_s"),
            );
        }

        if let Some(transition) = &entry.transition_in {
            if transition.duration_ms > 2000 {
                result.add_error(
                    format!(
                        "transition_in.duration_ms {} outside allowed range [0, 2000]",
                        transition.duration_ms
                    ),
                    format!("scenes[{i}].transition_in.duration_ms"),
                );
            }
        }

        if let Some(camera_override) = &entry.camera_override {
            if !(0.0..=1.0).contains(&camera_override.intensity) {
                result.add_error(
                    format!(
                        "camera_override.intensity {} outside [0, 1]",
                        camera_override.intensity
                    ),
                    format!("scenes[{i}].camera_override.intensity"),
                );
            }
        }
    }

    result
}
