//! Personality catalog entries (spec §3.1).

use serde::{Deserialize, Serialize};

use sizzle_spec::enums::{Angle, Framing, ShotSize};

/// The expressive contract a style pack operates under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    /// Kebab-case camera move names allowed by the planner for this
    /// personality (compared against `CameraMove::as_kebab`).
    pub allowed_movements: Vec<String>,
    pub allowed_shot_sizes: Vec<ShotSize>,
    pub allowed_angles: Vec<Angle>,
    pub allowed_framings: Vec<Framing>,
    pub max_scale: f64,
    pub use_3d_rotation: bool,
    /// Free-form guardrail condition string, e.g. `"always"`,
    /// `"never — scenes too short (2-4s)"`, `"only for scenes >10s"`.
    pub ambient_condition: String,
    pub loop_time_range: (f64, f64),
}

impl Personality {
    pub fn allows_movement(&self, move_kebab: &str) -> bool {
        self.allowed_movements.iter().any(|m| m == move_kebab)
    }
}
