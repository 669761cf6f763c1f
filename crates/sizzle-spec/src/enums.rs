//! Fixed enums referenced by the data model (spec §3.3).
//!
//! Each of these is drawn from a closed set declared directly in spec.md,
//! as opposed to the catalog-declared open vocabularies (style pack names,
//! personality slugs) which stay as `String` keys into the catalog's maps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A visual element's role within a scene's z-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthClass {
    Background,
    Midground,
    Foreground,
}

/// The kind of content a layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerType {
    Html,
    Image,
    Video,
    Text,
}

/// Compositing mode for a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    Normal,
    Screen,
    Multiply,
    Overlay,
}

/// Text-layer reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAnimation {
    WordReveal,
    ScaleCascade,
    WeightMorph,
}

/// Abstract layout template name (spec §4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutTemplate {
    HeroCenter,
    SplitPanel,
    MasonryGrid,
    FullBleed,
    DeviceMockup,
}

/// Camera rig movement (spec §4.7 speed/lens tables).
///
/// `Drift` is ambient motion, not a rig movement — see the "drift
/// classification" open question in spec §9: the planner treats it as
/// universally available, guardrails judge it separately via
/// `ambient_motion`/`ambient_condition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMove {
    Static,
    Pan,
    PushIn,
    PushOut,
    Drift,
    Shake,
}

impl CameraMove {
    /// Kebab-case spelling, used to compare against `allowed_movements`
    /// entries in the personality catalog (spec §4.5 Stage 4).
    pub fn as_kebab(&self) -> &'static str {
        match self {
            CameraMove::Static => "static",
            CameraMove::Pan => "pan",
            CameraMove::PushIn => "push-in",
            CameraMove::PushOut => "push-out",
            CameraMove::Drift => "drift",
            CameraMove::Shake => "shake",
        }
    }

    pub fn is_push_or_pull(&self) -> bool {
        matches!(self, CameraMove::PushIn | CameraMove::PushOut)
    }
}

impl fmt::Display for CameraMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_kebab())
    }
}

/// Camera move easing curve (spec §4.7 acceleration table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseOut,
    CinematicScurve,
}

impl Easing {
    /// Fraction of the move's duration spent decelerating, per spec §4.7 #2.
    pub fn deceleration_phase_ratio(&self) -> f64 {
        match self {
            Easing::Linear => 0.0,
            Easing::EaseOut => 0.60,
            Easing::CinematicScurve => 0.50,
        }
    }
}

/// Cut/transition style between two consecutive scenes (spec §6.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionType {
    HardCut,
    Crossfade,
    WhipLeft,
    WhipRight,
    WhipUp,
    WhipDown,
}

/// Overall luminance classification of a scene (spec §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualWeight {
    Dark,
    Light,
    Mixed,
}

/// Perceived movement-intensity bucket (spec §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionEnergy {
    Static,
    Subtle,
    Moderate,
    High,
}

/// What a scene depicts, classified by the Analyzer (spec §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    BrandMark,
    Typography,
    DeviceMockup,
    SplitPanel,
    Collage,
    Moodboard,
    ProductShot,
    Portrait,
    Notification,
    UiScreenshot,
    DataVisualization,
}

/// Narrative-role tag assigned by the Analyzer, consumed by the Planner
/// (spec §4.4, §4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentTag {
    Opening,
    Hero,
    Detail,
    Closing,
    Emotional,
    Informational,
    Transition,
}

/// Shot size axis of shot grammar (spec §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotSize {
    Wide,
    Medium,
    Closeup,
    ExtremeCloseup,
}

impl Default for ShotSize {
    fn default() -> Self {
        ShotSize::Medium
    }
}

/// Camera angle axis of shot grammar (spec §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Angle {
    EyeLevel,
    HighAngle,
    LowAngle,
    BirdsEye,
}

impl Default for Angle {
    fn default() -> Self {
        Angle::EyeLevel
    }
}

/// Subject framing axis of shot grammar (spec §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framing {
    Center,
    OffCenterLeft,
    OffCenterRight,
    Symmetrical,
}

impl Default for Framing {
    fn default() -> Self {
        Framing::Center
    }
}

/// Outcome of a guardrail check (spec §4.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Warn,
    Block,
}

impl Verdict {
    /// Combines two verdicts, keeping the more severe (BLOCK > WARN > PASS).
    pub fn combine(self, other: Verdict) -> Verdict {
        self.max(other)
    }
}

/// Severity of a structured finding emitted by the Evaluator (spec §4.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_move_kebab_case() {
        assert_eq!(CameraMove::PushIn.as_kebab(), "push-in");
        assert_eq!(CameraMove::Drift.as_kebab(), "drift");
    }

    #[test]
    fn verdict_combine_is_dominant() {
        assert_eq!(Verdict::Pass.combine(Verdict::Warn), Verdict::Warn);
        assert_eq!(Verdict::Warn.combine(Verdict::Block), Verdict::Block);
        assert_eq!(Verdict::Block.combine(Verdict::Pass), Verdict::Block);
    }

    #[test]
    fn easing_deceleration_ratios() {
        assert_eq!(Easing::Linear.deceleration_phase_ratio(), 0.0);
        assert_eq!(Easing::EaseOut.deceleration_phase_ratio(), 0.60);
    }
}
