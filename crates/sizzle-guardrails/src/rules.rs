//! The five per-move checks (spec §4.7 "Checks, per move").

use sizzle_spec::enums::{CameraMove, Verdict};

use crate::rule::{GuardrailFinding, GuardrailRule, MoveContext, PAN_MAX_PX, SCALE_FACTOR};

pub struct SpeedLimitRule;

impl GuardrailRule for SpeedLimitRule {
    fn id(&self) -> &'static str {
        "speed_limit"
    }

    fn check(&self, ctx: &MoveContext) -> Vec<GuardrailFinding> {
        let (key, velocity) = match ctx.camera.move_ {
            CameraMove::Pan => ("pan", ctx.camera.intensity * PAN_MAX_PX / ctx.duration_s),
            CameraMove::PushIn | CameraMove::PushOut => (
                "push_pull",
                ctx.camera.intensity * SCALE_FACTOR * 100.0 / ctx.duration_s,
            ),
            CameraMove::Drift => (
                "drift",
                ctx.camera.intensity * std::f64::consts::TAU / ctx.duration_s,
            ),
            CameraMove::Static | CameraMove::Shake => return Vec::new(),
        };

        match ctx.guardrails.speed_limits.get(key) {
            Some(limit) if velocity > limit.max_velocity => vec![GuardrailFinding::new(
                Verdict::Warn,
                self.id(),
                format!(
                    "{key} velocity {velocity:.2} exceeds max_velocity {}",
                    limit.max_velocity
                ),
            )],
            _ => Vec::new(),
        }
    }
}

pub struct AccelerationRule;

impl GuardrailRule for AccelerationRule {
    fn id(&self) -> &'static str {
        "acceleration"
    }

    fn check(&self, ctx: &MoveContext) -> Vec<GuardrailFinding> {
        if ctx.camera.move_ == CameraMove::Drift {
            return Vec::new();
        }
        let ratio = ctx.camera.easing.deceleration_phase_ratio();
        let minimum = ctx.guardrails.acceleration.deceleration_phase_minimum;
        if ratio < minimum {
            vec![GuardrailFinding::new(
                Verdict::Warn,
                self.id(),
                format!(
                    "{:?} easing decelerates over {:.0}% of the move, below the minimum {:.0}%",
                    ctx.camera.easing,
                    ratio * 100.0,
                    minimum * 100.0
                ),
            )]
        } else {
            Vec::new()
        }
    }
}

pub struct JerkRule;

impl GuardrailRule for JerkRule {
    fn id(&self) -> &'static str {
        "jerk"
    }

    fn check(&self, ctx: &MoveContext) -> Vec<GuardrailFinding> {
        if ctx.camera.move_ != CameraMove::Drift {
            return Vec::new();
        }
        let reversal_ms = ctx.duration_s * 1000.0 / 2.0;
        if reversal_ms < ctx.guardrails.jerk.settling_on_reversal_ms {
            vec![GuardrailFinding::new(
                Verdict::Warn,
                self.id(),
                format!(
                    "drift reversal interval {reversal_ms:.0}ms is below the settling minimum {}ms",
                    ctx.guardrails.jerk.settling_on_reversal_ms
                ),
            )]
        } else {
            Vec::new()
        }
    }
}

pub struct LensBoundsRule;

impl GuardrailRule for LensBoundsRule {
    fn id(&self) -> &'static str {
        "lens_bounds"
    }

    fn check(&self, ctx: &MoveContext) -> Vec<GuardrailFinding> {
        let mut findings = Vec::new();
        let bounds = &ctx.guardrails.lens_bounds;

        if ctx.camera.move_.is_push_or_pull() {
            let scale_factor = 1.0 + ctx.camera.intensity * SCALE_FACTOR;
            if !bounds.scale.contains(scale_factor) {
                findings.push(GuardrailFinding::new(
                    Verdict::Warn,
                    self.id(),
                    format!(
                        "camera scale factor {scale_factor:.2} outside [{}, {}]",
                        bounds.scale.min, bounds.scale.max
                    ),
                ));
            }
        }

        if !bounds.rotation.contains(ctx.shot_grammar_css.rotate_x) {
            findings.push(GuardrailFinding::new(
                Verdict::Warn,
                self.id(),
                format!(
                    "shot grammar rotateX {:.1} outside [{}, {}]",
                    ctx.shot_grammar_css.rotate_x, bounds.rotation.min, bounds.rotation.max
                ),
            ));
        }
        if !bounds.rotation.contains(ctx.shot_grammar_css.rotate_z) {
            findings.push(GuardrailFinding::new(
                Verdict::Warn,
                self.id(),
                format!(
                    "shot grammar rotateZ {:.1} outside [{}, {}]",
                    ctx.shot_grammar_css.rotate_z, bounds.rotation.min, bounds.rotation.max
                ),
            ));
        }

        findings
    }
}

pub struct PersonalityBoundaryRule;

impl GuardrailRule for PersonalityBoundaryRule {
    fn id(&self) -> &'static str {
        "personality_boundary"
    }

    fn check(&self, ctx: &MoveContext) -> Vec<GuardrailFinding> {
        let mut findings = Vec::new();
        let move_ = ctx.camera.move_;

        if let Some(boundary) = ctx.guardrails.personality_boundaries.get(ctx.personality_slug) {
            if boundary.forbids("camera_movement") && move_ != CameraMove::Static {
                findings.push(GuardrailFinding::new(
                    Verdict::Block,
                    self.id(),
                    format!("{} forbids camera_movement, but move is {move_}", ctx.personality_slug),
                ));
            }
            if boundary.forbids("3d_transforms")
                && (ctx.shot_grammar_css.rotate_x != 0.0 || ctx.shot_grammar_css.rotate_z != 0.0)
            {
                findings.push(GuardrailFinding::new(
                    Verdict::Block,
                    self.id(),
                    format!("{} forbids 3d_transforms, but shot grammar applies rotation", ctx.personality_slug),
                ));
            }
            if boundary.forbids("ambient_motion") && move_ == CameraMove::Drift {
                findings.push(GuardrailFinding::new(
                    Verdict::Block,
                    self.id(),
                    format!("{} forbids ambient_motion, but move is drift", ctx.personality_slug),
                ));
            }
            if boundary.forbids("camera_shake") && move_ == CameraMove::Shake {
                findings.push(GuardrailFinding::new(
                    Verdict::Block,
                    self.id(),
                    format!("{} forbids camera_shake, but move is shake", ctx.personality_slug),
                ));
            }

            if move_ == CameraMove::Pan {
                let translate_xy = ctx.camera.intensity * PAN_MAX_PX;
                if let Some(cap) = boundary.max_translate_xy {
                    if translate_xy > cap {
                        findings.push(GuardrailFinding::new(
                            Verdict::Warn,
                            self.id(),
                            format!("pan translate {translate_xy:.1}px exceeds max_translate_xy {cap}"),
                        ));
                    }
                }
            }
            if move_.is_push_or_pull() {
                let scale_change_percent = ctx.camera.intensity * SCALE_FACTOR * 100.0;
                if let Some(cap) = boundary.max_scale_change_percent {
                    if scale_change_percent > cap {
                        findings.push(GuardrailFinding::new(
                            Verdict::Warn,
                            self.id(),
                            format!(
                                "scale change {scale_change_percent:.1}% exceeds max_scale_change_percent {cap}%"
                            ),
                        ));
                    }
                }
            }
        }

        if move_ == CameraMove::Drift {
            let condition = ctx.personality.ambient_condition.as_str();
            if condition.starts_with("never") {
                findings.push(GuardrailFinding::new(
                    Verdict::Block,
                    self.id(),
                    format!("{} ambient_condition is '{condition}'", ctx.personality_slug),
                ));
            } else if condition == "only for scenes >10s" && ctx.duration_s <= 10.0 {
                findings.push(GuardrailFinding::new(
                    Verdict::Warn,
                    self.id(),
                    format!(
                        "drift only permitted for scenes >10s under '{condition}', scene is {:.1}s",
                        ctx.duration_s
                    ),
                ));
            }
        }

        findings
    }
}
