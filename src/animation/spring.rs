//! Closed-form damped spring easing.
//!
//! Progress is the position of a unit mass-spring-damper released at rest from `0` toward `1`,
//! evaluated analytically at `frame / fps` seconds. Nothing is integrated step by step, so any
//! frame can be sampled on its own.

use crate::foundation::core::Fps;
use crate::foundation::error::{TelopError, TelopResult};

/// Default settle threshold used by [`SpringConfig::measure`].
pub const SETTLE_THRESHOLD: f64 = 0.005;

/// Consecutive in-threshold frames required before a spring counts as settled.
const SETTLE_HOLD_FRAMES: u64 = 20;

/// Upper bound on the settle search.
const MAX_SETTLE_FRAMES: u64 = 100_000;

/// Physical spring parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpringConfig {
    /// Damping coefficient (`>= 0`).
    pub damping: f64,
    /// Spring stiffness (`> 0`).
    pub stiffness: f64,
    /// Mass (`> 0`).
    #[serde(default = "one")]
    pub mass: f64,
    /// Clamp progress at `1.0` instead of overshooting.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

fn one() -> f64 {
    1.0
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Spring with the given damping and stiffness, unit mass.
    pub fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            ..Self::default()
        }
    }

    /// Copy with a different mass.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Validate physical parameter ranges.
    pub fn validate(&self) -> TelopResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(TelopError::validation("spring mass must be > 0"));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(TelopError::validation("spring stiffness must be > 0"));
        }
        if !(self.damping.is_finite() && self.damping > 0.0) {
            return Err(TelopError::validation("spring damping must be > 0"));
        }
        Ok(())
    }

    /// Damping ratio `ζ = c / (2·√(k·m))`. Below `1` the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Progress at `secs` seconds after release.
    ///
    /// Negative times are at rest (`0.0`). Underdamped springs (`ζ < 1`) oscillate around `1`
    /// with a decaying envelope; `ζ >= 1` uses the critically damped response.
    pub fn progress_at_secs(&self, secs: f64) -> f64 {
        if !(self.mass > 0.0 && self.stiffness > 0.0) {
            return 1.0;
        }
        let t = secs.max(0.0);
        let omega0 = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio();

        let p = if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            1.0 - envelope * ((omega1 * t).cos() + (zeta * omega0 / omega1) * (omega1 * t).sin())
        } else {
            1.0 - (-omega0 * t).exp() * (1.0 + omega0 * t)
        };

        if self.overshoot_clamping {
            p.min(1.0)
        } else {
            p
        }
    }

    /// Natural settle duration in frames.
    ///
    /// The first frame after which progress stays within `threshold` of `1` for 20 consecutive
    /// frames. The search is bounded.
    pub fn measure(&self, fps: Fps, threshold: f64) -> u64 {
        let off = |frame: u64| (1.0 - spring(frame as f64, fps, self)).abs();

        let mut frame = 0u64;
        while off(frame) >= threshold {
            frame += 1;
            if frame >= MAX_SETTLE_FRAMES {
                return MAX_SETTLE_FRAMES;
            }
        }

        let mut settled_at = frame;
        let mut held = 0;
        while held < SETTLE_HOLD_FRAMES && frame < MAX_SETTLE_FRAMES {
            frame += 1;
            if off(frame) >= threshold {
                held = 0;
                settled_at = frame + 1;
            } else {
                held += 1;
            }
        }
        settled_at
    }
}

/// Spring progress at a (possibly fractional) frame offset from release.
pub fn spring(frame: f64, fps: Fps, config: &SpringConfig) -> f64 {
    config.progress_at_secs(fps.frames_to_secs_f64(frame))
}

/// Spring progress time-stretched so that it settles at `duration_frames`.
///
/// Falls back to the natural curve for a non-positive duration or an instantly settled spring.
pub fn spring_stretched(
    frame: f64,
    fps: Fps,
    config: &SpringConfig,
    duration_frames: f64,
) -> f64 {
    let natural = config.measure(fps, SETTLE_THRESHOLD);
    if duration_frames.is_nan() || duration_frames <= 0.0 || natural == 0 {
        return spring(frame, fps, config);
    }
    spring(frame * natural as f64 / duration_frames, fps, config)
}

/// Per-character stagger: the local clock of character `index` starts `index * stagger_frames`
/// frames late and is held at zero before that.
pub fn stagger_frame(frame: f64, index: usize, stagger_frames: f64) -> f64 {
    (frame - index as f64 * stagger_frames).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
