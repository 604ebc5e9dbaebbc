use crate::animation::interp::Keyframes;
use crate::animation::sample::AnimationSample;
use crate::animation::spring::{SpringConfig, spring, stagger_frame};
use crate::foundation::core::{Fps, Rgb8, Vec2};
use crate::foundation::error::{TelopError, TelopResult};

/// Per-character bounce-in.
///
/// Every character runs its own copy of `spring`, started `stagger_frames` later than the
/// previous one. The spring progress then drives each keyframe track.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BounceSpec {
    pub spring: SpringConfig,
    /// Delay between consecutive characters, frames.
    pub stagger_frames: f64,
    /// Vertical offset in pixels by spring progress.
    pub translate_y: Keyframes<f64>,
    pub scale: Keyframes<f64>,
    /// Rotation in degrees by spring progress.
    pub rotation_deg: Keyframes<f64>,
    pub opacity: Keyframes<f64>,
}

impl Default for BounceSpec {
    fn default() -> Self {
        Self {
            spring: SpringConfig::new(10.0, 300.0).with_mass(0.3),
            stagger_frames: 3.0,
            translate_y: Keyframes::from_pairs([
                (0.0, 20.0),
                (0.3, -30.0),
                (0.6, -10.0),
                (1.0, 0.0),
            ]),
            scale: Keyframes::from_pairs([(0.0, 0.5), (0.5, 1.2), (1.0, 1.0)]),
            rotation_deg: Keyframes::from_pairs([
                (0.0, 0.0),
                (0.3, -10.0),
                (0.6, 5.0),
                (1.0, 0.0),
            ]),
            opacity: Keyframes::from_pairs([(0.0, 0.0), (0.2, 1.0)]),
        }
    }
}

impl BounceSpec {
    pub fn validate(&self) -> TelopResult<()> {
        self.spring.validate()?;
        if !(self.stagger_frames.is_finite() && self.stagger_frames >= 0.0) {
            return Err(TelopError::validation("bounce staggerFrames must be >= 0"));
        }
        self.translate_y.validate()?;
        self.scale.validate()?;
        self.rotation_deg.validate()?;
        self.opacity.validate()?;
        Ok(())
    }

    /// Spring progress of character `char_index` at `frame` frames into its caption.
    pub fn progress(&self, frame: f64, fps: Fps, char_index: usize) -> f64 {
        let local = stagger_frame(frame, char_index, self.stagger_frames);
        spring(local, fps, &self.spring)
    }

    /// Animated state of character `char_index` at `frame` frames into its caption.
    pub fn sample(
        &self,
        frame: f64,
        fps: Fps,
        char_index: usize,
        color: Rgb8,
    ) -> AnimationSample {
        let p = self.progress(frame, fps, char_index);
        AnimationSample {
            position: Vec2::new(0.0, self.translate_y.sample_or_zero(p)),
            scale: self.scale.sample(p).unwrap_or(1.0),
            rotation_deg: self.rotation_deg.sample_or_zero(p),
            opacity: self.opacity.sample(p).unwrap_or(1.0).clamp(0.0, 1.0),
            color,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/bounce.rs"]
mod tests;
