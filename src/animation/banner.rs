//! News-flash banner motion: slide-in, fade-in and background color pulse.

use crate::animation::fade::fade_in_opacity;
use crate::animation::interp::interpolate;
use crate::animation::pulse::pulse_color;
use crate::animation::spring::{SpringConfig, spring, spring_stretched};
use crate::foundation::core::{Fps, Rgb8};
use crate::foundation::error::{TelopError, TelopResult};

/// Animation parameters of the news-flash banner.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsFlashAnimation {
    pub enable_slide_in: bool,
    /// Horizontal start position, pixels. Negative values start off-screen.
    pub slide_in_from_x: f64,
    pub slide_in_to_x: f64,
    pub slide_in_start_frame: f64,
    /// Frame the slide should settle at. Only read when `stretch_slide_to_end_frame` is set,
    /// and ignored unless after `slide_in_start_frame`.
    pub slide_in_end_frame: f64,
    /// Time-stretch the slide spring to settle at `slide_in_end_frame` instead of following
    /// its natural settle time.
    #[serde(default)]
    pub stretch_slide_to_end_frame: bool,
    pub enable_color_pulse: bool,
    pub pulse_colors: Vec<Rgb8>,
    pub pulse_frames_per_color: u64,
    /// Fade-in length, milliseconds.
    #[serde(rename = "fadeInDuration")]
    pub fade_in_duration_ms: f64,
    #[serde(default = "slide_spring")]
    pub spring: SpringConfig,
}

fn slide_spring() -> SpringConfig {
    SpringConfig::new(200.0, 100.0)
}

impl Default for NewsFlashAnimation {
    fn default() -> Self {
        Self {
            enable_slide_in: true,
            slide_in_from_x: -500.0,
            slide_in_to_x: 15.0,
            slide_in_start_frame: 0.0,
            slide_in_end_frame: 18.0,
            stretch_slide_to_end_frame: false,
            enable_color_pulse: true,
            pulse_colors: vec![
                Rgb8::new(0xff, 0x00, 0x00),
                Rgb8::new(0xff, 0xa5, 0x00),
                Rgb8::new(0xff, 0xff, 0x00),
            ],
            pulse_frames_per_color: 21,
            fade_in_duration_ms: 300.0,
            spring: slide_spring(),
        }
    }
}

impl NewsFlashAnimation {
    pub fn validate(&self) -> TelopResult<()> {
        self.spring.validate()?;
        if self.enable_color_pulse {
            if self.pulse_colors.is_empty() {
                return Err(TelopError::validation(
                    "color pulse enabled with an empty pulseColors palette",
                ));
            }
            if self.pulse_frames_per_color == 0 {
                return Err(TelopError::validation("pulseFramesPerColor must be > 0"));
            }
        }
        if !(self.fade_in_duration_ms.is_finite() && self.fade_in_duration_ms >= 0.0) {
            return Err(TelopError::validation("fadeInDuration must be >= 0"));
        }
        let finite = [
            self.slide_in_from_x,
            self.slide_in_to_x,
            self.slide_in_start_frame,
            self.slide_in_end_frame,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(TelopError::validation("slide-in parameters must be finite"));
        }
        Ok(())
    }

    /// Horizontal banner position at `frame`, or `None` when sliding is disabled.
    pub fn slide_x(&self, frame: f64, fps: Fps) -> Option<f64> {
        if !self.enable_slide_in {
            return None;
        }
        let local = frame - self.slide_in_start_frame;
        let span = self.slide_in_end_frame - self.slide_in_start_frame;
        let progress = if self.stretch_slide_to_end_frame && span > 0.0 {
            spring_stretched(local, fps, &self.spring, span)
        } else {
            spring(local, fps, &self.spring)
        };
        Some(interpolate(
            progress,
            &[0.0, 1.0],
            &[self.slide_in_from_x, self.slide_in_to_x],
        ))
    }

    /// Banner opacity at `frame`.
    pub fn opacity(&self, frame: f64, fps: Fps) -> f64 {
        fade_in_opacity(frame, fps, self.fade_in_duration_ms)
    }

    /// Pulsed background color at `frame`, or `None` when pulsing is disabled.
    pub fn pulse(&self, frame: u64) -> Option<Rgb8> {
        if !self.enable_color_pulse {
            return None;
        }
        pulse_color(&self.pulse_colors, self.pulse_frames_per_color, frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/banner.rs"]
mod tests;
