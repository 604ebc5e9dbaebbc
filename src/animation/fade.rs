use crate::animation::interp::interpolate;
use crate::foundation::core::Fps;

/// Opacity of a linear fade-in `frame` frames after it starts.
///
/// The ramp length is `duration_ms` converted to frames. A zero-length ramp is fully opaque from
/// the first frame.
pub fn fade_in_opacity(frame: f64, fps: Fps, duration_ms: f64) -> f64 {
    let ramp = fps.millis_to_frames_f64(duration_ms);
    if ramp.is_nan() || ramp <= 0.0 {
        return if frame >= 0.0 { 1.0 } else { 0.0 };
    }
    interpolate(frame, &[0.0, ramp], &[0.0, 1.0])
}

#[cfg(test)]
#[path = "../../tests/unit/animation/fade.rs"]
mod tests;
