use crate::foundation::core::{Rgb8, Vec2};
use crate::foundation::error::{TelopError, TelopResult};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgb8 {
    /// Per-channel linear blend, rounded to the nearest integer.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }
}

/// One `(input, output)` pair of a keyframe track.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Input position (progress value or frame).
    pub at: f64,
    /// Output value at `at`.
    pub value: T,
}

/// Piecewise-linear mapping through ordered keyframes, clamped at both ends.
///
/// Inputs before the first key produce the first value and inputs past the last key produce the
/// last value; nothing is extrapolated.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Keyframes<T> {
    /// Keys sorted by strictly increasing `at`.
    pub keys: Vec<Keyframe<T>>,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Build a track from `(input, output)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, T)>) -> Self {
        Self {
            keys: pairs
                .into_iter()
                .map(|(at, value)| Keyframe { at, value })
                .collect(),
        }
    }

    /// Validate that the track is non-empty with finite, strictly increasing inputs.
    pub fn validate(&self) -> TelopResult<()> {
        if self.keys.is_empty() {
            return Err(TelopError::animation("Keyframes must have at least one key"));
        }
        if self.keys.iter().any(|k| !k.at.is_finite()) {
            return Err(TelopError::animation("Keyframes inputs must be finite"));
        }
        if !self.keys.windows(2).all(|w| w[0].at < w[1].at) {
            return Err(TelopError::animation(
                "Keyframes inputs must be strictly increasing",
            ));
        }
        Ok(())
    }

    /// Sample the track at `x`. Returns `None` only for an empty track.
    pub fn sample(&self, x: f64) -> Option<T> {
        let first = self.keys.first()?;
        let idx = self.keys.partition_point(|k| k.at <= x);

        if idx == 0 {
            return Some(first.value.clone());
        }
        if idx >= self.keys.len() {
            return self.keys.last().map(|k| k.value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.at - a.at;
        if span <= 0.0 {
            return Some(a.value.clone());
        }
        let t = ((x - a.at) / span).clamp(0.0, 1.0);
        Some(T::lerp(&a.value, &b.value, t))
    }
}

impl Keyframes<f64> {
    /// Sample a scalar track, yielding `0.0` for an empty track.
    pub fn sample_or_zero(&self, x: f64) -> f64 {
        self.sample(x).unwrap_or(0.0)
    }
}

/// Map `x` through parallel input/output ranges, clamped at both ends.
///
/// Extra elements of the longer slice are ignored.
pub fn interpolate(x: f64, inputs: &[f64], outputs: &[f64]) -> f64 {
    Keyframes::from_pairs(inputs.iter().copied().zip(outputs.iter().copied())).sample_or_zero(x)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
