use std::fmt;

use crate::foundation::error::{TelopError, TelopResult};

pub use kurbo::{Affine, Vec2};

/// Absolute 0-based frame index in video timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)` in timeline space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> TelopResult<Self> {
        if start.0 > end.0 {
            return Err(TelopError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Iterate the frames of the range in ascending order.
    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

/// Frames-per-second represented as a rational `num/den`.
///
/// Deserializes from either a plain integer (`30`) or `{ "num": 30000, "den": 1001 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> TelopResult<Self> {
        if den == 0 {
            return Err(TelopError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(TelopError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        self.frames_to_secs_f64(frames as f64)
    }

    /// Convert a fractional frame position to seconds.
    pub fn frames_to_secs_f64(self, frames: f64) -> f64 {
        frames * f64::from(self.den) / f64::from(self.num)
    }

    /// Convert seconds to a fractional frame position.
    pub fn secs_to_frames_f64(self, secs: f64) -> f64 {
        secs * f64::from(self.num) / f64::from(self.den)
    }

    /// Convert milliseconds to a fractional frame count.
    pub fn millis_to_frames_f64(self, millis: f64) -> f64 {
        self.secs_to_frames_f64(millis / 1000.0)
    }
}

impl<'de> serde::Deserialize<'de> for Fps {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Whole(u32),
            Rational { num: u32, den: u32 },
        }

        let (num, den) = match Repr::deserialize(deserializer)? {
            Repr::Whole(n) => (n, 1),
            Repr::Rational { num, den } => (num, den),
        };
        Fps::new(num, den).map_err(serde::de::Error::custom)
    }
}

/// Straight (non-premultiplied) RGB8 color, serialized as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (leading `#` optional, hex digits case-insensitive).
    pub fn parse_hex(s: &str) -> TelopResult<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TelopError::validation(format!(
                "color '{s}' is not a #RRGGBB hex value"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| TelopError::validation(format!("color '{s}': {e}")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `#rrggbbaa` form, with alpha taken from `opacity` in `[0, 1]`.
    pub fn with_alpha_hex(self, opacity: f64) -> String {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("{}{:02x}", self.to_hex(), a)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rgb8::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
