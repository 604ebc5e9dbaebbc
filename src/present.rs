//! Renderer-facing presentation values.

use crate::animation::sample::AnimationSample;
use crate::config::PresentationConfig;
use crate::foundation::core::{FrameIndex, Rgb8};
use crate::text::segment::TextSegment;
use crate::timeline::entry::{EntryId, StyleVariant};

/// Stamp offsets `(dx, dy)` that draw a text outline of `width` pixels.
///
/// Every integer offset in `[-width, width]²` except the origin, x-major.
pub fn outline_offsets(width: u32) -> Vec<(i32, i32)> {
    let w = width as i32;
    let side = 2 * width as usize + 1;
    let mut out = Vec::with_capacity(side * side - 1);
    for x in -w..=w {
        for y in -w..=w {
            if x != 0 || y != 0 {
                out.push((x, y));
            }
        }
    }
    out
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FramePresentation {
    pub frame: FrameIndex,
    pub time_secs: f64,
    pub caption: Option<CaptionPresentation>,
    pub news_flash: Option<NewsFlashPresentation>,
}

/// The active caption at a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionPresentation {
    pub entry: EntryId,
    pub variant: StyleVariant,
    /// Frames elapsed since the entry became visible.
    pub frame_in_entry: f64,
    pub font_size: f64,
    pub text_color: Rgb8,
    /// `#rrggbbaa`, absent when the box is fully transparent.
    pub background: Option<String>,
    pub outline_color: Rgb8,
    pub outline_width: u32,
    pub lines: Vec<LinePresentation>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePresentation {
    pub segments: Vec<SegmentPresentation>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPresentation {
    #[serde(flatten)]
    pub segment: TextSegment,
    pub color: Rgb8,
    pub font_size: f64,
    pub glyphs: Vec<GlyphPresentation>,
}

/// One character and its animated state.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphPresentation {
    pub ch: char,
    /// Position of the character within the whole caption, used for stagger.
    pub index: usize,
    pub sample: AnimationSample,
}

/// Banner state at a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsFlashPresentation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    /// `#rrggbbaa`.
    pub background: String,
    pub text_color: Rgb8,
    pub font_size: f64,
}

impl CaptionPresentation {
    /// Concatenated caption text, lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| {
                l.segments
                    .iter()
                    .map(|s| s.segment.text.as_str())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Background value of a caption box, `None` when fully transparent.
pub(crate) fn box_background(color: Rgb8, opacity: f64) -> Option<String> {
    (opacity > 0.0).then(|| color.with_alpha_hex(opacity))
}

pub(crate) fn banner_background(config: &PresentationConfig, pulse: Option<Rgb8>) -> String {
    let style = &config.news_flash_style;
    pulse
        .unwrap_or(style.background_color)
        .with_alpha_hex(style.background_opacity)
}

#[cfg(test)]
#[path = "../tests/unit/present.rs"]
mod tests;
