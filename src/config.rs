//! Presentation configuration and its presets.
//!
//! A [`PresentationConfig`] is an immutable value. Callers start from a preset and apply
//! overrides with [`PresentationConfig::merged`], which returns a new value.

use std::collections::BTreeMap;

use crate::animation::banner::NewsFlashAnimation;
use crate::animation::bounce::BounceSpec;
use crate::foundation::core::{Fps, Rgb8};
use crate::foundation::error::{TelopError, TelopResult};
use crate::text::segment::TextSegment;
use crate::timeline::entry::StyleVariant;

const CAPTION_FONT: &str = "MS Gothic, \"Noto Sans JP\", sans-serif";
const BANNER_FONT: &str = "Noto Sans JP, sans-serif";
const YOUTUBE_CAPTION_FONT: &str =
    "\"Gen Jyuu Gothic\", \"Noto Sans JP\", \"Hiragino Kaku Gothic ProN\", \"Yu Gothic\", sans-serif";
const YOUTUBE_BANNER_FONT: &str =
    "\"Noto Sans JP\", \"Hiragino Kaku Gothic ProN\", \"Yu Gothic\", sans-serif";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Typography and box parameters of a bottom caption.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionStyle {
    pub font_family: String,
    /// Point size, pixels.
    pub font_size: f64,
    pub text_color: Rgb8,
    pub background_color: Rgb8,
    /// `0` means no background box.
    pub background_opacity: f64,
    pub outline_color: Rgb8,
    pub outline_width: u32,
    pub bottom_margin: f64,
    pub horizontal_padding: f64,
    pub vertical_padding: f64,
    pub font_weight: FontWeight,
}

impl CaptionStyle {
    fn validate(&self, name: &str) -> TelopResult<()> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(TelopError::validation(format!("{name}.fontSize must be > 0")));
        }
        if !(0.0..=1.0).contains(&self.background_opacity) {
            return Err(TelopError::validation(format!(
                "{name}.backgroundOpacity must be in [0, 1]"
            )));
        }
        Ok(())
    }
}

/// Caption style used for loud speech.
///
/// `fontSize` is the effective size. `fontSizeMultiplier` records its ratio to the normal size and
/// is not applied again.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoudCaptionStyle {
    #[serde(flatten)]
    pub style: CaptionStyle,
    pub font_size_multiplier: f64,
}

/// Top-left news-flash banner.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsFlashStyle {
    pub font_family: String,
    pub font_size: f64,
    pub text_color: Rgb8,
    pub background_color: Rgb8,
    pub background_opacity: f64,
    pub outline_color: Rgb8,
    pub outline_width: u32,
    pub top_margin: f64,
    /// Banner x position when sliding is disabled.
    pub left_margin: f64,
    pub font_weight: FontWeight,
    pub animation: NewsFlashAnimation,
}

/// Keyword highlight colors and line wrapping.
///
/// Highlighting changes color only; keywords are set at the caption's font size.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightStyle {
    /// Plain-text color. `None` uses the caption variant's text color.
    pub normal_color: Option<Rgb8>,
    /// Color of highlighted keywords without a category color.
    pub highlight_color: Rgb8,
    pub category_colors: BTreeMap<String, Rgb8>,
    pub max_chars_per_line: usize,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            normal_color: None,
            highlight_color: Rgb8::new(0xff, 0x00, 0x00),
            category_colors: BTreeMap::from([("食べ物".to_owned(), Rgb8::new(0xff, 0xff, 0x00))]),
            max_chars_per_line: 15,
        }
    }
}

impl HighlightStyle {
    /// Color of `segment`, given the color of plain text for the caption variant.
    pub fn color_for(&self, segment: &TextSegment, plain: Rgb8) -> Rgb8 {
        if !segment.highlighted {
            return self.normal_color.unwrap_or(plain);
        }
        segment
            .category
            .as_deref()
            .and_then(|c| self.category_colors.get(c))
            .copied()
            .unwrap_or(self.highlight_color)
    }
}

/// Complete presentation configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationConfig {
    pub video_width: u32,
    pub video_height: u32,
    pub fps: Fps,
    pub normal_style: CaptionStyle,
    pub loud_style: LoudCaptionStyle,
    pub news_flash_style: NewsFlashStyle,
    pub news_flash_text: String,
    pub show_news_flash: bool,
    /// Volume threshold for the loud variant, percent of full scale.
    pub loud_volume_percentile: f64,
    #[serde(default)]
    pub highlight: HighlightStyle,
    /// Per-character bounce. `None` renders captions static.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce: Option<BounceSpec>,
}

impl Default for PresentationConfig {
    /// Broadcast preset: black bold text on a translucent yellow box, pulsing red banner.
    fn default() -> Self {
        let normal_style = CaptionStyle {
            font_family: CAPTION_FONT.to_owned(),
            font_size: 128.0,
            text_color: Rgb8::new(0x00, 0x00, 0x00),
            background_color: Rgb8::new(0xff, 0xff, 0x00),
            background_opacity: 0.5,
            outline_color: Rgb8::new(0xff, 0xff, 0xff),
            outline_width: 2,
            bottom_margin: 30.0,
            horizontal_padding: 20.0,
            vertical_padding: 10.0,
            font_weight: FontWeight::Bold,
        };
        let loud_style = LoudCaptionStyle {
            style: CaptionStyle {
                font_size: 160.0,
                text_color: Rgb8::new(0xff, 0x00, 0x00),
                ..normal_style.clone()
            },
            font_size_multiplier: 1.25,
        };
        Self {
            video_width: 1920,
            video_height: 1080,
            fps: Fps { num: 30, den: 1 },
            normal_style,
            loud_style,
            news_flash_style: NewsFlashStyle {
                font_family: BANNER_FONT.to_owned(),
                font_size: 84.0,
                text_color: Rgb8::new(0xff, 0xff, 0xff),
                background_color: Rgb8::new(0xff, 0x00, 0x00),
                background_opacity: 0.75,
                outline_color: Rgb8::new(0x00, 0x00, 0x00),
                outline_width: 6,
                top_margin: 15.0,
                left_margin: 15.0,
                font_weight: FontWeight::Bold,
                animation: NewsFlashAnimation::default(),
            },
            news_flash_text: "速報：保安検査官にいじられる（再）".to_owned(),
            show_news_flash: true,
            loud_volume_percentile: 75.0,
            highlight: HighlightStyle::default(),
            bounce: None,
        }
    }
}

impl PresentationConfig {
    /// Web-video preset: white text with a heavy black outline, no caption box, static red banner.
    pub fn youtube() -> Self {
        let normal_style = CaptionStyle {
            font_family: YOUTUBE_CAPTION_FONT.to_owned(),
            font_size: 100.0,
            text_color: Rgb8::new(0xff, 0xff, 0xff),
            background_color: Rgb8::new(0x00, 0x00, 0x00),
            background_opacity: 0.0,
            outline_color: Rgb8::new(0x00, 0x00, 0x00),
            outline_width: 10,
            bottom_margin: 60.0,
            horizontal_padding: 24.0,
            vertical_padding: 12.0,
            font_weight: FontWeight::Bold,
        };
        let loud_style = LoudCaptionStyle {
            style: CaptionStyle {
                text_color: Rgb8::new(0xff, 0xd7, 0x00),
                horizontal_padding: 28.0,
                vertical_padding: 14.0,
                ..normal_style.clone()
            },
            font_size_multiplier: 1.0,
        };
        let red = Rgb8::new(0xe6, 0x00, 0x12);
        Self {
            normal_style,
            loud_style,
            news_flash_style: NewsFlashStyle {
                font_family: YOUTUBE_BANNER_FONT.to_owned(),
                font_size: 48.0,
                text_color: Rgb8::new(0xff, 0xff, 0xff),
                background_color: red,
                background_opacity: 0.9,
                outline_color: Rgb8::new(0x00, 0x00, 0x00),
                outline_width: 2,
                top_margin: 20.0,
                left_margin: 20.0,
                font_weight: FontWeight::Bold,
                animation: NewsFlashAnimation {
                    slide_in_from_x: -400.0,
                    slide_in_to_x: 20.0,
                    slide_in_end_frame: 15.0,
                    enable_color_pulse: false,
                    pulse_colors: vec![red],
                    pulse_frames_per_color: 30,
                    fade_in_duration_ms: 200.0,
                    ..NewsFlashAnimation::default()
                },
            },
            news_flash_text: "重要なお知らせ".to_owned(),
            ..Self::default()
        }
    }

    /// [`PresentationConfig::youtube`] without the banner.
    pub fn youtube_clean() -> Self {
        Self {
            show_news_flash: false,
            ..Self::youtube()
        }
    }

    /// Preset by name: `default`, `youtube` or `youtube-clean`.
    pub fn preset(name: &str) -> TelopResult<Self> {
        match name {
            "default" | "broadcast" => Ok(Self::default()),
            "youtube" => Ok(Self::youtube()),
            "youtube-clean" | "youtube_clean" => Ok(Self::youtube_clean()),
            other => Err(TelopError::validation(format!("unknown preset '{other}'"))),
        }
    }

    /// Copy of `self` with `overrides` merged in.
    ///
    /// Objects merge key by key, recursively; any other JSON value replaces the current one.
    /// The result is validated.
    pub fn merged(&self, overrides: serde_json::Value) -> TelopResult<Self> {
        let mut base = serde_json::to_value(self)?;
        merge_json(&mut base, overrides);
        let out: Self = serde_json::from_value(base)?;
        out.validate()?;
        Ok(out)
    }

    /// Check that every value can be evaluated.
    pub fn validate(&self) -> TelopResult<()> {
        if self.video_width == 0 || self.video_height == 0 {
            return Err(TelopError::validation("videoWidth/videoHeight must be > 0"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(TelopError::validation("fps must have num>0 and den>0"));
        }
        self.normal_style.validate("normalStyle")?;
        self.loud_style.style.validate("loudStyle")?;
        let banner = &self.news_flash_style;
        if !(banner.font_size.is_finite() && banner.font_size > 0.0) {
            return Err(TelopError::validation("newsFlashStyle.fontSize must be > 0"));
        }
        if !(0.0..=1.0).contains(&banner.background_opacity) {
            return Err(TelopError::validation(
                "newsFlashStyle.backgroundOpacity must be in [0, 1]",
            ));
        }
        banner.animation.validate()?;
        if !(0.0..=100.0).contains(&self.loud_volume_percentile) {
            return Err(TelopError::validation("loudVolumePercentile must be in [0, 100]"));
        }
        if self.highlight.max_chars_per_line == 0 {
            return Err(TelopError::validation("highlight.maxCharsPerLine must be > 0"));
        }
        if let Some(bounce) = &self.bounce {
            bounce.validate()?;
        }
        Ok(())
    }

    /// Caption style of `variant`.
    pub fn caption_style(&self, variant: StyleVariant) -> &CaptionStyle {
        match variant {
            StyleVariant::Normal => &self.normal_style,
            StyleVariant::Loud => &self.loud_style.style,
        }
    }
}

fn merge_json(base: &mut serde_json::Value, overrides: serde_json::Value) {
    match (base, overrides) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
