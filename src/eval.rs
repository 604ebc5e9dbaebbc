use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    animation::sample::AnimationSample,
    config::{CaptionStyle, PresentationConfig},
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{TelopError, TelopResult},
    },
    present::{
        CaptionPresentation, FramePresentation, GlyphPresentation, LinePresentation,
        NewsFlashPresentation, SegmentPresentation, banner_background, box_background,
    },
    text::{
        keywords::KeywordIndex,
        segment::{TextSegment, segment},
        wrap::wrap,
    },
    timeline::{
        entry::SubtitleEntry,
        resolve::{classify_style, resolve_active},
    },
};

/// Frame evaluator over an immutable timeline.
///
/// Every frame is derived from `(frame, entries, config, keywords)` alone, so frames can be
/// requested in any order and from several threads at once.
#[derive(Clone, Debug)]
pub struct Evaluator {
    entries: Arc<[SubtitleEntry]>,
    config: PresentationConfig,
    keywords: Arc<KeywordIndex>,
}

impl Evaluator {
    /// Validate `config` and take ownership of the timeline.
    pub fn new(
        entries: Vec<SubtitleEntry>,
        config: PresentationConfig,
        keywords: Arc<KeywordIndex>,
    ) -> TelopResult<Self> {
        config.validate()?;
        tracing::debug!(
            entries = entries.len(),
            keywords = keywords.len(),
            "evaluator ready"
        );
        Ok(Self {
            entries: entries.into(),
            config,
            keywords,
        })
    }

    pub fn entries(&self) -> &[SubtitleEntry] {
        &self.entries
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    pub fn keywords(&self) -> &KeywordIndex {
        &self.keywords
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn eval_frame(&self, frame: FrameIndex) -> FramePresentation {
        let time_secs = self.config.fps.frames_to_secs(frame.0);
        let caption = resolve_active(&self.entries, time_secs)
            .map(|entry| self.eval_caption(entry, frame));
        let news_flash = self
            .config
            .show_news_flash
            .then(|| self.eval_news_flash(frame));

        FramePresentation {
            frame,
            time_secs,
            caption,
            news_flash,
        }
    }

    /// Evaluate every frame of `range` in order.
    pub fn eval_range(&self, range: FrameRange) -> Vec<FramePresentation> {
        range.iter().map(|f| self.eval_frame(f)).collect()
    }

    /// Evaluate `range` on a rayon pool. Output order and values match [`Self::eval_range`].
    pub fn eval_range_parallel(
        &self,
        range: FrameRange,
        threads: Option<usize>,
    ) -> TelopResult<Vec<FramePresentation>> {
        let pool = build_thread_pool(threads)?;
        Ok(pool.install(|| {
            (range.start.0..range.end.0)
                .into_par_iter()
                .map(|f| self.eval_frame(FrameIndex(f)))
                .collect()
        }))
    }

    fn eval_caption(&self, entry: &SubtitleEntry, frame: FrameIndex) -> CaptionPresentation {
        let fps = self.config.fps;
        let variant = classify_style(entry, &self.config);
        let style = self.config.caption_style(variant);
        let frame_in_entry = (frame.0 as f64 - fps.secs_to_frames_f64(entry.start_time)).max(0.0);

        let segments = segment(&entry.text, &self.keywords);
        let mut index = 0usize;
        let lines = wrap(&segments, self.config.highlight.max_chars_per_line)
            .into_iter()
            .map(|line| LinePresentation {
                segments: line
                    .into_iter()
                    .map(|seg| self.eval_segment(seg, style, frame_in_entry, &mut index))
                    .collect(),
            })
            .collect();

        CaptionPresentation {
            entry: entry.id.clone(),
            variant,
            frame_in_entry,
            font_size: style.font_size,
            text_color: style.text_color,
            background: box_background(style.background_color, style.background_opacity),
            outline_color: style.outline_color,
            outline_width: style.outline_width,
            lines,
        }
    }

    /// `index` is the caption-wide position of the segment's first character; it is advanced past
    /// the segment.
    fn eval_segment(
        &self,
        seg: TextSegment,
        style: &CaptionStyle,
        frame_in_entry: f64,
        index: &mut usize,
    ) -> SegmentPresentation {
        let fps = self.config.fps;
        let highlight = &self.config.highlight;
        let color = highlight.color_for(&seg, style.text_color);
        let glyphs = seg
            .text
            .chars()
            .map(|ch| {
                let sample = match &self.config.bounce {
                    Some(bounce) => bounce.sample(frame_in_entry, fps, *index, color),
                    None => AnimationSample::at_rest(color),
                };
                let glyph = GlyphPresentation {
                    ch,
                    index: *index,
                    sample,
                };
                *index += 1;
                glyph
            })
            .collect();

        SegmentPresentation {
            font_size: style.font_size,
            color,
            glyphs,
            segment: seg,
        }
    }

    fn eval_news_flash(&self, frame: FrameIndex) -> NewsFlashPresentation {
        let fps = self.config.fps;
        let style = &self.config.news_flash_style;
        let anim = &style.animation;
        let f = frame.0 as f64;

        NewsFlashPresentation {
            text: self.config.news_flash_text.clone(),
            x: anim.slide_x(f, fps).unwrap_or(style.left_margin),
            y: style.top_margin,
            opacity: anim.opacity(f, fps),
            background: banner_background(&self.config, anim.pulse(frame.0)),
            text_color: style.text_color,
            font_size: style.font_size,
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> TelopResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(TelopError::validation("threads must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| TelopError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/eval.rs"]
mod tests;
