//! Time-to-entry resolution and style classification.
//!
//! Everything here is re-derived per call. There is no cursor or "last resolved index": frames
//! may be requested in any order.

use crate::config::PresentationConfig;
use crate::foundation::core::{Fps, FrameIndex};
use crate::timeline::entry::{StyleTag, StyleVariant, SubtitleEntry};

/// First entry, in iteration order, whose window `[start, end)` contains `time`.
///
/// Sortedness is not verified. Overlapping entries resolve to the earliest-declared one.
/// Zero-length entries never match.
pub fn resolve_active(entries: &[SubtitleEntry], time: f64) -> Option<&SubtitleEntry> {
    entries.iter().find(|e| e.is_active_at(time))
}

/// [`resolve_active`] at the timestamp of `frame`.
pub fn resolve_active_at_frame(
    entries: &[SubtitleEntry],
    frame: FrameIndex,
    fps: Fps,
) -> Option<&SubtitleEntry> {
    resolve_active(entries, fps.frames_to_secs(frame.0))
}

/// Resolve the caption variant for `entry`.
///
/// An explicit `normal`/`loud` tag wins. Otherwise a volume level at or above
/// `loud_volume_percentile / 100` is loud. Everything else is normal.
pub fn classify_style(entry: &SubtitleEntry, config: &PresentationConfig) -> StyleVariant {
    match entry.style_tag {
        Some(StyleTag::Normal) => StyleVariant::Normal,
        Some(StyleTag::Loud) => StyleVariant::Loud,
        Some(StyleTag::NewsFlash) | None => match entry.volume_level {
            Some(level) if level >= config.loud_volume_percentile / 100.0 => StyleVariant::Loud,
            _ => StyleVariant::Normal,
        },
    }
}

/// Entries whose window overlaps `[start, end)`, in their original order.
pub fn filter_by_time(entries: &[SubtitleEntry], start: f64, end: f64) -> Vec<SubtitleEntry> {
    entries
        .iter()
        .filter(|e| e.end_time > start && e.start_time < end)
        .cloned()
        .collect()
}

/// Stable sort by start time into a new vector.
pub fn sort_by_start(entries: &[SubtitleEntry]) -> Vec<SubtitleEntry> {
    let mut out = entries.to_vec();
    out.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/resolve.rs"]
mod tests;
