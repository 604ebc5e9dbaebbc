//! Manual timing corrections.
//!
//! The core operations take a predicate so that any addressing strategy can be used. Stable ids
//! are preferred; exact-text matching is kept as a legacy lookup. A target that never matches
//! leaves the sequence unchanged.

use crate::timeline::entry::SubtitleEntry;

/// How an adjustment addresses its target entries.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntrySelector {
    /// Entries whose id display form equals the value.
    Id(String),
    /// Entries whose text equals the value exactly.
    Text(String),
}

impl EntrySelector {
    /// Return `true` when `entry` is addressed by this selector.
    pub fn matches(&self, entry: &SubtitleEntry) -> bool {
        match self {
            Self::Id(id) => entry.id.matches(id),
            Self::Text(text) => entry.text == *text,
        }
    }
}

/// One timing correction, serializable so corrections can live next to the source data.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum TimingAdjustment {
    /// Relative shift of matching entries, clamped at zero.
    #[serde(rename_all = "camelCase")]
    Shift {
        /// Target entries.
        target: EntrySelector,
        /// Seconds added to `start_time`.
        #[serde(default)]
        start_offset: f64,
        /// Seconds added to `end_time`.
        #[serde(default)]
        end_offset: f64,
    },
    /// Overwrite the window of matching entries.
    #[serde(rename_all = "camelCase")]
    SetAbsolute {
        /// Target entries.
        target: EntrySelector,
        /// New start, seconds.
        start_time: f64,
        /// New end, seconds.
        end_time: f64,
    },
    /// Shift the first matching entry and everything after it.
    #[serde(rename_all = "camelCase")]
    CascadeFrom {
        /// Entry that starts the cascade.
        target: EntrySelector,
        /// Seconds added to both bounds.
        offset: f64,
    },
}

/// Add offsets to matching entries; each bound is clamped to `>= 0`.
pub fn shift_where<P>(
    entries: &[SubtitleEntry],
    pred: P,
    start_offset: f64,
    end_offset: f64,
) -> Vec<SubtitleEntry>
where
    P: Fn(&SubtitleEntry) -> bool,
{
    entries
        .iter()
        .map(|e| {
            if pred(e) {
                e.with_times(
                    (e.start_time + start_offset).max(0.0),
                    (e.end_time + end_offset).max(0.0),
                )
            } else {
                e.clone()
            }
        })
        .collect()
}

/// Overwrite the window of matching entries. No clamping.
pub fn set_absolute_where<P>(
    entries: &[SubtitleEntry],
    pred: P,
    start_time: f64,
    end_time: f64,
) -> Vec<SubtitleEntry>
where
    P: Fn(&SubtitleEntry) -> bool,
{
    entries
        .iter()
        .map(|e| {
            if pred(e) {
                e.with_times(start_time, end_time)
            } else {
                e.clone()
            }
        })
        .collect()
}

/// Shift the first entry matching `pred` and every entry after it in iteration order.
///
/// Entries after the trigger are shifted regardless of their id or time. Bounds are clamped to
/// `>= 0`.
pub fn cascade_offset_from<P>(
    entries: &[SubtitleEntry],
    pred: P,
    offset: f64,
) -> Vec<SubtitleEntry>
where
    P: Fn(&SubtitleEntry) -> bool,
{
    let mut active = false;
    entries
        .iter()
        .map(|e| {
            active = active || pred(e);
            if active {
                e.with_times(
                    (e.start_time + offset).max(0.0),
                    (e.end_time + offset).max(0.0),
                )
            } else {
                e.clone()
            }
        })
        .collect()
}

/// Legacy lookup: shift entries whose text equals `target_text`.
pub fn shift_by_text(
    entries: &[SubtitleEntry],
    target_text: &str,
    start_offset: f64,
    end_offset: f64,
) -> Vec<SubtitleEntry> {
    shift_where(entries, |e| e.text == target_text, start_offset, end_offset)
}

/// Legacy lookup: overwrite the window of entries whose text equals `target_text`.
pub fn set_absolute_by_text(
    entries: &[SubtitleEntry],
    target_text: &str,
    start_time: f64,
    end_time: f64,
) -> Vec<SubtitleEntry> {
    set_absolute_where(entries, |e| e.text == target_text, start_time, end_time)
}

/// Cascade `offset` from the entry whose id is `from_id`.
pub fn cascade_offset_from_id(
    entries: &[SubtitleEntry],
    from_id: &str,
    offset: f64,
) -> Vec<SubtitleEntry> {
    cascade_offset_from(entries, |e| e.id.matches(from_id), offset)
}

/// Fold `adjustments` over `entries` in order.
pub fn apply_adjustments(
    entries: &[SubtitleEntry],
    adjustments: &[TimingAdjustment],
) -> Vec<SubtitleEntry> {
    let mut out = entries.to_vec();
    for adj in adjustments {
        let target = match adj {
            TimingAdjustment::Shift { target, .. }
            | TimingAdjustment::SetAbsolute { target, .. }
            | TimingAdjustment::CascadeFrom { target, .. } => target,
        };
        if !out.iter().any(|e| target.matches(e)) {
            tracing::warn!(?target, "timing adjustment matched no entry");
            continue;
        }

        out = match adj {
            TimingAdjustment::Shift {
                target,
                start_offset,
                end_offset,
            } => shift_where(&out, |e| target.matches(e), *start_offset, *end_offset),
            TimingAdjustment::SetAbsolute {
                target,
                start_time,
                end_time,
            } => set_absolute_where(&out, |e| target.matches(e), *start_time, *end_time),
            TimingAdjustment::CascadeFrom { target, offset } => {
                cascade_offset_from(&out, |e| target.matches(e), *offset)
            }
        };
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/adjust.rs"]
mod tests;
