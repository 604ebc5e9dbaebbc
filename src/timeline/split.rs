use crate::timeline::entry::SubtitleEntry;

/// Japanese full stop, the default sentence terminator.
pub const DEFAULT_TERMINATOR: &str = "。";

/// Split one entry at sentence boundaries.
///
/// Fragments are trimmed and whitespace-only fragments are dropped. With zero or one fragment
/// the entry is returned unchanged. Otherwise the window is divided evenly: fragment `i` spans
/// `[start + i·Δ, start + (i+1)·Δ)` with `Δ = duration / n`, the last fragment ending exactly at
/// the parent's `end_time`. Every fragment gets the terminator back, except the last one when the
/// parent text did not end with it. Child ids are `"<parent>-<k>"` with `k` 1-based; style and
/// volume hints carry over.
pub fn split_by_terminator(entry: &SubtitleEntry, terminator: &str) -> Vec<SubtitleEntry> {
    if terminator.is_empty() {
        return vec![entry.clone()];
    }

    let fragments: Vec<&str> = entry
        .text
        .split(terminator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if fragments.len() <= 1 {
        return vec![entry.clone()];
    }

    let has_trailing = entry.text.trim().ends_with(terminator);
    let n = fragments.len();
    let delta = entry.duration() / n as f64;

    fragments
        .into_iter()
        .enumerate()
        .map(|(i, fragment)| {
            let is_last = i + 1 == n;
            let start_time = entry.start_time + i as f64 * delta;
            let end_time = if is_last {
                entry.end_time
            } else {
                entry.start_time + (i + 1) as f64 * delta
            };

            let mut text = fragment.to_owned();
            if !is_last || has_trailing {
                text.push_str(terminator);
            }

            SubtitleEntry {
                id: entry.id.child(i + 1),
                start_time,
                end_time,
                text,
                style_tag: entry.style_tag,
                volume_level: entry.volume_level,
            }
        })
        .collect()
}

/// Apply [`split_by_terminator`] to every entry, preserving order.
pub fn split_all(entries: &[SubtitleEntry], terminator: &str) -> Vec<SubtitleEntry> {
    let out: Vec<SubtitleEntry> = entries
        .iter()
        .flat_map(|e| split_by_terminator(e, terminator))
        .collect();
    tracing::debug!(input = entries.len(), output = out.len(), "split entries");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/split.rs"]
mod tests;
