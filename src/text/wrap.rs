use crate::text::segment::TextSegment;

/// Group segments into lines of at most `max_chars_per_line` characters.
///
/// Segments are never split. A segment that does not fit starts a new line; a segment longer
/// than the limit occupies a line of its own. Characters are counted as Unicode scalar values.
pub fn wrap(segments: &[TextSegment], max_chars_per_line: usize) -> Vec<Vec<TextSegment>> {
    let mut lines = Vec::new();
    let mut current: Vec<TextSegment> = Vec::new();
    let mut current_len = 0usize;

    for seg in segments {
        let len = seg.char_count();
        if !current.is_empty() && current_len + len > max_chars_per_line {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push(seg.clone());
        current_len += len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
