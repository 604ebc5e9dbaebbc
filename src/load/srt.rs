use regex::Regex;

use crate::foundation::error::{TelopError, TelopResult};
use crate::timeline::entry::SubtitleEntry;

const TIME_LINE: &str =
    r"^(\d{2}):(\d{2}):(\d{2}),(\d{3})\s*-->\s*(\d{2}):(\d{2}):(\d{2}),(\d{3})\s*$";

/// Parse SRT text.
///
/// Blocks are separated by blank lines. Each block is a numeric id line, a time line and at least
/// one text line; text lines are joined with `\n`. CRLF line endings are accepted.
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_srt(input: &str) -> TelopResult<Vec<SubtitleEntry>> {
    let time_line = Regex::new(TIME_LINE).map_err(anyhow::Error::from)?;

    let mut entries = Vec::new();
    for (n, block) in blocks(input).into_iter().enumerate() {
        entries.push(parse_block(n + 1, &block, &time_line)?);
    }

    tracing::debug!(count = entries.len(), "loaded srt document");
    Ok(entries)
}

fn blocks(input: &str) -> Vec<Vec<&str>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for line in input.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn parse_block(n: usize, lines: &[&str], time_line: &Regex) -> TelopResult<SubtitleEntry> {
    let [id_line, times, text @ ..] = lines else {
        return Err(TelopError::malformed(format!(
            "srt block {n}: expected id, time and text lines"
        )));
    };
    // A leading byte-order mark belongs to the file, not the id.
    let id_line = id_line.trim_start_matches('\u{feff}').trim();
    let id: i64 = id_line.parse().map_err(|_| {
        TelopError::malformed(format!("srt block {n}: id line '{id_line}' is not a number"))
    })?;

    let caps = time_line.captures(times.trim()).ok_or_else(|| {
        TelopError::malformed(format!(
            "srt block {n}: '{}' is not 'HH:MM:SS,mmm --> HH:MM:SS,mmm'",
            times.trim()
        ))
    })?;
    let field = |i: usize| -> f64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .map_or(0.0, f64::from)
    };
    let start = field(1) * 3600.0 + field(2) * 60.0 + field(3) + field(4) / 1000.0;
    let end = field(5) * 3600.0 + field(6) * 60.0 + field(7) + field(8) / 1000.0;

    if text.is_empty() {
        return Err(TelopError::malformed(format!("srt block {n}: no text line")));
    }
    Ok(SubtitleEntry::new(id, start, end, text.join("\n")))
}

#[cfg(test)]
#[path = "../../tests/unit/load/srt.rs"]
mod tests;
