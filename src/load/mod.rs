//! Subtitle source formats.
//!
//! Loaders are strict: a damaged record is reported as [`TelopError::MalformedInput`] and never
//! repaired, since wrong timing shows up as visibly wrong captions.
//!
//! [`TelopError::MalformedInput`]: crate::TelopError::MalformedInput

pub mod json;
pub mod srt;

use crate::foundation::error::TelopResult;
use crate::timeline::entry::SubtitleEntry;

/// Source format of a subtitle document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    /// `{ "subtitles": [...] }`.
    Json,
    /// Numbered blocks with `HH:MM:SS,mmm --> HH:MM:SS,mmm` time lines.
    Srt,
}

impl SourceFormat {
    /// Guess the format from a file name; anything not ending in `.srt` is JSON.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("srt") => Self::Srt,
            _ => Self::Json,
        }
    }
}

/// Parse `input` in the given format.
pub fn parse(input: &str, format: SourceFormat) -> TelopResult<Vec<SubtitleEntry>> {
    match format {
        SourceFormat::Json => json::parse_document(input),
        SourceFormat::Srt => srt::parse_srt(input),
    }
}
