use serde::Deserialize;

use crate::foundation::error::{TelopError, TelopResult};
use crate::timeline::entry::SubtitleEntry;

/// Parse a `{ "subtitles": [...] }` document.
///
/// Each record needs `id`, `startTime`, `endTime` and `text`; `style` and `volumeLevel` are
/// optional. Ids may be integers or strings.
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_document(input: &str) -> TelopResult<Vec<SubtitleEntry>> {
    let doc: serde_json::Value = serde_json::from_str(input)
        .map_err(|e| TelopError::malformed(format!("subtitle document is not JSON: {e}")))?;
    let records = doc
        .get("subtitles")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| TelopError::malformed("subtitle document has no 'subtitles' array"))?;

    let entries = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            SubtitleEntry::deserialize(record)
                .map_err(|e| TelopError::malformed(format!("subtitles[{i}]: {e}")))
        })
        .collect::<TelopResult<Vec<_>>>()?;

    tracing::debug!(count = entries.len(), "loaded subtitle document");
    Ok(entries)
}

/// Serialize entries back into a `{ "subtitles": [...] }` document.
pub fn to_document(entries: &[SubtitleEntry]) -> TelopResult<String> {
    #[derive(serde::Serialize)]
    struct Document<'a> {
        subtitles: &'a [SubtitleEntry],
    }

    Ok(serde_json::to_string_pretty(&Document { subtitles: entries })?)
}

#[cfg(test)]
#[path = "../../tests/unit/load/json.rs"]
mod tests;
