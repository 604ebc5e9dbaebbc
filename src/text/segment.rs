use crate::text::keywords::KeywordIndex;

/// A contiguous run of caption text, either plain or keyword-highlighted.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextSegment {
    /// Segment text.
    pub text: String,
    /// `true` when the run is a keyword match.
    pub highlighted: bool,
    /// Keyword category for highlighted runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl TextSegment {
    /// Plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
            category: None,
        }
    }

    /// Highlighted run tagged with `category`.
    pub fn highlight(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
            category: Some(category.into()),
        }
    }

    /// Length in Unicode scalar values.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Split `text` into ordered plain and highlighted runs.
///
/// Keyword occurrences are taken leftmost-longest and never overlap. Concatenating the
/// returned `text` fields reproduces the input exactly; an empty input yields no segments.
pub fn segment(text: &str, index: &KeywordIndex) -> Vec<TextSegment> {
    let mut out = Vec::new();
    let mut pos = 0;
    for m in index.find_iter(text) {
        if m.start > pos {
            out.push(TextSegment::plain(&text[pos..m.start]));
        }
        out.push(TextSegment::highlight(&text[m.start..m.end], m.category));
        pos = m.end;
    }
    if pos < text.len() {
        out.push(TextSegment::plain(&text[pos..]));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/segment.rs"]
mod tests;
