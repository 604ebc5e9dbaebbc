use std::fmt;

/// Identifier of a subtitle entry.
///
/// Source data uses integers; entries produced by sentence splitting carry string ids such as
/// `"7-2"`. Comparisons against user-supplied ids go through the display form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    /// Numeric id as found in source files.
    Number(i64),
    /// Textual id.
    Text(String),
}

impl EntryId {
    /// Return `true` when this id's display form equals `other`.
    pub fn matches(&self, other: &str) -> bool {
        match self {
            Self::Number(n) => n.to_string() == other,
            Self::Text(s) => s == other,
        }
    }

    /// Id of the `index`-th (1-based) child produced from this entry.
    pub fn child(&self, index: usize) -> Self {
        Self::Text(format!("{self}-{index}"))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntryId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// Explicit style hint attached to an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    /// Regular caption.
    Normal,
    /// Emphasized caption for loud speech.
    Loud,
    /// Banner treatment. Not a caption variant; classification falls back to volume.
    NewsFlash,
}

/// Visual treatment resolved for a caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleVariant {
    /// Regular caption.
    Normal,
    /// Emphasized caption.
    Loud,
}

/// One timed caption record.
///
/// Visibility is the half-open window `[start_time, end_time)` in seconds. Entries are never
/// mutated in place: splitting and retiming produce new values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitleEntry {
    /// Entry id.
    pub id: EntryId,
    /// Inclusive start, seconds.
    pub start_time: f64,
    /// Exclusive end, seconds.
    pub end_time: f64,
    /// Caption text.
    pub text: String,
    /// Explicit style hint.
    #[serde(rename = "style", default, skip_serializing_if = "Option::is_none")]
    pub style_tag: Option<StyleTag>,
    /// Pre-computed speech volume in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_level: Option<f64>,
}

impl SubtitleEntry {
    /// Build an entry without style or volume hints.
    pub fn new(
        id: impl Into<EntryId>,
        start_time: f64,
        end_time: f64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start_time,
            end_time,
            text: text.into(),
            style_tag: None,
            volume_level: None,
        }
    }

    /// Copy with an explicit style hint.
    pub fn with_style(mut self, tag: StyleTag) -> Self {
        self.style_tag = Some(tag);
        self
    }

    /// Copy with a volume level.
    pub fn with_volume(mut self, level: f64) -> Self {
        self.volume_level = Some(level);
        self
    }

    /// Copy with a new visibility window.
    pub fn with_times(&self, start_time: f64, end_time: f64) -> Self {
        Self {
            start_time,
            end_time,
            ..self.clone()
        }
    }

    /// Length of the visibility window in seconds.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Return `true` when `time` is inside `[start_time, end_time)`.
    pub fn is_active_at(&self, time: f64) -> bool {
        self.start_time <= time && time < self.end_time
    }
}
