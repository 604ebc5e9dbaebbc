use std::collections::{BTreeMap, HashMap};

use aho_corasick::{AhoCorasick, MatchKind};

use crate::foundation::error::{TelopError, TelopResult};

/// Category-tagged keyword lookup, built once and shared read-only.
///
/// Matching is leftmost-longest: among keywords occurring in a text, the one starting earliest
/// wins, and among those starting at the same position the longest wins. Scanning is a single
/// pass over the text regardless of dictionary size.
#[derive(Clone, Debug, Default)]
pub struct KeywordIndex {
    keywords: Vec<String>, // unique, longest first
    categories: HashMap<String, String>,
    automaton: Option<AhoCorasick>, // None when there are no keywords
}

/// One keyword occurrence found by [`KeywordIndex::find_iter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordMatch<'a> {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
    /// Matched keyword.
    pub keyword: &'a str,
    /// Category the keyword belongs to.
    pub category: &'a str,
}

impl KeywordIndex {
    /// Index with no keywords; every text segments to a single plain run.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Flatten a category → keywords dictionary.
    ///
    /// Categories are applied in iteration order; a keyword listed under several categories
    /// belongs to the last one. Empty keywords are ignored.
    pub fn build<I, C, K, S>(dictionary: I) -> TelopResult<Self>
    where
        I: IntoIterator<Item = (C, K)>,
        C: Into<String>,
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories: HashMap<String, String> = HashMap::new();
        let mut keywords: Vec<String> = Vec::new();
        for (category, words) in dictionary {
            let category = category.into();
            for word in words {
                let word = word.into();
                if word.is_empty() {
                    continue;
                }
                if categories.insert(word.clone(), category.clone()).is_none() {
                    keywords.push(word);
                }
            }
        }
        // Stable, so equal-length keywords keep their declaration order.
        keywords.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));

        let automaton = if keywords.is_empty() {
            None
        } else {
            let ac = AhoCorasick::builder()
                .match_kind(MatchKind::LeftmostLongest)
                .build(&keywords)
                .map_err(|e| TelopError::validation(format!("keyword automaton: {e}")))?;
            Some(ac)
        };

        Ok(Self {
            keywords,
            categories,
            automaton,
        })
    }

    /// Parse a JSON object mapping category names to keyword arrays.
    ///
    /// Categories are processed in name order.
    pub fn from_json(s: &str) -> TelopResult<Self> {
        let dictionary: BTreeMap<String, Vec<String>> = serde_json::from_str(s)
            .map_err(|e| TelopError::malformed(format!("keyword dictionary: {e}")))?;
        Self::build(dictionary)
    }

    /// All keywords, longest first.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Category of `keyword`, if indexed.
    pub fn category_of(&self, keyword: &str) -> Option<&str> {
        self.categories.get(keyword).map(String::as_str)
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Return `true` when no keyword is indexed.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Non-overlapping leftmost-longest occurrences in `haystack`, left to right.
    ///
    /// After a match the scan resumes immediately after it.
    pub fn find_iter<'a>(
        &'a self,
        haystack: &'a str,
    ) -> impl Iterator<Item = KeywordMatch<'a>> + 'a {
        self.automaton
            .iter()
            .flat_map(move |ac| ac.find_iter(haystack))
            .filter_map(move |m| {
                let keyword = self.keywords.get(m.pattern().as_usize())?;
                let category = self.category_of(keyword)?;
                Some(KeywordMatch {
                    start: m.start(),
                    end: m.end(),
                    keyword,
                    category,
                })
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/keywords.rs"]
mod tests;
