//! Banned-word list loading.
//!
//! A banned-words document is a JSON object with an optional `banned_words`
//! key holding an array of strings:
//!
//! ```json
//! { "banned_words": ["eval", "exec"] }
//! ```
//!
//! A missing key means an empty list. Any other top-level keys are ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::GateResult;

/// On-disk shape of a banned-words document.
#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    banned_words: Vec<String>,
}

/// An ordered list of banned words.
///
/// Order matters: when several words occur in a file, the one with the
/// lowest index is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannedWords(Vec<String>);

impl BannedWords {
    /// Wrap an already-ordered list of words.
    pub const fn new(words: Vec<String>) -> Self {
        Self(words)
    }

    /// Parse a banned-words JSON document.
    ///
    /// Fails when the text is not JSON, when the top level is not an object,
    /// or when `banned_words` is present but is not an array of strings.
    #[tracing::instrument(skip(json), fields(json_len = json.len()))]
    pub fn from_json_str(json: &str) -> GateResult<Self> {
        let object: Map<String, Value> = serde_json::from_str(json)?;
        let document: Document = serde_json::from_value(Value::Object(object))?;
        tracing::debug!(count = document.banned_words.len(), "parsed banned words");
        Ok(Self(document.banned_words))
    }

    /// Iterate over the words in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of words in the list.
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no words are banned.
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The words as a slice, in list order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a BannedWords {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GateError;

    #[test]
    fn parses_words_in_order() {
        let words = BannedWords::from_json_str(r#"{"banned_words": ["eval", "exec"]}"#).unwrap();
        assert_eq!(words.as_slice(), ["eval", "exec"]);
    }

    #[test]
    fn missing_key_is_empty() {
        let words = BannedWords::from_json_str("{}").unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn ignores_unrelated_keys() {
        let words =
            BannedWords::from_json_str(r#"{"comment": "c++ task", "banned_words": ["std::sort"]}"#)
                .unwrap();
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn keeps_duplicates_and_empty_strings() {
        let words = BannedWords::from_json_str(r#"{"banned_words": ["a", "", "a"]}"#).unwrap();
        assert_eq!(words.as_slice(), ["a", "", "a"]);
    }

    #[test]
    fn iterates_in_list_order() {
        let words = BannedWords::new(vec!["goto".to_string(), "malloc".to_string()]);
        let collected: Vec<&str> = words.iter().map(String::as_str).collect();
        assert_eq!(collected, ["goto", "malloc"]);

        let mut count = 0;
        for word in &words {
            assert!(!word.is_empty());
            count += 1;
        }
        assert_eq!(count, words.len());
    }

    #[test]
    fn rejects_invalid_json() {
        let err = BannedWords::from_json_str(r#"{"banned_words": ["eval""#).unwrap_err();
        assert!(matches!(err, GateError::Parse(_)));
    }

    #[test]
    fn rejects_non_object_top_level() {
        let err = BannedWords::from_json_str(r#"["eval"]"#).unwrap_err();
        assert!(matches!(err, GateError::Parse(_)));
    }

    #[test]
    fn rejects_non_string_entries() {
        let err = BannedWords::from_json_str(r#"{"banned_words": ["eval", 42]}"#).unwrap_err();
        assert!(matches!(err, GateError::Parse(_)));
    }

    #[test]
    fn rejects_null_list() {
        let err = BannedWords::from_json_str(r#"{"banned_words": null}"#).unwrap_err();
        assert!(err.to_string().starts_with("malformed banned-words document"));
    }
}
