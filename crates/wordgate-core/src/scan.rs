//! Banned-word scanning.
//!
//! Matching is plain substring containment: case-sensitive, no
//! normalization, no word boundaries. When several banned words occur, the
//! one listed first wins, regardless of where each appears in the text.

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

use crate::error::{GateError, GateResult};
use crate::wordlist::BannedWords;

/// A banned word found in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The offending word.
    pub word: String,
    /// Position of the word in the banned-word list.
    pub index: usize,
    /// Byte offset of the word's leftmost occurrence.
    pub offset: usize,
    /// 1-based line of the word's leftmost occurrence.
    pub line: usize,
}

impl Violation {
    /// The one-line failure message reported to the user.
    pub fn message(&self) -> String {
        format!("Word {} is banned!", self.word)
    }
}

/// Outcome of checking a text against a banned-word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Whether the text is free of banned words.
    pub pass: bool,
    /// Number of words in the banned-word list.
    pub checked: usize,
    /// The first banned word found, by list order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
}

/// Check `content` against `words` and summarize the result.
#[tracing::instrument(skip_all, fields(content_len = content.len(), words = words.len()))]
pub fn check(content: &str, words: &BannedWords) -> GateResult<ScanReport> {
    let violation = find_first_banned(content, words)?;
    match violation {
        Some(ref v) => tracing::info!(word = %v.word, index = v.index, line = v.line, "banned word found"),
        None => tracing::info!("no banned words found"),
    }
    Ok(ScanReport {
        pass: violation.is_none(),
        checked: words.len(),
        violation,
    })
}

/// Find the banned word with the lowest list index that occurs in `content`.
///
/// The text is traversed once with an Aho-Corasick automaton over every
/// candidate word. The search stops as soon as the first listed word
/// matches, since nothing can outrank it.
pub fn find_first_banned(content: &str, words: &BannedWords) -> GateResult<Option<Violation>> {
    let list = words.as_slice();

    // The empty string occurs in every text, so no word after it can win.
    let limit = list.iter().position(String::is_empty).unwrap_or(list.len());
    let candidates = &list[..limit];

    let mut best: Option<(usize, usize)> = None;
    if !candidates.is_empty() {
        let matcher =
            AhoCorasick::new(candidates).map_err(|e| GateError::Matcher(e.to_string()))?;
        // Overlapping matches arrive ordered by end position, so the first
        // match seen for a pattern is its leftmost occurrence.
        for m in matcher.find_overlapping_iter(content) {
            let index = m.pattern().as_usize();
            if best.is_none_or(|(current, _)| index < current) {
                best = Some((index, m.start()));
                if index == 0 {
                    break;
                }
            }
        }
    }

    if best.is_none() && limit < list.len() {
        best = Some((limit, 0));
    }

    Ok(best.map(|(index, offset)| Violation {
        word: list[index].clone(),
        index,
        offset,
        line: line_of(content, offset),
    }))
}

fn line_of(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> BannedWords {
        BannedWords::new(list.iter().map(|w| (*w).to_string()).collect())
    }

    fn first(content: &str, list: &[&str]) -> Option<String> {
        find_first_banned(content, &words(list))
            .unwrap()
            .map(|v| v.word)
    }

    #[test]
    fn reports_banned_call() {
        let v = find_first_banned("result = eval(x)", &words(&["eval", "exec"]))
            .unwrap()
            .unwrap();
        assert_eq!(v.word, "eval");
        assert_eq!(v.index, 0);
        assert_eq!(v.offset, 9);
        assert_eq!(v.message(), "Word eval is banned!");
    }

    #[test]
    fn clean_content_passes() {
        assert_eq!(first("result = compute(x)", &["eval", "exec"]), None);
    }

    #[test]
    fn list_order_beats_file_order() {
        let content = "import sys\nimport os\n";
        assert_eq!(
            first(content, &["import os", "import sys"]).as_deref(),
            Some("import os")
        );
    }

    #[test]
    fn later_word_reported_when_earlier_absent() {
        let v = find_first_banned("a\nb\nexec(cmd)", &words(&["eval", "exec"]))
            .unwrap()
            .unwrap();
        assert_eq!(v.index, 1);
        assert_eq!(v.line, 3);
    }

    #[test]
    fn empty_list_always_passes() {
        assert_eq!(first("anything at all", &[]), None);
        assert_eq!(first("", &[]), None);
    }

    #[test]
    fn empty_content_passes_without_empty_word() {
        assert_eq!(first("", &["eval"]), None);
    }

    #[test]
    fn empty_word_matches_everything() {
        let v = find_first_banned("", &words(&[""])).unwrap().unwrap();
        assert_eq!(v.word, "");
        assert_eq!(v.offset, 0);
        assert_eq!(v.line, 1);
        assert_eq!(v.message(), "Word  is banned!");
    }

    #[test]
    fn earlier_word_outranks_empty_word() {
        assert_eq!(first("xx goto yy", &["goto", ""]).as_deref(), Some("goto"));
        assert_eq!(first("xx yy", &["goto", ""]).as_deref(), Some(""));
        assert_eq!(first("xx goto", &["", "goto"]).as_deref(), Some(""));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(first("EVAL(x)", &["eval"]), None);
    }

    #[test]
    fn no_word_boundaries() {
        assert_eq!(first("evaluate()", &["eval"]).as_deref(), Some("eval"));
    }

    #[test]
    fn line_endings_are_not_normalized() {
        let banned = &["int\nmain"];
        assert_eq!(first("int\nmain()", banned).as_deref(), Some("int\nmain"));
        assert_eq!(first("int\r\nmain()", banned), None);
    }

    #[test]
    fn overlapping_words_are_all_seen() {
        // "bc" sits inside "abcd"; both occur, the listed-first one wins.
        assert_eq!(first("abcd", &["abcd", "bc"]).as_deref(), Some("abcd"));
        assert_eq!(first("abcd", &["cd", "abcd"]).as_deref(), Some("cd"));
        assert_eq!(first("xabcdx", &["zz", "abcd", "bc"]).as_deref(), Some("abcd"));
    }

    #[test]
    fn duplicate_words_report_first_index() {
        let v = find_first_banned("new int", &words(&["delete", "new", "new"]))
            .unwrap()
            .unwrap();
        assert_eq!(v.index, 1);
    }

    #[test]
    fn offset_is_leftmost_occurrence() {
        let v = find_first_banned("x\nmalloc\nmalloc", &words(&["malloc"]))
            .unwrap()
            .unwrap();
        assert_eq!(v.offset, 2);
        assert_eq!(v.line, 2);
    }

    #[test]
    fn handles_multibyte_text() {
        let v = find_first_banned("naïve\n// café", &words(&["café"]))
            .unwrap()
            .unwrap();
        assert_eq!(v.line, 2);
        assert_eq!(&"naïve\n// café"[v.offset..], "café");
    }

    #[test]
    fn agrees_with_naive_containment() {
        let texts = [
            "",
            "std::vector<int> v;",
            "#include <algorithm>\nstd::sort(v.begin(), v.end());",
            "auto p = std::make_shared<int>(1);",
            "printf(\"%d\", x); cout << x;",
        ];
        let list = [
            "std::sort",
            "make_shared",
            "<algorithm>",
            "cout",
            "printf",
            "vector",
            "std::",
        ];
        // Every rotation of the list, so each word gets a turn at the front.
        for shift in 0..list.len() {
            let mut rotated = list.to_vec();
            rotated.rotate_left(shift);
            for text in texts {
                let expected = rotated
                    .iter()
                    .find(|w| text.contains(**w))
                    .map(|w| (*w).to_string());
                assert_eq!(first(text, &rotated), expected, "text {text:?}, list {rotated:?}");
            }
        }
    }

    #[test]
    fn check_builds_report() {
        let report = check("exec(cmd)", &words(&["eval", "exec"])).unwrap();
        assert!(!report.pass);
        assert_eq!(report.checked, 2);
        assert_eq!(report.violation.map(|v| v.word).as_deref(), Some("exec"));

        let report = check("compute(x)", &words(&["eval"])).unwrap();
        assert!(report.pass);
        assert!(report.violation.is_none());
    }

    #[test]
    fn report_serializes_without_violation_when_clean() {
        let report = check("ok", &words(&["eval"])).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["pass"], true);
        assert!(json.get("violation").is_none());
    }
}
