//! Sandhi rule table and fusion-boundary splitting.
//!
//! A sandhi rule `(first, second, result)` states that a word ending in
//! `first` followed by a word beginning with `second` surfaces as the fused
//! text `result`. The [`Splitter`] answers the reverse query: given a
//! position in fused text, which rules could have produced the sounds seen
//! there? Each candidate carries a phonotactic validity flag so the caller
//! can discard reconstructions that could never be real words.
//!
//! The splitter is a pure lookup table: identical inputs always produce the
//! identical candidate sequence, and the number of candidates per boundary
//! is bounded by the number of rules.

use std::fs;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;

use chedaka_core::sounds;

/// Error type for loading sandhi rules.
#[derive(Debug, thiserror::Error)]
pub enum SandhiError {
    #[error("sandhi rules not found at {0}")]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed sandhi rule on line {line}: expected `first,second,result`")]
    MalformedRule { line: usize },
}

/// One sandhi rule, as stored in the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Final sounds of the earlier word, before fusion.
    pub first: String,
    /// Initial sounds of the later word, before fusion.
    pub second: String,
    /// The fused surface text that replaces `first + second`.
    pub result: String,
}

/// One candidate reconstruction at a fusion boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Underlying final sounds of the left word.
    pub first: String,
    /// Underlying initial sounds of the right word.
    pub second: String,
    /// Length in characters of the fused region in the surface text.
    pub result_len: usize,
    /// True when the fused region ends with `second` unchanged, so the
    /// right word can resume directly from the surface text.
    pub keeps_second: bool,
    /// True when both fragments are phonotactically plausible word edges.
    pub is_valid: bool,
}

/// A reversed sandhi rule table.
///
/// Rules are indexed by the leading character of their fused `result`, so
/// a query touches only the rules that could possibly match at the
/// boundary.
#[derive(Debug)]
pub struct Splitter {
    by_leading_char: HashMap<char, Vec<Rule>>,
    num_rules: usize,
}

impl Splitter {
    /// Load rules from a `first,second,result` CSV file.
    ///
    /// Fails fast if the file is missing; running with an empty rule table
    /// would silently disable fusion-reversed recognition.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, SandhiError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(SandhiError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        Self::from_csv_text(&text)
    }

    /// Parse rules from CSV text. The first line is a header and is skipped.
    pub fn from_csv_text(text: &str) -> Result<Self, SandhiError> {
        let mut rules = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if i == 0 || line.is_empty() {
                continue;
            }
            let mut fields = line.splitn(3, ',');
            let (Some(first), Some(second), Some(result)) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(SandhiError::MalformedRule { line: i + 1 });
            };
            if result.is_empty() {
                return Err(SandhiError::MalformedRule { line: i + 1 });
            }
            rules.push(Rule {
                first: first.to_string(),
                second: second.to_string(),
                result: result.to_string(),
            });
        }
        Ok(Self::from_rules(rules))
    }

    /// Build a splitter from rules directly, preserving rule order.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut by_leading_char: HashMap<char, Vec<Rule>> = HashMap::new();
        let mut num_rules = 0;
        for rule in rules {
            // from_csv_text rejects empty results, but from_rules is public.
            let Some(lead) = rule.result.chars().next() else {
                continue;
            };
            by_leading_char.entry(lead).or_default().push(rule);
            num_rules += 1;
        }
        Self {
            by_leading_char,
            num_rules,
        }
    }

    /// Enumerate every rule whose fused `result` matches the surface text
    /// at character position `pos`, in rule-table order.
    pub fn split_at(&self, text: &[char], pos: usize) -> Vec<Split> {
        let remaining = &text[pos.min(text.len())..];
        let Some(&lead) = remaining.first() else {
            return Vec::new();
        };
        let Some(candidates) = self.by_leading_char.get(&lead) else {
            return Vec::new();
        };

        candidates
            .iter()
            .filter(|rule| starts_with_str(remaining, &rule.result))
            .map(|rule| Split {
                first: rule.first.clone(),
                second: rule.second.clone(),
                result_len: rule.result.chars().count(),
                keeps_second: !rule.second.is_empty() && rule.result.ends_with(&rule.second),
                is_valid: is_plausible(&rule.first, &rule.second),
            })
            .collect()
    }

    /// The number of rules in the table.
    pub fn len(&self) -> usize {
        self.num_rules
    }

    pub fn is_empty(&self) -> bool {
        self.num_rules == 0
    }
}

/// Check whether `text` starts with exactly the characters of `prefix`.
fn starts_with_str(text: &[char], prefix: &str) -> bool {
    let mut i = 0;
    for c in prefix.chars() {
        if i >= text.len() || text[i] != c {
            return false;
        }
        i += 1;
    }
    true
}

/// A reconstruction is plausible when the left fragment could end a word
/// and the right fragment could begin one.
fn is_plausible(first: &str, second: &str) -> bool {
    let left_ok = first
        .chars()
        .next_back()
        .is_some_and(|c| sounds::is_sound(c) && sounds::is_valid_final(c));
    let right_ok = second.chars().next().is_some_and(sounds::is_sound);
    left_ok && right_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &str = "first,second,result\n\
                         i,a,y a\n\
                         as,g,o g\n\
                         a,i,e\n";

    fn splitter() -> Splitter {
        Splitter::from_csv_text(RULES).expect("parse")
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn parses_rule_count() {
        assert_eq!(splitter().len(), 3);
        assert!(!splitter().is_empty());
    }

    #[test]
    fn rejects_malformed_line() {
        let err = Splitter::from_csv_text("first,second,result\nonly-one-field\n").unwrap_err();
        assert!(matches!(err, SandhiError::MalformedRule { line: 2 }));
    }

    #[test]
    fn no_match_yields_nothing() {
        let s = splitter();
        let text = chars("gacCati");
        assert!(s.split_at(&text, 0).is_empty());
        assert!(s.split_at(&text, 7).is_empty()); // end of text
    }

    #[test]
    fn matches_fused_region() {
        let s = splitter();
        // "arjuno gacCati": "o g" begins at position 5.
        let text = chars("arjuno gacCati");
        let splits = s.split_at(&text, 5);
        assert_eq!(splits.len(), 1);
        let split = &splits[0];
        assert_eq!(split.first, "as");
        assert_eq!(split.second, "g");
        assert_eq!(split.result_len, 3);
        assert!(split.keeps_second);
        assert!(split.is_valid);
    }

    #[test]
    fn vowel_merge_rule_matches() {
        let s = splitter();
        // "ceti" = "ca" + "iti": the fused "e" is at position 1.
        let text = chars("ceti");
        let splits = s.split_at(&text, 1);
        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].first, "a");
        assert_eq!(splits[0].second, "i");
        assert_eq!(splits[0].result_len, 1);
        // "e" swallowed the initial "i"; the right word cannot resume from
        // the surface text alone.
        assert!(!splits[0].keeps_second);
    }

    #[test]
    fn candidates_follow_rule_order() {
        let s = Splitter::from_csv_text(
            "first,second,result\n\
             as,g,o g\n\
             aH,g,o g\n",
        )
        .expect("parse");
        let text = chars("o gacCati");
        let splits = s.split_at(&text, 0);
        assert_eq!(splits.len(), 2);
        assert_eq!(splits[0].first, "as");
        assert_eq!(splits[1].first, "aH");
    }

    #[test]
    fn implausible_fragment_is_flagged() {
        let s = Splitter::from_csv_text(
            "first,second,result\n\
             G,a,ga\n",
        )
        .expect("parse");
        let text = chars("gacCati");
        let splits = s.split_at(&text, 0);
        assert_eq!(splits.len(), 1);
        // No Sanskrit word ends in an aspirate.
        assert!(!splits[0].is_valid);
    }

    #[test]
    fn missing_file_fails_fast() {
        let err = Splitter::from_csv(Path::new("/nonexistent/sandhi-rules.csv")).unwrap_err();
        assert!(matches!(err, SandhiError::NotFound(_)));
    }

    #[test]
    fn deterministic_across_calls() {
        let s = splitter();
        let text = chars("arjuno gacCati");
        let a = s.split_at(&text, 5);
        let b = s.split_at(&text, 5);
        assert_eq!(a, b);
    }
}
