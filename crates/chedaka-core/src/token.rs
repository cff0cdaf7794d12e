// The segmenter's output token type.

use crate::pada::Pada;

/// One segmented word with its grammatical reading, if any.
///
/// `info` is `None` exactly when the span was not recognized by the lexicon
/// and was covered by the unknown-token fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text: the span of the input covered by this token.
    pub text: String,
    /// The selected grammatical reading, if the span was recognized.
    pub info: Option<Pada>,
}

impl Token {
    /// Create a recognized token.
    pub fn new(text: impl Into<String>, info: Pada) -> Self {
        Self {
            text: text.into(),
            info: Some(info),
        }
    }

    /// Create an unknown token (no analysis available).
    pub fn unknown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            info: None,
        }
    }

    /// The lemma of the selected reading, if any.
    pub fn lemma(&self) -> Option<&str> {
        self.info.as_ref().map(Pada::lemma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pada::{Avyaya, Pratipadika};

    #[test]
    fn recognized_token_has_lemma() {
        let tok = Token::new(
            "gacCati",
            Pada::Avyaya(Avyaya {
                pratipadika: Pratipadika::new("gacCati"),
            }),
        );
        assert_eq!(tok.text, "gacCati");
        assert_eq!(tok.lemma(), Some("gacCati"));
    }

    #[test]
    fn unknown_token_has_no_lemma() {
        let tok = Token::unknown("gacCatf");
        assert_eq!(tok.text, "gacCatf");
        assert!(tok.info.is_none());
        assert_eq!(tok.lemma(), None);
    }
}
