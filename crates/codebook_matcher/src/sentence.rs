//! Tagged sentences.
//!
//! The matcher works on one sentence at a time: a sequence of words, each
//! with the part-of-speech tag supplied by the annotation service. Words are
//! uppercased on the way in to follow the dictionaries' convention.

/// A word and its part-of-speech tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedToken {
    /// Uppercased word.
    pub word: String,
    /// Tag as supplied; empty when untagged.
    pub tag: String,
}

impl TaggedToken {
    /// Creates a token, uppercasing the word.
    #[must_use]
    pub fn new(word: &str, tag: impl Into<String>) -> Self {
        Self {
            word: word.to_uppercase(),
            tag: tag.into(),
        }
    }
}

/// A tokenized sentence ready for matching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<TaggedToken>,
}

impl Sentence {
    /// Builds a sentence from `(word, tag)` pairs.
    #[must_use]
    pub fn from_tagged<W, T>(pairs: impl IntoIterator<Item = (W, T)>) -> Self
    where
        W: AsRef<str>,
        T: Into<String>,
    {
        Self {
            tokens: pairs
                .into_iter()
                .map(|(word, tag)| TaggedToken::new(word.as_ref(), tag))
                .collect(),
        }
    }

    /// Splits plain text on whitespace into untagged tokens.
    ///
    /// Sentence punctuation is stripped. Underscores and hyphens are kept as
    /// part of the word.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let tokens = text
            .split_whitespace()
            .map(|raw| {
                raw.chars()
                    .filter(|c| !matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '"' | '(' | ')'))
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .map(|word| TaggedToken::new(&word, String::new()))
            .collect();
        Self { tokens }
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the sentence has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the word at `index`.
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|t| t.word.as_str())
    }

    /// Returns the tag at `index`.
    #[must_use]
    pub fn tag(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|t| t.tag.as_str())
    }

    /// Returns the space-terminated literal of `count` words starting at
    /// `index`, or `None` if the sentence is too short.
    #[must_use]
    pub fn literal(&self, index: usize, count: usize) -> Option<String> {
        let words = self.tokens.get(index..index.checked_add(count)?)?;
        if words.is_empty() {
            return None;
        }
        let mut literal = String::new();
        for token in words {
            literal.push_str(&token.word);
            literal.push(' ');
        }
        Some(literal)
    }

    /// Returns all tokens.
    #[must_use]
    pub fn tokens(&self) -> &[TaggedToken] {
        &self.tokens
    }
}
