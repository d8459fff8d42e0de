//! Actor phrase index.
//!
//! Actor phrases are indexed on their first word. Each key holds every phrase
//! starting with that word, longest first, so a matcher walking the list
//! tries `UNITED NATIONS SECURITY COUNCIL` before `UNITED NATIONS`, and both
//! before a bare `UNITED`.
//!
//! Actor lines use the same `phrase [CODE]` shape as verbs. A line starting
//! with `+` adds a synonym for the most recent actor and inherits its code
//! unless it carries its own.

use std::cmp::Reverse;
use std::collections::HashMap;

use codebook_foundation::{Connector, Error, MalformedReason, Result};

use crate::line::{SplitLine, meaningful_lines};
use crate::options::LoadOptions;
use crate::phrase::segments;
use crate::report::LoadReport;

/// One actor phrase, minus its first word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorPatternEntry {
    /// Actor code.
    pub code: String,
    /// Connector after the first word; loose for single-word phrases.
    pub leading_connector: Connector,
    /// Remaining words, each with the connector that precedes it.
    pub continuation: Vec<(String, Connector)>,
}

impl ActorPatternEntry {
    /// Number of words in the full phrase, key included.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.continuation.len() + 1
    }
}

/// Actor phrases keyed on their first word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActorPatternIndex {
    entries: HashMap<String, Vec<ActorPatternEntry>>,
}

impl ActorPatternIndex {
    /// Creates a new empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles a whole actor dictionary source.
    ///
    /// # Errors
    /// Returns the first fatal error, annotated with its line number.
    pub fn compile_source(source: &str, options: &LoadOptions) -> Result<(Self, LoadReport)> {
        let mut builder = ActorIndexBuilder::new();
        for (line_no, text) in meaningful_lines(source, &options.comment_prefix) {
            builder.add_line(text).map_err(|e| e.at_line(line_no))?;
        }
        Ok(builder.finish())
    }

    /// Returns the candidate phrases for a first word, longest first.
    #[must_use]
    pub fn candidates(&self, first_word: &str) -> &[ActorPatternEntry] {
        self.entries
            .get(first_word)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns true if any phrase starts with this word.
    #[must_use]
    pub fn contains_key(&self, first_word: &str) -> bool {
        self.entries.contains_key(first_word)
    }

    /// Number of distinct first words.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of phrases across all keys.
    #[must_use]
    pub fn phrase_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Returns true if the index holds no phrases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over keys and their candidate lists, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ActorPatternEntry])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Builds an [`ActorPatternIndex`] from actor lines.
#[derive(Debug, Default)]
pub struct ActorIndexBuilder {
    entries: HashMap<String, Vec<ActorPatternEntry>>,
    last_code: Option<String>,
    lines: usize,
}

impl ActorIndexBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one actor line.
    ///
    /// # Errors
    /// Returns a malformed-line error for unbalanced brackets, a phrase with
    /// no words, or a synonym line before any actor.
    pub fn add_line(&mut self, text: &str) -> Result<()> {
        let split = SplitLine::parse(text)?;
        let (phrase, code) = match split.phrase.strip_prefix('+') {
            Some(synonym) => {
                let inherited = self.last_code.as_deref().ok_or_else(|| {
                    Error::malformed_line(MalformedReason::SynonymWithoutActor, text)
                })?;
                let code = if split.code.is_empty() {
                    inherited
                } else {
                    split.code
                };
                (synonym, code.to_string())
            }
            None => {
                self.last_code = Some(split.code.to_string());
                (split.phrase, split.code.to_string())
            }
        };
        self.add_phrase(phrase, code)
            .ok_or_else(|| Error::malformed_line(MalformedReason::EmptyPhrase, text))?;
        self.lines += 1;
        Ok(())
    }

    /// Adds a phrase with its code. Returns `None` if the phrase has no words.
    ///
    /// Words are uppercased to match sentence tokens.
    pub fn add_phrase(&mut self, phrase: &str, code: impl Into<String>) -> Option<()> {
        let mut words = segments(phrase).into_iter();
        let key = words.next()?.word.to_uppercase();

        let mut leading_connector = Connector::Loose;
        let mut continuation = Vec::new();
        for (i, segment) in words.enumerate() {
            let joint = segment.joined_by.unwrap_or(Connector::Loose);
            if i == 0 {
                leading_connector = joint;
            }
            continuation.push((segment.word.to_uppercase(), joint));
        }

        self.entries.entry(key).or_default().push(ActorPatternEntry {
            code: code.into(),
            leading_connector,
            continuation,
        });
        Some(())
    }

    /// Sorts every key's phrases longest first and returns the index.
    ///
    /// The sort is stable: phrases of equal length keep the order in which
    /// they were added.
    #[must_use]
    pub fn finish(mut self) -> (ActorPatternIndex, LoadReport) {
        for list in self.entries.values_mut() {
            list.sort_by_key(|entry| Reverse(entry.continuation.len()));
        }
        let index = ActorPatternIndex {
            entries: self.entries,
        };
        tracing::info!(
            keys = index.key_count(),
            phrases = index.phrase_count(),
            "actor dictionary compiled"
        );
        let report = LoadReport {
            lines: self.lines,
            warnings: Vec::new(),
        };
        (index, report)
    }
}
