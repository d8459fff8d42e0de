//! Verb matching.
//!
//! A verb is found by looking up the words at a position in the verb table,
//! longest literal first. Its canonical entry's patterns are then tried in
//! declaration order; the first one whose words all align around the verb
//! supplies the code. Otherwise the canonical entry's own code is used.

use std::ops::Range;

use codebook_dictionary::{ResolvedVerb, VerbTable};

use crate::align::{Direction, align};
use crate::config::MatchConfig;
use crate::sentence::Sentence;

/// A coded verb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbCoding {
    /// Assigned code.
    pub code: String,
    /// Canonical literal the verb resolved to.
    pub primary: String,
    /// Tokens of the verb itself.
    pub span: Range<usize>,
    /// Tokens covered by the verb and its matched pattern words.
    pub context: Range<usize>,
    /// Index of the matched pattern in declaration order, if any.
    pub pattern: Option<usize>,
}

/// Matches verbs against a [`VerbTable`].
#[derive(Clone, Copy, Debug)]
pub struct VerbMatcher<'a> {
    table: &'a VerbTable,
    config: &'a MatchConfig,
}

impl<'a> VerbMatcher<'a> {
    /// Creates a matcher over a table.
    #[must_use]
    pub fn new(table: &'a VerbTable, config: &'a MatchConfig) -> Self {
        Self { table, config }
    }

    /// Finds the verb starting at `index`, trying the longest literal first.
    ///
    /// Returns the resolved entry and the number of words it spans.
    #[must_use]
    pub fn lookup(&self, sentence: &Sentence, index: usize) -> Option<(ResolvedVerb<'a>, usize)> {
        let longest = self.table.max_words().min(sentence.len().saturating_sub(index));
        (1..=longest).rev().find_map(|count| {
            let literal = sentence.literal(index, count)?;
            self.table.resolve(&literal).map(|resolved| (resolved, count))
        })
    }

    /// Codes the verb at `index`.
    ///
    /// Returns `None` if no verb starts there or its code is empty.
    #[must_use]
    pub fn code_at(&self, sentence: &Sentence, index: usize) -> Option<VerbCoding> {
        let (resolved, count) = self.lookup(sentence, index)?;
        let end = index + count;
        let last = end - 1;

        let matched = resolved.patterns.iter().enumerate().find_map(|(i, pattern)| {
            let high_end = align(
                sentence,
                last,
                Direction::Forward,
                &pattern.high_steps(),
                self.config.verb_gap,
            )?;
            let low_start = align(
                sentence,
                index,
                Direction::Backward,
                &pattern.low_steps(),
                self.config.verb_gap,
            )?;
            Some((i, pattern.code.as_str(), low_start..high_end + 1))
        });

        let (pattern, code, context) = match matched {
            Some((i, code, context)) => (Some(i), code, context),
            None => (None, resolved.code, index..end),
        };

        if code.is_empty() {
            tracing::trace!(index, primary = resolved.primary, "verb uncoded");
            return None;
        }
        tracing::trace!(index, primary = resolved.primary, code, ?pattern, "verb coded");
        Some(VerbCoding {
            code: code.to_string(),
            primary: resolved.primary.to_string(),
            span: index..end,
            context,
            pattern,
        })
    }
}
