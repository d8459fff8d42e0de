//! Actor matching.
//!
//! The word at a position selects the candidate phrases sharing that first
//! word. Candidates are already ordered longest first, so the first one whose
//! continuation aligns is the most specific actor at that position.

use std::ops::Range;

use codebook_dictionary::ActorPatternIndex;
use codebook_foundation::Connector;

use crate::align::{Direction, align};
use crate::config::MatchConfig;
use crate::sentence::Sentence;

/// A coded actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorCoding {
    /// Assigned code.
    pub code: String,
    /// Tokens covered by the actor phrase.
    pub span: Range<usize>,
}

/// Matches actor phrases against an [`ActorPatternIndex`].
#[derive(Clone, Copy, Debug)]
pub struct ActorMatcher<'a> {
    index: &'a ActorPatternIndex,
    config: &'a MatchConfig,
}

impl<'a> ActorMatcher<'a> {
    /// Creates a matcher over an index.
    #[must_use]
    pub fn new(index: &'a ActorPatternIndex, config: &'a MatchConfig) -> Self {
        Self { index, config }
    }

    /// Codes the actor phrase starting at `index`.
    ///
    /// Returns `None` if no phrase matches or the matching phrase is uncoded.
    #[must_use]
    pub fn code_at(&self, sentence: &Sentence, index: usize) -> Option<ActorCoding> {
        let first = sentence.word(index)?;
        let (entry, end) = self.index.candidates(first).iter().find_map(|entry| {
            let steps: Vec<(Connector, &str)> = entry
                .continuation
                .iter()
                .map(|(word, connector)| (*connector, word.as_str()))
                .collect();
            let end = align(
                sentence,
                index,
                Direction::Forward,
                &steps,
                Some(self.config.actor_gap),
            )?;
            Some((entry, end))
        })?;

        if entry.code.is_empty() {
            tracing::trace!(index, first, "actor uncoded");
            return None;
        }
        tracing::trace!(index, first, code = %entry.code, words = entry.word_count(), "actor coded");
        Some(ActorCoding {
            code: entry.code.clone(),
            span: index..end + 1,
        })
    }
}
