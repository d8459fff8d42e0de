//! Step alignment.
//!
//! A pattern side is a list of `(connector, word)` steps walking away from an
//! anchor token. A tight step must land on the adjacent token; a loose step
//! may skip up to `loose_gap` tokens. The first alignment found, trying the
//! nearest position for each step before farther ones, is returned.

use codebook_foundation::Connector;

use crate::sentence::Sentence;

/// Which way steps walk from the anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards the end of the sentence.
    Forward,
    /// Towards the start of the sentence.
    Backward,
}

impl Direction {
    fn advance(self, from: usize, distance: usize) -> Option<usize> {
        match self {
            Self::Forward => from.checked_add(distance),
            Self::Backward => from.checked_sub(distance),
        }
    }
}

/// Aligns `steps` against `sentence` starting next to `anchor`.
///
/// Returns the index of the outermost matched token, or `anchor` itself when
/// there are no steps. `loose_gap` of `None` lets loose steps skip any number
/// of tokens within the sentence.
///
/// Each `(step, position)` pair is searched at most once, so the cost is
/// bounded by steps times sentence length times the gap.
#[must_use]
pub fn align(
    sentence: &Sentence,
    anchor: usize,
    direction: Direction,
    steps: &[(Connector, &str)],
    loose_gap: Option<usize>,
) -> Option<usize> {
    let mut aligner = Aligner {
        sentence,
        direction,
        steps,
        loose_gap,
        failed: vec![false; steps.len() * sentence.len()],
    };
    aligner.walk(0, anchor)
}

struct Aligner<'a> {
    sentence: &'a Sentence,
    direction: Direction,
    steps: &'a [(Connector, &'a str)],
    loose_gap: Option<usize>,
    /// Set for `(step, anchor)` pairs already known not to align.
    failed: Vec<bool>,
}

impl Aligner<'_> {
    fn walk(&mut self, step: usize, anchor: usize) -> Option<usize> {
        if step == self.steps.len() {
            return Some(anchor);
        }
        let slot = (anchor < self.sentence.len()).then(|| step * self.sentence.len() + anchor);
        if slot.is_some_and(|i| self.failed[i]) {
            return None;
        }
        let found = self.search(step, anchor);
        if found.is_none() {
            if let Some(i) = slot {
                self.failed[i] = true;
            }
        }
        found
    }

    /// Tries the nearest candidate positions for `step` first.
    fn search(&mut self, step: usize, anchor: usize) -> Option<usize> {
        let (connector, word) = self.steps[step];
        let max_skip = match connector {
            Connector::Tight => 0,
            Connector::Loose => self.loose_gap.unwrap_or(usize::MAX),
        };

        let mut skip: usize = 0;
        loop {
            let position = self.direction.advance(anchor, skip.checked_add(1)?)?;
            let candidate = self.sentence.word(position)?;
            if candidate == word {
                if let Some(end) = self.walk(step + 1, position) {
                    return Some(end);
                }
            }
            if skip == max_skip {
                return None;
            }
            skip += 1;
        }
    }
}
