//! Phrase scanning.
//!
//! Breaks dictionary phrase text into words and the connectors between them.
//! A phrase is split left to right on whichever of `' '` or `'_'` occurs
//! first, so `UNITED_NATIONS FORCES` yields `UNITED`, tight, `NATIONS`,
//! loose, `FORCES`.

use std::fmt;

use codebook_foundation::Connector;

/// One element of a compiled phrase: a word or the connector after it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PatternToken {
    /// A literal word or stem.
    Word(String),
    /// The joint between two words.
    Connector(Connector),
}

impl PatternToken {
    /// Returns the word, if this token is one.
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(w),
            Self::Connector(_) => None,
        }
    }

    /// Returns the connector, if this token is one.
    #[must_use]
    pub fn as_connector(&self) -> Option<Connector> {
        match self {
            Self::Word(_) => None,
            Self::Connector(c) => Some(*c),
        }
    }
}

impl fmt::Display for PatternToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(w) => f.write_str(w),
            Self::Connector(c) => write!(f, "{c}"),
        }
    }
}

/// A word of a phrase together with the connector that precedes it.
///
/// The first word of a phrase has no preceding connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Connector joining this word to the previous one.
    pub joined_by: Option<Connector>,
    /// The word itself.
    pub word: &'a str,
}

/// Splits phrase text into words, each tagged with its preceding connector.
///
/// Leading and trailing connectors are dropped. A run of several connector
/// characters between two words counts as one joint, tight if any character
/// in the run is an underscore.
#[must_use]
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut pending: Option<Connector> = None;
    let mut start = None;

    for (i, c) in text.char_indices() {
        match Connector::from_char(c) {
            Some(connector) => {
                if let Some(s) = start.take() {
                    push_segment(&mut out, pending.take(), &text[s..i]);
                }
                if !out.is_empty() {
                    pending = Some(match pending {
                        Some(Connector::Tight) => Connector::Tight,
                        _ => connector,
                    });
                }
            }
            None => {
                if start.is_none() {
                    start = Some(i);
                }
            }
        }
    }
    if let Some(s) = start {
        push_segment(&mut out, pending, &text[s..]);
    }
    out
}

fn push_segment<'a>(out: &mut Vec<Segment<'a>>, joined_by: Option<Connector>, word: &'a str) {
    let joined_by = if out.is_empty() {
        None
    } else {
        Some(joined_by.unwrap_or(Connector::Loose))
    };
    out.push(Segment { joined_by, word });
}

/// Compiles phrase text into alternating word and connector tokens.
///
/// The result begins and ends on a word; an empty phrase compiles to an empty
/// list.
#[must_use]
pub fn scan_phrase(text: &str) -> Vec<PatternToken> {
    let mut tokens = Vec::new();
    for segment in segments(text) {
        if let Some(connector) = segment.joined_by {
            tokens.push(PatternToken::Connector(connector));
        }
        tokens.push(PatternToken::Word(segment.word.to_string()));
    }
    tokens
}

/// Writes tokens back out as phrase text.
#[must_use]
pub fn render_tokens<'a>(tokens: impl IntoIterator<Item = &'a PatternToken>) -> String {
    tokens.into_iter().map(ToString::to_string).collect()
}

/// Returns true if the tokens alternate word/connector and start and end on
/// a word.
#[must_use]
pub fn is_well_formed(tokens: &[PatternToken]) -> bool {
    if tokens.is_empty() {
        return true;
    }
    tokens.len() % 2 == 1
        && tokens.iter().enumerate().all(|(i, t)| match t {
            PatternToken::Word(w) => i % 2 == 0 && !w.is_empty(),
            PatternToken::Connector(_) => i % 2 == 1,
        })
}
