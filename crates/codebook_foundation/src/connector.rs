//! Word connectors.
//!
//! Dictionary phrases join their words with either a space or an underscore.
//! The two characters carry different binding strength at match time, so they
//! are kept as a typed value instead of raw characters.

use std::fmt;

/// The joint between two adjacent words of a dictionary phrase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Connector {
    /// A space: the next word may follow at a distance.
    Loose,
    /// An underscore: the next word must follow immediately.
    Tight,
}

impl Connector {
    /// Character written for a loose connector.
    pub const LOOSE_CHAR: char = ' ';

    /// Character written for a tight connector.
    pub const TIGHT_CHAR: char = '_';

    /// Classifies a character as a connector, if it is one.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            Self::LOOSE_CHAR => Some(Self::Loose),
            Self::TIGHT_CHAR => Some(Self::Tight),
            _ => None,
        }
    }

    /// Returns the dictionary character for this connector.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Loose => Self::LOOSE_CHAR,
            Self::Tight => Self::TIGHT_CHAR,
        }
    }

    /// Returns true if this connector requires strict adjacency.
    #[must_use]
    pub const fn is_tight(self) -> bool {
        matches!(self, Self::Tight)
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
