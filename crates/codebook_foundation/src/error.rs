//! Error types for the Codebook system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::io;

use thiserror::Error;

/// The main error type for Codebook operations.
#[derive(Debug, Error)]
#[error("{kind}{}", display_context(.context.as_ref()))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

fn display_context(context: Option<&ErrorContext>) -> String {
    match context {
        Some(ctx) if ctx.source.is_some() || ctx.line.is_some() => format!(" ({ctx})"),
        _ => String::new(),
    }
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Attaches a line number, keeping any source name already present.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_line(line));
        self
    }

    /// Attaches a dictionary source name, keeping any line already present.
    #[must_use]
    pub fn in_source(mut self, source: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_source(source));
        self
    }

    /// Creates a malformed dictionary line error.
    #[must_use]
    pub fn malformed_line(reason: MalformedReason, text: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedLine {
            reason,
            text: text.into(),
        })
    }

    /// Creates an alias cycle error.
    #[must_use]
    pub fn alias_cycle(alias: impl Into<String>, hops: usize) -> Self {
        Self::new(ErrorKind::UnresolvedAliasCycle {
            alias: alias.into(),
            hops,
        })
    }

    /// Creates a dangling alias error.
    #[must_use]
    pub fn dangling_alias(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(ErrorKind::DanglingAlias {
            alias: alias.into(),
            target: target.into(),
        })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Returns true if this error came from malformed dictionary text.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedLine { .. })
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A dictionary line could not be parsed; the load is aborted.
    #[error("malformed dictionary line: {reason}: {text:?}")]
    MalformedLine {
        /// What was wrong with the line.
        reason: MalformedReason,
        /// The offending line, as read.
        text: String,
    },

    /// Alias resolution did not reach a primary entry within the hop bound.
    #[error("alias {alias:?} did not resolve to a primary within {hops} hops")]
    UnresolvedAliasCycle {
        /// The literal whose resolution failed.
        alias: String,
        /// The hop bound that was exceeded.
        hops: usize,
    },

    /// An alias points at a literal that is not in the table.
    #[error("alias {alias:?} points at missing entry {target:?}")]
    DanglingAlias {
        /// The alias literal.
        alias: String,
        /// The missing canonical literal.
        target: String,
    },

    /// Reading a dictionary or configuration file failed.
    #[error("i/o error: {0}")]
    Io(io::Error),

    /// Configuration could not be parsed or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),
}

/// The specific structural problem of a malformed dictionary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// A `[` without a closing `]`, or a `]` before any `[`.
    UnbalancedBrackets,
    /// A `{` without a closing `}`.
    UnbalancedBraces,
    /// A `-` pattern line appeared before any primary verb.
    ExtensionWithoutPrimary,
    /// A `{...}` form block appeared before any primary verb.
    FormsWithoutPrimary,
    /// A `+` synonym line appeared before any actor.
    SynonymWithoutActor,
    /// The phrase text contains no word.
    EmptyPhrase,
    /// The text after `*` does not begin with a connector character.
    MissingLowConnector,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::UnbalancedBrackets => "unbalanced brackets",
            Self::UnbalancedBraces => "unbalanced braces",
            Self::ExtensionWithoutPrimary => "pattern line before any primary verb",
            Self::FormsWithoutPrimary => "verb form block before any primary verb",
            Self::SynonymWithoutActor => "synonym line before any actor",
            Self::EmptyPhrase => "phrase has no words",
            Self::MissingLowConnector => "low phrase does not start with a connector",
        };
        f.write_str(text)
    }
}

/// A non-fatal issue found while loading a dictionary.
///
/// Warnings never abort a load. They are logged, and collected into the load
/// report when strict loading is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// An alias was declined because its literal already had an entry.
    DuplicateAliasIgnored {
        /// The literal that was already present.
        literal: String,
        /// The canonical entry the declined alias would have pointed at.
        canonical: String,
        /// Dictionary line (1-indexed), if known.
        line: Option<usize>,
    },
    /// A primary declaration replaced an earlier alias of the same literal.
    AliasPromoted {
        /// The literal that is now primary.
        literal: String,
        /// Dictionary line (1-indexed), if known.
        line: Option<usize>,
    },
    /// A primary was declared twice; the first declaration is kept.
    PrimaryRedeclared {
        /// The repeated literal.
        literal: String,
        /// Dictionary line (1-indexed), if known.
        line: Option<usize>,
    },
    /// A low phrase had no leading connector; a loose one was assumed.
    LooseLowConnectorAssumed {
        /// The low phrase text.
        phrase: String,
        /// Dictionary line (1-indexed), if known.
        line: Option<usize>,
    },
}

impl LoadWarning {
    /// Returns the dictionary line this warning refers to.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::DuplicateAliasIgnored { line, .. }
            | Self::AliasPromoted { line, .. }
            | Self::PrimaryRedeclared { line, .. }
            | Self::LooseLowConnectorAssumed { line, .. } => *line,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAliasIgnored {
                literal, canonical, ..
            } => write!(
                f,
                "alias {literal:?} -> {canonical:?} ignored: literal already defined"
            )?,
            Self::AliasPromoted { literal, .. } => {
                write!(f, "alias {literal:?} redefined as a primary")?;
            }
            Self::PrimaryRedeclared { literal, .. } => {
                write!(f, "primary {literal:?} declared again; first declaration kept")?;
            }
            Self::LooseLowConnectorAssumed { phrase, .. } => {
                write!(f, "low phrase {phrase:?} has no connector; assuming a space")?;
            }
        }
        if let Some(line) = self.line() {
            write!(f, " (line {line})")?;
        }
        Ok(())
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Dictionary file or source name.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "at {source}:{line}"),
            (Some(source), None) => write!(f, "at {source}"),
            (None, Some(line)) => write!(f, "at line {line}"),
            (None, None) => Ok(()),
        }
    }
}
