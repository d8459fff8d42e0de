//! Verb and actor dictionary compiler for Codebook.
//!
//! This crate turns coding dictionaries into the two read-only tables the
//! matcher consumes.
//!
//! # Architecture
//!
//! ```text
//! verb dictionary text                 actor dictionary text
//!          │                                    │
//!          ▼                                    ▼
//! ┌─────────────────┐                  ┌─────────────────┐
//! │ VERB COMPILER   │ ◄── forms ──┐    │ ACTOR INDEX     │
//! │ (line state)    │             │    │ BUILDER         │
//! └─────────────────┘   ┌─────────────┐└─────────────────┘
//!          │            │ VERB FORM   │         │
//!          │            │ EXPANDER    │         │
//!          ▼            └─────────────┘         ▼
//!     VerbTable                          ActorPatternIndex
//!          └──────────────┬─────────────────────┘
//!                         ▼
//!                   Dictionaries ──► SharedDictionaries (generation swap)
//! ```
//!
//! # Modules
//!
//! - [`phrase`] - Phrase scanning into words and connectors
//! - [`line`] - Dictionary line splitting and classification
//! - [`verb`] - Verb table entries, patterns, and alias resolution
//! - [`forms`] - Regular and irregular verb form expansion
//! - [`compiler`] - Verb dictionary compiler
//! - [`actor`] - Actor phrase index
//! - [`options`] - Loading options and dictionary paths
//! - [`report`] - Load reports
//! - [`dictionaries`] - Compiled dictionary pairs
//! - [`shared`] - Shared dictionaries with generation swap

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod actor;
pub mod compiler;
pub mod dictionaries;
pub mod forms;
pub mod line;
pub mod options;
pub mod phrase;
pub mod report;
pub mod shared;
pub mod verb;

// Re-export main types for convenience
pub use actor::{ActorIndexBuilder, ActorPatternEntry, ActorPatternIndex};
pub use compiler::{PatternCompiler, VerbCompiler};
pub use dictionaries::Dictionaries;
pub use forms::VerbFormExpander;
pub use options::{DictionaryPaths, LoadOptions};
pub use phrase::PatternToken;
pub use report::LoadReport;
pub use shared::SharedDictionaries;
pub use verb::{Entry, Pattern, ResolvedVerb, VerbTable};
