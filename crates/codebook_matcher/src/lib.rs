//! Verb and actor matching for Codebook.
//!
//! This crate reads the tables built by `codebook_dictionary` and codes
//! tagged sentences against them.
//!
//! # Pipeline
//!
//! ```text
//! (word, tag) pairs ──► Sentence ──► Coder::code_sentence
//!                                        │
//!                         ┌──────────────┴──────────────┐
//!                         ▼                             ▼
//!                   ActorMatcher                   VerbMatcher
//!              (first word, longest first)   (longest literal, patterns
//!                                              in declaration order)
//!                         └──────────────┬──────────────┘
//!                                        ▼
//!                                  SentenceCoding
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use codebook_dictionary::{Dictionaries, LoadOptions};
//! use codebook_matcher::{Coder, MatchConfig, Sentence};
//!
//! let dicts = Dictionaries::from_sources(
//!     "MEET [010]\n- WITH [057]\n",
//!     "UNITED NATIONS [IGOUNO]\n",
//!     &LoadOptions::default(),
//! )?;
//! let coder = Coder::new(Arc::new(dicts), MatchConfig::default());
//! let coding = coder.code_sentence(&Sentence::from_text("United Nations meets with rebels"));
//! assert_eq!(coding.actors[0].code, "IGOUNO");
//! assert_eq!(coding.verbs[0].code, "057");
//! # Ok::<(), codebook_foundation::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod actor;
pub mod align;
pub mod coder;
pub mod config;
pub mod sentence;
pub mod verb;

pub use actor::{ActorCoding, ActorMatcher};
pub use coder::{Coder, SentenceCoding};
pub use config::{CoderConfig, MatchConfig};
pub use sentence::{Sentence, TaggedToken};
pub use verb::{VerbCoding, VerbMatcher};
