//! Codebook - dictionary-driven event pattern coder
//!
//! This crate re-exports all layers of the Codebook system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: codebook_matcher    - Sentence input, verb/actor matching, coder
//! Layer 1: codebook_dictionary - Dictionary compiler, verb forms, actor index
//! Layer 0: codebook_foundation - Core types (Connector, Error, LoadWarning)
//! ```

pub use codebook_dictionary as dictionary;
pub use codebook_foundation as foundation;
pub use codebook_matcher as matcher;
