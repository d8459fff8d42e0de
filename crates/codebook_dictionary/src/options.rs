//! Dictionary loading options.

use std::path::PathBuf;

use serde::Deserialize;

use codebook_foundation::{Error, Result};

use crate::verb::DEFAULT_MAX_ALIAS_HOPS;

/// Options controlling how dictionary text is compiled.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadOptions {
    /// Record warnings in the load report and reject low phrases that lack a
    /// connector.
    pub strict: bool,

    /// Lines whose trimmed text starts with this prefix are skipped.
    pub comment_prefix: String,

    /// Alias hops allowed before resolution is treated as a cycle. Must be at
    /// least 1, since every generated form is one hop from its primary.
    pub max_alias_hops: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            strict: false,
            comment_prefix: "#".to_string(),
            max_alias_hops: DEFAULT_MAX_ALIAS_HOPS,
        }
    }
}

impl LoadOptions {
    /// Creates options with strict loading enabled.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Builder method to set strict loading.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builder method to set the comment prefix.
    #[must_use]
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Builder method to set the alias hop bound.
    #[must_use]
    pub fn with_max_alias_hops(mut self, hops: usize) -> Self {
        self.max_alias_hops = hops;
        self
    }

    /// Checks that the options can compile a dictionary.
    ///
    /// # Errors
    /// Returns a config error if `max_alias_hops` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.max_alias_hops == 0 {
            return Err(Error::config("max_alias_hops must be at least 1"));
        }
        Ok(())
    }
}

/// Locations of the verb and actor dictionary files.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DictionaryPaths {
    /// Verb dictionary file.
    pub verbs: PathBuf,
    /// Actor dictionary file.
    pub actors: PathBuf,
}

impl DictionaryPaths {
    /// Creates a pair of dictionary paths.
    #[must_use]
    pub fn new(verbs: impl Into<PathBuf>, actors: impl Into<PathBuf>) -> Self {
        Self {
            verbs: verbs.into(),
            actors: actors.into(),
        }
    }

    /// Resolves relative paths against `base`.
    #[must_use]
    pub fn relative_to(self, base: &std::path::Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        Self {
            verbs: resolve(self.verbs),
            actors: resolve(self.actors),
        }
    }
}
