//! Matcher and coder configuration.
//!
//! A coder configuration file groups the dictionary locations with loading
//! and matching options:
//!
//! ```toml
//! [dictionaries]
//! verbs = "verbs.txt"
//! actors = "actors.txt"
//!
//! [loading]
//! strict = true
//!
//! [matching]
//! verb_gap = 4
//! verbs_require_tag = true
//! ```
//!
//! Relative dictionary paths resolve against the directory holding the
//! configuration file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use codebook_dictionary::{DictionaryPaths, LoadOptions};
use codebook_foundation::{Error, Result};

/// Options controlling how sentences are matched.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Tokens a loose connector may skip in verb patterns; `None` allows any
    /// number within the sentence.
    pub verb_gap: Option<usize>,

    /// Tokens a loose connector may skip in actor phrases.
    pub actor_gap: usize,

    /// Only try tokens whose tag starts with `verb_tag_prefix` as verbs.
    pub verbs_require_tag: bool,

    /// Tag prefix marking verbs.
    pub verb_tag_prefix: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            verb_gap: None,
            actor_gap: 0,
            verbs_require_tag: false,
            verb_tag_prefix: "VB".to_string(),
        }
    }
}

impl MatchConfig {
    /// Creates a configuration for tagged input: verbs must carry a verb tag.
    #[must_use]
    pub fn tagged() -> Self {
        Self {
            verbs_require_tag: true,
            ..Self::default()
        }
    }

    /// Builder method to set the verb pattern gap.
    #[must_use]
    pub fn with_verb_gap(mut self, gap: Option<usize>) -> Self {
        self.verb_gap = gap;
        self
    }

    /// Builder method to set the actor phrase gap.
    #[must_use]
    pub fn with_actor_gap(mut self, gap: usize) -> Self {
        self.actor_gap = gap;
        self
    }

    /// Builder method to require verb tags.
    #[must_use]
    pub fn with_verbs_require_tag(mut self, require: bool) -> Self {
        self.verbs_require_tag = require;
        self
    }

    /// Builder method to set the verb tag prefix.
    #[must_use]
    pub fn with_verb_tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.verb_tag_prefix = prefix.into();
        self
    }

    /// Returns true if a token with this tag may be coded as a verb.
    #[must_use]
    pub fn accepts_verb_tag(&self, tag: &str) -> bool {
        !self.verbs_require_tag || tag.starts_with(self.verb_tag_prefix.as_str())
    }
}

/// Complete coder configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoderConfig {
    /// Dictionary file locations.
    pub dictionaries: DictionaryPaths,
    /// Loading options.
    #[serde(default)]
    pub loading: LoadOptions,
    /// Matching options.
    #[serde(default)]
    pub matching: MatchConfig,
}

impl CoderConfig {
    /// Parses a configuration from TOML text.
    ///
    /// Dictionary paths are kept as written.
    ///
    /// # Errors
    /// Returns a config error if the text is not valid TOML, has unknown
    /// keys, or sets invalid loading options.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::config(e.to_string()))?;
        config.loading.validate()?;
        Ok(config)
    }

    /// Reads a configuration file.
    ///
    /// Relative dictionary paths resolve against the file's directory.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or a config error if
    /// it does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| Error::from(e).in_source(&source))?;
        let config = Self::from_toml_str(&text).map_err(|e| e.in_source(&source))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        tracing::debug!(path = %source, "coder configuration loaded");
        Ok(Self {
            dictionaries: config.dictionaries.relative_to(base),
            ..config
        })
    }
}
