//! The sentence coder.
//!
//! A [`Coder`] pairs one dictionary generation with a [`MatchConfig`]. It is
//! cheap to clone and safe to share across threads; reloading dictionaries
//! means building a new coder from a fresh snapshot.

use std::sync::Arc;

use codebook_dictionary::{Dictionaries, SharedDictionaries};
use codebook_foundation::Result;

use crate::actor::{ActorCoding, ActorMatcher};
use crate::config::{CoderConfig, MatchConfig};
use crate::sentence::Sentence;
use crate::verb::{VerbCoding, VerbMatcher};

/// Codes found in one sentence, each list in sentence order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SentenceCoding {
    /// Actor phrases; spans never overlap.
    pub actors: Vec<ActorCoding>,
    /// Verbs.
    pub verbs: Vec<VerbCoding>,
}

impl SentenceCoding {
    /// Returns true if nothing in the sentence was coded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty() && self.verbs.is_empty()
    }
}

/// Codes verbs and actors against one dictionary generation.
#[derive(Clone, Debug)]
pub struct Coder {
    dictionaries: Arc<Dictionaries>,
    config: MatchConfig,
}

impl Coder {
    /// Creates a coder over a dictionary generation.
    #[must_use]
    pub fn new(dictionaries: Arc<Dictionaries>, config: MatchConfig) -> Self {
        Self {
            dictionaries,
            config,
        }
    }

    /// Creates a coder over the current generation of shared dictionaries.
    #[must_use]
    pub fn from_shared(shared: &SharedDictionaries, config: MatchConfig) -> Self {
        Self::new(shared.snapshot(), config)
    }

    /// Loads the configured dictionaries and creates a coder over them.
    ///
    /// # Errors
    /// Returns an I/O error if a dictionary cannot be read, or the first
    /// fatal compile error.
    pub fn from_config(config: &CoderConfig) -> Result<Self> {
        let dictionaries = Dictionaries::from_files(&config.dictionaries, &config.loading)?;
        Ok(Self::new(Arc::new(dictionaries), config.matching.clone()))
    }

    /// Returns the dictionaries this coder reads.
    #[must_use]
    pub fn dictionaries(&self) -> &Arc<Dictionaries> {
        &self.dictionaries
    }

    /// Returns the match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Codes the verb at `index`.
    ///
    /// The tag requirement of the configuration is not applied here.
    #[must_use]
    pub fn code_verb(&self, sentence: &Sentence, index: usize) -> Option<VerbCoding> {
        VerbMatcher::new(self.dictionaries.verbs(), &self.config).code_at(sentence, index)
    }

    /// Codes the actor phrase at `index`.
    #[must_use]
    pub fn code_actor(&self, sentence: &Sentence, index: usize) -> Option<ActorCoding> {
        ActorMatcher::new(self.dictionaries.actors(), &self.config).code_at(sentence, index)
    }

    /// Scans a sentence left to right.
    ///
    /// At each position an actor phrase is tried first; a match consumes its
    /// whole span. Otherwise the token is tried as a verb, honoring the tag
    /// requirement, and a match consumes the verb's own words. Pattern context
    /// words stay available, so an actor named in a verb pattern is still
    /// coded.
    #[must_use]
    pub fn code_sentence(&self, sentence: &Sentence) -> SentenceCoding {
        let verbs = VerbMatcher::new(self.dictionaries.verbs(), &self.config);
        let actors = ActorMatcher::new(self.dictionaries.actors(), &self.config);
        let mut coding = SentenceCoding::default();

        let mut index = 0;
        while index < sentence.len() {
            if let Some(actor) = actors.code_at(sentence, index) {
                index = actor.span.end;
                coding.actors.push(actor);
                continue;
            }
            let tagged = sentence
                .tag(index)
                .is_some_and(|tag| self.config.accepts_verb_tag(tag));
            if tagged {
                if let Some(verb) = verbs.code_at(sentence, index) {
                    index = verb.span.end;
                    coding.verbs.push(verb);
                    continue;
                }
            }
            index += 1;
        }

        tracing::trace!(
            tokens = sentence.len(),
            actors = coding.actors.len(),
            verbs = coding.verbs.len(),
            "sentence coded"
        );
        coding
    }
}
