//! Shared dictionaries with whole-generation reload.
//!
//! Readers take an [`Arc`] snapshot and match against it for as long as they
//! like. A reload compiles the new generation without holding any lock, then
//! swaps the pointer. Snapshots taken before the swap keep the old tables
//! alive until their holders drop them.

use std::sync::Arc;

use parking_lot::RwLock;

use codebook_foundation::Result;

use crate::dictionaries::Dictionaries;
use crate::options::{DictionaryPaths, LoadOptions};

#[derive(Debug)]
struct Generation {
    number: u64,
    dictionaries: Arc<Dictionaries>,
}

/// Process-wide handle to the current dictionary generation.
#[derive(Debug)]
pub struct SharedDictionaries {
    current: RwLock<Generation>,
}

impl SharedDictionaries {
    /// Creates a handle whose first generation is `dictionaries`.
    #[must_use]
    pub fn new(dictionaries: Dictionaries) -> Self {
        Self {
            current: RwLock::new(Generation {
                number: 0,
                dictionaries: Arc::new(dictionaries),
            }),
        }
    }

    /// Returns the current generation.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Dictionaries> {
        Arc::clone(&self.current.read().dictionaries)
    }

    /// Returns the current generation number, starting at 0.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.current.read().number
    }

    /// Installs a new generation and returns the previous one.
    pub fn replace(&self, dictionaries: Dictionaries) -> Arc<Dictionaries> {
        self.install(dictionaries).1
    }

    /// Compiles new dictionaries from text and installs them.
    ///
    /// Returns the new generation number. On error the current generation
    /// stays in place.
    ///
    /// # Errors
    /// Returns the first fatal compile error.
    pub fn reload_from_sources(
        &self,
        verbs: &str,
        actors: &str,
        options: &LoadOptions,
    ) -> Result<u64> {
        let dictionaries = Dictionaries::from_sources(verbs, actors, options)?;
        Ok(self.install(dictionaries).0)
    }

    /// Reads and compiles new dictionaries from files and installs them.
    ///
    /// Returns the new generation number. On error the current generation
    /// stays in place.
    ///
    /// # Errors
    /// Returns an I/O error or the first fatal compile error.
    pub fn reload_from_files(&self, paths: &DictionaryPaths, options: &LoadOptions) -> Result<u64> {
        let dictionaries = Dictionaries::from_files(paths, options)?;
        Ok(self.install(dictionaries).0)
    }

    fn install(&self, dictionaries: Dictionaries) -> (u64, Arc<Dictionaries>) {
        let next = Arc::new(dictionaries);
        let mut current = self.current.write();
        current.number += 1;
        tracing::debug!(
            generation = current.number,
            verbs = next.verbs().len(),
            actors = next.actors().phrase_count(),
            "dictionaries swapped"
        );
        let previous = std::mem::replace(&mut current.dictionaries, next);
        (current.number, previous)
    }
}
