//! Loaded dictionary pairs.

use std::fs;
use std::path::Path;

use codebook_foundation::{Error, Result};

use crate::actor::ActorPatternIndex;
use crate::compiler::VerbCompiler;
use crate::options::{DictionaryPaths, LoadOptions};
use crate::report::LoadReport;
use crate::verb::VerbTable;

/// A compiled verb table and actor index, built together and read-only
/// afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionaries {
    verbs: VerbTable,
    actors: ActorPatternIndex,
    report: LoadReport,
}

impl Dictionaries {
    /// Wraps already built tables.
    #[must_use]
    pub fn new(verbs: VerbTable, actors: ActorPatternIndex) -> Self {
        Self {
            verbs,
            actors,
            report: LoadReport::new(),
        }
    }

    /// Compiles verb and actor dictionary text.
    ///
    /// # Errors
    /// Returns the first fatal error of either dictionary.
    pub fn from_sources(verbs: &str, actors: &str, options: &LoadOptions) -> Result<Self> {
        Self::compile(("verbs", verbs), ("actors", actors), options)
    }

    /// Reads and compiles the dictionary files named in `paths`.
    ///
    /// # Errors
    /// Returns an I/O error if either file cannot be read, or the first fatal
    /// compile error, annotated with the file name.
    pub fn from_files(paths: &DictionaryPaths, options: &LoadOptions) -> Result<Self> {
        let verb_source = read_source(&paths.verbs)?;
        let actor_source = read_source(&paths.actors)?;
        let verb_name = paths.verbs.display().to_string();
        let actor_name = paths.actors.display().to_string();
        Self::compile(
            (verb_name.as_str(), verb_source.as_str()),
            (actor_name.as_str(), actor_source.as_str()),
            options,
        )
    }

    fn compile(verbs: (&str, &str), actors: (&str, &str), options: &LoadOptions) -> Result<Self> {
        let (verb_table, mut report) = VerbCompiler::compile_source(verbs.1, options.clone())
            .map_err(|e| e.in_source(verbs.0))?;
        let (actor_index, actor_report) = ActorPatternIndex::compile_source(actors.1, options)
            .map_err(|e| e.in_source(actors.0))?;
        report.merge(actor_report);
        Ok(Self {
            verbs: verb_table,
            actors: actor_index,
            report,
        })
    }

    /// Returns the verb table.
    #[must_use]
    pub fn verbs(&self) -> &VerbTable {
        &self.verbs
    }

    /// Returns the actor index.
    #[must_use]
    pub fn actors(&self) -> &ActorPatternIndex {
        &self.actors
    }

    /// Returns the combined load report.
    #[must_use]
    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}

fn read_source(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "reading dictionary");
    fs::read_to_string(path).map_err(|e| Error::from(e).in_source(path.display().to_string()))
}
