//! Verb table.
//!
//! Maps space-terminated verb literals to entries. Canonical forms carry a
//! code and, optionally, extension patterns; inflections and synonyms are
//! aliases that redirect to a canonical form.

use std::collections::HashMap;

use codebook_foundation::{Connector, Error, Result};

use crate::phrase::{PatternToken, render_tokens};

/// Default bound on alias hops before resolution is considered cyclic.
pub const DEFAULT_MAX_ALIAS_HOPS: usize = 8;

/// A verb table value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// Canonical form carrying a code.
    Primary {
        /// Semantic code.
        code: String,
    },
    /// Inflection or synonym that redirects to a canonical literal.
    Alias {
        /// Literal of the canonical entry.
        canonical: String,
    },
    /// Canonical form that also owns extension patterns.
    PrimaryWithPatterns {
        /// Semantic code used when no pattern matches.
        code: String,
        /// Patterns in declaration order.
        patterns: Vec<Pattern>,
    },
}

impl Entry {
    /// Returns true for either primary variant.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        !matches!(self, Self::Alias { .. })
    }

    /// Returns the alias target, if this entry is an alias.
    #[must_use]
    pub fn canonical(&self) -> Option<&str> {
        match self {
            Self::Alias { canonical } => Some(canonical),
            _ => None,
        }
    }
}

/// A multi-word extension pattern attached to a primary verb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Context after the verb, stored reversed: the last token is the word
    /// nearest the verb.
    pub high: Vec<PatternToken>,
    /// Context before the verb: the joining connector, then the words in
    /// reading order.
    pub low: Vec<PatternToken>,
    /// Code assigned when the whole pattern matches.
    pub code: String,
}

impl Pattern {
    /// Steps to match rightwards from the verb, nearest word first.
    ///
    /// The verb joins the first high word loosely.
    #[must_use]
    pub fn high_steps(&self) -> Vec<(Connector, &str)> {
        let mut steps = Vec::new();
        let mut joint = Connector::Loose;
        for token in self.high.iter().rev() {
            match token {
                PatternToken::Word(w) => steps.push((joint, w.as_str())),
                PatternToken::Connector(c) => joint = *c,
            }
        }
        steps
    }

    /// Steps to match leftwards from the verb, nearest word first.
    #[must_use]
    pub fn low_steps(&self) -> Vec<(Connector, &str)> {
        let Some((PatternToken::Connector(verb_joint), words)) = self.low.split_first() else {
            return Vec::new();
        };
        let mut steps = Vec::new();
        let mut joint = *verb_joint;
        for token in words.iter().rev() {
            match token {
                PatternToken::Word(w) => steps.push((joint, w.as_str())),
                PatternToken::Connector(c) => joint = *c,
            }
        }
        steps
    }

    /// Reconstructs the `high*low` phrase text this pattern was compiled from.
    #[must_use]
    pub fn phrase_text(&self) -> String {
        let mut text = render_tokens(self.high.iter().rev());
        if !self.low.is_empty() {
            text.push('*');
            text.push_str(&render_tokens(&self.low));
        }
        text
    }
}

/// A resolved verb lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedVerb<'a> {
    /// Literal of the canonical entry.
    pub primary: &'a str,
    /// Code of the canonical entry.
    pub code: &'a str,
    /// Extension patterns of the canonical entry, in declaration order.
    pub patterns: &'a [Pattern],
}

/// Outcome of inserting a primary literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryOutcome {
    /// The literal was new.
    Inserted,
    /// The literal was an alias and is now primary.
    ReplacedAlias,
    /// The literal was already primary; the existing entry was kept.
    AlreadyPrimary,
}

/// Outcome of inserting an alias literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AliasOutcome {
    /// The alias was added.
    Inserted,
    /// The literal already aliased the same canonical entry.
    Unchanged,
    /// The literal was taken by another entry; the alias was declined.
    Declined,
}

/// Verb dictionary keyed on space-terminated literals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerbTable {
    entries: HashMap<String, Entry>,
    max_words: usize,
    max_alias_hops: usize,
}

impl VerbTable {
    /// Creates a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            max_words: 0,
            max_alias_hops: DEFAULT_MAX_ALIAS_HOPS,
        }
    }

    /// Sets the alias hop bound used by [`resolve`](Self::resolve).
    #[must_use]
    pub fn with_max_alias_hops(mut self, hops: usize) -> Self {
        self.max_alias_hops = hops;
        self
    }

    /// Number of literals in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest number of space-separated words in any literal.
    #[must_use]
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Returns the raw entry for a literal, without following aliases.
    #[must_use]
    pub fn get(&self, literal: &str) -> Option<&Entry> {
        self.entries.get(literal)
    }

    /// Returns true if the literal has an entry.
    #[must_use]
    pub fn contains(&self, literal: &str) -> bool {
        self.entries.contains_key(literal)
    }

    /// Iterates over all literals and entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of primary entries.
    #[must_use]
    pub fn primary_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_primary()).count()
    }

    /// Number of alias entries.
    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.entries.len() - self.primary_count()
    }

    /// Number of extension patterns across all primaries.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.entries
            .values()
            .map(|e| match e {
                Entry::PrimaryWithPatterns { patterns, .. } => patterns.len(),
                _ => 0,
            })
            .sum()
    }

    /// Declares a primary literal.
    ///
    /// An existing alias is replaced; an existing primary is kept unchanged.
    pub fn insert_primary(&mut self, literal: &str, code: &str) -> PrimaryOutcome {
        let outcome = match self.entries.get(literal) {
            Some(entry) if entry.is_primary() => return PrimaryOutcome::AlreadyPrimary,
            Some(_) => PrimaryOutcome::ReplacedAlias,
            None => PrimaryOutcome::Inserted,
        };
        self.note_literal(literal);
        self.entries.insert(
            literal.to_string(),
            Entry::Primary {
                code: code.to_string(),
            },
        );
        outcome
    }

    /// Adds an alias unless the literal is already taken.
    pub fn insert_alias(&mut self, literal: &str, canonical: &str) -> AliasOutcome {
        match self.entries.get(literal) {
            Some(Entry::Alias { canonical: existing }) if existing == canonical => {
                AliasOutcome::Unchanged
            }
            Some(_) => AliasOutcome::Declined,
            None => {
                self.note_literal(literal);
                self.entries.insert(
                    literal.to_string(),
                    Entry::Alias {
                        canonical: canonical.to_string(),
                    },
                );
                AliasOutcome::Inserted
            }
        }
    }

    /// Appends a pattern to a primary entry.
    ///
    /// Returns false if the literal is missing or is an alias.
    pub fn push_pattern(&mut self, literal: &str, pattern: Pattern) -> bool {
        let Some(entry) = self.entries.get_mut(literal) else {
            return false;
        };
        match entry {
            Entry::Alias { .. } => false,
            Entry::PrimaryWithPatterns { patterns, .. } => {
                patterns.push(pattern);
                true
            }
            Entry::Primary { code } => {
                *entry = Entry::PrimaryWithPatterns {
                    code: std::mem::take(code),
                    patterns: vec![pattern],
                };
                true
            }
        }
    }

    /// Follows alias links from a literal to its canonical entry.
    ///
    /// Returns `None` when the literal is absent, dangles, or exceeds the hop
    /// bound. Use [`validate`](Self::validate) at load time to turn those
    /// cases into errors.
    #[must_use]
    pub fn resolve(&self, literal: &str) -> Option<ResolvedVerb<'_>> {
        self.resolve_checked(literal, self.max_alias_hops).ok().flatten()
    }

    fn resolve_checked(&self, literal: &str, max_hops: usize) -> Result<Option<ResolvedVerb<'_>>> {
        let Some((mut key, mut entry)) = self.entries.get_key_value(literal) else {
            return Ok(None);
        };
        let mut hops = 0;
        loop {
            match entry {
                Entry::Primary { code } => {
                    return Ok(Some(ResolvedVerb {
                        primary: key,
                        code,
                        patterns: &[],
                    }));
                }
                Entry::PrimaryWithPatterns { code, patterns } => {
                    return Ok(Some(ResolvedVerb {
                        primary: key,
                        code,
                        patterns,
                    }));
                }
                Entry::Alias { canonical } => {
                    hops += 1;
                    if hops > max_hops {
                        return Err(Error::alias_cycle(literal, max_hops));
                    }
                    (key, entry) = self
                        .entries
                        .get_key_value(canonical.as_str())
                        .ok_or_else(|| Error::dangling_alias(key.as_str(), canonical.as_str()))?;
                }
            }
        }
    }

    /// Checks that every alias reaches a primary within `max_hops`.
    ///
    /// Aliases are checked in sorted order so the reported error is stable.
    ///
    /// # Errors
    /// Returns an alias-cycle or dangling-alias error for the first alias
    /// that fails.
    pub fn validate(&self, max_hops: usize) -> Result<()> {
        let mut aliases: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, e)| !e.is_primary())
            .map(|(k, _)| k.as_str())
            .collect();
        aliases.sort_unstable();
        for alias in aliases {
            self.resolve_checked(alias, max_hops)?;
        }
        Ok(())
    }

    fn note_literal(&mut self, literal: &str) {
        let words = literal.split_whitespace().count();
        self.max_words = self.max_words.max(words);
    }
}
