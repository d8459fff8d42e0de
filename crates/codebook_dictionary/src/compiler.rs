//! Verb dictionary compiler.
//!
//! Compiles verb dictionary text line by line into a [`VerbTable`].
//!
//! # Line forms
//!
//! ```text
//! MEET [010]                  primary verb with its code
//! {MET} [010]                 explicit forms of the current primary
//! - WITH [057]                pattern: words after the verb
//! - WITH*_REBEL FORCES [190]  pattern: after the verb, then before it
//! ```
//!
//! Pattern and form lines attach to the most recent primary, which the
//! [`VerbCompiler`] tracks as explicit state between lines.

use codebook_foundation::{Connector, Error, LoadWarning, MalformedReason, Result};

use crate::forms::{DeclinedAlias, VerbFormExpander};
use crate::line::{SplitLine, VerbLine, meaningful_lines};
use crate::options::LoadOptions;
use crate::phrase::{PatternToken, scan_phrase};
use crate::report::LoadReport;
use crate::verb::{Pattern, PrimaryOutcome, VerbTable};

// =============================================================================
// Pattern Compiler
// =============================================================================

/// A compiled pattern extension line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledExtension {
    /// The compiled pattern.
    pub pattern: Pattern,
    /// True if the low phrase had no connector and a loose one was assumed.
    pub assumed_loose: bool,
}

/// Compiles the body of a `-` pattern line.
pub struct PatternCompiler;

impl PatternCompiler {
    /// Compiles the text after the leading `-` into a pattern.
    ///
    /// Words are uppercased. Text before `*` becomes the reversed `high` list. Text after `*`
    /// becomes the `low` list, its first character being the connector that
    /// joins it to the verb. When that character is not a connector, strict
    /// compilation fails and lax compilation assumes a loose connector.
    ///
    /// # Errors
    /// Returns a malformed-line error if both phrases are empty, or if the low
    /// phrase lacks a connector in strict mode.
    pub fn compile_extension(body: &str, code: &str, strict: bool) -> Result<CompiledExtension> {
        let normalized = body.to_uppercase();
        let (high_text, low_text) = match normalized.split_once('*') {
            Some((high, low)) => (high, low.trim_end()),
            None => (body, ""),
        };

        let mut high = scan_phrase(high_text.trim_start());
        high.reverse();

        let mut assumed_loose = false;
        let mut low = Vec::new();
        if let Some(first) = low_text.chars().next() {
            let (joint, words) = match Connector::from_char(first) {
                Some(joint) => (joint, &low_text[first.len_utf8()..]),
                None if strict => {
                    return Err(Error::malformed_line(
                        MalformedReason::MissingLowConnector,
                        body,
                    ));
                }
                None => {
                    assumed_loose = true;
                    (Connector::Loose, low_text)
                }
            };
            let words = scan_phrase(words);
            if !words.is_empty() {
                low.push(PatternToken::Connector(joint));
                low.extend(words);
            }
        }

        if high.is_empty() && low.is_empty() {
            return Err(Error::malformed_line(MalformedReason::EmptyPhrase, body));
        }

        Ok(CompiledExtension {
            pattern: Pattern {
                high,
                low,
                code: code.to_string(),
            },
            assumed_loose,
        })
    }
}

// =============================================================================
// Verb Compiler
// =============================================================================

/// Line-by-line verb dictionary compiler.
///
/// Holds the "current primary" that pattern and form lines attach to, and
/// whether that primary's regular forms have been generated yet.
#[derive(Debug)]
pub struct VerbCompiler {
    options: LoadOptions,
    table: VerbTable,
    report: LoadReport,
    current: Option<String>,
    current_line: Option<usize>,
    forms_generated: bool,
    line: Option<usize>,
}

impl VerbCompiler {
    /// Creates a compiler with the given options.
    #[must_use]
    pub fn new(options: LoadOptions) -> Self {
        let table = VerbTable::new().with_max_alias_hops(options.max_alias_hops);
        Self {
            options,
            table,
            report: LoadReport::new(),
            current: None,
            current_line: None,
            forms_generated: false,
            line: None,
        }
    }

    /// Compiles a whole verb dictionary source.
    ///
    /// # Errors
    /// Returns a config error for invalid options, or the first fatal error
    /// annotated with its line number.
    pub fn compile_source(source: &str, options: LoadOptions) -> Result<(VerbTable, LoadReport)> {
        options.validate()?;
        let mut compiler = Self::new(options);
        let prefix = compiler.options.comment_prefix.clone();
        for (line_no, text) in meaningful_lines(source, &prefix) {
            compiler
                .compile_line(line_no, text)
                .map_err(|e| e.at_line(line_no))?;
        }
        compiler.finish()
    }

    /// Returns the literal of the current primary, if any.
    #[must_use]
    pub fn current_primary(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns the table built so far.
    #[must_use]
    pub fn table(&self) -> &VerbTable {
        &self.table
    }

    /// Compiles one line.
    ///
    /// Blank and comment lines are skipped here too, so callers may feed raw
    /// lines.
    ///
    /// # Errors
    /// Returns a malformed-line error for structural problems.
    pub fn compile_line(&mut self, line_no: usize, text: &str) -> Result<()> {
        let trimmed = text.trim();
        let prefix = &self.options.comment_prefix;
        if trimmed.is_empty() || (!prefix.is_empty() && trimmed.starts_with(prefix.as_str())) {
            return Ok(());
        }
        self.line = Some(line_no);
        self.report.lines += 1;

        let split = SplitLine::parse(text)?;
        let phrase = split.phrase.to_uppercase();
        match VerbLine::classify(&phrase)? {
            VerbLine::Primary(phrase) => self.declare_primary(phrase, split.code),
            VerbLine::Forms(forms) => self.declare_forms(&forms, text),
            VerbLine::Extension(body) => self.declare_extension(body, split.code, text),
        }
    }

    /// Closes the last primary and returns the finished table.
    ///
    /// # Errors
    /// Returns an alias-cycle or dangling-alias error if any alias fails to
    /// resolve.
    pub fn finish(mut self) -> Result<(VerbTable, LoadReport)> {
        self.line = None;
        self.ensure_forms();
        self.table.validate(self.options.max_alias_hops)?;
        tracing::info!(
            literals = self.table.len(),
            primaries = self.table.primary_count(),
            aliases = self.table.alias_count(),
            patterns = self.table.pattern_count(),
            warnings = self.report.warnings.len(),
            "verb dictionary compiled"
        );
        Ok((self.table, self.report))
    }

    fn declare_primary(&mut self, phrase: &str, code: &str) -> Result<()> {
        self.ensure_forms();

        let literal = format!("{phrase} ");
        match self.table.insert_primary(&literal, code) {
            PrimaryOutcome::Inserted => {}
            PrimaryOutcome::ReplacedAlias => self.warn(LoadWarning::AliasPromoted {
                literal: literal.clone(),
                line: self.line,
            }),
            PrimaryOutcome::AlreadyPrimary => self.warn(LoadWarning::PrimaryRedeclared {
                literal: literal.clone(),
                line: self.line,
            }),
        }
        self.current = Some(literal);
        self.current_line = self.line;
        self.forms_generated = false;
        Ok(())
    }

    fn declare_forms(&mut self, forms: &[&str], text: &str) -> Result<()> {
        let primary = self
            .current
            .clone()
            .ok_or_else(|| Error::malformed_line(MalformedReason::FormsWithoutPrimary, text))?;
        let declined =
            VerbFormExpander::register_irregular(&mut self.table, &primary, forms.iter().copied());
        self.warn_declined(declined, self.line);
        self.ensure_forms();
        Ok(())
    }

    fn declare_extension(&mut self, body: &str, code: &str, text: &str) -> Result<()> {
        let primary = self
            .current
            .clone()
            .ok_or_else(|| Error::malformed_line(MalformedReason::ExtensionWithoutPrimary, text))?;
        self.ensure_forms();

        let extension = PatternCompiler::compile_extension(body, code, self.options.strict)?;
        if extension.assumed_loose {
            self.warn(LoadWarning::LooseLowConnectorAssumed {
                phrase: body.trim().to_string(),
                line: self.line,
            });
        }
        self.table.push_pattern(&primary, extension.pattern);
        Ok(())
    }

    /// Generates the current primary's regular forms, once.
    fn ensure_forms(&mut self) {
        if self.forms_generated {
            return;
        }
        let Some(primary) = self.current.clone() else {
            return;
        };
        let declined = VerbFormExpander::expand(&mut self.table, &primary);
        self.warn_declined(declined, self.current_line);
        self.forms_generated = true;
    }

    /// Records declined aliases against the line that produced them.
    fn warn_declined(&mut self, declined: Vec<DeclinedAlias>, line: Option<usize>) {
        for DeclinedAlias { literal, canonical } in declined {
            self.warn(LoadWarning::DuplicateAliasIgnored {
                literal,
                canonical,
                line,
            });
        }
    }

    fn warn(&mut self, warning: LoadWarning) {
        self.report.warn(warning, self.options.strict);
    }
}
