//! Dictionary line splitting.
//!
//! Every dictionary line has the shape `phrase [CODE]`, optionally followed
//! by trailing text that is ignored. The phrase is then classified by its
//! first character.

use codebook_foundation::{Error, MalformedReason, Result};

/// A dictionary line split into phrase text and code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitLine<'a> {
    /// Trimmed text before the first `[`.
    pub phrase: &'a str,
    /// Text between the first `[` and the following `]`, trimmed.
    pub code: &'a str,
}

impl<'a> SplitLine<'a> {
    /// Splits a line on its first `[` ... `]` pair.
    ///
    /// A line without brackets has an empty code.
    ///
    /// # Errors
    /// Returns a malformed-line error if a `[` has no closing `]`, or a `]`
    /// appears before any `[`.
    pub fn parse(text: &'a str) -> Result<Self> {
        let unbalanced = || Error::malformed_line(MalformedReason::UnbalancedBrackets, text);

        match (text.find('['), text.find(']')) {
            (None, None) => Ok(Self {
                phrase: text.trim(),
                code: "",
            }),
            (Some(open), _) => {
                let rest = &text[open + 1..];
                let close = rest.find(']').ok_or_else(unbalanced)?;
                if text[..open].contains(']') {
                    return Err(unbalanced());
                }
                Ok(Self {
                    phrase: text[..open].trim(),
                    code: rest[..close].trim(),
                })
            }
            (None, Some(_)) => Err(unbalanced()),
        }
    }
}

/// What a verb dictionary phrase declares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerbLine<'a> {
    /// A new primary verb phrase.
    Primary(&'a str),
    /// A `-` pattern extension; holds the text after the dash.
    Extension(&'a str),
    /// A `{...}` block of explicit verb forms.
    Forms(Vec<&'a str>),
}

impl<'a> VerbLine<'a> {
    /// Classifies a trimmed verb phrase.
    ///
    /// # Errors
    /// Returns a malformed-line error for a `{` block without a closing `}`
    /// or an empty phrase.
    pub fn classify(phrase: &'a str) -> Result<Self> {
        if let Some(body) = phrase.strip_prefix('-') {
            return Ok(Self::Extension(body));
        }
        if let Some(body) = phrase.strip_prefix('{') {
            let close = body
                .find('}')
                .ok_or_else(|| Error::malformed_line(MalformedReason::UnbalancedBraces, phrase))?;
            return Ok(Self::Forms(body[..close].split_whitespace().collect()));
        }
        if phrase.is_empty() {
            return Err(Error::malformed_line(MalformedReason::EmptyPhrase, phrase));
        }
        Ok(Self::Primary(phrase))
    }
}

/// Iterates the meaningful lines of a dictionary source.
///
/// Yields `(line_number, text)` pairs with 1-indexed line numbers, skipping
/// blank lines and lines whose trimmed text starts with the comment prefix.
pub fn meaningful_lines<'a>(
    source: &'a str,
    comment_prefix: &'a str,
) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(move |(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && (comment_prefix.is_empty() || !trimmed.starts_with(comment_prefix))
        })
}
