//! Verb form expansion.
//!
//! Generates the regular inflections of a primary verb and registers them,
//! along with any explicitly listed irregular forms, as aliases.
//!
//! The rules are a spelling heuristic, not a morphological analyzer:
//!
//! | Root      | 3rd person | Past      | Participle |
//! |-----------|------------|-----------|------------|
//! | `MEET`    | `MEETS`    | `MEETED`  | `MEETING`  |
//! | `RELEASE` | `RELEASES` | `RELEASED`| `RELEASING`|
//!
//! Irregular verbs must list their forms in a `{...}` block. Aliases never
//! overwrite an existing literal, so forms declared first win.

use crate::verb::{AliasOutcome, VerbTable};

/// An alias the expander could not add because the literal was taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclinedAlias {
    /// The literal that already had an entry.
    pub literal: String,
    /// The canonical literal the alias would have pointed at.
    pub canonical: String,
}

/// Generates and registers verb form aliases.
pub struct VerbFormExpander;

impl VerbFormExpander {
    /// Returns the regular forms of a space-terminated primary literal.
    ///
    /// For multi-word literals only the first word is inflected. Each form is
    /// space-terminated. A literal with an empty root yields no forms.
    #[must_use]
    pub fn regular_forms(primary: &str) -> Vec<String> {
        let root = primary.strip_suffix(' ').unwrap_or(primary);
        let split = root.find([' ', '_']).unwrap_or(root.len());
        let (head, tail) = root.split_at(split);
        if head.is_empty() {
            return Vec::new();
        }

        let mut heads = vec![format!("{head}S")];
        if let Some(stem) = head.strip_suffix('E') {
            heads.push(format!("{head}D"));
            heads.push(format!("{stem}ING"));
        } else {
            heads.push(format!("{head}ED"));
            heads.push(format!("{head}ING"));
        }

        heads
            .into_iter()
            .map(|h| format!("{h}{tail} "))
            .collect()
    }

    /// Registers the regular forms of `primary` as aliases.
    ///
    /// Returns the forms that were declined because another entry already
    /// held the literal.
    pub fn expand(table: &mut VerbTable, primary: &str) -> Vec<DeclinedAlias> {
        let forms = Self::regular_forms(primary);
        Self::register(table, primary, forms)
    }

    /// Registers explicitly listed forms of `primary` as aliases.
    ///
    /// Each form is uppercased and gets the trailing space of the dictionary's
    /// literal convention.
    pub fn register_irregular<'a>(
        table: &mut VerbTable,
        primary: &str,
        forms: impl IntoIterator<Item = &'a str>,
    ) -> Vec<DeclinedAlias> {
        let forms = forms.into_iter().map(|f| format!("{} ", f.to_uppercase()));
        Self::register(table, primary, forms)
    }

    fn register(
        table: &mut VerbTable,
        primary: &str,
        forms: impl IntoIterator<Item = String>,
    ) -> Vec<DeclinedAlias> {
        let mut declined = Vec::new();
        for form in forms {
            if form == primary {
                continue;
            }
            if table.insert_alias(&form, primary) == AliasOutcome::Declined {
                declined.push(DeclinedAlias {
                    literal: form,
                    canonical: primary.to_string(),
                });
            }
        }
        declined
    }
}
