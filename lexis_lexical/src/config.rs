//! Contains the [`Configuration`] that selects which token grammar the scanner follows.

use derive_new::new;
use getset::CopyGetters;
use strum_macros::{Display, EnumIter, EnumString};

/// Selects the set of characters the scanner accepts and what it does with the rest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Grammar {
    /// Numbers, strings, keywords, operators, identifiers and comments; every other character
    /// becomes a symbol token, so scanning never fails.
    #[default]
    Full,

    /// Only numbers and the `+`, `-`, `*`, `/` operators. Any other non-whitespace character
    /// aborts the scan.
    Arithmetic,
}

/// Selects how the keyword rule of the [`Grammar::Full`] grammar decides that it matched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum KeywordMatching {
    /// The current character alone must be a keyword. No keyword is a single character long, so
    /// every word is scanned as an identifier.
    #[default]
    SingleCharacter,

    /// A whole identifier-like word is scanned first and becomes a keyword if it spells one.
    WholeWord,
}

/// Is the set of options a scan runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, CopyGetters, new)]
pub struct Configuration {
    /// Gets the grammar the scanner follows.
    #[get_copy = "pub"]
    grammar: Grammar,

    /// Gets the keyword matching policy of the full grammar.
    #[get_copy = "pub"]
    keyword_matching: KeywordMatching,
}

impl Configuration {
    /// Returns a copy of this configuration using the given grammar.
    #[must_use]
    pub fn with_grammar(self, grammar: Grammar) -> Self { Self { grammar, ..self } }

    /// Returns a copy of this configuration using the given keyword matching policy.
    #[must_use]
    pub fn with_keyword_matching(self, keyword_matching: KeywordMatching) -> Self {
        Self {
            keyword_matching,
            ..self
        }
    }
}
