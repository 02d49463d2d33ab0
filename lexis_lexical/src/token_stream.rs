//! Contains the [`TokenStream`] struct, the materialized result of scanning a whole source file.

use std::{ops::Index, sync::Arc};

use derive_more::Deref;
use lexis_base::{
    diagnostic::{Dummy, Handler},
    source_file::SourceFile,
};

use crate::{
    config::Configuration,
    error,
    token::{self, Token},
};

/// Is the ordered list of tokens of a source file.
///
/// Whitespace and comments are not part of the stream; every token keeps the span it was
/// scanned from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source file.
    ///
    /// This function scans the source file from its first character by calling [`Token::lex()`]
    /// repeatedly until the end of the source is reached. Diagnostics are reported to the given
    /// handler as they are found.
    ///
    /// # Errors
    /// [`token::Error::FatalLexicalError`]: the [`crate::config::Grammar::Arithmetic`] grammar met
    /// a character it doesn't accept. The scan stops there and the tokens found so far are
    /// discarded.
    pub fn tokenize(
        source_file: &Arc<SourceFile>,
        configuration: &Configuration,
        handler: &dyn Handler<error::Error>,
    ) -> Result<Self, token::Error> {
        let mut tokens = Vec::new();
        let mut cursor = source_file.cursor();

        loop {
            match Token::lex(&mut cursor, configuration, handler) {
                Ok(Some(token)) => tokens.push(token),
                Ok(None) => (),
                Err(token::Error::EndOfSourceCodeCursorArgument) => break,
                Err(error @ token::Error::FatalLexicalError) => return Err(error),
            }
        }

        Ok(Self { tokens })
    }

    /// Tokenizes the given string with the default configuration, dropping every diagnostic.
    #[must_use]
    pub fn tokenize_str(source: &str) -> Self {
        let source_file = SourceFile::in_memory("<string>", source);

        // the full grammar gives every character a rule
        Self::tokenize(&source_file, &Configuration::default(), &Dummy)
            .unwrap_or_else(|_| unreachable!("the full grammar never fails"))
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter { self.tokens.iter() }
}
