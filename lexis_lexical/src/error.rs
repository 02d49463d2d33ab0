//! Contains all kinds of lexical diagnostics that can be reported while scanning the source code.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use lexis_base::{
    diagnostic::Diagnostic,
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Span,
};

/// The source code contains a `"` that is never closed; the rest of the source is dropped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedString {
    /// The span of the opening `"`.
    pub span: Span,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Warning, "found an unterminated string literal"),
            SourceCodeDisplay::new(
                &self.span,
                Some("the text from here to the end of the source is ignored")
            )
        )
    }
}

/// The source code contains a `/*` comment that is never closed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedBlockComment {
    /// The span of the unclosed `/*` that starts the comment.
    pub span: Span,
}

impl Display for UnterminatedBlockComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Warning, "found an unclosed `/*` comment"),
            SourceCodeDisplay::new(&self.span, Option::<i32>::None)
        )
    }
}

/// The numeric literal does not fit in an unsigned 64-bit integer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumericOverflow {
    /// The span of the whole literal.
    pub span: Span,
}

impl Display for NumericOverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Warning, "numeric literal is too large"),
            SourceCodeDisplay::new(
                &self.span,
                Some(format_args!("the value is clamped to {}", u64::MAX))
            )
        )
    }
}

/// The arithmetic grammar met a character it has no rule for.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnexpectedCharacter {
    /// The span of the offending character.
    pub span: Span,

    /// The offending character.
    pub character: char,
}

impl Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format_args!(
                    "unexpected character `{}` at offset {}",
                    self.character.escape_debug(),
                    self.span.start()
                )
            ),
            SourceCodeDisplay::new(&self.span, Option::<i32>::None)
        )
    }
}

/// Is an enumeration containing all kinds of lexical diagnostics that can be reported while
/// scanning the source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnterminatedString(UnterminatedString),
    UnterminatedBlockComment(UnterminatedBlockComment),
    NumericOverflow(NumericOverflow),
    UnexpectedCharacter(UnexpectedCharacter),
}

impl Error {
    /// Gets the span the diagnostic points at.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::UnterminatedString(err) => &err.span,
            Self::UnterminatedBlockComment(err) => &err.span,
            Self::NumericOverflow(err) => &err.span,
            Self::UnexpectedCharacter(err) => &err.span,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString(err) => write!(f, "{err}"),
            Self::UnterminatedBlockComment(err) => write!(f, "{err}"),
            Self::NumericOverflow(err) => write!(f, "{err}"),
            Self::UnexpectedCharacter(err) => write!(f, "{err}"),
        }
    }
}

impl Diagnostic for Error {
    fn severity(&self) -> Severity {
        match self {
            Self::UnexpectedCharacter(_) => Severity::Error,
            Self::UnterminatedString(_)
            | Self::UnterminatedBlockComment(_)
            | Self::NumericOverflow(_) => Severity::Warning,
        }
    }
}
