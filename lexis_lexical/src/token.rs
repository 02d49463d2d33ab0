//! Is a module containing the [`Token`] type and the rules that scan one token at a time.

use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
    str::FromStr,
};

use derive_more::From;
use enum_as_inner::EnumAsInner;
use lazy_static::lazy_static;
use lexis_base::{
    diagnostic::Handler,
    source_file::{ByteIndex, Cursor, Span},
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{
    config::{Configuration, Grammar, KeywordMatching},
    error::{
        self, NumericOverflow, UnexpectedCharacter, UnterminatedBlockComment, UnterminatedString,
    },
};

/// Is the list of operator lexemes of the full grammar.
///
/// Only the single-character entries are ever matched: the scanner consumes one character per
/// operator token, so `==` is scanned as two `=` tokens.
pub const OPERATORS: [&str; 25] = [
    "+", "-", "*", "/", "%", "++", "--", "=", "==", "!=", "===", "!==", ">", "<", ">=", "<=", "&&",
    "||", "?", ":", "&", "|", "^", "<<", ">>",
];

/// Is the list of operator characters of the arithmetic grammar.
pub const ARITHMETIC_OPERATORS: [char; 4] = ['+', '-', '*', '/'];

lazy_static! {
    static ref OPERATOR_CHARACTERS: HashSet<char> = OPERATORS
        .iter()
        .filter_map(|lexeme| {
            let mut characters = lexeme.chars();
            match (characters.next(), characters.next()) {
                (Some(character), None) => Some(character),
                _ => None,
            }
        })
        .collect();
}

/// Checks if the given character is an operator of the full grammar on its own.
#[must_use]
pub fn is_operator_character(character: char) -> bool { OPERATOR_CHARACTERS.contains(&character) }

/// Checks whether the arithmetic grammar skips the character: every Unicode white space except
/// the next line control `U+0085`, plus the byte order mark `U+FEFF`.
#[must_use]
pub fn is_arithmetic_whitespace(character: char) -> bool {
    (character.is_whitespace() && character != '\u{85}') || character == '\u{FEFF}'
}

/// Is an enumeration representing the reserved words of the full grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    If,
    Else,
    For,
    While,
    Do,
    Function,
    Return,
    Class,
    Var,
    Let,
    Const,
    New,
    This,
    True,
    False,
    Null,
    Break,
    Continue,
    Switch,
    Case,
    Default,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> =
                KeywordKind::iter().map(|keyword| (keyword.as_str(), keyword)).collect();
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::While => "while",
            Self::Do => "do",
            Self::Function => "function",
            Self::Return => "return",
            Self::Class => "class",
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
            Self::New => "new",
            Self::This => "this",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Switch => "switch",
            Self::Case => "case",
            Self::Default => "default",
        }
    }
}

/// Is the closed set of token classifications.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, strum_macros::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum TokenKind {
    Number,
    String,
    Keyword,
    Operator,
    Identifier,
    Symbol,
}

/// Is the payload a token carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value<'a> {
    /// The value of a number token.
    Integer(u64),

    /// The text of a string, keyword or identifier token; strings have their quotes removed.
    Text(&'a str),

    /// The character of an operator or symbol token.
    Character(char),
}

impl Display for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Character(character) => write!(f, "{character}"),
        }
    }
}

/// Is an enumeration containing all kinds of tokens the scanner produces.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Token {
    Number(Number),
    String(StringLiteral),
    Keyword(Keyword),
    Operator(Operator),
    Identifier(Identifier),
    Symbol(Symbol),
}

impl Token {
    /// Returns the span of the token.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::Number(token) => &token.span,
            Self::String(token) => &token.span,
            Self::Keyword(token) => &token.span,
            Self::Operator(token) => &token.span,
            Self::Identifier(token) => &token.span,
            Self::Symbol(token) => &token.span,
        }
    }

    /// Returns the classification of the token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::String(_) => TokenKind::String,
            Self::Keyword(_) => TokenKind::Keyword,
            Self::Operator(_) => TokenKind::Operator,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Symbol(_) => TokenKind::Symbol,
        }
    }

    /// Returns the payload of the token.
    #[must_use]
    pub fn value(&self) -> Value<'_> {
        match self {
            Self::Number(token) => Value::Integer(token.value),
            Self::String(token) => Value::Text(token.content()),
            Self::Keyword(token) => Value::Text(token.keyword.as_str()),
            Self::Operator(token) => Value::Character(token.operator),
            Self::Identifier(token) => Value::Text(token.span.str()),
            Self::Symbol(token) => Value::Character(token.symbol),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind(), self.value())
    }
}

/// Represents a run of decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the decimal value of the digits, clamped to [`u64::MAX`].
    pub value: u64,
}

/// Represents a double-quoted string literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringLiteral {
    /// Is the span that makes up the token, quotes included.
    pub span: Span,
}

impl StringLiteral {
    /// Gets the text between the quotes, verbatim.
    #[must_use]
    pub fn content(&self) -> &str {
        let text = self.span.str();
        &text[1..text.len() - 1]
    }
}

/// Represents a reserved word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyword {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the [`KeywordKind`] that the token represents.
    pub keyword: KeywordKind,
}

/// Represents a single operator character.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Operator {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the operator character that the token represents.
    pub operator: char,
}

/// Represents an ASCII letter followed by ASCII letters and digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    /// Is the span that makes up the token.
    pub span: Span,
}

/// Represents a character no other rule claims.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the character that the token represents.
    pub symbol: char,
}

/// Is an error that can occur when invoking the [`Token::lex`] method.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, thiserror::Error, From,
)]
#[allow(missing_docs)]
pub enum Error {
    #[error("encountered a fatal lexical error that causes the process to stop.")]
    FatalLexicalError,

    #[error("the cursor argument is at the end of the source code.")]
    EndOfSourceCodeCursorArgument,
}

impl Token {
    fn handle_line_comment(cursor: &mut Cursor) {
        // the second `/`
        cursor.next();

        cursor.eat_while(|character| character != '\n');

        // the terminating new line belongs to the comment
        cursor.next();
    }

    fn handle_block_comment(
        cursor: &mut Cursor,
        start: ByteIndex,
        handler: &dyn Handler<error::Error>,
    ) {
        // the `*` of the opener
        cursor.next();
        let opener = cursor.span_from(start);

        while !cursor.starts_with("*/") {
            if cursor.next().is_none() {
                handler.receive(UnterminatedBlockComment { span: opener }.into());
                return;
            }
        }

        // the `*/` closer
        cursor.next();
        cursor.next();
    }

    fn handle_string(
        cursor: &mut Cursor,
        start: ByteIndex,
        handler: &dyn Handler<error::Error>,
    ) -> Option<Self> {
        let opener = cursor.span_from(start);
        cursor.eat_while(|character| character != '"');

        if cursor.next().is_some() {
            Some(
                StringLiteral {
                    span: cursor.span_from(start),
                }
                .into(),
            )
        } else {
            handler.receive(
                UnterminatedString { span: opener }
                .into(),
            );
            None
        }
    }

    /// Checks the current character alone against the keyword list.
    fn single_character_keyword(character: char) -> Option<KeywordKind> {
        let mut buffer = [0; 4];
        KeywordKind::from_str(character.encode_utf8(&mut buffer)).ok()
    }

    fn handle_identifier_and_keyword(
        cursor: &mut Cursor,
        start: ByteIndex,
        keyword_matching: KeywordMatching,
    ) -> Self {
        cursor.eat_while(|character| character.is_ascii_alphanumeric());

        let span = cursor.span_from(start);

        match keyword_matching {
            KeywordMatching::WholeWord => KeywordKind::from_str(span.str()).ok().map_or_else(
                || Identifier { span: span.clone() }.into(),
                |keyword| {
                    Keyword {
                        span: span.clone(),
                        keyword,
                    }
                    .into()
                },
            ),
            KeywordMatching::SingleCharacter => Identifier { span }.into(),
        }
    }

    fn handle_numeric_literal(
        cursor: &mut Cursor,
        start: ByteIndex,
        handler: &dyn Handler<error::Error>,
    ) -> Self {
        cursor.eat_while(|character| character.is_ascii_digit());

        let span = cursor.span_from(start);

        // a run of ascii digits can only fail to parse by overflowing
        let value = span.str().parse::<u64>().unwrap_or_else(|_| {
            handler.receive(NumericOverflow { span: span.clone() }.into());
            u64::MAX
        });

        Number { span, value }.into()
    }

    fn lex_full(
        cursor: &mut Cursor,
        start: ByteIndex,
        character: char,
        configuration: &Configuration,
        handler: &dyn Handler<error::Error>,
    ) -> Option<Self> {
        // Found white space
        if character.is_ascii_whitespace() {
            None
        }
        // Found line comment
        else if character == '/' && cursor.peek() == Some('/') {
            Self::handle_line_comment(cursor);
            None
        }
        // Found block comment
        else if character == '/' && cursor.peek() == Some('*') {
            Self::handle_block_comment(cursor, start, handler);
            None
        }
        // Found string literal
        else if character == '"' {
            Self::handle_string(cursor, start, handler)
        }
        // Found single character keyword
        else if let (KeywordMatching::SingleCharacter, Some(keyword)) = (
            configuration.keyword_matching(),
            Self::single_character_keyword(character),
        ) {
            Some(
                Keyword {
                    span: cursor.span_from(start),
                    keyword,
                }
                .into(),
            )
        }
        // Found operator
        else if is_operator_character(character) {
            Some(
                Operator {
                    span: cursor.span_from(start),
                    operator: character,
                }
                .into(),
            )
        }
        // Found identifier/keyword
        else if character.is_ascii_alphabetic() {
            Some(Self::handle_identifier_and_keyword(
                cursor,
                start,
                configuration.keyword_matching(),
            ))
        }
        // Found numeric literal
        else if character.is_ascii_digit() {
            Some(Self::handle_numeric_literal(cursor, start, handler))
        }
        // Anything else
        else {
            Some(
                Symbol {
                    span: cursor.span_from(start),
                    symbol: character,
                }
                .into(),
            )
        }
    }

    fn lex_arithmetic(
        cursor: &mut Cursor,
        start: ByteIndex,
        character: char,
        handler: &dyn Handler<error::Error>,
    ) -> Result<Option<Self>, Error> {
        if is_arithmetic_whitespace(character) {
            Ok(None)
        } else if character.is_ascii_digit() {
            Ok(Some(Self::handle_numeric_literal(cursor, start, handler)))
        } else if ARITHMETIC_OPERATORS.contains(&character) {
            Ok(Some(
                Operator {
                    span: cursor.span_from(start),
                    operator: character,
                }
                .into(),
            ))
        } else {
            handler.receive(
                UnexpectedCharacter {
                    span: cursor.span_from(start),
                    character,
                }
                .into(),
            );
            Err(Error::FatalLexicalError)
        }
    }

    /// Lexes the source code from the given cursor.
    ///
    /// The scan starts at the current position of the cursor and always consumes at least one
    /// character. Whitespace, comments and unterminated string literals are consumed without
    /// producing a token, in which case `Ok(None)` is returned. After a token is made, the cursor
    /// is left at the next character that is not part of the token.
    ///
    /// # Errors
    /// - [`Error::EndOfSourceCodeCursorArgument`] - The cursor argument is at the end of the
    ///   source code.
    /// - [`Error::FatalLexicalError`] - The arithmetic grammar met a character it doesn't accept.
    pub fn lex(
        cursor: &mut Cursor,
        configuration: &Configuration,
        handler: &dyn Handler<error::Error>,
    ) -> Result<Option<Self>, Error> {
        let (start, character) = cursor.next().ok_or(Error::EndOfSourceCodeCursorArgument)?;

        match configuration.grammar() {
            Grammar::Full => Ok(Self::lex_full(
                cursor,
                start,
                character,
                configuration,
                handler,
            )),
            Grammar::Arithmetic => Self::lex_arithmetic(cursor, start, character, handler),
        }
    }
}
