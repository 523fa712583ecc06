//! Lexer for the grammar language.
//!
//! Scanning is line-oriented: every physical line is tokenized on its own and
//! closed with a `newline` token, and the stream ends with one `endoffile`.
//! Logos recognizes the in-line lexemes; line bookkeeping, comments and the
//! synthetic tokens are handled here.
//!
//! ## Positions
//!
//! Lines and columns are 1-based and columns count characters. A token's
//! position is that of its first character. The `newline` token of a line
//! sits where scanning stopped: on the `#` of a trailing comment, or one past
//! the last character. Its value is the indentation of the next line, which
//! the parser never looks at. `endoffile` goes on the line after the last one,
//! in the column of the final `newline`.

use logos::Logos;

use super::token::{Token, TokenKind};
use crate::diagnostics::{Diagnostic, DiagnosticKind, Location};
use crate::source::SourceFile;
use crate::{Error, Result};

/// In-line lexemes. `Whitespace` and `Comment` never become tokens.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    #[regex(r"[-+_a-zA-Z][-+_a-zA-Z0-9]*")]
    Identifier,

    #[regex(r"[0-9]+")]
    Number,

    /// Backslash escapes any character, so `\"` does not close the string.
    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    Str,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    /// `::=` wins over `:` by longest match.
    #[token("::=")]
    Produces,

    #[token("=")]
    Equals,

    #[token("*")]
    Star,

    #[token("@")]
    At,

    #[token("|")]
    Pipe,

    #[token(":")]
    Colon,

    #[token("?")]
    Question,

    #[token("%")]
    Percent,

    #[token("$")]
    Dollar,

    #[token("$(")]
    DollarParen,

    #[token("`")]
    Backtick,

    #[token("^")]
    Caret,

    #[regex(r"[ \t]+")]
    Whitespace,

    /// Starts a comment; the rest of the line is not scanned.
    #[token("#")]
    Comment,
}

impl Lexeme {
    fn kind(self) -> Option<TokenKind> {
        let kind = match self {
            Lexeme::Identifier => TokenKind::Identifier,
            Lexeme::Number => TokenKind::Number,
            Lexeme::Str => TokenKind::Str,
            Lexeme::ParenOpen => TokenKind::ParenOpen,
            Lexeme::ParenClose => TokenKind::ParenClose,
            Lexeme::BracketOpen => TokenKind::BracketOpen,
            Lexeme::BracketClose => TokenKind::BracketClose,
            Lexeme::BraceOpen => TokenKind::BraceOpen,
            Lexeme::BraceClose => TokenKind::BraceClose,
            Lexeme::Comma => TokenKind::Comma,
            Lexeme::Produces => TokenKind::Produces,
            Lexeme::Equals => TokenKind::Equals,
            Lexeme::Star => TokenKind::Star,
            Lexeme::At => TokenKind::At,
            Lexeme::Pipe => TokenKind::Pipe,
            Lexeme::Colon => TokenKind::Colon,
            Lexeme::Question => TokenKind::Question,
            Lexeme::Percent => TokenKind::Percent,
            Lexeme::Dollar => TokenKind::Dollar,
            Lexeme::DollarParen => TokenKind::DollarParen,
            Lexeme::Backtick => TokenKind::Backtick,
            Lexeme::Caret => TokenKind::Caret,
            Lexeme::Whitespace | Lexeme::Comment => return None,
        };
        Some(kind)
    }
}

/// Tokenizes a whole source.
///
/// Fails on the first character that starts no token, and on a source with
/// no lines at all. A source made only of blank and comment lines yields
/// `newline` tokens followed by `endoffile`.
pub fn lex(source: &SourceFile) -> Result<Vec<Token>> {
    if source.is_empty() {
        return Err(Error::EmptySource(source.name().to_string()));
    }

    let lines = source.lines();
    let mut tokens = Vec::new();
    let mut last_column = 1;

    for (index, line) in lines.iter().enumerate() {
        let number = index as u32 + 1;
        last_column = lex_line(source, number, line, &mut tokens)?;

        let next_indent = lines.get(index + 1).map_or("", |next| indentation(next));
        tokens.push(Token::new(
            TokenKind::Newline,
            next_indent,
            number,
            last_column,
        ));
    }

    tokens.push(Token::new(
        TokenKind::EndOfFile,
        "",
        lines.len() as u32 + 1,
        last_column,
    ));

    Ok(tokens)
}

/// Pushes the tokens of one line. Returns the column where scanning stopped.
fn lex_line(source: &SourceFile, number: u32, line: &str, tokens: &mut Vec<Token>) -> Result<u32> {
    let mut columns = ColumnCounter::new(line);
    let mut lexer = Lexeme::lexer(line);

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let column = columns.at(span.start);

        let lexeme = match lexeme {
            Ok(lexeme) => lexeme,
            Err(()) => {
                let location = Location {
                    line: number,
                    column,
                };
                return Err(Error::Lex(Diagnostic::at_column(
                    DiagnosticKind::UnexpectedToken,
                    source,
                    location,
                )));
            }
        };

        if lexeme == Lexeme::Comment {
            return Ok(column);
        }

        if let Some(kind) = lexeme.kind() {
            let value = match kind {
                TokenKind::Str => unquote(lexer.slice()),
                _ => lexer.slice().to_string(),
            };
            tokens.push(Token::new(kind, value, number, column));
        }
    }

    Ok(columns.at(line.len()))
}

/// Strips the quotes and turns `\"` into `"`. Other backslash sequences are
/// kept as written.
fn unquote(literal: &str) -> String {
    literal[1..literal.len() - 1].replace("\\\"", "\"")
}

/// Leading spaces and tabs.
fn indentation(line: &str) -> &str {
    let rest = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - rest.len()]
}

/// Maps byte offsets to 1-based character columns, scanning forward only.
struct ColumnCounter<'a> {
    line: &'a str,
    byte: usize,
    column: u32,
}

impl<'a> ColumnCounter<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            byte: 0,
            column: 1,
        }
    }

    fn at(&mut self, byte: usize) -> u32 {
        debug_assert!(byte >= self.byte, "column counter moved backwards");
        self.column += self.line[self.byte..byte].chars().count() as u32;
        self.byte = byte;
        self.column
    }
}
