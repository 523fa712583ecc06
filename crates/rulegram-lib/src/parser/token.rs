//! Token kinds and positioned tokens.
//!
//! `TokenKind` is the closed lexical vocabulary. Spellings returned by
//! [`TokenKind::name`] are stable and used by dumps and JSON output.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::Error;

/// All token kinds. Discriminants stay below 64 so kinds fit a [`TokenSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Identifier = 0,
    Number,
    Str,
    ParenOpen,
    ParenClose,
    /// Reserved: rejected by the parser.
    BracketOpen,
    /// Reserved: rejected by the parser.
    BracketClose,
    BraceOpen,
    BraceClose,
    Comma,
    Colon,
    Pipe,
    At,
    Question,
    Equals,
    /// `::=`, never split into `:` `:` `=`.
    Produces,
    Star,
    /// Reserved: `%`.
    Percent,
    /// Reserved: `$`.
    Dollar,
    /// Reserved: `$(`.
    DollarParen,
    /// Reserved: `` ` ``.
    Backtick,
    /// Reserved: `^`.
    Caret,
    Newline,
    EndOfFile,
}

use TokenKind::*;

impl TokenKind {
    pub const ALL: [TokenKind; 24] = [
        Identifier,
        Number,
        Str,
        ParenOpen,
        ParenClose,
        BracketOpen,
        BracketClose,
        BraceOpen,
        BraceClose,
        Comma,
        Colon,
        Pipe,
        At,
        Question,
        Equals,
        Produces,
        Star,
        Percent,
        Dollar,
        DollarParen,
        Backtick,
        Caret,
        Newline,
        EndOfFile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Identifier => "identifier",
            Number => "number",
            Str => "string",
            ParenOpen => "(",
            ParenClose => ")",
            BracketOpen => "[",
            BracketClose => "]",
            BraceOpen => "{",
            BraceClose => "}",
            Comma => ",",
            Colon => ":",
            Pipe => "|",
            At => "@",
            Question => "?",
            Equals => "=",
            Produces => "::=",
            Star => "*",
            Percent => "%",
            Dollar => "$",
            DollarParen => "$(",
            Backtick => "`",
            Caret => "^",
            Newline => "newline",
            EndOfFile => "endoffile",
        }
    }

    /// Kinds with a lexer pattern but no grammar production.
    #[inline]
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            BracketOpen | BracketClose | Percent | Dollar | DollarParen | Backtick | Caret
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| Error::UnknownKind {
                what: "token",
                name: name.to_string(),
            })
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One lexical unit. Positions are 1-based; `column` counts characters.
///
/// `value` is the matched text, except for strings (quotes removed, `\"`
/// unescaped), `newline` (the indentation of the following line) and
/// `endoffile` (empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, value: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(\"{}\" at ({}:{}) of type '{}')",
            self.value, self.line, self.column, self.kind
        )
    }
}

/// 64-bit bitset of `TokenKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u8;
            assert!(kind < 64, "TokenKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let kind = kind as u8;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_set();
        for kind in TokenKind::ALL {
            if self.contains(kind) {
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// FIRST sets used by the grammar productions.
pub mod token_sets {
    use super::*;

    /// Tokens that can begin a pattern atom. `[` is included only so the
    /// bracket diagnostic fires instead of a generic one.
    pub const PATATOM_FIRST: TokenSet =
        TokenSet::new(&[Identifier, Str, Number, ParenOpen, BracketOpen]);

    /// Tokens that can begin an atom of a right-hand side.
    pub const ATOM_FIRST: TokenSet =
        TokenSet::new(&[Identifier, Number, Str, ParenOpen, BracketOpen]);

    /// Contents of a `{ ... }` variant body.
    pub const BLOCK_ITEM_FIRST: TokenSet =
        TokenSet::new(&[Identifier, Str, Number, ParenOpen, BracketOpen, Newline]);

    /// Tokens that keep the variant list going.
    pub const VARIANT_SEPARATORS: TokenSet = TokenSet::new(&[Newline, Pipe]);
}
