use std::fmt;

use crate::parser::Token;
use crate::source::SourceFile;

/// Width of the gutter that precedes the quoted source line.
const GUTTER: &str = "        ";

/// Diagnostic kinds, one per distinct message the front end can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Lexer
    UnexpectedToken,

    // Parser: a required token or construct is missing
    ExpectedIdentifier,
    ExpectedNumber,
    ExpectedString,
    ExpectedLiteral,
    ExpectedPatternAtom,
    ExpectedAtom,
    ExpectedRuleBody,
    ExpectedEquals,
    UnclosedParen,
    UnclosedBlock,

    // Parser: reserved syntax
    BracketsDisabled,

    // Valid syntax, suspicious meaning
    DuplicateRule,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::DuplicateRule => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Default hint shown by the snippet renderer.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::BracketsDisabled => Some("write `(a b)` instead of `[a b]`"),
            Self::ExpectedRuleBody => Some("a rule reads `name pattern ::= body`"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnexpectedToken => "unexpected token",

            Self::ExpectedIdentifier => "identifier expected",
            Self::ExpectedNumber => "number expected",
            Self::ExpectedString => "string expected",
            Self::ExpectedLiteral => "string or number expected",
            Self::ExpectedPatternAtom => "identifier, literal or `(' expected",
            Self::ExpectedAtom => "identifier, number, string, `(' or `[' expected",
            Self::ExpectedRuleBody => "::= expected",
            Self::ExpectedEquals => "`=' expected in definition",
            Self::UnclosedParen => ") expected",
            Self::UnclosedBlock => "} expected",

            Self::BracketsDisabled => {
                "please, use parentheses instead of brackets, brackets are reserved and disabled"
            }

            Self::DuplicateRule => "duplicate rule",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::DuplicateRule => {
                "rule `{}' is already defined, the rule table keeps the first definition"
                    .to_string()
            }
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// 1-based line and column, column counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) location: Location,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One positioned message about a grammar source.
///
/// Carries a copy of the offending source line so it can be rendered after
/// the source and token sequence are gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    pub(crate) severity: Severity,
    pub(crate) message: String,
    pub(crate) source_name: String,
    pub(crate) location: Location,
    /// `Some` for diagnostics raised on a token (parser), `None` for raw text (lexer).
    pub(crate) token: Option<String>,
    pub(crate) line_text: String,
    /// Caret position in characters within `line_text`.
    pub(crate) caret: usize,
    /// Number of characters the snippet renderer underlines.
    pub(crate) width: usize,
    pub(crate) related: Vec<RelatedInfo>,
}

impl Diagnostic {
    /// A diagnostic on raw line text; the line is quoted verbatim.
    pub(crate) fn at_column(kind: DiagnosticKind, source: &SourceFile, location: Location) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            message: kind.fallback_message().to_string(),
            source_name: source.name().to_string(),
            location,
            token: None,
            line_text: source.line(location.line).to_string(),
            caret: location.column.saturating_sub(1) as usize,
            width: 1,
            related: Vec::new(),
        }
    }

    /// A diagnostic on a token; the line is quoted without surrounding
    /// whitespace and the caret shifts left with it.
    pub(crate) fn at_token(kind: DiagnosticKind, source: &SourceFile, token: &Token) -> Self {
        let line = source.line(token.line);
        let indent = line.chars().take_while(|c| c.is_whitespace()).count();
        Self {
            kind,
            severity: kind.default_severity(),
            message: kind.fallback_message().to_string(),
            source_name: source.name().to_string(),
            location: Location {
                line: token.line,
                column: token.column,
            },
            token: Some(token.value.clone()),
            line_text: line.trim().to_string(),
            caret: (token.column.saturating_sub(1) as usize).saturating_sub(indent),
            width: token.value.chars().count().max(1),
            related: Vec::new(),
        }
    }

    /// Replaces the message text outright.
    pub(crate) fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub(crate) fn with_related(mut self, related: RelatedInfo) -> Self {
        self.related.push(related);
        self
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn line(&self) -> u32 {
        self.location.line
    }

    pub fn column(&self) -> u32 {
        self.location.column
    }

    /// Text of the token the parser stopped on, if any.
    pub fn token_text(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn line_text(&self) -> &str {
        &self.line_text
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// The classic one-diagnostic format:
///
/// ```text
/// <file>:<line>(<column>): on token `<text>' error: <message>
///         <source line>
///                 ^
/// ```
///
/// Lexical diagnostics omit the `on token` part.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}({}): ",
            self.source_name, self.location.line, self.location.column
        )?;
        if let Some(token) = &self.token {
            write!(f, "on token `{}' ", token)?;
        }
        write!(f, "{}: {}", self.severity, self.message)?;
        write!(
            f,
            "\n{GUTTER}{}\n{}^",
            self.line_text,
            " ".repeat(GUTTER.len() + self.caret)
        )?;
        for related in &self.related {
            write!(
                f,
                "\n{}:{}({}): note: {}",
                self.source_name, related.location.line, related.location.column, related.message
            )?;
        }
        Ok(())
    }
}
