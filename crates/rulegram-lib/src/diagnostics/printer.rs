//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::Diagnostics;
use super::message::{Diagnostic, Severity};

/// How diagnostics are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticStyle {
    /// `file:line(column): ... error: message`, the quoted line and a caret.
    #[default]
    Classic,
    /// Annotated source excerpt with gutter and underline.
    Snippet,
}

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    style: DiagnosticStyle,
    colored: bool,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            style: DiagnosticStyle::Classic,
            colored: false,
        }
    }

    pub fn style(mut self, style: DiagnosticStyle) -> Self {
        self.style = style;
        self
    }

    /// Only affects the snippet style; classic output is always plain.
    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        match self.style {
            DiagnosticStyle::Classic => self.format_classic(w),
            DiagnosticStyle::Snippet => self.format_snippet(w),
        }
    }

    fn format_classic(&self, w: &mut impl Write) -> std::fmt::Result {
        for diag in self.diagnostics {
            writeln!(w, "{}", diag)?;
        }
        Ok(())
    }

    fn format_snippet(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            let (text, range) = excerpt(diag);

            let snippet = Snippet::source(text)
                .line_start(diag.location.line as usize)
                .path(diag.source_name.as_str())
                .annotation(AnnotationKind::Primary.span(range).label(&diag.message));

            let level = severity_to_level(diag.severity);
            let mut group = level.primary_title(&diag.message).element(snippet);

            for related in &diag.related {
                group = group.element(Level::NOTE.message(format!(
                    "{} (line {}, column {})",
                    related.message, related.location.line, related.location.column
                )));
            }

            if let Some(hint) = diag.kind.default_hint() {
                group = group.element(Level::HELP.message(hint));
            }

            let report: Vec<Group> = vec![group];

            if i > 0 {
                w.write_char('\n')?;
            }
            writeln!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Quoted line and the byte range under the caret. Past-the-end positions
/// (`endoffile`, `newline`) point at a blank placeholder column.
fn excerpt(diag: &Diagnostic) -> (&str, std::ops::Range<usize>) {
    if diag.line_text.is_empty() {
        return (" ", 0..1);
    }
    (diag.line_text.as_str(), caret_range(diag))
}

/// Byte range under the caret, clamped to the quoted line.
fn caret_range(diag: &Diagnostic) -> std::ops::Range<usize> {
    let text = diag.line_text.as_str();
    let byte_at = |chars: usize| {
        text.char_indices()
            .nth(chars)
            .map_or(text.len(), |(offset, _)| offset)
    };
    let start = byte_at(diag.caret);
    let end = byte_at(diag.caret + diag.width);

    if start == end {
        return start..(start + 1).min(text.len());
    }

    start..end
}
