//! Provides the functions related to logging/printing messages to the console.

use std::fmt::{Display, Formatter, Result};

use derive_new::new;
use formatting::Paint;

use crate::source_file::{Location, Span};

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Warning,
    Error,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let log_header = Paint::Bold.with(match self.severity {
            Severity::Error => Paint::Red.with("[error]:"),
            Severity::Warning => Paint::Yellow.with("[warning]:"),
        });

        write!(f, "{log_header} {}", Paint::Bold.with(&self.display))
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 1;

    while number >= 10 {
        number /= 10;
        digit += 1;
    }

    digit
}

fn write_empty_gutter(f: &mut Formatter<'_>, width: usize) -> Result {
    writeln!(f, "{:width$} {}", "", Paint::Bold.with(Paint::Cyan.with("┃")))
}

fn write_line_gutter(f: &mut Formatter<'_>, line: usize, width: usize) -> Result {
    write!(
        f,
        "{} {} ",
        Paint::Bold.with(Paint::Cyan.with(format!("{line:>width$}"))),
        Paint::Bold.with(Paint::Cyan.with("┃"))
    )
}

/// Writes one source line without its terminator; tabs are expanded to 4 spaces.
fn write_source_line(
    f: &mut Formatter<'_>,
    line: &str,
    is_highlighted: impl Fn(usize) -> bool,
) -> Result {
    let line = line.trim_end_matches(['\n', '\r']);

    for (index, character) in line.chars().enumerate() {
        let text = if character == '\t' {
            "    ".to_string()
        } else {
            character.to_string()
        };

        if is_highlighted(index + 1) {
            write!(
                f,
                "{}",
                Paint::Underline.with(Paint::Bold.with(Paint::Red.with(text)))
            )?;
        } else {
            write!(f, "{text}")?;
        }
    }

    writeln!(f)
}

/// Structure implementing [`Display`] that prints the particular span of the source code.
///
/// The output shows the `path:line:column` of the span, the line before it, the spanned lines
/// with the spanned characters highlighted, the line after it, and an optional help message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let source_file = self.span.source_file();
        let start = self.span.start_location();
        let end = self.span.end_location();

        // a span swallowing a line terminator ends on the line it terminates
        let end_line = if end.column == 1 && end.line > start.line {
            end.line - 1
        } else {
            end.line
        };
        let is_multiline = start.line != end_line;
        let width = get_digit(end_line + 1);

        writeln!(
            f,
            "{:width$}{} {}:{start}",
            "",
            Paint::Bold.with(Paint::Cyan.with("-->")),
            source_file.full_path().display(),
        )?;
        write_empty_gutter(f, width)?;

        if let Some(line) = source_file.get_line(start.line - 1) {
            write_line_gutter(f, start.line - 1, width)?;
            write_source_line(f, line, |_| false)?;
        }

        for line_number in start.line..=end_line {
            let Some(line) = source_file.get_line(line_number) else {
                break;
            };

            write_line_gutter(f, line_number, width)?;
            write_source_line(f, line, |column| {
                let location = Location {
                    line: line_number,
                    column,
                };
                location >= start && location < end
            })?;
        }

        if !is_multiline {
            let line = source_file.get_line(start.line).unwrap_or_default();
            let indent: usize = line
                .chars()
                .take(start.column - 1)
                .map(|character| if character == '\t' { 4 } else { 1 })
                .sum();
            let carets = self
                .span
                .str()
                .trim_end_matches(['\n', '\r'])
                .chars()
                .count()
                .max(1);

            write!(f, "{:width$} {} ", "", Paint::Bold.with(Paint::Cyan.with("┃")))?;
            write!(
                f,
                "{:indent$}{}",
                "",
                Paint::Bold.with(Paint::Red.with("^".repeat(carets)))
            )?;

            match &self.help_display {
                Some(help) => writeln!(f, " {}: {help}", Paint::Bold.with("help"))?,
                None => writeln!(f)?,
            }
        }

        if let Some(line) = source_file.get_line(end_line + 1) {
            write_line_gutter(f, end_line + 1, width)?;
            write_source_line(f, line, |_| false)?;
        }

        write_empty_gutter(f, width)?;

        if let (true, Some(help)) = (is_multiline, &self.help_display) {
            writeln!(
                f,
                "{:width$} {} {}: {help}",
                "",
                Paint::Bold.with(Paint::Cyan.with("=")),
                Paint::Bold.with("help")
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
