//! Contains the command line harness that scans a source and prints its tokens.

use std::{
    cell::Cell,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

pub use clap::Parser;
use lexis_base::{
    diagnostic::{Diagnostic, Handler},
    log::{formatting, Message, Severity},
    source_file::{self, SourceFile},
};
use lexis_lexical::{
    config::{Configuration, Grammar, KeywordMatching},
    token_stream::TokenStream,
};

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "lexis",
    about = "Scans a source file and prints one token per line.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The input file to scan. Standard input is read when omitted.
    pub file: Option<PathBuf>,

    /// The token grammar: `full` or `arithmetic`.
    #[clap(long, default_value_t = Grammar::Full)]
    pub grammar: Grammar,

    /// How keywords are recognized: `single-character` or `whole-word`.
    #[clap(long = "keywords", default_value_t = KeywordMatching::SingleCharacter)]
    pub keyword_matching: KeywordMatching,

    /// Prefixes every token with its `line:column`.
    #[clap(long)]
    pub locations: bool,

    /// Disables the ANSI colors of diagnostics.
    #[clap(long = "no-color")]
    pub no_color: bool,

    /// Fails when a warning is reported.
    #[clap(long = "deny-warnings")]
    pub deny_warnings: bool,
}

impl Argument {
    /// Gets the scanner configuration selected by the arguments.
    #[must_use]
    pub fn configuration(&self) -> Configuration {
        Configuration::new(self.grammar, self.keyword_matching)
    }
}

/// A struct that implements [`Handler`] by printing every diagnostic to the standard error stream
/// and counting them by severity.
#[derive(Debug, Default)]
struct Printer {
    errors: Cell<usize>,
    warnings: Cell<usize>,
}

impl Printer {
    fn errors(&self) -> usize { self.errors.get() }

    fn warnings(&self) -> usize { self.warnings.get() }
}

impl<E: Diagnostic> Handler<E> for Printer {
    fn receive(&self, diagnostic: E) {
        eprintln!("{diagnostic}");

        match diagnostic.severity() {
            Severity::Error => self.errors.set(self.errors.get() + 1),
            Severity::Warning => self.warnings.set(self.warnings.get() + 1),
        }
    }
}

/// Loads the given file, or reads standard input when no file is given.
fn load_source(path: Option<&Path>) -> Result<Arc<SourceFile>, source_file::Error> {
    match path {
        Some(path) => SourceFile::load(File::open(path)?, path.to_path_buf()),
        None => SourceFile::read(std::io::stdin().lock(), "<stdin>"),
    }
}

/// Renders one token per line, optionally prefixed with its starting location.
#[must_use]
pub fn render(token_stream: &TokenStream, locations: bool) -> String {
    token_stream
        .iter()
        .map(|token| {
            if locations {
                format!("{} {token}\n", token.span().start_location())
            } else {
                format!("{token}\n")
            }
        })
        .collect()
}

fn report(display: impl std::fmt::Display) {
    eprintln!("{}", Message::new(Severity::Error, display));
}

/// Scans the source selected by the arguments and writes the tokens to `output`.
///
/// Returns whether the run succeeded.
fn drive(argument: &Argument, output: &mut impl Write) -> bool {
    let source_file = match load_source(argument.file.as_deref()) {
        Ok(source_file) => source_file,
        Err(error) => {
            let name = argument
                .file
                .as_deref()
                .map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string());
            report(format_args!("{name}: {error}"));
            return false;
        }
    };

    let printer = Printer::default();

    let Ok(token_stream) = TokenStream::tokenize(&source_file, &argument.configuration(), &printer)
    else {
        return false;
    };

    if let Err(error) = output.write_all(render(&token_stream, argument.locations).as_bytes()) {
        report(format_args!("failed to write the tokens: {error}"));
        return false;
    }

    printer.errors() == 0 && !(argument.deny_warnings && printer.warnings() > 0)
}

/// Runs the program with the given arguments.
#[must_use]
pub fn run(argument: Argument) -> ExitCode {
    if argument.no_color || std::env::var_os("NO_COLOR").is_some() {
        formatting::set_colors_enabled(false);
    }

    if drive(&argument, &mut std::io::stdout().lock()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests;
