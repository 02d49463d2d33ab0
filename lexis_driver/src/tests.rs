use std::io::Write;

use lexis_base::log::formatting;
use lexis_lexical::{
    config::{Grammar, KeywordMatching},
    token_stream::TokenStream,
};
use tempfile::NamedTempFile;

use super::{drive, render, Argument, Parser};

fn source(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn argument(args: &[&str]) -> Argument {
    Argument::try_parse_from(std::iter::once("lexis").chain(args.iter().copied())).unwrap()
}

fn run_on(content: &str, args: &[&str]) -> (bool, String) {
    formatting::set_colors_enabled(false);

    let file = source(content);
    let path = file.path().to_str().unwrap().to_owned();

    let mut arguments = args.to_vec();
    arguments.push(&path);

    let mut output = Vec::new();
    let succeeded = drive(&argument(&arguments), &mut output);

    (succeeded, String::from_utf8(output).unwrap())
}

#[test]
fn default_arguments() {
    let argument = argument(&[]);

    assert_eq!(argument.file, None);
    assert_eq!(argument.grammar, Grammar::Full);
    assert_eq!(argument.keyword_matching, KeywordMatching::SingleCharacter);
    assert!(!argument.locations);
    assert!(!argument.deny_warnings);
}

#[test]
fn parse_arguments() {
    let argument = argument(&[
        "--grammar",
        "arithmetic",
        "--keywords",
        "whole-word",
        "--locations",
        "input.lx",
    ]);

    assert_eq!(argument.file.as_deref(), Some(std::path::Path::new("input.lx")));

    let configuration = argument.configuration();
    assert_eq!(configuration.grammar(), Grammar::Arithmetic);
    assert_eq!(configuration.keyword_matching(), KeywordMatching::WholeWord);
    assert!(argument.locations);
}

#[test]
fn reject_unknown_grammar() {
    assert!(Argument::try_parse_from(["lexis", "--grammar", "pascal"]).is_err());
}

#[test]
fn render_tokens() {
    let token_stream = TokenStream::tokenize_str("x = 10 + 2;\n\"s\"");

    assert_eq!(
        render(&token_stream, false),
        "IDENTIFIER(x)\nOPERATOR(=)\nNUMBER(10)\nOPERATOR(+)\nNUMBER(2)\nSYMBOL(;)\nSTRING(s)\n"
    );
    assert_eq!(
        render(&token_stream, true).lines().last(),
        Some("2:1 STRING(s)")
    );
}

#[test]
fn drive_prints_tokens() {
    let (succeeded, output) = run_on("if (a) { return 1; }", &["--keywords", "whole-word"]);

    assert!(succeeded);
    assert_eq!(
        output,
        "KEYWORD(if)\nSYMBOL(()\nIDENTIFIER(a)\nSYMBOL())\nSYMBOL({)\nKEYWORD(return)\nNUMBER(1)\nSYMBOL(;)\nSYMBOL(})\n"
    );
}

#[test]
fn drive_warnings() {
    let (succeeded, output) = run_on("1 \"open", &[]);
    assert!(succeeded);
    assert_eq!(output, "NUMBER(1)\n");

    let (succeeded, output) = run_on("1 \"open", &["--deny-warnings"]);
    assert!(!succeeded);
    assert_eq!(output, "NUMBER(1)\n");
}

#[test]
fn drive_arithmetic_failure() {
    let (succeeded, output) = run_on("1 + x", &["--grammar", "arithmetic"]);

    assert!(!succeeded);
    assert!(output.is_empty());
}

#[test]
fn drive_missing_file() {
    let mut output = Vec::new();
    let argument = argument(&["/this/path/does/not/exist.lx"]);

    assert!(!drive(&argument, &mut output));
    assert!(output.is_empty());
}
