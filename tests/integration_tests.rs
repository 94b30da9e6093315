//! Integration tests for end-to-end scanning.
//!
//! These tests drive the public API the way a consumer does: frame source
//! units, scan them, then walk the result with a `TokenStream`. The last
//! tests run the command-line driver against files on disk.

use nj_scanner::{
    format_error,
    parser::stream::TokenStream,
    scanner::{
        scanner::{scan, scan_lines, scan_unit},
        tokens::{Token, TokenKind},
    },
    source::source::{frame_units, SourceUnit},
    Position,
};
use std::{fs, path::PathBuf, process::Command};

const COUNTER: &str = "\
# a small class
class Counter {
    attr int count;
    constructor new(int start) {
        let count = start;
    }
    method void bump(int by) {
        let count = count + by - 1;
    }
}";

const GREETER: &str = "\
class Greeter {
    function str greet(str name) {
        return name;
    }
}";

fn same_lexemes(left: &[Token], right: &[Token]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(l, r)| l.same_lexeme(r))
}

#[test]
fn test_scan_class_declaration() {
    let unit = SourceUnit::from_text(Some("counter.nj"), COUNTER);
    let tokens = scan_unit(&unit).unwrap();

    assert!(tokens[0].is(TokenKind::Filename, "counter.nj"));
    assert!(tokens[1].is(TokenKind::Keyword, "class"));
    assert_eq!(tokens[1].position, Position(2, 1));
    assert!(tokens[2].is(TokenKind::Identifier, "Counter"));

    let bump = tokens
        .iter()
        .position(|token| token.is(TokenKind::Identifier, "bump"))
        .unwrap();
    assert_eq!(tokens[bump].position, Position(7, 17));

    let minus = tokens
        .iter()
        .filter(|token| token.is(TokenKind::Symbol, "-"))
        .count();
    assert_eq!(minus, 1);
    assert!(tokens.iter().any(|token| token.is(TokenKind::Integer, "1")));
}

#[test]
fn test_every_positioned_token_points_at_its_lexeme() {
    let unit = SourceUnit::from_text(Some("counter.nj"), COUNTER);
    let tokens = scan_unit(&unit).unwrap();

    for token in tokens.iter().filter(|token| token.kind != TokenKind::Filename) {
        let line = &unit.lines[token.position.line() as usize - 1];
        let rest: String = line
            .chars()
            .skip(token.position.column() as usize - 1)
            .collect();
        assert!(rest.starts_with(&token.content), "{}", token);
    }
}

#[test]
fn test_units_concatenate_in_order() {
    let counter = SourceUnit::from_text(Some("counter.nj"), COUNTER);
    let greeter = SourceUnit::from_text(Some("greeter.nj"), GREETER);

    let mut separately = scan_unit(&counter).unwrap();
    separately.extend(scan_unit(&greeter).unwrap());

    let together = scan(&[counter.clone(), greeter.clone()]).unwrap();
    assert_eq!(together, separately);

    let framed = frame_units(&[counter, greeter]);
    let from_lines = scan_lines(&framed).unwrap();
    assert_eq!(from_lines, separately);

    let markers: Vec<&str> = from_lines
        .iter()
        .filter(|token| token.kind == TokenKind::Filename)
        .map(|token| token.content.as_str())
        .collect();
    assert_eq!(markers, vec!["counter.nj", "greeter.nj"]);
}

#[test]
fn test_rescanning_joined_contents() {
    let tokens = scan_lines(&["let total = count + 12 * ( x - -3 ) ;", "do run ( ) ;"]).unwrap();

    let joined = tokens
        .iter()
        .map(|token| token.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let rescanned = scan_lines(&[joined]).unwrap();

    assert!(same_lexemes(&tokens, &rescanned));
}

#[test]
fn test_cursor_walks_scanned_units() {
    let units = vec![
        SourceUnit::from_text(Some("greeter.nj"), GREETER),
        SourceUnit::from_text(Some("counter.nj"), COUNTER),
    ];
    let mut stream = TokenStream::new(scan(&units).unwrap());

    assert_eq!(stream.skip_filenames(), Some("greeter.nj"));
    stream.expect(TokenKind::Keyword, "class").unwrap();
    stream.expect(TokenKind::Identifier, "Greeter").unwrap();
    stream.expect(TokenKind::Symbol, "{").unwrap();
    stream
        .expect_one_of(TokenKind::Keyword, &["constructor", "function", "method"])
        .unwrap();

    while let Some(token) = stream.peek() {
        if token.kind == TokenKind::Filename {
            break;
        }
        stream.advance();
    }

    assert_eq!(stream.skip_filenames(), Some("counter.nj"));
    assert_eq!(stream.current_unit(), Some("counter.nj"));
}

#[test]
fn test_fatal_error_renders_against_source() {
    let units = vec![
        SourceUnit::from_text(Some("ok.nj"), GREETER),
        SourceUnit::from_text(Some("broken.nj"), "class Broken {\n  let s = \"open\n}"),
    ];

    let error = scan(&units).unwrap_err();
    assert_eq!(error.get_unit(), Some("broken.nj"));
    assert_eq!(*error.get_position(), Position(2, 11));

    let rendered = format_error(&error, &units);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[1], "-> broken.nj");
    assert_eq!(lines[3], "2 | let s = \"open");
    assert_eq!(lines[4], "  | --------^");
}

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_nj-scanner"))
}

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("nj_scanner_cli_tests");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_cli_prints_tokens() {
    let path = write_fixture("cli_ok.nj", "class A {\n  let x = -5;\n}\n");

    let output = Command::new(bin_path())
        .arg(&path)
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "<filename> cli_ok.nj [?, ?]");
    assert_eq!(lines[1], "<keyword> class [1, 1]");
    assert!(lines.contains(&"<integer> -5 [2, 11]"));
    assert_eq!(lines.last(), Some(&"<symbol> } [3, 1]"));
}

#[test]
fn test_cli_fails_on_unterminated_comment() {
    let path = write_fixture("cli_broken.nj", "class A `oops\n");

    let output = Command::new(bin_path())
        .arg(&path)
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("UnterminatedBlockComment"));
    assert!(stderr.contains("-> cli_broken.nj"));
}

#[test]
fn test_cli_requires_arguments() {
    let output = Command::new(bin_path()).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
}
