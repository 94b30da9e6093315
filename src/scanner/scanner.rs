use log::{debug, error, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    source::source::{units_from_lines, SourceUnit},
    Position, MK_TOKEN,
};

use super::{
    state::{Flow, ScanState},
    tokens::{
        is_digit, is_identifier_continue, is_identifier_start, is_keyword, is_symbol, Token,
        TokenKind,
    },
};

/// Collects the tokens of one source unit.
///
/// The scanner only owns its output. The in-progress lexeme lives in the
/// `ScanState` value threaded through `step`, so one scanner never shares
/// state with another and a unit can be scanned in isolation.
#[derive(Debug, Default)]
pub struct Scanner {
    tokens: Vec<Token>,
}

impl Scanner {
    pub fn new() -> Scanner {
        Scanner { tokens: vec![] }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    fn emit(&mut self, kind: TokenKind, content: String, position: Position) {
        trace!("emit <{}> {} {}", kind, content, position);
        self.tokens.push(MK_TOKEN!(kind, content, position));
    }

    fn emit_word(&mut self, content: String, start: Position) {
        if is_keyword(&content) {
            self.emit(TokenKind::Keyword, content, start);
        } else {
            self.emit(TokenKind::Identifier, content, start);
        }
    }

    /// Feeds one character through the state machine.
    ///
    /// When the character ends the current lexeme, the lexeme is emitted and
    /// the same character is dispatched again from `ScanState::None`.
    /// Characters inside a string or block comment are never dispatched.
    pub fn step(&mut self, state: ScanState, ch: char, at: Position) -> (ScanState, Flow) {
        match state {
            ScanState::None => self.dispatch(ch, at),
            ScanState::BlockComment { start } => {
                if ch == '`' {
                    (ScanState::None, Flow::Continue)
                } else {
                    (ScanState::BlockComment { start }, Flow::Continue)
                }
            }
            ScanState::String { mut content, start } => {
                content.push(ch);
                if ch == '"' {
                    self.emit(TokenKind::String, content, start);
                    (ScanState::None, Flow::Continue)
                } else {
                    (ScanState::String { content, start }, Flow::Continue)
                }
            }
            ScanState::NegativeNumber { start } => {
                if is_digit(ch) {
                    let mut content = String::from("-");
                    content.push(ch);
                    (ScanState::Integer { content, start }, Flow::Continue)
                } else {
                    self.emit(TokenKind::Symbol, String::from("-"), start);
                    self.dispatch(ch, at)
                }
            }
            ScanState::Identifier { mut content, start } => {
                if is_identifier_continue(ch) {
                    content.push(ch);
                    (ScanState::Identifier { content, start }, Flow::Continue)
                } else {
                    self.emit_word(content, start);
                    self.dispatch_after_operand(ch, at)
                }
            }
            ScanState::Integer { mut content, start } => {
                if is_digit(ch) {
                    // A leading zero never grows into a longer literal; the
                    // rest of the digit run is dropped.
                    if content == "-0" {
                        self.emit(TokenKind::Symbol, String::from("-"), start);
                        self.emit(
                            TokenKind::Integer,
                            String::from("0"),
                            Position(start.line(), start.column() + 1),
                        );
                        (ScanState::DiscardDigits, Flow::Continue)
                    } else if content == "0" {
                        self.emit(TokenKind::Integer, content, start);
                        (ScanState::DiscardDigits, Flow::Continue)
                    } else {
                        content.push(ch);
                        (ScanState::Integer { content, start }, Flow::Continue)
                    }
                } else if ch == '.' {
                    content.push(ch);
                    (ScanState::Float { content, start }, Flow::Continue)
                } else {
                    self.emit(TokenKind::Integer, content, start);
                    self.dispatch_after_operand(ch, at)
                }
            }
            ScanState::DiscardDigits => {
                if is_digit(ch) {
                    (ScanState::DiscardDigits, Flow::Continue)
                } else {
                    self.dispatch_after_operand(ch, at)
                }
            }
            ScanState::Float { mut content, start } => {
                if is_digit(ch) {
                    content.push(ch);
                    (ScanState::Float { content, start }, Flow::Continue)
                } else {
                    self.emit(TokenKind::Float, content, start);
                    self.dispatch_after_operand(ch, at)
                }
            }
        }
    }

    /// A `-` glued to the end of a number or name is subtraction, never the
    /// sign of the next literal.
    fn dispatch_after_operand(&mut self, ch: char, at: Position) -> (ScanState, Flow) {
        if ch == '-' {
            self.emit(TokenKind::Symbol, ch.to_string(), at);
            (ScanState::None, Flow::Continue)
        } else {
            self.dispatch(ch, at)
        }
    }

    fn dispatch(&mut self, ch: char, at: Position) -> (ScanState, Flow) {
        match ch {
            '"' => (
                ScanState::String {
                    content: ch.to_string(),
                    start: at,
                },
                Flow::Continue,
            ),
            '#' => (ScanState::None, Flow::SkipLine),
            '`' => (ScanState::BlockComment { start: at }, Flow::Continue),
            '-' => (ScanState::NegativeNumber { start: at }, Flow::Continue),
            c if is_digit(c) => (
                ScanState::Integer {
                    content: c.to_string(),
                    start: at,
                },
                Flow::Continue,
            ),
            c if is_identifier_start(c) => (
                ScanState::Identifier {
                    content: c.to_string(),
                    start: at,
                },
                Flow::Continue,
            ),
            c if is_symbol(c) => {
                self.emit(TokenKind::Symbol, c.to_string(), at);
                (ScanState::None, Flow::Continue)
            }
            _ => (ScanState::None, Flow::Continue),
        }
    }

    /// Closes a line. Single-line lexemes are flushed; strings and block
    /// comments carry over to the next line.
    pub fn end_line(&mut self, state: ScanState, line: &str) -> ScanState {
        match state {
            ScanState::String { mut content, start } => {
                if !line.ends_with('\n') {
                    content.push('\n');
                }
                ScanState::String { content, start }
            }
            ScanState::NegativeNumber { start } => {
                self.emit(TokenKind::Symbol, String::from("-"), start);
                ScanState::None
            }
            ScanState::Identifier { content, start } => {
                self.emit_word(content, start);
                ScanState::None
            }
            ScanState::Integer { content, start } => {
                self.emit(TokenKind::Integer, content, start);
                ScanState::None
            }
            ScanState::Float { content, start } => {
                self.emit(TokenKind::Float, content, start);
                ScanState::None
            }
            ScanState::DiscardDigits => ScanState::None,
            ScanState::None | ScanState::BlockComment { .. } => state,
        }
    }

    pub fn scan_line(&mut self, state: ScanState, line: &str, line_number: u32) -> ScanState {
        let mut state = state;

        for (index, ch) in line.chars().enumerate() {
            let (next, flow) = self.step(state, ch, Position(line_number, one_indexed(index)));
            state = next;

            if flow == Flow::SkipLine {
                break;
            }
        }

        self.end_line(state, line)
    }
}

/// Converts a 0-based index into a 1-based line or column, saturating at
/// `u32::MAX`.
pub fn one_indexed(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |index| index.saturating_add(1))
}

/// Scans a single source unit.
///
/// A named unit starts with its `filename` marker. Fails if a string or block
/// comment is still open when the unit's lines run out.
pub fn scan_unit(unit: &SourceUnit) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::new();
    let mut state = ScanState::None;

    debug!(
        "scanning {} ({} lines)",
        unit.display_name(),
        unit.lines.len()
    );

    if let Some(name) = &unit.name {
        scanner.emit(TokenKind::Filename, name.clone(), Position::unknown());
    }

    for (index, line) in unit.lines.iter().enumerate() {
        state = scanner.scan_line(state, line, one_indexed(index));
    }

    // end_line leaves only line-spanning states open
    let start = state.start().unwrap_or_else(Position::unknown);
    let error_impl = match state {
        ScanState::String { content, .. } => ErrorImpl::UnterminatedString { content },
        ScanState::BlockComment { .. } => ErrorImpl::UnterminatedBlockComment,
        _ => return Ok(scanner.into_tokens()),
    };

    let error = Error::new(error_impl, start).with_unit(unit.name.clone());
    error!(
        "scan aborted in {}: {} left open at {}",
        unit.display_name(),
        error.get_pending_state().unwrap_or("none"),
        error.get_position()
    );
    Err(error)
}

/// Scans every unit in order and concatenates the results.
///
/// Each unit starts from a fresh state. The first unit that fails aborts the
/// whole scan and no tokens are returned.
pub fn scan(units: &[SourceUnit]) -> Result<Vec<Token>, Error> {
    let mut tokens = vec![];

    for unit in units {
        tokens.extend(scan_unit(unit)?);
    }

    debug!("scanned {} units into {} tokens", units.len(), tokens.len());
    Ok(tokens)
}

/// Scans a flat line list where `//name` header lines open named units.
pub fn scan_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Token>, Error> {
    scan(&units_from_lines(lines))
}

pub fn tokenize(source: &str, file: Option<&str>) -> Result<Vec<Token>, Error> {
    scan_unit(&SourceUnit::from_text(file, source))
}
