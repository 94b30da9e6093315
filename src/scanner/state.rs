//! The scanner's accumulator, one variant per state of the character machine.
//!
//! Every variant that is building a lexeme carries its partial text and the
//! position of the lexeme's first character, so flushing a state needs
//! nothing but the state itself.

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    None,
    String { content: String, start: Position },
    BlockComment { start: Position },
    /// A lone `-` waiting to learn whether a digit follows.
    NegativeNumber { start: Position },
    Identifier { content: String, start: Position },
    Integer { content: String, start: Position },
    /// Rest of a zero-led digit run whose `0` was already emitted.
    DiscardDigits,
    Float { content: String, start: Position },
}

impl ScanState {
    pub fn name(&self) -> &'static str {
        match self {
            ScanState::None => "none",
            ScanState::String { .. } => "string",
            ScanState::BlockComment { .. } => "block-comment",
            ScanState::NegativeNumber { .. } => "negative-number",
            ScanState::Identifier { .. } => "identifier",
            ScanState::Integer { .. } => "integer",
            ScanState::DiscardDigits => "discard-digits",
            ScanState::Float { .. } => "float",
        }
    }

    pub fn start(&self) -> Option<Position> {
        match self {
            ScanState::None | ScanState::DiscardDigits => None,
            ScanState::String { start, .. }
            | ScanState::BlockComment { start }
            | ScanState::NegativeNumber { start }
            | ScanState::Identifier { start, .. }
            | ScanState::Integer { start, .. }
            | ScanState::Float { start, .. } => Some(*start),
        }
    }

    /// States that survive a line break.
    pub fn spans_lines(&self) -> bool {
        matches!(self, ScanState::String { .. } | ScanState::BlockComment { .. })
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ScanState::None)
    }
}

/// What the line loop does after a character has been stepped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// A line comment started; drop the rest of the line.
    SkipLine,
}
