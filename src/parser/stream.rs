use log::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    scanner::tokens::{Token, TokenKind},
    Position,
};

/// The cursor a parser reads tokens through.
///
/// It tracks the current position in the token list and the name of the
/// unit the cursor is in, so mismatches can be reported against the right
/// source file.
#[derive(Debug, Clone)]
pub struct TokenStream {
    /// The tokens to read
    tokens: Vec<Token>,
    /// Index of the next token to hand out
    pos: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens, pos: 0 }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek_ahead(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        trace!("advance to {} past {}", self.pos, token);
        Some(token)
    }

    /// Name of the unit the next token belongs to.
    pub fn current_unit(&self) -> Option<&str> {
        self.tokens
            .iter()
            .take(self.pos + 1)
            .rev()
            .find(|token| token.kind == TokenKind::Filename)
            .map(|token| token.content.as_str())
    }

    /// Consumes the next token if it has the given kind and content.
    pub fn expect(&mut self, kind: TokenKind, content: &str) -> Result<&Token, Error> {
        self.expect_matching(format!("{} `{}`", kind, content), |token| {
            token.is(kind, content)
        })
    }

    pub fn expect_kind(&mut self, kind: TokenKind) -> Result<&Token, Error> {
        self.expect_matching(kind.to_string(), |token| token.kind == kind)
    }

    pub fn expect_one_of(&mut self, kind: TokenKind, contents: &[&str]) -> Result<&Token, Error> {
        self.expect_matching(format!("{} one of {:?}", kind, contents), |token| {
            token.is_one_of(kind, contents)
        })
    }

    fn expect_matching<F>(&mut self, expected: String, matches: F) -> Result<&Token, Error>
    where
        F: Fn(&Token) -> bool,
    {
        let unit = self.current_unit().map(String::from);

        match self.tokens.get(self.pos) {
            Some(token) if matches(token) => {
                self.pos += 1;
                Ok(&self.tokens[self.pos - 1])
            }
            Some(token) => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    found: token.content.clone(),
                },
                token.position,
            )
            .with_unit(unit)),
            None => {
                let position = self
                    .tokens
                    .last()
                    .map(|token| token.position)
                    .unwrap_or_else(Position::unknown);

                Err(Error::new(ErrorImpl::UnexpectedEndOfInput { expected }, position)
                    .with_unit(unit))
            }
        }
    }

    /// Consumes a run of `filename` markers, returning the last one's name.
    pub fn skip_filenames(&mut self) -> Option<&str> {
        let mut last = None;

        while let Some(token) = self.tokens.get(self.pos) {
            if token.kind != TokenKind::Filename {
                break;
            }
            last = Some(self.pos);
            self.pos += 1;
        }

        last.map(|index| self.tokens[index].content.as_str())
    }
}
