use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("class");
        set.insert("var");
        set.insert("attr");
        set.insert("constructor");
        set.insert("function");
        set.insert("method");
        set.insert("void");
        set.insert("pass");
        set.insert("let");
        set.insert("do");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("return");
        set.insert("for");
        set.insert("break");
        set.insert("continue");
        set.insert("false");
        set.insert("true");
        set.insert("none");
        set.insert("self");
        set.insert("int");
        set.insert("bool");
        set.insert("char");
        set.insert("str");
        set.insert("list");
        set.insert("float");
        set
    };
    pub static ref SYMBOLS: HashSet<char> = [
        '{', '}', '[', ']', '(', ')', '=', ';', ',', '.', '~', '+', '-', '*', '/', '|', '&', '>',
        '<',
    ]
    .into_iter()
    .collect();
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub fn is_identifier_continue(ch: char) -> bool {
    is_identifier_start(ch) || is_digit(ch)
}

pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(text)
}

pub fn is_symbol(ch: char) -> bool {
    SYMBOLS.contains(&ch)
}

/// The closed set of token classifications.
///
/// `Char` belongs to the tag set for downstream consumers but the scanner
/// never produces it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    String,
    Integer,
    Float,
    Char,
    Symbol,
    Keyword,
    Identifier,
    Filename,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::String => "string",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Char => "char",
            TokenKind::Symbol => "symbol",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Filename => "filename",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}> {} {}", self.kind, self.content, self.position)
    }
}

impl Token {
    /// Compares kind and content, ignoring where the token came from.
    pub fn same_lexeme(&self, other: &Token) -> bool {
        self.kind == other.kind && self.content == other.content
    }

    pub fn is(&self, kind: TokenKind, content: &str) -> bool {
        self.kind == kind && self.content == content
    }

    pub fn is_one_of(&self, kind: TokenKind, contents: &[&str]) -> bool {
        if self.kind != kind {
            return false;
        }

        for content in contents {
            if *content == self.content {
                return true;
            }
        }

        false
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if *kind == self.kind {
                return true;
            }
        }

        false
    }

    pub fn is_literal(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Integer,
            TokenKind::Float,
            TokenKind::Char,
        ])
    }
}
