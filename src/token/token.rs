use std::fmt;

use derive_getters::Getters;


#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Open,
    Close,
    End,
    Integer(i64),
    Symbol(String),
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Token {
    token: TokenKind,
    line: usize,
    col: usize,
}

impl Token {
    pub fn new(token: TokenKind, line: usize, col: usize) -> Self {
        Self { token, line, col }
    }

    pub fn into_kind(self) -> TokenKind {
        self.token
    }
}


/// The one-line form used when dumping tokens.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Open => write!(f, "OPEN"),
            TokenKind::Close => write!(f, "CLOSE"),
            TokenKind::End => write!(f, "FIN"),
            TokenKind::Integer(i) => write!(f, "NUMBER {}", i),
            TokenKind::Symbol(s) => write!(f, "SYM {}", s),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ ({}, {})", self.token, self.line, self.col)
    }
}
