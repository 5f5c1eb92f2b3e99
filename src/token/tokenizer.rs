//! Module for breaking text into tokens.

use std::fmt;

use log::{trace, warn};

use super::char_stream::CharStream;
use super::token::{Token, TokenKind};
use crate::error::ErrorKind;
use crate::policy::SyntaxPolicy;
use crate::sexp::{ToSymbol, Value};


/// Pulls characters from a CharStream on demand and classifies them into
/// Tokens, one per call.
pub struct Tokenizer<I: Iterator<Item = char>> {
    stream: CharStream<I>,
    policy: SyntaxPolicy,

    depth: usize,
    finished: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TokenizeError {
    line: usize,
    col: usize,
    kind: TokenizeErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenizeErrorKind {
    MalformedNumber(String),
    InvalidCharacter(char),
}


/// Tokenizes all of s, including the trailing End.
pub fn tokenize<S: AsRef<str>>(s: S, policy: SyntaxPolicy) -> Result<Vec<Token>, TokenizeError> {
    Tokenizer::new(CharStream::from(s.as_ref()), policy).collect()
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

fn is_symbol_char(c: char) -> bool {
    !c.is_control() && !is_whitespace(c) && c != '(' && c != ')'
}


impl<I: Iterator<Item = char>> Tokenizer<I> {
    pub fn new(stream: CharStream<I>, policy: SyntaxPolicy) -> Self {
        Self {
            stream,
            policy,
            depth: 0,
            finished: false,
        }
    }

    /// Open parens not yet matched by a close.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn policy(&self) -> SyntaxPolicy {
        self.policy
    }

    pub fn stream_mut(&mut self) -> &mut CharStream<I> {
        &mut self.stream
    }

    pub fn next_token(&mut self) -> Result<Token, TokenizeError> {
        loop {
            let (line, col) = self.stream.position();
            if self.finished {
                return Ok(Token::new(TokenKind::End, line, col));
            }

            let c = match self.stream.next_char() {
                Some(c) => c,
                None => return Ok(self.end(line, col)),
            };

            let token = match c {
                c if is_whitespace(c) => continue,
                '(' => {
                    self.depth += 1;
                    TokenKind::Open
                }
                ')' => {
                    self.depth = self.depth.saturating_sub(1);
                    TokenKind::Close
                }
                '0'..='9' => self.integer(c, line, col)?,
                c if is_symbol_char(c) => self.symbol(c),
                c => {
                    if self.policy.is_strict() {
                        return Err(TokenizeError {
                            line,
                            col,
                            kind: TokenizeErrorKind::InvalidCharacter(c),
                        });
                    }
                    warn!(
                        "Unclassifiable character {:?} @ ({}, {}); treating as end of input",
                        c, line, col
                    );
                    return Ok(self.end(line, col));
                }
            };

            trace!("Token {} @ ({}, {})", token, line, col);
            return Ok(Token::new(token, line, col));
        }
    }

    fn end(&mut self, line: usize, col: usize) -> Token {
        self.finished = true;
        Token::new(TokenKind::End, line, col)
    }

    fn integer(&mut self, first: char, line: usize, col: usize) -> Result<TokenKind, TokenizeError> {
        let mut digits = first.to_string();
        while let Some(c) = self.stream.next_char() {
            if !c.is_ascii_digit() {
                self.stream.putback(c);
                break;
            }
            digits.push(c);
        }

        let mut value: i64 = 0;
        for digit in digits.bytes().map(|b| (b - b'0') as i64) {
            if self.policy.is_strict() {
                value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                    Some(v) => v,
                    None => {
                        return Err(TokenizeError {
                            line,
                            col,
                            kind: TokenizeErrorKind::MalformedNumber(digits.clone()),
                        });
                    }
                };
            } else {
                value = value.wrapping_mul(10).wrapping_add(digit);
            }
        }
        Ok(TokenKind::Integer(value))
    }

    fn symbol(&mut self, first: char) -> TokenKind {
        let mut s = first.to_string();
        while let Some(c) = self.stream.next_char() {
            if !is_symbol_char(c) {
                self.stream.putback(c);
                break;
            }
            s.push(c);
        }
        TokenKind::Symbol(s)
    }
}


/// Yields every Token up to and including End, or up to the first error.
impl<I: Iterator<Item = char>> Iterator for Tokenizer<I> {
    type Item = Result<Token, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }
}


impl TokenizeError {
    pub(crate) fn new(kind: TokenizeErrorKind, line: usize, col: usize) -> Self {
        Self { line, col, kind }
    }

    pub fn kind(&self) -> &TokenizeErrorKind {
        &self.kind
    }

    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }
}

impl fmt::Display for TokenizeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeErrorKind::MalformedNumber(digits) => write!(f, "MalformedNumber {}", digits),
            TokenizeErrorKind::InvalidCharacter(c) => {
                write!(f, "InvalidCharacter U+{:04X}", *c as u32)
            }
        }
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Tokenize Error]: {} @ ({}, {})",
            self.kind, self.line, self.col
        )
    }
}

impl ErrorKind for TokenizeError {
    fn reify(&self) -> Value {
        let detail = match &self.kind {
            TokenizeErrorKind::MalformedNumber(digits) => {
                list!("MalformedNumber".to_symbol(), digits.to_symbol())
            }
            TokenizeErrorKind::InvalidCharacter(c) => {
                list!("InvalidCharacter".to_symbol(), *c as u32 as i64)
            }
        };
        list!(
            "TokenizeError".to_symbol(),
            detail,
            self.line as i64,
            self.col as i64,
        )
    }
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
