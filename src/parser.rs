//! Module for parsing tokens into Values.

use std::fmt;
use std::str::Chars;

use log::{debug, warn};

use crate::error::ErrorKind;
use crate::policy::SyntaxPolicy;
use crate::sexp::{Cons, Symbol, ToSymbol, Value};
use crate::token::{CharStream, Token, TokenKind, TokenizeError, TokenizeErrorKind, Tokenizer};

use self::ParseErrorReason::*;

/// Lists nested deeper than this are rejected rather than risking the stack.
pub const MAX_DEPTH: usize = 256;


/// Recursive-descent reader over a Tokenizer.
pub struct Parser<I: Iterator<Item = char>> {
    tokenizer: Tokenizer<I>,
    policy: SyntaxPolicy,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorReason {
    DepthOverflow,
    UnterminatedList,
    UnmatchedClose,
    Tokenize(TokenizeErrorKind),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    reason: ParseErrorReason,
    line: usize,
    col: usize,
}


/// Reads every top-level datum in s.
pub fn parse<S: AsRef<str>>(s: S, policy: SyntaxPolicy) -> Result<Vec<Value>, ParseError> {
    Parser::from_str(s.as_ref(), policy).collect()
}


impl<'a> Parser<Chars<'a>> {
    pub fn from_str(s: &'a str, policy: SyntaxPolicy) -> Self {
        Parser::new(Tokenizer::new(CharStream::from(s), policy))
    }
}

impl<I: Iterator<Item = char>> Parser<I> {
    pub fn new(tokenizer: Tokenizer<I>) -> Self {
        let policy = tokenizer.policy();
        Self { tokenizer, policy }
    }

    pub fn tokenizer(&self) -> &Tokenizer<I> {
        &self.tokenizer
    }

    /// Reads the next top-level datum; None once input is exhausted.
    pub fn read(&mut self) -> Result<Option<Value>, ParseError> {
        loop {
            let token = self.next_token()?;
            let value = match token.token() {
                TokenKind::End => return Ok(None),
                TokenKind::Open => Value::List(self.read_list_at(1)?),
                TokenKind::Close => {
                    if self.policy.is_strict() {
                        return Err(ParseError::at(UnmatchedClose, &token));
                    }
                    warn!("Skipping unmatched close @ ({}, {})", token.line(), token.col());
                    continue;
                }
                TokenKind::Integer(i) => Value::Number(*i),
                TokenKind::Symbol(s) => Value::Symbol(Symbol::new(s)),
            };

            debug!("Read {}", value);
            return Ok(Some(value));
        }
    }

    /// Reads the elements of a list whose Open has already been consumed, up
    /// to its matching Close (or End, when lenient).
    pub fn read_list(&mut self) -> Result<Cons, ParseError> {
        self.read_list_at(1)
    }

    fn read_list_at(&mut self, depth: usize) -> Result<Cons, ParseError> {
        let mut elements = Vec::<Value>::new();
        loop {
            let token = self.next_token()?;
            match token.token() {
                TokenKind::Open => {
                    if depth >= MAX_DEPTH {
                        return Err(ParseError::at(DepthOverflow, &token));
                    }
                    elements.push(Value::List(self.read_list_at(depth + 1)?));
                }
                TokenKind::Close => break,
                TokenKind::End => {
                    if self.policy.is_strict() {
                        return Err(ParseError::at(UnterminatedList, &token));
                    }
                    break;
                }
                TokenKind::Integer(i) => elements.push(Value::Number(*i)),
                TokenKind::Symbol(s) => elements.push(Value::Symbol(Symbol::new(s))),
            }
        }

        // Built back to front onto the empty list.
        Ok(elements.into_iter().collect())
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        Ok(self.tokenizer.next_token()?)
    }
}

impl<I: Iterator<Item = char>> Iterator for Parser<I> {
    type Item = Result<Value, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read().transpose()
    }
}


impl ParseError {
    fn at(reason: ParseErrorReason, token: &Token) -> Self {
        Self {
            reason,
            line: *token.line(),
            col: *token.col(),
        }
    }

    pub fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }

    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }
}

impl From<TokenizeError> for ParseError {
    fn from(err: TokenizeError) -> Self {
        let (line, col) = err.position();
        Self {
            reason: Tokenize(err.kind().clone()),
            line,
            col,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Tokenize(kind) => write!(f, "[Tokenize Error]: {}", kind)?,
            reason => write!(f, "[Parse Error]: {:?}", reason)?,
        }
        write!(f, " @ ({}, {})", self.line, self.col)
    }
}

impl ErrorKind for ParseError {
    fn reify(&self) -> Value {
        let reason = match &self.reason {
            Tokenize(kind) => {
                let (line, col) = self.position();
                return TokenizeError::new(kind.clone(), line, col).reify();
            }
            reason => format!("{:?}", reason).to_symbol(),
        };
        list!(
            "ParseError".to_symbol(),
            reason,
            self.line as i64,
            self.col as i64,
        )
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
