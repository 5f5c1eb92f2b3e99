//! Representation of errors which can be reified as Values.
//!
//! Each pipeline stage has its own error type; Error wraps any of them so
//! stages compose with `?`. Reification gives every error a printable
//! S-exp form, which is also what Display and equality use.

use std::fmt;

use crate::sexp::Value;


pub struct Error {
    kind: Box<dyn ErrorKind>,
}

pub trait ErrorKind: fmt::Debug /* fmt::Display auto-impled below */ {
    fn reify(&self) -> Value;
}


impl Error {
    /// Prefer using From for convenience.
    pub fn new(kind: Box<dyn ErrorKind>) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &dyn ErrorKind {
        &*self.kind
    }

    pub fn consume(self) -> Box<dyn ErrorKind> {
        self.kind
    }
}

impl PartialEq for Error {
    /// Compare kind.
    fn eq(&self, other: &Self) -> bool {
        self.kind().reify() == other.kind().reify()
    }
}

impl fmt::Display for dyn ErrorKind + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reify())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)
    }
}

impl std::error::Error for Error {}


// Stage errors convert directly so ? can be used across stages.
macro_rules! error_from {
    ($($kind:ty),+ $(,)?) => {
        $(
            impl From<$kind> for Error {
                fn from(kind: $kind) -> Self {
                    Error::new(Box::new(kind))
                }
            }
        )+
    };
}

error_from!(
    crate::token::TokenizeError,
    crate::parser::ParseError,
    crate::function::EvalErr,
);
