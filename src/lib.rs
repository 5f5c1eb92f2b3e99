//! Reads S-expressions, builds them into cons-cell Values and evaluates them
//! against an Environment of builtin functions.
//!
//! The pipeline is: CharStream -> Tokenizer -> Parser -> interpreter::eval.
//! See the pipeline module for the three output modes built on top of it.

#[macro_use]
pub mod sexp;

pub mod builtins;
pub mod environment;
pub mod error;
pub mod function;
pub mod interpreter;
pub mod parser;
pub mod pipeline;
pub mod policy;
pub mod std_error;
pub mod token;

pub mod prelude {
    pub use crate::environment::Environment;
    pub use crate::error::{Error, ErrorKind};
    pub use crate::function::{EvalErr, Function};
    pub use crate::interpreter::eval;
    pub use crate::parser::{parse, ParseError, ParseErrorReason, Parser};
    pub use crate::pipeline::Mode;
    pub use crate::policy::SyntaxPolicy;
    pub use crate::sexp::{Cons, Symbol, ToSymbol, Value};
    pub use crate::std_error::StdError;
    pub use crate::token::{tokenize, CharStream, Token, TokenKind, Tokenizer};
    // Macros.
    pub use crate::list;
}
