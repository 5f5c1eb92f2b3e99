// Public exports.
pub use char_stream::CharStream;
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, TokenizeError, TokenizeErrorKind, Tokenizer};

// Public mods.
pub mod char_stream;
pub mod token;

#[cfg(feature = "cli")]
pub mod cli_stream;

// Private mods.
mod tokenizer;
