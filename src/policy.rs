/// How forgiving the tokenizer and parser are about malformed input.
///
/// Lenient keeps the historical behavior: integers wrap on overflow, an
/// unclassifiable character ends the input, end-of-input closes any open
/// lists and a stray top-level `)` is skipped. Strict turns each of those
/// into an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyntaxPolicy {
    Lenient,
    Strict,
}

impl SyntaxPolicy {
    pub fn is_strict(self) -> bool {
        self == SyntaxPolicy::Strict
    }
}

impl Default for SyntaxPolicy {
    fn default() -> Self {
        SyntaxPolicy::Lenient
    }
}
