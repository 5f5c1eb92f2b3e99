use std::borrow::Borrow;
use std::convert::TryFrom;
use std::fmt;

use super::value::Value;


/// Bare name read from source text.
///
/// The tokenizer decides what may appear in a Symbol (any run of printable,
/// non-whitespace, non-paren characters), so construction never fails.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(String);

pub trait ToSymbol {
    fn to_symbol(&self) -> Symbol;
}

impl Symbol {
    pub fn new<S: AsRef<str>>(sym: S) -> Symbol {
        Symbol(sym.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}


impl<S: AsRef<str>> ToSymbol for S {
    fn to_symbol(&self) -> Symbol {
        Symbol::new(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol(s)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<Value> for Symbol {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Symbol(symbol) = value {
            Ok(symbol)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a Symbol {
    type Error = &'a Value;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        if let Value::Symbol(symbol) = value {
            Ok(symbol)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<Option<&'a Value>> for &'a Symbol {
    type Error = Option<&'a Value>;

    fn try_from(value: Option<&'a Value>) -> Result<Self, Self::Error> {
        if let Some(Value::Symbol(symbol)) = value {
            Ok(symbol)
        } else {
            Err(value)
        }
    }
}
