//! Module for representing S-exps.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use super::cons::Cons;
use super::fmt_io_adapter::FmtIoAdapter;
use super::symbol::Symbol;
use crate::parser::{ParseError, Parser};
use crate::policy::SyntaxPolicy;


/// Value on the heap, as stored in a Cons cell.
pub type HeapValue = Box<Value>;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(i64),
    Symbol(Symbol),
    List(Cons),
}


/// Returns the elements as a Value::List.
///
/// Elements must implement Into<Value>; nest lists by nesting list!.
///
/// Example:
///   list!("quote".to_symbol(), list!(1, 2))
#[macro_export]
macro_rules! list {
    ($($elem:expr),* $(,)?) => {{
        let elements: Vec<$crate::sexp::Value> = vec![$(<$crate::sexp::Value>::from($elem)),*];
        $crate::sexp::Value::List(elements.into_iter().collect::<$crate::sexp::Cons>())
    }};
}


impl Value {
    pub fn empty_list() -> Value {
        Value::List(Cons::default())
    }

    pub fn is_empty_list(&self) -> bool {
        matches!(self, Value::List(cons) if cons.is_empty())
    }

    /// Writes in fully parenthesized, space-separated form.
    ///
    /// Atoms and parens are written through the given callbacks, which also
    /// receive the nesting depth; this lets callers decorate output (e.g.
    /// color parens by depth) without reimplementing list traversal.
    pub fn write_list<W, F, P>(
        &self,
        w: &mut W,
        depth: usize,
        write_atom: &mut F,
        write_paren: &mut P,
    ) -> std::io::Result<()>
    where
        W: std::io::Write,
        F: FnMut(&mut W, &Value, usize) -> std::io::Result<()>,
        P: FnMut(&mut W, &str, usize) -> std::io::Result<()>,
    {
        let cons = match self {
            Value::List(cons) => cons,
            atom => return write_atom(w, atom, depth),
        };

        write_paren(w, "(", depth)?;
        for (pos, val) in cons.iter().enumerate() {
            if pos > 0 {
                write!(w, " ")?;
            }
            val.write_list(w, depth + 1, write_atom, write_paren)?;
        }
        write_paren(w, ")", depth)
    }
}


impl Default for Value {
    fn default() -> Self {
        Value::empty_list()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let res = self.write_list(
            &mut FmtIoAdapter::new(f),
            0,
            &mut |writer, atom, _depth| match atom {
                Value::Number(i) => write!(writer, "{}", i),
                Value::Symbol(s) => write!(writer, "{}", s),
                // write_list only hands atoms to this callback.
                Value::List(_) => Ok(()),
            },
            &mut |writer, paren, _depth| write!(writer, "{}", paren),
        );
        res.map_err(|_| fmt::Error)
    }
}


impl FromStr for Value {
    type Err = ParseError;

    /// Reads the first top-level datum; empty input reads as ().
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::from_str(s, SyntaxPolicy::Lenient);
        Ok(parser.read()?.unwrap_or_default())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(i)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Cons> for Value {
    fn from(cons: Cons) -> Self {
        Value::List(cons)
    }
}

impl From<HeapValue> for Value {
    fn from(value: HeapValue) -> Self {
        *value
    }
}


#[cfg(test)]
#[path = "./value_test.rs"]
mod value_test;
