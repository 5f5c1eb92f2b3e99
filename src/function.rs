//! Basic blocks for procedural representation.

use std::fmt;

use derivative::Derivative;
use dyn_clone::DynClone;

use self::EvalErr::*;
use crate::error::ErrorKind;
use crate::sexp::{Cons, Symbol, ToSymbol, Value};


/// Arguments arrive as the raw, unevaluated remainder of the calling list.
pub type Args = Cons;
pub type Ret = Result<Value, EvalErr>;

pub trait Func: DynClone {
    fn call(&self, args: &Args) -> Ret;
}

dyn_clone::clone_trait_object!(Func);

impl<F> Func for F
where
    F: Fn(&Args) -> Ret + Clone,
{
    fn call(&self, args: &Args) -> Ret {
        self(args)
    }
}

/// Named callable stored in an Environment.
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct Function {
    name: String,
    #[derivative(Debug = "ignore")]
    fun: Box<dyn Func>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EvalErr {
    UnboundSymbol(Symbol),
}


impl Function {
    pub fn new<S: AsRef<str>, F: Func + 'static>(name: S, fun: F) -> Function {
        Function {
            name: name.as_ref().to_string(),
            fun: Box::new(fun),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &Args) -> Ret {
        self.fun.call(args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[FUNCTION_{}]", self.name)
    }
}


impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Eval Error] ")?;
        match self {
            UnboundSymbol(symbol) => write!(f, "Unbound symbol: \"{}\"", symbol),
        }
    }
}

impl ErrorKind for EvalErr {
    fn reify(&self) -> Value {
        match self {
            UnboundSymbol(symbol) => list!(
                "EvalError".to_symbol(),
                "UnboundSymbol".to_symbol(),
                symbol.clone(),
            ),
        }
    }
}
