use log::debug;

use crate::environment::Environment;
use crate::function::{EvalErr::*, Ret};
use crate::sexp::{Cons, Value};


/// Evaluates form against env.
///
/// Atoms and the empty list evaluate to themselves. A list headed by a
/// symbol is a call: `quote` returns its first argument untouched, and any
/// other symbol names a Function that receives the remaining elements
/// exactly as read (arguments are never evaluated first). A list headed by
/// anything else evaluates to ().
pub fn eval(form: &Value, env: &Environment) -> Ret {
    let cons = match form {
        Value::List(cons) => cons,
        atom => return Ok(atom.clone()),
    };

    let (head, args) = match cons.split_first() {
        Some(split) => split,
        None => return Ok(form.clone()),
    };

    let symbol = match head {
        Value::Symbol(symbol) => symbol,
        _ => {
            debug!("Non-symbol head in {}; evaluating to ()", form);
            return Ok(Value::empty_list());
        }
    };

    if symbol.as_str() == "quote" {
        return Ok(quote(args));
    }

    match env.lookup(symbol.as_str()) {
        Some(function) => {
            let result = function.call(args);
            debug!("Called {}: {:?}", function, result);
            result
        }
        None => Err(UnboundSymbol(symbol.clone())),
    }
}

fn quote(args: &Cons) -> Value {
    match args.iter().next() {
        Some(val) => val.clone(),
        None => Value::empty_list(),
    }
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
