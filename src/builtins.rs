use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::function::{Args, Ret};
use crate::sexp::Value;


pub type NativeFn = fn(&Args) -> Ret;

macro_rules! builtins {
    [$($n:tt : $x:expr),* $(,)?] => {
        {
            let mut m = BTreeMap::<&'static str, NativeFn>::new();
            $(
                m.insert($n, $x);
            )*
            m
        }
    };
}

lazy_static! {
    /// Every native routine, keyed by the symbol it is installed under.
    pub static ref BUILTINS: BTreeMap<&'static str, NativeFn> = builtins!["+": add];
}


/// Sums the Number arguments. Non-numeric arguments are ignored, including
/// nested lists, which are not evaluated first.
pub fn add(args: &Args) -> Ret {
    let mut curr: i64 = 0;
    for arg in args {
        if let Value::Number(i) = arg {
            curr = curr.wrapping_add(*i);
        }
    }

    Ok(Value::Number(curr))
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
