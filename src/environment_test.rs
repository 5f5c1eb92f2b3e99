use super::*;

use crate::function::{Args, Ret};
use crate::sexp::Value;


fn always(n: i64) -> impl Fn(&Args) -> Ret + Clone {
    move |_args: &Args| -> Ret { Ok(Value::Number(n)) }
}

#[test]
fn builtins_installed() {
    let env = Environment::with_builtins();
    assert_eq!(env.len(), 1);
    assert_eq!(env.lookup("+").map(Function::name), Some("+"));
    assert!(env.lookup("-").is_none());
}

#[test]
fn empty_env() {
    let env = Environment::new();
    assert!(env.is_empty());
    assert!(env.lookup("+").is_none());
}

#[test]
fn last_write_wins() {
    let mut env = Environment::new();
    env.insert("f", always(1));
    env.insert("f", always(2));
    assert_eq!(env.len(), 1);

    let f = env.lookup("f").unwrap();
    assert_eq!(f.call(&Default::default()), Ok(Value::Number(2)));
}

#[test]
fn clone_keeps_bindings() {
    let mut env = Environment::with_builtins();
    env.insert("seven", always(7));
    let copy = env.clone();
    drop(env);

    let seven = copy.lookup("seven").unwrap();
    assert_eq!(seven.call(&Default::default()), Ok(Value::Number(7)));
    assert!(copy.lookup("+").is_some());
}
