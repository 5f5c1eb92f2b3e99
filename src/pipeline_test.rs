use super::*;

use crate::error::ErrorKind;
use crate::function::EvalErr;
use crate::policy::SyntaxPolicy::*;
use crate::sexp::ToSymbol;


#[test]
fn tokens_mode() {
    let out = render("(+ 12 x)", Mode::Tokens, Lenient).unwrap();
    assert_eq!(out, "OPEN\nSYM +\nNUMBER 12\nSYM x\nCLOSE\nFIN\n");
}

#[test]
fn parse_mode() {
    let out = render("(+ 1 2)", Mode::Parse, Lenient).unwrap();
    assert_eq!(out, "(+ 1 2)\n");

    let out = render(" (a\n (b))  7 ()", Mode::Parse, Lenient).unwrap();
    assert_eq!(out, "(a (b))\n7\n()\n");
}

#[test]
fn eval_mode() {
    assert_eq!(render("(+ 1 2 3)", Mode::Eval, Lenient).unwrap(), "6");
    assert_eq!(
        render("(quote (1 2 3)) (foo)", Mode::Eval, Lenient).unwrap(),
        "(1 2 3)"
    );
    assert_eq!(render("()", Mode::Eval, Lenient).unwrap(), "()");
}

#[test]
fn eval_mode_skips_leading_atoms() {
    assert_eq!(render("5 (+ 1 2)", Mode::Eval, Lenient).unwrap(), "3");
    assert_eq!(
        render("x 7\n(quote (a b)) (+ 1)", Mode::Eval, Strict).unwrap(),
        "(a b)"
    );
    assert_eq!(render("42", Mode::Eval, Lenient).unwrap(), "()");
    assert_eq!(render("foo bar", Mode::Eval, Strict).unwrap(), "()");
}

#[test]
fn empty_input() {
    assert_eq!(render("", Mode::Tokens, Lenient).unwrap(), "FIN\n");
    assert_eq!(render("", Mode::Parse, Lenient).unwrap(), "");
    assert_eq!(render("", Mode::Eval, Lenient).unwrap(), "()");
    assert_eq!(render("", Mode::Eval, Strict).unwrap(), "()");
}

#[test]
fn failure_writes_nothing() {
    let mut out = Vec::<u8>::new();
    let err = run("(foo 1)", Mode::Eval, Lenient, &mut out).unwrap_err();
    assert!(out.is_empty());
    assert_eq!(err, Error::from(EvalErr::UnboundSymbol("foo".to_symbol())));
    assert_eq!(err.to_string(), "(EvalError UnboundSymbol foo)");

    let mut out = Vec::<u8>::new();
    assert!(run("(1 2) (3", Mode::Parse, Strict, &mut out).is_err());
    assert!(out.is_empty());

    let mut out = Vec::<u8>::new();
    assert!(run("(1 \u{7})", Mode::Tokens, Strict, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn run_writes_output() {
    let mut out = Vec::<u8>::new();
    run("(+ 40 2)", Mode::Eval, Lenient, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "42");
}

#[test]
fn evaluate_sequences() {
    let env = Environment::with_builtins();
    let results = evaluate_all("(+ 1 1) 3 (quote x)", Lenient, &env).unwrap();
    assert_eq!(
        results,
        vec![
            Value::Number(2),
            Value::Number(3),
            Value::Symbol("x".to_symbol())
        ]
    );

    let err = evaluate_all("(+ 1) (nope)", Lenient, &env).unwrap_err();
    assert_eq!(
        err.kind().reify().to_string(),
        "(EvalError UnboundSymbol nope)"
    );
    assert_eq!(evaluate_first("", Lenient, &env), Ok(Value::empty_list()));
}
