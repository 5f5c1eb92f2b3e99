use super::*;

use crate::policy::SyntaxPolicy::*;
use TokenKind::*;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input, Lenient)
        .unwrap()
        .into_iter()
        .map(Token::into_kind)
        .collect()
}

fn sym(s: &str) -> TokenKind {
    Symbol(s.to_string())
}

#[test]
fn simple_call() {
    assert_eq!(
        kinds("(+ 1 2)"),
        vec![Open, sym("+"), Integer(1), Integer(2), Close, End]
    );
}

#[test]
fn nested() {
    assert_eq!(
        kinds("(testing (this (out)))"),
        vec![
            Open,
            sym("testing"),
            Open,
            sym("this"),
            Open,
            sym("out"),
            Close,
            Close,
            Close,
            End
        ]
    );
}

#[test]
fn whitespace_runs() {
    assert_eq!(
        kinds("\n (testing\t\t\n\n (\nthis)\n)  "),
        vec![Open, sym("testing"), Open, sym("this"), Close, Close, End]
    );
}

#[test]
fn empty_input() {
    assert_eq!(kinds(""), vec![End]);
    assert_eq!(kinds(" \n\t"), vec![End]);
}

#[test]
fn ints() {
    assert_eq!(
        kinds("(0 7 33 128 007)"),
        vec![
            Open,
            Integer(0),
            Integer(7),
            Integer(33),
            Integer(128),
            Integer(7),
            Close,
            End
        ]
    );
}

#[test]
fn no_negative_literals() {
    assert_eq!(kinds("-4"), vec![sym("-4"), End]);
}

#[test]
fn digit_pushback() {
    assert_eq!(kinds("12ab"), vec![Integer(12), sym("ab"), End]);
    assert_eq!(kinds("(1)"), vec![Open, Integer(1), Close, End]);
    assert_eq!(kinds("3(4"), vec![Integer(3), Open, Integer(4), End]);
    assert_eq!(kinds("9\n"), vec![Integer(9), End]);

    for (input, follower) in &[("123x", 'x'), ("5 ", ' '), ("42)", ')'), ("0(", '(')] {
        let mut tokenizer = Tokenizer::new(CharStream::from(*input), Lenient);
        assert!(matches!(tokenizer.next_token().unwrap().token(), Integer(_)));
        assert_eq!(tokenizer.stream_mut().next_char(), Some(*follower));
    }
}

#[test]
fn symbol_pushback() {
    assert_eq!(
        kinds("ab(cd)ef"),
        vec![sym("ab"), Open, sym("cd"), Close, sym("ef"), End]
    );
    assert_eq!(kinds("a1b2"), vec![sym("a1b2"), End]);
    assert_eq!(kinds("λx→y"), vec![sym("λx→y"), End]);
}

#[test]
fn positions() {
    let tokens = tokenize("(a\n  12)", Lenient).unwrap();
    let positions = tokens
        .iter()
        .map(|t| (*t.line(), *t.col()))
        .collect::<Vec<_>>();
    assert_eq!(positions, vec![(1, 1), (1, 2), (2, 3), (2, 5), (2, 6)]);
}

#[test]
fn end_is_sticky() {
    let mut tokenizer = Tokenizer::new(CharStream::from("x"), Lenient);
    assert_eq!(*tokenizer.next_token().unwrap().token(), sym("x"));
    assert_eq!(*tokenizer.next_token().unwrap().token(), End);
    assert_eq!(*tokenizer.next_token().unwrap().token(), End);
}

#[test]
fn depth_tracking() {
    let mut tokenizer = Tokenizer::new(CharStream::from("((a) (b"), Lenient);
    for _ in &mut tokenizer {}
    assert_eq!(tokenizer.depth(), 2);

    let mut tokenizer = Tokenizer::new(CharStream::from(")))"), Lenient);
    for _ in &mut tokenizer {}
    assert_eq!(tokenizer.depth(), 0);
}

#[test]
fn overflow_wraps_when_lenient() {
    let expected = 99999999999999999999u128 as i64;
    assert_eq!(kinds("99999999999999999999"), vec![Integer(expected), End]);
    assert_eq!(
        kinds("9223372036854775807"),
        vec![Integer(i64::MAX), End]
    );
}

#[test]
fn overflow_fails_when_strict() {
    let err = tokenize("(1 99999999999999999999)", Strict).unwrap_err();
    assert_eq!(
        *err.kind(),
        TokenizeErrorKind::MalformedNumber("99999999999999999999".to_string())
    );
    assert_eq!(err.position(), (1, 4));

    assert!(tokenize("9223372036854775807", Strict).is_ok());
}

#[test]
fn control_character() {
    // Lenient treats it as end of input.
    assert_eq!(kinds("(a\u{7} b)"), vec![Open, sym("a"), End]);
    assert_eq!(kinds("1\r\n2"), vec![Integer(1), End]);

    let err = tokenize("(a\u{7} b)", Strict).unwrap_err();
    assert_eq!(*err.kind(), TokenizeErrorKind::InvalidCharacter('\u{7}'));
    assert_eq!(err.position(), (1, 3));
}

#[test]
fn display_forms() {
    let shown = kinds("(+ 12)")
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>();
    assert_eq!(shown, vec!["OPEN", "SYM +", "NUMBER 12", "CLOSE", "FIN"]);
}
