use lambdac_core::{is_var, parse, Term};

#[test]
fn parses_identity() {
    let term = parse(r"\x. x").unwrap();
    assert!(term.alpha_eq(&Term::lam("x", Term::var("x"))));
}

#[test]
fn parses_unicode_lambda_and_colon_head() {
    let term = parse("λx: x").unwrap();
    assert!(term.alpha_eq(&Term::lam("x", Term::var("x"))));
}

#[test]
fn application_is_left_associative() {
    let term = parse("f x y").unwrap();
    let expected = Term::app(Term::app(Term::var("f"), Term::var("x")), Term::var("y"));
    assert!(term.alpha_eq(&expected));
}

#[test]
fn parenthesized_argument_overrides_associativity() {
    let term = parse("f (x y)").unwrap();
    let expected = Term::app(Term::var("f"), Term::app(Term::var("x"), Term::var("y")));
    assert!(term.alpha_eq(&expected));
}

#[test]
fn rejects_unbalanced_parens() {
    assert!(parse("(x y").is_err());
}

#[test]
fn rejects_trailing_garbage() {
    assert!(parse("x y )").is_err());
}

#[test]
fn is_var_rejects_keywords_and_nonidentifiers() {
    assert!(is_var("x"));
    assert!(is_var("x_1'"));
    assert!(!is_var("1x"));
    assert!(!is_var("x y"));
    assert!(!is_var(""));
}
