//! The untyped λ-calculus term representation and its pretty-printer.

use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;

use smol_str::SmolStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Var(SmolStr),
    Lam(SmolStr, Box<Term>),
    App(Box<Term>, Box<Term>),
}

impl Term {
    pub fn var(name: impl Into<SmolStr>) -> Self {
        Term::Var(name.into())
    }

    pub fn lam(param: impl Into<SmolStr>, body: Term) -> Self {
        Term::Lam(param.into(), Box::new(body))
    }

    pub fn app(fun: Term, arg: Term) -> Self {
        Term::App(Box::new(fun), Box::new(arg))
    }

    /// Free variables of this term, in first-encounter order.
    pub fn free_vars(&self) -> Vec<SmolStr> {
        let mut bound = Vec::new();
        let mut free = Vec::new();
        collect_free_vars(self, &mut bound, &mut free);
        free
    }

    #[inline]
    pub fn repr(&self) -> TermRepr {
        TermRepr {
            term: self,
            level: Level::Top,
        }
    }

    /// Structural equality up to renaming of bound variables.
    pub fn alpha_eq(&self, other: &Term) -> bool {
        let mut left = HashMap::new();
        let mut right = HashMap::new();
        de_bruijn_eq(self, other, &mut left, &mut right, 0)
    }
}

fn collect_free_vars(term: &Term, bound: &mut Vec<SmolStr>, free: &mut Vec<SmolStr>) {
    match term {
        Term::Var(name) => {
            if !bound.contains(name) && !free.contains(name) {
                free.push(name.clone());
            }
        }
        Term::Lam(param, body) => {
            bound.push(param.clone());
            collect_free_vars(body, bound, free);
            bound.pop();
        }
        Term::App(fun, arg) => {
            collect_free_vars(fun, bound, free);
            collect_free_vars(arg, bound, free);
        }
    }
}

fn de_bruijn_eq(
    left: &Term,
    right: &Term,
    left_depth: &mut HashMap<SmolStr, usize>,
    right_depth: &mut HashMap<SmolStr, usize>,
    depth: usize,
) -> bool {
    match (left, right) {
        (Term::Var(a), Term::Var(b)) => match (left_depth.get(a), right_depth.get(b)) {
            (Some(da), Some(db)) => da == db,
            (None, None) => a == b,
            _ => false,
        },
        (Term::Lam(pa, ba), Term::Lam(pb, bb)) => {
            let prev_a = left_depth.insert(pa.clone(), depth);
            let prev_b = right_depth.insert(pb.clone(), depth);
            let result = de_bruijn_eq(ba, bb, left_depth, right_depth, depth + 1);
            restore(left_depth, pa, prev_a);
            restore(right_depth, pb, prev_b);
            result
        }
        (Term::App(fa, aa), Term::App(fb, ab)) => {
            de_bruijn_eq(fa, fb, left_depth, right_depth, depth)
                && de_bruijn_eq(aa, ab, left_depth, right_depth, depth)
        }
        _ => false,
    }
}

fn restore(map: &mut HashMap<SmolStr, usize>, key: &SmolStr, prev: Option<usize>) {
    match prev {
        Some(depth) => {
            map.insert(key.clone(), depth);
        }
        None => {
            map.remove(key);
        }
    }
}

/// Precedence level used while pretty-printing.
///
/// `Top` is the body of a lambda or the whole term; `Fun` is the
/// left-hand side of an application; `Arg` is the right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Top,
    Fun,
    Arg,
}

pub struct TermRepr<'a> {
    term: &'a Term,
    level: Level,
}

impl<'a> fmt::Display for TermRepr<'a> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.term {
            Term::Var(name) => write!(f, "{name}"),
            Term::Lam(param, body) => {
                let inner = TermRepr {
                    term: body,
                    level: Level::Top,
                };
                if self.level >= Level::Fun {
                    write!(f, "(λ{param}. {inner})")
                } else {
                    write!(f, "λ{param}. {inner}")
                }
            }
            Term::App(fun, arg) => {
                let fun_repr = TermRepr {
                    term: fun,
                    level: Level::Fun,
                };
                let arg_repr = TermRepr {
                    term: arg,
                    level: Level::Arg,
                };
                if self.level >= Level::Arg {
                    write!(f, "({fun_repr} {arg_repr})")
                } else {
                    write!(f, "{fun_repr} {arg_repr}")
                }
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.repr())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_print_identity() {
        let term = Term::lam("x", Term::var("x"));
        assert_eq!(term.to_string(), "λx. x");
    }

    #[test]
    fn test_print_application_parens() {
        // (λx. x) (λx. x)
        let term = Term::app(
            Term::lam("x", Term::var("x")),
            Term::lam("x", Term::var("x")),
        );
        assert_eq!(term.to_string(), "(λx. x) (λx. x)");
    }

    #[test]
    fn test_print_left_associative_application() {
        // x y z prints without extra parens since App is left-associative
        let term = Term::app(Term::app(Term::var("x"), Term::var("y")), Term::var("z"));
        assert_eq!(term.to_string(), "x y z");
    }

    #[test]
    fn test_free_vars() {
        let term = Term::lam(
            "x",
            Term::app(Term::var("x"), Term::app(Term::var("y"), Term::var("z"))),
        );
        assert_eq!(term.free_vars(), vec!["y", "z"]);
    }

    #[test]
    fn test_alpha_eq() {
        let a = Term::lam("x", Term::var("x"));
        let b = Term::lam("y", Term::var("y"));
        assert!(a.alpha_eq(&b));

        let c = Term::lam("x", Term::var("y"));
        assert!(!a.alpha_eq(&c));
    }
}
