//! Residual-value printer generator (§4.4).
//!
//! For each lambda recorded during translation, emits a branch of the
//! runtime `show` function that walks the *original* syntax of that
//! lambda, substituting only captured-variable occurrences with
//! runtime `show(v.env[k], level)` calls. Every other identifier,
//! including the lambda's own parameter, prints as literal text — the
//! residual form is the syntactic body, not its reduced form.
//!
//! A variable name is resolved against the captures list recorded for
//! the *entry currently being walked*, for the whole walk, even when
//! descending into a nested `Lam` with its own separately recorded
//! entry. This matches the one-pass original and is why shadowed
//! binders are never renamed on output (see DESIGN.md).
//!
//! Every entry is rendered at compile-time level `Top`, since it is
//! always the body of some `Lam` being shown from the outside — but
//! the *caller* of `show` may itself be nested at a runtime level that
//! only the residual program knows (a captured closure shown from
//! inside another closure's body). Each branch therefore also wraps
//! its rendering in a runtime check on the `level` argument, mirroring
//! the original translator's `if (level) { printf("("); }` guard
//! around every `show_data` entry.

use smol_str::SmolStr;

use crate::term::{Level, Term};
use crate::translator::ShowEntry;

pub fn generate_show(entries: &[ShowEntry]) -> String {
    let mut out = String::new();
    out.push_str("void show(Value v, int level) {\n");

    for entry in entries {
        out.push_str(&format!("    if (v.fun == {}) {{\n", entry.routine));

        out.push_str("        if (level) { printf(\"(\"); }\n");

        let mut stmts = Vec::new();
        walk_term(&entry.term, Level::Top, &entry.captures, &mut stmts);
        for stmt in &stmts {
            out.push_str("        ");
            out.push_str(stmt);
            out.push('\n');
        }

        out.push_str("        if (level) { printf(\")\"); }\n");

        out.push_str("        return;\n");
        out.push_str("    }\n");
    }

    out.push_str("    fprintf(stderr, \"show: unrecognized closure %p\\n\", (void*)v.fun);\n");
    out.push_str("    exit(1);\n");
    out.push('}');
    out
}

fn level_num(level: Level) -> u8 {
    match level {
        Level::Top => 0,
        Level::Fun => 1,
        Level::Arg => 2,
    }
}

fn walk_term(term: &Term, level: Level, captures: &[SmolStr], stmts: &mut Vec<String>) {
    match term {
        Term::Var(name) => match captures.iter().position(|n| n == name) {
            Some(slot) => stmts.push(format!("show(v.env[{slot}], {});", level_num(level))),
            None => stmts.push(format!("printf(\"%s\", \"{name}\");")),
        },
        Term::Lam(param, body) => {
            let needs_parens = level >= Level::Fun;
            if needs_parens {
                stmts.push("printf(\"(\");".to_string());
            }
            stmts.push(format!("printf(\"λ{param}. \");"));
            walk_term(body, Level::Top, captures, stmts);
            if needs_parens {
                stmts.push("printf(\")\");".to_string());
            }
        }
        Term::App(fun, arg) => {
            let needs_parens = level >= Level::Arg;
            if needs_parens {
                stmts.push("printf(\"(\");".to_string());
            }
            walk_term(fun, Level::Fun, captures, stmts);
            stmts.push("printf(\" \");".to_string());
            walk_term(arg, Level::Arg, captures, stmts);
            if needs_parens {
                stmts.push("printf(\")\");".to_string());
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_walk_var_literal() {
        let term = Term::var("x");
        let mut stmts = Vec::new();
        walk_term(&term, Level::Top, &[], &mut stmts);
        assert_eq!(stmts, vec!["printf(\"%s\", \"x\");".to_string()]);
    }

    #[test]
    fn test_walk_captured_var() {
        let term = Term::var("x");
        let captures = vec![SmolStr::new("x")];
        let mut stmts = Vec::new();
        walk_term(&term, Level::Arg, &captures, &mut stmts);
        assert_eq!(stmts, vec!["show(v.env[0], 2);".to_string()]);
    }

    #[test]
    fn test_walk_lambda_no_parens_at_top() {
        let term = Term::lam("x", Term::var("x"));
        let mut stmts = Vec::new();
        walk_term(&term, Level::Top, &[], &mut stmts);
        assert!(!stmts.iter().any(|s| s.contains("printf(\"(\")")));
    }

    #[test]
    fn test_walk_lambda_parens_as_fun_position() {
        let term = Term::lam("x", Term::var("x"));
        let mut stmts = Vec::new();
        walk_term(&term, Level::Fun, &[], &mut stmts);
        assert!(stmts.iter().any(|s| s.contains("printf(\"(\")")));
    }

    #[test]
    fn test_generate_show_wraps_each_entry_in_a_runtime_level_check() {
        let entries = vec![ShowEntry {
            routine: "lambda_0".to_string(),
            term: Term::lam("y", Term::var("y")),
            captures: Vec::new(),
        }];
        let out = generate_show(&entries);
        assert!(out.contains("if (v.fun == lambda_0) {"));
        assert!(out.contains("if (level) { printf(\"(\"); }"));
        assert!(out.contains("if (level) { printf(\")\"); }"));
    }
}
