//! The REPL's named-macro environment (§2b, §3).
//!
//! Macros are not part of the core translator's language — there is no
//! let/letrec in `Term` itself. Instead the REPL folds every live
//! macro around the term about to be evaluated via the usual
//! let-as-lambda conversion before handing it to the translator.

use lambdac_core::Term;

pub struct MacroTable {
    defs: Vec<(String, Term)>,
}

impl MacroTable {
    pub fn new() -> Self {
        Self { defs: Vec::new() }
    }

    /// Bind `term` under `name`. An older macro with the same name is
    /// not removed — lookups always find the most recent one first
    /// because [`build_full_term`] folds most-recently-defined innermost.
    pub fn define(&mut self, name: String, term: Term) {
        self.defs.push((name, term));
    }

    /// Remove every macro bound to `name`.
    pub fn forget(&mut self, name: &str) {
        self.defs.retain(|(bound, _)| bound != name);
    }

    pub fn list(&self) -> &[(String, Term)] {
        &self.defs
    }

    /// `let x1 = e1 in let x2 = e2 in ... term` expressed as nested
    /// applications of lambdas, i.e. `(λx1. (λx2. ... term) e2) e1`.
    pub fn build_full_term(&self, term: Term) -> Term {
        let mut result = term;
        for (name, def_term) in self.defs.iter().rev() {
            result = Term::app(Term::lam(name.clone(), result), def_term.clone());
        }
        result
    }
}

impl Default for MacroTable {
    fn default() -> Self {
        Self::new()
    }
}
