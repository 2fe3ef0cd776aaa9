//! Per-lambda scope frames for the translator (§3, §4.2).

use smol_str::SmolStr;

/// A scope frame: the parameter binding plus every free variable
/// discovered in this body so far, in first-encounter order.
pub struct Scope {
    /// name -> access expression valid in the emitted C.
    env: Vec<(SmolStr, String)>,
    /// Slot k -> captured name, dense and 0-based.
    captures: Vec<SmolStr>,
}

impl Scope {
    /// A fresh scope whose only binding is its own parameter.
    pub fn with_param(param: impl Into<SmolStr>, access: impl Into<String>) -> Self {
        Self {
            env: vec![(param.into(), access.into())],
            captures: Vec::new(),
        }
    }

    /// Resolve a name against this scope, recording it as a new
    /// capture if it hasn't been seen yet. Returns the access
    /// expression to use at this call site.
    pub fn lookup_var(&mut self, name: &SmolStr) -> String {
        if let Some((_, access)) = self.env.iter().find(|(n, _)| n == name) {
            return access.clone();
        }

        let slot = self.captures.len();
        self.captures.push(name.clone());
        let access = format!("env[{slot}]");
        self.env.push((name.clone(), access.clone()));
        access
    }

    pub fn captures(&self) -> &[SmolStr] {
        &self.captures
    }
}

/// Owns the single active scope, swapping it out via [`std::mem::replace`]
/// as the translator descends into and returns from lambdas.
pub struct ScopeStack {
    current: Scope,
}

impl ScopeStack {
    pub fn new(root: Scope) -> Self {
        Self { current: root }
    }

    pub fn current_mut(&mut self) -> &mut Scope {
        &mut self.current
    }

    /// Run `block` with `new_scope` as the active scope, then restore
    /// the previous one. Returns the block's result alongside the
    /// scope that was active during `block` (so its captures can be
    /// read by the caller).
    pub fn scoped<T>(&mut self, new_scope: Scope, block: impl FnOnce(&mut Self) -> T) -> (T, Scope) {
        let prev = std::mem::replace(&mut self.current, new_scope);
        let result = block(self);
        let finished = std::mem::replace(&mut self.current, prev);
        (result, finished)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lookup_memoizes() {
        let mut scope = Scope::with_param("x", "arg_x");
        let a = scope.lookup_var(&SmolStr::new("y"));
        let b = scope.lookup_var(&SmolStr::new("y"));
        assert_eq!(a, b);
        assert_eq!(scope.captures().len(), 1);
    }

    #[test]
    fn test_lookup_param_is_not_a_capture() {
        let mut scope = Scope::with_param("x", "arg_x");
        assert_eq!(scope.lookup_var(&SmolStr::new("x")), "arg_x");
        assert!(scope.captures().is_empty());
    }

    #[test]
    fn test_scoped_restores_previous() {
        let mut stack = ScopeStack::new(Scope::with_param("_", "_"));
        let (_, finished) = stack.scoped(Scope::with_param("x", "arg_x"), |s| {
            s.current_mut().lookup_var(&SmolStr::new("free"));
        });
        assert_eq!(finished.captures(), &[SmolStr::new("free")]);
        // outer scope is restored and untouched by the inner capture
        assert_eq!(stack.current_mut().lookup_var(&SmolStr::new("_")), "_");
    }
}
