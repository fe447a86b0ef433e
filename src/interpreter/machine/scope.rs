use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Index of a scope in a [`Scopes`] arena.
pub type ScopeId = usize;

/// The scope holding global variables. Every function scope hangs off it.
pub const GLOBAL_SCOPE: ScopeId = 0;

/// One lexical binding environment.
#[derive(Debug, Default)]
struct Scope {
    vars:    HashMap<String, Value>,
    parent:  Option<ScopeId>,
    in_loop: bool,
}

/// An arena of scopes linked to their parents by index.
///
/// Scopes are pushed when a call or block starts and truncated when it ends,
/// so the arena always mirrors the dynamic nesting of the running program.
/// New bindings go into the given scope only; lookups and updates walk the
/// parent chain.
///
/// # Example
/// ```
/// use qurt::interpreter::{
///     machine::scope::{GLOBAL_SCOPE, Scopes},
///     value::core::Value,
/// };
///
/// let mut scopes = Scopes::new();
/// scopes.declare(GLOBAL_SCOPE, "x", Value::Int(1), 1).unwrap();
///
/// let block = scopes.push(GLOBAL_SCOPE, false);
/// assert_eq!(scopes.lookup(block, "x"), Some(&Value::Int(1)));
///
/// scopes.declare(block, "y", Value::Int(2), 2).unwrap();
/// scopes.truncate(block);
/// assert_eq!(scopes.lookup(GLOBAL_SCOPE, "y"), None);
/// ```
#[derive(Debug)]
pub struct Scopes {
    arena: Vec<Scope>,
}

impl Default for Scopes {
    fn default() -> Self {
        Self::new()
    }
}

impl Scopes {
    /// Creates an arena holding only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { arena: vec![Scope::default()] }
    }

    /// Opens a child scope of `parent` and returns its id.
    pub fn push(&mut self, parent: ScopeId, in_loop: bool) -> ScopeId {
        self.arena.push(Scope { vars: HashMap::new(),
                                parent: Some(parent),
                                in_loop });
        self.arena.len() - 1
    }

    /// Discards `scope` and every scope opened after it.
    pub fn truncate(&mut self, scope: ScopeId) {
        self.arena.truncate(scope.max(GLOBAL_SCOPE + 1));
    }

    /// Returns `true` if `scope` is inside a loop body.
    #[must_use]
    pub fn in_loop(&self, scope: ScopeId) -> bool {
        self.arena.get(scope).is_some_and(|scope| scope.in_loop)
    }

    /// Binds a new variable in `scope`.
    ///
    /// # Errors
    /// `VariableExists` if `scope` itself already binds `name`. Bindings of
    /// enclosing scopes may be shadowed.
    pub fn declare(&mut self,
                   scope: ScopeId,
                   name: &str,
                   value: Value,
                   line: usize)
                   -> Result<(), RuntimeError> {
        let vars = &mut self.arena[scope].vars;
        if vars.contains_key(name) {
            return Err(RuntimeError::VariableExists { name: name.to_string(),
                                                      line });
        }
        vars.insert(name.to_string(), value);

        Ok(())
    }

    /// Finds the nearest binding of `name`, starting at `scope`.
    #[must_use]
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Value> {
        self.find(scope, name)
            .and_then(|owner| self.arena[owner].vars.get(name))
    }

    /// Mutable counterpart of [`Scopes::lookup`].
    pub fn lookup_mut(&mut self, scope: ScopeId, name: &str) -> Option<&mut Value> {
        self.find(scope, name)
            .and_then(|owner| self.arena[owner].vars.get_mut(name))
    }

    fn find(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = self.arena.get(id)?;
            if scope.vars.contains_key(name) {
                return Some(id);
            }
            current = scope.parent;
        }
        None
    }
}
