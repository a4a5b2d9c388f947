//! Scoped symbol table.
//!
//! A [`ScopeStack`] is an ordered sequence of [`Scope`]s, innermost last.
//! The global scope exists for the whole lifetime of the stack; block
//! statements push one scope on entry and pop it on exit.
//!
//! ## Example
//! ```
//! use nahw::interpreter::{scope::ScopeStack, value::core::Value};
//!
//! let mut scopes = ScopeStack::new();
//! scopes.declare("x").unwrap();
//! scopes.assign("x", Value::Integer(1)).unwrap();
//!
//! scopes.enter_scope();
//! scopes.declare("x").unwrap(); // shadows the global `x`
//! assert!(!scopes.lookup("x").unwrap().initialized);
//! scopes.exit_scope().unwrap();
//!
//! assert_eq!(scopes.lookup("x").unwrap().value, Some(Value::Integer(1)));
//! ```

use indexmap::IndexMap;
use log::trace;
use thiserror::Error;

use crate::{error::SemanticError, interpreter::value::core::Value};

/// Errors that can occur when operating on a [`ScopeStack`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// The name already exists in the innermost scope.
    #[error("variable '{name}' already declared in this scope")]
    DuplicateDeclaration {
        /// The name that was declared twice.
        name: String,
    },
    /// No active scope contains the name.
    #[error("variable '{name}' is not declared")]
    UndeclaredVariable {
        /// The name that could not be resolved.
        name: String,
    },
    /// `exit_scope` was called with only the global scope left.
    #[error("cannot exit the global scope")]
    GlobalScopeExit,
}

impl ScopeError {
    /// Attaches the source line, turning the failure into the matching
    /// [`SemanticError`]. An undeclared name here always comes from an
    /// assignment; reads are resolved through [`ScopeStack::lookup`].
    #[must_use]
    pub fn at_line(self, line: usize) -> SemanticError {
        match self {
            Self::DuplicateDeclaration { name } => SemanticError::DuplicateDeclaration { name, line },
            Self::UndeclaredVariable { name } => {
                SemanticError::UndeclaredVariableAssignment { name, line }
            },
            Self::GlobalScopeExit => SemanticError::UnbalancedScope { line },
        }
    }
}

/// The binding of one name.
///
/// Created uninitialized by a declaration and filled in by an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VariableEntry {
    /// Whether a value has been assigned.
    pub initialized: bool,
    /// The current value, `None` until the first assignment.
    pub value:       Option<Value>,
}

impl std::fmt::Display for VariableEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Some(value) if self.initialized => write!(f, "{value}"),
            _ => write!(f, "<uninitialized>"),
        }
    }
}

/// One level of name visibility.
///
/// Names are unique within a scope. Entries are kept in declaration order so
/// that snapshots print deterministically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    variables: IndexMap<String, VariableEntry>,
}

impl Scope {
    /// Returns the binding of `name` in this scope only.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VariableEntry> {
        self.variables.get(name)
    }

    /// Returns `true` if this scope declares `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of names declared in this scope.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing is declared in this scope.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over `(name, binding)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariableEntry)> {
        self.variables.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (name, entry)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name} = {entry}")?;
        }
        write!(f, "}}")
    }
}

/// A stack of scopes with the global scope at the bottom.
///
/// Lookups and assignments search from the innermost scope outwards, so an
/// inner declaration shadows an outer one while the inner scope is active.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// Creates a stack holding only an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::default()] }
    }

    /// Pushes an empty scope.
    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope::default());
        trace!("entered scope at depth {}", self.depth());
    }

    /// Pops the innermost scope and returns it, discarding its bindings from
    /// the stack.
    ///
    /// # Errors
    /// Returns `ScopeError::GlobalScopeExit` if only the global scope is left.
    pub fn exit_scope(&mut self) -> Result<Scope, ScopeError> {
        if self.scopes.len() == 1 {
            return Err(ScopeError::GlobalScopeExit);
        }
        let scope = self.scopes.pop().ok_or(ScopeError::GlobalScopeExit)?;
        trace!("exited scope, depth now {}", self.depth());
        Ok(scope)
    }

    /// Declares `name` in the innermost scope as uninitialized.
    ///
    /// Shadowing a name from an outer scope is allowed.
    ///
    /// # Errors
    /// Returns `ScopeError::DuplicateDeclaration` if the innermost scope
    /// already declares `name`.
    pub fn declare(&mut self, name: &str) -> Result<(), ScopeError> {
        let scope = self.innermost_mut();
        if scope.contains(name) {
            return Err(ScopeError::DuplicateDeclaration { name: name.to_string() });
        }
        scope.variables.insert(name.to_string(), VariableEntry::default());
        Ok(())
    }

    /// Stores `value` in the nearest binding of `name` and marks it
    /// initialized. Never creates a binding.
    ///
    /// # Errors
    /// Returns `ScopeError::UndeclaredVariable` if no scope declares `name`.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), ScopeError> {
        let entry = self.scopes
                        .iter_mut()
                        .rev()
                        .find_map(|scope| scope.variables.get_mut(name))
                        .ok_or_else(|| ScopeError::UndeclaredVariable { name: name.to_string() })?;
        entry.initialized = true;
        entry.value = Some(value);
        Ok(())
    }

    /// Returns the nearest binding of `name`, searching innermost first.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&VariableEntry> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Number of scopes on the stack, the global scope included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// The bottom-most scope.
    #[must_use]
    pub fn global(&self) -> &Scope {
        &self.scopes[0]
    }

    /// The scope declarations currently go into.
    #[must_use]
    pub fn innermost(&self) -> &Scope {
        self.scopes.last().unwrap_or_else(|| self.global())
    }

    /// Iterates over the scopes from global to innermost.
    pub fn iter(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter()
    }

    fn innermost_mut(&mut self) -> &mut Scope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }
}

impl std::fmt::Display for ScopeStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, scope) in self.scopes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{scope}")?;
        }
        write!(f, "]")
    }
}
