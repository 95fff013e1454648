//! Lexical scopes
//!
//! A child scope borrows its parent, so a scope created for a nested block
//! can never outlive the analysis call that opened it. Dropping the child is
//! closing it: nothing it declared is visible to the parent afterwards.

use std::collections::HashMap;

use crate::ast::Location;
use crate::common::error::{Error, Result};

/// A local variable binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub type_name: String,
    pub read_only: bool,
    pub location: Location,
}

#[derive(Debug, Default)]
pub struct Scope<'p> {
    variables: HashMap<String, Variable>,
    parent: Option<&'p Scope<'p>>,
    depth: usize,
}

impl Scope<'static> {
    /// Outermost scope of a script.
    pub fn root() -> Self {
        Self::default()
    }
}

impl<'p> Scope<'p> {
    /// Open a child scope whose bindings shadow nothing and vanish on drop.
    pub fn new_local_scope(&self) -> Scope<'_> {
        tracing::trace!(depth = self.depth + 1, "open local scope");
        Scope {
            variables: HashMap::new(),
            parent: Some(self),
            depth: self.depth + 1,
        }
    }

    /// Declare a variable in this scope.
    ///
    /// Fails if the name is visible anywhere in the chain; scripts may not
    /// shadow an enclosing local.
    pub fn define_variable(
        &mut self,
        location: &Location,
        name: &str,
        type_name: &str,
        read_only: bool,
    ) -> Result<()> {
        if self.is_defined(name) {
            return Err(Error::semantic(
                location,
                format!("variable [{name}] is already defined"),
            ));
        }

        tracing::trace!(name, type_name, depth = self.depth, "define variable");
        self.variables.insert(
            name.to_string(),
            Variable {
                name: name.to_string(),
                type_name: type_name.to_string(),
                read_only,
                location: location.clone(),
            },
        );
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.variables
            .get(name)
            .or_else(|| self.parent.and_then(|p| p.lookup(name)))
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Nesting depth; the root scope is 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Names declared directly in this scope, unordered.
    pub fn local_names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }
}
