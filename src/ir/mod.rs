//! Intermediate representation handed to bytecode emission
//!
//! IR nodes are a separate tree from the AST: they are built by lowering after
//! analysis succeeds and carry only what the emitter needs.

mod nodes;
mod visitor;

pub use nodes::*;
pub use visitor::*;
