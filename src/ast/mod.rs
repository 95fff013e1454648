//! Abstract Syntax Tree (AST) representation for sandboxed scripts
//!
//! Only the exception-handling statements are modelled structurally here.
//! Every other statement kind is carried as an [`ExternalStmt`] owned by the
//! front-end stage that understands it.

mod location;
mod nodes;
mod printer;

pub use location::*;
pub use nodes::*;
pub use printer::*;
