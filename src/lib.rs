//! Sandboxed script compiler front-end (sbxc)
//!
//! Semantic analysis and IR lowering for the exception-handling statements of
//! a sandboxed scripting language.
//!
//! ## Architecture
//!
//! - **ast**: parsed statements (`TryStmt`, `CatchClause`, `Block`) and source
//!   locations
//! - **wash**: analysis pipeline (Flow → Lower) plus the scope stack and the
//!   collaborator traits for blocks and catch clauses
//! - **ir**: lowered nodes and the visitor emitters walk them with
//! - **common**: errors and configuration
//!
//! ## Compilation Flow
//!
//! ```text
//! Parser → TryStmt → Flow (CompletionSummary) → Lower (TryNode) → Emitter
//!                      ↓                          ↓
//!               BlockAnalyzer/CatchAnalyzer  BlockLowerer/CatchLowerer
//! ```
//!
//! AST, IR and summary types are `Send + Sync` and analysis keeps no global
//! state, so independent scripts can be compiled on separate threads without
//! coordination.

pub mod ast;
pub mod common;
pub mod ir;
pub mod wash;

pub use common::{CatchCostPolicy, Config, Error, Result};
pub use wash::{
    analyze_and_lower, Analyses, AnalysisContext, CompletionSummary, Scope, TryAnalyzer, TryLowerer,
};
