//! Lower phase for try statements - AST to IR
//!
//! Pure structural projection: the try block and each handler are handed to
//! their lowering collaborators and assembled into a [`TryNode`]. Handler
//! order is the runtime's match order and is copied exactly.

use crate::ast::TryStmt;
use crate::common::error::{Error, Result};
use crate::ir::TryNode;
use crate::wash::flow::{Analyses, AnalyzedTry};
use crate::wash::{BlockLowerer, CatchLowerer};

pub struct TryLowerer<'a> {
    blocks: &'a dyn BlockLowerer,
    catches: &'a dyn CatchLowerer,
    analyses: &'a Analyses,
}

impl<'a> TryLowerer<'a> {
    pub fn new(
        blocks: &'a dyn BlockLowerer,
        catches: &'a dyn CatchLowerer,
        analyses: &'a Analyses,
    ) -> Self {
        Self {
            blocks,
            catches,
            analyses,
        }
    }

    /// Build the IR node for an analyzed try statement.
    ///
    /// Holds no state between calls, so lowering the same statement twice
    /// yields equal trees. Errors come only from the collaborators.
    pub fn lower(&self, analyzed: &AnalyzedTry<'_>) -> Result<TryNode> {
        let try_stmt = analyzed.stmt();

        let block = self.blocks.lower_block(analyzed.body(), self)?;
        let catches = try_stmt
            .catches
            .iter()
            .map(|clause| self.catches.lower_catch(clause, self))
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!(location = %try_stmt.location, "try lowered");

        Ok(TryNode {
            block,
            catches,
            location: try_stmt.location.clone(),
        })
    }

    /// Lower a try statement found inside a block being lowered, using the
    /// summary recorded when the enclosing statement was analyzed.
    pub fn lower_nested(&self, try_stmt: &TryStmt) -> Result<TryNode> {
        let analyzed = self.analyses.analyzed(try_stmt).ok_or_else(|| {
            Error::internal(&try_stmt.location, "try statement lowered before analysis")
        })?;
        self.lower(&analyzed)
    }
}
