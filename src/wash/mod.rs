//! Semantic analysis pipeline for exception-handling statements
//!
//! Two phases run per try statement, each a pure function of the parsed tree:
//!
//! - Flow: completion analysis, producing a [`CompletionSummary`]
//! - Lower: projection of the analyzed statement into a [`TryNode`]
//!
//! Blocks and catch clauses are analyzed and lowered by collaborators that the
//! embedding front-end supplies through the traits below.

pub mod completion;
pub mod context;
pub mod flow;
pub mod lower;
pub mod scope;

pub use completion::CompletionSummary;
pub use context::{AnalysisContext, LoopId};
pub use flow::{AnalyzedTry, Analyses, TryAnalyzer};
pub use lower::TryLowerer;
pub use scope::{Scope, Variable};

use crate::ast::{Block, CatchClause, TryStmt};
use crate::common::config::Config;
use crate::common::error::{Error, Result};
use crate::ir::{BlockNode, CatchNode, TryNode};

/// Analyzes a block statement in a scope the caller has already opened.
///
/// Try statements met inside the block go back through `tries`, which shares
/// the configuration and records the result for lowering.
pub trait BlockAnalyzer {
    fn analyze_block(
        &self,
        block: &Block,
        scope: &mut Scope<'_>,
        ctx: &AnalysisContext,
        tries: &TryAnalyzer<'_>,
    ) -> Result<CompletionSummary>;
}

/// Analyzes one catch clause, including binding its exception variable in
/// `scope`.
pub trait CatchAnalyzer {
    fn analyze_catch(
        &self,
        clause: &CatchClause,
        scope: &mut Scope<'_>,
        ctx: &AnalysisContext,
        tries: &TryAnalyzer<'_>,
    ) -> Result<CompletionSummary>;
}

/// Lowers a block; nested try statements are lowered with
/// [`TryLowerer::lower_nested`] from the summaries recorded during analysis.
pub trait BlockLowerer {
    fn lower_block(&self, block: &Block, tries: &TryLowerer<'_>) -> Result<BlockNode>;
}

pub trait CatchLowerer {
    fn lower_catch(&self, clause: &CatchClause, tries: &TryLowerer<'_>) -> Result<CatchNode>;
}

/// Analyze then lower one try statement.
///
/// Every try statement in the tree, nested ones included, is analyzed once;
/// lowering reuses those results. Enforces `config.max_statements` between
/// the two phases, and nothing is lowered for a statement that fails
/// analysis or exceeds the budget.
pub fn analyze_and_lower<F>(
    try_stmt: &TryStmt,
    scope: &Scope<'_>,
    ctx: &AnalysisContext,
    frontend: &F,
    config: &Config,
) -> Result<(CompletionSummary, TryNode)>
where
    F: BlockAnalyzer + CatchAnalyzer + BlockLowerer + CatchLowerer,
{
    let analyses = Analyses::new();
    let analyzed =
        TryAnalyzer::new(frontend, frontend, config, &analyses).analyze(try_stmt, scope, ctx)?;
    let summary = analyzed.summary();

    if let Some(budget) = config.max_statements {
        let count = summary.statement_count;
        if count > budget {
            return Err(Error::semantic(
                &try_stmt.location,
                format!("statement budget exceeded: {count} > {budget}"),
            ));
        }
    }

    let node = TryLowerer::new(frontend, frontend, &analyses).lower(&analyzed)?;
    Ok((summary, node))
}
