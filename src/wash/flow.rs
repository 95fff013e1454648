//! Flow phase for try statements - completion analysis
//!
//! Works out how control can leave a try statement from the summaries of its
//! body and handlers. The body and each handler are alternative paths: a
//! handler only runs when the body throws into it. Guarantees (`*_escape`)
//! must therefore hold on every path, while possibilities (`any_continue`,
//! `any_break`) need only one.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::ast::{Block, NodeId, TryStmt};
use crate::common::config::Config;
use crate::common::error::{Error, Result};
use crate::wash::completion::CompletionSummary;
use crate::wash::context::AnalysisContext;
use crate::wash::scope::Scope;
use crate::wash::{BlockAnalyzer, CatchAnalyzer};

/// A try statement that passed analysis, with its summary attached.
///
/// Only obtainable from [`TryAnalyzer::analyze`] or from the [`Analyses`]
/// record it writes, which makes it the proof lowering needs that the body
/// is present.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedTry<'t> {
    stmt: &'t TryStmt,
    body: &'t Block,
    summary: CompletionSummary,
}

impl<'t> AnalyzedTry<'t> {
    pub fn stmt(&self) -> &'t TryStmt {
        self.stmt
    }

    pub fn body(&self) -> &'t Block {
        self.body
    }

    pub fn summary(&self) -> CompletionSummary {
        self.summary
    }
}

/// Summaries of every try statement analyzed in one compilation, by node id.
///
/// Lowering reads nested statements back from here instead of analyzing
/// them a second time.
#[derive(Debug, Default)]
pub struct Analyses {
    summaries: RefCell<HashMap<NodeId, CompletionSummary>>,
}

impl Analyses {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, id: NodeId, summary: CompletionSummary) {
        if self.summaries.borrow_mut().insert(id, summary).is_some() {
            tracing::warn!(?id, "try statement analyzed more than once");
        }
    }

    pub fn summary(&self, id: NodeId) -> Option<CompletionSummary> {
        self.summaries.borrow().get(&id).copied()
    }

    /// The analyzed view of `try_stmt`, if analysis recorded it.
    pub fn analyzed<'t>(&self, try_stmt: &'t TryStmt) -> Option<AnalyzedTry<'t>> {
        let summary = self.summary(try_stmt.id)?;
        let body = try_stmt.body.as_ref()?;
        Some(AnalyzedTry {
            stmt: try_stmt,
            body,
            summary,
        })
    }

    pub fn len(&self) -> usize {
        self.summaries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Completion analysis for try statements.
pub struct TryAnalyzer<'a> {
    blocks: &'a dyn BlockAnalyzer,
    catches: &'a dyn CatchAnalyzer,
    config: &'a Config,
    analyses: &'a Analyses,
}

impl<'a> TryAnalyzer<'a> {
    pub fn new(
        blocks: &'a dyn BlockAnalyzer,
        catches: &'a dyn CatchAnalyzer,
        config: &'a Config,
        analyses: &'a Analyses,
    ) -> Self {
        Self {
            blocks,
            catches,
            config,
            analyses,
        }
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// Analyze `try_stmt` under the caller's scope and context.
    ///
    /// The body and every handler get their own child of `scope`, closed
    /// before the next one opens. Handlers are visited in declaration order.
    /// A missing body is rejected before either collaborator runs; their own
    /// errors are returned as-is. On success the summary is recorded in the
    /// shared [`Analyses`].
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(location = %try_stmt.location, catches = try_stmt.catches.len())
    )]
    pub fn analyze<'t>(
        &self,
        try_stmt: &'t TryStmt,
        scope: &Scope<'_>,
        ctx: &AnalysisContext,
    ) -> Result<AnalyzedTry<'t>> {
        let body = try_stmt
            .body
            .as_ref()
            .ok_or_else(|| Error::malformed(&try_stmt.location, "missing try body"))?;

        let body_summary = {
            let mut body_scope = scope.new_local_scope();
            self.blocks
                .analyze_block(body, &mut body_scope, &ctx.nested(), self)?
        };

        let mut result = body_summary;
        let mut catch_charge = 0usize;

        for clause in &try_stmt.catches {
            let mut catch_scope = scope.new_local_scope();
            let catch_summary =
                self.catches
                    .analyze_catch(clause, &mut catch_scope, &ctx.nested(), self)?;

            tracing::trace!(
                exception_type = %clause.exception_type,
                ?catch_summary,
                "catch analyzed"
            );

            result = result.combine(catch_summary);
            catch_charge = self
                .config
                .catch_cost
                .accumulate(catch_charge, catch_summary.statement_count);
        }

        let total = body_summary.statement_count.saturating_add(catch_charge);
        let summary = result.with_statement_count(total);

        tracing::debug!(?summary, "try analyzed");
        self.analyses.record(try_stmt.id, summary);

        Ok(AnalyzedTry {
            stmt: try_stmt,
            body,
            summary,
        })
    }
}
