// Common test utilities
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use sbxc::ast::{Block, CatchClause, ExternalStmt, Location, NodeId, Stmt, TryStmt};
use sbxc::ir::{BlockNode, CatchNode, ExternalNode, StatementNode};
use sbxc::wash::{
    Analyses, AnalysisContext, BlockAnalyzer, BlockLowerer, CatchAnalyzer, CatchLowerer,
    CompletionSummary, Scope, TryAnalyzer, TryLowerer,
};
use sbxc::{Config, Error, Result};

pub fn loc(line: usize, column: usize) -> Location {
    Location::new("test.sbx", line, column, line * 100 + column)
}

/// External statement; `kind` drives how [`ScriptedFrontend`] treats it:
///
/// - `declare:<name>` declares `<name>` in the current scope
/// - `fail` makes analysis return a semantic error
/// - anything else looks up `id` in the outcome table
pub fn stmt(id: u32, kind: &str) -> Stmt {
    Stmt::External(ExternalStmt {
        id: NodeId(id),
        kind: kind.to_string(),
        location: loc(id as usize, 1),
    })
}

pub fn block(statements: Vec<Stmt>) -> Block {
    Block::new(loc(1, 1), statements)
}

pub fn catch(exception_type: &str, name: &str, statements: Vec<Stmt>) -> CatchClause {
    CatchClause::new(loc(2, 1), exception_type, name, Some(block(statements)))
}

static NEXT_TRY_ID: AtomicU32 = AtomicU32::new(1000);

/// Fresh id for a try statement, clear of the ids tests give to statements.
pub fn try_id() -> NodeId {
    NodeId(NEXT_TRY_ID.fetch_add(1, Ordering::Relaxed))
}

pub fn try_stmt(body: Vec<Stmt>, catches: Vec<CatchClause>) -> TryStmt {
    TryStmt::new(try_id(), loc(1, 1), Some(block(body)), catches)
}

pub fn summary(method_escape: bool, loop_escape: bool, all_escape: bool) -> CompletionSummary {
    CompletionSummary {
        method_escape,
        loop_escape,
        all_escape,
        any_continue: false,
        any_break: false,
        statement_count: 1,
    }
}

pub fn returns() -> CompletionSummary {
    summary(true, true, true)
}

pub fn continues() -> CompletionSummary {
    CompletionSummary {
        loop_escape: true,
        all_escape: true,
        any_continue: true,
        ..CompletionSummary::fall_through(1)
    }
}

pub fn breaks() -> CompletionSummary {
    CompletionSummary {
        loop_escape: true,
        all_escape: true,
        any_break: true,
        ..CompletionSummary::fall_through(1)
    }
}

/// Front-end stand-in that analyzes blocks statement by statement.
///
/// External statements take their summary from `outcomes` (default: fall
/// through, one statement). Nested try statements go back through the
/// [`TryAnalyzer`] and [`TryLowerer`] handed to each call, so nesting
/// exercises the real propagation code.
#[derive(Default)]
pub struct ScriptedFrontend {
    pub outcomes: HashMap<NodeId, CompletionSummary>,
    pub config: Config,
    pub contexts: RefCell<Vec<AnalysisContext>>,
    pub visited: RefCell<Vec<String>>,
}

impl ScriptedFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(mut self, id: u32, outcome: CompletionSummary) -> Self {
        self.outcomes.insert(NodeId(id), outcome);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn analyze(&self, try_stmt: &TryStmt, ctx: &AnalysisContext) -> Result<CompletionSummary> {
        let root = Scope::root();
        let analyses = Analyses::new();
        TryAnalyzer::new(self, self, &self.config, &analyses)
            .analyze(try_stmt, &root, ctx)
            .map(|analyzed| analyzed.summary())
    }

    fn analyze_stmt(
        &self,
        stmt: &Stmt,
        scope: &mut Scope<'_>,
        ctx: &AnalysisContext,
        tries: &TryAnalyzer<'_>,
    ) -> Result<CompletionSummary> {
        match stmt {
            Stmt::Try(nested) => tries
                .analyze(nested, scope, ctx)
                .map(|analyzed| analyzed.summary()),
            Stmt::External(external) => {
                self.visited.borrow_mut().push(format!("stmt {}", external.id.0));
                if let Some(name) = external.kind.strip_prefix("declare:") {
                    scope.define_variable(&external.location, name, "def", false)?;
                    Ok(CompletionSummary::fall_through(1))
                } else if external.kind == "fail" {
                    Err(Error::semantic(&external.location, "cannot analyze statement"))
                } else {
                    Ok(self
                        .outcomes
                        .get(&external.id)
                        .copied()
                        .unwrap_or_else(|| CompletionSummary::fall_through(1)))
                }
            }
        }
    }
}

impl BlockAnalyzer for ScriptedFrontend {
    fn analyze_block(
        &self,
        block: &Block,
        scope: &mut Scope<'_>,
        ctx: &AnalysisContext,
        tries: &TryAnalyzer<'_>,
    ) -> Result<CompletionSummary> {
        self.contexts.borrow_mut().push(ctx.clone());

        let mut result = CompletionSummary::default();
        for stmt in &block.statements {
            if result.all_escape {
                return Err(Error::semantic(stmt.location(), "unreachable statement"));
            }
            let out = self.analyze_stmt(stmt, scope, ctx, tries)?;
            result = CompletionSummary {
                method_escape: out.method_escape,
                loop_escape: out.loop_escape,
                all_escape: out.all_escape,
                any_continue: result.any_continue || out.any_continue,
                any_break: result.any_break || out.any_break,
                statement_count: result.statement_count + out.statement_count,
            };
        }
        Ok(result)
    }
}

impl CatchAnalyzer for ScriptedFrontend {
    fn analyze_catch(
        &self,
        clause: &CatchClause,
        scope: &mut Scope<'_>,
        ctx: &AnalysisContext,
        tries: &TryAnalyzer<'_>,
    ) -> Result<CompletionSummary> {
        self.visited.borrow_mut().push(format!("catch {}", clause.exception_type));
        scope.define_variable(&clause.location, &clause.name, &clause.exception_type, false)?;
        match &clause.block {
            Some(block) => self.analyze_block(block, scope, ctx, tries),
            None => Ok(CompletionSummary::default()),
        }
    }
}

impl BlockLowerer for ScriptedFrontend {
    fn lower_block(&self, block: &Block, tries: &TryLowerer<'_>) -> Result<BlockNode> {
        let statements = block
            .statements
            .iter()
            .map(|stmt| match stmt {
                Stmt::Try(nested) => Ok(StatementNode::Try(Box::new(tries.lower_nested(nested)?))),
                Stmt::External(external) => Ok(StatementNode::External(ExternalNode {
                    id: external.id,
                    location: external.location.clone(),
                })),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(BlockNode {
            statements,
            location: block.location.clone(),
        })
    }
}

impl CatchLowerer for ScriptedFrontend {
    fn lower_catch(&self, clause: &CatchClause, tries: &TryLowerer<'_>) -> Result<CatchNode> {
        let block = match &clause.block {
            Some(block) => Some(self.lower_block(block, tries)?),
            None => None,
        };
        Ok(CatchNode {
            exception_type: clause.exception_type.clone(),
            symbol: clause.name.clone(),
            block,
            location: clause.location.clone(),
        })
    }
}
