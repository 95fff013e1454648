//! Ambient analysis context threaded down through statement analysis

/// Handle to a loop statement, used to attribute `break`/`continue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopId(pub u32);

/// Context a statement is analyzed under.
///
/// Owned by whoever walks the statement list; nested constructs receive a
/// copy and never hand a modified one back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisContext {
    /// The statement sits lexically inside a loop body.
    pub in_loop: bool,
    /// Nearest enclosing loop, if any.
    pub last_loop: Option<LoopId>,
    /// The statement is in tail position of the script; used by later passes.
    pub last_source: bool,
}

impl AnalysisContext {
    /// Context for the top level of a script body.
    pub fn top_level() -> Self {
        Self {
            in_loop: false,
            last_loop: None,
            last_source: true,
        }
    }

    /// Context for statements inside the body of `loop_id`.
    pub fn in_loop(loop_id: LoopId) -> Self {
        Self {
            in_loop: true,
            last_loop: Some(loop_id),
            last_source: false,
        }
    }

    /// Copy handed to a nested block: same loop attribution and tail flag.
    pub fn nested(&self) -> Self {
        self.clone()
    }
}
