//! Completion summaries - how control can leave a statement

/// Control-flow completion facts about one analyzed statement.
///
/// The three `*_escape` flags are guarantees over *every* path through the
/// statement; `any_continue` and `any_break` are possibilities over *some*
/// reachable path. `statement_count` feeds the sandbox's compile-time
/// complexity limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CompletionSummary {
    /// Every path returns from the enclosing function.
    pub method_escape: bool,
    /// Every path leaves the nearest enclosing loop (break, return or throw).
    pub loop_escape: bool,
    /// No path falls through to the next statement.
    pub all_escape: bool,
    /// Some path continues the nearest enclosing loop.
    pub any_continue: bool,
    /// Some path breaks out of the nearest enclosing loop.
    pub any_break: bool,
    pub statement_count: usize,
}

impl CompletionSummary {
    /// Summary of a statement that always falls through.
    pub fn fall_through(statement_count: usize) -> Self {
        Self {
            statement_count,
            ..Self::default()
        }
    }

    /// Merge two alternative branches.
    ///
    /// Guarantees hold only if both branches guarantee them; possibilities
    /// hold if either branch has them. The statement count of `self` is kept
    /// as-is; callers decide how branch costs accumulate.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            method_escape: self.method_escape && other.method_escape,
            loop_escape: self.loop_escape && other.loop_escape,
            all_escape: self.all_escape && other.all_escape,
            any_continue: self.any_continue || other.any_continue,
            any_break: self.any_break || other.any_break,
            statement_count: self.statement_count,
        }
    }

    #[must_use]
    pub fn with_statement_count(self, statement_count: usize) -> Self {
        Self { statement_count, ..self }
    }
}
