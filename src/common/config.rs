//! Front-end configuration
//!
//! Settings can be built in code or read from the environment:
//!
//! - `SBXC_CATCH_COST`: `max` (default) or `sum`
//! - `SBXC_MAX_STATEMENTS`: statement budget per construct, unset for none

use std::str::FromStr;

use crate::common::error::{Error, Result};

pub const CATCH_COST_ENV: &str = "SBXC_CATCH_COST";
pub const MAX_STATEMENTS_ENV: &str = "SBXC_MAX_STATEMENTS";

/// How the statement counts of a try's catch clauses are charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatchCostPolicy {
    /// Only one handler runs per throw, so charge the most expensive one.
    #[default]
    Max,
    /// Charge every handler.
    Sum,
}

impl CatchCostPolicy {
    /// Fold one more catch count into the running charge.
    pub fn accumulate(self, charged: usize, catch_count: usize) -> usize {
        match self {
            CatchCostPolicy::Max => charged.max(catch_count),
            CatchCostPolicy::Sum => charged.saturating_add(catch_count),
        }
    }
}

impl FromStr for CatchCostPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" => Ok(CatchCostPolicy::Max),
            "sum" => Ok(CatchCostPolicy::Sum),
            other => Err(Error::config(format!(
                "unknown catch cost policy '{other}', expected 'max' or 'sum'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub catch_cost: CatchCostPolicy,
    /// Largest statement count a single analyzed construct may report.
    pub max_statements: Option<usize>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catch_cost(mut self, catch_cost: CatchCostPolicy) -> Self {
        self.catch_cost = catch_cost;
        self
    }

    pub fn with_max_statements(mut self, max_statements: usize) -> Self {
        self.max_statements = Some(max_statements);
        self
    }

    /// Build a config from `SBXC_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(CATCH_COST_ENV) {
            config.catch_cost = raw.parse()?;
        }

        if let Some(raw) = lookup(MAX_STATEMENTS_ENV) {
            let budget = raw.trim().parse::<usize>().map_err(|e| {
                Error::config(format!("{MAX_STATEMENTS_ENV}='{raw}' is not a statement count: {e}"))
            })?;
            config.max_statements = Some(budget);
        }

        tracing::debug!(?config, "loaded front-end config");
        Ok(config)
    }
}
