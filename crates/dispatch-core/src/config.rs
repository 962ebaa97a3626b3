//! Run configuration.
//!
//! Command-line arguments are ignored; the only knob is the dispatch strategy,
//! read from `DISPATCH_STRATEGY`. Both strategies print the same report.
//! `DirectDispatch` is never selectable here.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::DispatchError;
use crate::impls::{DoubleDispatch, TableDispatch};
use crate::ports::DispatchStrategy;

pub const STRATEGY_ENV: &str = "DISPATCH_STRATEGY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    Double,
    Table,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Double => "double",
            StrategyKind::Table => "table",
        }
    }

    pub fn build(self) -> Box<dyn DispatchStrategy> {
        match self {
            StrategyKind::Double => Box::new(DoubleDispatch::new()),
            StrategyKind::Table => Box::new(TableDispatch::default()),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "double" => Ok(StrategyKind::Double),
            "table" => Ok(StrategyKind::Table),
            _ => Err(DispatchError::UnknownStrategy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    pub strategy: StrategyKind,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve `STRATEGY_ENV` through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_value(lookup(STRATEGY_ENV).as_deref())
    }

    /// An unparseable value falls back to the default strategy.
    pub fn from_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };

        match raw.parse() {
            Ok(strategy) => Self { strategy },
            Err(err) => {
                warn!(error = %err, fallback = %StrategyKind::default(), "ignoring {STRATEGY_ENV}");
                Self::default()
            }
        }
    }
}
