//! Reporting cycle
//!
//! A producer hands over a freshly built tree; the reporter merges the
//! operator's overrides, rolls levels up and stamps the result.

use crate::config::StatusConfig;
use crate::error::StatusResult;
use crate::overrides::OverrideLoader;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use statetree_core::{Band, FlatState, State};
use tracing::info;

/// Snapshot of one reporting cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateReport {
    pub module: String,
    pub generated_at: DateTime<Utc>,
    /// Aggregated root level.
    pub level: i64,
    pub band: Band,
    pub state: State,
}

impl StateReport {
    pub fn new(module: impl Into<String>, state: State) -> Self {
        Self {
            module: module.into(),
            generated_at: Utc::now(),
            level: state.level,
            band: state.band(),
            state,
        }
    }

    pub fn flatten(&self) -> Vec<FlatState> {
        self.state.flatten()
    }
}

pub struct Reporter {
    config: StatusConfig,
    overrides: OverrideLoader,
}

impl Reporter {
    pub fn new(config: StatusConfig) -> Self {
        let overrides = OverrideLoader::from_config(&config);
        Self { config, overrides }
    }

    pub fn with_overrides(mut self, overrides: OverrideLoader) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn config(&self) -> &StatusConfig {
        &self.config
    }

    /// Runs one cycle. An unusable override document is skipped with a warning.
    pub fn report(&self, state: State) -> StateReport {
        let overrides = self.overrides.load_lenient();
        self.finish(state, overrides.as_ref())
    }

    /// Runs one cycle, failing if an override document exists but cannot be used.
    pub fn report_strict(&self, state: State) -> StatusResult<StateReport> {
        let overrides = self.overrides.load()?;
        Ok(self.finish(state, overrides.as_ref()))
    }

    fn finish(&self, mut state: State, overrides: Option<&State>) -> StateReport {
        state.apply(overrides).aggregate_levels();
        let report = StateReport::new(&self.config.module, state);
        info!(
            module = %report.module,
            level = report.level,
            band = %report.band,
            overridden = overrides.is_some(),
            "state reported"
        );
        report
    }
}
