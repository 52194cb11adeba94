//! Reshape pipeline orchestrator.
//!
//! Runs flatten → summarize → style for one scenario collection, driven by
//! `TradeoffConfig`, and exposes the panel builders with the configured range
//! and label locale.

use std::fmt;
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

use tradeoff_core::config::{ConfigOverrides, TradeoffConfig};
use tradeoff_core::errors::TradeoffErrorCode;
use tradeoff_core::types::collections::{BTreeMap, BTreeSet};
use tradeoff_core::types::{LongFormRecord, RangeKind, ScenarioCollection, Style, SummaryRecord};
use tradeoff_core::{ConfigError, ReshapeError, TradeoffError};

use super::labels::ValueFormatter;
use super::long_form::{retained_mp_ids, to_long_form_with};
use super::panels::{self, DotRangeRecord, FacetPoint, TradeoffPoint};
use super::reference::ReferenceClassifier;
use super::styles::StyleAssigner;
use super::summary::to_summary;

/// Configured reshaper.
#[derive(Debug, Clone)]
pub struct ReshapePipeline {
    classifier: ReferenceClassifier,
    styles: StyleAssigner,
    formatter: ValueFormatter,
    summary_range: RangeKind,
}

impl ReshapePipeline {
    /// Validate `config` and create a pipeline from it.
    pub fn new(config: &TradeoffConfig) -> Result<Self, ConfigError> {
        TradeoffConfig::validate(config)?;
        Ok(Self::from_validated(config))
    }

    /// Create a pipeline with compiled defaults.
    pub fn with_defaults() -> Self {
        Self::from_validated(&TradeoffConfig::default())
    }

    /// Resolve configuration rooted at `root`, then build the pipeline.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, TradeoffError> {
        let config = TradeoffConfig::load(root, overrides)?;
        Ok(Self::from_validated(&config))
    }

    fn from_validated(config: &TradeoffConfig) -> Self {
        let classifier = ReferenceClassifier::new(config.reshape.effective_reference_marker());
        Self {
            styles: StyleAssigner::from_config(&config.style, classifier.clone()),
            formatter: ValueFormatter::from_config(&config.locale),
            summary_range: config.reshape.effective_summary_range(),
            classifier,
        }
    }

    pub fn classifier(&self) -> &ReferenceClassifier {
        &self.classifier
    }

    pub fn formatter(&self) -> &ValueFormatter {
        &self.formatter
    }

    pub fn summary_range(&self) -> RangeKind {
        self.summary_range
    }

    /// Reshape one scenario collection.
    pub fn run(
        &self,
        collection: &ScenarioCollection,
        selected_mps: Option<&BTreeSet<String>>,
    ) -> Result<ReshapeResult, ReshapeError> {
        let span = tracing::info_span!("reshape", scenarios = collection.len());
        let _enter = span.enter();

        let outcome = self.run_inner(collection, selected_mps);
        match &outcome {
            Ok(result) => tracing::info!(diagnostics = %result.diagnostics, "reshape complete"),
            Err(e) => tracing::warn!(code = e.error_code(), error = %e, "reshape failed"),
        }
        outcome
    }

    /// Reshape independent collections in parallel.
    ///
    /// Results keep input order. If several collections fail, the error of
    /// the earliest one is returned.
    pub fn run_many(
        &self,
        collections: &[ScenarioCollection],
        selected_mps: Option<&BTreeSet<String>>,
    ) -> Result<Vec<ReshapeResult>, ReshapeError> {
        let outcomes: Vec<Result<ReshapeResult, ReshapeError>> = collections
            .par_iter()
            .map(|c| self.run(c, selected_mps))
            .collect();
        outcomes.into_iter().collect()
    }

    /// Single-panel trade-off points using the configured range.
    pub fn tradeoff_panel(
        &self,
        result: &ReshapeResult,
        x_metric: &str,
        y_metric: &str,
    ) -> Result<Vec<TradeoffPoint>, ReshapeError> {
        panels::tradeoff_points(&result.summary, x_metric, y_metric, self.summary_range)
    }

    /// Per-scenario trade-off points for faceted panels.
    pub fn facet_panel(
        &self,
        result: &ReshapeResult,
        x_metric: &str,
        y_metric: &str,
    ) -> Result<Vec<FacetPoint>, ReshapeError> {
        panels::facet_points(&result.long_form, x_metric, y_metric)
    }

    /// Dot/range rows using the configured range and label locale.
    pub fn dot_range_panel(
        &self,
        result: &ReshapeResult,
        metrics: Option<&[String]>,
    ) -> Result<Vec<DotRangeRecord>, ReshapeError> {
        panels::dot_ranges(&result.summary, metrics, self.summary_range, &self.formatter)
    }

    fn run_inner(
        &self,
        collection: &ScenarioCollection,
        selected_mps: Option<&BTreeSet<String>>,
    ) -> Result<ReshapeResult, ReshapeError> {
        let long_form = to_long_form_with(collection, selected_mps, &self.classifier)?;
        let summary = to_summary(&long_form)?;

        // MPs from tables without metric columns have no long-form records
        // but still get a style.
        let mp_ids = retained_mp_ids(collection, selected_mps)?;
        let reference_flags: BTreeMap<String, bool> = mp_ids
            .iter()
            .map(|mp| (mp.clone(), self.classifier.is_reference(mp)))
            .collect();
        let styles = self.styles.assign(&mp_ids, &reference_flags);

        let diagnostics = ReshapeDiagnostics {
            scenario_count: collection.len(),
            record_count: long_form.len(),
            missing_value_count: long_form.iter().filter(|r| r.value.is_none()).count(),
            group_count: summary.len(),
            mp_count: mp_ids.len(),
            reference_mp_count: reference_flags.values().filter(|r| **r).count(),
        };

        Ok(ReshapeResult {
            long_form,
            summary,
            styles,
            diagnostics,
        })
    }
}

impl Default for ReshapePipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Everything a rendering collaborator needs for one collection.
#[derive(Debug, Clone, Serialize)]
pub struct ReshapeResult {
    pub long_form: Vec<LongFormRecord>,
    pub summary: Vec<SummaryRecord>,
    /// One entry per retained MP.
    pub styles: BTreeMap<String, Style>,
    pub diagnostics: ReshapeDiagnostics,
}

impl ReshapeResult {
    /// JSON hand-off for the rendering side.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Counters describing one reshape run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReshapeDiagnostics {
    pub scenario_count: usize,
    pub record_count: usize,
    /// Records whose value was missing or non-numeric.
    pub missing_value_count: usize,
    pub group_count: usize,
    pub mp_count: usize,
    pub reference_mp_count: usize,
}

impl fmt::Display for ReshapeDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReshapeDiagnostics {{ scenarios={}, records={}, missing={}, groups={}, mps={}, reference_mps={} }}",
            self.scenario_count,
            self.record_count,
            self.missing_value_count,
            self.group_count,
            self.mp_count,
            self.reference_mp_count,
        )
    }
}
