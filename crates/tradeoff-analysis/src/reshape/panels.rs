//! Plot-input panels built from long-form and summary records.
//!
//! - trade-off points: one metric against another, one point per MP
//! - facet points: the same pairing per scenario, for faceted views
//! - dot ranges: point and whisker per (MP, metric)

use serde::{Deserialize, Serialize};

use tradeoff_core::types::collections::{FxHashMap, FxHashSet};
use tradeoff_core::types::{LongFormRecord, RangeKind, SummaryRecord};
use tradeoff_core::ReshapeError;

use super::labels::ValueFormatter;

/// One MP on a single-panel trade-off scatterplot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeoffPoint {
    pub mp: String,
    pub x: f64,
    pub y: f64,
    pub x_lower: Option<f64>,
    pub x_upper: Option<f64>,
    pub y_lower: Option<f64>,
    pub y_upper: Option<f64>,
    pub is_reference: bool,
}

/// One (scenario, MP) point on a faceted trade-off panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetPoint {
    pub scenario: String,
    pub mp: String,
    pub x: f64,
    pub y: f64,
    pub is_reference: bool,
}

/// One (MP, metric) row of a dot/range plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotRangeRecord {
    pub mp: String,
    pub metric: String,
    pub point: f64,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub label: String,
    pub is_reference: bool,
}

/// Lower/upper bounds of `summary` for the requested range kind.
pub fn range_bounds(summary: &SummaryRecord, range: RangeKind) -> (Option<f64>, Option<f64>) {
    match range {
        RangeKind::Full => (Some(summary.min), Some(summary.max)),
        RangeKind::Trimmed => (summary.trimmed_min, summary.trimmed_max),
    }
}

/// Pair `x_metric` against `y_metric` for every MP that reports both.
///
/// Points follow the first appearance of each MP in `summary`. An MP that
/// lacks one of the two metrics is skipped.
pub fn tradeoff_points(
    summary: &[SummaryRecord],
    x_metric: &str,
    y_metric: &str,
    range: RangeKind,
) -> Result<Vec<TradeoffPoint>, ReshapeError> {
    let known: FxHashSet<&str> = summary.iter().map(|s| s.metric.as_str()).collect();
    require_metric(&known, x_metric)?;
    require_metric(&known, y_metric)?;

    let index: FxHashMap<(&str, &str), &SummaryRecord> = summary
        .iter()
        .map(|s| ((s.mp.as_str(), s.metric.as_str()), s))
        .collect();

    let mut points = Vec::new();
    for mp in mp_order(summary) {
        let (Some(xs), Some(ys)) = (index.get(&(mp, x_metric)), index.get(&(mp, y_metric))) else {
            tracing::debug!(mp, x_metric, y_metric, "MP lacks one trade-off metric, skipped");
            continue;
        };
        let (x_lower, x_upper) = range_bounds(xs, range);
        let (y_lower, y_upper) = range_bounds(ys, range);
        points.push(TradeoffPoint {
            mp: mp.to_string(),
            x: xs.mean,
            y: ys.mean,
            x_lower,
            x_upper,
            y_lower,
            y_upper,
            is_reference: xs.is_reference,
        });
    }
    Ok(points)
}

/// Pair `x_metric` against `y_metric` per (scenario, MP), in long-form order.
///
/// Pairs where either value is missing are skipped.
pub fn facet_points(
    long_form: &[LongFormRecord],
    x_metric: &str,
    y_metric: &str,
) -> Result<Vec<FacetPoint>, ReshapeError> {
    let known: FxHashSet<&str> = long_form.iter().map(|r| r.metric.as_str()).collect();
    require_metric(&known, x_metric)?;
    require_metric(&known, y_metric)?;

    let y_values: FxHashMap<(&str, &str), Option<f64>> = long_form
        .iter()
        .filter(|r| r.metric == y_metric)
        .map(|r| ((r.scenario.as_str(), r.mp.as_str()), r.value))
        .collect();

    let points = long_form
        .iter()
        .filter(|r| r.metric == x_metric)
        .filter_map(|r| {
            let x = r.value?;
            let y = (*y_values.get(&(r.scenario.as_str(), r.mp.as_str()))?)?;
            Some(FacetPoint {
                scenario: r.scenario.clone(),
                mp: r.mp.clone(),
                x,
                y,
                is_reference: r.is_reference,
            })
        })
        .collect();
    Ok(points)
}

/// Build dot/range rows grouped by metric, then MP.
///
/// `metrics` restricts and orders the metrics; without it every metric is
/// used in first-appearance order.
pub fn dot_ranges(
    summary: &[SummaryRecord],
    metrics: Option<&[String]>,
    range: RangeKind,
    formatter: &ValueFormatter,
) -> Result<Vec<DotRangeRecord>, ReshapeError> {
    let metric_order: Vec<&str> = match metrics {
        Some(requested) => {
            let known: FxHashSet<&str> = summary.iter().map(|s| s.metric.as_str()).collect();
            for m in requested {
                require_metric(&known, m)?;
            }
            requested.iter().map(String::as_str).collect()
        }
        None => first_appearance(summary.iter().map(|s| s.metric.as_str())),
    };

    let index: FxHashMap<(&str, &str), &SummaryRecord> = summary
        .iter()
        .map(|s| ((s.mp.as_str(), s.metric.as_str()), s))
        .collect();
    let mps = mp_order(summary);

    let mut rows = Vec::new();
    for metric in metric_order {
        for &mp in &mps {
            let Some(s) = index.get(&(mp, metric)) else {
                continue;
            };
            let (lower, upper) = range_bounds(s, range);
            rows.push(DotRangeRecord {
                mp: mp.to_string(),
                metric: metric.to_string(),
                point: s.mean,
                lower,
                upper,
                label: formatter.format_point_range(s.mean, lower, upper),
                is_reference: s.is_reference,
            });
        }
    }
    Ok(rows)
}

fn require_metric(known: &FxHashSet<&str>, metric: &str) -> Result<(), ReshapeError> {
    if known.contains(metric) {
        Ok(())
    } else {
        Err(ReshapeError::UnknownMetric {
            metric: metric.to_string(),
        })
    }
}

fn mp_order(summary: &[SummaryRecord]) -> Vec<&str> {
    first_appearance(summary.iter().map(|s| s.mp.as_str()))
}

fn first_appearance<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = FxHashSet::default();
    items.filter(|item| seen.insert(*item)).collect()
}
