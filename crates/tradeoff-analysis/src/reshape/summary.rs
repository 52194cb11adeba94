//! Per (MP, metric) aggregation across scenarios.
//!
//! Missing values are discarded before anything is computed. `trimmed_min`
//! and `trimmed_max` drop exactly one extreme observation (one occurrence of
//! the minimum, resp. maximum) and re-take the extreme of what remains; ties
//! are resolved by value alone, so which scenario supplied the dropped value
//! does not matter.

use statrs::statistics::Statistics;

use tradeoff_core::types::collections::{FxHashMap, SmallVec8};
use tradeoff_core::types::{LongFormRecord, SummaryRecord};
use tradeoff_core::ReshapeError;

struct Group<'a> {
    mp: &'a str,
    metric: &'a str,
    is_reference: bool,
    values: SmallVec8<f64>,
}

/// Aggregate long-form records into one summary per (MP, metric).
///
/// Output order is the first appearance of each (MP, metric) pair in
/// `records`. Fails with `EmptyGroup` if any pair has no non-missing value;
/// nothing is returned in that case.
pub fn to_summary(records: &[LongFormRecord]) -> Result<Vec<SummaryRecord>, ReshapeError> {
    let mut index: FxHashMap<(&str, &str), usize> = FxHashMap::default();
    let mut groups: Vec<Group<'_>> = Vec::new();

    for record in records {
        let key = (record.mp.as_str(), record.metric.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                mp: key.0,
                metric: key.1,
                is_reference: record.is_reference,
                values: SmallVec8::new(),
            });
            groups.len() - 1
        });
        if let Some(v) = record.value.filter(|v| !v.is_nan()) {
            groups[slot].values.push(v);
        }
    }

    let summary = groups
        .iter()
        .map(summarize_group)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        records = records.len(),
        groups = summary.len(),
        "summarized long-form records"
    );
    Ok(summary)
}

fn summarize_group(group: &Group<'_>) -> Result<SummaryRecord, ReshapeError> {
    if group.values.is_empty() {
        return Err(ReshapeError::EmptyGroup {
            mp: group.mp.to_string(),
            metric: group.metric.to_string(),
        });
    }

    let values = group.values.as_slice();
    Ok(SummaryRecord {
        mp: group.mp.to_string(),
        metric: group.metric.to_string(),
        mean: Statistics::mean(values.iter()),
        min: Statistics::min(values.iter()),
        max: Statistics::max(values.iter()),
        trimmed_min: trimmed_min(values),
        trimmed_max: trimmed_max(values),
        is_reference: group.is_reference,
        observations: values.len(),
    })
}

/// Minimum after dropping one occurrence of the minimum. `None` for fewer
/// than two non-NaN values.
pub fn trimmed_min(values: &[f64]) -> Option<f64> {
    let sorted = sorted_non_nan(values);
    (sorted.len() >= 2).then(|| sorted[1])
}

/// Maximum after dropping one occurrence of the maximum. `None` for fewer
/// than two non-NaN values.
pub fn trimmed_max(values: &[f64]) -> Option<f64> {
    let sorted = sorted_non_nan(values);
    (sorted.len() >= 2).then(|| sorted[sorted.len() - 2])
}

fn sorted_non_nan(values: &[f64]) -> SmallVec8<f64> {
    let mut sorted: SmallVec8<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}
