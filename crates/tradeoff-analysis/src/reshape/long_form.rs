//! Long-form flattening: scenario collection → (MP, scenario, metric, value) rows.
//!
//! Emission order is scenario order, then row order, then metric column
//! order, so identical input always yields identical output. A metric that a
//! scenario's table lacks produces no record for that scenario (no padding),
//! which narrows later aggregates to the scenarios that do report it.

use tradeoff_core::constants::MP_COLUMN;
use tradeoff_core::types::collections::{BTreeSet, FxHashSet, SmallVec8};
use tradeoff_core::types::{LongFormRecord, PerformanceMetricTable, ScenarioCollection};
use tradeoff_core::ReshapeError;

use super::reference::ReferenceClassifier;

/// Flatten `collection` using the default `"ref"` reference marker.
///
/// `selected_mps`, when given, is an allow-list: rows for any other MP are
/// dropped before reshaping.
pub fn to_long_form(
    collection: &ScenarioCollection,
    selected_mps: Option<&BTreeSet<String>>,
) -> Result<Vec<LongFormRecord>, ReshapeError> {
    to_long_form_with(collection, selected_mps, &ReferenceClassifier::default())
}

/// Flatten `collection`, classifying reference MPs with `classifier`.
///
/// Every table is validated before the first record is built, so a schema
/// error anywhere in the collection yields no output at all.
pub fn to_long_form_with(
    collection: &ScenarioCollection,
    selected_mps: Option<&BTreeSet<String>>,
    classifier: &ReferenceClassifier,
) -> Result<Vec<LongFormRecord>, ReshapeError> {
    let mut validated = Vec::with_capacity(collection.len());
    for (scenario, table) in collection.iter() {
        let mp_ids = validate_table(scenario, table)?;
        validated.push((scenario, table, mp_ids));
    }

    let capacity: usize = validated
        .iter()
        .map(|(_, t, ids)| ids.len() * t.metric_columns().count())
        .sum();
    let mut records = Vec::with_capacity(capacity);

    for (scenario, table, mp_ids) in validated {
        let metrics: SmallVec8<(usize, &str)> = table.metric_columns().collect();
        let mut retained = 0usize;

        for (row, mp) in table.rows().iter().zip(mp_ids) {
            if let Some(allow) = selected_mps {
                if !allow.contains(mp) {
                    continue;
                }
            }
            retained += 1;
            let is_reference = classifier.is_reference(mp);

            for &(idx, metric) in &metrics {
                records.push(LongFormRecord {
                    mp: mp.to_string(),
                    scenario: scenario.to_string(),
                    metric: metric.to_string(),
                    value: row[idx].as_number(),
                    is_reference,
                });
            }
        }

        tracing::debug!(
            scenario,
            rows = retained,
            metrics = metrics.len(),
            "flattened scenario"
        );
    }

    Ok(records)
}

/// Every MP identifier `to_long_form` keeps, including MPs from tables that
/// have no metric columns and so produce no records.
pub fn retained_mp_ids(
    collection: &ScenarioCollection,
    selected_mps: Option<&BTreeSet<String>>,
) -> Result<BTreeSet<String>, ReshapeError> {
    let mut ids = BTreeSet::new();
    for (scenario, table) in collection.iter() {
        for mp in validate_table(scenario, table)? {
            if selected_mps.map_or(true, |allow| allow.contains(mp)) {
                ids.insert(mp.to_string());
            }
        }
    }
    Ok(ids)
}

/// Check the `MP` column and return each row's identifier.
fn validate_table<'a>(
    scenario: &str,
    table: &'a PerformanceMetricTable,
) -> Result<Vec<&'a str>, ReshapeError> {
    let label = || format!("scenario '{scenario}'");

    let mp_idx = table
        .column_index(MP_COLUMN)
        .ok_or_else(|| ReshapeError::schema(label(), format!("missing '{MP_COLUMN}' column")))?;

    let mut seen = FxHashSet::default();
    let mut ids = Vec::with_capacity(table.row_count());
    for (i, row) in table.rows().iter().enumerate() {
        let id = match row[mp_idx].as_text() {
            Some(s) if !s.trim().is_empty() => s,
            _ => {
                return Err(ReshapeError::schema(
                    label(),
                    format!("row {i}: '{MP_COLUMN}' must be non-blank text"),
                ))
            }
        };
        if !seen.insert(id) {
            return Err(ReshapeError::schema(label(), format!("duplicate MP '{id}'")));
        }
        ids.push(id);
    }
    Ok(ids)
}
