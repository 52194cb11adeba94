use std::collections::BTreeSet;

use proptest::prelude::*;
use tradeoff_analysis::reshape::{to_long_form, to_summary};
use tradeoff_core::types::{PerformanceMetricTable, ScenarioCollection};

const MP_POOL: [&str; 5] = ["A", "B", "NF_ref", "FMSY", "MP_ref_1"];
const METRIC_POOL: [&str; 3] = ["P_LRP", "P_USR", "AAV"];

/// (scenarios, mps, metrics, flat values) with every value present.
fn shape_and_values() -> impl Strategy<Value = (usize, usize, usize, Vec<f64>)> {
    (1usize..5, 1usize..=MP_POOL.len(), 1usize..=METRIC_POOL.len()).prop_flat_map(
        |(scenarios, mps, metrics)| {
            let n = scenarios * mps * metrics;
            (
                Just(scenarios),
                Just(mps),
                Just(metrics),
                prop::collection::vec(-1.0f64..2.0, n),
            )
        },
    )
}

fn build(scenarios: usize, mps: usize, metrics: usize, values: &[f64]) -> ScenarioCollection {
    let mut chunks = values.chunks(metrics);
    (0..scenarios)
        .map(|s| {
            let rows: Vec<(&str, Vec<f64>)> = MP_POOL[..mps]
                .iter()
                .map(|mp| (*mp, chunks.next().unwrap().to_vec()))
                .collect();
            let table =
                PerformanceMetricTable::from_metric_rows(&METRIC_POOL[..metrics], rows).unwrap();
            (format!("scenario_{s}"), table)
        })
        .collect()
}

proptest! {
    #[test]
    fn long_form_is_deterministic((s, m, k, values) in shape_and_values()) {
        let c = build(s, m, k, &values);
        prop_assert_eq!(to_long_form(&c, None).unwrap(), to_long_form(&c, None).unwrap());
    }

    #[test]
    fn long_form_count_matches_table_sizes((s, m, k, values) in shape_and_values()) {
        let c = build(s, m, k, &values);
        let records = to_long_form(&c, None).unwrap();
        prop_assert_eq!(records.len(), s * m * k);
    }

    #[test]
    fn allow_list_drops_only_excluded(
        (s, m, k, values) in shape_and_values(),
        keep_mask in prop::collection::vec(any::<bool>(), MP_POOL.len()),
    ) {
        let c = build(s, m, k, &values);
        let allow: BTreeSet<String> = MP_POOL
            .iter()
            .zip(&keep_mask)
            .filter(|(_, keep)| **keep)
            .map(|(mp, _)| mp.to_string())
            .collect();
        let all = to_long_form(&c, None).unwrap();
        let filtered = to_long_form(&c, Some(&allow)).unwrap();
        let expected: Vec<_> = all.into_iter().filter(|r| allow.contains(&r.mp)).collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn summary_bounds_are_ordered((s, m, k, values) in shape_and_values()) {
        let c = build(s, m, k, &values);
        let summary = to_summary(&to_long_form(&c, None).unwrap()).unwrap();
        prop_assert_eq!(summary.len(), m * k);
        for rec in &summary {
            prop_assert_eq!(rec.observations, s);
            prop_assert!(rec.min <= rec.mean + 1e-9);
            prop_assert!(rec.mean <= rec.max + 1e-9);
            match (rec.trimmed_min, rec.trimmed_max) {
                (Some(lo), Some(hi)) => {
                    prop_assert!(s >= 2);
                    prop_assert!(rec.min <= lo && lo <= rec.max);
                    prop_assert!(rec.min <= hi && hi <= rec.max);
                }
                (None, None) => prop_assert_eq!(s, 1),
                other => prop_assert!(false, "trimmed bounds disagree: {:?}", other),
            }
        }
    }
}
