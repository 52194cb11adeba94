//! End-to-end reshaping tests: long form → summary → styles → panels.

use std::collections::{BTreeMap, BTreeSet};

use tradeoff_analysis::reshape::{
    assign_styles, classify_reference, to_long_form, to_summary, ReshapePipeline,
};
use tradeoff_core::config::{ConfigOverrides, TradeoffConfig};
use tradeoff_core::errors::TradeoffErrorCode;
use tradeoff_core::types::{
    CellValue, Language, MarkerShape, PerformanceMetricTable, RangeKind, ScenarioCollection,
};
use tradeoff_core::ReshapeError;

const METRICS: [&str; 3] = ["P_LRP", "P_USR", "AAV"];

fn scenario_table(rows: &[(&str, [f64; 3])]) -> PerformanceMetricTable {
    PerformanceMetricTable::from_metric_rows(&METRICS, rows.iter().map(|(mp, v)| (*mp, v.to_vec())))
        .unwrap()
}

/// Four operating-model scenarios, three MPs (one reference).
fn collection() -> ScenarioCollection {
    ScenarioCollection::new()
        .with(
            "base",
            scenario_table(&[
                ("A", [0.2, 0.10, 0.30]),
                ("B", [0.90, 0.60, 0.15]),
                ("NF_ref", [1.0, 0.95, 0.0]),
            ]),
        )
        .with(
            "low_m",
            scenario_table(&[
                ("A", [0.5, 0.20, 0.25]),
                ("B", [0.80, 0.55, 0.20]),
                ("NF_ref", [1.0, 0.90, 0.0]),
            ]),
        )
        .with(
            "high_h",
            scenario_table(&[
                ("A", [0.5, 0.15, 0.35]),
                ("B", [0.85, 0.40, 0.10]),
                ("NF_ref", [0.99, 0.85, 0.0]),
            ]),
        )
        .with(
            "episodic",
            scenario_table(&[
                ("A", [0.9, 0.05, 0.40]),
                ("B", [0.70, 0.35, 0.25]),
                ("NF_ref", [0.98, 0.80, 0.0]),
            ]),
        )
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_long_form_is_deterministic() {
    let c = collection();
    let first = to_long_form(&c, None).unwrap();
    let second = to_long_form(&c, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_long_form_completeness() {
    let c = collection();
    let records = to_long_form(&c, None).unwrap();
    let expected: usize = c
        .iter()
        .map(|(_, t)| t.row_count() * t.metric_columns().count())
        .sum();
    assert_eq!(records.len(), expected);
    assert_eq!(records.len(), 4 * 3 * 3);
}

#[test]
fn test_allow_list_filtering() {
    let c = collection();
    let all = to_long_form(&c, None).unwrap();
    let filtered = to_long_form(&c, Some(&set(&["A", "NF_ref"]))).unwrap();

    assert!(filtered.iter().all(|r| r.mp != "B"));
    for mp in ["A", "NF_ref"] {
        let before = all.iter().filter(|r| r.mp == mp).count();
        let after = filtered.iter().filter(|r| r.mp == mp).count();
        assert_eq!(before, after, "record count changed for {mp}");
    }
}

#[test]
fn test_schema_error_before_any_record() {
    let no_mp = PerformanceMetricTable::from_rows(
        ["procedure", "P_LRP"],
        vec![vec!["A".into(), CellValue::Number(0.4)]],
    )
    .unwrap();
    let c = collection().with("broken", no_mp);
    let err = to_long_form(&c, None).unwrap_err();
    assert!(matches!(err, ReshapeError::SchemaMismatch { .. }));
    assert_eq!(err.error_code(), "SCHEMA_MISMATCH");

    let pipeline = ReshapePipeline::with_defaults();
    assert!(pipeline.run(&c, None).is_err());
}

#[test]
fn test_summary_across_scenarios() {
    let records = to_long_form(&collection(), None).unwrap();
    let summary = to_summary(&records).unwrap();
    assert_eq!(summary.len(), 3 * 3);

    // A / P_LRP over scenarios: [0.2, 0.5, 0.5, 0.9]
    let a = summary
        .iter()
        .find(|s| s.mp == "A" && s.metric == "P_LRP")
        .unwrap();
    assert!((a.mean - 0.525).abs() < 1e-12);
    assert_eq!(a.min, 0.2);
    assert_eq!(a.max, 0.9);
    assert_eq!(a.trimmed_min, Some(0.5));
    assert_eq!(a.trimmed_max, Some(0.5));
    assert_eq!(a.observations, 4);

    for s in &summary {
        assert!(s.min <= s.mean + 1e-12 && s.mean <= s.max + 1e-12);
        assert!(s.min <= s.trimmed_min.unwrap());
        assert!(s.trimmed_max.unwrap() <= s.max);
        assert_eq!(s.is_reference, classify_reference(&s.mp));
    }
}

#[test]
fn test_single_scenario_trim_is_null() {
    let c = ScenarioCollection::new().with("only", scenario_table(&[("A", [0.7, 0.7, 0.7])]));
    let summary = to_summary(&to_long_form(&c, None).unwrap()).unwrap();
    for s in &summary {
        assert_eq!((s.mean, s.min, s.max), (0.7, 0.7, 0.7));
        assert_eq!(s.trimmed_min, None);
        assert_eq!(s.trimmed_max, None);
    }
}

#[test]
fn test_all_missing_metric_is_empty_group() {
    let t = PerformanceMetricTable::from_rows(
        ["MP", "P_LRP", "catch"],
        vec![
            vec!["A".into(), 0.4.into(), "NA".into()],
            vec!["B".into(), 0.6.into(), 10.0.into()],
        ],
    )
    .unwrap();
    let c = ScenarioCollection::new().with("s1", t);
    let err = to_summary(&to_long_form(&c, None).unwrap()).unwrap_err();
    assert_eq!(
        err,
        ReshapeError::EmptyGroup {
            mp: "A".to_string(),
            metric: "catch".to_string()
        }
    );
}

#[test]
fn test_style_stability_and_mapping() {
    let flags: BTreeMap<String, bool> =
        [("MP_ref_1".to_string(), true), ("FMSY".to_string(), false)].into();
    let mps = set(&["MP_ref_1", "FMSY"]);
    let first = serde_json::to_vec(&assign_styles(&mps, &flags)).unwrap();
    let second = serde_json::to_vec(&assign_styles(&mps, &flags)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_pipeline_result() {
    let pipeline = ReshapePipeline::with_defaults();
    let result = pipeline.run(&collection(), None).unwrap();

    assert_eq!(result.diagnostics.scenario_count, 4);
    assert_eq!(result.diagnostics.record_count, 36);
    assert_eq!(result.diagnostics.missing_value_count, 0);
    assert_eq!(result.diagnostics.group_count, 9);
    assert_eq!(result.diagnostics.mp_count, 3);
    assert_eq!(result.diagnostics.reference_mp_count, 1);

    assert_eq!(result.styles.len(), 3);
    assert_eq!(result.styles["NF_ref"].shape, MarkerShape::Cross);
    assert_eq!(result.styles["A"].shape, MarkerShape::FilledCircle);

    let json = result.to_json().unwrap();
    assert!(json.contains("\"long_form\""));
    assert!(json.contains("\"filled_circle\""));
}

#[test]
fn test_pipeline_panels_use_config() {
    let config = TradeoffConfig::from_toml(
        r#"
[reshape]
reference_marker = "NF"
summary_range = "full"

[locale]
language = "french"
digits = 1
"#,
    )
    .unwrap();
    let pipeline = ReshapePipeline::new(&config).unwrap();
    assert_eq!(pipeline.summary_range(), RangeKind::Full);
    assert_eq!(pipeline.formatter().language(), Language::French);

    let result = pipeline.run(&collection(), None).unwrap();
    let points = pipeline.tradeoff_panel(&result, "AAV", "P_LRP").unwrap();
    assert_eq!(points.len(), 3);
    let a = points.iter().find(|p| p.mp == "A").unwrap();
    assert_eq!(a.y_lower, Some(0.2));
    assert_eq!(a.y_upper, Some(0.9));
    assert!(points.iter().find(|p| p.mp == "NF_ref").unwrap().is_reference);

    let facets = pipeline.facet_panel(&result, "AAV", "P_LRP").unwrap();
    assert_eq!(facets.len(), 12);
    assert_eq!(facets[0].scenario, "base");

    let metrics = vec!["P_LRP".to_string()];
    let rows = pipeline
        .dot_range_panel(&result, Some(metrics.as_slice()))
        .unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].mp, "A");
    assert_eq!(rows[0].label, "0,5 [0,2 ; 0,9]");

    let err = pipeline.tradeoff_panel(&result, "AAV", "SSB").unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_METRIC");
}

#[test]
fn test_pipeline_allow_list_limits_styles() {
    let pipeline = ReshapePipeline::with_defaults();
    let result = pipeline
        .run(&collection(), Some(&set(&["B", "NF_ref"])))
        .unwrap();
    assert_eq!(
        result.styles.keys().cloned().collect::<Vec<_>>(),
        vec!["B".to_string(), "NF_ref".to_string()]
    );
}

#[test]
fn test_pipeline_rejects_empty_reference_marker() {
    let mut config = TradeoffConfig::default();
    config.reshape.reference_marker = Some(String::new());
    let err = ReshapePipeline::new(&config).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    assert!(TradeoffConfig::from_toml("[reshape]\nreference_marker = \"\"\n").is_err());

    // FMSY stays a non-reference MP under any accepted config.
    let config = TradeoffConfig::from_toml("[reshape]\nreference_marker = \"ref\"\n").unwrap();
    let c = ScenarioCollection::new().with(
        "s1",
        scenario_table(&[("FMSY", [0.6, 0.4, 0.2]), ("NF_ref", [1.0, 0.9, 0.0])]),
    );
    let result = ReshapePipeline::new(&config).unwrap().run(&c, None).unwrap();
    assert_eq!(result.styles["FMSY"].shape, MarkerShape::FilledCircle);
    assert!(result.long_form.iter().filter(|r| r.mp == "FMSY").all(|r| !r.is_reference));
}

#[test]
fn test_metricless_table_mps_still_get_styles() {
    let roster = PerformanceMetricTable::from_rows(
        ["MP"],
        vec![vec!["C".into()], vec!["C_ref".into()]],
    )
    .unwrap();
    let c = collection().with("roster", roster);
    let result = ReshapePipeline::with_defaults().run(&c, None).unwrap();

    assert!(!result.long_form.iter().any(|r| r.mp.starts_with('C')));
    assert_eq!(result.styles.len(), 5);
    assert_eq!(result.styles["C"].shape, MarkerShape::FilledCircle);
    assert_eq!(result.styles["C_ref"].shape, MarkerShape::Cross);
    assert_eq!(result.diagnostics.mp_count, 5);
    assert_eq!(result.diagnostics.reference_mp_count, 2);

    let limited = ReshapePipeline::with_defaults()
        .run(&c, Some(&set(&["A", "C"])))
        .unwrap();
    assert_eq!(
        limited.styles.keys().cloned().collect::<Vec<_>>(),
        vec!["A".to_string(), "C".to_string()]
    );
}

#[test]
fn test_run_many_keeps_order_and_reports_first_error() {
    let pipeline = ReshapePipeline::with_defaults();
    let small = ScenarioCollection::new().with("only", scenario_table(&[("A", [0.1, 0.2, 0.3])]));
    let results = pipeline
        .run_many(&[collection(), small.clone()], None)
        .unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].diagnostics.scenario_count, 4);
    assert_eq!(results[1].diagnostics.scenario_count, 1);

    let broken_a = ScenarioCollection::new().with(
        "first",
        PerformanceMetricTable::from_rows(["X"], vec![vec![0.1.into()]]).unwrap(),
    );
    let broken_b = ScenarioCollection::new().with(
        "second",
        PerformanceMetricTable::from_rows(["Y"], vec![vec![0.1.into()]]).unwrap(),
    );
    let err = pipeline
        .run_many(&[small, broken_a, broken_b], None)
        .unwrap_err();
    match err {
        ReshapeError::SchemaMismatch { table, .. } => assert_eq!(table, "scenario 'first'"),
        other => panic!("expected SchemaMismatch, got {other:?}"),
    }
}

#[test]
fn test_pipeline_load_from_project_dir() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("tradeoff.toml"),
        "[style]\nreference_shape = \"diamond\"\n",
    )
    .unwrap();
    let overrides = ConfigOverrides {
        language: Some(Language::English),
        ..Default::default()
    };
    let pipeline = ReshapePipeline::load(dir.path(), Some(&overrides)).unwrap();
    let result = pipeline.run(&collection(), None).unwrap();
    assert_eq!(result.styles["NF_ref"].shape, MarkerShape::Diamond);
}
