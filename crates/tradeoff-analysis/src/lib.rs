//! # tradeoff-analysis
//!
//! Reshaping engine for MSE performance-metric tables: long-form flattening,
//! per-MP summary aggregation, reference classification, marker styles, and
//! the plot-input panels built on top of them.

pub mod reshape;

pub use reshape::{
    assign_styles, classify_reference, to_long_form, to_summary, ReshapePipeline, ReshapeResult,
};
