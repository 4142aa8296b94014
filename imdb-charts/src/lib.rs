//! Declarative chart descriptions for the IMDB movie dashboard.
//!
//! This crate provides:
//! - `spec`: the [`ChartSpec`] Vega-Lite document type
//! - `charts`: one builder per dashboard chart, plus the [`ChartKind`] catalog

pub mod charts;
pub mod spec;

pub use charts::ChartKind;
pub use spec::ChartSpec;
