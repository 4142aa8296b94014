//! Shared Dioxus components and Vega-Lite bridge for the movie dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the vegaEmbed helpers via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (filters, tables, chart containers)

pub mod js_bridge;
pub mod state;
pub mod components;
