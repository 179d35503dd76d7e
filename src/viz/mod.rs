//! Visualization of classifier evaluation results.
//!
//! [`get_plot_model`] turns per-model F1, recall and precision scores into a
//! [`MetricChart`]: grouped horizontal bars with value labels, rendered to
//! SVG or serialized to JSON on request.
//!
//! # Example
//!
//! ```
//! use noisetext::viz::get_plot_model;
//!
//! let chart = get_plot_model(
//!     &["logreg", "svm"],
//!     &[0.82, 0.85],
//!     &[0.80, 0.83],
//!     &[0.84, 0.88],
//!     Some("Sentiment models"),
//! )
//! .expect("one score per model");
//!
//! let svg = chart.to_svg();
//! assert!(svg.starts_with("<?xml"));
//! assert!(svg.contains("Sentiment models"));
//! ```

pub mod chart;
mod svg;

pub use chart::{
    get_plot_model, Annotation, Bar, ChartConfig, HAlign, LegendLocation, MetricChart,
    MetricChartBuilder, ModelSeries, Tick, VAlign, DEFAULT_TITLE, METRICS, PALETTE,
};
