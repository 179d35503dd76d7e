//! Grouped horizontal bar chart comparing models on F1, recall and precision.
//!
//! The chart is a plain value: bars, annotations, ticks and legend entries
//! are computed up front in data coordinates, and rendering to SVG or JSON
//! happens on request.
//!
//! # Layout
//!
//! ```text
//!  Precision |#### 0.50        model i, metric j:
//!            |###### 0.70        center y = j + i * bar_height
//!     Recall |######## 0.70
//!            |######### 0.80   tick for metric j:
//!   F1 Score |########## 0.90    y = j + bar_height * (n - 1) / 2
//!            +------------------
//!            0     Scores      1
//! ```

use crate::error::{NoiseTextError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Metric names, bottom to top.
pub const METRICS: [&str; 3] = ["F1 Score", "Recall", "Precision"];

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "Model Comparison - F1, Recall, Precision";

/// The 10-color categorical cycle used for model series.
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Where the legend box sits inside the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendLocation {
    /// Bottom right corner.
    #[default]
    LowerRight,
    /// Bottom left corner.
    LowerLeft,
    /// Top right corner.
    UpperRight,
    /// Top left corner.
    UpperLeft,
}

/// Chart geometry and labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Bar thickness in data units.
    pub bar_height: f64,
    /// Label under the x-axis.
    pub x_label: String,
    /// Legend placement.
    pub legend: LegendLocation,
    /// Gap between a bar end and its value label, in points.
    pub annotation_offset: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            bar_height: 0.35,
            x_label: "Scores".to_string(),
            legend: LegendLocation::LowerRight,
            annotation_offset: 3.0,
        }
    }
}

impl ChartConfig {
    /// Set the canvas size in pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the bar thickness.
    #[must_use]
    pub fn with_bar_height(mut self, bar_height: f64) -> Self {
        self.bar_height = bar_height;
        self
    }

    /// Set the legend placement.
    #[must_use]
    pub fn with_legend(mut self, legend: LegendLocation) -> Self {
        self.legend = legend;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Horizontal alignment of annotation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    /// Text starts at the anchor.
    Left,
    /// Text is centered on the anchor.
    Center,
    /// Text ends at the anchor.
    Right,
}

/// Vertical alignment of annotation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VAlign {
    /// Text hangs below the anchor.
    Top,
    /// Text is centered on the anchor.
    Center,
    /// Text sits above the anchor.
    Bottom,
}

/// Value label attached to a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Rendered text, two decimals.
    pub text: String,
    /// Anchor x in data coordinates: the bar end.
    pub x: f64,
    /// Anchor y in data coordinates: the bar center.
    pub y: f64,
    /// Horizontal offset from the anchor, in points.
    pub offset_points: f64,
    /// Horizontal text alignment.
    pub h_align: HAlign,
    /// Vertical text alignment.
    pub v_align: VAlign,
}

/// One bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Metric this bar measures.
    pub metric: String,
    /// Bar length.
    pub value: f64,
    /// Center of the bar on the y-axis.
    pub y: f64,
    /// Thickness in data units.
    pub height: f64,
    /// Value label drawn past the bar end.
    pub annotation: Annotation,
}

/// All bars of one model, drawn in one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSeries {
    /// Model name shown in the legend.
    pub name: String,
    /// Fill color as a hex string.
    pub color: String,
    /// One bar per entry of [`METRICS`], in order.
    pub bars: Vec<Bar>,
}

/// Labelled tick on an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Position in data coordinates.
    pub position: f64,
    /// Tick label.
    pub label: String,
}

/// A renderable model comparison chart.
///
/// Building one draws nothing and writes nothing; use [`MetricChart::to_svg`],
/// [`MetricChart::save_svg`] or [`MetricChart::to_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricChart {
    /// Title drawn above the plot.
    pub title: String,
    /// One series per model, in input order.
    pub series: Vec<ModelSeries>,
    /// Fixed x-axis limits.
    pub x_range: (f64, f64),
    /// y-axis limits covering every bar with a small margin.
    pub y_range: (f64, f64),
    /// Label under the x-axis.
    pub x_label: String,
    /// One tick per metric, centered on its bar group.
    pub y_ticks: Vec<Tick>,
    /// Legend placement.
    pub legend: LegendLocation,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl MetricChart {
    /// Number of model series.
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.series.len()
    }

    /// Iterate over every bar of every series.
    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.series.iter().flat_map(|s| s.bars.iter())
    }

    /// Render as an SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        // fmt::Write into a String never fails
        let _ = super::svg::write_svg(self, &mut svg);
        svg
    }

    /// Write the SVG rendering to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseTextError::Io`] if the file cannot be written.
    pub fn save_svg(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_svg())?;
        log::debug!("chart written to {}", path.display());
        Ok(())
    }

    /// Serialize the chart model to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseTextError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds [`MetricChart`]s with a shared config.
///
/// # Examples
///
/// ```
/// use noisetext::viz::{ChartConfig, LegendLocation, MetricChartBuilder};
///
/// let chart = MetricChartBuilder::new()
///     .with_config(ChartConfig::default().with_legend(LegendLocation::UpperLeft))
///     .with_title("Baseline vs noisy")
///     .build(&["clean", "noisy"], &[0.91, 0.84], &[0.90, 0.80], &[0.92, 0.88])
///     .expect("equal lengths");
///
/// assert_eq!(chart.model_count(), 2);
/// assert_eq!(chart.title, "Baseline vs noisy");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricChartBuilder {
    config: ChartConfig,
    title: Option<String>,
}

impl MetricChartBuilder {
    /// Builder with the default config and title.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration.
    #[must_use]
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the chart title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Build the chart.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseTextError::InvalidArgument`] when a score sequence has a
    /// different length than `model_names`, when a score is not finite, or
    /// when the configured bar height is not positive.
    pub fn build<S: AsRef<str>>(
        &self,
        model_names: &[S],
        f1_scores: &[f64],
        recall_scores: &[f64],
        precision_scores: &[f64],
    ) -> Result<MetricChart> {
        let n = model_names.len();
        let scores = [
            ("f1_scores", f1_scores),
            ("recall_scores", recall_scores),
            ("precision_scores", precision_scores),
        ];

        for (param, values) in scores {
            if values.len() != n {
                return Err(NoiseTextError::invalid_argument(
                    param,
                    format!("{} values", values.len()),
                    format!("one value per model ({n} model names)"),
                ));
            }
            if let Some(i) = values.iter().position(|v| !v.is_finite()) {
                return Err(NoiseTextError::invalid_argument(
                    &format!("{param}[{i}]"),
                    values[i],
                    "a finite score",
                ));
            }
        }

        let bar_height = self.config.bar_height;
        if !(bar_height.is_finite() && bar_height > 0.0) {
            return Err(NoiseTextError::invalid_argument(
                "bar_height",
                bar_height,
                "a positive finite value",
            ));
        }

        let series = model_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let values = [f1_scores[i], recall_scores[i], precision_scores[i]];
                let bars = METRICS
                    .iter()
                    .zip(values)
                    .enumerate()
                    .map(|(j, (metric, value))| {
                        let y = j as f64 + i as f64 * bar_height;
                        Bar {
                            metric: (*metric).to_string(),
                            value,
                            y,
                            height: bar_height,
                            annotation: Annotation {
                                text: format!("{value:.2}"),
                                x: value,
                                y,
                                offset_points: self.config.annotation_offset,
                                h_align: HAlign::Left,
                                v_align: VAlign::Center,
                            },
                        }
                    })
                    .collect();

                ModelSeries {
                    name: name.as_ref().to_string(),
                    color: PALETTE[i % PALETTE.len()].to_string(),
                    bars,
                }
            })
            .collect();

        let group_offset = bar_height * (n as f64 - 1.0) / 2.0;
        let y_ticks = METRICS
            .iter()
            .enumerate()
            .map(|(j, metric)| Tick {
                position: j as f64 + group_offset,
                label: (*metric).to_string(),
            })
            .collect();

        Ok(MetricChart {
            title: self
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            series,
            x_range: (0.0, 1.0),
            y_range: y_range(n, bar_height),
            x_label: self.config.x_label.clone(),
            y_ticks,
            legend: self.config.legend,
            width: self.config.width,
            height: self.config.height,
        })
    }
}

/// Bar extent plus a 5% margin on each side.
fn y_range(n: usize, bar_height: f64) -> (f64, f64) {
    if n == 0 {
        return (-0.5, METRICS.len() as f64 - 0.5);
    }
    let low = -bar_height / 2.0;
    let high = (METRICS.len() - 1) as f64 + (n - 1) as f64 * bar_height + bar_height / 2.0;
    let margin = (high - low) * 0.05;
    (low - margin, high + margin)
}

/// Build the model comparison chart.
///
/// One group of three bars per model, annotated with the score to two
/// decimals. `title` defaults to [`DEFAULT_TITLE`].
///
/// ```
/// use noisetext::viz::get_plot_model;
///
/// let chart = get_plot_model(&["A", "B"], &[0.9, 0.8], &[0.7, 0.6], &[0.5, 0.4], None)
///     .expect("equal lengths");
/// assert_eq!(chart.series.len(), 2);
/// assert_eq!(chart.series[1].bars[0].annotation.text, "0.80");
/// assert_eq!(chart.x_range, (0.0, 1.0));
/// ```
///
/// # Errors
///
/// See [`MetricChartBuilder::build`].
pub fn get_plot_model<S: AsRef<str>>(
    model_names: &[S],
    f1_scores: &[f64],
    recall_scores: &[f64],
    precision_scores: &[f64],
    title: Option<&str>,
) -> Result<MetricChart> {
    let mut builder = MetricChartBuilder::new();
    if let Some(title) = title {
        builder = builder.with_title(title);
    }
    builder.build(model_names, f1_scores, recall_scores, precision_scores)
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
