use super::*;

const EPS: f64 = 1e-12;

fn two_models() -> MetricChart {
    get_plot_model(&["A", "B"], &[0.9, 0.8], &[0.7, 0.6], &[0.5, 0.4], None)
        .expect("equal lengths")
}

// ========== Layout ==========

#[test]
fn test_two_groups_of_three_bars() {
    let chart = two_models();
    assert_eq!(chart.model_count(), 2);
    for series in &chart.series {
        assert_eq!(series.bars.len(), 3);
        let metrics: Vec<&str> = series.bars.iter().map(|b| b.metric.as_str()).collect();
        assert_eq!(metrics, METRICS);
    }
    assert_eq!(chart.bars().count(), 6);
    assert_eq!(chart.x_range, (0.0, 1.0));
    assert_eq!(chart.x_label, "Scores");
}

#[test]
fn test_bar_positions_and_values() {
    let chart = two_models();
    let b = &chart.series[1];
    assert!((b.bars[0].y - 0.35).abs() < EPS);
    assert!((b.bars[1].y - 1.35).abs() < EPS);
    assert!((b.bars[2].y - 2.35).abs() < EPS);
    assert!((b.bars[2].height - 0.35).abs() < EPS);

    let values: Vec<f64> = b.bars.iter().map(|bar| bar.value).collect();
    assert_eq!(values, vec![0.8, 0.6, 0.4]);
}

#[test]
fn test_y_ticks_centered_on_groups() {
    let chart = two_models();
    let positions: Vec<f64> = chart.y_ticks.iter().map(|t| t.position).collect();
    for (j, p) in positions.iter().enumerate() {
        assert!((p - (j as f64 + 0.175)).abs() < EPS);
    }
    let labels: Vec<&str> = chart.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, METRICS);
}

#[test]
fn test_y_range_covers_all_bars() {
    let chart = two_models();
    let (lo, hi) = chart.y_range;
    for bar in chart.bars() {
        assert!(bar.y - bar.height / 2.0 >= lo);
        assert!(bar.y + bar.height / 2.0 <= hi);
    }
}

#[test]
fn test_annotations() {
    let chart = get_plot_model(&["m"], &[0.876], &[0.5], &[1.0], None).expect("ok");
    let texts: Vec<&str> = chart
        .bars()
        .map(|b| b.annotation.text.as_str())
        .collect();
    assert_eq!(texts, vec!["0.88", "0.50", "1.00"]);

    let note = &chart.series[0].bars[0].annotation;
    assert!((note.x - 0.876).abs() < EPS);
    assert!((note.y - chart.series[0].bars[0].y).abs() < EPS);
    assert!((note.offset_points - 3.0).abs() < EPS);
    assert_eq!(note.h_align, HAlign::Left);
    assert_eq!(note.v_align, VAlign::Center);
}

#[test]
fn test_colors_cycle_palette() {
    let names: Vec<String> = (0..12).map(|i| format!("model{i}")).collect();
    let scores = vec![0.5; 12];
    let chart = get_plot_model(&names, &scores, &scores, &scores, None).expect("ok");

    assert_eq!(chart.series[0].color, "#1f77b4");
    assert_eq!(chart.series[1].color, "#ff7f0e");
    assert_eq!(chart.series[10].color, PALETTE[0]);
    assert_eq!(chart.series[11].color, PALETTE[1]);
}

#[test]
fn test_title_and_legend_defaults() {
    let chart = two_models();
    assert_eq!(chart.title, DEFAULT_TITLE);
    assert_eq!(chart.legend, LegendLocation::LowerRight);
    assert_eq!((chart.width, chart.height), (1000, 600));

    let titled = get_plot_model(&["A"], &[0.1], &[0.2], &[0.3], Some("Custom")).expect("ok");
    assert_eq!(titled.title, "Custom");
}

#[test]
fn test_empty_model_list() {
    let empty: [&str; 0] = [];
    let chart = get_plot_model(&empty, &[], &[], &[], None).expect("empty is allowed");
    assert_eq!(chart.model_count(), 0);
    assert_eq!(chart.y_ticks.len(), 3);
    assert!(chart.to_svg().contains("</svg>"));
}

// ========== Validation ==========

#[test]
fn test_length_mismatch_names_sequence() {
    let err = get_plot_model(&["A", "B"], &[0.9, 0.8], &[0.7], &[0.5, 0.4], None)
        .expect_err("recall too short");
    match err {
        NoiseTextError::InvalidArgument { param, .. } => assert_eq!(param, "recall_scores"),
        other => panic!("unexpected error: {other}"),
    }

    let err = get_plot_model(&["A"], &[0.9, 0.8], &[0.7], &[0.5], None).expect_err("f1 too long");
    assert!(err.to_string().contains("f1_scores"));

    let err = get_plot_model(&["A"], &[0.9], &[0.7], &[], None).expect_err("precision empty");
    assert!(err.is_invalid_argument());
}

#[test]
fn test_non_finite_scores_rejected() {
    let err = get_plot_model(&["A", "B"], &[0.9, f64::NAN], &[0.7, 0.6], &[0.5, 0.4], None)
        .expect_err("nan");
    match err {
        NoiseTextError::InvalidArgument { param, .. } => assert_eq!(param, "f1_scores[1]"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(get_plot_model(&["A"], &[0.9], &[f64::INFINITY], &[0.5], None).is_err());
}

#[test]
fn test_invalid_bar_height() {
    let builder = MetricChartBuilder::new().with_config(ChartConfig::default().with_bar_height(0.0));
    assert!(builder.build(&["A"], &[0.5], &[0.5], &[0.5]).is_err());
}

// ========== Builder and config ==========

#[test]
fn test_builder_config_applies() {
    let config = ChartConfig::default()
        .with_size(800, 400)
        .with_bar_height(0.25)
        .with_legend(LegendLocation::UpperLeft);
    let chart = MetricChartBuilder::new()
        .with_config(config)
        .build(&["A", "B", "C"], &[0.1, 0.2, 0.3], &[0.1, 0.2, 0.3], &[0.1, 0.2, 0.3])
        .expect("ok");

    assert_eq!((chart.width, chart.height), (800, 400));
    assert_eq!(chart.legend, LegendLocation::UpperLeft);
    assert!((chart.series[2].bars[0].y - 0.5).abs() < EPS);
    assert!((chart.y_ticks[0].position - 0.25).abs() < EPS);
}

#[test]
fn test_chart_config_json() {
    let config = ChartConfig::from_json(r#"{"legend": "upper_right", "width": 640}"#).expect("json");
    assert_eq!(config.legend, LegendLocation::UpperRight);
    assert_eq!(config.width, 640);
    assert_eq!(config.height, 600);
    assert_eq!(config.x_label, "Scores");
}

// ========== Rendering ==========

#[test]
fn test_svg_contents() {
    let svg = two_models().to_svg();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("width=\"1000\" height=\"600\""));
    assert!(svg.contains(DEFAULT_TITLE));
    assert!(svg.contains(">Scores</text>"));
    for label in ["0.90", "0.80", "0.70", "0.60", "0.50", "0.40"] {
        assert!(svg.contains(&format!(">{label}</text>")), "missing {label}");
    }
    for metric in METRICS {
        assert!(svg.contains(metric));
    }
    assert!(svg.contains("#1f77b4"));
    assert!(svg.contains("#ff7f0e"));
    assert_eq!(svg.matches("<rect x=").count(), 6 + 1 + 2);
}

#[test]
fn test_svg_escapes_names() {
    let chart = get_plot_model(&["<tfidf & svm>"], &[0.5], &[0.5], &[0.5], None).expect("ok");
    let svg = chart.to_svg();
    assert!(svg.contains("&lt;tfidf &amp; svm&gt;"));
    assert!(!svg.contains("<tfidf"));
}

#[test]
fn test_to_json() {
    let chart = two_models();
    let json = chart.to_json().expect("serialize");
    assert!(json.contains("\"F1 Score\""));
    assert!(json.contains("\"lower_right\""));

    let back: MetricChart = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.title, chart.title);
    assert_eq!(back.series[1].name, "B");
    assert_eq!(back.series[1].bars[2].annotation.text, "0.40");
}

#[test]
fn test_save_svg() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("models.svg");
    let chart = two_models();
    chart.save_svg(&path).expect("write");
    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, chart.to_svg());

    let missing = dir.path().join("no_such_dir").join("models.svg");
    assert!(matches!(chart.save_svg(&missing), Err(NoiseTextError::Io(_))));
}
