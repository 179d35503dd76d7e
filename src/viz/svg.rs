//! SVG rendering for [`MetricChart`].

use super::chart::{HAlign, LegendLocation, MetricChart, VAlign};
use std::fmt::{self, Write};

const MARGIN_LEFT: f64 = 110.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;

/// Canvas resolution: 1000x600 px is a 10x6 in figure.
const DPI: f64 = 100.0;

const LEGEND_ROW: f64 = 20.0;
const LEGEND_WIDTH: f64 = 160.0;
const LEGEND_PAD: f64 = 10.0;

/// Maps data coordinates onto the canvas.
struct Frame {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Frame {
    fn new(chart: &MetricChart) -> Self {
        let width = f64::from(chart.width);
        let height = f64::from(chart.height);
        Self {
            left: MARGIN_LEFT,
            right: (width - MARGIN_RIGHT).max(MARGIN_LEFT + 1.0),
            top: MARGIN_TOP,
            bottom: (height - MARGIN_BOTTOM).max(MARGIN_TOP + 1.0),
            x_range: chart.x_range,
            y_range: chart.y_range,
        }
    }

    fn x(&self, v: f64) -> f64 {
        let (lo, hi) = self.x_range;
        let v = v.clamp(lo, hi);
        self.left + (v - lo) / (hi - lo) * (self.right - self.left)
    }

    fn y(&self, v: f64) -> f64 {
        let (lo, hi) = self.y_range;
        self.bottom - (v - lo) / (hi - lo) * (self.bottom - self.top)
    }
}

pub(crate) fn write_svg<W: Write>(chart: &MetricChart, out: &mut W) -> fmt::Result {
    let frame = Frame::new(chart);
    let width = chart.width;
    let height = chart.height;

    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    )?;
    writeln!(out, "  <style>")?;
    writeln!(out, "    .label {{ font-family: sans-serif; font-size: 12px; }}")?;
    writeln!(out, "    .axis {{ stroke: #000; stroke-width: 1; }}")?;
    writeln!(out, "  </style>")?;
    writeln!(out, "  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>")?;
    writeln!(
        out,
        "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"16\" font-weight=\"bold\" class=\"label\">{}</text>",
        f64::from(width) / 2.0,
        MARGIN_TOP / 2.0,
        escape_xml(&chart.title)
    )?;

    write_bars(chart, &frame, out)?;
    write_axes(chart, &frame, out)?;
    write_legend(chart, &frame, out)?;

    writeln!(out, "</svg>")
}

fn write_bars<W: Write>(chart: &MetricChart, frame: &Frame, out: &mut W) -> fmt::Result {
    let offset_px_per_point = DPI / 72.0;

    for series in &chart.series {
        writeln!(out, "  <g class=\"series\" fill=\"{}\">", series.color)?;
        for bar in &series.bars {
            let x0 = frame.x(bar.value.min(0.0));
            let x1 = frame.x(bar.value.max(0.0));
            let y_top = frame.y(bar.y + bar.height / 2.0);
            let y_bottom = frame.y(bar.y - bar.height / 2.0);
            writeln!(
                out,
                "    <rect x=\"{x0:.1}\" y=\"{y_top:.1}\" width=\"{:.1}\" height=\"{:.1}\"><title>{}: {}</title></rect>",
                x1 - x0,
                y_bottom - y_top,
                escape_xml(&series.name),
                escape_xml(&bar.metric)
            )?;

            let note = &bar.annotation;
            let anchor = match note.h_align {
                HAlign::Left => "start",
                HAlign::Center => "middle",
                HAlign::Right => "end",
            };
            let baseline = match note.v_align {
                VAlign::Top => "hanging",
                VAlign::Center => "middle",
                VAlign::Bottom => "alphabetic",
            };
            writeln!(
                out,
                "    <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"{anchor}\" dominant-baseline=\"{baseline}\" fill=\"#000\" class=\"label\">{}</text>",
                frame.x(note.x) + note.offset_points * offset_px_per_point,
                frame.y(note.y),
                escape_xml(&note.text)
            )?;
        }
        writeln!(out, "  </g>")?;
    }
    Ok(())
}

fn write_axes<W: Write>(chart: &MetricChart, frame: &Frame, out: &mut W) -> fmt::Result {
    writeln!(
        out,
        "  <line x1=\"{l:.1}\" y1=\"{b:.1}\" x2=\"{r:.1}\" y2=\"{b:.1}\" class=\"axis\"/>",
        l = frame.left,
        r = frame.right,
        b = frame.bottom
    )?;
    writeln!(
        out,
        "  <line x1=\"{l:.1}\" y1=\"{t:.1}\" x2=\"{l:.1}\" y2=\"{b:.1}\" class=\"axis\"/>",
        l = frame.left,
        t = frame.top,
        b = frame.bottom
    )?;

    let (lo, hi) = chart.x_range;
    for k in 0..=5u8 {
        let v = lo + (hi - lo) * f64::from(k) / 5.0;
        let x = frame.x(v);
        writeln!(
            out,
            "  <line x1=\"{x:.1}\" y1=\"{:.1}\" x2=\"{x:.1}\" y2=\"{:.1}\" class=\"axis\"/>",
            frame.bottom,
            frame.bottom + 5.0
        )?;
        writeln!(
            out,
            "  <text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"label\">{v:.1}</text>",
            frame.bottom + 20.0
        )?;
    }
    writeln!(
        out,
        "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"label\">{}</text>",
        (frame.left + frame.right) / 2.0,
        frame.bottom + 45.0,
        escape_xml(&chart.x_label)
    )?;

    for tick in &chart.y_ticks {
        let y = frame.y(tick.position);
        writeln!(
            out,
            "  <line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" class=\"axis\"/>",
            frame.left - 5.0,
            frame.left
        )?;
        writeln!(
            out,
            "  <text x=\"{:.1}\" y=\"{y:.1}\" text-anchor=\"end\" dominant-baseline=\"middle\" class=\"label\">{}</text>",
            frame.left - 8.0,
            escape_xml(&tick.label)
        )?;
    }
    Ok(())
}

fn write_legend<W: Write>(chart: &MetricChart, frame: &Frame, out: &mut W) -> fmt::Result {
    if chart.series.is_empty() {
        return Ok(());
    }

    let box_height = LEGEND_PAD + chart.series.len() as f64 * LEGEND_ROW;
    let x = match chart.legend {
        LegendLocation::LowerRight | LegendLocation::UpperRight => {
            frame.right - LEGEND_WIDTH - LEGEND_PAD
        }
        LegendLocation::LowerLeft | LegendLocation::UpperLeft => frame.left + LEGEND_PAD,
    };
    let y = match chart.legend {
        LegendLocation::LowerRight | LegendLocation::LowerLeft => {
            frame.bottom - box_height - LEGEND_PAD
        }
        LegendLocation::UpperRight | LegendLocation::UpperLeft => frame.top + LEGEND_PAD,
    };

    writeln!(out, "  <g class=\"legend\">")?;
    writeln!(
        out,
        "    <rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{LEGEND_WIDTH:.1}\" height=\"{box_height:.1}\" fill=\"#ffffff\" fill-opacity=\"0.8\" stroke=\"#cccccc\"/>"
    )?;
    for (i, series) in chart.series.iter().enumerate() {
        let row_y = y + LEGEND_PAD / 2.0 + i as f64 * LEGEND_ROW;
        writeln!(
            out,
            "    <rect x=\"{:.1}\" y=\"{:.1}\" width=\"20.0\" height=\"10.0\" fill=\"{}\"/>",
            x + 8.0,
            row_y + 5.0,
            series.color
        )?;
        writeln!(
            out,
            "    <text x=\"{:.1}\" y=\"{:.1}\" dominant-baseline=\"middle\" class=\"label\">{}</text>",
            x + 36.0,
            row_y + 10.0,
            escape_xml(&series.name)
        )?;
    }
    writeln!(out, "  </g>")
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
