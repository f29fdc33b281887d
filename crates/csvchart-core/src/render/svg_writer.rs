// File: crates/csvchart-core/src/render/svg_writer.rs
// Summary: SVG rendering of a category/value chart (grid, axes, labels, line or bars).

use std::fmt::Write;

use super::{escape_xml, RenderOptions};
use crate::chart::{ChartDescription, ChartKind};
use crate::error::RenderError;
use crate::grid::{format_tick, label_stride, linspace};
use crate::scale::{CategoryScale, ValueRange, ValueScale};
use crate::theme::Theme;
use crate::types::PlotRect;

const VALUE_TICKS: usize = 6;
const MIN_LABEL_SPACING_PX: f32 = 72.0;
const BAR_FILL_RATIO: f32 = 0.6;

/// Render `chart` as a standalone SVG document.
pub fn svg(chart: &ChartDescription, opts: &RenderOptions) -> Result<String, RenderError> {
    let rect = PlotRect::new(opts.width, opts.height, &opts.insets);
    let range = ValueRange::from_chart(chart);
    let vs = ValueScale::new(&rect, range);
    let cs = CategoryScale::new(&rect, chart.len());
    let theme = &opts.theme;

    let mut out = String::with_capacity(4096 + chart.len() * 64);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Arial, Helvetica, sans-serif">"#,
        w = opts.width,
        h = opts.height,
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, theme.background)?;

    draw_grid(&mut out, &rect, &vs, theme)?;
    draw_axes(&mut out, &rect, theme)?;
    match chart.kind {
        ChartKind::Line => draw_line_series(&mut out, chart, &vs, &cs, theme)?,
        ChartKind::Bar => draw_bar_series(&mut out, chart, &vs, &cs, theme)?,
    }
    if opts.draw_labels {
        draw_labels(&mut out, chart, opts, &rect, &vs, &cs)?;
    }

    out.push_str("</svg>\n");
    Ok(out)
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(out: &mut String, rect: &PlotRect, vs: &ValueScale, theme: &Theme) -> std::fmt::Result {
    writeln!(out, r#"<g class="grid" stroke="{}" stroke-width="1">"#, theme.grid)?;
    for v in linspace(vs.range.min, vs.range.max, VALUE_TICKS) {
        let y = vs.to_px(v);
        writeln!(out, r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}"/>"#, rect.left, rect.right)?;
    }
    out.push_str("</g>\n");
    Ok(())
}

fn draw_axes(out: &mut String, rect: &PlotRect, theme: &Theme) -> std::fmt::Result {
    writeln!(out, r#"<g class="axes" stroke="{}" stroke-width="1.5">"#, theme.axis_line)?;
    writeln!(
        out,
        r#"<line x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}"/>"#,
        l = rect.left,
        r = rect.right,
        b = rect.bottom,
    )?;
    writeln!(
        out,
        r#"<line x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}"/>"#,
        l = rect.left,
        t = rect.top,
        b = rect.bottom,
    )?;
    out.push_str("</g>\n");
    Ok(())
}

fn draw_line_series(
    out: &mut String,
    chart: &ChartDescription,
    vs: &ValueScale,
    cs: &CategoryScale,
    theme: &Theme,
) -> std::fmt::Result {
    // non-finite values break the line into separate segments
    let mut d = String::new();
    let mut pen_down = false;
    for (i, v) in chart.values().enumerate() {
        if !v.is_finite() {
            pen_down = false;
            continue;
        }
        let cmd = if pen_down { 'L' } else { 'M' };
        write!(d, "{cmd}{:.2},{:.2} ", cs.center(i), vs.to_px(v))?;
        pen_down = true;
    }

    writeln!(
        out,
        r#"<g class="series" data-name="{}">"#,
        escape_xml(&chart.series_name)
    )?;
    if !d.is_empty() {
        writeln!(
            out,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="2" stroke-linejoin="round"/>"#,
            d.trim_end(),
            theme.line_stroke,
        )?;
    }
    for (i, v) in chart.values().enumerate().filter(|(_, v)| v.is_finite()) {
        writeln!(
            out,
            r#"<circle cx="{:.2}" cy="{:.2}" r="3" fill="{}"/>"#,
            cs.center(i),
            vs.to_px(v),
            theme.line_stroke,
        )?;
    }
    out.push_str("</g>\n");
    Ok(())
}

fn draw_bar_series(
    out: &mut String,
    chart: &ChartDescription,
    vs: &ValueScale,
    cs: &CategoryScale,
    theme: &Theme,
) -> std::fmt::Result {
    let base = vs.to_px(0.0_f64.clamp(vs.range.min, vs.range.max));
    let bar_w = (cs.band * BAR_FILL_RATIO).max(1.0);

    writeln!(
        out,
        r#"<g class="series" data-name="{}" fill="{}" fill-opacity="{:.3}">"#,
        escape_xml(&chart.series_name),
        theme.bar_fill,
        theme.bar_fill.opacity(),
    )?;
    for (i, v) in chart.values().enumerate().filter(|(_, v)| v.is_finite()) {
        let y = vs.to_px(v);
        let top = y.min(base);
        let height = (y - base).abs().max(1.0);
        writeln!(
            out,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/>"#,
            cs.center(i) - bar_w * 0.5,
            top,
            bar_w,
            height,
        )?;
    }
    out.push_str("</g>\n");
    Ok(())
}

fn draw_labels(
    out: &mut String,
    chart: &ChartDescription,
    opts: &RenderOptions,
    rect: &PlotRect,
    vs: &ValueScale,
    cs: &CategoryScale,
) -> std::fmt::Result {
    let theme = &opts.theme;
    let mid_x = opts.width as f32 * 0.5;

    // Title and legend
    writeln!(
        out,
        r#"<text class="title" x="{mid_x:.1}" y="28" text-anchor="middle" font-size="18" font-weight="bold" fill="{}">{}</text>"#,
        theme.title,
        escape_xml(&chart.title),
    )?;
    let swatch = match chart.kind {
        ChartKind::Line => theme.line_stroke,
        ChartKind::Bar => theme.bar_fill,
    };
    writeln!(
        out,
        r#"<g class="legend"><rect x="{:.1}" y="42" width="14" height="10" fill="{swatch}"/><text x="{:.1}" y="51" font-size="12" fill="{}">{}</text></g>"#,
        mid_x - 40.0,
        mid_x - 20.0,
        theme.axis_label,
        escape_xml(&chart.series_name),
    )?;

    // Value ticks
    writeln!(out, r#"<g class="value-ticks" font-size="11" text-anchor="end" fill="{}">"#, theme.tick)?;
    for v in linspace(vs.range.min, vs.range.max, VALUE_TICKS) {
        writeln!(out, r#"<text x="{:.1}" y="{:.1}">{}</text>"#, rect.left - 8.0, vs.to_px(v) + 4.0, format_tick(v))?;
    }
    out.push_str("</g>\n");

    // Category ticks, thinned so labels do not overlap
    let max_labels = ((rect.width() / MIN_LABEL_SPACING_PX) as usize).max(1);
    let stride = label_stride(chart.len(), max_labels);
    writeln!(out, r#"<g class="category-ticks" font-size="11" text-anchor="middle" fill="{}">"#, theme.tick)?;
    for (i, c) in chart.categories().enumerate().step_by(stride) {
        writeln!(out, r#"<text x="{:.1}" y="{:.1}">{}</text>"#, cs.center(i), rect.bottom + 18.0, escape_xml(c))?;
    }
    out.push_str("</g>\n");

    // Axis titles
    writeln!(
        out,
        r#"<text class="axis-title" x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13" fill="{}">{}</text>"#,
        rect.left + rect.width() * 0.5,
        opts.height as f32 - 16.0,
        theme.axis_label,
        escape_xml(&chart.category_axis.label),
    )?;
    let vy = rect.top + rect.height() * 0.5;
    writeln!(
        out,
        r#"<text class="axis-title" x="20" y="{vy:.1}" transform="rotate(-90 20 {vy:.1})" text-anchor="middle" font-size="13" fill="{}">{}</text>"#,
        theme.axis_label,
        escape_xml(&chart.value_axis.label),
    )?;
    Ok(())
}
