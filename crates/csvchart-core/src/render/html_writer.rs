// File: crates/csvchart-core/src/render/html_writer.rs
// Summary: Standalone HTML page embedding the SVG chart and its JSON description.

use std::fmt::Write;

use super::{escape_xml, json, svg, RenderOptions};
use crate::chart::ChartDescription;
use crate::error::RenderError;

pub fn html(chart: &ChartDescription, opts: &RenderOptions) -> Result<String, RenderError> {
    let figure = svg(chart, opts)?;
    // `</` inside a script element would end it early
    let data = json(chart)?.replace("</", "<\\/");
    let page_title = if chart.title.is_empty() { "Chart" } else { chart.title.as_str() };

    let mut out = String::with_capacity(figure.len() + data.len() + 1024);
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, r#"    <meta charset="utf-8">"#)?;
    writeln!(out, "    <title>{}</title>", escape_xml(page_title))?;
    writeln!(out, "    <style>")?;
    writeln!(out, "        body {{ font-family: Arial, sans-serif; margin: 40px; background: {}; }}", opts.theme.background)?;
    writeln!(out, "        .container {{ max-width: {}px; margin: 0 auto; }}", opts.width)?;
    writeln!(out, "        a {{ color: {}; }}", opts.theme.title)?;
    writeln!(out, "    </style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, r#"    <div class="container">"#)?;
    writeln!(out, r#"        <p><a href="/">&larr; Upload another file</a></p>"#)?;
    out.push_str(&figure);
    writeln!(out, "    </div>")?;
    writeln!(out, r#"    <script type="application/json" id="chart-data">{data}</script>"#)?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(out)
}
