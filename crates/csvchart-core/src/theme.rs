// File: crates/csvchart-core/src/theme.rs
// Summary: Chart color themes shared by the SVG and raster renderers.

use std::fmt;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a } }
    pub fn opacity(&self) -> f32 { self.a as f32 / 255.0 }
}

/// `#rrggbb`; alpha is emitted separately as an SVG opacity attribute.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub title: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub line_stroke: Rgba,
    pub bar_fill: Rgba,
}

impl Theme {
    /// Light palette modelled on the ECharts "westeros" theme.
    pub fn westeros() -> Self {
        Self {
            name: "westeros",
            background: Rgba::rgb(0xff, 0xff, 0xff),
            title: Rgba::rgb(0x51, 0x6b, 0x91),
            grid: Rgba::rgb(0xee, 0xee, 0xee),
            axis_line: Rgba::rgb(0xcc, 0xcc, 0xcc),
            axis_label: Rgba::rgb(0x51, 0x6b, 0x91),
            tick: Rgba::rgb(0x99, 0x99, 0x99),
            line_stroke: Rgba::rgb(0x51, 0x6b, 0x91),
            bar_fill: Rgba::rgb(0x59, 0xc4, 0xe6),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            title: Rgba::rgb(235, 235, 245),
            grid: Rgba::rgb(40, 40, 45),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            tick: Rgba::rgb(150, 150, 160),
            line_stroke: Rgba::rgb(64, 160, 255),
            bar_fill: Rgba::argb(220, 96, 156, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::westeros() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::westeros(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to westeros.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_hex() {
        assert_eq!(Rgba::rgb(0x51, 0x6b, 0x91).to_string(), "#516b91");
    }

    #[test]
    fn unknown_theme_falls_back() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "westeros");
    }
}
