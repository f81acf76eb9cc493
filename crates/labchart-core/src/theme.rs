// File: crates/labchart-core/src/theme.rs
// Summary: Report theme colors and the default categorical bar palette.

use skia_safe as skia;

/// Opaque color from a `0xRRGGBB` literal.
pub const fn rgb_hex(rgb: u32) -> skia::Color {
    skia::Color::new(0xFF00_0000 | (rgb & 0x00FF_FFFF))
}

/// Ten-color categorical palette cycled over series without an explicit color.
pub const DEFAULT_PALETTE: [skia::Color; 10] = [
    rgb_hex(0x1f77b4),
    rgb_hex(0xff7f0e),
    rgb_hex(0x2ca02c),
    rgb_hex(0xd62728),
    rgb_hex(0x9467bd),
    rgb_hex(0x8c564b),
    rgb_hex(0xe377c2),
    rgb_hex(0x7f7f7f),
    rgb_hex(0xbcbd22),
    rgb_hex(0x17becf),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub value_label: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub palette: &'static [skia::Color],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(77, 0xb0, 0xb0, 0xb0),
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            value_label: skia::Color::BLACK,
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            palette: &DEFAULT_PALETTE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_are_opaque() {
        let c = rgb_hex(0x3498db);
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (255, 0x34, 0x98, 0xdb));
    }
}
