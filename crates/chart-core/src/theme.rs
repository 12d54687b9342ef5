// File: crates/chart-core/src/theme.rs
// Summary: Backend-neutral color type and light/dark themes for chart rendering.

/// 8-bit straight-alpha color; backends convert to their own color model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb(0, 128, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const ORANGE: Color = Color::from_rgb(255, 165, 0);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub line_stroke: Color,
    pub bar_fill: Color,
    pub marker: Color,
    /// Series/sector colors, cycled by index.
    pub palette: Vec<Color>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            axis_line: Color::BLACK,
            axis_label: Color::BLACK,
            tick: Color::BLACK,
            line_stroke: Color::BLUE,
            bar_fill: Color::GREEN,
            marker: Color::GREEN,
            palette: vec![Color::RED, Color::BLUE, Color::GREEN, Color::ORANGE],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 235, 235, 245),
            tick: Color::from_argb(255, 150, 150, 160),
            line_stroke: Color::from_argb(255, 64, 160, 255),
            bar_fill: Color::from_argb(255, 40, 200, 120),
            marker: Color::from_argb(255, 40, 200, 120),
            palette: vec![
                Color::from_argb(255, 220, 80, 80),
                Color::from_argb(255, 64, 160, 255),
                Color::from_argb(255, 40, 200, 120),
                Color::from_argb(255, 255, 170, 60),
            ],
        }
    }

    /// Palette color for `index`, wrapping around when there are more items than colors.
    pub fn series_color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return self.line_stroke;
        }
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
