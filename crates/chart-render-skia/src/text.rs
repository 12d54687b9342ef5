// File: crates/chart-render-skia/src/text.rs
// Summary: Chart label shaping with Skia textlayout: memoized widths and baseline-anchored drawing.

use std::cell::RefCell;
use std::collections::HashMap;

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const FAMILIES: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

/// Labels are single-line; wide enough that nothing wraps.
const LAYOUT_WIDTH: f32 = 10_000.0;

/// Shapes axis, category and sector labels for one surface.
///
/// Label sets are small and repeat (every bar label is measured once for centering and
/// shaped again when drawn), so widths are memoized per `(text, size)`.
pub struct TextShaper {
    fonts: FontCollection,
    widths: RefCell<HashMap<(String, u32), f32>>,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts, widths: RefCell::new(HashMap::new()) }
    }

    fn shape(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(FAMILIES);

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        pstyle.set_max_lines(1);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(LAYOUT_WIDTH);
        paragraph
    }

    /// Advance width of `text` at `size`.
    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let key = (text.to_owned(), size.to_bits());
        if let Some(&w) = self.widths.borrow().get(&key) {
            return w;
        }
        let w = self.shape(text, size, skia::Color::TRANSPARENT).longest_line();
        self.widths.borrow_mut().insert(key, w);
        w
    }

    /// Draw with `(x, y)` on the left end of the alphabetic baseline.
    pub fn draw_on_baseline(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        if text.is_empty() {
            return;
        }
        let mut paragraph = self.shape(text, size, color);
        // paragraphs paint from their top-left corner
        let top = y - paragraph.alphabetic_baseline();
        paragraph.paint(canvas, (x, top));
    }

    pub fn cached_widths(&self) -> usize {
        self.widths.borrow().len()
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
