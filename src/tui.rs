//! ratatui bridge: render a composed [`Canvas`] into a ratatui buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::text::{Line, Span as RSpan, Text};
use ratatui::widgets::Widget;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::text::canvas::Canvas;
use crate::text::style::{Attr, Color, Mod, Style};

pub fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out = out.add_modifier(to_ratatui_mods(s.mods));
    out
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    let mut out = RModifier::empty();
    if m.contains(Mod::BOLD) {
        out |= RModifier::BOLD;
    }
    if m.contains(Mod::DIM) {
        out |= RModifier::DIM;
    }
    if m.contains(Mod::ITALIC) {
        out |= RModifier::ITALIC;
    }
    if m.contains(Mod::UNDERLINE) {
        out |= RModifier::UNDERLINED;
    }
    if m.contains(Mod::REVERSE) {
        out |= RModifier::REVERSED;
    }
    out
}

fn attr_style(attr: &Attr) -> RStyle {
    match attr {
        Attr::Style(s) => to_ratatui_style(*s),
        // Tags are resolved by the application; plain here.
        Attr::None | Attr::Tag(_) | Attr::Object(_) => RStyle::default(),
    }
}

impl From<&Canvas> for Text<'static> {
    fn from(canvas: &Canvas) -> Self {
        let lines = canvas
            .rows()
            .iter()
            .map(|row| {
                Line::from(
                    row.spans()
                        .iter()
                        .map(|s| RSpan::styled(s.text.to_string(), attr_style(&s.attr)))
                        .collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>();
        Text::from(lines)
    }
}

/// Renders a canvas into a buffer, clipped to the area.
pub struct CanvasWidget<'a> {
    canvas: &'a Canvas,
}

impl<'a> CanvasWidget<'a> {
    pub fn new(canvas: &'a Canvas) -> Self {
        Self { canvas }
    }
}

impl Widget for CanvasWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (r, row) in self.canvas.rows().iter().enumerate() {
            if r as u16 >= area.height {
                break;
            }
            let y = area.y + r as u16;
            let mut x = area.x;
            let right = area.x.saturating_add(area.width);
            'row: for span in row.spans() {
                let style = attr_style(&span.attr);
                for g in span.text.graphemes(true) {
                    let w = UnicodeWidthStr::width(g) as u16;
                    if w == 0 {
                        continue;
                    }
                    // Do not partially render wide glyphs at the edge.
                    if x.saturating_add(w) > right {
                        break 'row;
                    }
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol(g).set_style(style);
                    }
                    for dx in 1..w {
                        if let Some(cell) = buf.cell_mut((x + dx, y)) {
                            cell.set_char(' ').set_style(style);
                        }
                    }
                    x += w;
                }
            }
        }
    }
}

// Buffer-level behavior is covered by the integration tests; the style
// mapping is exercised there through `Text::from`.
