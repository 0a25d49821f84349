//! ANSI emission: turn a composed canvas into escape-sequenced text.
//!
//! Styles become SGR sequences; span link metadata becomes OSC 8 hyperlink
//! open/close pairs. Link ids are scoped to the writer instance: the same
//! URI gets the same id for the writer's lifetime, and everything is
//! released when the writer is dropped.

use std::fmt::Write as _;

use compact_str::CompactString;
use rustc_hash::FxHashMap;

use crate::text::canvas::Canvas;
use crate::text::style::{Attr, Color, Mod, Style};

const OSC8_CLOSE: &str = "\x1b]8;;\x1b\\";
const SGR_RESET: &str = "\x1b[0m";

#[derive(Debug, Default)]
pub struct AnsiWriter {
    next_id: u64,
    ids: FxHashMap<CompactString, u64>,
}

impl AnsiWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows joined with `\n`. Tagged attributes carry no style of their
    /// own and are emitted plain; resolving tags is the application's job.
    pub fn write_canvas(&mut self, canvas: &Canvas) -> String {
        let mut out = String::new();
        for (r, row) in canvas.rows().iter().enumerate() {
            if r > 0 {
                out.push('\n');
            }
            for span in row.spans() {
                let open = span.link.as_ref().map(|uri| self.link_open(uri));
                if let Some(open) = &open {
                    out.push_str(open);
                }
                let sgr = match &span.attr {
                    Attr::Style(style) => sgr(style),
                    Attr::None | Attr::Tag(_) | Attr::Object(_) => String::new(),
                };
                out.push_str(&sgr);
                out.push_str(&span.text);
                if !sgr.is_empty() {
                    out.push_str(SGR_RESET);
                }
                if open.is_some() {
                    out.push_str(OSC8_CLOSE);
                }
            }
        }
        out
    }

    fn link_open(&mut self, uri: &str) -> String {
        let id = match self.ids.get(uri) {
            Some(id) => *id,
            None => {
                let id = self.next_id;
                self.next_id += 1;
                self.ids.insert(uri.into(), id);
                id
            }
        };
        format!("\x1b]8;id={};{}\x1b\\", id, uri)
    }
}

fn sgr(style: &Style) -> String {
    let mut codes: Vec<CompactString> = Vec::new();
    if style.mods.contains(Mod::BOLD) {
        codes.push("1".into());
    }
    if style.mods.contains(Mod::DIM) {
        codes.push("2".into());
    }
    if style.mods.contains(Mod::ITALIC) {
        codes.push("3".into());
    }
    if style.mods.contains(Mod::UNDERLINE) {
        codes.push("4".into());
    }
    if style.mods.contains(Mod::REVERSE) {
        codes.push("7".into());
    }
    if let Some(fg) = style.fg {
        codes.push(color_code(fg, 30));
    }
    if let Some(bg) = style.bg {
        codes.push(color_code(bg, 40));
    }
    if codes.is_empty() {
        return String::new();
    }
    let mut out = String::from("\x1b[");
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(code);
    }
    out.push('m');
    out
}

/// `base` is 30 for foreground, 40 for background.
fn color_code(color: Color, base: u8) -> CompactString {
    let mut out = CompactString::default();
    match color {
        Color::Reset => {
            let _ = write!(out, "{}", base + 9);
        }
        Color::Indexed(i) => {
            let _ = write!(out, "{};5;{}", base + 8, i);
        }
        Color::Rgb(r, g, b) => {
            let _ = write!(out, "{};2;{};{};{}", base + 8, r, g, b);
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/term.rs"]
mod tests;
