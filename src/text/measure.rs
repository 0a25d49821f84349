//! Column measurement for terminal cells.
//!
//! Widths come from `unicode-width`, with one amendment: the placeholder
//! markers that stand in for embedded objects are control characters, yet
//! each occupies exactly one display cell.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// First cell of a placeholder run.
pub const PLACEHOLDER_HEAD: char = '\u{0}';
/// Every cell of a placeholder run after the first.
pub const PLACEHOLDER_CONT: char = '\u{1}';

pub fn char_cols(c: char) -> usize {
    if c == PLACEHOLDER_HEAD || c == PLACEHOLDER_CONT {
        return 1;
    }
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Display width of one grapheme cluster.
pub fn grapheme_cols(g: &str) -> usize {
    let mut chars = g.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => char_cols(c),
        _ => UnicodeWidthStr::width(g),
    }
}

pub fn str_cols(s: &str) -> usize {
    s.graphemes(true).map(grapheme_cols).sum()
}

/// Columns `[skip, skip + take)` of `s` as owned text.
///
/// Where the window edge splits a wide glyph, the covered columns become
/// spaces so downstream pieces keep their exact width. Zero-width glyphs
/// (combining marks) stay attached to their base character.
pub fn slice_cols(s: &str, skip: usize, take: usize) -> String {
    let end = skip + take;
    let mut out = String::new();
    let mut pos = 0;
    for g in s.graphemes(true) {
        let gw = grapheme_cols(g);
        if gw == 0 {
            if pos > skip && pos <= end {
                out.push_str(g);
            }
            continue;
        }
        let g_start = pos;
        let g_end = pos + gw;
        pos = g_end;
        if g_end <= skip {
            continue;
        }
        if g_start >= end {
            break;
        }
        if g_start >= skip && g_end <= end {
            out.push_str(g);
        } else {
            let overlap = g_end.min(end) - g_start.max(skip);
            for _ in 0..overlap {
                out.push(' ');
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/measure.rs"]
mod tests;
