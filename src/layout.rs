//! Wrapping, clipping and alignment of attributed flat text into rows.
//!
//! The compositor consumes the output of [`layout`]: a canvas whose rows are
//! each exactly the requested width, plus a per-row horizontal translation.
//! The translation is positive for left padding and negative for left
//! trimming; only clip mode ever trims.

use std::fmt;
use std::ops::Range;

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::text::canvas::{Canvas, Row, Span};
use crate::text::measure::{grapheme_cols, str_cols};
use crate::text::style::Attr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wrap {
    /// Word wrap at spaces; a word wider than the row is hard-split.
    Space,
    /// Hard wrap at the column boundary.
    Any,
    /// One row per logical line, clipped to the row width.
    Clip,
    /// Declared for API compatibility; rejected with
    /// [`LayoutError::NotSupported`].
    Ellipsis,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    NotSupported(&'static str),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::NotSupported(what) => write!(f, "not supported: {}", what),
        }
    }
}

impl std::error::Error for LayoutError {}

/// A laid-out canvas plus per-row translation metadata.
#[derive(Debug, Clone)]
pub struct LaidOut {
    pub canvas: Canvas,
    /// Per row: columns padded (positive) or trimmed (negative) at the left
    /// edge relative to the logical line.
    pub translations: Vec<isize>,
}

/// Lay out flat text with run-length attributes (`attrs` holds byte
/// lengths) into rows of `cols` columns.
pub fn layout(
    text: &str,
    attrs: &[(Attr, usize)],
    cols: usize,
    wrap: Wrap,
    align: Align,
) -> Result<LaidOut, LayoutError> {
    if matches!(wrap, Wrap::Ellipsis) {
        return Err(LayoutError::NotSupported("ellipsis wrap mode"));
    }
    let cols = cols.max(1);
    let mut rows = Vec::new();
    let mut translations = Vec::new();

    let mut offset = 0;
    for line in text.split('\n') {
        let line_runs = runs_slice(attrs, offset, offset + line.len());
        offset += line.len() + 1;

        if matches!(wrap, Wrap::Clip) {
            let row = spans_for(line, &line_runs, 0..line.len());
            let line_cols = row.cols();
            let t = translation(cols, line_cols, align);
            rows.push(position_row(row, t, cols));
            translations.push(t);
            continue;
        }

        for range in break_line(line, cols, wrap) {
            let row = spans_for(line, &line_runs, range);
            let pad = translation(cols, row.cols(), align).max(0);
            rows.push(position_row(row, pad, cols));
            translations.push(pad);
        }
    }

    trace!(rows = rows.len(), cols, ?wrap, ?align, "laid out");
    Ok(LaidOut {
        canvas: Canvas::from_rows(cols, rows),
        translations,
    })
}

/// Left-edge offset of a line of `line_cols` columns in a `cols` row.
/// Negative means the line is wider and gets trimmed (clip mode only).
fn translation(cols: usize, line_cols: usize, align: Align) -> isize {
    let free = cols as isize - line_cols as isize;
    match align {
        Align::Left => 0,
        Align::Right => free,
        Align::Center => free / 2,
    }
}

/// Apply a translation to a row and normalize it to exactly `cols`.
fn position_row(row: Row, t: isize, cols: usize) -> Row {
    if t < 0 {
        let canvas = Canvas::from_row(row);
        let sliced = canvas.slice_cols((-t) as usize, cols);
        return sliced.rows().first().cloned().unwrap_or_default();
    }
    let mut out = Row::new();
    if t > 0 {
        out.push(Span::blank(t as usize));
    }
    for span in row.spans() {
        out.push(span.clone());
    }
    out
}

/// Break one logical line into byte ranges, one per physical row.
fn break_line(line: &str, cols: usize, wrap: Wrap) -> Vec<Range<usize>> {
    if line.is_empty() {
        return vec![0..0];
    }
    let gs: Vec<(usize, &str, usize)> = line
        .grapheme_indices(true)
        .map(|(i, g)| (i, g, grapheme_cols(g)))
        .collect();

    let mut segs = Vec::new();
    let mut start = 0;
    let mut w = 0;
    let mut last_space: Option<usize> = None;
    let mut k = 0;
    while k < gs.len() {
        let (i, g, gw) = gs[k];
        if w + gw > cols && w > 0 {
            if matches!(wrap, Wrap::Space) {
                if g == " " {
                    // Break here; the breaking space itself is dropped.
                    segs.push(start..i);
                    start = i + g.len();
                    w = 0;
                    last_space = None;
                    k += 1;
                    continue;
                }
                if let Some(sp) = last_space {
                    segs.push(start..sp);
                    start = sp + 1;
                    w = str_cols(&line[start..i]);
                    last_space = None;
                    // Re-test the current grapheme against the new row.
                    continue;
                }
            }
            segs.push(start..i);
            start = i;
            w = 0;
            last_space = None;
            continue;
        }
        if g == " " {
            last_space = Some(i);
        }
        w += gw;
        k += 1;
    }
    segs.push(start..line.len());
    segs
}

/// Build a row of attributed spans for `range` of `line`, with `runs`
/// holding the byte-run attributes of the whole line.
fn spans_for(line: &str, runs: &[(Attr, usize)], range: Range<usize>) -> Row {
    let mut row = Row::new();
    let mut pos = 0;
    for (attr, len) in runs {
        let run_start = pos;
        let run_end = pos + len;
        pos = run_end;
        if run_end <= range.start {
            continue;
        }
        if run_start >= range.end {
            break;
        }
        let s = run_start.max(range.start);
        let e = run_end.min(range.end);
        row.push(Span::new(attr.clone(), &line[s..e]));
    }
    row
}

/// Slice byte runs down to `[start, end)` of the underlying text.
fn runs_slice(attrs: &[(Attr, usize)], start: usize, end: usize) -> Vec<(Attr, usize)> {
    let mut out = Vec::new();
    let mut pos = 0;
    for (attr, len) in attrs {
        let run_start = pos;
        let run_end = pos + len;
        pos = run_end;
        if run_end <= start {
            continue;
        }
        if run_start >= end {
            break;
        }
        let s = run_start.max(start);
        let e = run_end.min(end);
        out.push((attr.clone(), e - s));
    }
    let covered: usize = out.iter().map(|(_, l)| l).sum();
    if covered < end - start {
        out.push((Attr::None, end - start - covered));
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
