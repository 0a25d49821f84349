//! Cell canvases: attributed rows of text plus the join/trim primitives the
//! compositor is built on.
//!
//! A canvas always has an exact column count; every row is padded or sliced
//! to it. Rows are runs of [`Span`]s rather than per-cell grids, which keeps
//! joins and slices cheap and preserves run-length attributes end to end.

use compact_str::CompactString;

use super::measure;
use super::style::Attr;

/// One run of cells sharing a display attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub attr: Attr,
    pub text: CompactString,
    /// Hyperlink URI covering this run, if any.
    pub link: Option<CompactString>,
}

impl Span {
    pub fn new(attr: Attr, text: impl Into<CompactString>) -> Self {
        Self {
            attr,
            text: text.into(),
            link: None,
        }
    }

    pub fn with_link(mut self, uri: impl Into<CompactString>) -> Self {
        self.link = Some(uri.into());
        self
    }

    pub fn blank(cols: usize) -> Self {
        Self::new(Attr::None, " ".repeat(cols))
    }

    pub fn cols(&self) -> usize {
        measure::str_cols(&self.text)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    spans: Vec<Span>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a span, merging it into the previous one when attribute and
    /// link match. Empty spans are dropped.
    pub fn push(&mut self, span: Span) {
        if span.text.is_empty() {
            return;
        }
        if let Some(last) = self.spans.last_mut() {
            if last.attr == span.attr && last.link == span.link {
                last.text.push_str(&span.text);
                return;
            }
        }
        self.spans.push(span);
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn cols(&self) -> usize {
        self.spans.iter().map(Span::cols).sum()
    }

    /// Concatenated row text, attributes dropped.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for s in &self.spans {
            out.push_str(&s.text);
        }
        out
    }

    /// First cell's character, if the row has visible content.
    pub fn first_char(&self) -> Option<char> {
        self.spans
            .iter()
            .find(|s| s.cols() > 0)
            .and_then(|s| s.text.chars().next())
    }
}

impl FromIterator<Span> for Row {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        let mut row = Row::new();
        for span in iter {
            row.push(span);
        }
        row
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Canvas {
    cols: usize,
    rows: Vec<Row>,
}

impl Canvas {
    pub fn blank(cols: usize, height: usize) -> Self {
        let rows = (0..height).map(|_| Row::new()).collect();
        Self::from_rows(cols, rows)
    }

    /// Build a canvas of exactly `cols` columns; rows wider than that are
    /// sliced, narrower ones padded with blank cells.
    pub fn from_rows(cols: usize, rows: Vec<Row>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| normalize_row(row, cols))
            .collect();
        Self { cols, rows }
    }

    /// Single-row canvas sized to the row's own width.
    pub fn from_row(row: Row) -> Self {
        let cols = row.cols();
        Self {
            cols,
            rows: vec![row],
        }
    }

    /// Single-row canvas holding one attributed run, sized to its width.
    pub fn text_row(attr: Attr, text: impl Into<CompactString>) -> Self {
        let mut row = Row::new();
        row.push(Span::new(attr, text));
        Self::from_row(row)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn text_lines(&self) -> Vec<String> {
        self.rows.iter().map(Row::text).collect()
    }

    /// Rows `[top, top + count)` as a new canvas.
    pub fn slice_rows(&self, top: usize, count: usize) -> Self {
        let end = (top + count).min(self.rows.len());
        let rows = self.rows.get(top..end).unwrap_or_default().to_vec();
        Self {
            cols: self.cols,
            rows,
        }
    }

    /// Columns `[start, start + count)` of every row as a new canvas,
    /// padded with blank cells past the right edge.
    pub fn slice_cols(&self, start: usize, count: usize) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| slice_row(row, start, count))
            .collect();
        Self::from_rows(count, rows)
    }

    /// Join single-row canvases left to right into one row.
    pub fn hjoin(pieces: Vec<Canvas>) -> Self {
        let cols = pieces.iter().map(|c| c.cols).sum();
        let mut row = Row::new();
        for piece in &pieces {
            match piece.rows.first() {
                Some(r) => {
                    for s in r.spans() {
                        row.push(s.clone());
                    }
                }
                None => row.push(Span::blank(piece.cols)),
            }
        }
        Self::from_rows(cols, vec![row])
    }

    /// Stack canvases top to bottom; the result is as wide as the widest
    /// piece.
    pub fn vstack(pieces: Vec<Canvas>) -> Self {
        let cols = pieces.iter().map(|c| c.cols).max().unwrap_or(0);
        let mut rows = Vec::new();
        for piece in pieces {
            rows.extend(piece.rows);
        }
        Self::from_rows(cols, rows)
    }
}

fn normalize_row(row: Row, cols: usize) -> Row {
    let w = row.cols();
    if w > cols {
        return slice_row(&row, 0, cols);
    }
    let mut row = row;
    if w < cols {
        row.push(Span::blank(cols - w));
    }
    row
}

fn slice_row(row: &Row, start: usize, count: usize) -> Row {
    let end = start + count;
    let mut out = Row::new();
    let mut pos = 0;
    let mut taken = 0;
    for span in row.spans() {
        if taken >= count {
            break;
        }
        let w = span.cols();
        if w == 0 {
            // A zero-width span follows whichever glyph precedes it.
            if (pos > start || start == 0) && pos <= end {
                out.push(span.clone());
            }
            continue;
        }
        let span_start = pos;
        let span_end = pos + w;
        pos = span_end;
        if span_end <= start {
            continue;
        }
        if span_start >= end {
            break;
        }
        let skip = start.saturating_sub(span_start);
        let want = (count - taken).min(w - skip);
        let text = measure::slice_cols(&span.text, skip, want);
        taken += measure::str_cols(&text);
        out.push(Span {
            attr: span.attr.clone(),
            text: text.into(),
            link: span.link.clone(),
        });
    }
    if taken < count {
        out.push(Span::blank(count - taken));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/canvas.rs"]
mod tests;
