//! A one-row hyperlink widget for embedding into text.
//!
//! The widget itself only renders a labeled span carrying link metadata;
//! the OSC 8 escape wrapping happens at emission time (see [`crate::term`]),
//! orthogonal to layout.

use std::fmt;

use compact_str::CompactString;
use unicode_segmentation::UnicodeSegmentation;

use crate::embed::EmbedWidget;
use crate::text::canvas::{Canvas, Row, Span};
use crate::text::measure::{grapheme_cols, str_cols};
use crate::text::style::Attr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HyperlinkError {
    EmptyUri,
    /// URIs are restricted to printable ASCII, as the escape sequence
    /// carries them verbatim.
    InvalidByte(u8),
    MultilineLabel,
}

impl fmt::Display for HyperlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HyperlinkError::EmptyUri => write!(f, "URI is empty"),
            HyperlinkError::InvalidByte(b) => {
                write!(f, "invalid byte 0x{:02x} in URI", b)
            }
            HyperlinkError::MultilineLabel => write!(f, "label spans multiple lines"),
        }
    }
}

impl std::error::Error for HyperlinkError {}

#[derive(Debug)]
pub struct Hyperlink {
    uri: CompactString,
    attr: Attr,
    label: CompactString,
}

impl Hyperlink {
    /// `label` defaults to the URI itself.
    pub fn new(uri: &str, attr: Attr, label: Option<&str>) -> Result<Self, HyperlinkError> {
        if uri.is_empty() {
            return Err(HyperlinkError::EmptyUri);
        }
        if let Some(b) = uri.bytes().find(|b| !(32..127).contains(b)) {
            return Err(HyperlinkError::InvalidByte(b));
        }
        let label = label.unwrap_or(uri);
        if label.contains('\n') {
            return Err(HyperlinkError::MultilineLabel);
        }
        Ok(Self {
            uri: uri.into(),
            attr,
            label: label.into(),
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl EmbedWidget for Hyperlink {
    fn render(&self, cols: usize, _focus: bool) -> Canvas {
        let text = truncate(&self.label, cols);
        let mut row = Row::new();
        row.push(Span::new(self.attr.clone(), text).with_link(self.uri.clone()));
        Canvas::from_rows(cols, vec![row])
    }
}

/// Fit `s` into `cols` columns, ending with an ellipsis when it does not.
fn truncate(s: &str, cols: usize) -> CompactString {
    if str_cols(s) <= cols {
        return s.into();
    }
    let target = cols.saturating_sub(1);
    let mut out = CompactString::default();
    let mut w = 0;
    for g in s.graphemes(true) {
        let gw = grapheme_cols(g);
        if w + gw > target {
            break;
        }
        out.push_str(g);
        w += gw;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "../tests/unit/hyperlink.rs"]
mod tests;
