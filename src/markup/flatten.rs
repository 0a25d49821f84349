use std::fmt;
use std::rc::Rc;

use crate::embed::EmbedEntry;
use crate::text::measure::{PLACEHOLDER_CONT, PLACEHOLDER_HEAD};
use crate::text::style::Attr;

use super::Markup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// Embedded width is zero or negative.
    InvalidWidth(i32),
    /// The widget cannot render at a fixed `(cols, 1)` size.
    Capability,
    /// Plain text contains a reserved placeholder marker.
    ReservedChar(char),
    /// User markup carries the reserved `Attr::Object` attribute.
    ReservedAttr,
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::InvalidWidth(w) => {
                write!(f, "embedded width must be positive (got: {})", w)
            }
            MarkupError::Capability => {
                write!(f, "widget does not support fixed one-row rendering")
            }
            MarkupError::ReservedChar(c) => {
                write!(f, "text contains reserved marker U+{:04X}", *c as u32)
            }
            MarkupError::ReservedAttr => write!(f, "attribute Attr::Object is reserved"),
        }
    }
}

impl std::error::Error for MarkupError {}

/// Flattened markup: flat text in which each embedded object is replaced by
/// a placeholder run, run-length attributes over that text (byte lengths),
/// and the registry of embedded objects in encounter order.
#[derive(Debug, Default)]
pub struct Flattened {
    pub text: String,
    pub attrs: Vec<(Attr, usize)>,
    pub registry: Vec<EmbedEntry>,
}

/// Flatten a markup tree. Pure: on error, nothing observable happened.
///
/// List elements inherit the enclosing attribute unless themselves tagged;
/// the registry index of each embedded object becomes the display attribute
/// of its placeholder run.
pub fn flatten(markup: &Markup) -> Result<Flattened, MarkupError> {
    let mut out = Flattened::default();
    walk(markup, &Attr::None, &mut out)?;
    Ok(out)
}

fn walk(markup: &Markup, ambient: &Attr, out: &mut Flattened) -> Result<(), MarkupError> {
    match markup {
        Markup::Text(s) => {
            if let Some(c) = find_reserved(s) {
                return Err(MarkupError::ReservedChar(c));
            }
            push_run(out, ambient.clone(), s);
        }
        Markup::Attributed(attr, inner) => {
            if matches!(attr, Attr::Object(_)) {
                return Err(MarkupError::ReservedAttr);
            }
            walk(inner, attr, out)?;
        }
        Markup::List(items) => {
            for item in items {
                walk(item, ambient, out)?;
            }
        }
        Markup::Embedded(width, widget) => {
            if *width <= 0 {
                return Err(MarkupError::InvalidWidth(*width));
            }
            if !widget.supports_fixed() {
                return Err(MarkupError::Capability);
            }
            let id = out.registry.len();
            let run = placeholder_run(*width as usize);
            push_run(out, Attr::Object(id), &run);
            out.registry.push(EmbedEntry {
                widget: Rc::clone(widget),
                width: *width as usize,
                start: 0,
            });
        }
    }
    Ok(())
}

fn placeholder_run(width: usize) -> String {
    let mut run = String::with_capacity(width);
    run.push(PLACEHOLDER_HEAD);
    for _ in 1..width {
        run.push(PLACEHOLDER_CONT);
    }
    run
}

fn push_run(out: &mut Flattened, attr: Attr, text: &str) {
    if text.is_empty() {
        return;
    }
    out.text.push_str(text);
    if let Some((last, len)) = out.attrs.last_mut() {
        if *last == attr {
            *len += text.len();
            return;
        }
    }
    out.attrs.push((attr, text.len()));
}

fn find_reserved(s: &str) -> Option<char> {
    memchr::memchr2(PLACEHOLDER_HEAD as u8, PLACEHOLDER_CONT as u8, s.as_bytes())
        .and_then(|i| s[i..].chars().next())
}

#[cfg(test)]
#[path = "../../tests/unit/markup/flatten.rs"]
mod tests;
