//! Embedded-object registry and the text-with-embedded-content engine.
//!
//! [`EmbedText`] owns the flattened markup, the registry of embedded
//! objects, and the wrap/align modes. Flattening, layout and placeholder
//! location run once per [`EmbedText::set_text`]; compositing runs on every
//! [`EmbedText::render`], reusing the registry.

mod compose;

use std::rc::Rc;

use tracing::debug;

use crate::layout::{self, Align, LayoutError, Wrap};
use crate::markup::{flatten, Markup, MarkupError};
use crate::text::canvas::Canvas;
use crate::text::measure::{str_cols, PLACEHOLDER_HEAD};
use crate::text::style::Attr;

/// Content that can be embedded into text. Rendering must yield a canvas of
/// exactly `(cols, 1)` cells.
pub trait EmbedWidget {
    fn render(&self, cols: usize, focus: bool) -> Canvas;

    /// Whether the widget honors fixed `(cols, 1)` rendering. Widgets that
    /// return `false` are rejected at flatten time.
    fn supports_fixed(&self) -> bool {
        true
    }
}

/// One embedded object: the caller-owned widget, its declared width, and
/// the column offset of its placeholder from the start of its *unwrapped*
/// source line. `start` is derived state, recomputed after every text
/// change; alignment never affects it.
pub struct EmbedEntry {
    pub widget: Rc<dyn EmbedWidget>,
    pub width: usize,
    pub start: usize,
}

impl std::fmt::Debug for EmbedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbedEntry")
            .field("width", &self.width)
            .field("start", &self.start)
            .finish()
    }
}

/// Styled text interleaved with fixed-width embedded objects.
#[derive(Debug)]
pub struct EmbedText {
    text: String,
    attrs: Vec<(Attr, usize)>,
    registry: Vec<EmbedEntry>,
    wrap: Wrap,
    align: Align,
}

impl EmbedText {
    /// Build from markup with `Wrap::Space` / `Align::Left`. All derived
    /// state is computed before the value exists; there is no partially
    /// constructed instance to guard against.
    pub fn new(markup: &Markup) -> Result<Self, MarkupError> {
        let mut this = Self {
            text: String::new(),
            attrs: Vec::new(),
            registry: Vec::new(),
            wrap: Wrap::Space,
            align: Align::Left,
        };
        this.set_text(markup)?;
        Ok(this)
    }

    /// Replace the content. On error the previous content is untouched.
    pub fn set_text(&mut self, markup: &Markup) -> Result<(), MarkupError> {
        let mut flat = flatten(markup)?;
        locate(&flat.text, &mut flat.registry);
        debug!(
            bytes = flat.text.len(),
            objects = flat.registry.len(),
            "text installed"
        );
        self.text = flat.text;
        self.attrs = flat.attrs;
        self.registry = flat.registry;
        Ok(())
    }

    /// `Wrap::Ellipsis` is not supported for embedding and leaves the state
    /// unchanged.
    pub fn set_wrap(&mut self, wrap: Wrap) -> Result<(), LayoutError> {
        if matches!(wrap, Wrap::Ellipsis) {
            return Err(LayoutError::NotSupported("ellipsis wrap mode"));
        }
        self.wrap = wrap;
        Ok(())
    }

    pub fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    pub fn wrap(&self) -> Wrap {
        self.wrap
    }

    pub fn align(&self) -> Align {
        self.align
    }

    /// The flattened text (placeholder runs included) and its run-length
    /// attributes; placeholder runs carry `Attr::Object(id)`.
    pub fn get_text(&self) -> (&str, &[(Attr, usize)]) {
        (&self.text, &self.attrs)
    }

    /// Embedded objects in encounter order.
    pub fn embedded(&self) -> impl Iterator<Item = (&Rc<dyn EmbedWidget>, usize)> + '_ {
        self.registry.iter().map(|e| (&e.widget, e.width))
    }

    pub(crate) fn registry(&self) -> &[EmbedEntry] {
        &self.registry
    }

    /// Render into a canvas of `cols` columns. Pure with respect to `self`;
    /// nothing is cached across calls.
    pub fn render(&self, cols: usize, focus: bool) -> Canvas {
        let laid = match layout::layout(&self.text, &self.attrs, cols, self.wrap, self.align) {
            Ok(laid) => laid,
            // set_wrap rejects unsupported modes; nothing reaches here
            // with one.
            Err(_) => return Canvas::blank(cols.max(1), 1),
        };
        debug!(cols, rows = laid.canvas.height(), focus, "render");
        compose::compose(&laid, &self.registry, self.wrap, focus)
    }
}

/// Record, for each registry entry in order, the display-width offset of
/// its placeholder head marker from the start of its unwrapped source line.
/// Idempotent; independent of wrap and align.
fn locate(text: &str, registry: &mut [EmbedEntry]) {
    let mut entries = registry.iter_mut();
    for line in text.split('\n') {
        let bytes = line.as_bytes();
        let mut from = 0;
        while let Some(off) = memchr::memchr(PLACEHOLDER_HEAD as u8, &bytes[from..]) {
            let pos = from + off;
            let Some(entry) = entries.next() else {
                return;
            };
            entry.start = str_cols(&line[..pos]);
            from = pos + 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/embed/text.rs"]
mod tests;
