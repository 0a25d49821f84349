//! Markup: the nested description of styled text and embedded content, and
//! the flattener that turns it into layout input.

mod flatten;
mod parse;

pub use flatten::{flatten, Flattened, MarkupError};
pub use parse::parse_text;

use std::fmt;
use std::rc::Rc;

use compact_str::CompactString;

use crate::embed::EmbedWidget;
use crate::text::style::Attr;

/// A recursive description of styled text interleaved with embedded
/// objects. Lists flatten associatively: a list inside a list is equivalent
/// to splicing its elements in place.
pub enum Markup {
    Text(CompactString),
    Attributed(Attr, Box<Markup>),
    List(Vec<Markup>),
    /// An embedded object reserving `width` columns on one row. The width
    /// is validated at flatten time; zero and negative values are rejected
    /// rather than clamped.
    Embedded(i32, Rc<dyn EmbedWidget>),
}

impl Markup {
    pub fn text(s: impl Into<CompactString>) -> Self {
        Markup::Text(s.into())
    }

    pub fn styled(attr: Attr, inner: Markup) -> Self {
        Markup::Attributed(attr, Box::new(inner))
    }

    pub fn list(items: Vec<Markup>) -> Self {
        Markup::List(items)
    }

    pub fn embed(width: i32, widget: Rc<dyn EmbedWidget>) -> Self {
        Markup::Embedded(width, widget)
    }
}

impl fmt::Debug for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Markup::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Markup::Attributed(attr, inner) => {
                f.debug_tuple("Attributed").field(attr).field(inner).finish()
            }
            Markup::List(items) => f.debug_tuple("List").field(items).finish(),
            Markup::Embedded(w, _) => f.debug_tuple("Embedded").field(w).field(&"<widget>").finish(),
        }
    }
}

impl From<&str> for Markup {
    fn from(s: &str) -> Self {
        Markup::text(s)
    }
}

impl From<String> for Markup {
    fn from(s: String) -> Self {
        Markup::text(s)
    }
}

impl From<Vec<Markup>> for Markup {
    fn from(items: Vec<Markup>) -> Self {
        Markup::List(items)
    }
}
