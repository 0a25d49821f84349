//! inlay - line-oriented text layout and canvas compositing with inline
//! embedded content.
//!
//! Module map:
//! - text: cell measurement, styles, span canvases and their join/trim ops
//! - markup: the markup tree, flattening, regex-driven construction
//! - layout: wrapping, clipping and alignment into physical rows
//! - embed: the embedded-object registry and the compositor
//! - hyperlink: a one-row OSC 8 hyperlink widget
//! - term: ANSI emission of composed canvases
//! - tui: ratatui bridge (feature `tui`)

pub mod embed;
pub mod hyperlink;
pub mod layout;
pub mod logging;
pub mod markup;
pub mod term;
pub mod text;
#[cfg(feature = "tui")]
pub mod tui;

pub use embed::{EmbedText, EmbedWidget};
pub use hyperlink::Hyperlink;
pub use layout::{Align, Wrap};
pub use markup::{parse_text, Markup};
pub use text::canvas::Canvas;
pub use text::style::{Attr, Color, Mod, Style};
