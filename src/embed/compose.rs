//! The canvas compositor: replaces placeholder runs in a laid-out canvas
//! with slices of the embedded objects' own canvases.
//!
//! One pass over the physical rows, carrying at most one transient tail (the
//! unrendered right portion of an object split by wrap or clip) into the
//! next row. Rows without placeholders are batched and flushed as a single
//! slice of the underlying canvas.

use tracing::trace;

use crate::layout::{LaidOut, Wrap};
use crate::text::canvas::{Canvas, Row, Span};
use crate::text::measure::{PLACEHOLDER_CONT, PLACEHOLDER_HEAD};
use crate::text::style::Attr;

use super::EmbedEntry;

/// The unrendered remainder of one embedded object's canvas, carried to the
/// next physical row. Never outlives a single `compose` call.
struct Tail {
    remaining: usize,
    canvas: Canvas,
}

pub(crate) fn compose(
    laid: &LaidOut,
    registry: &[EmbedEntry],
    wrap: Wrap,
    focus: bool,
) -> Canvas {
    let canvas = &laid.canvas;
    let clipped = matches!(wrap, Wrap::Clip);
    let mut pieces: Vec<Canvas> = Vec::new();
    // Consecutive rows needing no substitution: (first row, count).
    let mut pending: Option<(usize, usize)> = None;
    let mut tail: Option<Tail> = None;

    for (r, row) in canvas.rows().iter().enumerate() {
        if clipped {
            // Clip never carries a tail across rows; each row re-resolves
            // whether it begins inside a clipped object.
            tail = clip_tail(row, laid.translations.get(r).copied().unwrap_or(0), registry, focus);
        }
        if let Some(t) = tail.take() {
            flush_plain(&mut pieces, canvas, &mut pending);
            let (piece, next) = embed_row(row, registry, focus, Some(t));
            pieces.push(piece);
            tail = next;
        } else if has_placeholder(row) {
            flush_plain(&mut pieces, canvas, &mut pending);
            let (piece, next) = embed_row(row, registry, focus, None);
            pieces.push(piece);
            tail = next;
        } else {
            pending = match pending {
                Some((first, n)) => Some((first, n + 1)),
                None => Some((r, 1)),
            };
        }
    }
    flush_plain(&mut pieces, canvas, &mut pending);

    trace!(pieces = pieces.len(), "composed");
    Canvas::vstack(pieces)
}

fn flush_plain(pieces: &mut Vec<Canvas>, canvas: &Canvas, pending: &mut Option<(usize, usize)>) {
    if let Some((first, n)) = pending.take() {
        pieces.push(canvas.slice_rows(first, n));
    }
}

fn has_placeholder(row: &Row) -> bool {
    row.spans()
        .iter()
        .any(|s| {
            s.attr.object_id().is_some()
                && memchr::memchr(PLACEHOLDER_HEAD as u8, s.text.as_bytes()).is_some()
        })
}

/// In clip mode, decide whether this row begins inside an object whose head
/// was trimmed off by alignment, and if so how much of it is still owed.
/// A fully clipped object yields nothing.
fn clip_tail(row: &Row, t: isize, registry: &[EmbedEntry], focus: bool) -> Option<Tail> {
    if row.first_char() != Some(PLACEHOLDER_CONT) {
        return None;
    }
    let first = row.spans().iter().find(|s| s.cols() > 0)?;
    let id = first.attr.object_id()?;
    let entry = registry.get(id)?;
    let left_trim = usize::try_from(-t).ok()?;
    let hidden = left_trim.saturating_sub(entry.start);
    let remaining = entry.width.saturating_sub(hidden);
    if remaining == 0 {
        return None;
    }
    Some(Tail {
        remaining,
        canvas: entry.widget.render(entry.width, focus),
    })
}

/// Substitute embedded content into one row. Returns the finished row piece
/// and the tail owed to the next row, if the last object did not fully fit.
fn embed_row(
    row: &Row,
    registry: &[EmbedEntry],
    focus: bool,
    tail: Option<Tail>,
) -> (Canvas, Option<Tail>) {
    let spans = row.spans();
    let mut pieces: Vec<Canvas> = Vec::new();
    let mut plain = Row::new();
    let mut next_tail = None;
    let mut idx = 0;

    if let Some(t) = tail {
        // Alignment may put padding spaces before the continuation markers;
        // that only happens for non-clip wrap.
        if let (Some(pad), Some(cont)) = (spans.get(idx), spans.get(idx + 1)) {
            if is_blank(pad) && cont.text.starts_with(PLACEHOLDER_CONT) {
                pieces.push(Canvas::from_row(std::iter::once(pad.clone()).collect()));
                idx += 1;
            }
        }
        if let Some(cont) = spans.get(idx) {
            if cont.text.starts_with(PLACEHOLDER_CONT) {
                let shown = cont.cols();
                let consumed = t.canvas.cols() - t.remaining;
                pieces.push(t.canvas.slice_cols(consumed, shown));
                idx += 1;
                if idx == spans.len() {
                    if shown < t.remaining {
                        // Still not fully emitted; carry the rest onward.
                        next_tail = Some(Tail {
                            remaining: t.remaining - shown,
                            canvas: t.canvas,
                        });
                    }
                    return (Canvas::hjoin(pieces), next_tail);
                }
            }
        }
    }

    while idx < spans.len() {
        let span = &spans[idx];
        idx += 1;
        let Some(id) = span.attr.object_id() else {
            plain.push(span.clone());
            continue;
        };
        if plain.cols() > 0 {
            pieces.push(Canvas::from_row(std::mem::take(&mut plain)));
        }
        let Some(entry) = registry.get(id) else {
            continue;
        };
        let shown = span.cols();
        // The object always renders at its full declared width and is
        // sliced, never asked to render narrower.
        let canvas = entry.widget.render(entry.width, focus);
        pieces.push(canvas.slice_cols(0, shown));
        if shown < entry.width {
            next_tail = Some(Tail {
                remaining: entry.width - shown,
                canvas,
            });
        }
    }
    if plain.cols() > 0 {
        pieces.push(Canvas::from_row(plain));
    }
    (Canvas::hjoin(pieces), next_tail)
}

fn is_blank(span: &Span) -> bool {
    span.attr == Attr::None && !span.text.is_empty() && span.text.bytes().all(|b| b == b' ')
}

#[cfg(test)]
#[path = "../../tests/unit/embed/compose.rs"]
mod tests;
