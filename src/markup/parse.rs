use regex::{Captures, Regex};

use super::Markup;

/// Map regular-expression matches over a plain string into markup.
///
/// Scans left to right; the earliest match across `patterns` wins, ties
/// broken by pattern order. Unmatched stretches become plain text, each
/// match becomes `repl(pattern_index, &captures)`. Pure function,
/// independent of the compositor.
pub fn parse_text<F>(text: &str, patterns: &[Regex], mut repl: F) -> Markup
where
    F: FnMut(usize, &Captures<'_>) -> Markup,
{
    let mut items = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let mut best: Option<(usize, Captures<'_>)> = None;
        for (pi, re) in patterns.iter().enumerate() {
            let Some(caps) = re.captures_at(text, pos) else {
                continue;
            };
            let start = caps.get(0).map(|m| m.start());
            let best_start = best
                .as_ref()
                .and_then(|(_, c)| c.get(0).map(|m| m.start()));
            match (start, best_start) {
                (Some(s), Some(b)) if s < b => best = Some((pi, caps)),
                (Some(_), None) => best = Some((pi, caps)),
                _ => {}
            }
        }
        let Some((pi, caps)) = best else {
            items.push(Markup::text(&text[pos..]));
            break;
        };
        let Some(m) = caps.get(0) else {
            break;
        };
        if m.start() > pos {
            items.push(Markup::text(&text[pos..m.start()]));
        }
        if m.is_empty() {
            // An empty match cannot consume anything; pass one character
            // through and move on.
            let step = text[m.start()..].chars().next().map_or(1, char::len_utf8);
            items.push(Markup::text(&text[m.start()..m.start() + step]));
            pos = m.start() + step;
            continue;
        }
        items.push(repl(pi, &caps));
        pos = m.end();
    }
    match items.len() {
        0 => Markup::text(""),
        1 => items.remove(0),
        _ => Markup::List(items),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/markup/parse.rs"]
mod tests;
