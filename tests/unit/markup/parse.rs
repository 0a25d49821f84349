use super::*;

use crate::text::style::Attr;

fn as_text(m: &Markup) -> &str {
    match m {
        Markup::Text(t) => t.as_str(),
        other => panic!("expected text, got {other:?}"),
    }
}

fn as_list(m: &Markup) -> &[Markup] {
    match m {
        Markup::List(items) => items,
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn no_match_yields_plain_text() {
    let re = [Regex::new(r"\d+").unwrap()];
    let m = parse_text("hello", &re, |_, _| unreachable!());
    assert_eq!(as_text(&m), "hello");
}

#[test]
fn empty_input_yields_empty_text() {
    let m = parse_text("", &[], |_, _| unreachable!());
    assert_eq!(as_text(&m), "");
}

#[test]
fn matches_become_replacements() {
    let re = [Regex::new(r"\d+").unwrap()];
    let m = parse_text("a1b22c", &re, |_, caps| {
        Markup::styled(Attr::tag("num"), Markup::text(&caps[0]))
    });
    let items = as_list(&m);
    assert_eq!(items.len(), 5);
    assert_eq!(as_text(&items[0]), "a");
    assert!(matches!(&items[1], Markup::Attributed(a, _) if *a == Attr::tag("num")));
    assert_eq!(as_text(&items[2]), "b");
    assert!(matches!(&items[3], Markup::Attributed(..)));
    assert_eq!(as_text(&items[4]), "c");
}

#[test]
fn earliest_match_wins_ties_by_pattern_order() {
    let re = [Regex::new("bc").unwrap(), Regex::new("ab").unwrap()];
    let mut hits = Vec::new();
    parse_text("xab", &re, |pi, caps| {
        hits.push((pi, caps[0].to_string()));
        Markup::text("")
    });
    // "ab" starts earlier than any "bc" match, so pattern 1 fires.
    assert_eq!(hits, vec![(1, "ab".to_string())]);

    let re = [Regex::new("a.").unwrap(), Regex::new("ab").unwrap()];
    let mut hits = Vec::new();
    parse_text("ab", &re, |pi, caps| {
        hits.push((pi, caps[0].to_string()));
        Markup::text("")
    });
    assert_eq!(hits, vec![(0, "ab".to_string())]);
}

#[test]
fn whole_input_match_yields_single_item() {
    let re = [Regex::new(r".+").unwrap()];
    let m = parse_text("abc", &re, |_, caps| {
        Markup::styled(Attr::tag("all"), Markup::text(&caps[0]))
    });
    assert!(matches!(&m, Markup::Attributed(a, _) if *a == Attr::tag("all")));
}

#[test]
fn empty_match_passes_one_char_through() {
    let re = [Regex::new(r"x*").unwrap()];
    let m = parse_text("ab", &re, |_, _| unreachable!());
    // Every position matches empty; characters pass through one by one.
    let items = as_list(&m);
    assert_eq!(items.len(), 2);
    assert_eq!(as_text(&items[0]), "a");
    assert_eq!(as_text(&items[1]), "b");
}

#[test]
fn captures_are_available_to_the_replacer() {
    let re = [Regex::new(r"\[(?<label>[^]]+)\]").unwrap()];
    let mut seen = Vec::new();
    parse_text("see [here] now", &re, |_, caps| {
        seen.push(caps["label"].to_string());
        Markup::text(&caps["label"])
    });
    assert_eq!(seen, vec!["here".to_string()]);
}
