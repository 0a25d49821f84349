use super::*;

fn row(spans: Vec<Span>) -> Row {
    spans.into_iter().collect()
}

#[test]
fn push_merges_adjacent_spans_with_same_attr() {
    let mut r = Row::new();
    r.push(Span::new(Attr::tag("a"), "ab"));
    r.push(Span::new(Attr::tag("a"), "cd"));
    r.push(Span::new(Attr::None, "ef"));
    r.push(Span::new(Attr::None, ""));
    assert_eq!(r.spans().len(), 2);
    assert_eq!(r.text(), "abcdef");
}

#[test]
fn from_rows_pads_and_slices_to_exact_width() {
    let c = Canvas::from_rows(
        4,
        vec![
            row(vec![Span::new(Attr::None, "ab")]),
            row(vec![Span::new(Attr::None, "abcdef")]),
        ],
    );
    assert_eq!(c.cols(), 4);
    assert_eq!(c.text_lines(), vec!["ab  ", "abcd"]);
}

#[test]
fn slice_rows_takes_a_band() {
    let c = Canvas::from_rows(
        2,
        vec![
            row(vec![Span::new(Attr::None, "aa")]),
            row(vec![Span::new(Attr::None, "bb")]),
            row(vec![Span::new(Attr::None, "cc")]),
        ],
    );
    let band = c.slice_rows(1, 2);
    assert_eq!(band.text_lines(), vec!["bb", "cc"]);
    assert_eq!(band.cols(), 2);
}

#[test]
fn slice_cols_preserves_attributes() {
    let c = Canvas::from_rows(
        4,
        vec![row(vec![
            Span::new(Attr::tag("a"), "ab"),
            Span::new(Attr::None, "cd"),
        ])],
    );
    let s = c.slice_cols(1, 2);
    assert_eq!(s.text_lines(), vec!["bc"]);
    let spans = s.rows()[0].spans();
    assert_eq!(spans[0].attr, Attr::tag("a"));
    assert_eq!(spans[0].text, "b");
    assert_eq!(spans[1].attr, Attr::None);
    assert_eq!(spans[1].text, "c");
}

#[test]
fn slice_cols_pads_past_right_edge() {
    let c = Canvas::text_row(Attr::None, "ab");
    let s = c.slice_cols(1, 3);
    assert_eq!(s.cols(), 3);
    assert_eq!(s.text_lines(), vec!["b  "]);
}

#[test]
fn hjoin_concatenates_single_rows() {
    let joined = Canvas::hjoin(vec![
        Canvas::text_row(Attr::None, "ab"),
        Canvas::text_row(Attr::tag("x"), "cde"),
    ]);
    assert_eq!(joined.cols(), 5);
    assert_eq!(joined.text_lines(), vec!["abcde"]);
}

#[test]
fn vstack_pads_to_widest_piece() {
    let stacked = Canvas::vstack(vec![
        Canvas::text_row(Attr::None, "abc"),
        Canvas::text_row(Attr::None, "d"),
    ]);
    assert_eq!(stacked.cols(), 3);
    assert_eq!(stacked.text_lines(), vec!["abc", "d  "]);
}

#[test]
fn links_survive_slicing() {
    let mut r = Row::new();
    r.push(Span::new(Attr::None, "abcd").with_link("https://example.com"));
    let c = Canvas::from_row(r);
    let s = c.slice_cols(1, 2);
    assert_eq!(
        s.rows()[0].spans()[0].link.as_deref(),
        Some("https://example.com")
    );
}
