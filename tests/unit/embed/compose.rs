use super::*;

use std::rc::Rc;

use crate::embed::{EmbedText, EmbedWidget};
use crate::layout::Align;
use crate::markup::Markup;

struct Fill(char);

impl EmbedWidget for Fill {
    fn render(&self, cols: usize, _focus: bool) -> Canvas {
        Canvas::text_row(Attr::None, self.0.to_string().repeat(cols))
    }
}

struct FocusMark;

impl EmbedWidget for FocusMark {
    fn render(&self, cols: usize, focus: bool) -> Canvas {
        let c = if focus { 'F' } else { 'u' };
        Canvas::text_row(Attr::None, c.to_string().repeat(cols))
    }
}

fn text(markup: Markup) -> EmbedText {
    EmbedText::new(&markup).unwrap()
}

fn fill(width: i32, c: char) -> Markup {
    Markup::embed(width, Rc::new(Fill(c)))
}

#[test]
fn rows_without_objects_pass_through() {
    let t = text(Markup::text("one\ntwo"));
    let c = t.render(4, false);
    assert_eq!(c.text_lines(), vec!["one ", "two "]);
}

#[test]
fn object_is_substituted_inline() {
    let t = text(Markup::list(vec!["ab".into(), fill(3, 'x'), "cd".into()]));
    let c = t.render(8, false);
    assert_eq!(c.text_lines(), vec!["abxxxcd "]);
}

#[test]
fn two_objects_on_one_row() {
    let t = text(Markup::list(vec![
        fill(2, 'x'),
        "-".into(),
        fill(2, 'y'),
    ]));
    let c = t.render(6, false);
    assert_eq!(c.text_lines(), vec!["xx-yy "]);
}

#[test]
fn tail_carries_across_wrapped_rows() {
    let mut t = text(Markup::list(vec!["ab".into(), fill(10, 'x')]));
    t.set_wrap(Wrap::Any).unwrap();
    let c = t.render(4, false);
    assert_eq!(c.text_lines(), vec!["abxx", "xxxx", "xxxx"]);
    // Every declared column of the object is emitted exactly once.
    let total: usize = c
        .text_lines()
        .iter()
        .map(|l| l.matches('x').count())
        .sum();
    assert_eq!(total, 10);
}

#[test]
fn space_wrap_moves_an_unsplit_object_down_whole() {
    let t = text(Markup::list(vec!["hell ".into(), fill(3, 'x')]));
    let c = t.render(6, false);
    assert_eq!(c.text_lines(), vec!["hell  ", "xxx   "]);
}

#[test]
fn clip_truncates_an_object_at_the_right_edge() {
    let mut t = text(Markup::list(vec!["ab".into(), fill(3, 'x'), "cd".into()]));
    t.set_wrap(Wrap::Clip).unwrap();
    let c = t.render(4, false);
    assert_eq!(c.text_lines(), vec!["abxx"]);
}

#[test]
fn clip_resumes_an_object_cut_on_the_left() {
    let mut t = text(Markup::list(vec!["a".into(), fill(3, 'x'), "ef".into()]));
    t.set_wrap(Wrap::Clip).unwrap();
    t.set_align(Align::Right);
    // Line is "a###ef" (6 cols); at width 4 the left two columns go, so
    // the visible part starts inside the object.
    let c = t.render(4, false);
    assert_eq!(c.text_lines(), vec!["xxef"]);
}

#[test]
fn clip_center_resumes_a_continuation_row() {
    let mut t = text(Markup::list(vec!["a".into(), fill(4, 'x'), "efg".into()]));
    t.set_wrap(Wrap::Clip).unwrap();
    t.set_align(Align::Center);
    // Line is "a####efg" (8 cols); centering at width 4 trims two columns
    // off the left, cutting past the object's head marker.
    let c = t.render(4, false);
    assert_eq!(c.text_lines(), vec!["xxxe"]);
}

#[test]
fn clip_rows_do_not_leak_tails_to_the_next_line() {
    let mut t = text(Markup::list(vec![
        "ab".into(),
        fill(4, 'x'),
        "\ncd".into(),
    ]));
    t.set_wrap(Wrap::Clip).unwrap();
    let c = t.render(4, false);
    assert_eq!(c.text_lines(), vec!["abxx", "cd  "]);
}

#[test]
fn aligned_padding_precedes_a_continuation() {
    let mut t = text(Markup::list(vec!["abc".into(), fill(4, 'x')]));
    t.set_wrap(Wrap::Any).unwrap();
    t.set_align(Align::Right);
    let c = t.render(4, false);
    assert_eq!(c.text_lines(), vec!["abcx", " xxx"]);
}

#[test]
fn focus_reaches_the_widget() {
    let t = text(Markup::list(vec![Markup::embed(2, Rc::new(FocusMark))]));
    assert_eq!(t.render(2, true).text_lines(), vec!["FF"]);
    assert_eq!(t.render(2, false).text_lines(), vec!["uu"]);
}
