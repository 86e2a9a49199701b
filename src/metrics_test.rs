#![allow(clippy::float_cmp)]

use super::*;
use crate::surface::{Call, Recorder};

fn measure(spec: &TextSpec) -> TextBox {
    let mut rec = Recorder::new(200.0, 200.0);
    match measure_text_box(&mut rec, spec) {
        Ok(tb) => tb,
        Err(e) => panic!("measure failed: {e}"),
    }
}

#[test]
fn box_edges_follow_anchor_and_metrics() {
    // 20px font: ascent 16, descent 4, 10px per char.
    let tb = measure(&TextSpec::new("abc", 50.0, 100.0).with_font("20px serif"));
    assert_eq!(tb.top, 84.0);
    assert_eq!(tb.bottom, 104.0);
    assert_eq!(tb.left, 50.0);
    assert_eq!(tb.right, 80.0);
}

#[test]
fn left_overhang_extends_box_left_of_anchor() {
    // 20px font: 30px advance for three chars, glyphs start 6px left of x.
    let mut rec = Recorder::new(200.0, 200.0).with_left_overhang(6.0);
    let spec = TextSpec::new("abc", 50.0, 100.0).with_font("20px serif");
    let tb = match measure_text_box(&mut rec, &spec) {
        Ok(tb) => tb,
        Err(e) => panic!("measure failed: {e}"),
    };
    assert_eq!(tb.left, 44.0);
    assert_eq!(tb.right, 80.0);
    assert_eq!(tb.width, 36.0);
    assert_eq!(tb.horizontal_center, 62.0);
}

#[test]
fn box_invariants_hold_exactly() {
    for (msg, x, y, font) in [
        ("Hello", 10.0, 40.0, "16px sans-serif"),
        ("", 0.0, 0.0, "12px monospace"),
        ("wide text run", -35.5, 7.25, "33px serif"),
        ("x", 1e6, -1e6, "7px serif"),
    ] {
        let tb = measure(&TextSpec::new(msg, x, y).with_font(font));
        assert_eq!(tb.height, tb.bottom - tb.top);
        assert_eq!(tb.mid, tb.top + tb.height / 2.0);
        assert_eq!(tb.horizontal_center, tb.left + tb.width / 2.0);
        assert_eq!(tb.vertical_center, tb.mid);
    }
}

#[test]
fn font_is_applied_before_measuring() {
    let mut rec = Recorder::new(100.0, 100.0);
    let spec = TextSpec::new("hi", 0.0, 0.0).with_font("40px serif");
    assert!(measure_text_box(&mut rec, &spec).is_ok());

    let calls = rec.calls();
    let font_at = calls.iter().position(|c| matches!(c, Call::Font(_)));
    let measure_at = calls.iter().position(|c| matches!(c, Call::MeasureText(_)));
    assert!(font_at < measure_at);
}

#[test]
fn larger_font_yields_larger_box() {
    let small = measure(&TextSpec::new("hi", 0.0, 0.0).with_font("10px serif"));
    let large = measure(&TextSpec::new("hi", 0.0, 0.0).with_font("30px serif"));
    assert!(large.width > small.width);
    assert!(large.height > small.height);
}

#[test]
fn measuring_leaves_style_unchanged() {
    let mut rec = Recorder::new(100.0, 100.0);
    let before = rec.style().clone();
    let spec = TextSpec::new("hi", 0.0, 0.0).with_color("red").with_font("40px serif");
    assert!(measure_text_box(&mut rec, &spec).is_ok());
    assert_eq!(rec.style(), &before);
    assert_eq!(rec.depth(), 0);
    assert!(!rec.has_drawn());
}

#[test]
fn from_edges_derives_centers() {
    let tb = TextBox::from_edges(10.0, 30.0, 100.0, 140.0);
    assert_eq!(tb.height, 20.0);
    assert_eq!(tb.width, 40.0);
    assert_eq!(tb.mid, 20.0);
    assert_eq!(tb.horizontal_center, 120.0);
    assert_eq!(tb.vertical_center, tb.mid);
}
