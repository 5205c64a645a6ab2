// Host-side tests for scroll progress and the hero mapping curves.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::scroll::*;

const EPS: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn scenario_mid_window() {
    let t = hero_transform(0.1);
    assert!(approx(t.opacity, 0.5), "{:?}", t);
    assert!(approx(t.scale, 0.95), "{:?}", t);
}

#[test]
fn scenario_past_window_clamps() {
    let t = hero_transform(0.3);
    assert_eq!(t.opacity, 0.0);
    assert!(approx(t.scale, 0.9));
}

#[test]
fn at_and_below_zero_is_identity() {
    for p in [0.0, -0.0, -0.1, -5.0, f32::NEG_INFINITY] {
        let t = hero_transform(p);
        assert_eq!(t.opacity, 1.0, "p={}", p);
        assert_eq!(t.scale, 1.0, "p={}", p);
    }
}

#[test]
fn at_and_above_window_end_is_fully_faded() {
    for p in [0.2, 0.2000001, 0.5, 1.0, 1.5, f32::INFINITY] {
        let t = hero_transform(p);
        assert!(approx(t.opacity, 0.0), "p={} {:?}", p, t);
        assert!(approx(t.scale, 0.9), "p={} {:?}", p, t);
    }
}

#[test]
fn inside_window_is_linear() {
    for i in 1..200 {
        let p = i as f32 * 0.001;
        let t = hero_transform(p);
        assert!(approx(t.opacity, 1.0 - 5.0 * p), "p={} {:?}", p, t);
        assert!(approx(t.scale, 1.0 - 0.5 * p), "p={} {:?}", p, t);
    }
}

#[test]
fn curves_are_monotone_non_increasing() {
    let mut prev = hero_transform(-0.05);
    for i in 0..=300 {
        let t = hero_transform(-0.05 + i as f32 * 0.001);
        assert!(t.opacity <= prev.opacity + EPS);
        assert!(t.scale <= prev.scale + EPS);
        prev = t;
    }
}

#[test]
fn mapping_is_idempotent() {
    let mapper = ScrollProgressMapper::default();
    for p in [0.0, 0.03, 0.1, 0.17, 0.2, 0.6, 1.0] {
        assert_eq!(mapper.map(p), mapper.map(p));
        assert_eq!(hero_transform(p), hero_transform(p));
    }
}

#[test]
fn nan_progress_maps_to_unscrolled_state() {
    assert_eq!(hero_transform(f32::NAN), HeroTransform::default());
}

#[test]
fn default_hero_transform_is_unscrolled() {
    assert_eq!(HeroTransform::default(), hero_transform(0.0));
}

#[test]
fn linear_map_clamps_instead_of_extrapolating() {
    let m = LinearMap::new([10.0, 20.0], [0.0, 100.0]);
    assert_eq!(m.apply(5.0), 0.0);
    assert_eq!(m.apply(10.0), 0.0);
    assert!(approx(m.apply(15.0), 50.0));
    assert_eq!(m.apply(20.0), 100.0);
    assert_eq!(m.apply(25.0), 100.0);
}

#[test]
fn linear_map_accepts_descending_input() {
    let m = LinearMap::new([1.0, 0.0], [0.0, 10.0]);
    assert_eq!(m.apply(1.0), 0.0);
    assert!(approx(m.apply(0.25), 7.5));
    assert_eq!(m.apply(-1.0), 10.0);
}

#[test]
fn degenerate_linear_map_returns_first_output() {
    let m = LinearMap::new([0.5, 0.5], [3.0, 7.0]);
    assert_eq!(m.apply(0.0), 3.0);
    assert_eq!(m.apply(0.9), 3.0);
}

#[test]
fn scroll_progress_normalizes_offset() {
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert!(approx(scroll_progress(500.0, 3000.0, 1000.0), 0.25));
    assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_clamps_overscroll() {
    // Elastic overscroll reports offsets outside the scrollable range.
    assert_eq!(scroll_progress(-80.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(2100.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn unscrollable_document_reports_zero() {
    assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(10.0, f64::NAN, 1000.0), 0.0);
}

#[test]
fn progress_uses_visible_viewport_height() {
    // 1000px window with a 15px horizontal scrollbar: clientHeight is 985.
    let (scroll_height, client_height) = (3000.0, 985.0);
    assert!(scroll_progress(2000.0, scroll_height, client_height) < 1.0);
    assert_eq!(scroll_progress(2015.0, scroll_height, client_height), 1.0);
}
