// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_parameters_are_positive() {
    assert!(FOLLOWER_DAMPING > 0.0);
    assert!(FOLLOWER_STIFFNESS > 0.0);
    assert!(FOLLOWER_MASS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rest_thresholds_are_sub_frame() {
    assert!(FOLLOWER_REST_DELTA_PX > 0.0 && FOLLOWER_REST_DELTA_PX <= 1.0);
    assert!(FOLLOWER_REST_SPEED_PX_PER_SEC > 0.0);
    // Long enough for a slow frame, short enough to not skip visible motion.
    assert!(MAX_FRAME_DT_SEC > 1.0 / 30.0 && MAX_FRAME_DT_SEC <= 0.25);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hero_window_lies_inside_unit_range() {
    assert!(HERO_SCROLL_WINDOW[0] >= 0.0);
    assert!(HERO_SCROLL_WINDOW[1] <= 1.0);
    assert!(HERO_SCROLL_WINDOW[0] < HERO_SCROLL_WINDOW[1]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hero_curves_fade_and_shrink() {
    assert!(HERO_OPACITY_RANGE[0] > HERO_OPACITY_RANGE[1]);
    assert!(HERO_SCALE_RANGE[0] > HERO_SCALE_RANGE[1]);
    assert!(HERO_OPACITY_RANGE.iter().all(|o| (0.0..=1.0).contains(o)));
    assert!(HERO_SCALE_RANGE[1] > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_timing_is_positive() {
    assert!(REVEAL_DURATION_SEC > 0.0);
    assert!(REVEAL_STAGGER_SEC >= 0.0);
    assert!(REVEAL_STAGGER_SEC < REVEAL_DURATION_SEC);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
}

#[test]
fn base_path_is_slash_delimited() {
    assert!(BASE_PATH.starts_with('/'));
    assert!(BASE_PATH.ends_with('/'));
}

#[test]
fn dom_ids_are_distinct() {
    assert_ne!(FOLLOWER_ID, HERO_CONTENT_ID);
    assert_ne!(APP_ROOT_ID, FOLLOWER_ID);
    assert_ne!(APP_ROOT_ID, HERO_CONTENT_ID);
}
