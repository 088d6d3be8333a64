// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_are_within_reasonable_bounds() {
    assert!(GRID_SPACING > 0.0);
    assert!(MOUSE_RADIUS > 0.0);
    assert!(PULL_STRENGTH >= 0.0);
    assert!(MAX_GLOW > 0.0);
    assert!(DOT_RADIUS > 0.0);

    // Damping closes part of the gap without overshooting
    assert!(DAMPING > 0.0 && DAMPING <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_have_logical_relationships() {
    // Maximum pull stays inside the influence radius
    assert!(PULL_STRENGTH * PULL_DISTANCE_SCALE < MOUSE_RADIUS);

    // The sentinel is outside the radius of any dot on a visible surface
    let [sx, sy] = POINTER_SENTINEL;
    assert!(sx < -MOUSE_RADIUS && sy < -MOUSE_RADIUS);

    assert_ne!(DOT_COLOR, DOT_ACTIVE_COLOR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_constants_are_consistent() {
    assert!(MIN_MEMBERS <= MAX_MEMBERS);
    assert!(MIN_MEMBERS >= 1);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(AUTO_PLAY_DELAY_MS > 0);
    assert!(SECTION_ACTIVATION_OFFSET >= 0.0);
}
