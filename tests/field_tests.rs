// Host-side tests for the dot field model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod field {
    include!("../src/field.rs");
}

use constants::*;
use field::*;
use glam::Vec2;

const EPS: f32 = 1e-3;

fn field(width: f32, height: f32) -> DotField {
    DotField::with_size(FieldConfig::default(), width, height)
}

fn dot_at(field: &DotField, origin: Vec2) -> &Dot {
    field
        .dots()
        .iter()
        .find(|d| d.origin() == origin)
        .expect("dot with origin")
}

#[derive(Default)]
struct RecordingSurface {
    clears: Vec<(f32, f32)>,
    circles: Vec<(Vec2, f32, String, f32, String)>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.clears.push((width, height));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, glow: f32, glow_color: &str) {
        self.circles
            .push((center, radius, color.to_string(), glow, glow_color.to_string()));
    }
}

#[test]
fn grid_300_by_300_is_11_by_11_lattice() {
    let f = field(300.0, 300.0);
    assert_eq!(f.dots().len(), 121);
    assert_eq!(f.dots()[0].origin(), Vec2::new(0.0, 0.0));
    // Columns are laid out outermost
    assert_eq!(f.dots()[1].origin(), Vec2::new(0.0, 30.0));
    assert_eq!(f.dots()[11].origin(), Vec2::new(30.0, 0.0));
    assert_eq!(f.dots()[120].origin(), Vec2::new(300.0, 300.0));
    for d in f.dots() {
        assert_eq!(d.position, d.origin());
        assert_eq!(d.state, DotState::AtRest);
    }
}

#[test]
fn dot_count_follows_floor_formula() {
    for (w, h) in [
        (0.0, 0.0),
        (29.0, 59.0),
        (61.0, 30.0),
        (1024.0, 768.0),
        (1920.0, 1080.0),
        (375.0, 812.0),
    ] {
        let f = field(w, h);
        let expected = ((w / 30.0).floor() as usize + 1) * ((h / 30.0).floor() as usize + 1);
        assert_eq!(f.dots().len(), expected, "size {w}x{h}");
    }
    assert_eq!(field(1024.0, 768.0).dots().len(), 35 * 26);
}

#[test]
fn lattice_dims_treats_negative_size_as_empty() {
    assert_eq!(lattice_dims(-10.0, -5.0, 30.0), (1, 1));
    assert_eq!(lattice_dims(90.0, 89.9, 30.0), (4, 3));
}

#[test]
fn degenerate_spacing_builds_a_single_dot() {
    assert_eq!(lattice_dims(300.0, 300.0, 0.0), (1, 1));
    assert_eq!(lattice_dims(300.0, 300.0, -30.0), (1, 1));
    assert_eq!(lattice_dims(300.0, 300.0, f32::NAN), (1, 1));

    let config = FieldConfig {
        grid_spacing: 0.0,
        ..FieldConfig::default()
    };
    let f = DotField::with_size(config, 300.0, 300.0);
    assert_eq!(f.dots().len(), 1);
    assert_eq!(f.dots()[0].origin(), Vec2::ZERO);
}

#[test]
fn resize_rebuilds_grid_from_scratch() {
    let mut f = field(300.0, 300.0);
    f.set_pointer(150.0, 150.0);
    for _ in 0..10 {
        f.step();
    }
    assert!(f.dots().iter().any(|d| d.position != d.origin()));

    f.resize(90.0, 60.0);
    assert_eq!(f.size(), (90.0, 60.0));
    assert_eq!(f.dots().len(), 4 * 3);
    for d in f.dots() {
        assert_eq!(d.position, d.origin());
        assert_eq!(d.glow, 0.0);
    }
}

#[test]
fn sentinel_pointer_relaxes_dots_to_origin_geometrically() {
    let mut f = field(300.0, 300.0);
    f.set_pointer(150.0, 150.0);
    for _ in 0..30 {
        f.step();
    }
    f.clear_pointer();
    assert!(!f.pointer().active);

    let before: Vec<f32> = f
        .dots()
        .iter()
        .map(|d| (d.position - d.origin()).length())
        .collect();
    f.step();
    for (d, gap) in f.dots().iter().zip(before) {
        let next = (d.position - d.origin()).length();
        assert!((next - gap * (1.0 - DAMPING)).abs() < 5e-4);
    }

    for _ in 0..300 {
        f.step();
    }
    for d in f.dots() {
        assert!((d.position - d.origin()).length() < EPS);
    }
}

#[test]
fn stationary_pointer_settles_dot_at_pull_equilibrium() {
    let mut f = field(300.0, 300.0);
    f.set_pointer(150.0, 150.0);
    for _ in 0..600 {
        f.step();
    }
    // Origin 60px left of the pointer settles where the pull balances:
    // r = (r0 - max_pull) / (1 - max_pull / radius) = (60 - 30) / 0.8
    let d = dot_at(&f, Vec2::new(90.0, 150.0));
    assert!((d.position - Vec2::new(112.5, 150.0)).length() < EPS);
    assert_eq!(d.state, DotState::Attracted);
    assert!((d.glow - 0.75 * MAX_GLOW).abs() < 1e-2);
}

#[test]
fn attracted_dots_reach_their_target() {
    let mut f = field(300.0, 300.0);
    let pointer = Vec2::new(150.0, 150.0);
    f.set_pointer(pointer.x, pointer.y);
    for _ in 0..600 {
        f.step();
    }
    let max_pull = PULL_STRENGTH * PULL_DISTANCE_SCALE;
    for d in f.dots() {
        let r0 = (pointer - d.origin()).length();
        if r0 <= max_pull + 5.0 || r0 >= MOUSE_RADIUS {
            continue;
        }
        let to_pointer = pointer - d.position;
        let dist = to_pointer.length();
        let force = (MOUSE_RADIUS - dist) / MOUSE_RADIUS;
        let expected = d.origin() + to_pointer / dist * force * max_pull;
        assert!(
            (d.position - expected).length() < EPS,
            "origin {:?} at {:?}, expected {:?}",
            d.origin(),
            d.position,
            expected
        );
        assert!((d.position - d.target).length() < EPS);
    }
}

#[test]
fn dots_outside_radius_stay_put() {
    let mut f = field(600.0, 600.0);
    f.set_pointer(0.0, 0.0);
    for _ in 0..50 {
        f.step();
    }
    let far = dot_at(&f, Vec2::new(300.0, 300.0));
    assert_eq!(far.position, far.origin());
    assert_eq!(far.state, DotState::AtRest);
    assert_eq!(far.color(f.config()), DOT_COLOR);
}

#[test]
fn glow_is_zero_outside_radius_and_decreasing_inside() {
    let config = FieldConfig::default();
    let glow_at = |distance: f32| {
        let mut dot = Dot::new(Vec2::ZERO);
        dot.update(Vec2::new(distance, 0.0), &config);
        dot.glow
    };

    assert_eq!(glow_at(MOUSE_RADIUS), 0.0);
    assert_eq!(glow_at(MOUSE_RADIUS + 50.0), 0.0);

    let mut prev = f32::INFINITY;
    for distance in [0.5, 1.0, 10.0, 50.0, 100.0, 140.0, 149.5] {
        let g = glow_at(distance);
        assert!(g > 0.0 && g < prev, "glow {g} at {distance}");
        prev = g;
    }
}

#[test]
fn pointer_on_dot_has_full_force_and_no_displacement() {
    let config = FieldConfig::default();
    let mut dot = Dot::new(Vec2::new(60.0, 60.0));
    dot.update(Vec2::new(60.0, 60.0), &config);

    assert_eq!(dot.state, DotState::Attracted);
    assert_eq!(dot.glow, MAX_GLOW);
    assert_eq!(dot.target, dot.origin());
    assert_eq!(dot.position, dot.origin());
    assert!(dot.position.is_finite());
}

#[test]
fn pointer_leave_reverts_every_dot_next_frame() {
    let mut f = field(300.0, 300.0);
    f.set_pointer(120.0, 90.0);
    f.step();
    assert!(f.dots().iter().any(|d| d.state == DotState::Attracted));

    f.clear_pointer();
    f.step();
    for d in f.dots() {
        assert_eq!(d.state, DotState::AtRest);
        assert_eq!(d.glow, 0.0);
        assert_eq!(d.color(f.config()), DOT_COLOR);
    }
}

#[test]
fn draw_clears_then_paints_every_dot() {
    let mut f = field(120.0, 60.0);
    f.set_pointer(60.0, 30.0);
    f.step();

    let mut surface = RecordingSurface::default();
    f.draw(&mut surface);

    assert_eq!(surface.clears, vec![(120.0, 60.0)]);
    assert_eq!(surface.circles.len(), f.dots().len());
    for ((center, radius, color, glow, glow_color), d) in surface.circles.iter().zip(f.dots()) {
        assert_eq!(*center, d.position);
        assert_eq!(*radius, DOT_RADIUS);
        assert_eq!(*glow, d.glow);
        assert_eq!(glow_color, DOT_ACTIVE_COLOR);
        match d.state {
            DotState::Attracted => assert_eq!(color, DOT_ACTIVE_COLOR),
            DotState::AtRest => {
                assert_eq!(color, DOT_COLOR);
                assert_eq!(*glow, 0.0);
            }
        }
    }
}

#[test]
fn config_validation_rejects_bad_values() {
    assert!(FieldConfig::default().validated().is_ok());

    let bad = [
        FieldConfig {
            damping: 0.0,
            ..FieldConfig::default()
        },
        FieldConfig {
            damping: 1.5,
            ..FieldConfig::default()
        },
        FieldConfig {
            grid_spacing: 0.0,
            ..FieldConfig::default()
        },
        FieldConfig {
            mouse_radius: -1.0,
            ..FieldConfig::default()
        },
        FieldConfig {
            pull_strength: -0.1,
            ..FieldConfig::default()
        },
    ];
    for config in bad {
        assert!(config.clone().validated().is_err(), "{:?}", config);
    }
}

#[test]
fn new_field_starts_with_sentinel_pointer_and_no_dots() {
    let f = DotField::new(FieldConfig::default());
    assert!(f.dots().is_empty());
    assert_eq!(f.pointer().position, Vec2::from_array(POINTER_SENTINEL));
    assert!(!f.pointer().active);
}
