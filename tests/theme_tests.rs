// Host-side tests for theme switching.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod theme {
    include!("../src/theme.rs");
}

use theme::Theme;

#[test]
fn light_toggles_to_dark_and_everything_else_to_light() {
    assert_eq!(Theme::toggled_from(Some("light")), Theme::Dark);
    assert_eq!(Theme::toggled_from(Some("dark")), Theme::Light);
    assert_eq!(Theme::toggled_from(None), Theme::Light);
    assert_eq!(Theme::toggled_from(Some("sepia")), Theme::Light);
}

#[test]
fn parse_round_trips_known_names_only() {
    for t in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(t.as_str()), Some(t));
    }
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}
