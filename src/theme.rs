/// Colour scheme stored under the `theme` key and mirrored on `<html data-theme>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Theme to switch to from the current attribute value. Anything that is
    /// not explicitly light (including no attribute) switches to light.
    pub fn toggled_from(current: Option<&str>) -> Theme {
        match current.and_then(Theme::parse) {
            Some(Theme::Light) => Theme::Dark,
            _ => Theme::Light,
        }
    }
}
