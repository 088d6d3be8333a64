/// Background grid and page interaction tuning constants.
///
/// These constants express intended behavior (spacing, radii, time limits)
/// and keep magic numbers out of the code.

// Lattice spacing in CSS pixels (both axes)
pub const GRID_SPACING: f32 = 30.0;

// Pointer influence
pub const MOUSE_RADIUS: f32 = 150.0;
pub const PULL_STRENGTH: f32 = 0.6; // scales the maximum displacement
pub const PULL_DISTANCE_SCALE: f32 = 50.0; // max pull = PULL_STRENGTH * this
pub const DAMPING: f32 = 0.1; // fraction of the remaining gap closed per frame

// Glow (shadow blur) at full force
pub const MAX_GLOW: f32 = 15.0;

// Visuals
pub const DOT_RADIUS: f32 = 1.5;
pub const DOT_COLOR: &str = "rgba(59, 130, 246, 0.15)";
pub const DOT_ACTIVE_COLOR: &str = "rgba(59, 130, 246, 0.8)";

// Pointer position used when no pointer is over the page; far outside any radius
pub const POINTER_SENTINEL: [f32; 2] = [-1000.0, -1000.0];

// DOM anchors for the background
pub const CANVAS_CONTAINER_ID: &str = "canvas-container";
pub const CANVAS_ID: &str = "magnetic-grid";

// Theme preference
pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

// Scroll-driven UI
pub const SECTION_ACTIVATION_OFFSET: f64 = 300.0; // px above a section where it becomes current
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Registration form
pub const MAX_MEMBERS: usize = 4; // team leader included
pub const MIN_MEMBERS: usize = 3;

// Sponsor carousel
pub const AUTO_PLAY_DELAY_MS: i32 = 2000;
