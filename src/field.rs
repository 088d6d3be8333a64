use crate::constants::{
    DAMPING, DOT_ACTIVE_COLOR, DOT_COLOR, DOT_RADIUS, GRID_SPACING, MAX_GLOW, MOUSE_RADIUS,
    POINTER_SENTINEL, PULL_DISTANCE_SCALE, PULL_STRENGTH,
};
use glam::Vec2;

/// Tuning for a [`DotField`]. `Default` uses the values in `constants.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub grid_spacing: f32,
    pub mouse_radius: f32,
    pub pull_strength: f32,
    /// Fraction of the remaining gap to the target closed each frame, in (0, 1].
    pub damping: f32,
    pub dot_radius: f32,
    pub dot_color: &'static str,
    pub dot_active_color: &'static str,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            grid_spacing: GRID_SPACING,
            mouse_radius: MOUSE_RADIUS,
            pull_strength: PULL_STRENGTH,
            damping: DAMPING,
            dot_radius: DOT_RADIUS,
            dot_color: DOT_COLOR,
            dot_active_color: DOT_ACTIVE_COLOR,
        }
    }
}

impl FieldConfig {
    /// Reject values that would break the lattice or make dots diverge.
    pub fn validated(self) -> anyhow::Result<Self> {
        anyhow::ensure!(
            self.grid_spacing > 0.0,
            "grid spacing must be positive, got {}",
            self.grid_spacing
        );
        anyhow::ensure!(
            self.mouse_radius > 0.0,
            "mouse radius must be positive, got {}",
            self.mouse_radius
        );
        anyhow::ensure!(
            self.pull_strength >= 0.0,
            "pull strength must not be negative, got {}",
            self.pull_strength
        );
        anyhow::ensure!(
            self.damping > 0.0 && self.damping <= 1.0,
            "damping must be in (0, 1], got {}",
            self.damping
        );
        Ok(self)
    }

    #[inline]
    fn max_pull(&self) -> f32 {
        self.pull_strength * PULL_DISTANCE_SCALE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotState {
    AtRest,
    Attracted,
}

#[derive(Clone, Debug)]
pub struct Dot {
    origin: Vec2,
    pub position: Vec2,
    pub target: Vec2,
    pub state: DotState,
    pub glow: f32,
}

impl Dot {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            position: origin,
            target: origin,
            state: DotState::AtRest,
            glow: 0.0,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Re-evaluate target and visual state against the pointer, then ease
    /// the position toward the target.
    pub fn update(&mut self, pointer: Vec2, config: &FieldConfig) {
        let delta = pointer - self.position;
        let distance = delta.length();

        if distance < config.mouse_radius {
            let force = (config.mouse_radius - distance) / config.mouse_radius;
            // A pointer exactly on the dot has no direction; pull is zero.
            let direction = if distance > 0.0 {
                delta / distance
            } else {
                Vec2::ZERO
            };
            self.target = self.origin + direction * force * config.max_pull();
            self.state = DotState::Attracted;
            self.glow = force * MAX_GLOW;
        } else {
            self.target = self.origin;
            self.state = DotState::AtRest;
            self.glow = 0.0;
        }

        self.position += (self.target - self.position) * config.damping;
    }

    pub fn color<'a>(&self, config: &'a FieldConfig) -> &'a str {
        match self.state {
            DotState::AtRest => config.dot_color,
            DotState::Attracted => config.dot_active_color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vec2::from_array(POINTER_SENTINEL),
            active: false,
        }
    }
}

/// 2D drawing target for the field. The browser canvas implements this; tests
/// record calls instead.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    /// Filled circle. `glow > 0` blurs around it in `glow_color`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, glow: f32, glow_color: &str);
}

/// The magnetic dot grid: lattice, pointer, and per-frame kinematics.
#[derive(Clone, Debug)]
pub struct DotField {
    config: FieldConfig,
    width: f32,
    height: f32,
    dots: Vec<Dot>,
    pointer: PointerState,
}

impl DotField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            dots: Vec::new(),
            pointer: PointerState::default(),
        }
    }

    pub fn with_size(config: FieldConfig, width: f32, height: f32) -> Self {
        let mut field = Self::new(config);
        field.resize(width, height);
        field
    }

    /// Discard the current grid and lay out a fresh one for the new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let (cols, rows) = lattice_dims(self.width, self.height, self.config.grid_spacing);
        let spacing = self.config.grid_spacing;

        let mut dots = Vec::with_capacity(cols * rows);
        for i in 0..cols {
            for j in 0..rows {
                dots.push(Dot::new(Vec2::new(i as f32 * spacing, j as f32 * spacing)));
            }
        }
        self.dots = dots;
        log::debug!(
            "[field] grid {}x{} ({} dots) for {}x{}",
            cols,
            rows,
            self.dots.len(),
            self.width,
            self.height
        );
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = PointerState {
            position: Vec2::new(x, y),
            active: true,
        };
    }

    /// Pointer left the surface; park it at the sentinel.
    pub fn clear_pointer(&mut self) {
        self.pointer = PointerState::default();
    }

    pub fn step(&mut self) {
        let pointer = self.pointer.position;
        for dot in &mut self.dots {
            dot.update(pointer, &self.config);
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);
        for dot in &self.dots {
            surface.fill_circle(
                dot.position,
                self.config.dot_radius,
                dot.color(&self.config),
                dot.glow,
                self.config.dot_active_color,
            );
        }
    }

    #[inline]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    #[inline]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// Columns and rows of a lattice covering `width` x `height`, edges included.
/// A non-positive or non-finite spacing yields the single origin dot.
#[inline]
pub fn lattice_dims(width: f32, height: f32, spacing: f32) -> (usize, usize) {
    if !(spacing > 0.0 && spacing.is_finite()) {
        return (1, 1);
    }
    let cols = (width.max(0.0) / spacing).floor() as usize + 1;
    let rows = (height.max(0.0) / spacing).floor() as usize + 1;
    (cols, rows)
}
