//! Plain data structures shared by the particle simulator and the renderer.
//!
//! Positions are in surface coordinates: origin at the top-left corner of the
//! window, x to the right, y downwards, measured in logical pixels.

use bevy::math::Vec2;
use bevy::prelude::Color;

/// One point in the animated background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position (x, y) in surface coordinates
    pub pos: Vec2,
    /// Velocity (vx, vy) in pixels per tick
    pub vel: Vec2,
    /// Radius of the drawn disc
    pub radius: f32,
    /// Fill alpha, in [0.1, 0.6)
    pub opacity: f32,
}

impl Particle {
    /// Create a particle at `pos` moving with `vel`.
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            opacity,
        }
    }

    /// A particle that never moves on its own.
    pub fn resting(pos: Vec2) -> Self {
        Self::new(pos, Vec2::ZERO, 2.0, 0.3)
    }
}

/// An 8-bit RGB triple; alpha is supplied per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Indigo used for particles and their links.
    pub const INDIGO: Rgb = Rgb(99, 102, 241);

    /// Convert to a bevy color with the given alpha.
    pub fn with_alpha(self, alpha: f32) -> Color {
        Color::srgba(
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            alpha,
        )
    }
}

/// A color as recorded by a drawing surface: base RGB plus alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    pub fn new(rgb: Rgb, alpha: f32) -> Self {
        Self { rgb, alpha }
    }

    pub fn to_color(self) -> Color {
        self.rgb.with_alpha(self.alpha)
    }
}
