//! Engine-independent particle field.
//!
//! `ParticleField` owns the particle batch, the surface size and the last known
//! pointer position. Every call to [`ParticleField::tick`] clears the surface,
//! draws and advances each particle, then links nearby pairs.

use std::ops::Range;

use bevy::math::Vec2;
use rand::Rng;

use super::config::FieldConfig;
use crate::resources::{Particle, Rgba};

/// Something the field can paint on.
pub trait Surface {
    /// Erase everything drawn so far.
    fn clear(&mut self);
    /// Draw a filled disc.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Draw a one-pixel line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba);
}

/// A recorded drawing operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, color: Rgba },
}

/// In-memory surface that records every command it receives.
#[derive(Default, Debug)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }
}

/// The animated background: a batch of particles on a resizable surface.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    size: Vec2,
    pointer: Vec2,
    config: FieldConfig,
}

impl ParticleField {
    /// An empty field on a zero-sized surface.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            particles: Vec::new(),
            size: Vec2::ZERO,
            pointer: Vec2::ZERO,
            config,
        }
    }

    /// A field with an explicit particle batch.
    pub fn from_particles(size: Vec2, particles: Vec<Particle>, config: FieldConfig) -> Self {
        Self {
            particles,
            size,
            pointer: Vec2::ZERO,
            config,
        }
    }

    /// Discard the current batch and spawn a fresh one sized for the surface.
    pub fn resize<R: Rng + ?Sized>(&mut self, size: Vec2, rng: &mut R) {
        self.size = size;
        let count = self.config.particle_count(size.x);

        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let pos = Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y);
            let vel = Vec2::new(
                sample(rng, &self.config.speed),
                sample(rng, &self.config.speed),
            );
            let radius = sample(rng, &self.config.radius);
            let opacity = sample(rng, &self.config.opacity);
            particles.push(Particle::new(pos, vel, radius, opacity));
        }
        self.particles = particles;
    }

    /// Record the latest pointer position. Last writer wins.
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Advance the animation by one frame, painting onto `surface`.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();

        let config = &self.config;
        for particle in &mut self.particles {
            surface.fill_circle(
                particle.pos,
                particle.radius,
                Rgba::new(config.color, particle.opacity),
            );

            particle.pos += particle.vel;

            let to_pointer = self.pointer - particle.pos;
            if to_pointer.length() < config.pointer_radius {
                let angle = to_pointer.y.atan2(to_pointer.x);
                particle.pos -= Vec2::from_angle(angle) * config.pointer_nudge;
            }

            // Reflection happens once the particle is already past the edge.
            if particle.pos.x < 0.0 || particle.pos.x > self.size.x {
                particle.vel.x = -particle.vel.x;
            }
            if particle.pos.y < 0.0 || particle.pos.y > self.size.y {
                particle.vel.y = -particle.vel.y;
            }
        }

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.pos.distance(b.pos);
                if let Some(alpha) = config.link_opacity(distance) {
                    surface.stroke_line(a.pos, b.pos, Rgba::new(config.color, alpha));
                }
            }
        }
    }
}

/// Uniform sample from `[range.start, range.end)`; never panics on empty ranges.
fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f32>) -> f32 {
    range.start + rng.gen::<f32>() * (range.end - range.start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FAR_AWAY: Vec2 = Vec2::new(-10_000.0, -10_000.0);

    fn field_with(particles: Vec<Particle>) -> ParticleField {
        let mut field = ParticleField::from_particles(
            Vec2::new(800.0, 600.0),
            particles,
            FieldConfig::default(),
        );
        field.set_pointer(FAR_AWAY);
        field
    }

    #[test]
    fn resize_regenerates_batch() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = ParticleField::new(FieldConfig::default());

        field.resize(Vec2::new(640.0, 480.0), &mut rng);
        assert_eq!(field.particles().len(), 64);

        field.resize(Vec2::new(0.0, 480.0), &mut rng);
        assert!(field.particles().is_empty());

        field.resize(Vec2::new(1920.0, 0.0), &mut rng);
        assert_eq!(field.particles().len(), 100);
    }

    #[test]
    fn spawned_particles_stay_in_sampling_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = ParticleField::new(FieldConfig::default());
        field.resize(Vec2::new(1280.0, 720.0), &mut rng);

        for p in field.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x < 1280.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 720.0);
            assert!(p.radius >= 1.0 && p.radius < 4.0);
            assert!(p.vel.x >= -1.0 && p.vel.x < 1.0);
            assert!(p.vel.y >= -1.0 && p.vel.y < 1.0);
            assert!(p.opacity >= 0.1 && p.opacity <= 0.6);
        }
    }

    #[test]
    fn tick_clears_then_draws_every_particle() {
        let mut field = field_with(vec![
            Particle::resting(Vec2::new(10.0, 10.0)),
            Particle::resting(Vec2::new(500.0, 500.0)),
        ]);
        let mut surface = DrawList::new();
        field.tick(&mut surface);

        assert_eq!(surface.commands[0], DrawCommand::Clear);
        assert_eq!(surface.circles().count(), 2);
        assert_eq!(surface.lines().count(), 0);
    }

    #[test]
    fn circles_use_pre_move_position_and_opacity() {
        let mut field = field_with(vec![Particle::new(
            Vec2::new(50.0, 60.0),
            Vec2::new(1.0, -1.0),
            3.0,
            0.4,
        )]);
        let mut surface = DrawList::new();
        field.tick(&mut surface);

        match surface.circles().next() {
            Some(DrawCommand::Circle {
                center,
                radius,
                color,
            }) => {
                assert_eq!(*center, Vec2::new(50.0, 60.0));
                assert_eq!(*radius, 3.0);
                assert_eq!(color.alpha, 0.4);
            }
            other => panic!("expected a circle, got {other:?}"),
        }
        assert_eq!(field.particles()[0].pos, Vec2::new(51.0, 59.0));
    }

    #[test]
    fn pointer_pushes_nearby_particle_away() {
        let mut field = field_with(vec![Particle::resting(Vec2::new(100.0, 100.0))]);
        field.set_pointer(Vec2::new(150.0, 100.0));
        field.tick(&mut DrawList::new());

        let pos = field.particles()[0].pos;
        assert!((pos.x - 99.5).abs() < 1e-4);
        assert!((pos.y - 100.0).abs() < 1e-4);
        assert_eq!(field.particles()[0].vel, Vec2::ZERO);
    }

    #[test]
    fn pointer_outside_radius_has_no_effect() {
        let mut field = field_with(vec![Particle::resting(Vec2::new(100.0, 100.0))]);
        field.set_pointer(Vec2::new(200.0, 100.0));
        field.tick(&mut DrawList::new());
        assert_eq!(field.particles()[0].pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn reflection_happens_after_overshoot() {
        let mut field = field_with(vec![Particle::new(
            Vec2::new(799.5, 300.0),
            Vec2::new(1.0, 0.0),
            2.0,
            0.2,
        )]);
        field.tick(&mut DrawList::new());

        let p = field.particles()[0];
        assert_eq!(p.pos.x, 800.5, "particle overshoots the edge by one step");
        assert_eq!(p.vel.x, -1.0);

        field.tick(&mut DrawList::new());
        assert_eq!(field.particles()[0].pos.x, 799.5);
    }

    #[test]
    fn position_exactly_on_edge_does_not_reflect() {
        let mut field = field_with(vec![Particle::new(
            Vec2::new(300.0, 599.0),
            Vec2::new(0.0, 1.0),
            2.0,
            0.2,
        )]);
        field.tick(&mut DrawList::new());
        assert_eq!(field.particles()[0].vel.y, 1.0);
    }

    #[test]
    fn close_pairs_are_linked_with_fading_opacity() {
        let mut field = field_with(vec![
            Particle::resting(Vec2::new(100.0, 100.0)),
            Particle::resting(Vec2::new(130.0, 140.0)),
            Particle::resting(Vec2::new(700.0, 500.0)),
        ]);
        let mut surface = DrawList::new();
        field.tick(&mut surface);

        let lines: Vec<_> = surface.lines().collect();
        assert_eq!(lines.len(), 1);
        match lines[0] {
            DrawCommand::Line { from, to, color } => {
                assert_eq!(*from, Vec2::new(100.0, 100.0));
                assert_eq!(*to, Vec2::new(130.0, 140.0));
                // distance 50
                assert!((color.alpha - 0.05).abs() < 1e-6);
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn pair_at_link_distance_is_not_linked() {
        let mut field = field_with(vec![
            Particle::resting(Vec2::new(100.0, 100.0)),
            Particle::resting(Vec2::new(200.0, 100.0)),
        ]);
        let mut surface = DrawList::new();
        field.tick(&mut surface);
        assert_eq!(surface.lines().count(), 0);
    }
}
