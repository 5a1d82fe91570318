//! Particle Field Regression Tests
//!
//! Long-running checks that the background animation stays well-behaved:
//! particles never escape the surface by more than one step, the batch size
//! is fixed between resizes, and links stay faint.
//!
//! # Running tests
//! ```bash
//! cargo test particle_field_regression
//! ```

use bevy::math::Vec2;
use portfolio::simulation::{DrawCommand, DrawList, FieldConfig, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ==================== UNIVERSAL CONSTANTS ====================

/// Largest distance a particle may sit outside the surface (one step at max speed)
const MAX_OVERSHOOT: f32 = 1.0;

/// Frames simulated by the long-run checks
const LONG_RUN_TICKS: usize = 2_000;

// ==================== HELPER FUNCTIONS ====================

fn seeded_field(size: Vec2, seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut field = ParticleField::new(FieldConfig::default());
    field.resize(size, &mut rng);
    // Keep the pointer out of the way.
    field.set_pointer(Vec2::new(-10_000.0, -10_000.0));
    field
}

fn assert_inside(field: &ParticleField, tick: usize) {
    let size = field.size();
    for (i, p) in field.particles().iter().enumerate() {
        assert!(
            p.pos.x >= -MAX_OVERSHOOT && p.pos.x <= size.x + MAX_OVERSHOOT,
            "tick {tick}: particle {i} escaped horizontally at {}",
            p.pos.x
        );
        assert!(
            p.pos.y >= -MAX_OVERSHOOT && p.pos.y <= size.y + MAX_OVERSHOOT,
            "tick {tick}: particle {i} escaped vertically at {}",
            p.pos.y
        );
    }
}

// ==================== LONG RUN ====================

#[test]
fn test_particles_stay_on_surface() {
    for (size, seed) in [
        (Vec2::new(1280.0, 720.0), 1),
        (Vec2::new(375.0, 812.0), 2),
        (Vec2::new(2560.0, 1440.0), 3),
    ] {
        let mut field = seeded_field(size, seed);
        let count = field.particles().len();
        let mut surface = DrawList::new();

        for tick in 0..LONG_RUN_TICKS {
            field.tick(&mut surface);
            assert_eq!(field.particles().len(), count);
            assert_inside(&field, tick);
        }
    }
}

#[test]
fn test_speeds_are_preserved_by_reflection() {
    let mut field = seeded_field(Vec2::new(800.0, 600.0), 9);
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.vel.abs()).collect();

    for _ in 0..LONG_RUN_TICKS {
        field.tick(&mut DrawList::new());
    }

    let after: Vec<Vec2> = field.particles().iter().map(|p| p.vel.abs()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_every_frame_draws_each_particle_once() {
    let mut field = seeded_field(Vec2::new(1024.0, 768.0), 5);
    let count = field.particles().len();
    let mut surface = DrawList::new();

    for _ in 0..100 {
        field.tick(&mut surface);
        assert_eq!(surface.commands.first(), Some(&DrawCommand::Clear));
        assert_eq!(surface.circles().count(), count);
        assert!(surface.lines().count() <= count * (count - 1) / 2);
    }
}

#[test]
fn test_links_never_exceed_max_opacity() {
    let config = FieldConfig::default();
    let mut field = seeded_field(Vec2::new(600.0, 400.0), 11);
    let mut surface = DrawList::new();

    for _ in 0..200 {
        field.tick(&mut surface);
        for line in surface.lines() {
            if let DrawCommand::Line { from, to, color } = line {
                assert!(from.distance(*to) < config.link_distance);
                assert!(color.alpha > 0.0 && color.alpha <= config.link_max_opacity);
            }
        }
    }
}

// ==================== RESIZE ====================

#[test]
fn test_resize_sequence_tracks_width() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = ParticleField::new(FieldConfig::default());

    for (width, expected) in [(1280.0, 100), (500.0, 50), (9.0, 0), (10.0, 1), (1000.0, 100)] {
        field.resize(Vec2::new(width, 600.0), &mut rng);
        assert_eq!(field.particles().len(), expected, "width {width}");
    }
}
