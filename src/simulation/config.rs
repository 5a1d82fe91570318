//! Tuning parameters for the particle background.
//!
//! All constants that shape the animation live here instead of being
//! scattered across the tick loop. The bevy app inserts `FieldConfig::default()`
//! as a resource; tests construct their own.

use std::ops::Range;

use bevy::prelude::Resource;

use crate::resources::Rgb;

/// Parameters for spawning, moving and linking particles.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// One particle per this many pixels of surface width
    pub pixels_per_particle: f32,
    /// Upper bound on the particle count
    pub max_particles: usize,
    /// Radius sampling range
    pub radius: Range<f32>,
    /// Sampling range for each velocity component
    pub speed: Range<f32>,
    /// Fill alpha sampling range
    pub opacity: Range<f32>,
    /// Particles closer than this to the pointer get pushed away
    pub pointer_radius: f32,
    /// Distance of a single pointer push
    pub pointer_nudge: f32,
    /// Pairs closer than this are linked
    pub link_distance: f32,
    /// Link alpha for two coincident particles
    pub link_max_opacity: f32,
    /// Base color of discs and links
    pub color: Rgb,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            pixels_per_particle: 10.0,
            max_particles: 100,
            radius: 1.0..4.0,
            speed: -1.0..1.0,
            opacity: 0.1..0.6,
            pointer_radius: 100.0,
            pointer_nudge: 0.5,
            link_distance: 100.0,
            link_max_opacity: 0.1,
            color: Rgb::INDIGO,
        }
    }
}

impl FieldConfig {
    /// Number of particles for a surface of the given width.
    ///
    /// Zero (or negative, or NaN) widths yield an empty field.
    pub fn particle_count(&self, width: f32) -> usize {
        let per_width = (width / self.pixels_per_particle).floor();
        if !(per_width >= 1.0) {
            return 0;
        }
        (per_width as usize).min(self.max_particles)
    }

    /// Alpha of the link between two particles `distance` apart, or `None`
    /// when they are too far apart to be linked.
    pub fn link_opacity(&self, distance: f32) -> Option<f32> {
        if distance < self.link_distance {
            Some(self.link_max_opacity * (1.0 - distance / self.link_distance))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_count_scales_with_width() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(0.0), 0);
        assert_eq!(config.particle_count(9.9), 0);
        assert_eq!(config.particle_count(10.0), 1);
        assert_eq!(config.particle_count(375.0), 37);
        assert_eq!(config.particle_count(999.0), 99);
    }

    #[test]
    fn particle_count_is_capped() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(1000.0), 100);
        assert_eq!(config.particle_count(3840.0), 100);
    }

    #[test]
    fn particle_count_ignores_degenerate_widths() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(-50.0), 0);
        assert_eq!(config.particle_count(f32::NAN), 0);
    }

    #[test]
    fn link_opacity_fades_linearly() {
        let config = FieldConfig::default();
        assert_eq!(config.link_opacity(0.0), Some(0.1));
        let half = config.link_opacity(50.0).unwrap();
        assert!((half - 0.05).abs() < 1e-6);
        assert_eq!(config.link_opacity(100.0), None);
        assert_eq!(config.link_opacity(250.0), None);
    }

    #[test]
    fn sampling_ranges_are_sane() {
        let config = FieldConfig::default();
        assert!(config.radius.start > 0.0, "Radius must be positive");
        assert!(config.opacity.start >= 0.0 && config.opacity.end <= 1.0);
        assert!(config.speed.start < config.speed.end);
    }
}
