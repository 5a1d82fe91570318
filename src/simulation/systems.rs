//! bevy systems driving the particle background.
//!
//! Frame loop:
//! 1. Regenerate the batch on window resize
//! 2. Record the latest pointer position
//! 3. Tick the field, drawing through gizmos

use bevy::{
    math::Isometry2d,
    prelude::*,
    window::{CursorMoved, PrimaryWindow, WindowResized},
};

use super::config::FieldConfig;
use super::field::{ParticleField, Surface};
use crate::resources::Rgba;

/// Ring spacing used to fill a disc with gizmo outlines
const FILL_STEP: f32 = 0.75;

/// The background entity. Despawning it stops the animation loop.
#[derive(Component)]
pub struct ParticleBackground {
    pub field: ParticleField,
}

/// Paints on bevy gizmos, converting surface coordinates (top-left origin,
/// y down) to the centred, y-up world space of the 2D camera.
pub struct GizmoSurface<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    size: Vec2,
}

impl<'a, 'w, 's> GizmoSurface<'a, 'w, 's> {
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, size: Vec2) -> Self {
        Self { gizmos, size }
    }

    fn to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.size.x / 2.0, self.size.y / 2.0 - p.y)
    }
}

impl Surface for GizmoSurface<'_, '_, '_> {
    fn clear(&mut self) {
        // Gizmos are immediate mode; last frame's shapes are already gone.
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let center = Isometry2d::from_translation(self.to_world(center));
        let color = color.to_color();
        let mut r = radius;
        while r > 0.0 {
            self.gizmos.circle_2d(center, r, color);
            r -= FILL_STEP;
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        let (from, to) = (self.to_world(from), self.to_world(to));
        self.gizmos.line_2d(from, to, color.to_color());
    }
}

/// Build a background sized to the primary window.
fn mount(config: &FieldConfig, window: Option<&Window>) -> ParticleBackground {
    let mut field = ParticleField::new(config.clone());
    if let Some(window) = window {
        let size = Vec2::new(window.width(), window.height());
        field.resize(size, &mut rand::thread_rng());
        debug!(
            "Particle field mounted at {}x{} with {} particles",
            size.x,
            size.y,
            field.particles().len()
        );
    }
    ParticleBackground { field }
}

/// Spawn the background entity at startup.
pub fn spawn_background(
    mut commands: Commands,
    config: Res<FieldConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    commands.spawn(mount(&config, windows.get_single().ok()));
}

/// Press `B` to tear the background down, and again to bring it back.
pub fn toggle_background(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<FieldConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    backgrounds: Query<Entity, With<ParticleBackground>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyB) {
        return;
    }

    if backgrounds.is_empty() {
        info!("Particle background enabled");
        commands.spawn(mount(&config, windows.get_single().ok()));
    } else {
        info!("Particle background disabled");
        for entity in &backgrounds {
            commands.entity(entity).despawn();
        }
    }
}

/// Throw away the batch and respawn it whenever the window changes size.
pub fn regenerate_on_resize(
    mut resized: EventReader<WindowResized>,
    mut backgrounds: Query<&mut ParticleBackground>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };
    let size = Vec2::new(last.width, last.height);
    let mut rng = rand::thread_rng();

    for mut background in &mut backgrounds {
        background.field.resize(size, &mut rng);
        debug!(
            "Particle field resized to {}x{}: {} particles",
            size.x,
            size.y,
            background.field.particles().len()
        );
    }
}

/// Feed the latest cursor position to every field.
pub fn track_pointer(
    mut moved: EventReader<CursorMoved>,
    mut backgrounds: Query<&mut ParticleBackground>,
) {
    let Some(last) = moved.read().last() else {
        return;
    };
    for mut background in &mut backgrounds {
        background.field.set_pointer(last.position);
    }
}

/// Advance and draw every field once per frame.
pub fn tick_background(mut gizmos: Gizmos, mut backgrounds: Query<&mut ParticleBackground>) {
    for mut background in &mut backgrounds {
        let size = background.field.size();
        let mut surface = GizmoSurface::new(&mut gizmos, size);
        background.field.tick(&mut surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_without_window_is_empty() {
        let background = mount(&FieldConfig::default(), None);
        assert!(background.field.particles().is_empty());
        assert_eq!(background.field.size(), Vec2::ZERO);
    }
}
