//! Simulation module - the animated particle background.

mod config;
mod field;
mod systems;

use bevy::prelude::*;

pub use config::FieldConfig;
pub use field::{DrawCommand, DrawList, ParticleField, Surface};
pub use systems::{GizmoSurface, ParticleBackground};

/// Plugin that mounts the particle background and runs its frame loop.
pub struct ParticleFieldPlugin;

impl Plugin for ParticleFieldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FieldConfig>()
            .add_systems(Startup, systems::spawn_background)
            .add_systems(
                Update,
                (
                    systems::toggle_background,
                    systems::regenerate_on_resize,
                    systems::track_pointer,
                    systems::tick_background.run_if(any_with_component::<ParticleBackground>),
                )
                    .chain(),
            );
    }
}
