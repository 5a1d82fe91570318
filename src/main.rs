//! Portfolio - Main Entry
//!
//! A single scrolling page over an animated particle background.

use bevy::prelude::*;
use portfolio::cursor::CursorPlugin;
use portfolio::modal::ModalPlugin;
use portfolio::navigation::{NavigationPlugin, NavigationState};
use portfolio::render::PagePlugin;
use portfolio::simulation::ParticleFieldPlugin;
use portfolio::theme::ThemePlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Portfolio".into(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ThemePlugin)
        .add_plugins(ParticleFieldPlugin)
        .add_plugins(NavigationPlugin)
        .add_plugins(ModalPlugin)
        .add_plugins(CursorPlugin)
        .add_plugins(PagePlugin)
        .add_systems(Startup, setup_camera)
        .add_systems(Update, log_frame)
        .run();
}

/// Set up the 2D main camera
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    commands.insert_resource(FrameCounter(0));
}

/// Frame counter for logging
#[derive(Resource)]
struct FrameCounter(u32);

/// Log a heartbeat every N frames
fn log_frame(mut counter: ResMut<FrameCounter>, nav: Res<NavigationState>) {
    counter.0 += 1;
    if counter.0 % 600 == 0 {
        debug!("Frame {}: viewing {}", counter.0, nav.active());
    }
}
