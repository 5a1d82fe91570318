//! Navigation module - section tracking, nav bar and smooth scrolling.

mod config;
mod scroll;
mod systems;
mod tracker;

use bevy::prelude::*;

pub use config::NavConfig;
pub use scroll::SmoothScroll;
pub use systems::{NavButton, NavElement, NavLabel, PageScroll, SectionAnchor};
pub use tracker::{NavigationState, Section, SectionBounds, SectionLayout, SectionMap};

/// Plugin that keeps the active section in sync with the page scroll.
pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        let config = NavConfig::default();
        app.insert_resource(NavigationState::new(config.clone()))
            .insert_resource(SmoothScroll::new(config.smooth_scroll_rate))
            .insert_resource(config)
            .init_resource::<SectionMap>()
            .add_systems(
                Update,
                (
                    systems::wheel_scroll,
                    systems::handle_nav_buttons,
                    systems::handle_chrome_buttons,
                    systems::apply_smooth_scroll,
                    systems::measure_sections,
                    systems::track_active_section,
                    systems::update_nav_layout,
                    systems::highlight_active_nav,
                )
                    .chain(),
            );
    }
}
