//! Project detail modal.
//!
//! At most one project is open at a time; opening another replaces it.

use bevy::prelude::*;

use crate::content::{self, ProjectRecord};

/// Single-slot selection of the project shown in the modal.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    current: Option<u32>,
}

impl ProjectSelection {
    /// Show project `id`, replacing whatever was open.
    pub fn open(&mut self, id: u32) {
        self.current = Some(id);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current_id(&self) -> Option<u32> {
        self.current
    }

    /// The open project, if its id is known.
    pub fn current(&self) -> Option<&'static ProjectRecord> {
        self.current.and_then(content::project)
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

/// A gallery card; pressing it opens the project.
#[derive(Component, Clone, Copy, Debug)]
pub struct ProjectCard(pub u32);

/// Parts of the modal overlay.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPart {
    /// Full-window backdrop; pressing it closes the modal
    Overlay,
    /// The panel itself; swallows presses
    Panel,
    CloseButton,
    Title,
    Tags,
    Description,
    Links,
}

pub struct ModalPlugin;

impl Plugin for ModalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProjectSelection>()
            .add_systems(Update, (handle_modal_input, log_selection).chain());
    }
}

/// Open on card press; close on backdrop, close button or Escape.
pub fn handle_modal_input(
    cards: Query<(&Interaction, &ProjectCard), Changed<Interaction>>,
    parts: Query<(&Interaction, &ModalPart), Changed<Interaction>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<ProjectSelection>,
) {
    for (interaction, card) in &cards {
        if *interaction == Interaction::Pressed {
            selection.open(card.0);
        }
    }

    if !selection.is_open() {
        return;
    }
    let dismissed = parts.iter().any(|(interaction, part)| {
        *interaction == Interaction::Pressed
            && matches!(part, ModalPart::Overlay | ModalPart::CloseButton)
    });
    if dismissed || keyboard.just_pressed(KeyCode::Escape) {
        selection.close();
    }
}

fn log_selection(selection: Res<ProjectSelection>) {
    if !selection.is_changed() || selection.is_added() {
        return;
    }
    match (selection.current(), selection.current_id()) {
        (Some(project), _) => info!("Opened project {}: {}", project.id, project.title),
        (None, Some(id)) => warn!("No project with id {id}"),
        (None, None) => debug!("Project modal closed"),
    }
}
