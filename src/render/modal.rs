//! Project detail overlay.

use bevy::{prelude::*, ui::FocusPolicy};

use super::widgets::{button, fill, BODY_SIZE, SMALL_SIZE};
use crate::links::ExternalLink;
use crate::modal::{ModalPart, ProjectSelection};
use crate::theme::{Palette, Themed};

/// Text node filled in from the selected project.
fn modal_text(part: ModalPart, size: f32, role: Themed, palette: &Palette) -> impl Bundle {
    (
        part,
        Text::new(""),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(palette.paint(role)),
        role,
    )
}

/// Spawn the overlay hidden. It sits above the page and below the cursor.
pub fn spawn_modal(commands: &mut Commands, palette: &Palette) {
    commands
        .spawn((
            Button,
            ModalPart::Overlay,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(16.0)),
                display: Display::None,
                ..default()
            },
            fill(Themed::Overlay, palette),
            GlobalZIndex(100),
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    ModalPart::Panel,
                    Interaction::default(),
                    FocusPolicy::Block,
                    Node {
                        width: Val::Percent(100.0),
                        max_width: Val::Px(760.0),
                        max_height: Val::Percent(90.0),
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(16.0),
                        padding: UiRect::all(Val::Px(28.0)),
                        overflow: Overflow::scroll_y(),
                        ..default()
                    },
                    ScrollPosition::default(),
                    fill(Themed::Surface, palette),
                    BorderRadius::all(Val::Px(16.0)),
                ))
                .with_children(|panel| {
                    panel
                        .spawn(Node {
                            justify_content: JustifyContent::SpaceBetween,
                            align_items: AlignItems::Center,
                            column_gap: Val::Px(16.0),
                            ..default()
                        })
                        .with_children(|header| {
                            header.spawn(modal_text(
                                ModalPart::Title,
                                28.0,
                                Themed::Heading,
                                palette,
                            ));
                            button(header, "Close", ModalPart::CloseButton, false, palette);
                        });
                    panel.spawn((
                        Node {
                            height: Val::Px(220.0),
                            ..default()
                        },
                        fill(Themed::Tag, palette),
                        BorderRadius::all(Val::Px(10.0)),
                    ));
                    panel.spawn(modal_text(ModalPart::Tags, SMALL_SIZE, Themed::Accent, palette));
                    panel.spawn(modal_text(
                        ModalPart::Description,
                        BODY_SIZE,
                        Themed::Body,
                        palette,
                    ));
                    panel.spawn((
                        ModalPart::Links,
                        Node {
                            column_gap: Val::Px(12.0),
                            ..default()
                        },
                    ));
                });
        });
}

/// Show, hide and fill the overlay from the current selection.
pub fn sync_modal(
    mut commands: Commands,
    selection: Res<ProjectSelection>,
    palette: Res<Palette>,
    mut nodes: Query<(&ModalPart, &mut Node)>,
    mut texts: Query<(&ModalPart, &mut Text)>,
    links: Query<(Entity, &ModalPart)>,
) {
    if !selection.is_changed() {
        return;
    }
    let project = selection.current();

    for (part, mut node) in &mut nodes {
        if *part == ModalPart::Overlay {
            node.display = if project.is_some() {
                Display::Flex
            } else {
                Display::None
            };
        }
    }

    let Some(project) = project else {
        return;
    };
    for (part, mut text) in &mut texts {
        text.0 = match part {
            ModalPart::Title => project.title.to_string(),
            ModalPart::Tags => project.tags.join("  \u{b7}  "),
            ModalPart::Description => project.long_description.to_string(),
            _ => continue,
        };
    }

    for (entity, part) in &links {
        if *part != ModalPart::Links {
            continue;
        }
        commands
            .entity(entity)
            .despawn_descendants()
            .with_children(|row| {
                if let Some(source) = project.source {
                    button(row, "View Code", ExternalLink(source), false, &palette);
                }
                if let Some(live) = project.live {
                    button(row, "Live Demo", ExternalLink(live), true, &palette);
                }
            });
    }
}
