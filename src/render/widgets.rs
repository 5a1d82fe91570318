//! Small builders shared by the page sections.

use bevy::prelude::*;

use crate::navigation::{NavButton, NavLabel, Section};
use crate::theme::{Palette, Themed};

pub const BODY_SIZE: f32 = 16.0;
pub const SMALL_SIZE: f32 = 14.0;

/// A text node painted with `role`.
pub fn text(
    parent: &mut ChildBuilder,
    value: impl Into<String>,
    size: f32,
    role: Themed,
    palette: &Palette,
) -> Entity {
    parent
        .spawn((
            Text::new(value),
            TextFont {
                font_size: size,
                ..default()
            },
            TextColor(palette.paint(role)),
            role,
        ))
        .id()
}

/// A node with a themed background.
pub fn fill(role: Themed, palette: &Palette) -> (Themed, BackgroundColor) {
    (role, BackgroundColor(palette.paint(role)))
}

/// Section heading with an accent underline.
pub fn section_header(parent: &mut ChildBuilder, title: &str, palette: &Palette) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(8.0),
            margin: UiRect::bottom(Val::Px(32.0)),
            ..default()
        })
        .with_children(|header| {
            text(header, title, 36.0, Themed::Heading, palette);
            header.spawn((
                Node {
                    width: Val::Px(64.0),
                    height: Val::Px(4.0),
                    ..default()
                },
                fill(Themed::AccentFill, palette),
                BorderRadius::all(Val::Px(2.0)),
            ));
        });
}

/// A rounded button with a single label. `marker` says what it does.
pub fn button(
    parent: &mut ChildBuilder,
    label: &str,
    marker: impl Bundle,
    primary: bool,
    palette: &Palette,
) -> Entity {
    let (background, label_role) = if primary {
        (Themed::AccentFill, Themed::OnAccent)
    } else {
        (Themed::Tag, Themed::Accent)
    };
    parent
        .spawn((
            Button,
            Node {
                padding: UiRect::axes(Val::Px(18.0), Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            fill(background, palette),
            BorderRadius::all(Val::Px(8.0)),
            marker,
        ))
        .with_children(|b| {
            text(b, label, BODY_SIZE, label_role, palette);
        })
        .id()
}

/// Nav-bar link whose label lights up while `section` is active.
pub fn nav_link(parent: &mut ChildBuilder, section: Section, palette: &Palette) {
    parent
        .spawn((
            Button,
            Node {
                padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::NONE),
            NavButton(section),
        ))
        .with_children(|b| {
            b.spawn((
                Text::new(nav_title(section)),
                TextFont {
                    font_size: BODY_SIZE,
                    ..default()
                },
                TextColor(palette.muted),
                NavLabel(section),
            ));
        });
}

/// Label of a section in the nav bar.
pub fn nav_title(section: Section) -> String {
    let id = section.id();
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A small pill with a tag or skill name.
pub fn chip(parent: &mut ChildBuilder, label: &str, palette: &Palette) {
    parent
        .spawn((
            Node {
                padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                ..default()
            },
            fill(Themed::Tag, palette),
            BorderRadius::all(Val::Px(12.0)),
        ))
        .with_children(|c| {
            text(c, label, SMALL_SIZE, Themed::Accent, palette);
        });
}

/// A wrapping row of chips.
pub fn chip_row<'a>(
    parent: &mut ChildBuilder,
    labels: impl IntoIterator<Item = &'a str>,
    palette: &Palette,
) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            column_gap: Val::Px(8.0),
            row_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|row| {
            for label in labels {
                chip(row, label, palette);
            }
        });
}

/// A padded card on the themed surface color.
pub fn card_node(width: Val) -> Node {
    Node {
        width,
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(10.0),
        padding: UiRect::all(Val::Px(24.0)),
        ..default()
    }
}
