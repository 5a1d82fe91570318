//! Page layout: nav bar, scrolling sections, floating buttons and the
//! project overlay, built once as a bevy UI tree.

mod modal;
mod sections;
mod widgets;

use bevy::prelude::*;

pub use modal::sync_modal;
pub use widgets::nav_title;

use crate::content::PROFILE;
use crate::links;
use crate::navigation::{NavButton, NavConfig, NavElement, PageScroll, Section};
use crate::theme::{toggle_label, Palette, ThemeStore, ThemeToggle, ThemeToggleLabel, Themed};
use widgets::{button, fill, nav_link, text, BODY_SIZE};

/// Plugin that builds the page and keeps its dynamic parts in sync.
pub struct PagePlugin;

impl Plugin for PagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_page)
            .add_systems(Update, (sync_modal, links::open_pressed_links));
    }
}

fn spawn_page(
    mut commands: Commands,
    palette: Res<Palette>,
    theme: Res<ThemeStore>,
    config: Res<NavConfig>,
) {
    let palette = *palette;

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            ..default()
        })
        .with_children(|root| {
            nav_bar(root, &palette, theme.is_dark(), config.header_offset);

            root.spawn((
                NavElement::MobileMenu,
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(config.header_offset),
                    width: Val::Percent(100.0),
                    flex_direction: FlexDirection::Column,
                    padding: UiRect::all(Val::Px(12.0)),
                    display: Display::None,
                    ..default()
                },
                fill(Themed::NavBar, &palette),
                ZIndex(10),
            ))
            .with_children(|menu| {
                for section in Section::ALL {
                    nav_link(menu, section, &palette);
                }
            });

            root.spawn((
                PageScroll,
                Node {
                    width: Val::Percent(100.0),
                    flex_grow: 1.0,
                    flex_direction: FlexDirection::Column,
                    overflow: Overflow::scroll_y(),
                    ..default()
                },
                ScrollPosition::default(),
            ))
            .with_children(|page| sections::spawn_sections(page, &palette));

            root.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    right: Val::Px(24.0),
                    bottom: Val::Px(24.0),
                    ..default()
                },
                ZIndex(5),
            ))
            .with_children(|corner| {
                button(corner, "Top", NavElement::ScrollTopButton, true, &palette);
            });
        });

    modal::spawn_modal(&mut commands, &palette);
    info!("Page built with {} sections", Section::ALL.len());
}

fn nav_bar(root: &mut ChildBuilder, palette: &Palette, dark: bool, height: f32) {
    root.spawn((
        Node {
            width: Val::Percent(100.0),
            height: Val::Px(height),
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            padding: UiRect::horizontal(Val::Px(24.0)),
            ..default()
        },
        fill(Themed::NavBar, palette),
        ZIndex(10),
    ))
    .with_children(|bar| {
        bar.spawn((
            Button,
            Node::default(),
            BackgroundColor(Color::NONE),
            NavButton(Section::Home),
        ))
        .with_children(|logo| {
            text(logo, PROFILE.initials, 26.0, Themed::Accent, palette);
        });

        bar.spawn(Node {
            align_items: AlignItems::Center,
            column_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|right| {
            right
                .spawn((
                    NavElement::DesktopMenu,
                    Node {
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(4.0),
                        ..default()
                    },
                ))
                .with_children(|menu| {
                    for section in Section::ALL {
                        nav_link(menu, section, palette);
                    }
                });

            right
                .spawn((
                    Button,
                    ThemeToggle,
                    Node {
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                        ..default()
                    },
                    fill(Themed::Tag, palette),
                    BorderRadius::all(Val::Px(8.0)),
                ))
                .with_children(|toggle| {
                    toggle.spawn((
                        ThemeToggleLabel,
                        Text::new(toggle_label(dark)),
                        TextFont {
                            font_size: BODY_SIZE,
                            ..default()
                        },
                        TextColor(palette.accent),
                        Themed::Accent,
                    ));
                });

            button(right, "Menu", NavElement::MobileMenuButton, false, palette);
        });
    });
}
