//! bevy systems connecting the page's scroll container to the tracker.

use bevy::{
    input::mouse::{MouseScrollUnit, MouseWheel},
    prelude::*,
    window::PrimaryWindow,
};

use super::config::NavConfig;
use super::scroll::SmoothScroll;
use super::tracker::{NavigationState, Section, SectionBounds, SectionMap};
use crate::theme::Palette;

/// The scrolling column holding every section.
#[derive(Component)]
pub struct PageScroll;

/// Marks the root node of a page section.
#[derive(Component, Clone, Copy, Debug)]
pub struct SectionAnchor(pub Section);

/// A button that jumps to a section when pressed.
#[derive(Component, Clone, Copy, Debug)]
pub struct NavButton(pub Section);

/// Text of a nav-bar link, highlighted while its section is active.
#[derive(Component, Clone, Copy, Debug)]
pub struct NavLabel(pub Section);

/// Nav chrome whose visibility depends on window width and scroll state.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavElement {
    DesktopMenu,
    MobileMenuButton,
    MobileMenu,
    ScrollTopButton,
}

/// Scroll the page with the mouse wheel. Manual scrolling cancels any
/// running smooth scroll.
pub fn wheel_scroll(
    mut wheel: EventReader<MouseWheel>,
    config: Res<NavConfig>,
    mut smooth: ResMut<SmoothScroll>,
    mut pages: Query<&mut ScrollPosition, With<PageScroll>>,
) {
    let mut delta = 0.0;
    for event in wheel.read() {
        delta += match event.unit {
            MouseScrollUnit::Line => event.y * config.wheel_line_height,
            MouseScrollUnit::Pixel => event.y,
        };
    }
    if delta == 0.0 {
        return;
    }

    smooth.cancel();
    for mut position in &mut pages {
        position.offset_y = (position.offset_y - delta).max(0.0);
    }
}

/// Record where each section sits inside the scrolled document.
pub fn measure_sections(
    windows: Query<&Window, With<PrimaryWindow>>,
    pages: Query<(&ComputedNode, &GlobalTransform, &ScrollPosition), With<PageScroll>>,
    anchors: Query<(&SectionAnchor, &ComputedNode, &GlobalTransform)>,
    mut map: ResMut<SectionMap>,
) {
    let Ok((page_node, page_transform, scroll)) = pages.get_single() else {
        return;
    };
    // Layout is in physical pixels, scroll offsets in logical ones.
    let scale = windows
        .get_single()
        .map(|window| window.scale_factor())
        .unwrap_or(1.0);
    let page_top = page_transform.translation().y - page_node.size().y / 2.0;

    let mut measured = SectionMap::new();
    for (anchor, node, transform) in &anchors {
        let top = transform.translation().y - node.size().y / 2.0;
        measured.insert(
            anchor.0,
            SectionBounds::new(
                (top - page_top) / scale + scroll.offset_y,
                node.size().y / scale,
            ),
        );
    }
    map.set_if_neq(measured);
}

/// Re-derive the active section when the page scrolls or its layout moves.
pub fn track_active_section(
    pages: Query<Ref<ScrollPosition>, With<PageScroll>>,
    map: Res<SectionMap>,
    mut nav: ResMut<NavigationState>,
) {
    let Ok(scroll) = pages.get_single() else {
        return;
    };
    if !scroll.is_changed() && !map.is_changed() {
        return;
    }

    let before = nav.show_scroll_top();
    let mut next = nav.clone();
    if next.track_scroll(scroll.offset_y, &*map) {
        info!("Active section: {}", next.active());
    }
    if next.active() != nav.active() || next.show_scroll_top() != before {
        *nav = next;
    }
}

/// Jump to a section when one of its nav buttons is pressed.
pub fn handle_nav_buttons(
    buttons: Query<(&Interaction, &NavButton), Changed<Interaction>>,
    map: Res<SectionMap>,
    mut nav: ResMut<NavigationState>,
    mut smooth: ResMut<SmoothScroll>,
) {
    for (interaction, button) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match nav.jump_to(button.0, &*map) {
            Some(target) => {
                info!("Jumping to {} at offset {:.0}", button.0, target);
                smooth.begin(target);
            }
            None => debug!("Section {} is not on the page", button.0),
        }
    }
}

/// Scroll-to-top and mobile menu buttons.
pub fn handle_chrome_buttons(
    buttons: Query<(&Interaction, &NavElement), (Changed<Interaction>, With<Button>)>,
    mut nav: ResMut<NavigationState>,
    mut smooth: ResMut<SmoothScroll>,
) {
    for (interaction, element) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match element {
            NavElement::ScrollTopButton => smooth.begin(nav.scroll_to_top()),
            NavElement::MobileMenuButton => nav.toggle_mobile_menu(),
            _ => {}
        }
    }
}

/// Step the smooth scroll animation.
pub fn apply_smooth_scroll(
    time: Res<Time>,
    mut smooth: ResMut<SmoothScroll>,
    mut pages: Query<&mut ScrollPosition, With<PageScroll>>,
) {
    if !smooth.is_active() {
        return;
    }
    let Ok(mut position) = pages.get_single_mut() else {
        smooth.cancel();
        return;
    };
    if let Some(next) = smooth.step(position.offset_y, time.delta_secs()) {
        position.offset_y = next;
    }
}

/// Show the desktop or the mobile nav depending on window width, and the
/// scroll-to-top button once the page has scrolled far enough.
pub fn update_nav_layout(
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<NavConfig>,
    nav: Res<NavigationState>,
    mut elements: Query<(&NavElement, &mut Node)>,
) {
    let narrow = windows
        .get_single()
        .map(|window| window.width() < config.mobile_breakpoint)
        .unwrap_or(false);

    for (element, mut node) in &mut elements {
        let visible = match element {
            NavElement::DesktopMenu => !narrow,
            NavElement::MobileMenuButton => narrow,
            NavElement::MobileMenu => narrow && nav.mobile_menu_open(),
            NavElement::ScrollTopButton => nav.show_scroll_top(),
        };
        let display = if visible { Display::Flex } else { Display::None };
        if node.display != display {
            node.display = display;
        }
    }
}

/// Color nav links by whether their section is active.
pub fn highlight_active_nav(
    nav: Res<NavigationState>,
    palette: Res<Palette>,
    mut labels: Query<(&NavLabel, &mut TextColor)>,
) {
    if !nav.is_changed() && !palette.is_changed() {
        return;
    }
    for (label, mut color) in &mut labels {
        color.0 = if label.0 == nav.active() {
            palette.accent
        } else {
            palette.muted
        };
    }
}
