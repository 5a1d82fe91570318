//! Navigation Scenario Tests
//!
//! Scroll the page through a fixed layout and check what the nav bar shows.
//!
//! # Running tests
//! ```bash
//! cargo test navigation_scenarios
//! ```

use portfolio::navigation::{NavConfig, NavigationState, Section, SectionMap, SmoothScroll};

// ==================== HELPER FUNCTIONS ====================

/// Six sections of 800px stacked from the top of the page.
fn even_layout() -> SectionMap {
    SectionMap::stacked(0.0, [800.0; 6])
}

/// Run a smooth scroll at 60 fps until it finishes, returning the final offset.
fn settle(smooth: &mut SmoothScroll, mut offset: f32) -> f32 {
    for _ in 0..600 {
        match smooth.step(offset, 1.0 / 60.0) {
            Some(next) => offset = next,
            None => break,
        }
    }
    offset
}

// ==================== SCENARIOS ====================

#[test]
fn test_scrolling_down_walks_through_sections() {
    let layout = even_layout();
    let mut nav = NavigationState::new(NavConfig::default());

    let expected = [
        (0.0, Section::Home),
        (750.0, Section::About),
        (1600.0, Section::Experience),
        (2300.0, Section::Projects),
        (3200.0, Section::Education),
        (4000.0, Section::Contact),
    ];
    for (offset, section) in expected {
        nav.track_scroll(offset, &layout);
        assert_eq!(nav.active(), section, "offset {offset}");
    }
}

#[test]
fn test_scroll_top_button_appears_past_threshold() {
    let layout = even_layout();
    let mut nav = NavigationState::new(NavConfig::default());

    nav.track_scroll(300.0, &layout);
    assert!(!nav.show_scroll_top());
    nav.track_scroll(301.0, &layout);
    assert!(nav.show_scroll_top());
    nav.track_scroll(0.0, &layout);
    assert!(!nav.show_scroll_top());
}

#[test]
fn test_nav_click_scrolls_below_header() {
    let layout = even_layout();
    let mut nav = NavigationState::new(NavConfig::default());
    let mut smooth = SmoothScroll::default();

    let target = nav.jump_to(Section::Projects, &layout);
    assert_eq!(target, Some(2330.0));
    assert_eq!(nav.active(), Section::Projects);

    smooth.begin(2330.0);
    let offset = settle(&mut smooth, 0.0);
    assert_eq!(offset, 2330.0);
    assert!(!smooth.is_active());

    nav.track_scroll(offset, &layout);
    assert_eq!(nav.active(), Section::Projects);
}

#[test]
fn test_jumping_to_missing_section_changes_nothing() {
    let mut layout = even_layout();
    layout.remove(Section::Education);
    let mut nav = NavigationState::new(NavConfig::default());
    nav.track_scroll(750.0, &layout);
    nav.toggle_mobile_menu();
    let before = nav.clone();

    assert_eq!(nav.jump_to(Section::Education, &layout), None);
    assert_eq!(nav, before);
}

#[test]
fn test_scroll_to_top_is_idempotent() {
    let layout = even_layout();
    let mut nav = NavigationState::new(NavConfig::default());
    let mut smooth = SmoothScroll::default();

    nav.track_scroll(2500.0, &layout);
    smooth.begin(nav.scroll_to_top());
    let offset = settle(&mut smooth, 2500.0);
    assert_eq!(offset, 0.0);
    nav.track_scroll(offset, &layout);
    assert_eq!(nav.active(), Section::Home);

    smooth.begin(nav.scroll_to_top());
    assert_eq!(smooth.step(0.0, 1.0 / 60.0), None);
    assert_eq!(nav.active(), Section::Home);
}

#[test]
fn test_manual_scroll_interrupts_smooth_scroll() {
    let mut smooth = SmoothScroll::default();
    smooth.begin(2000.0);
    let first = smooth.step(0.0, 1.0 / 60.0);
    assert!(first.is_some());

    smooth.cancel();
    assert_eq!(smooth.step(500.0, 1.0 / 60.0), None);
}

#[test]
fn test_mobile_menu_closes_on_navigation() {
    let layout = even_layout();
    let mut nav = NavigationState::new(NavConfig::default());

    nav.toggle_mobile_menu();
    assert!(nav.mobile_menu_open());
    nav.jump_to(Section::Contact, &layout);
    assert!(!nav.mobile_menu_open());
}
