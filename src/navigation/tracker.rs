//! Active-section tracking and "jump to section" navigation.

use std::collections::HashMap;
use std::fmt;

use bevy::prelude::Resource;

use super::config::NavConfig;

/// The named regions of the page, in declared order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Education,
    Contact,
}

impl Section {
    /// Every section in declared order. Earlier entries win ties.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    /// Stable identifier, as used for anchors.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Vertical extent of a section within the scrolled document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Inclusive at the top, exclusive at the bottom.
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Where sections currently sit in the document.
pub trait SectionLayout {
    /// `None` when the section is not part of the document.
    fn bounds(&self, section: Section) -> Option<SectionBounds>;
}

/// Measured section bounds.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct SectionMap {
    bounds: HashMap<Section, SectionBounds>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sections stacked from `top` with the given heights, in declared order.
    pub fn stacked(top: f32, heights: [f32; 6]) -> Self {
        let mut map = Self::new();
        let mut y = top;
        for (section, height) in Section::ALL.into_iter().zip(heights) {
            map.insert(section, SectionBounds::new(y, height));
            y += height;
        }
        map
    }

    pub fn insert(&mut self, section: Section, bounds: SectionBounds) {
        self.bounds.insert(section, bounds);
    }

    pub fn remove(&mut self, section: Section) {
        self.bounds.remove(&section);
    }
}

impl SectionLayout for SectionMap {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        self.bounds.get(&section).copied()
    }
}

/// Navigation highlight state derived from scrolling and nav clicks.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct NavigationState {
    active: Section,
    show_scroll_top: bool,
    mobile_menu_open: bool,
    config: NavConfig,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}

impl NavigationState {
    pub fn new(config: NavConfig) -> Self {
        Self {
            active: Section::Home,
            show_scroll_top: false,
            mobile_menu_open: false,
            config,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn show_scroll_top(&self) -> bool {
        self.show_scroll_top
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Re-derive the active section from the scroll offset.
    ///
    /// The first section in declared order whose bounds contain
    /// `offset + lookahead` wins. If none does, the previous section stays
    /// active. Returns whether the active section changed.
    pub fn track_scroll<L: SectionLayout + ?Sized>(&mut self, offset: f32, layout: &L) -> bool {
        self.show_scroll_top = offset > self.config.scroll_top_threshold;

        let effective = offset + self.config.lookahead;
        let hit = Section::ALL.into_iter().find(|&section| {
            layout
                .bounds(section)
                .is_some_and(|bounds| bounds.contains(effective))
        });

        match hit {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }

    /// Navigate to `section`.
    ///
    /// Marks it active straight away, closes the mobile menu and returns the
    /// scroll offset to animate to. Returns `None` and changes nothing if the
    /// section is not in the layout.
    pub fn jump_to<L: SectionLayout + ?Sized>(
        &mut self,
        section: Section,
        layout: &L,
    ) -> Option<f32> {
        let bounds = layout.bounds(section)?;
        self.active = section;
        self.mobile_menu_open = false;
        Some((bounds.top - self.config.header_offset).max(0.0))
    }

    /// Target offset for the scroll-to-top button. The active section is
    /// left for the tracker to re-derive as the page moves.
    pub fn scroll_to_top(&self) -> f32 {
        0.0
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> SectionMap {
        SectionMap::stacked(0.0, [800.0; 6])
    }

    #[test]
    fn ids_are_distinct() {
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in &Section::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
        assert_eq!(Section::About.to_string(), "about");
    }

    #[test]
    fn bounds_are_half_open() {
        let bounds = SectionBounds::new(800.0, 800.0);
        assert!(!bounds.contains(799.9));
        assert!(bounds.contains(800.0));
        assert!(bounds.contains(1599.9));
        assert!(!bounds.contains(1600.0));
    }

    #[test]
    fn scroll_top_button_appears_past_threshold() {
        let mut nav = NavigationState::default();
        nav.track_scroll(300.0, &page());
        assert!(!nav.show_scroll_top());
        nav.track_scroll(300.5, &page());
        assert!(nav.show_scroll_top());
        nav.track_scroll(0.0, &page());
        assert!(!nav.show_scroll_top());
    }

    #[test]
    fn lookahead_activates_section_early() {
        let mut nav = NavigationState::default();
        assert!(!nav.track_scroll(699.0, &page()));
        assert_eq!(nav.active(), Section::Home);
        assert!(nav.track_scroll(700.0, &page()));
        assert_eq!(nav.active(), Section::About);
    }

    #[test]
    fn overlapping_sections_prefer_declared_order() {
        let mut layout = page();
        layout.insert(Section::Contact, SectionBounds::new(800.0, 800.0));
        let mut nav = NavigationState::default();
        nav.track_scroll(900.0, &layout);
        assert_eq!(nav.active(), Section::About);
    }

    #[test]
    fn gap_keeps_previous_section() {
        let mut layout = SectionMap::new();
        layout.insert(Section::Home, SectionBounds::new(0.0, 500.0));
        layout.insert(Section::About, SectionBounds::new(1000.0, 500.0));

        let mut nav = NavigationState::default();
        nav.track_scroll(1000.0, &layout);
        assert_eq!(nav.active(), Section::About);

        assert!(!nav.track_scroll(500.0, &layout));
        assert_eq!(nav.active(), Section::About);
    }

    #[test]
    fn jump_compensates_for_header_and_activates() {
        let mut nav = NavigationState::default();
        nav.toggle_mobile_menu();

        let target = nav.jump_to(Section::Projects, &page());
        assert_eq!(target, Some(2400.0 - 70.0));
        assert_eq!(nav.active(), Section::Projects);
        assert!(!nav.mobile_menu_open());
    }

    #[test]
    fn jump_to_first_section_never_goes_negative() {
        let mut nav = NavigationState::default();
        assert_eq!(nav.jump_to(Section::Home, &page()), Some(0.0));
    }

    #[test]
    fn jump_to_missing_section_is_noop() {
        let mut layout = page();
        layout.remove(Section::Education);

        let mut nav = NavigationState::default();
        nav.jump_to(Section::About, &layout);
        nav.toggle_mobile_menu();
        let before = nav.clone();

        assert_eq!(nav.jump_to(Section::Education, &layout), None);
        assert_eq!(nav, before);
    }

    #[test]
    fn scroll_to_top_leaves_active_section() {
        let mut nav = NavigationState::default();
        nav.track_scroll(4000.0, &page());
        assert_eq!(nav.active(), Section::Contact);
        assert_eq!(nav.scroll_to_top(), 0.0);
        assert_eq!(nav.active(), Section::Contact);
    }
}
