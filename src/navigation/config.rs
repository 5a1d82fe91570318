//! Scroll and navigation constants.

use bevy::prelude::Resource;

/// Offsets and thresholds used by the section tracker and the nav bar.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct NavConfig {
    /// Added to the scroll offset before matching sections, so a section
    /// becomes active slightly before its top reaches the viewport top
    pub lookahead: f32,
    /// Height of the fixed nav bar; jumps land this far above a section
    pub header_offset: f32,
    /// Scroll offset beyond which the scroll-to-top button is shown
    pub scroll_top_threshold: f32,
    /// Windows narrower than this use the collapsible mobile menu
    pub mobile_breakpoint: f32,
    /// Pixels scrolled per mouse-wheel line
    pub wheel_line_height: f32,
    /// Exponential easing rate of smooth scrolling, per second
    pub smooth_scroll_rate: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            lookahead: 100.0,
            header_offset: 70.0,
            scroll_top_threshold: 300.0,
            mobile_breakpoint: 768.0,
            wheel_line_height: 20.0,
            smooth_scroll_rate: 10.0,
        }
    }
}
