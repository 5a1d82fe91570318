//! Smooth scrolling of the page viewport.

use bevy::prelude::Resource;

use super::config::NavConfig;

/// Closer than this to the target counts as arrived
const ARRIVAL_EPSILON: f32 = 0.5;

/// An eased scroll animation toward a target offset.
///
/// Each frame the caller passes the offset the layout actually has and gets
/// back the offset to write, or `None` once the animation is over. The
/// animation ends on arrival, when the layout refused the previous write
/// (clamped at the end of the document), or on [`SmoothScroll::cancel`].
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SmoothScroll {
    target: Option<f32>,
    last_written: Option<f32>,
    rate: f32,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(NavConfig::default().smooth_scroll_rate)
    }
}

impl SmoothScroll {
    pub fn new(rate: f32) -> Self {
        Self {
            target: None,
            last_written: None,
            rate,
        }
    }

    /// Start animating toward `target`, replacing any running animation.
    pub fn begin(&mut self, target: f32) {
        self.target = Some(target);
        self.last_written = None;
    }

    /// Stop where we are, e.g. when the user grabs the wheel.
    pub fn cancel(&mut self) {
        self.target = None;
        self.last_written = None;
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Advance the animation by `dt` seconds from offset `current`.
    pub fn step(&mut self, current: f32, dt: f32) -> Option<f32> {
        let target = self.target?;

        if let Some(written) = self.last_written {
            if (written - current).abs() > ARRIVAL_EPSILON {
                self.cancel();
                return None;
            }
        }

        let remaining = target - current;
        if remaining.abs() <= ARRIVAL_EPSILON {
            self.cancel();
            return if remaining == 0.0 { None } else { Some(target) };
        }

        let blend = 1.0 - (-self.rate * dt).exp();
        let mut next = current + remaining * blend;
        if (target - next).abs() <= ARRIVAL_EPSILON {
            next = target;
        }
        self.last_written = Some(next);
        Some(next)
    }
}
