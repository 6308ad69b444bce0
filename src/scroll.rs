//! Eased scrolling toward in-page navigation targets.

/// Approach rate, as the fraction of remaining distance covered per second.
const EASE_RATE: f32 = 8.0;
/// Distance at which the animation snaps to its target and stops.
const SNAP_DISTANCE: f32 = 0.5;

/// Animates the vertical scroll offset toward a requested target instead of
/// jumping there. One instance drives the page scroll area.
#[derive(Debug, Default)]
pub struct SmoothScroll {
    target: Option<f32>,
}

impl SmoothScroll {
    /// Begin easing toward `offset` (content space, clamped at the top).
    pub fn request(&mut self, offset: f32) {
        self.target = Some(offset.max(0.0));
    }

    /// Whether an animation is in flight.
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Advance by `dt` seconds from `current`, returning the offset to apply
    /// this frame, or `None` once idle. The target is limited to
    /// `max_offset`, the furthest the scroll area can actually go; a section
    /// near the end of the content is otherwise never reached and the
    /// animation would spin forever against the clamp.
    pub fn tick(&mut self, current: f32, max_offset: f32, dt: f32) -> Option<f32> {
        let target = self.target?.min(max_offset.max(0.0));
        if (target - current).abs() <= SNAP_DISTANCE {
            self.target = None;
            return Some(target);
        }
        let step = (target - current) * (EASE_RATE * dt).clamp(0.0, 1.0);
        Some(current + step)
    }

    /// Drop the target, e.g. when the user takes over the scroll wheel.
    pub fn cancel(&mut self) {
        self.target = None;
    }
}
