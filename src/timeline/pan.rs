//! Drag-to-scroll over the timeline.
//!
//! A gesture that moved far enough leaves a short-lived "drag occurred" flag
//! behind so the click fired by the same pointer release does not open a
//! project.

use std::time::Duration;

use egui::{Pos2, Vec2};

/// What the pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Background, rows, bars: anything that should pan.
    Surface,
    TextInput,
    Select,
    TextArea,
    Anchor,
}

impl PointerTarget {
    /// Interactive controls keep their own pointer handling.
    pub fn is_interactive(self) -> bool {
        !matches!(self, PointerTarget::Surface)
    }
}

/// Tunables for the pan gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSettings {
    /// Scroll pixels per pointer pixel.
    pub multiplier: f32,
    /// Movement beyond this on either axis counts as a drag.
    pub threshold: f32,
    /// How long a finished drag keeps suppressing clicks.
    pub click_suppress: Duration,
}

impl Default for PanSettings {
    fn default() -> Self {
        Self {
            multiplier: 1.5,
            threshold: 5.0,
            click_suppress: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanState {
    Idle,
    Dragging {
        origin: Pos2,
        scroll_origin: f32,
    },
}

/// Two-state pan gesture machine. Times are seconds on any monotonic clock.
#[derive(Debug, Clone)]
pub struct PanController {
    settings: PanSettings,
    state: PanState,
    drag_occurred: bool,
    clear_at: Option<f64>,
}

impl PanController {
    pub fn new(settings: PanSettings) -> Self {
        Self {
            settings,
            state: PanState::Idle,
            drag_occurred: false,
            clear_at: None,
        }
    }

    pub fn settings(&self) -> PanSettings {
        self.settings
    }

    pub fn state(&self) -> PanState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PanState::Dragging { .. })
    }

    /// Start a gesture. Returns whether panning began.
    ///
    /// Ignored on interactive targets and while a gesture is already active.
    pub fn pointer_down(&mut self, target: PointerTarget, pos: Pos2, scroll: f32) -> bool {
        if target.is_interactive() || self.is_dragging() {
            return false;
        }
        self.state = PanState::Dragging {
            origin: pos,
            scroll_origin: scroll,
        };
        self.drag_occurred = false;
        self.clear_at = None;
        tracing::trace!(x = pos.x, y = pos.y, scroll, "pan started");
        true
    }

    /// Follow the pointer. Returns the new scroll offset while dragging.
    pub fn pointer_move(&mut self, pos: Pos2) -> Option<f32> {
        let PanState::Dragging { origin, scroll_origin } = self.state else {
            return None;
        };
        let delta: Vec2 = pos - origin;
        if delta.x.abs() > self.settings.threshold || delta.y.abs() > self.settings.threshold {
            self.drag_occurred = true;
        }
        Some(scroll_origin - delta.x * self.settings.multiplier)
    }

    /// End the gesture on release. `now` schedules the flag reset.
    pub fn pointer_up(&mut self, now: f64) {
        self.finish(now);
    }

    /// The pointer left the surface; same as a release.
    pub fn pointer_leave(&mut self, now: f64) {
        self.finish(now);
    }

    fn finish(&mut self, now: f64) {
        if !self.is_dragging() {
            return;
        }
        self.state = PanState::Idle;
        if self.drag_occurred {
            self.clear_at = Some(now + self.settings.click_suppress.as_secs_f64());
        }
        tracing::trace!(dragged = self.drag_occurred, "pan finished");
    }

    /// Advance timers. Call once per frame.
    pub fn tick(&mut self, now: f64) {
        if let Some(at) = self.clear_at {
            if now >= at {
                self.drag_occurred = false;
                self.clear_at = None;
            }
        }
    }

    /// Whether a click right now should be ignored because it ends a drag.
    pub fn should_suppress_click(&self) -> bool {
        self.drag_occurred
    }

    /// Whether a timer is pending, so the caller can schedule a repaint.
    pub fn has_pending_reset(&self) -> bool {
        self.clear_at.is_some()
    }
}

impl Default for PanController {
    fn default() -> Self {
        Self::new(PanSettings::default())
    }
}
