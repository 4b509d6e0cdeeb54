//! Session state - the mutable heart of one progress display
//!
//! The [`Session`] is owned exclusively by the render actor thread; public
//! API calls reach it as events, so no locking guards these fields.

use crate::options::ProgressOptions;
use std::time::{Duration, Instant};

/// Progress state for one logger instance.
///
/// `total.is_none()` means indeterminate mode; the mode is fixed at
/// construction and never changes. `value` is deliberately not clamped to
/// `[0, total]` - callers may overshoot, and rendering tolerates it.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    /// Label shown with the bar or animation.
    pub(crate) message: String,
    /// Current progress value.
    pub(crate) value: f64,
    /// Known total, absent in indeterminate mode.
    pub(crate) total: Option<f64>,
    /// When the session was constructed.
    pub(crate) start_time: Instant,
    /// Determinate sessions are active from construction until stop;
    /// indeterminate sessions never set this (rendering is not gated on it,
    /// only the log-repin path is).
    pub(crate) active: bool,
    /// When the caller last touched the state. Informational bookkeeping
    /// only - renders are never skipped based on it.
    pub(crate) last_update: Instant,
}

impl Session {
    /// Build the initial state from construction options.
    pub(crate) fn new(options: &ProgressOptions) -> Self {
        let now = Instant::now();
        Self {
            message: options.message.clone(),
            value: options.value,
            total: options.total,
            start_time: now,
            active: options.total.is_some(),
            last_update: now,
        }
    }

    /// Whether this session tracks progress against a known total.
    pub(crate) fn is_determinate(&self) -> bool {
        self.total.is_some()
    }

    /// Apply an `update` call.
    ///
    /// The message is replaced only when a non-empty one is supplied. The
    /// value is replaced whenever one is supplied: `Some(0.0)` is a valid,
    /// meaningful value - the contract distinguishes "provided" from
    /// "omitted", never "truthy" from "falsy".
    pub(crate) fn apply_update(&mut self, message: Option<&str>, value: Option<f64>) {
        if let Some(message) = message
            && !message.is_empty()
        {
            self.message = message.to_string();
        }
        if let Some(value) = value {
            self.value = value;
        }
        self.last_update = Instant::now();
    }

    /// Apply an `increment` call: `value += 1` in determinate mode, a no-op
    /// otherwise.
    pub(crate) fn increment(&mut self) {
        if self.is_determinate() {
            self.value += 1.0;
            self.last_update = Instant::now();
        }
    }

    /// Wall-clock time since construction.
    pub(crate) fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Render-side bookkeeping, owned by the scheduler and mutated only on ticks.
#[derive(Debug)]
pub(crate) struct RenderState {
    /// Current position in the animation cycle.
    pub(crate) frame_index: usize,
    /// The last line written to the terminal.
    pub(crate) current_line: String,
    /// When the last tick rendered. Never consulted to skip a render.
    pub(crate) last_render: Instant,
}

impl RenderState {
    pub(crate) fn new() -> Self {
        Self {
            frame_index: 0,
            current_line: String::new(),
            last_render: Instant::now(),
        }
    }

    /// Advance the animation by one frame, wrapping at `frame_count`.
    pub(crate) fn advance(&mut self, frame_count: usize) {
        self.frame_index = (self.frame_index + 1) % frame_count.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn determinate(total: f64) -> Session {
        Session::new(&ProgressOptions {
            total: Some(total),
            ..ProgressOptions::default()
        })
    }

    #[test]
    fn test_mode_fixed_by_total() {
        let session = determinate(10.0);
        assert!(session.is_determinate());
        assert!(session.active);

        let session = Session::new(&ProgressOptions::default());
        assert!(!session.is_determinate());
        assert!(!session.active);
    }

    #[test]
    fn test_update_explicit_zero_is_honored() {
        let mut session = determinate(10.0);
        session.apply_update(None, Some(5.0));
        assert_eq!(session.value, 5.0);
        session.apply_update(None, Some(0.0));
        assert_eq!(session.value, 0.0);
    }

    #[test]
    fn test_update_empty_message_ignored() {
        let mut session = determinate(10.0);
        session.apply_update(Some("working"), None);
        assert_eq!(session.message, "working");
        session.apply_update(Some(""), Some(3.0));
        assert_eq!(session.message, "working");
        assert_eq!(session.value, 3.0);
    }

    #[test]
    fn test_update_omitted_value_keeps_state() {
        let mut session = determinate(10.0);
        session.apply_update(None, Some(7.0));
        session.apply_update(Some("late"), None);
        assert_eq!(session.value, 7.0);
    }

    #[test]
    fn test_increment_by_mode() {
        let mut session = determinate(4.0);
        session.increment();
        session.increment();
        assert_eq!(session.value, 2.0);

        let mut session = Session::new(&ProgressOptions::default());
        session.increment();
        assert_eq!(session.value, 0.0, "indeterminate increment is a no-op");
    }

    #[test]
    fn test_value_may_overshoot() {
        let mut session = determinate(2.0);
        session.apply_update(None, Some(5.0));
        assert_eq!(session.value, 5.0);
    }

    #[test]
    fn test_render_state_advance_wraps() {
        let mut state = RenderState::new();
        for _ in 0..5 {
            state.advance(4);
        }
        assert_eq!(state.frame_index, 1);
        // A single-frame cycle stays put instead of dividing by zero.
        let mut state = RenderState::new();
        state.advance(0);
        assert_eq!(state.frame_index, 0);
    }
}
