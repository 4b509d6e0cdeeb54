//! Construction options for a progress session
//!
//! Every field has a default, so callers set only what they care about:
//!
//! ```
//! use baton_core::ProgressOptions;
//!
//! let options = ProgressOptions {
//!     message: "syncing".to_string(),
//!     total: Some(100.0),
//!     ..ProgressOptions::default()
//! };
//! assert!(options.is_determinate());
//! ```
//!
//! None of the values are validated. Degenerate settings (`bar_length == 0`,
//! `total == Some(0.0)`) produce degenerate but deterministic output, never a
//! panic.

use crate::theme::Glyphs;
use std::time::Duration;

/// Options consumed by [`crate::ProgressLogger`] at construction.
#[derive(Debug, Clone)]
pub struct ProgressOptions {
    /// Label shown with the bar or animation.
    pub message: String,
    /// Known total. `Some` selects determinate mode, `None` indeterminate.
    /// The mode is fixed for the session's lifetime.
    pub total: Option<f64>,
    /// Initial progress value.
    pub value: f64,
    /// Render the bar segment (determinate mode).
    pub show_progress_bar: bool,
    /// Render the animation segment (indeterminate mode, or in place of the
    /// bar when the bar is hidden).
    pub show_loading_animation: bool,
    /// Render the ETA segment (determinate mode only).
    pub show_eta: bool,
    /// Width of the bar/animation in characters.
    pub bar_length: usize,
    /// Tick period of the render scheduler.
    pub update_throttle: Duration,
    /// Append average time per unit to the stop summary.
    pub show_avg_time_per_item: bool,
    /// Filled bar cell.
    pub full_character: char,
    /// Empty bar cell.
    pub empty_character: char,
    /// Put the message in front of the bar instead of after the counters.
    pub display_message_first: bool,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        let glyphs = Glyphs::default();
        Self {
            message: String::new(),
            total: None,
            value: 0.0,
            show_progress_bar: true,
            show_loading_animation: true,
            show_eta: true,
            bar_length: 10,
            update_throttle: Duration::from_millis(50),
            show_avg_time_per_item: false,
            full_character: glyphs.full,
            empty_character: glyphs.empty,
            display_message_first: false,
        }
    }
}

impl ProgressOptions {
    /// Whether these options describe a determinate session.
    pub fn is_determinate(&self) -> bool {
        self.total.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ProgressOptions::default();
        assert_eq!(options.message, "");
        assert!(options.total.is_none());
        assert!(!options.is_determinate());
        assert_eq!(options.value, 0.0);
        assert!(options.show_progress_bar);
        assert!(options.show_loading_animation);
        assert!(options.show_eta);
        assert_eq!(options.bar_length, 10);
        assert_eq!(options.update_throttle, Duration::from_millis(50));
        assert!(!options.show_avg_time_per_item);
        assert!(!options.display_message_first);
    }

    #[test]
    fn test_total_selects_mode() {
        let options = ProgressOptions {
            total: Some(10.0),
            ..ProgressOptions::default()
        };
        assert!(options.is_determinate());
    }
}
