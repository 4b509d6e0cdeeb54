//! Display glyphs - design constants for the live line
//!
//! Centralizing these makes it easy to:
//! - Maintain visual consistency
//! - Swap the bar style in one place

/// Glyphs used by the bar, the animation, and intercepted messages
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    /// Filled bar cell (▓)
    pub full: char,
    /// Empty bar cell (░)
    pub empty: char,
    /// Prefix for intercepted warn-class messages (⚠)
    pub warning: &'static str,
    /// Prefix for intercepted error-class messages (✗)
    pub error: &'static str,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            full: '▓',
            empty: '░',
            warning: "⚠",
            error: "✗",
        }
    }
}
