//! Frame generation for bars and bounce animations
//!
//! This module builds the static visuals: the determinate bar string for a
//! given value/total, and the fixed set of ping-pong frames the indeterminate
//! animation cycles through.

/// Immutable, ordered set of animation frames.
///
/// The sequence is a ping-pong sweep: the full cell travels left to right,
/// then back, with the two endpoint frames emitted only once so the bounce
/// has no visible stutter. For `bar_length >= 2` the set holds exactly
/// `2 * bar_length - 2` frames; shorter bars degenerate to a single frame so
/// index arithmetic stays total.
#[derive(Debug, Clone)]
pub struct FrameSet {
    frames: Vec<String>,
}

impl FrameSet {
    /// Build the frame set for a bar of `bar_length` cells.
    pub fn build(bar_length: usize, full: char, empty: char) -> Self {
        if bar_length == 0 {
            return Self {
                frames: vec![String::new()],
            };
        }

        let cell = |active: usize| -> String {
            (0..bar_length)
                .map(|pos| if pos == active { full } else { empty })
                .collect()
        };

        let mut frames: Vec<String> = (0..bar_length).map(cell).collect();
        if bar_length >= 2 {
            // Reverse sweep, endpoints excluded: len-2 down to 1.
            frames.extend((1..bar_length - 1).rev().map(cell));
        }

        Self { frames }
    }

    /// Number of frames in the cycle.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// A frame set always holds at least one frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, wrapping around the cycle.
    pub fn get(&self, index: usize) -> &str {
        &self.frames[index % self.frames.len()]
    }
}

/// Render the determinate bar for `value` out of `total`.
///
/// The filled width is `floor(value / total * bar_length)`, clamped into
/// `[0, bar_length]`: overshooting callers get a visually full bar (the
/// percentage text elsewhere is the unclamped figure), and negative or
/// non-finite fractions render empty rather than panicking.
pub fn render_bar(value: f64, total: f64, bar_length: usize, full: char, empty: char) -> String {
    let cells = (value / total * bar_length as f64).floor();
    let filled = if cells.is_nan() {
        0
    } else {
        cells.clamp(0.0, bar_length as f64) as usize
    };
    format!(
        "{}{}",
        full.to_string().repeat(filled),
        empty.to_string().repeat(bar_length - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_position(frame: &str) -> Option<usize> {
        frame.chars().position(|c| c == '▓')
    }

    #[test]
    fn test_frame_count_and_width() {
        for bar_length in 2..=12 {
            let frames = FrameSet::build(bar_length, '▓', '░');
            assert_eq!(frames.len(), 2 * bar_length - 2);
            for i in 0..frames.len() {
                assert_eq!(frames.get(i).chars().count(), bar_length);
                assert_eq!(
                    frames.get(i).chars().filter(|c| *c == '▓').count(),
                    1,
                    "every frame carries exactly one full cell"
                );
            }
        }
    }

    #[test]
    fn test_frames_ping_pong_sweep() {
        let frames = FrameSet::build(4, '▓', '░');
        let positions: Vec<usize> = (0..frames.len())
            .map(|i| full_position(frames.get(i)).unwrap())
            .collect();
        // Forward 0..=3, then back through the interior only.
        assert_eq!(positions, vec![0, 1, 2, 3, 2, 1]);
    }

    #[test]
    fn test_frame_index_wraps() {
        let frames = FrameSet::build(3, '▓', '░');
        assert_eq!(frames.len(), 4);
        assert_eq!(frames.get(0), frames.get(4));
        assert_eq!(frames.get(1), frames.get(9));
    }

    #[test]
    fn test_degenerate_lengths() {
        let one = FrameSet::build(1, '▓', '░');
        assert_eq!(one.len(), 1);
        assert_eq!(one.get(0), "▓");
        assert_eq!(one.get(7), "▓");

        let zero = FrameSet::build(0, '▓', '░');
        assert_eq!(zero.len(), 1);
        assert_eq!(zero.get(0), "");
        assert!(!zero.is_empty());
    }

    #[test]
    fn test_bar_empty_half_full() {
        assert_eq!(render_bar(0.0, 10.0, 10, '▓', '░'), "░".repeat(10));
        assert_eq!(
            render_bar(5.0, 10.0, 10, '▓', '░'),
            format!("{}{}", "▓".repeat(5), "░".repeat(5))
        );
        assert_eq!(render_bar(10.0, 10.0, 10, '▓', '░'), "▓".repeat(10));
    }

    #[test]
    fn test_bar_overshoot_clamps_visually() {
        assert_eq!(render_bar(15.0, 10.0, 10, '▓', '░'), "▓".repeat(10));
    }

    #[test]
    fn test_bar_degenerate_inputs() {
        // Negative progress renders empty, never a negative repeat count.
        assert_eq!(render_bar(-3.0, 10.0, 10, '▓', '░'), "░".repeat(10));
        // Zero total: value/0 is infinite (full) or NaN (empty), deterministically.
        assert_eq!(render_bar(1.0, 0.0, 10, '▓', '░'), "▓".repeat(10));
        assert_eq!(render_bar(0.0, 0.0, 10, '▓', '░'), "░".repeat(10));
        // Zero width stays empty.
        assert_eq!(render_bar(5.0, 10.0, 0, '▓', '░'), "");
    }
}
