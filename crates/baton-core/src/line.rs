//! Display-line composition
//!
//! Pure functions that turn session state into the text of the live line or
//! the final summary. Keeping these free of terminal I/O is what makes the
//! render rules testable without a TTY.

use crate::eta::estimate_eta;
use crate::options::ProgressOptions;
use crate::progress::{FrameSet, render_bar};
use crate::session::Session;

/// Floor percentage of `value` against `total`, deliberately unclamped:
/// overshoot reads over 100%, and degenerate totals saturate rather than
/// panic.
fn percentage(value: f64, total: f64) -> i64 {
    ((value / total) * 100.0).floor() as i64
}

/// Compose the live line for the current tick.
pub(crate) fn compose(
    session: &Session,
    options: &ProgressOptions,
    frames: &FrameSet,
    frame_index: usize,
) -> String {
    match session.total {
        Some(total) => compose_determinate(session, options, frames, frame_index, total),
        None => compose_indeterminate(session, options, frames, frame_index),
    }
}

/// `[bar] P% | value/total [| ETA: ...] [| message]`, with the message moved
/// to the front under `display_message_first`. Hidden segments are omitted
/// entirely, never blanked. When the bar is hidden but the animation is not,
/// the current frame stands in for the bar.
fn compose_determinate(
    session: &Session,
    options: &ProgressOptions,
    frames: &FrameSet,
    frame_index: usize,
    total: f64,
) -> String {
    let percent = percentage(session.value, total);
    let head = if options.show_progress_bar {
        let bar = render_bar(
            session.value,
            total,
            options.bar_length,
            options.full_character,
            options.empty_character,
        );
        format!("[{bar}] {percent}%")
    } else if options.show_loading_animation {
        format!("[{}] {percent}%", frames.get(frame_index))
    } else {
        format!("{percent}%")
    };

    let mut segments = Vec::with_capacity(4);
    if options.display_message_first && !session.message.is_empty() {
        segments.push(session.message.clone());
    }
    segments.push(head);
    segments.push(format!("{}/{}", session.value, total));
    if options.show_eta {
        let eta = estimate_eta(session.value, total, session.elapsed());
        segments.push(format!("ETA: {eta}"));
    }
    if !options.display_message_first && !session.message.is_empty() {
        segments.push(session.message.clone());
    }
    segments.join(" | ")
}

/// `[frame] message`, or the bare message when the animation is hidden.
fn compose_indeterminate(
    session: &Session,
    options: &ProgressOptions,
    frames: &FrameSet,
    frame_index: usize,
) -> String {
    if !options.show_loading_animation {
        return session.message.clone();
    }
    let frame = frames.get(frame_index);
    if session.message.is_empty() {
        format!("[{frame}]")
    } else {
        format!("[{frame}] {}", session.message)
    }
}

/// Compose the final summary line written by a determinate `stop`.
///
/// The end message, when supplied, overrides the session message. The
/// average-per-unit figure divides elapsed time by the final value, with a
/// zero default when no units were processed.
pub(crate) fn compose_summary(
    session: &Session,
    options: &ProgressOptions,
    end_message: Option<&str>,
) -> String {
    let message = end_message.unwrap_or(&session.message);
    let elapsed = session.elapsed().as_secs_f64();
    let mut line = if message.is_empty() {
        format!("elapsed {elapsed:.1}s")
    } else {
        format!("{message} | elapsed {elapsed:.1}s")
    };
    if options.show_avg_time_per_item {
        let avg = if session.value > 0.0 {
            elapsed / session.value
        } else {
            0.0
        };
        line.push_str(&format!(" | {avg:.2}s/item"));
    }
    line
}
