//! baton - a live terminal progress line with console interception
//!
//! One mutable output line - a determinate bar with percentage and ETA, or
//! an indeterminate bounce animation - redrawn in place on a fixed tick,
//! while ordinary logging calls are transparently captured and printed as
//! scrollback above it, never through it.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐
//! │ ProgressLogger │  public handle: update / increment / stop
//! └───────┬────────┘
//!         │ events over mpsc
//!         ▼
//! ┌────────────────┐     ┌──────────────┐
//! │ Render actor   │────▶│   Renderer   │  live-line overwrite + scrollback
//! │ (tick loop)    │     │ (trait seam) │
//! └───────▲────────┘     └──────────────┘
//!         │ log events
//! ┌───────┴────────┐
//! │ console shim   │  scoped swap of process-wide log/warn/error entries
//! └────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`options`] - construction options and their defaults
//! - [`theme`] - bar and message glyphs
//! - [`progress`] - animation frames and the determinate bar
//! - [`eta`] - remaining-time estimation
//! - [`renderer`] - the output trait the scheduler draws through
//! - [`buffer`] - the crossterm-backed terminal renderer
//! - [`console`] - scoped interception of the process-wide logging entry points
//! - [`logger`] - the public session handle
//!
//! # Example
//!
//! ```no_run
//! use baton_core::{ProgressLogger, ProgressOptions, console};
//!
//! let mut logger = ProgressLogger::start(ProgressOptions {
//!     message: "indexing".to_string(),
//!     total: Some(100.0),
//!     ..ProgressOptions::default()
//! })?;
//!
//! for _ in 0..100 {
//!     logger.increment();
//! }
//! console::log("this prints above the bar, not through it");
//! logger.stop(Some("indexed"));
//! # Ok::<(), baton_core::ConsoleError>(())
//! ```
//!
//! At most one session may be active per process: the console entry points
//! are an exclusive resource, and a second [`ProgressLogger::start`] is
//! refused while the first session holds them.
#![allow(clippy::doc_markdown)]

pub mod buffer;
pub mod console;
pub mod eta;
pub mod logger;
pub mod options;
pub mod progress;
pub mod renderer;
pub mod theme;

mod actor;
mod line;
mod session;

pub use buffer::TermRenderer;
pub use console::{ConsoleError, InterceptGuard, Severity};
pub use logger::ProgressLogger;
pub use options::ProgressOptions;
pub use progress::FrameSet;
pub use renderer::Renderer;
pub use theme::Glyphs;
