//! Public session handle
//!
//! [`ProgressLogger`] ties the three pieces together for one session: it
//! acquires the console (interception), spawns the render scheduler, and
//! exposes the caller-facing `update`/`increment`/`stop` surface. The caller
//! holds a single exclusive handle; mutators return `&Self` so calls chain.

use crate::actor::{self, SessionEvent};
use crate::buffer::TermRenderer;
use crate::console::{self, ConsoleError, InterceptGuard};
use crate::options::ProgressOptions;
use crate::renderer::Renderer;
use std::sync::mpsc;
use std::thread;

/// A live progress session.
///
/// Construction installs the console interception and starts the render
/// tick; [`ProgressLogger::stop`] (or dropping the handle) tears both down.
/// At most one session can exist per process at a time - the console is an
/// exclusive resource.
///
/// ```no_run
/// use baton_core::{ProgressLogger, ProgressOptions, console};
///
/// let mut logger = ProgressLogger::start(ProgressOptions {
///     message: "syncing".to_string(),
///     total: Some(3.0),
///     ..ProgressOptions::default()
/// })?;
///
/// logger.update(None, Some(1.0)).increment();
/// console::log("a scrollback line above the live bar");
/// logger.stop(Some("done"));
/// # Ok::<(), baton_core::ConsoleError>(())
/// ```
pub struct ProgressLogger {
    sender: mpsc::Sender<SessionEvent>,
    handle: Option<thread::JoinHandle<()>>,
    guard: InterceptGuard,
    stopped: bool,
}

impl ProgressLogger {
    /// Start a session on the real terminal.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::AlreadyIntercepted`] when another session already
    /// holds the console; nothing is spawned in that case.
    pub fn start(options: ProgressOptions) -> Result<Self, ConsoleError> {
        Self::with_renderer(options, TermRenderer::default())
    }

    /// Start a session drawing through a caller-supplied [`Renderer`].
    ///
    /// # Errors
    ///
    /// Same contract as [`ProgressLogger::start`].
    pub fn with_renderer<R>(options: ProgressOptions, renderer: R) -> Result<Self, ConsoleError>
    where
        R: Renderer + 'static,
    {
        let (sender, receiver) = mpsc::channel();

        // Acquire the console first: a refused acquire must leave nothing
        // running, and a live guard must outlive every wrapped call.
        let log_sender = sender.clone();
        let guard = console::intercept(move |severity, text| {
            let _ = log_sender.send(SessionEvent::Log {
                severity,
                text: text.to_string(),
            });
        })?;

        let determinate = options.is_determinate();
        let handle = thread::spawn(move || {
            let mut renderer = renderer;
            actor::run_render_loop(&receiver, &options, &mut renderer);
        });
        tracing::debug!(determinate, "progress session started");

        Ok(Self {
            sender,
            handle: Some(handle),
            guard,
            stopped: false,
        })
    }

    /// Set the message and/or the value.
    ///
    /// The message is applied only when non-empty. The value is applied
    /// whenever one is given: `Some(0.0)` is a real update, not an omission.
    /// The mode cannot be changed. Returns the same handle for chaining.
    pub fn update(&self, message: Option<&str>, value: Option<f64>) -> &Self {
        let _ = self.sender.send(SessionEvent::Update {
            message: message.map(str::to_string),
            value,
        });
        self
    }

    /// Add one unit of progress. A no-op in indeterminate mode. Returns the
    /// same handle for chaining.
    pub fn increment(&self) -> &Self {
        let _ = self.sender.send(SessionEvent::Increment);
        self
    }

    /// End the session: stop the tick, clear the live line, write the final
    /// summary (determinate) or the end message (indeterminate), and restore
    /// the console entry points.
    ///
    /// Blocks until the final line is on the terminal. Calling `stop` again
    /// is a no-op; dropping an unstopped handle performs the same teardown.
    pub fn stop(&mut self, end_message: Option<&str>) {
        if self.stopped {
            return;
        }
        self.stopped = true;

        let (ack_tx, ack_rx) = mpsc::channel();
        let sent = self.sender.send(SessionEvent::Stop {
            end_message: end_message.map(str::to_string),
            ack: ack_tx,
        });
        if sent.is_ok() {
            let _ = ack_rx.recv();
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        self.guard.restore();
        tracing::debug!("progress session stopped");
    }
}

impl Drop for ProgressLogger {
    fn drop(&mut self) {
        self.stop(None);
    }
}

impl std::fmt::Debug for ProgressLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressLogger")
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}
