//! Console interception - scoped capture of the process-wide entry points
//!
//! The process has one console: three entry points (`log`, `warn`, `error`)
//! that ordinary code calls to print a line. By default they write straight
//! to stdout. A progress session *intercepts* them: [`intercept`] swaps all
//! three for wrappers that forward each call, tagged with its severity, to a
//! sink, and returns an [`InterceptGuard`] holding the originals.
//!
//! Ownership is exclusive and enforced: at most one guard may be outstanding
//! per process. A second acquire fails fast with
//! [`ConsoleError::AlreadyIntercepted`] instead of silently corrupting the
//! first holder's saved originals. Releasing the guard (explicitly or on
//! drop) restores the originals exactly once; restoring a guard that never
//! installed, or restoring twice, is a safe no-op.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use thiserror::Error;

/// A console entry point: one line of text in, side effects out.
pub type EntryFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Severity class of an intercepted console call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// `log`-class calls.
    Info,
    /// `warn`-class calls.
    Warning,
    /// `error`-class calls.
    Error,
}

/// Errors from acquiring the console.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Another session already holds the console entry points.
    #[error("console entry points are already intercepted by another session")]
    AlreadyIntercepted,
}

/// The three entry points, swapped as a unit.
struct Entries {
    log: EntryFn,
    warn: EntryFn,
    error: EntryFn,
}

impl Entries {
    /// The pre-interception defaults: write the line to stdout.
    fn stdout() -> Self {
        Self {
            log: Arc::new(|text| println!("{text}")),
            warn: Arc::new(|text| println!("{text}")),
            error: Arc::new(|text| println!("{text}")),
        }
    }
}

fn console() -> &'static Mutex<Entries> {
    static CONSOLE: OnceLock<Mutex<Entries>> = OnceLock::new();
    CONSOLE.get_or_init(|| Mutex::new(Entries::stdout()))
}

fn entries() -> MutexGuard<'static, Entries> {
    console().lock().unwrap_or_else(PoisonError::into_inner)
}

/// Held-flag enforcing the single outstanding guard.
static HELD: AtomicBool = AtomicBool::new(false);

/// Print a line through the current `log` entry point.
pub fn log(text: &str) {
    let entry = Arc::clone(&entries().log);
    entry(text);
}

/// Print a line through the current `warn` entry point.
pub fn warn(text: &str) {
    let entry = Arc::clone(&entries().warn);
    entry(text);
}

/// Print a line through the current `error` entry point.
pub fn error(text: &str) {
    let entry = Arc::clone(&entries().error);
    entry(text);
}

/// Snapshot the current entry points.
///
/// Returned in `(log, warn, error)` order. Useful for asserting, pointer for
/// pointer, that a session restored what it found.
pub fn snapshot() -> (EntryFn, EntryFn, EntryFn) {
    let entries = entries();
    (
        Arc::clone(&entries.log),
        Arc::clone(&entries.warn),
        Arc::clone(&entries.error),
    )
}

/// Swap all three entry points for wrappers feeding `sink`.
///
/// The originals are captured once into the returned guard and reinstated by
/// [`InterceptGuard::restore`] (or on drop).
///
/// # Errors
///
/// [`ConsoleError::AlreadyIntercepted`] when a guard is already outstanding;
/// the current entry points are left untouched.
pub fn intercept<F>(sink: F) -> Result<InterceptGuard, ConsoleError>
where
    F: Fn(Severity, &str) + Send + Sync + 'static,
{
    if HELD
        .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
        .is_err()
    {
        return Err(ConsoleError::AlreadyIntercepted);
    }

    let sink = Arc::new(sink);
    let wrappers = Entries {
        log: {
            let sink = Arc::clone(&sink);
            Arc::new(move |text: &str| sink(Severity::Info, text))
        },
        warn: {
            let sink = Arc::clone(&sink);
            Arc::new(move |text: &str| sink(Severity::Warning, text))
        },
        error: Arc::new(move |text: &str| sink(Severity::Error, text)),
    };

    let saved = std::mem::replace(&mut *entries(), wrappers);
    tracing::debug!("console entry points intercepted");
    Ok(InterceptGuard { saved: Some(saved) })
}

/// The interception record: saved originals plus the obligation to put them
/// back. Restores on drop, so early returns and failures release the console
/// too.
#[derive(Default)]
pub struct InterceptGuard {
    saved: Option<Entries>,
}

impl InterceptGuard {
    /// Reinstate the saved entry points.
    ///
    /// Exactly-once: the first call restores, every later call is a no-op.
    /// A defaulted guard (interception never installed) is also a no-op and
    /// never touches another holder's state.
    pub fn restore(&mut self) {
        if let Some(saved) = self.saved.take() {
            *entries() = saved;
            HELD.store(false, Ordering::Release);
            tracing::debug!("console entry points restored");
        }
    }
}

impl Drop for InterceptGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

impl std::fmt::Debug for InterceptGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptGuard")
            .field("installed", &self.saved.is_some())
            .finish()
    }
}

/// Serializes tests that acquire the process-wide console.
#[cfg(test)]
pub(crate) fn test_lock() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
