//! Narration sink for notable events (castles, captures, game end).
//!
//! The board reports through this trait instead of holding a reference to
//! whatever console draws the text.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

pub trait Narrator: Send + Sync {
    /// Fire-and-forget; implementations must not fail.
    fn log(&self, message: &str);
}

/// Forwards narration to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNarrator;

impl Narrator for LogNarrator {
    fn log(&self, message: &str) {
        log::info!("{message}");
    }
}

/// Keeps every narrated line in memory, oldest first.
///
/// Cloning shares the same buffer, so a presentation layer can keep one
/// handle while the board holds another.
#[derive(Clone, Debug, Default)]
pub struct MemoryNarrator {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryNarrator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Remove and return everything narrated so far.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(needle))
    }
}

impl Narrator for MemoryNarrator {
    fn log(&self, message: &str) {
        self.lines.lock().push(message.to_string());
    }
}

/// Shared handle stored by the board.
#[derive(Clone)]
pub struct NarratorHandle(pub(crate) Arc<dyn Narrator>);

impl NarratorHandle {
    pub fn new(narrator: impl Narrator + 'static) -> Self {
        NarratorHandle(Arc::new(narrator))
    }

    #[inline]
    pub fn log(&self, message: &str) {
        self.0.log(message);
    }
}

impl Default for NarratorHandle {
    fn default() -> Self {
        NarratorHandle::new(LogNarrator)
    }
}

impl fmt::Debug for NarratorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NarratorHandle")
    }
}
