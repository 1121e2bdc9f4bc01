use std::sync::{Arc, Mutex};

/// Where soft validation failures are delivered.
///
/// Delivery is fire-and-forget: a channel never blocks the caller and never fails.
pub trait WarningChannel {
    /// Deliver a warning.
    ///
    /// `stack_depth` is the number of caller frames between the user's call site and the
    /// logging entry point, for channels that attribute warnings to a source location.
    fn warn(&self, message: &str, stack_depth: usize);
}

impl<T: WarningChannel + ?Sized> WarningChannel for &T {
    fn warn(&self, message: &str, stack_depth: usize) {
        (**self).warn(message, stack_depth)
    }
}

impl<T: WarningChannel + ?Sized> WarningChannel for Arc<T> {
    fn warn(&self, message: &str, stack_depth: usize) {
        (**self).warn(message, stack_depth)
    }
}

/// Delivers warnings through `log::warn!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogWarnings;

impl WarningChannel for LogWarnings {
    fn warn(&self, message: &str, _stack_depth: usize) {
        log::warn!("{message}");
    }
}

/// A delivered warning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    /// The warning text.
    pub message: String,
    /// The stack depth it was delivered with.
    pub stack_depth: usize,
}

/// Keeps every warning in memory. Clones share the same storage.
#[derive(Clone, Debug, Default)]
pub struct CollectWarnings {
    warnings: Arc<Mutex<Vec<Warning>>>,
}

impl CollectWarnings {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every warning delivered so far.
    pub fn take(&self) -> Vec<Warning> {
        let mut warnings = self.warnings.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *warnings)
    }
}

impl WarningChannel for CollectWarnings {
    fn warn(&self, message: &str, stack_depth: usize) {
        self.warnings
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Warning {
                message: message.to_string(),
                stack_depth,
            });
    }
}
