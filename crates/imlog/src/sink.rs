use std::sync::{Arc, Mutex};

use imlog_image::TensorDataMeaning;
use imlog_tensor::DynTensor;

use crate::error::SinkError;

/// A tensor ready to be logged, with everything the sink needs to interpret it.
#[derive(Clone, Debug, PartialEq)]
pub struct TensorMsg {
    /// Where the tensor is logged.
    pub path: String,
    /// The tensor data.
    pub tensor: DynTensor,
    /// How the values are to be interpreted.
    pub meaning: TensorDataMeaning,
    /// Units per meter, for depth images.
    pub meter: Option<f32>,
    /// Whether the data is independent of time.
    pub timeless: bool,
}

/// The tensor logging service the logger hands its data to.
pub trait TensorSink {
    /// Log one tensor.
    fn log_tensor(&self, msg: TensorMsg) -> Result<(), SinkError>;
}

impl<T: TensorSink + ?Sized> TensorSink for &T {
    fn log_tensor(&self, msg: TensorMsg) -> Result<(), SinkError> {
        (**self).log_tensor(msg)
    }
}

impl<T: TensorSink + ?Sized> TensorSink for Arc<T> {
    fn log_tensor(&self, msg: TensorMsg) -> Result<(), SinkError> {
        (**self).log_tensor(msg)
    }
}

impl<T: TensorSink + ?Sized> TensorSink for Box<T> {
    fn log_tensor(&self, msg: TensorMsg) -> Result<(), SinkError> {
        (**self).log_tensor(msg)
    }
}

/// A sink that keeps every message in memory.
///
/// Clones share the same storage.
#[derive(Clone, Default)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<TensorMsg>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every message logged so far.
    pub fn take(&self) -> Vec<TensorMsg> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of messages logged so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing was logged.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<TensorMsg>> {
        self.messages.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TensorSink for MemorySink {
    fn log_tensor(&self, msg: TensorMsg) -> Result<(), SinkError> {
        self.lock().push(msg);
        Ok(())
    }
}

/// A sink that writes a one line summary of every tensor to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TensorSink for LogSink {
    fn log_tensor(&self, msg: TensorMsg) -> Result<(), SinkError> {
        log::info!(
            "{}: shape {:?}, dtype {}, meaning {:?}, meter {:?}, timeless {}",
            msg.path,
            msg.tensor.shape(),
            msg.tensor.dtype(),
            msg.meaning,
            msg.meter,
            msg.timeless,
        );
        Ok(())
    }
}
