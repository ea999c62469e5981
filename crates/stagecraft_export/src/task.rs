//! Completion handles for in-flight exports.

use flume::{Receiver, TryRecvError};

use crate::errors::{ExportError, Result};

/// What a finished export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    /// Name the download was saved under.
    pub file_name: String,
    /// Size of the download in bytes.
    pub size: usize,
    /// Archive entry names; just the page for single-file exports.
    pub entries: Vec<String>,
}

/// Handle to an export running in the background.
///
/// Dropping the handle does not cancel the export; the download still
/// happens, only the outcome is no longer observed.
pub struct ExportTask {
    receiver: Receiver<Result<ExportReceipt>>,
    result: Option<Result<ExportReceipt>>,
}

impl ExportTask {
    pub(crate) fn new(receiver: Receiver<Result<ExportReceipt>>) -> Self {
        Self {
            receiver,
            result: None,
        }
    }

    /// Polls for completion without blocking.
    pub fn is_complete(&mut self) -> bool {
        if self.result.is_some() {
            return true;
        }

        match self.receiver.try_recv() {
            Ok(result) => {
                self.result = Some(result);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.result = Some(Err(Self::lost()));
                true
            }
        }
    }

    /// The outcome, if complete.
    #[must_use]
    pub fn result(&self) -> Option<&Result<ExportReceipt>> {
        self.result.as_ref()
    }

    /// Blocks the current thread until the export finishes.
    pub fn wait(self) -> Result<ExportReceipt> {
        match self.result {
            Some(result) => result,
            None => self.receiver.recv().unwrap_or_else(|_| Err(Self::lost())),
        }
    }

    /// Waits asynchronously for the export to finish.
    pub async fn wait_async(self) -> Result<ExportReceipt> {
        match self.result {
            Some(result) => result,
            None => self
                .receiver
                .recv_async()
                .await
                .unwrap_or_else(|_| Err(Self::lost())),
        }
    }

    fn lost() -> ExportError {
        ExportError::TaskFailed("packaging task ended without reporting a result".to_string())
    }
}

impl std::fmt::Debug for ExportTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportTask")
            .field("complete", &self.result.is_some())
            .finish_non_exhaustive()
    }
}
