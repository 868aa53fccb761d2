//! Data types and error definitions for the cleanup library.

use thiserror::Error;

/// One row of a process-table snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    pub pid: i32,
    pub name: String,
    pub cmdline: String,
}

impl ProcessEntry {
    /// Case-sensitive substring match against the full command line,
    /// program name and arguments included.
    pub fn matches(&self, pattern: &str) -> bool {
        self.cmdline.contains(pattern)
    }
}

/// Errors that can occur while scanning, signalling, or reporting.
#[derive(Error, Debug)]
pub enum ReapError {
    #[error("Failed to send signal to PID {0}: {1}")]
    SignalError(i32, String),
    #[error("Invalid device glob {0:?}: {1}")]
    BadGlob(String, String),
    #[error("Procfs error: {0}")]
    ProcfsError(String),
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<procfs::ProcError> for ReapError {
    fn from(err: procfs::ProcError) -> Self {
        ReapError::ProcfsError(err.to_string())
    }
}
