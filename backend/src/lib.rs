//! UI-agnostic camera process cleanup library for Linux.
//!
//! Provides process-table snapshots, single-shot signal delivery, device
//! holder discovery, and the pattern/device/wait/report cleanup sequence.
//! Uses `nix` and `procfs` for system interaction.

mod device_holders;
mod process_kill;
mod process_list;
mod reaper;
mod types;

pub use device_holders::{expand_device_globs, holders_of};
pub use process_kill::{is_alive, signal_pid};
pub use process_list::{list_processes, matching};
pub use reaper::{
    run_cleanup_sequence, terminate_by_pattern, terminate_by_resource, CleanupConfig,
    ProcessLister, ProcfsLister,
};
pub use types::{ProcessEntry, ReapError};
