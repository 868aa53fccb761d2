//! The cleanup sequence: signal by pattern, signal device holders, wait,
//! then list what is still running.

use crate::device_holders;
use crate::process_kill;
use crate::process_list;
use crate::types::{ProcessEntry, ReapError};
use log::warn;
use nix::sys::signal::Signal;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Capability over the ambient process table, so the sequence can be
/// exercised against a fake without signalling real processes.
pub trait ProcessLister {
    fn list(&self) -> Result<Vec<ProcessEntry>, ReapError>;
    fn terminate(&self, pid: i32, signal: Signal) -> Result<(), ReapError>;
    fn holders_of(&self, path: &Path) -> Result<Vec<i32>, ReapError>;
    fn expand_globs(&self, patterns: &[String]) -> Result<Vec<PathBuf>, ReapError>;
}

/// The real lister, backed by `/proc` and `kill(2)`.
pub struct ProcfsLister;

impl ProcessLister for ProcfsLister {
    fn list(&self) -> Result<Vec<ProcessEntry>, ReapError> {
        process_list::list_processes()
    }

    fn terminate(&self, pid: i32, signal: Signal) -> Result<(), ReapError> {
        process_kill::signal_pid(pid, signal)
    }

    fn holders_of(&self, path: &Path) -> Result<Vec<i32>, ReapError> {
        device_holders::holders_of(path)
    }

    fn expand_globs(&self, patterns: &[String]) -> Result<Vec<PathBuf>, ReapError> {
        device_holders::expand_device_globs(patterns)
    }
}

/// What to kill and how long to wait before checking the result.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// Substrings matched against full command lines, in kill order.
    pub patterns: Vec<String>,
    /// Shell-style globs naming the device nodes whose holders are reaped.
    pub device_globs: Vec<String>,
    /// Fixed wait between signalling and the survivor re-scan.
    pub settle_delay: Duration,
}

/// Signal every process whose command line contains `pattern` with SIGTERM.
///
/// Zero matches is a silent success. Signal failures are logged and
/// swallowed; only a broken output stream aborts.
pub fn terminate_by_pattern<L, W>(lister: &L, pattern: &str, out: &mut W) -> Result<(), ReapError>
where
    L: ProcessLister + ?Sized,
    W: Write,
{
    let snapshot = match lister.list() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Skipping pattern {:?}, process scan failed: {}", pattern, e);
            return Ok(());
        }
    };

    for entry in process_list::matching(&snapshot, pattern) {
        writeln!(out, "stopping {} (pid {})", entry.name, entry.pid)?;
        if let Err(e) = lister.terminate(entry.pid, Signal::SIGTERM) {
            warn!("Could not signal pid {}: {}", entry.pid, e);
        }
    }

    Ok(())
}

/// Signal every holder of each device path with SIGKILL.
///
/// A missing path or a path with no holders is a silent no-op.
pub fn terminate_by_resource<L, W>(
    lister: &L,
    paths: &[PathBuf],
    out: &mut W,
) -> Result<(), ReapError>
where
    L: ProcessLister + ?Sized,
    W: Write,
{
    for path in paths {
        let holders = match lister.holders_of(path) {
            Ok(holders) => holders,
            Err(e) => {
                warn!("Skipping {}, holder scan failed: {}", path.display(), e);
                continue;
            }
        };

        for pid in holders {
            writeln!(out, "stopping holder of {} (pid {})", path.display(), pid)?;
            if let Err(e) = lister.terminate(pid, Signal::SIGKILL) {
                warn!("Could not signal pid {}: {}", pid, e);
            }
        }
    }

    Ok(())
}

/// Run the whole sequence: pattern kills in order, then device-holder kills,
/// then the settle delay, then one re-scan against the same pattern list.
///
/// Survivors are written to `out` for the operator and returned for tests.
/// Every step runs regardless of earlier failures; the delay elapses fully
/// even when nothing was signalled.
pub fn run_cleanup_sequence<L, W>(
    lister: &L,
    config: &CleanupConfig,
    out: &mut W,
) -> Result<Vec<ProcessEntry>, ReapError>
where
    L: ProcessLister + ?Sized,
    W: Write,
{
    for pattern in &config.patterns {
        terminate_by_pattern(lister, pattern, out)?;
    }

    let devices = match lister.expand_globs(&config.device_globs) {
        Ok(devices) => devices,
        Err(e) => {
            warn!("Skipping device sweep, glob expansion failed: {}", e);
            Vec::new()
        }
    };
    terminate_by_resource(lister, &devices, out)?;

    thread::sleep(config.settle_delay);

    writeln!(out, "checking for remaining camera processes")?;
    let snapshot = lister.list()?;
    let survivors: Vec<ProcessEntry> = snapshot
        .into_iter()
        .filter(|e| config.patterns.iter().any(|p| e.matches(p)))
        .collect();

    if survivors.is_empty() {
        writeln!(out, "no matching processes remain")?;
    } else {
        for entry in &survivors {
            writeln!(
                out,
                "still running: {} (pid {}) {}",
                entry.name, entry.pid, entry.cmdline
            )?;
        }
    }

    Ok(survivors)
}
