//! Camera device nodes and the processes holding them open.

use crate::types::ReapError;
use procfs::process::FDTarget;
use std::path::{Path, PathBuf};

/// Expand shell-style device globs such as `/dev/video*`.
///
/// A glob that matches nothing yields nothing; only a malformed pattern is
/// reported as an error.
pub fn expand_device_globs(patterns: &[String]) -> Result<Vec<PathBuf>, ReapError> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let matches = glob::glob(pattern)
            .map_err(|e| ReapError::BadGlob(pattern.clone(), e.to_string()))?;
        for entry in matches {
            if let Ok(path) = entry {
                paths.push(path);
            }
        }
    }

    Ok(paths)
}

/// PIDs of every process with an open file descriptor on `path`.
///
/// Unreadable fd tables (permission, racing exits) are skipped, and the
/// calling process is never counted as a holder. A path nobody holds
/// yields an empty list.
pub fn holders_of(path: &Path) -> Result<Vec<i32>, ReapError> {
    let own_pid = std::process::id() as i32;
    let mut holders = Vec::new();

    let all_procs = procfs::process::all_processes()
        .map_err(|e| ReapError::ProcfsError(format!("Failed to read /proc: {}", e)))?;

    for proc_result in all_procs {
        if let Ok(proc) = proc_result {
            if proc.pid() == own_pid {
                continue;
            }
            if let Ok(fds) = proc.fd() {
                for fd in fds.flatten() {
                    if let FDTarget::Path(target) = &fd.target {
                        if target.as_path() == path {
                            holders.push(proc.pid());
                            break;
                        }
                    }
                }
            }
        }
    }

    Ok(holders)
}
