//! Process-table snapshots with full command lines.

use crate::types::{ProcessEntry, ReapError};

/// Snapshot the current process table.
///
/// Entries that vanish or refuse access mid-scan are skipped. Kernel threads
/// come back with an empty command line, so they can never match a pattern.
/// The calling process is excluded so a pattern naming this binary does not
/// make it reap itself.
pub fn list_processes() -> Result<Vec<ProcessEntry>, ReapError> {
    let own_pid = std::process::id() as i32;
    let mut entries = Vec::new();

    let all_procs = procfs::process::all_processes()
        .map_err(|e| ReapError::ProcfsError(format!("Failed to read /proc: {}", e)))?;

    for proc_result in all_procs {
        if let Ok(proc) = proc_result {
            if proc.pid() == own_pid {
                continue;
            }
            if let Ok(stat) = proc.stat() {
                let cmdline = proc
                    .cmdline()
                    .map(|argv| argv.join(" "))
                    .unwrap_or_default();

                entries.push(ProcessEntry {
                    pid: stat.pid,
                    name: stat.comm.clone(),
                    cmdline,
                });
            }
        }
    }

    Ok(entries)
}

/// Filter a snapshot down to the entries whose command line contains `pattern`.
pub fn matching<'a>(snapshot: &'a [ProcessEntry], pattern: &str) -> Vec<&'a ProcessEntry> {
    snapshot.iter().filter(|e| e.matches(pattern)).collect()
}
