//! Single-shot signal delivery.

use crate::types::ReapError;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;

/// Send one signal to a process. No escalation, no waiting for the target
/// to exit; the settle delay in the cleanup sequence is the only wait.
pub fn signal_pid(pid: i32, sig: Signal) -> Result<(), ReapError> {
    let pid = Pid::from_raw(pid);

    if let Err(e) = signal::kill(pid, sig) {
        return Err(ReapError::SignalError(pid.as_raw(), e.to_string()));
    }

    Ok(())
}

/// Check whether a process still exists, via the null signal.
pub fn is_alive(pid: i32) -> bool {
    signal::kill(Pid::from_raw(pid), None).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;

    // Above the kernel's pid ceiling, so it can never name a live process.
    const IMPOSSIBLE_PID: i32 = 999_999_999;

    #[test]
    fn live_child_is_probed_and_signalled() {
        let mut child = Command::new("sleep").arg("30").spawn().expect("spawn sleep");
        let pid = child.id() as i32;

        assert!(is_alive(pid));
        signal_pid(pid, Signal::SIGTERM).expect("deliver SIGTERM");

        let _ = child.wait();
    }

    #[test]
    fn signalling_a_missing_pid_is_an_error() {
        let err = signal_pid(IMPOSSIBLE_PID, Signal::SIGTERM).unwrap_err();
        assert!(matches!(err, ReapError::SignalError(..)));
        assert!(!is_alive(IMPOSSIBLE_PID));
    }
}
