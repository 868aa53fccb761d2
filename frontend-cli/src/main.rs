use backend::{run_cleanup_sequence, CleanupConfig, ProcfsLister, ReapError};
use log::{info, warn};
use std::env;
use std::io;
use std::time::Duration;

/// Command-line signatures of the camera application and its helper scripts.
/// Matched as substrings against full command lines, in kill order.
const CAMERA_PATTERNS: &[&str] = &[
    "run.py",
    "motion_detection.py",
    "pan_tilt_controller.py",
    "picamera",
];

/// Camera device nodes whose holders are reaped even when their command
/// line matches nothing above.
const DEVICE_GLOBS: &[&str] = &["/dev/video*"];

const SETTLE_DELAY: Duration = Duration::from_secs(3);

fn main() -> Result<(), ReapError> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = build_config();

    println!("Stopping camera application processes...");
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let survivors = run_cleanup_sequence(&ProcfsLister, &config, &mut out)?;
    if !survivors.is_empty() {
        warn!(
            "{} matching process(es) still running, manual intervention needed",
            survivors.len()
        );
    }

    Ok(())
}

/// Compiled defaults, with environment overrides for operators.
fn build_config() -> CleanupConfig {
    let mut settle_delay = SETTLE_DELAY;
    if let Ok(value) = env::var("CAMERA_REAPER_SETTLE_SECS") {
        if let Ok(secs) = value.parse::<u64>() {
            settle_delay = Duration::from_secs(secs);
            info!("Settle delay override from environment: {}s", secs);
        } else {
            warn!("Invalid CAMERA_REAPER_SETTLE_SECS value: {}", value);
        }
    }

    let mut device_globs: Vec<String> = DEVICE_GLOBS.iter().map(|s| s.to_string()).collect();
    if let Ok(value) = env::var("CAMERA_REAPER_DEVICES") {
        let globs: Vec<String> = value
            .split(':')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if globs.is_empty() {
            warn!("Empty CAMERA_REAPER_DEVICES value, keeping defaults");
        } else {
            info!("Device glob override from environment: {:?}", globs);
            device_globs = globs;
        }
    }

    CleanupConfig {
        patterns: CAMERA_PATTERNS.iter().map(|s| s.to_string()).collect(),
        device_globs,
        settle_delay,
    }
}
