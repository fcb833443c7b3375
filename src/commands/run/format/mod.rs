//! Output formatting for the run command

pub mod human;
pub mod json;
pub mod records;

use std::sync::atomic::Ordering;
use std::time::Duration;

use super::RunRequest;

/// Pace the replay and report whether the run may continue
pub(crate) fn step(request: &RunRequest) -> bool {
    if request.delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(request.delay_ms));
    }
    !request.cancelled.load(Ordering::SeqCst)
}
