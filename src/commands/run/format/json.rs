//! JSON run output
//!
//! Collects the full run and prints a single envelope; a cancelled run
//! keeps the events gathered so far and is flagged as such.

use std::sync::atomic::Ordering;

use graphstep_core::engine::{self, AlgorithmEvent, FnSink};
use graphstep_core::error::Result;

use super::super::RunRequest;

pub fn render(request: &RunRequest) -> Result<()> {
    let mut events: Vec<AlgorithmEvent> = Vec::new();

    let mut sink = FnSink(|event: AlgorithmEvent| {
        events.push(event);
        !request.cancelled.load(Ordering::SeqCst)
    });
    engine::run(request.algorithm, request.graph, request.start, &mut sink)?;

    let envelope = serde_json::json!({
        "algorithm": request.algorithm.name(),
        "start": request.start,
        "cancelled": request.cancelled.load(Ordering::SeqCst),
        "generated": chrono::Utc::now().to_rfc3339(),
        "events": events,
    });
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
