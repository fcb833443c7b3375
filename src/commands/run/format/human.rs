//! Human-readable run output
//!
//! One log line per event under an algorithm banner.

use graphstep_core::engine::{self, AlgorithmEvent, FnSink};
use graphstep_core::error::Result;

use super::super::RunRequest;
use super::step;

pub fn render(request: &RunRequest) -> Result<()> {
    if !request.quiet {
        println!("=== {} ===", request.algorithm.name());
    }

    let mut sink = FnSink(|event: AlgorithmEvent| {
        println!("{}", event);
        step(request)
    });

    engine::run(request.algorithm, request.graph, request.start, &mut sink)
}
