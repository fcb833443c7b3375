//! Records run output
//!
//! A run header followed by one tagged line per event.

use graphstep_core::engine::{self, AlgorithmEvent, FnSink};
use graphstep_core::error::Result;
use graphstep_core::records::{format_event_record, format_run_header};

use super::super::RunRequest;
use super::step;

pub fn render(request: &RunRequest) -> Result<()> {
    println!(
        "{}",
        format_run_header(request.algorithm.name(), request.start)
    );

    let mut sink = FnSink(|event: AlgorithmEvent| {
        println!("{}", format_event_record(&event));
        step(request)
    });

    engine::run(request.algorithm, request.graph, request.start, &mut sink)
}
