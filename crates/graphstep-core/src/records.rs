//! Utilities for the records output format
//!
//! Line-oriented output: one tagged line per event with a stable field
//! order, cheap to grep and diff.
//!
//! Line tags:
//! - `R` run header
//! - `V` vertex visited
//! - `S` vertex settled
//! - `X` edge relaxed
//! - `C` edge chosen
//! - `K` vertex colored
//! - `I` iteration marker
//! - `N` negative cycle
//! - `D` run completed

use crate::engine::{AlgorithmEvent, RunSummary};

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format the run header line
pub fn format_run_header(algorithm: &str, start: Option<&str>) -> String {
    match start {
        Some(start) => format!("R algo=\"{}\" start={}", escape_quotes(algorithm), start),
        None => format!("R algo=\"{}\"", escape_quotes(algorithm)),
    }
}

/// Format one event as a records line
pub fn format_event_record(event: &AlgorithmEvent) -> String {
    match event {
        AlgorithmEvent::VertexVisited { vertex } => format!("V {}", vertex),
        AlgorithmEvent::VertexSettled { vertex, distance } => {
            format!("S {} dist={}", vertex, distance)
        }
        AlgorithmEvent::EdgeRelaxed {
            from,
            to,
            new_distance,
        } => format!("X {} {} dist={}", from, to, new_distance),
        AlgorithmEvent::EdgeChosen { from, to, weight } => {
            format!("C {} {} w={}", from, to, weight)
        }
        AlgorithmEvent::VertexColored { vertex, color } => {
            format!("K {} color={}", vertex, color)
        }
        AlgorithmEvent::IterationMarker { label } => {
            format!("I \"{}\"", escape_quotes(label))
        }
        AlgorithmEvent::NegativeCycleDetected => "N negative_cycle".to_string(),
        AlgorithmEvent::Completed { summary } => format_summary_record(summary),
    }
}

fn format_summary_record(summary: &RunSummary) -> String {
    match summary {
        RunSummary::Traversal { visited } => format!("D completed visited={}", visited),
        RunSummary::ShortestPaths { distances } => {
            let parts: Vec<String> = distances
                .iter()
                .map(|d| match d.distance {
                    Some(distance) => format!("{}={}", d.vertex, distance),
                    None => format!("{}=inf", d.vertex),
                })
                .collect();
            format!("D completed dist={}", parts.join(","))
        }
        RunSummary::SpanningTree {
            total_weight,
            edge_count,
        } => format!(
            "D completed mst_weight={} edges={}",
            total_weight, edge_count
        ),
        RunSummary::Coloring { colors_used } => {
            format!("D completed colors={}", colors_used)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::VertexDistance;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"say "hi""#), r#"say \"hi\""#);
    }

    #[test]
    fn test_run_header() {
        assert_eq!(
            format_run_header("Bellman-Ford", Some("A")),
            "R algo=\"Bellman-Ford\" start=A"
        );
        assert_eq!(format_run_header("Kruskal", None), "R algo=\"Kruskal\"");
    }

    #[test]
    fn test_event_lines() {
        assert_eq!(
            format_event_record(&AlgorithmEvent::VertexVisited {
                vertex: "A".to_string()
            }),
            "V A"
        );
        assert_eq!(
            format_event_record(&AlgorithmEvent::EdgeChosen {
                from: "A".to_string(),
                to: "B".to_string(),
                weight: 1.5
            }),
            "C A B w=1.5"
        );
        assert_eq!(
            format_event_record(&AlgorithmEvent::Completed {
                summary: RunSummary::ShortestPaths {
                    distances: vec![
                        VertexDistance {
                            vertex: "A".to_string(),
                            distance: Some(0.0)
                        },
                        VertexDistance {
                            vertex: "B".to_string(),
                            distance: None
                        },
                    ]
                }
            }),
            "D completed dist=A=0,B=inf"
        );
    }
}
