//! Property-based tests
//!
//! - Permissive builds accept exactly the well-formed rows
//! - Every session contributes n visits, n-1 transitions, 2 boundary updates

mod common;

use common::*;
use procmap_core::{EdgeKind, GraphPipeline, LogSource, MiningConfig, RecordPolicy};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Row {
    Good { case: u8, secs: u32, activity: u8 },
    BadTimestamp { case: u8 },
    MissingField { case: u8 },
    EmptyActivity { case: u8 },
}

fn arb_row() -> impl Strategy<Value = Row> {
    prop_oneof![
        4 => (0u8..6, 0u32..86_000, 0u8..5)
            .prop_map(|(case, secs, activity)| Row::Good { case, secs, activity }),
        1 => (0u8..6).prop_map(|case| Row::BadTimestamp { case }),
        1 => (0u8..6).prop_map(|case| Row::MissingField { case }),
        1 => (0u8..6).prop_map(|case| Row::EmptyActivity { case }),
    ]
}

fn render(rows: &[Row]) -> String {
    rows.iter()
        .fold(LogBuilder::new(), |builder, row| match row {
            Row::Good { case, secs, activity } => {
                builder.event(&format!("c{case}"), *secs, &format!("act{activity}"))
            }
            Row::BadTimestamp { case } => builder.raw(&format!("c{case},2024-02-30T00:00:00Z,x")),
            Row::MissingField { case } => builder.raw(&format!("c{case},2024-01-01T00:00:00Z")),
            Row::EmptyActivity { case } => builder.raw(&format!("c{case},2024-01-01T00:00:00Z,")),
        })
        .build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_permissive_keeps_k_of_k_plus_m(rows in prop::collection::vec(arb_row(), 0..60)) {
        let good = rows.iter().filter(|r| matches!(r, Row::Good { .. })).count();
        let bad = rows.len() - good;

        let config = MiningConfig::default().with_record_policy(RecordPolicy::Permissive);
        let outcome = GraphPipeline::new(config)
            .unwrap()
            .run(LogSource::bytes("prop", render(&rows)))
            .unwrap();

        prop_assert_eq!(outcome.report.accepted_records as usize, good);
        prop_assert_eq!(outcome.report.skipped_records as usize, bad);
        prop_assert_eq!(outcome.graph.stats().event_count as usize, good);
    }

    #[test]
    fn prop_visit_transition_boundary_totals(rows in prop::collection::vec(arb_row(), 1..60)) {
        let config = MiningConfig::default().with_record_policy(RecordPolicy::Permissive);
        let outcome = GraphPipeline::new(config)
            .unwrap()
            .run(LogSource::bytes("prop", render(&rows)))
            .unwrap();
        let graph = outcome.graph;
        let sessions = outcome.report.session_count as u64;
        let events = graph.stats().event_count;

        let transitions: u64 = graph.edges.iter()
            .filter(|e| e.kind == EdgeKind::Transition)
            .map(|e| e.count)
            .sum();
        let boundaries: u64 = graph.edges.iter()
            .filter(|e| e.kind == EdgeKind::Boundary)
            .map(|e| e.count)
            .sum();

        prop_assert_eq!(transitions, events - sessions);
        prop_assert_eq!(boundaries, 2 * sessions);
    }
}
