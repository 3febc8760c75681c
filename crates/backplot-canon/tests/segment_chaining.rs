//! Property tests for segment chaining across arbitrary motion sequences.

use backplot_canon::{Canon, ToolpathAccumulator};
use backplot_core::AxisPosition;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Move {
    Traverse(f64, f64, f64),
    Feed(f64, f64, f64),
}

fn coordinate() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

fn moves() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(
        prop_oneof![
            (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| Move::Traverse(x, y, z)),
            (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| Move::Feed(x, y, z)),
        ],
        1..40,
    )
}

fn run(sequence: &[Move]) -> ToolpathAccumulator {
    let mut canon = ToolpathAccumulator::new();
    for (i, mv) in sequence.iter().enumerate() {
        // one move per line, so emission order can be recovered by line number
        canon.next_line(i as u32 + 1);
        match *mv {
            Move::Traverse(x, y, z) => canon.straight_traverse(AxisPosition::from_xyz(x, y, z)),
            Move::Feed(x, y, z) => canon.straight_feed(AxisPosition::from_xyz(x, y, z)),
        }
    }
    canon
}

proptest! {
    #[test]
    fn segments_chain_in_emission_order(sequence in moves()) {
        let canon = run(&sequence);

        let mut merged: Vec<(u32, AxisPosition, AxisPosition)> = canon
            .traverse()
            .iter()
            .map(|s| (s.line_number, s.start, s.end))
            .chain(canon.feed().iter().map(|s| (s.line_number, s.start, s.end)))
            .collect();
        merged.sort_by_key(|&(line, _, _)| line);

        for pair in merged.windows(2) {
            prop_assert_eq!(pair[0].2, pair[1].1);
        }
    }

    #[test]
    fn uninterrupted_feeds_chain_exactly(sequence in prop::collection::vec(
        (coordinate(), coordinate(), coordinate()),
        2..40,
    )) {
        let mut canon = ToolpathAccumulator::new();
        for &(x, y, z) in &sequence {
            canon.straight_feed(AxisPosition::from_xyz(x, y, z));
        }

        prop_assert_eq!(canon.feed().len(), sequence.len());
        for pair in canon.feed().windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn extents_contain_every_recorded_endpoint(sequence in moves()) {
        let canon = run(&sequence);

        let extents = canon.compute_extents().with_tool;
        let endpoints = canon
            .traverse()
            .iter()
            .map(|s| s.end)
            .chain(canon.feed().iter().map(|s| s.end));
        for end in endpoints {
            prop_assert!(extents.min.x <= end.x && end.x <= extents.max.x);
            prop_assert!(extents.min.y <= end.y && end.y <= extents.max.y);
            prop_assert!(extents.min.z <= end.z && end.z <= extents.max.z);
        }
    }
}
