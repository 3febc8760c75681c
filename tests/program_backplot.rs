//! End-to-end accumulation of a small program through the facade API.

use backplot::{
    ArcParams, AxisPosition, Canon, FeedSegment, MarkKind, ToolpathAccumulator, TraceCanon,
};

/// Drive a canon the way an interpreter would: a rapid down, a square at
/// feed, a quarter arc, a dwell, then a retract.
fn run_program(canon: &mut dyn Canon) {
    canon.next_line(1);
    canon.set_feed_rate(600.0);
    canon.next_line(2);
    canon.straight_traverse(AxisPosition::from_xyz(0.0, 0.0, 5.0));
    canon.next_line(3);
    canon.straight_traverse(AxisPosition::from_xyz(0.0, 0.0, 0.0));
    canon.next_line(4);
    canon.straight_feed(AxisPosition::from_xyz(10.0, 0.0, 0.0));
    canon.next_line(5);
    canon.straight_feed(AxisPosition::from_xyz(10.0, 10.0, 0.0));
    canon.next_line(6);
    canon
        .arc_feed(ArcParams {
            first_end: 0.0,
            second_end: 20.0,
            first_center: 0.0,
            second_center: 10.0,
            rotation: 1,
            axis_end: 0.0,
            a: 0.0,
            b: 0.0,
            c: 0.0,
            u: 0.0,
            v: 0.0,
            w: 0.0,
        })
        .expect("arc tessellates");
    canon.next_line(7);
    canon.dwell(1.5);
    canon.next_line(8);
    canon.straight_traverse(AxisPosition::from_xyz(0.0, 20.0, 5.0));
}

#[test]
fn test_program_accumulates_all_categories() {
    let mut canon = ToolpathAccumulator::new();
    run_program(&mut canon);

    assert_eq!(canon.traverse().len(), 2);
    assert_eq!(canon.feed().len(), 2);
    assert!(!canon.arcfeed().is_empty());
    assert_eq!(canon.dwells().len(), 1);
    assert_eq!(canon.dwells()[0].kind, MarkKind::Dwell);
    assert_eq!(canon.total_dwell_time(), 1.5);

    // feed rate survives the per-minute to per-second conversion
    assert_eq!(canon.feed()[0].feed_rate, 10.0);

    let extents = canon.compute_extents();
    assert!(!extents.with_tool.is_empty());
    assert_eq!(extents.with_tool.min.x, 0.0);
    assert_eq!(extents.with_tool.max.y, 20.0);
    assert_eq!(extents.with_tool.max.z, 5.0);
}

#[test]
fn test_trace_canon_accepts_same_program() {
    let mut canon = TraceCanon::new();
    run_program(&mut canon);

    let counts = canon.counts();
    assert_eq!(counts.traverses, 3);
    assert_eq!(counts.feeds, 2);
    assert_eq!(counts.arcs, 1);
    assert_eq!(counts.marks, 1);
}

#[test]
fn test_segments_serialize_for_snapshots() {
    let mut canon = ToolpathAccumulator::new();
    run_program(&mut canon);

    let json = serde_json::to_string(canon.feed()).expect("segments serialize");
    let parsed: Vec<FeedSegment> = serde_json::from_str(&json).expect("segments deserialize");
    assert_eq!(parsed.as_slice(), canon.feed());
    assert_eq!(parsed[0].line_number, 4);
}
