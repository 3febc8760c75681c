//! # Backplot
//!
//! Toolpath backplotting for CNC machine control: accumulates the
//! canonical-motion callback stream of a G-code interpreter into
//! categorized, offset-corrected segment lists for a renderer to consume.
//!
//! ## Architecture
//!
//! Backplot is organized as a workspace with two crates plus this facade:
//!
//! 1. **backplot-core** - Axis positions, planes, extents, units, errors
//! 2. **backplot-canon** - Canon protocol, accumulator, arc tessellation,
//!    tool/work-offset tables
//! 3. **backplot** - Facade re-exporting the public API of both
//!
//! ## Usage
//!
//! An external interpreter drives a [`ToolpathAccumulator`] through the
//! [`Canon`] trait, one call per motion primitive:
//!
//! ```
//! use backplot::{AxisPosition, Canon, ToolpathAccumulator};
//!
//! let mut canon = ToolpathAccumulator::new();
//! canon.next_line(1);
//! canon.straight_traverse(AxisPosition::from_xyz(0.0, 0.0, 5.0));
//! canon.next_line(2);
//! canon.set_feed_rate(600.0);
//! canon.straight_feed(AxisPosition::from_xyz(10.0, 0.0, 5.0));
//!
//! assert_eq!(canon.feed().len(), 1);
//! let extents = canon.compute_extents();
//! assert!(!extents.with_tool.is_empty());
//! ```

pub use backplot_core::{
    units, AxisPosition, Error, Extents, PathExtents, Plane, Result, EXTENT_SENTINEL,
};

pub use backplot_canon::{
    ArcParams, ArcTessellator, CallCounts, Canon, DwellMark, FeedSegment, MarkKind,
    PlanarArcTessellator, ToolEntry, ToolTable, ToolpathAccumulator, TraceCanon, TransformState,
    TraverseSegment, WorkOffsetTable, DEFAULT_ARC_DIVISIONS, WORK_OFFSET_LABELS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
