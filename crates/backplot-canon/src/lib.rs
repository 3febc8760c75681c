//! # Backplot Canon
//!
//! Canonical-motion toolpath accumulation for Backplot.
//! An external G-code interpreter drives the [`Canon`] callback protocol;
//! the [`ToolpathAccumulator`] turns that stream into categorized,
//! offset-corrected segment lists for a renderer to consume.

pub mod accumulator;
pub mod arc;
pub mod canon;
pub mod segments;
pub mod tool_table;
pub mod trace;
pub mod transform;
pub mod work_offsets;

pub use accumulator::{ToolpathAccumulator, DEFAULT_ARC_DIVISIONS};
pub use arc::{ArcTessellator, PlanarArcTessellator};
pub use canon::{ArcParams, Canon};
pub use segments::{DwellMark, FeedSegment, MarkKind, TraverseSegment};
pub use tool_table::{ToolEntry, ToolTable};
pub use trace::{CallCounts, TraceCanon};
pub use transform::TransformState;
pub use work_offsets::{WorkOffsetTable, WORK_OFFSET_LABELS};
