//! Tool table with toolchanger pocket semantics
//!
//! Pocket 0 models the spindle. A random toolchanger returns the spindle
//! tool to the pocket the new tool came from, so a change swaps the two
//! entries; a non-random changer copies the selected pocket into the
//! spindle, and selecting pocket 0 empties it.

use backplot_core::AxisPosition;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One tool-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolEntry {
    /// Tool number, -1 for an empty pocket
    pub tool_number: i32,
    /// Tool-length offset across all nine axes
    pub offset: AxisPosition,
    /// Cutter diameter
    pub diameter: f64,
    /// Lathe tool front angle, degrees
    pub front_angle: f64,
    /// Lathe tool back angle, degrees
    pub back_angle: f64,
    /// Lathe tool orientation code (0-9)
    pub orientation: i32,
}

impl ToolEntry {
    /// The empty-pocket sentinel.
    pub const EMPTY: Self = Self {
        tool_number: -1,
        offset: AxisPosition::ZERO,
        diameter: 0.0,
        front_angle: 0.0,
        back_angle: 0.0,
        orientation: 0,
    };

    /// Create an entry with the given number and tool-length offset.
    pub fn new(tool_number: i32, offset: AxisPosition) -> Self {
        Self {
            tool_number,
            offset,
            ..Self::EMPTY
        }
    }

    /// True for the empty-pocket sentinel.
    pub fn is_empty(&self) -> bool {
        self.tool_number < 0
    }
}

impl Default for ToolEntry {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Pocketed tool storage backing `change_tool`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolTable {
    pockets: Vec<ToolEntry>,
    random_toolchanger: bool,
}

impl ToolTable {
    /// Build a table from pocket entries; pocket 0 is the spindle and is
    /// created empty if the list does not include it.
    pub fn new(mut pockets: Vec<ToolEntry>, random_toolchanger: bool) -> Self {
        if pockets.is_empty() {
            pockets.push(ToolEntry::EMPTY);
        }
        Self {
            pockets,
            random_toolchanger,
        }
    }

    /// Number of pockets including the spindle.
    pub fn len(&self) -> usize {
        self.pockets.len()
    }

    /// True when only the spindle pocket exists.
    pub fn is_empty(&self) -> bool {
        self.pockets.len() <= 1
    }

    /// Entry at `pocket`, or the empty sentinel when out of range.
    pub fn tool(&self, pocket: usize) -> ToolEntry {
        self.pockets.get(pocket).copied().unwrap_or(ToolEntry::EMPTY)
    }

    /// Entry currently in the spindle.
    pub fn spindle_tool(&self) -> ToolEntry {
        self.tool(0)
    }

    /// Load the tool from `pocket` into the spindle using the configured
    /// changer discipline.
    pub fn change_tool(&mut self, pocket: usize) {
        if pocket >= self.pockets.len() {
            warn!(pocket, pockets = self.pockets.len(), "tool change from unknown pocket");
            return;
        }

        if self.random_toolchanger {
            self.pockets.swap(0, pocket);
        } else if pocket == 0 {
            self.pockets[0] = ToolEntry::EMPTY;
        } else {
            self.pockets[0] = self.pockets[pocket];
        }
    }
}

impl Default for ToolTable {
    fn default() -> Self {
        Self::new(Vec::new(), false)
    }
}
