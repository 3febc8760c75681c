//! Work-coordinate-system offset table
//!
//! Holds the nine selectable origins (G54-G59, G59.1-G59.3), indexed 1-9 as
//! the canonical protocol does. The table is a plain value the host wires
//! up; `apply_to` pushes a selected offset into a canon.

use crate::canon::Canon;
use backplot_core::{AxisPosition, Error, Result};
use serde::{Deserialize, Serialize};

/// Display labels for coordinate systems 1-9.
pub const WORK_OFFSET_LABELS: [&str; 9] = [
    "G54", "G55", "G56", "G57", "G58", "G59", "G59.1", "G59.2", "G59.3",
];

/// The nine work-coordinate-system offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOffsetTable {
    offsets: [AxisPosition; 9],
}

impl WorkOffsetTable {
    /// Create a table with all offsets at zero.
    pub fn new() -> Self {
        Self {
            offsets: [AxisPosition::ZERO; 9],
        }
    }

    /// Label for a coordinate-system index (1-9).
    pub fn label(index: u8) -> Result<&'static str> {
        WORK_OFFSET_LABELS
            .get(Self::slot(index)?)
            .copied()
            .ok_or(Error::InvalidCoordinateSystem { index })
    }

    /// Index (1-9) for a label such as "G54" or "G59.1".
    pub fn index_for_label(label: &str) -> Option<u8> {
        WORK_OFFSET_LABELS
            .iter()
            .position(|l| l.eq_ignore_ascii_case(label))
            .map(|slot| slot as u8 + 1)
    }

    /// Offset stored for a coordinate-system index (1-9).
    pub fn offset(&self, index: u8) -> Result<AxisPosition> {
        Ok(self.offsets[Self::slot(index)?])
    }

    /// Replace the offset for a coordinate-system index (1-9).
    pub fn set_offset(&mut self, index: u8, offset: AxisPosition) -> Result<()> {
        self.offsets[Self::slot(index)?] = offset;
        Ok(())
    }

    /// Push the selected offset into a canon as the active system.
    pub fn apply_to(&self, index: u8, canon: &mut dyn Canon) -> Result<()> {
        canon.set_g5x_offset(index, self.offset(index)?);
        Ok(())
    }

    fn slot(index: u8) -> Result<usize> {
        if (1..=9).contains(&index) {
            Ok(index as usize - 1)
        } else {
            Err(Error::InvalidCoordinateSystem { index })
        }
    }
}

impl Default for WorkOffsetTable {
    fn default() -> Self {
        Self::new()
    }
}
