//! Wire format of the scan endpoint.

use serde::{Deserialize, Serialize};
use voxscan_project::{
    ColorTable, GridDimensions, LabelField, OccupancyField, RenderPoint, occupied_count,
};

use crate::error::Result;

/// Body returned by the scan endpoint.
///
/// ```json
/// { "completed_scan": [[[0.0, 1.0]]], "semantic_labels": [[2]] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScanResponse {
    /// Occupancy grid indexed `[z][y][x]`.
    pub completed_scan: OccupancyField,
    /// Semantic label per `(z, y)` column.
    pub semantic_labels: LabelField,
}

impl ScanResponse {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    #[must_use]
    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions::of(&self.completed_scan)
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        occupied_count(&self.completed_scan)
    }

    /// Check the payload's shape without projecting it.
    pub fn validate(&self) -> Result<GridDimensions> {
        Ok(voxscan_project::validate(
            &self.completed_scan,
            &self.semantic_labels,
        )?)
    }

    /// Project the occupied cells into render points.
    pub fn project(&self, colors: &ColorTable, voxel_size: f32) -> Result<Vec<RenderPoint>> {
        Ok(voxscan_project::project(
            &self.completed_scan,
            &self.semantic_labels,
            colors,
            voxel_size,
        )?)
    }
}
