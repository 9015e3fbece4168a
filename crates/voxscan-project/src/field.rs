//! Occupancy and label fields.
//!
//! Both fields are plain nested vectors, exactly as they arrive on the wire.
//! The grid's extent is read from its first layer and first row; every other
//! layer and row is expected to match.

use crate::error::{ProjectError, ProjectResult};

/// Dense occupancy grid indexed `[z][y][x]`. Cells `> 0` are occupied.
pub type OccupancyField = Vec<Vec<Vec<f32>>>;

/// One semantic label per `(z, y)` column, indexed `[z][y]`.
pub type LabelField = Vec<Vec<i32>>;

/// Extent of an occupancy grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridDimensions {
    pub depth: usize,
    pub height: usize,
    pub width: usize,
}

impl GridDimensions {
    /// Read the extent from `occupancy[0][0]`. Missing axes count as zero.
    #[must_use]
    pub fn of(occupancy: &[Vec<Vec<f32>>]) -> Self {
        let depth = occupancy.len();
        let height = occupancy.first().map_or(0, Vec::len);
        let width = occupancy
            .first()
            .and_then(|layer| layer.first())
            .map_or(0, Vec::len);
        Self {
            depth,
            height,
            width,
        }
    }

    /// Number of cells the grid declares.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.depth * self.height * self.width
    }

    /// True if any axis has zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }
}

/// Count the occupied cells within the declared extent.
///
/// Cells beyond the first row's width are ignored, as are rows missing from
/// a short layer.
#[must_use]
pub fn occupied_count(occupancy: &[Vec<Vec<f32>>]) -> usize {
    let dims = GridDimensions::of(occupancy);
    occupancy
        .iter()
        .flat_map(|layer| layer.iter().take(dims.height))
        .flat_map(|row| row.iter().take(dims.width))
        .filter(|&&value| value > 0.0)
        .count()
}

/// Eagerly check that a scan can be projected.
///
/// Unlike [`project`](crate::project), an empty grid is reported as
/// [`ProjectError::InvalidDimensions`].
pub fn validate(occupancy: &[Vec<Vec<f32>>], labels: &[Vec<i32>]) -> ProjectResult<GridDimensions> {
    let dims = GridDimensions::of(occupancy);
    if dims.is_empty() {
        return Err(ProjectError::InvalidDimensions {
            depth: dims.depth,
            height: dims.height,
            width: dims.width,
        });
    }

    check_labels(labels, dims)?;
    for z in 0..dims.depth {
        for y in 0..dims.height {
            row(occupancy, dims, z, y)?;
        }
    }
    Ok(dims)
}

/// Ensure every `(z, y)` column of `dims` has a label.
pub(crate) fn check_labels(labels: &[Vec<i32>], dims: GridDimensions) -> ProjectResult<()> {
    for z in 0..dims.depth {
        let row_len = labels.get(z).map_or(0, Vec::len);
        if row_len < dims.height {
            return Err(ProjectError::OutOfRange {
                z,
                y: row_len,
                depth: labels.len(),
                height: row_len,
            });
        }
    }
    Ok(())
}

/// Fetch row `(z, y)` truncated to the declared width.
pub(crate) fn row(
    occupancy: &[Vec<Vec<f32>>],
    dims: GridDimensions,
    z: usize,
    y: usize,
) -> ProjectResult<&[f32]> {
    let layer = &occupancy[z];
    let Some(row) = layer.get(y) else {
        return Err(ProjectError::RaggedLayer {
            z,
            expected: dims.height,
            actual: layer.len(),
        });
    };
    row.get(..dims.width).ok_or(ProjectError::RaggedRow {
        z,
        y,
        expected: dims.width,
        actual: row.len(),
    })
}
