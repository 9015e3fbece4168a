//! Projection errors.

/// Errors raised while projecting a scan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    /// The label field has no entry for a `(z, y)` column of the occupancy grid.
    ///
    /// `depth` is the number of label layers and `height` the length of the
    /// label row at `z` (0 when that row is missing altogether).
    #[error("no semantic label for column (z={z}, y={y}): label field is {depth} deep, row has {height} entries")]
    OutOfRange {
        z: usize,
        y: usize,
        depth: usize,
        height: usize,
    },

    /// A depth layer of the occupancy grid has fewer rows than the first one.
    #[error("occupancy layer {z} has {actual} rows, expected {expected}")]
    RaggedLayer {
        z: usize,
        expected: usize,
        actual: usize,
    },

    /// A row of the occupancy grid has fewer cells than the first one.
    #[error("occupancy row (z={z}, y={y}) has {actual} cells, expected {expected}")]
    RaggedRow {
        z: usize,
        y: usize,
        expected: usize,
        actual: usize,
    },

    /// The occupancy grid has a zero-length axis.
    ///
    /// Only reported by [`validate`](crate::validate); [`project`](crate::project)
    /// treats an empty grid as having nothing to visit.
    #[error("occupancy grid is empty ({depth}x{height}x{width})")]
    InvalidDimensions {
        depth: usize,
        height: usize,
        width: usize,
    },
}

/// Result type for projection operations.
pub type ProjectResult<T> = Result<T, ProjectError>;
