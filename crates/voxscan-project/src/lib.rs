//! Project completed occupancy scans into colored render points.
//!
//! A scan-completion backend produces a dense occupancy grid indexed
//! `[z][y][x]` together with one semantic label per `(z, y)` column. This
//! crate turns that pair into a flat list of [`RenderPoint`]s, one per
//! occupied cell, ready to be handed to whatever draws them.
//!
//! # Design principles
//!
//! - **Pure**: No I/O, no logging, no retained state between calls
//! - **Synchronous**: Callable from any thread without synchronization
//! - **Host-agnostic**: No dependency on a rendering engine
//!
//! # Key functions
//!
//! - [`project`]: Map occupancy and labels to render points
//! - [`project_default`]: Same, with [`DEFAULT_VOXEL_SIZE`]
//! - [`validate`]: Eagerly check field shapes before projecting
//! - [`occupied_count`]: Count occupied cells without projecting

mod error;

pub mod color;
pub mod field;
pub mod project;

pub use color::{Color, ColorTable};
pub use error::{ProjectError, ProjectResult};
pub use field::{GridDimensions, LabelField, OccupancyField, occupied_count, validate};
pub use project::{project, project_default};

/// Edge length of one voxel in scene units when the caller does not pick one.
pub const DEFAULT_VOXEL_SIZE: f32 = 0.05;

/// One occupied cell, positioned in scene space and colored by its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPoint {
    /// Grid index `(x, y, z)` scaled by the voxel size.
    pub position: glam::Vec3,
    /// Color resolved from the cell's semantic label.
    pub color: Color,
}

impl RenderPoint {
    #[must_use]
    pub const fn new(position: glam::Vec3, color: Color) -> Self {
        Self { position, color }
    }
}
