//! Client for a scan-completion backend.
//!
//! The backend answers a single POST with a completed occupancy grid and its
//! semantic labels. This crate fetches that payload, projects it with
//! [`voxscan_project`], and hands the resulting points to a [`Renderer`]
//! through a [`Visualizer`] that replaces the previous scene on every
//! refresh.
//!
//! # Example
//!
//! ```no_run
//! use voxscan::{Client, PointCloud, Visualizer};
//!
//! # async fn run() -> voxscan::Result<()> {
//! let client = Client::new();
//! let mut visualizer = Visualizer::new(PointCloud::new());
//! let shown = visualizer.refresh(&client).await?;
//! println!("{shown} voxels on screen");
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod render;
mod response;
mod visualizer;

pub use client::{Client, ClientConfig, DEFAULT_SCAN_URL};
pub use error::{Error, Result};
pub use render::{PointCloud, PointId, Renderer};
pub use response::ScanResponse;
pub use visualizer::{Visualizer, VisualizerSettings};

pub use voxscan_project::{
    Color, ColorTable, DEFAULT_VOXEL_SIZE, GridDimensions, LabelField, OccupancyField,
    ProjectError, RenderPoint,
};
