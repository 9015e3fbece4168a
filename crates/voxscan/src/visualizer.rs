//! Scene replacement on top of a [`Renderer`].

use std::fmt;

use serde::Deserialize;
use voxscan_project::{ColorTable, DEFAULT_VOXEL_SIZE, GridDimensions, RenderPoint};

use crate::client::Client;
use crate::error::Result;
use crate::render::Renderer;

fn default_voxel_size() -> f32 {
    DEFAULT_VOXEL_SIZE
}

/// How scans are turned into points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VisualizerSettings {
    /// Scene-space edge length of one voxel.
    #[serde(default = "default_voxel_size")]
    pub voxel_size: f32,
    /// Label palette.
    #[serde(default = "ColorTable::semantic")]
    pub colors: ColorTable,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            voxel_size: DEFAULT_VOXEL_SIZE,
            colors: ColorTable::semantic(),
        }
    }
}

/// Owns the visuals of the most recent scan.
///
/// Every [`show`](Self::show) destroys what the previous call created before
/// creating the new points, so at most one scan is on screen at a time.
pub struct Visualizer<R: Renderer> {
    renderer: R,
    settings: VisualizerSettings,
    live: Vec<R::Handle>,
}

impl<R> fmt::Debug for Visualizer<R>
where
    R: Renderer + fmt::Debug,
    R::Handle: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visualizer")
            .field("renderer", &self.renderer)
            .field("settings", &self.settings)
            .field("live", &self.live)
            .finish()
    }
}

impl<R: Renderer> Visualizer<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self::with_settings(renderer, VisualizerSettings::default())
    }

    #[must_use]
    pub fn with_settings(renderer: R, settings: VisualizerSettings) -> Self {
        Self {
            renderer,
            settings,
            live: Vec::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &VisualizerSettings {
        &self.settings
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Give the renderer back, leaving its current visuals in place.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Number of visuals currently spawned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Replace the scene with `points`.
    pub fn show(&mut self, points: &[RenderPoint]) {
        self.clear();
        self.live.reserve(points.len());
        for point in points {
            self.live.push(self.renderer.spawn(point));
        }
    }

    /// Destroy every visual created by this visualizer.
    pub fn clear(&mut self) {
        for handle in self.live.drain(..) {
            self.renderer.despawn(handle);
        }
    }

    /// Fetch a scan, project it and show it.
    ///
    /// On failure the scene is left empty and the error is returned.
    /// Returns the number of points shown.
    pub async fn refresh(&mut self, client: &Client) -> Result<usize> {
        match self.load(client).await {
            Ok((dims, points)) => {
                self.show(&points);
                tracing::info!(
                    "Showing {} voxels from {}x{}x{} scan",
                    points.len(),
                    dims.depth,
                    dims.height,
                    dims.width
                );
                Ok(points.len())
            }
            Err(e) => {
                tracing::error!("Failed to refresh scan: {}", e);
                self.clear();
                Err(e)
            }
        }
    }

    async fn load(&self, client: &Client) -> Result<(GridDimensions, Vec<RenderPoint>)> {
        let scan = client.fetch_scan().await?;
        let points = scan.project(&self.settings.colors, self.settings.voxel_size)?;
        tracing::debug!(
            "Projected {} of {} cells",
            points.len(),
            scan.dimensions().cell_count()
        );
        Ok((scan.dimensions(), points))
    }
}
