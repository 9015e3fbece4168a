//! Renderer capability and an in-memory implementation.

use std::collections::BTreeMap;

use glam::Vec3;
use voxscan_project::RenderPoint;

/// Something that can show one visual per [`RenderPoint`].
///
/// Implementations own whatever host objects back each point; the
/// [`Visualizer`](crate::Visualizer) only keeps the handles and decides when
/// to create and destroy them.
pub trait Renderer {
    /// Identifies one spawned visual.
    type Handle;

    /// Create a visual for `point`.
    fn spawn(&mut self, point: &RenderPoint) -> Self::Handle;

    /// Destroy a visual created by [`spawn`](Self::spawn).
    fn despawn(&mut self, handle: Self::Handle);
}

/// Handle of a point stored in a [`PointCloud`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(u64);

/// Headless renderer that keeps live points in memory.
#[derive(Debug, Default)]
pub struct PointCloud {
    points: BTreeMap<PointId, RenderPoint>,
    next_id: u64,
}

impl PointCloud {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PointId) -> Option<&RenderPoint> {
        self.points.get(&id)
    }

    /// Live points in spawn order.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn iter(&self) -> impl Iterator<Item = &RenderPoint> {
        self.points.values()
    }

    /// Axis-aligned bounds of the live point positions.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut positions = self.points.values().map(|p| p.position);
        let first = positions.next()?;
        Some(positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

impl Renderer for PointCloud {
    type Handle = PointId;

    fn spawn(&mut self, point: &RenderPoint) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.points.insert(id, *point);
        id
    }

    fn despawn(&mut self, handle: PointId) {
        self.points.remove(&handle);
    }
}
