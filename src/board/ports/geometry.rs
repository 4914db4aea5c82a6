//! Geometry port: live bounding regions of drop columns.

use crate::board::domain::{ContainerId, Rect};

/// Supplies column identifiers in presentation order and their current
/// bounding rectangles.
///
/// Bounds are queried on every hit test rather than cached, because columns
/// may reflow while a drag is in progress.
pub trait ContainerGeometry: Send + Sync {
    /// Returns drop columns in presentation order.
    fn containers(&self) -> Vec<ContainerId>;

    /// Returns the current bounds of a column, or `None` when it is not laid
    /// out.
    fn bounds(&self, container_id: &ContainerId) -> Option<Rect>;
}
