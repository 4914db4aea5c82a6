//! Viewport geometry used for drop-zone hit testing.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the viewport's left edge.
    pub x: f64,
    /// Vertical offset from the viewport's top edge.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding rectangle in viewport coordinates.
///
/// Stored by edges so that containment needs no arithmetic. Both edges are
/// part of the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectEdges")]
pub struct Rect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

/// Unchecked wire form of [`Rect`].
#[derive(Deserialize)]
struct RectEdges {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl TryFrom<RectEdges> for Rect {
    type Error = BoardDomainError;

    fn try_from(edges: RectEdges) -> Result<Self, Self::Error> {
        Self::from_edges(edges.left, edges.top, edges.right, edges.bottom)
    }
}

impl Rect {
    /// Creates a rectangle from its four edges.
    ///
    /// Zero-width and zero-height rectangles are allowed; they contain only
    /// the points on their degenerate edge.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NonFiniteBounds`] when any edge is NaN or
    /// infinite, and [`BoardDomainError::InvertedBounds`] when `right < left`
    /// or `bottom < top`.
    pub fn from_edges(
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> Result<Self, BoardDomainError> {
        if ![left, top, right, bottom].iter().all(|edge| edge.is_finite()) {
            return Err(BoardDomainError::NonFiniteBounds);
        }
        if right < left || bottom < top {
            return Err(BoardDomainError::InvertedBounds {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Creates a rectangle from an origin and a size, the shape a browser
    /// bounding-box query reports.
    ///
    /// # Errors
    ///
    /// Same as [`Rect::from_edges`]; negative sizes produce inverted edges.
    #[expect(
        clippy::float_arithmetic,
        reason = "edge derivation from origin and size is inherently float math"
    )]
    pub fn from_origin_size(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, BoardDomainError> {
        Self::from_edges(x, y, x + width, y + height)
    }

    /// Returns the left edge.
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.left
    }

    /// Returns the top edge.
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.top
    }

    /// Returns the right edge.
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.right
    }

    /// Returns the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Returns whether the point lies inside the rectangle or on its edges.
    ///
    /// A point with a NaN coordinate is never contained.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}
