use geo::{BoundingRect, GeometryCollection, Rect};

use super::collect::{flatten_into, resolve_collection, DEFAULT_ROOT_NAME};
use crate::error::{OperationError, Result};
use crate::geometry::{Diagnostics, GeomCollection, GeometryKind, Reported};
use crate::math::Point2;

/// Only polygons contribute to component bounds unless told otherwise.
pub const DEFAULT_BOUNDS_FILTER: Option<GeometryKind> = Some(GeometryKind::Polygon);

/// An axis-aligned bounding box in the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Returns `(min_x, min_y, max_x, max_y)`.
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.max_x, self.max_y)
    }

    #[must_use]
    pub fn min(&self) -> Point2 {
        Point2::new(self.min_x, self.min_y)
    }

    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(self.max_x, self.max_y)
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        Self {
            min_x: rect.min().x,
            min_y: rect.min().y,
            max_x: rect.max().x,
            max_y: rect.max().y,
        }
    }
}

/// Computes the bounding box of every shape reachable from `components`.
///
/// The collection is resolved with the same rules as
/// [`get_all_geoms`](super::get_all_geoms), flattened with `filter` as in
/// [`flatten_all_filter`](super::flatten_all_filter), and the union of the
/// kept shapes is bounded. Warnings from both steps are returned together.
///
/// # Errors
///
/// Returns `OperationError::EmptyResult` if no shape survives filtering.
pub fn get_all_component_bounds(
    components: &GeomCollection,
    filter: Option<GeometryKind>,
) -> Result<Reported<BoundingBox>> {
    let mut diag = Diagnostics::default();
    let geoms = resolve_collection(components, DEFAULT_ROOT_NAME, &mut diag);

    let mut shapes = Vec::new();
    flatten_into(&geoms, "", filter, &mut shapes, &mut diag);
    let count = shapes.len();

    let rect = GeometryCollection(shapes).bounding_rect().ok_or_else(|| {
        OperationError::EmptyResult(format!("no bounded shapes among {count} kept geometries"))
    })?;
    Ok(diag.finish(BoundingBox::from(rect)))
}

/// Computes the combined bounds of a component collection.
pub struct ComponentBounds {
    filter: Option<GeometryKind>,
}

impl Default for ComponentBounds {
    fn default() -> Self {
        Self::new(DEFAULT_BOUNDS_FILTER)
    }
}

impl ComponentBounds {
    /// Creates a new `ComponentBounds` query.
    ///
    /// * `filter` - Leaf kind that contributes, or `None` for every leaf.
    #[must_use]
    pub fn new(filter: Option<GeometryKind>) -> Self {
        Self { filter }
    }

    /// Executes the query over `components`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyResult` if no shape survives filtering.
    pub fn execute(&self, components: &GeomCollection) -> Result<Reported<BoundingBox>> {
        get_all_component_bounds(components, self.filter)
    }
}
