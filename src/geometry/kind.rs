use std::fmt;

use geo::Geometry;

/// The concrete shape type of a terminal geometry value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    Line,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Rect,
    Triangle,
}

impl GeometryKind {
    /// Classifies a geometry value.
    #[must_use]
    pub fn of(geometry: &Geometry<f64>) -> Self {
        match geometry {
            Geometry::Point(_) => Self::Point,
            Geometry::Line(_) => Self::Line,
            Geometry::LineString(_) => Self::LineString,
            Geometry::Polygon(_) => Self::Polygon,
            Geometry::MultiPoint(_) => Self::MultiPoint,
            Geometry::MultiLineString(_) => Self::MultiLineString,
            Geometry::MultiPolygon(_) => Self::MultiPolygon,
            Geometry::GeometryCollection(_) => Self::GeometryCollection,
            Geometry::Rect(_) => Self::Rect,
            Geometry::Triangle(_) => Self::Triangle,
        }
    }

    /// Returns whether `geometry` is of this kind.
    #[must_use]
    pub fn matches(self, geometry: &Geometry<f64>) -> bool {
        Self::of(geometry) == self
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
