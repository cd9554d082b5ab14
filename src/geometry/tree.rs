use std::collections::BTreeMap;
use std::fmt;

use geo::Geometry;

/// Resolved geometry, keyed by entry name.
pub type GeomMap = BTreeMap<String, GeomTree>;

/// Unresolved input entries, keyed by entry name.
pub type GeomCollection = BTreeMap<String, GeomNode>;

/// A resolved geometry tree: shapes at the leaves, named maps above them.
#[derive(Debug, Clone, PartialEq)]
pub enum GeomTree {
    Leaf(Geometry<f64>),
    Map(GeomMap),
}

impl GeomTree {
    /// Number of leaves reachable from this node.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Map(map) => map.values().map(Self::leaf_count).sum(),
        }
    }
}

/// Anything that can hand out its own named geometries, such as a design
/// component.
pub trait GeometrySource: fmt::Debug {
    /// Name of the source, used in diagnostics.
    fn name(&self) -> &str;

    /// Returns the source's geometry mapping, or `None` if it has none yet.
    fn get_all_geom(&self) -> Option<GeomMap>;
}

/// An input entry of a geometry collection.
#[derive(Debug)]
pub enum GeomNode {
    /// Delegates to the source's own geometry mapping.
    Component(Box<dyn GeometrySource>),
    /// A shape.
    Terminal(Geometry<f64>),
    /// Named sub-entries.
    Nested(GeomCollection),
}

impl GeomNode {
    #[must_use]
    pub fn component(source: impl GeometrySource + 'static) -> Self {
        Self::Component(Box::new(source))
    }

    #[must_use]
    pub fn terminal(geometry: impl Into<Geometry<f64>>) -> Self {
        Self::Terminal(geometry.into())
    }

    #[must_use]
    pub fn nested<K: Into<String>>(entries: impl IntoIterator<Item = (K, GeomNode)>) -> Self {
        Self::Nested(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
