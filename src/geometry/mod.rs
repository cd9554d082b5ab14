mod diagnostics;
mod kind;
mod polygon;
mod tree;

pub use diagnostics::{Reported, Warning};
pub(crate) use diagnostics::Diagnostics;
pub use kind::GeometryKind;
pub use polygon::poly_pts;
pub use tree::{GeomCollection, GeomMap, GeomNode, GeomTree, GeometrySource};
