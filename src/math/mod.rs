pub mod chop;
pub mod planar;
pub mod polyline;
pub mod vector;

pub use chop::{array_chop, chop_vector, ChopTolerance};
pub use planar::vec_unit_planar;
pub use polyline::{has_duplicates, remove_colinear_pts};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Fixed-size vector of `D` components.
pub type SVector<const D: usize> = nalgebra::SVector<f64, D>;

/// Machine epsilon for `f64`.
pub const MACHINE_EPSILON: f64 = f64::EPSILON;

/// Default multiple of [`MACHINE_EPSILON`] used as an absolute tolerance.
pub const DEFAULT_TOLERANCE_MULTIPLIER: f64 = 100.0;

/// Decimal places kept when rounding tangent vectors.
pub const TANGENT_DECIMALS: i32 = 11;
