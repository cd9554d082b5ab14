use super::{ChopTolerance, SVector};
use crate::error::{GeometryError, Result};

/// Scales the XY part of a 2D or 3D vector to unit length.
///
/// The XY part is chopped first so floating-point noise does not survive as a
/// direction. A 3D vector keeps its z component unchanged, noise included. A zero planar part
/// is returned as-is (zeroed) and reported at debug level.
///
/// # Errors
///
/// Returns `GeometryError::InvalidDimension` if `D` is neither 2 nor 3.
#[allow(clippy::float_cmp)]
pub fn vec_unit_planar<const D: usize>(vector: &SVector<D>) -> Result<SVector<D>> {
    if D != 2 && D != 3 {
        return Err(GeometryError::InvalidDimension { found: D }.into());
    }
    let tolerance = ChopTolerance::default();
    let mut out = *vector;
    out[0] = tolerance.chop(out[0]);
    out[1] = tolerance.chop(out[1]);

    let planar_norm = out[0].hypot(out[1]);
    if planar_norm == 0.0 {
        tracing::debug!(?vector, "zero planar vector length");
        return Ok(out);
    }
    out[0] /= planar_norm;
    out[1] /= planar_norm;
    Ok(out)
}
