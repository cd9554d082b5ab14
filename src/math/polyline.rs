use std::collections::HashSet;
use std::hash::Hash;

use super::vector::{angle_between, are_same};
use super::SVector;
use crate::error::Result;

/// Removes colinear interior points and exact consecutive duplicates.
///
/// An interior point is dropped when the segment arriving at it and the one
/// leaving it point the same way. Candidates are all decided against the
/// input sequence before anything is removed; the duplicate pass then runs on
/// the reduced sequence. Order is preserved.
///
/// # Errors
///
/// Returns `GeometryError::InvalidDimension` if `D` is neither 2 nor 3 and the
/// sequence has at least three points.
#[allow(clippy::float_cmp)]
pub fn remove_colinear_pts<const D: usize>(points: &[SVector<D>]) -> Result<Vec<SVector<D>>> {
    let mut colinear = vec![false; points.len()];
    for (i, w) in points.windows(3).enumerate() {
        let v1 = w[0] - w[1];
        let v2 = w[1] - w[2];
        if are_same(&v1, &v2) || angle_between(&v1, &v2)? == 0.0 {
            colinear[i + 1] = true;
        }
    }

    let kept: Vec<SVector<D>> = points
        .iter()
        .zip(&colinear)
        .filter(|(_, drop)| !**drop)
        .map(|(p, _)| *p)
        .collect();

    let mut out: Vec<SVector<D>> = Vec::with_capacity(kept.len());
    for p in kept {
        if out.last().is_some_and(|prev| (p - prev).norm() == 0.0) {
            continue;
        }
        out.push(p);
    }
    Ok(out)
}

/// Returns whether any item occurs more than once.
#[must_use]
pub fn has_duplicates<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    !items.iter().all(|item| seen.insert(item))
}
