use geo::Polygon;

use crate::math::Point2;

/// Exterior coordinates of `polygon` without the repeated closing point.
#[must_use]
pub fn poly_pts(polygon: &Polygon<f64>) -> Vec<Point2> {
    let ring = &polygon.exterior().0;
    let open = match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 && first == last => &ring[..ring.len() - 1],
        _ => &ring[..],
    };
    open.iter().map(|c| Point2::new(c.x, c.y)).collect()
}
