//! Planar geometry helpers used for hit-testing and drag updates.

use super::Point;

/// Even-odd ray casting test. Points exactly on an edge may land either side.
pub fn point_in_polygon(point: &Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shortest distance from `point` to the segment `a`–`b`.
pub fn distance_to_segment(point: &Point, a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return point.distance_to(a);
    }

    let t = (((point.x - a.x) * dx + (point.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    point.distance_to(&Point::new(a.x + t * dx, a.y + t * dy))
}

/// Shortest distance from `point` to an open polyline.
pub fn distance_to_polyline(point: &Point, points: &[Point]) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => point.distance_to(only),
        _ => points
            .windows(2)
            .map(|seg| distance_to_segment(point, &seg[0], &seg[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

/// Whether `point` lies inside a rectangle of `width` × `height` centred on
/// `center` and rotated by `rotation_deg` (counter-clockwise).
pub fn point_in_oriented_rect(
    point: &Point,
    center: &Point,
    width: f64,
    height: f64,
    rotation_deg: f64,
) -> bool {
    let (sin, cos) = (-rotation_deg.to_radians()).sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let local_x = dx * cos - dy * sin;
    let local_y = dx * sin + dy * cos;
    local_x.abs() <= width / 2.0 && local_y.abs() <= height / 2.0
}

/// Removes consecutive duplicate vertices (repeated clicks on one grid point).
pub fn dedup_consecutive(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().is_none_or(|last| last != p) {
            out.push(*p);
        }
    }
    out
}

/// Index of the first vertex within `tolerance` of `point`.
pub fn nearest_vertex(point: &Point, points: &[Point], tolerance: f64) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance_to(point)))
        .filter(|(_, d)| *d <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
