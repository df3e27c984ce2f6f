use geo::orient::{Direction, Orient};
use geo::{BooleanOps, LineString, MultiPolygon, Polygon};
use spade::{DelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use super::{Coord, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of an open or closed ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Coord]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Builds a counter-clockwise polygon from an open ring, or `None` if the
/// ring encloses no area.
#[must_use]
pub fn polygon_from_ring(ring: Vec<Coord>) -> Option<Polygon<f64>> {
    if signed_area_2d(&ring).abs() < TOLERANCE {
        return None;
    }
    let polygon = Polygon::new(LineString::from(ring), vec![]);
    Some(polygon.orient(Direction::Default))
}

/// Computes the convex hull of a point cloud as a counter-clockwise polygon.
///
/// The hull is read off the outer face of a Delaunay triangulation. Returns
/// `Ok(None)` when the points are coincident or collinear.
///
/// # Errors
///
/// Returns `GeometryError::Hull` if a point cannot be inserted (non-finite
/// or out-of-range coordinates).
pub fn convex_hull(points: &[Coord]) -> Result<Option<Polygon<f64>>> {
    let mut dt = DelaunayTriangulation::<SpadePoint2<f64>>::new();
    for pt in points {
        dt.insert(SpadePoint2::new(pt.x, pt.y))
            .map_err(|e: InsertionError| GeometryError::Hull(format!("insert: {e}")))?;
    }

    if dt.num_vertices() < 3 || dt.all_vertices_on_line() {
        return Ok(None);
    }

    let ring: Vec<Coord> = dt
        .convex_hull()
        .map(|edge| {
            let p = edge.from().position();
            Coord { x: p.x, y: p.y }
        })
        .collect();

    Ok(polygon_from_ring(ring))
}

/// Unions a sequence of polygons into a single (possibly multi-part) polygon.
///
/// An empty input yields an empty multi-polygon.
#[must_use]
pub fn union_all<I>(polygons: I) -> MultiPolygon<f64>
where
    I: IntoIterator<Item = Polygon<f64>>,
{
    polygons
        .into_iter()
        .fold(MultiPolygon::new(vec![]), |acc, polygon| {
            acc.union(&MultiPolygon::new(vec![polygon]))
        })
}
