// Imports
use crate::ext::Vector2Ext;
use crate::Transform;

/// Rotate the vertices around the pivot by the angle (in radians).
///
/// If a transform is given, the rotated vertices are then transformed relative to its reference point.
pub fn project_vertices(
    vertices: &[na::Vector2<f64>],
    pivot: na::Vector2<f64>,
    angle: f64,
    transform: Option<(&Transform, na::Point2<f64>)>,
) -> Vec<na::Vector2<f64>> {
    vertices
        .iter()
        .map(|vertex| {
            let rotated = vertex.rotate_around(angle, &pivot);

            match transform {
                Some((transform, reference)) => transform
                    .transform_point_wrt(rotated.into(), reference)
                    .coords,
                None => rotated,
            }
        })
        .collect()
}

/// A closed path through the vertices, the first vertex repeated at the end.
pub fn vertices_to_path(vertices: &[na::Vector2<f64>]) -> kurbo::BezPath {
    let mut path = kurbo::BezPath::new();
    let Some(first) = vertices.first() else {
        return path;
    };

    path.move_to(first.to_kurbo_point());
    for vertex in vertices.iter().skip(1) {
        path.line_to(vertex.to_kurbo_point());
    }
    path.line_to(first.to_kurbo_point());
    path.close_path();
    path
}

/// A polygon with the vertices as its exterior ring.
pub fn vertices_to_polygon(vertices: &[na::Vector2<f64>]) -> geo::Polygon<f64> {
    let exterior = vertices
        .iter()
        .map(|vertex| vertex.to_geo_coord())
        .collect::<Vec<geo::Coord<f64>>>();

    // closes the ring
    geo::Polygon::new(exterior.into(), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn square() -> Vec<na::Vector2<f64>> {
        vec![
            na::vector![2.0, 0.0],
            na::vector![2.0, 2.0],
            na::vector![0.0, 2.0],
            na::vector![0.0, 0.0],
        ]
    }

    #[test]
    fn zero_angle_is_identity() {
        let projected = project_vertices(&square(), na::vector![1.0, 1.0], 0.0, None);
        assert_eq!(projected, square());
    }

    #[test]
    fn quarter_turn_about_center() {
        let projected = project_vertices(&square(), na::vector![1.0, 1.0], PI * 0.5, None);
        // the top right corner moves to the bottom right
        assert_relative_eq!(projected[0], na::vector![2.0, 2.0], epsilon = 1e-12);
        assert_relative_eq!(projected[3], na::vector![2.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn transform_about_reference() {
        let transform = Transform::new_scale(na::vector![2.0, 2.0]);
        let projected = project_vertices(
            &square(),
            na::vector![1.0, 1.0],
            0.0,
            Some((&transform, na::point![1.0, 1.0])),
        );
        assert_relative_eq!(projected[0], na::vector![3.0, -1.0]);
        assert_relative_eq!(projected[2], na::vector![-1.0, 3.0]);
    }

    #[test]
    fn closed_path() {
        let path = vertices_to_path(&square());
        let elements = path.elements();
        assert_eq!(elements.len(), 6);
        assert_eq!(elements[0], kurbo::PathEl::MoveTo(kurbo::Point::new(2.0, 0.0)));
        assert_eq!(elements[4], kurbo::PathEl::LineTo(kurbo::Point::new(2.0, 0.0)));
        assert_eq!(elements[5], kurbo::PathEl::ClosePath);
        assert!(vertices_to_path(&[]).elements().is_empty());
    }

    #[test]
    fn polygon_ring_closed() {
        let polygon = vertices_to_polygon(&square());
        assert_eq!(polygon.exterior().0.len(), 5);
        assert_eq!(polygon.exterior().0.first(), polygon.exterior().0.last());
    }
}
