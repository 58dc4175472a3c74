// Imports
use crate::ext::AabbExt;
use crate::projection;
use crate::transform::Transformable;
use crate::Transform;
use p2d::bounding_volume::Aabb;

/// Types that behave as a rotatable shape.
///
/// Implementors provide their unrotated vertices and pivot, the projection into polygons is shared.
pub trait Shapeable: Transformable {
    /// The unrotated vertices in projection order.
    fn vertices(&self) -> Vec<na::Vector2<f64>>;
    /// The point the shape is rotated around, its centroid.
    fn pivot(&self) -> na::Vector2<f64>;
    /// Whether the shape is at its degenerate default.
    fn is_null(&self) -> bool;
    /// Whether the shape has no extent (length for lines, area for all other shapes).
    fn is_degenerate(&self) -> bool;

    /// The vertices rotated around the pivot by the stored angle.
    fn projected_vertices(&self) -> Vec<na::Vector2<f64>> {
        projection::project_vertices(
            &self.vertices(),
            self.pivot(),
            self.angle_radians(),
            None,
        )
    }

    /// The vertices rotated around the pivot by the stored angle,
    /// then transformed relative to the reference point.
    fn projected_vertices_w_transform(
        &self,
        transform: &Transform,
        reference: na::Point2<f64>,
    ) -> Vec<na::Vector2<f64>> {
        projection::project_vertices(
            &self.vertices(),
            self.pivot(),
            self.angle_radians(),
            Some((transform, reference)),
        )
    }

    /// The closed polygon path of the rotated shape.
    fn to_path(&self) -> kurbo::BezPath {
        projection::vertices_to_path(&self.projected_vertices())
    }

    /// The closed polygon path of the rotated shape, transformed relative to the reference point.
    fn to_path_w_transform(&self, transform: &Transform, reference: na::Point2<f64>) -> kurbo::BezPath {
        projection::vertices_to_path(&self.projected_vertices_w_transform(transform, reference))
    }

    /// The rotated shape as polygon.
    fn to_polygon(&self) -> geo::Polygon<f64> {
        projection::vertices_to_polygon(&self.projected_vertices())
    }

    /// The bounds of the rotated shape.
    fn bounds(&self) -> Aabb {
        Aabb::from_vertices(&self.projected_vertices())
    }
}
