// Imports
use p2d::bounding_volume::Aabb;

/// Extension trait for [`na::Vector2<f64>`].
pub trait Vector2Ext
where
    Self: Sized,
{
    /// Rotate around the center by the angle (in radians).
    ///
    /// Positive angles rotate clockwise in a coordinate system with the y-axis pointing down.
    fn rotate_around(&self, angle: f64, center: &Self) -> Self;
    /// Converts to kurbo::Point
    fn to_kurbo_point(&self) -> kurbo::Point;
    /// Converts to geo::Coord
    fn to_geo_coord(&self) -> geo::Coord<f64>;
    /// Approximate equality
    fn approx_eq(&self, other: &Self) -> bool;
}

impl Vector2Ext for na::Vector2<f64> {
    fn rotate_around(&self, angle: f64, center: &Self) -> Self {
        na::Rotation2::new(angle) * (self - center) + center
    }

    fn to_kurbo_point(&self) -> kurbo::Point {
        kurbo::Point {
            x: self[0],
            y: self[1],
        }
    }

    fn to_geo_coord(&self) -> geo::Coord<f64> {
        geo::Coord {
            x: self[0],
            y: self[1],
        }
    }

    fn approx_eq(&self, other: &Self) -> bool {
        approx::relative_eq!(self[0], other[0]) && approx::relative_eq!(self[1], other[1])
    }
}

/// Extension trait for [p2d::bounding_volume::Aabb].
pub trait AabbExt
where
    Self: Sized,
{
    /// New Aabb at position zero, with size zero
    fn new_zero() -> Self;
    /// The smallest Aabb containing all points, or a zero Aabb when there are none.
    fn from_vertices(vertices: &[na::Vector2<f64>]) -> Self;
    /// Approximate equality
    fn approx_eq(&self, other: &Self) -> bool;
}

impl AabbExt for Aabb {
    fn new_zero() -> Self {
        Aabb::new(na::point![0.0, 0.0], na::point![0.0, 0.0])
    }

    fn from_vertices(vertices: &[na::Vector2<f64>]) -> Self {
        let Some(first) = vertices.first() else {
            return Self::new_zero();
        };
        let mut bounds = Aabb::new((*first).into(), (*first).into());
        for v in vertices.iter().skip(1) {
            bounds.take_point((*v).into());
        }
        bounds
    }

    fn approx_eq(&self, other: &Self) -> bool {
        self.mins.coords.approx_eq(&other.mins.coords)
            && self.maxs.coords.approx_eq(&other.maxs.coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn rotate_around_center() {
        let v = na::vector![2.0, 1.0];
        let rotated = v.rotate_around(PI * 0.5, &na::vector![1.0, 1.0]);
        // clockwise on screen: right of the center becomes below it
        assert_relative_eq!(rotated, na::vector![1.0, 2.0], epsilon = 1e-12);
    }

    #[test]
    fn aabb_from_vertices() {
        let bounds = Aabb::from_vertices(&[
            na::vector![1.0, 5.0],
            na::vector![-2.0, 3.0],
            na::vector![4.0, -1.0],
        ]);
        assert!(bounds.approx_eq(&Aabb::new(na::point![-2.0, -1.0], na::point![4.0, 5.0])));
        assert!(Aabb::from_vertices(&[]).approx_eq(&Aabb::new_zero()));
    }
}
