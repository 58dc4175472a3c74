// Modules
mod transformable;

// Re-exports
pub use transformable::Transformable;

// Imports
use serde::{Deserialize, Serialize};

/// A projective 2D transformation, stored as a homogeneous 3x3 matrix.
///
/// Points are mapped as column vectors `(x, y, 1)`, followed by the division through the homogeneous component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "transform")]
pub struct Transform {
    #[serde(rename = "matrix")]
    /// The homogeneous transformation matrix
    pub matrix: na::Matrix3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            matrix: na::Matrix3::identity(),
        }
    }
}

impl From<na::Affine2<f64>> for Transform {
    fn from(affine: na::Affine2<f64>) -> Self {
        Self::new(affine.to_homogeneous())
    }
}

impl Transform {
    /// Construct a new transform given the homogeneous matrix.
    pub fn new(matrix: na::Matrix3<f64>) -> Self {
        Self { matrix }
    }

    /// A pure translation.
    pub fn new_translation(offset: na::Vector2<f64>) -> Self {
        Self::new(na::Translation2::from(offset).to_homogeneous())
    }

    /// A pure rotation around the origin, angle in radians.
    pub fn new_rotation(angle: f64) -> Self {
        Self::new(na::Rotation2::new(angle).to_homogeneous())
    }

    /// A pure scale.
    pub fn new_scale(scale: na::Vector2<f64>) -> Self {
        Self::new(na::Matrix3::new_nonuniform_scaling(&scale))
    }

    /// A pure shear.
    pub fn new_shear(shear: na::Vector2<f64>) -> Self {
        Self::new(na::matrix![
            1.0, shear[0], 0.0;
            shear[1], 1.0, 0.0;
            0.0, 0.0, 1.0;
        ])
    }

    /// Whether the transform is the identity.
    pub fn is_identity(&self) -> bool {
        self.matrix == na::Matrix3::identity()
    }

    /// Whether the transform has a perspective part.
    pub fn is_projective(&self) -> bool {
        self.matrix[(2, 0)] != 0.0 || self.matrix[(2, 1)] != 0.0 || self.matrix[(2, 2)] != 1.0
    }

    /// Transform a point by the transform.
    ///
    /// Points mapped to infinity (homogeneous component zero) are returned unchanged.
    pub fn transform_point(&self, point: na::Point2<f64>) -> na::Point2<f64> {
        let mapped = self.matrix * point.to_homogeneous();
        if mapped[2] == 0.0 {
            return point;
        }
        na::point![mapped[0] / mapped[2], mapped[1] / mapped[2]]
    }

    /// Transform the point relative to the reference point.
    ///
    /// The reference is subtracted, the point transformed, then the reference added back.
    pub fn transform_point_wrt(
        &self,
        point: na::Point2<f64>,
        reference: na::Point2<f64>,
    ) -> na::Point2<f64> {
        self.transform_point(na::Point2::from(point - reference)) + reference.coords
    }

    /// Append a translation to the transform.
    pub fn append_translation_mut(&mut self, offset: na::Vector2<f64>) {
        self.matrix = na::Translation2::from(offset).to_homogeneous() * self.matrix;
    }

    /// Append a rotation around a point to the transform, angle in radians.
    pub fn append_rotation_wrt_point_mut(&mut self, angle: f64, center: na::Point2<f64>) {
        self.append_translation_mut(-center.coords);
        self.matrix = na::Rotation2::new(angle).to_homogeneous() * self.matrix;
        self.append_translation_mut(center.coords);
    }

    /// Append a scale to the transform.
    pub fn append_scale_mut(&mut self, scale: na::Vector2<f64>) {
        self.matrix = na::Matrix3::new_nonuniform_scaling(&scale) * self.matrix;
    }

    /// Append another transform, which is applied after self.
    pub fn append_transform_mut(&mut self, other: &Self) {
        self.matrix = other.matrix * self.matrix;
    }

    /// The inverse transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(Self::new)
    }

    /// Convert to [kurbo::Affine], if the transform has no perspective part.
    pub fn to_kurbo(&self) -> Option<kurbo::Affine> {
        if self.is_projective() {
            return None;
        }
        let m = self.matrix;
        Some(kurbo::Affine::new([
            m[(0, 0)],
            m[(1, 0)],
            m[(0, 1)],
            m[(1, 1)],
            m[(0, 2)],
            m[(1, 2)],
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn translation_and_scale() {
        let mut transform = Transform::new_scale(na::vector![2.0, 3.0]);
        transform.append_translation_mut(na::vector![1.0, -1.0]);

        assert_relative_eq!(
            transform.transform_point(na::point![1.0, 1.0]),
            na::point![3.0, 2.0]
        );
        assert!(!transform.is_projective());
        assert!(transform.to_kurbo().is_some());
    }

    #[test]
    fn rotation_wrt_point() {
        let mut transform = Transform::default();
        transform.append_rotation_wrt_point_mut(PI, na::point![1.0, 1.0]);

        assert_relative_eq!(
            transform.transform_point(na::point![2.0, 1.0]),
            na::point![0.0, 1.0],
            epsilon = 1e-12
        );
    }

    #[test]
    fn projective_divide() {
        let transform = Transform::new(na::matrix![
            1.0, 0.0, 0.0;
            0.0, 1.0, 0.0;
            0.5, 0.0, 1.0;
        ]);
        assert!(transform.is_projective());
        assert!(transform.to_kurbo().is_none());
        assert_relative_eq!(
            transform.transform_point(na::point![2.0, 4.0]),
            na::point![1.0, 2.0]
        );
        // mapped to infinity
        assert_relative_eq!(
            transform.transform_point(na::point![-2.0, 4.0]),
            na::point![-2.0, 4.0]
        );
    }

    #[test]
    fn wrt_reference() {
        let transform = Transform::new_scale(na::vector![2.0, 2.0]);
        assert_relative_eq!(
            transform.transform_point_wrt(na::point![3.0, 3.0], na::point![2.0, 2.0]),
            na::point![4.0, 4.0]
        );
    }

    #[test]
    fn inverse() {
        let transform = Transform::new_translation(na::vector![5.0, 1.0]);
        let inverse = transform.inverse().unwrap();
        assert_relative_eq!(
            inverse.transform_point(na::point![5.0, 1.0]),
            na::point![0.0, 0.0]
        );
        assert!(Transform::new_scale(na::vector![0.0, 1.0]).inverse().is_none());
    }
}
