// Imports
use crate::Angle;

/// Trait for shapes that can be translated and carry a rotation angle.
///
/// The rotation is symbolic: rotating only changes the stored angle, the coordinates are left untouched
/// until the shape gets projected.
pub trait Transformable: Clone {
    /// The offset type used for translations.
    type Offset: Copy;

    /// Translate (as in moves) by the given offset.
    fn translate(&mut self, offset: Self::Offset);
    /// The stored angle, normalized into [0, 360) degrees.
    fn angle(&self) -> Angle;
    /// Set the angle, which gets normalized.
    fn set_angle(&mut self, angle: Angle);

    /// The stored angle in radians.
    fn angle_radians(&self) -> f64 {
        self.angle().as_radians()
    }

    /// Rotate by the given delta.
    fn rotate(&mut self, delta: Angle) {
        self.set_angle(self.angle() + delta);
    }

    /// Rotate by the given delta in radians.
    fn rotate_radians(&mut self, delta: f64) {
        self.rotate(Angle::radians(delta));
    }

    /// Translate and rotate by the given deltas.
    fn translate_w_angle(&mut self, offset: Self::Offset, delta: Angle) {
        self.translate(offset);
        self.rotate(delta);
    }

    /// A copy, rotated by the given delta.
    fn rotated(&self, delta: Angle) -> Self {
        let mut rotated = self.clone();
        rotated.rotate(delta);
        rotated
    }

    /// A copy, rotated by the given delta in radians.
    fn rotated_radians(&self, delta: f64) -> Self {
        self.rotated(Angle::radians(delta))
    }

    /// A copy, translated by the offset.
    fn translated(&self, offset: Self::Offset) -> Self {
        let mut translated = self.clone();
        translated.translate(offset);
        translated
    }

    /// A copy, translated and rotated by the given deltas.
    fn translated_w_angle(&self, offset: Self::Offset, delta: Angle) -> Self {
        let mut translated = self.clone();
        translated.translate_w_angle(offset, delta);
        translated
    }
}
