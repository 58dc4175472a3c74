// Imports
use super::{Margins, MarginsF, Point, PointF, Rect, RectF, Shapeable};
use crate::ext::Vector2Ext;
use crate::transform::Transformable;
use crate::{Angle, GeometryConfig, StreamError, StreamSerialize, StreamVersion};
use kurbo::Shape;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};

/// An ellipse with integer coordinates, inscribed in its rotated bounding rectangle.
///
/// Polygon projection and set operations use the bounding rectangle,
/// use [`Ellipse::approx_path`] for the outline of the ellipse curve.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename = "ellipse")]
pub struct Ellipse {
    #[serde(rename = "bounding_rect")]
    rect: Rect,
}

impl Ellipse {
    /// A new ellipse from the top left corner and size of its bounding rectangle.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }

    /// A new ellipse from its bounding rectangle, including its angle.
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    /// With the given angle.
    pub fn with_angle(mut self, angle: Angle) -> Self {
        self.set_angle(angle);
        self
    }

    /// The bounding rectangle, carrying the angle.
    pub fn bounding_rect(&self) -> Rect {
        self.rect
    }

    /// The angle in whole degrees.
    pub fn angle_degrees(&self) -> i32 {
        self.rect.angle_degrees()
    }

    /// The x coordinate of the bounding rectangle.
    pub fn x(&self) -> i32 {
        self.rect.x()
    }

    /// The y coordinate of the bounding rectangle.
    pub fn y(&self) -> i32 {
        self.rect.y()
    }

    /// The width.
    pub fn width(&self) -> i32 {
        self.rect.width()
    }

    /// The height.
    pub fn height(&self) -> i32 {
        self.rect.height()
    }

    /// The center, rounded towards the top left.
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// The bounding rectangle coordinates and the angle in degrees.
    pub fn coords(&self) -> (i32, i32, i32, i32, i32) {
        self.rect.coords()
    }

    /// Whether width and height are both zero.
    pub fn is_null(&self) -> bool {
        self.rect.is_null()
    }

    /// Whether the ellipse has no area.
    pub fn is_empty(&self) -> bool {
        self.rect.is_empty()
    }

    /// Whether the ellipse has positive extents.
    pub fn is_valid(&self) -> bool {
        self.rect.is_valid()
    }

    /// Flip negative extents so that width and height become non-negative.
    pub fn normalize(&mut self) {
        self.rect.normalize();
    }

    /// An ellipse with non-negative width and height.
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Move the top left corner by `(dx, dy)` and grow the size by `(dw, dh)`.
    pub fn adjust(&mut self, dx: i32, dy: i32, dw: i32, dh: i32) {
        self.rect.adjust(dx, dy, dw, dh);
    }

    /// Adjust and rotate by the delta.
    pub fn adjust_w_angle(&mut self, dx: i32, dy: i32, dw: i32, dh: i32, delta: Angle) {
        self.rect.adjust_w_angle(dx, dy, dw, dh, delta);
    }

    /// A copy, adjusted.
    pub fn adjusted(&self, dx: i32, dy: i32, dw: i32, dh: i32) -> Self {
        Self::from_rect(self.rect.adjusted(dx, dy, dw, dh))
    }

    /// A copy, adjusted and rotated by the delta.
    pub fn adjusted_w_angle(&self, dx: i32, dy: i32, dw: i32, dh: i32, delta: Angle) -> Self {
        Self::from_rect(self.rect.adjusted_w_angle(dx, dy, dw, dh, delta))
    }

    /// Move the top left and the bottom right corner of the bounding rectangle by their offsets.
    pub fn adjust_corners(&mut self, top_left: Point, bottom_right: Point) {
        self.rect.adjust_corners(top_left, bottom_right);
    }

    /// A copy, with adjusted corners.
    pub fn adjusted_corners(&self, top_left: Point, bottom_right: Point) -> Self {
        Self::from_rect(self.rect.adjusted_corners(top_left, bottom_right))
    }

    /// A copy, grown by the margins.
    pub fn margins_added(&self, margins: Margins) -> Self {
        Self::from_rect(self.rect.margins_added(margins))
    }

    /// A copy, shrunk by the margins.
    pub fn margins_removed(&self, margins: Margins) -> Self {
        Self::from_rect(self.rect.margins_removed(margins))
    }

    /// The rotated ellipse curve, flattened into line segments.
    pub fn approx_path(&self, config: &GeometryConfig) -> kurbo::BezPath {
        EllipseF::from(*self).approx_path(config)
    }
}

impl Transformable for Ellipse {
    type Offset = Point;

    fn translate(&mut self, offset: Point) {
        self.rect.translate(offset);
    }

    fn angle(&self) -> Angle {
        self.rect.angle()
    }

    fn set_angle(&mut self, angle: Angle) {
        self.rect.set_angle(angle);
    }
}

impl Shapeable for Ellipse {
    fn vertices(&self) -> Vec<na::Vector2<f64>> {
        self.rect.vertices()
    }

    fn pivot(&self) -> na::Vector2<f64> {
        self.rect.pivot()
    }

    fn is_null(&self) -> bool {
        self.rect.is_null()
    }

    fn is_degenerate(&self) -> bool {
        Shapeable::is_degenerate(&self.rect)
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZQEllipse({},{} size {}x{} {} degrees)",
            self.x(),
            self.y(),
            self.width(),
            self.height(),
            self.angle_degrees()
        )
    }
}

impl StreamSerialize for Ellipse {
    fn write_to<W: Write>(
        &self,
        writer: &mut W,
        version: StreamVersion,
    ) -> Result<(), StreamError> {
        self.rect.write_to(writer, version)
    }

    fn read_from<R: Read>(reader: &mut R, version: StreamVersion) -> Result<Self, StreamError> {
        Ok(Self::from_rect(Rect::read_from(reader, version)?))
    }
}

/// An ellipse with floating point coordinates, inscribed in its rotated bounding rectangle.
///
/// Polygon projection and set operations use the bounding rectangle,
/// use [`EllipseF::approx_path`] for the outline of the ellipse curve.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "ellipsef")]
pub struct EllipseF {
    #[serde(rename = "bounding_rect")]
    rect: RectF,
}

impl EllipseF {
    /// A new ellipse from the top left corner and size of its bounding rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            rect: RectF::new(x, y, width, height),
        }
    }

    /// A new ellipse from its center and radii.
    pub fn from_center_radii(center: PointF, radii: na::Vector2<f64>) -> Self {
        Self::new(
            center.x - radii[0],
            center.y - radii[1],
            radii[0] * 2.0,
            radii[1] * 2.0,
        )
    }

    /// A new ellipse from its bounding rectangle, including its angle.
    pub fn from_rect(rect: RectF) -> Self {
        Self { rect }
    }

    /// With the given angle.
    pub fn with_angle(mut self, angle: Angle) -> Self {
        self.set_angle(angle);
        self
    }

    /// The bounding rectangle, carrying the angle.
    pub fn bounding_rect(&self) -> RectF {
        self.rect
    }

    /// The angle in degrees.
    pub fn angle_degrees(&self) -> f64 {
        self.rect.angle_degrees()
    }

    /// The x coordinate of the bounding rectangle.
    pub fn x(&self) -> f64 {
        self.rect.x()
    }

    /// The y coordinate of the bounding rectangle.
    pub fn y(&self) -> f64 {
        self.rect.y()
    }

    /// The width.
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// The height.
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// The center.
    pub fn center(&self) -> PointF {
        self.rect.center()
    }

    /// The radii along the unrotated x and y axis.
    pub fn radii(&self) -> na::Vector2<f64> {
        na::vector![self.width().abs() * 0.5, self.height().abs() * 0.5]
    }

    /// The area of the ellipse.
    pub fn area(&self) -> f64 {
        let radii = self.radii();
        std::f64::consts::PI * radii[0] * radii[1]
    }

    /// The bounding rectangle coordinates and the angle in degrees.
    pub fn coords(&self) -> (f64, f64, f64, f64, f64) {
        self.rect.coords()
    }

    /// Whether width and height are both zero.
    pub fn is_null(&self) -> bool {
        self.rect.is_null()
    }

    /// Whether the ellipse has no area.
    pub fn is_empty(&self) -> bool {
        self.rect.is_empty()
    }

    /// Whether the ellipse has positive extents.
    pub fn is_valid(&self) -> bool {
        self.rect.is_valid()
    }

    /// Flip negative extents so that width and height become non-negative.
    pub fn normalize(&mut self) {
        self.rect.normalize();
    }

    /// An ellipse with non-negative width and height.
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Move the top left corner by `(dx, dy)` and grow the size by `(dw, dh)`.
    pub fn adjust(&mut self, dx: f64, dy: f64, dw: f64, dh: f64) {
        self.rect.adjust(dx, dy, dw, dh);
    }

    /// Adjust and rotate by the delta.
    pub fn adjust_w_angle(&mut self, dx: f64, dy: f64, dw: f64, dh: f64, delta: Angle) {
        self.rect.adjust_w_angle(dx, dy, dw, dh, delta);
    }

    /// A copy, adjusted.
    pub fn adjusted(&self, dx: f64, dy: f64, dw: f64, dh: f64) -> Self {
        Self::from_rect(self.rect.adjusted(dx, dy, dw, dh))
    }

    /// A copy, adjusted and rotated by the delta.
    pub fn adjusted_w_angle(&self, dx: f64, dy: f64, dw: f64, dh: f64, delta: Angle) -> Self {
        Self::from_rect(self.rect.adjusted_w_angle(dx, dy, dw, dh, delta))
    }

    /// Move the top left and the bottom right corner of the bounding rectangle by their offsets.
    pub fn adjust_corners(&mut self, top_left: PointF, bottom_right: PointF) {
        self.rect.adjust_corners(top_left, bottom_right);
    }

    /// A copy, with adjusted corners.
    pub fn adjusted_corners(&self, top_left: PointF, bottom_right: PointF) -> Self {
        Self::from_rect(self.rect.adjusted_corners(top_left, bottom_right))
    }

    /// A copy, grown by the margins.
    pub fn margins_added(&self, margins: MarginsF) -> Self {
        Self::from_rect(self.rect.margins_added(margins))
    }

    /// A copy, shrunk by the margins.
    pub fn margins_removed(&self, margins: MarginsF) -> Self {
        Self::from_rect(self.rect.margins_removed(margins))
    }

    /// Convert to an integer ellipse, rounding position, size and angle.
    pub fn to_ellipse(self) -> Ellipse {
        Ellipse::from_rect(self.rect.to_rect())
    }

    /// The outline of the rotated ellipse curve.
    pub fn outline_path(&self, config: &GeometryConfig) -> kurbo::BezPath {
        kurbo::Ellipse::new(
            self.center().to_vector().to_kurbo_point(),
            kurbo::Vec2::new(self.radii()[0], self.radii()[1]),
            self.angle_radians(),
        )
        .to_path(config.flatten_tolerance)
    }

    /// The rotated ellipse curve, flattened into line segments.
    pub fn approx_path(&self, config: &GeometryConfig) -> kurbo::BezPath {
        let mut path = kurbo::BezPath::new();
        kurbo::flatten(
            self.outline_path(config),
            config.flatten_tolerance,
            |el| path.push(el),
        );
        path
    }
}

impl From<Ellipse> for EllipseF {
    fn from(ellipse: Ellipse) -> Self {
        Self::from_rect(RectF::from(ellipse.rect))
    }
}

impl Transformable for EllipseF {
    type Offset = PointF;

    fn translate(&mut self, offset: PointF) {
        self.rect.translate(offset);
    }

    fn angle(&self) -> Angle {
        self.rect.angle()
    }

    fn set_angle(&mut self, angle: Angle) {
        self.rect.set_angle(angle);
    }
}

impl Shapeable for EllipseF {
    fn vertices(&self) -> Vec<na::Vector2<f64>> {
        self.rect.vertices()
    }

    fn pivot(&self) -> na::Vector2<f64> {
        self.rect.pivot()
    }

    fn is_null(&self) -> bool {
        self.rect.is_null()
    }

    fn is_degenerate(&self) -> bool {
        Shapeable::is_degenerate(&self.rect)
    }
}

impl fmt::Display for EllipseF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZQEllipseF({},{} size {}x{} {} degrees)",
            self.x(),
            self.y(),
            self.width(),
            self.height(),
            self.angle_degrees()
        )
    }
}

impl StreamSerialize for EllipseF {
    fn write_to<W: Write>(
        &self,
        writer: &mut W,
        version: StreamVersion,
    ) -> Result<(), StreamError> {
        self.rect.write_to(writer, version)
    }

    fn read_from<R: Read>(reader: &mut R, version: StreamVersion) -> Result<Self, StreamError> {
        Ok(Self::from_rect(RectF::read_from(reader, version)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::AabbExt;
    use approx::assert_relative_eq;

    #[test]
    fn center_and_radii() {
        let ellipse = EllipseF::from_center_radii(PointF::new(5.0, 5.0), na::vector![3.0, 2.0]);
        assert_eq!(ellipse.bounding_rect(), RectF::new(2.0, 3.0, 6.0, 4.0));
        assert_eq!(ellipse.center(), PointF::new(5.0, 5.0));
        assert_relative_eq!(ellipse.area(), std::f64::consts::PI * 6.0);
    }

    #[test]
    fn display() {
        let ellipse = EllipseF::new(1.0, 2.0, 3.0, 4.0).with_angle(Angle::degrees(20.0));
        assert_eq!(ellipse.to_string(), "ZQEllipseF(1,2 size 3x4 20 degrees)");
        assert_eq!(
            Ellipse::new(1, 2, 3, 4).to_string(),
            "ZQEllipse(1,2 size 3x4 0 degrees)"
        );
    }

    #[test]
    fn projects_bounding_rect() {
        let ellipse = EllipseF::new(0.0, 0.0, 4.0, 2.0).with_angle(Angle::degrees(30.0));
        assert_eq!(
            ellipse.projected_vertices(),
            ellipse.bounding_rect().projected_vertices()
        );
        assert_eq!(ellipse.projected_vertices().len(), 4);
    }

    #[test]
    fn approx_path_within_bounds() {
        let config = GeometryConfig::default();
        let ellipse = EllipseF::new(0.0, 0.0, 40.0, 20.0).with_angle(Angle::degrees(90.0));
        let path_bounds = ellipse.approx_path(&config).bounding_box();
        // rotated by a quarter turn around (20, 10)
        assert_relative_eq!(path_bounds.x0, 10.0, epsilon = 0.5);
        assert_relative_eq!(path_bounds.x1, 30.0, epsilon = 0.5);
        assert_relative_eq!(path_bounds.y0, -10.0, epsilon = 0.5);
        assert_relative_eq!(path_bounds.y1, 30.0, epsilon = 0.5);
        assert!(ellipse
            .approx_path(&config)
            .elements()
            .iter()
            .all(|el| !matches!(el, kurbo::PathEl::CurveTo(..) | kurbo::PathEl::QuadTo(..))));
        // the curve stays inside the rotated bounding rectangle
        let bounds = ellipse.bounds();
        assert!(bounds.mins[0] <= path_bounds.x0 + 1e-6);
        assert!(bounds.maxs[1] >= path_bounds.y1 - 1e-6);
        assert!(!bounds.approx_eq(&p2d::bounding_volume::Aabb::new_zero()));
    }

    #[test]
    fn integer_roundtrip() {
        let ellipse = Ellipse::new(1, 2, 3, 4).with_angle(Angle::degrees(400.0));
        assert_eq!(ellipse.angle_degrees(), 40);
        assert_eq!(EllipseF::from(ellipse).to_ellipse(), ellipse);

        let bytes = ellipse.to_stream_bytes(StreamVersion::Current).unwrap();
        assert_eq!(
            Ellipse::read_from(&mut bytes.as_slice(), StreamVersion::Current).unwrap(),
            ellipse
        );
    }

    #[test]
    fn adjust_and_margins() {
        let ellipse = EllipseF::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            ellipse.margins_added(MarginsF::uniform(1.0)),
            EllipseF::new(-1.0, -1.0, 12.0, 12.0)
        );
        let adjusted = ellipse.adjusted_w_angle(1.0, 1.0, 1.0, 1.0, Angle::degrees(45.0));
        assert_eq!(
            adjusted,
            EllipseF::new(1.0, 1.0, 11.0, 11.0).with_angle(Angle::degrees(45.0))
        );
    }

    #[test]
    fn normalize_flips_negative_extents() {
        let mut ellipse = EllipseF::new(10.0, 10.0, -4.0, -6.0).with_angle(Angle::degrees(15.0));
        assert!(Shapeable::is_degenerate(&ellipse));
        ellipse.normalize();
        assert_eq!(
            ellipse,
            EllipseF::new(6.0, 4.0, 4.0, 6.0).with_angle(Angle::degrees(15.0))
        );
        assert!(!Shapeable::is_degenerate(&ellipse));

        let ellipse = Ellipse::new(4, 2, -4, -2);
        assert!(Shapeable::is_degenerate(&ellipse));
        let mut normalized = ellipse;
        normalized.normalize();
        assert_eq!(normalized, ellipse.normalized());
        assert_eq!(normalized.bounding_rect(), Rect::new(0, 0, 4, 2));
    }
}
