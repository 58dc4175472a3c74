// Imports
use super::{Margins, MarginsF, Point, PointF, Shapeable};
use crate::angle::{normalize_degrees, normalize_to_whole_degrees};
use crate::serialize::{read_f64, read_int, write_f64, write_int};
use crate::transform::Transformable;
use crate::{Angle, StreamError, StreamSerialize, StreamVersion};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};

/// A rectangle with integer coordinates, rotated around its center.
///
/// Stored as the two opposite corners. As for pixel grids, the right and bottom edges are inclusive,
/// so the width is `x2 - x1 + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename = "rect")]
pub struct Rect {
    #[serde(rename = "x1")]
    x1: i32,
    #[serde(rename = "y1")]
    y1: i32,
    #[serde(rename = "x2")]
    x2: i32,
    #[serde(rename = "y2")]
    y2: i32,
    #[serde(rename = "angle")]
    angle: i32,
}

impl Default for Rect {
    fn default() -> Self {
        Self {
            x1: 0,
            y1: 0,
            x2: -1,
            y2: -1,
            angle: 0,
        }
    }
}

impl Rect {
    /// A new rectangle from its top left corner and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width - 1,
            y2: y + height - 1,
            angle: 0,
        }
    }

    /// A new rectangle from its top left and bottom right corners.
    pub fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self {
            x1: top_left.x,
            y1: top_left.y,
            x2: bottom_right.x,
            y2: bottom_right.y,
            angle: 0,
        }
    }

    /// With the given angle.
    pub fn with_angle(mut self, angle: Angle) -> Self {
        self.set_angle(angle);
        self
    }

    /// The angle in whole degrees.
    pub fn angle_degrees(&self) -> i32 {
        self.angle
    }

    /// The left edge.
    pub fn left(&self) -> i32 {
        self.x1
    }

    /// The top edge.
    pub fn top(&self) -> i32 {
        self.y1
    }

    /// The right edge.
    pub fn right(&self) -> i32 {
        self.x2
    }

    /// The bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y2
    }

    /// The x coordinate of the left edge.
    pub fn x(&self) -> i32 {
        self.x1
    }

    /// The y coordinate of the top edge.
    pub fn y(&self) -> i32 {
        self.y1
    }

    /// The width.
    pub fn width(&self) -> i32 {
        self.x2 - self.x1 + 1
    }

    /// The height.
    pub fn height(&self) -> i32 {
        self.y2 - self.y1 + 1
    }

    /// Width and height.
    pub fn size(&self) -> (i32, i32) {
        (self.width(), self.height())
    }

    /// The top left corner.
    pub fn top_left(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// The top right corner.
    pub fn top_right(&self) -> Point {
        Point::new(self.x2, self.y1)
    }

    /// The bottom left corner.
    pub fn bottom_left(&self) -> Point {
        Point::new(self.x1, self.y2)
    }

    /// The bottom right corner.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// The center, rounded towards the top left.
    pub fn center(&self) -> Point {
        Point::new(
            ((i64::from(self.x1) + i64::from(self.x2)) / 2) as i32,
            ((i64::from(self.y1) + i64::from(self.y2)) / 2) as i32,
        )
    }

    /// The corner coordinates and the angle in degrees.
    pub fn coords(&self) -> (i32, i32, i32, i32, i32) {
        (self.x1, self.y1, self.x2, self.y2, self.angle)
    }

    /// The corner coordinates and the angle in radians.
    pub fn coords_radians(&self) -> (i32, i32, i32, i32, f64) {
        (self.x1, self.y1, self.x2, self.y2, self.angle_radians())
    }

    /// Set the corner coordinates, the angle is kept.
    pub fn set_coords(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
    }

    /// Set the left edge, the right edge is kept.
    pub fn set_left(&mut self, left: i32) {
        self.x1 = left;
    }

    /// Set the top edge, the bottom edge is kept.
    pub fn set_top(&mut self, top: i32) {
        self.y1 = top;
    }

    /// Set the right edge, the left edge is kept.
    pub fn set_right(&mut self, right: i32) {
        self.x2 = right;
    }

    /// Set the bottom edge, the top edge is kept.
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y2 = bottom;
    }

    /// Set the width, the left edge is kept.
    pub fn set_width(&mut self, width: i32) {
        self.x2 = self.x1 + width - 1;
    }

    /// Set the height, the top edge is kept.
    pub fn set_height(&mut self, height: i32) {
        self.y2 = self.y1 + height - 1;
    }

    /// Move the top left corner to the position, keeping the size.
    pub fn move_to(&mut self, top_left: Point) {
        self.translate(top_left - self.top_left());
    }

    /// Move the center to the position, keeping the size.
    pub fn move_center(&mut self, center: Point) {
        self.translate(center - self.center());
    }

    /// Whether width and height are both zero.
    pub fn is_null(&self) -> bool {
        self.width() == 0 && self.height() == 0
    }

    /// Whether the rectangle has no area because it has no or negative extents.
    pub fn is_empty(&self) -> bool {
        self.x1 > self.x2 || self.y1 > self.y2
    }

    /// Whether the rectangle has positive extents.
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Swap the corners so that width and height become non-negative, covering the same area.
    pub fn normalize(&mut self) {
        let (x1, y1, x2, y2) = (self.x1, self.y1, self.x2, self.y2);
        if self.width() < 0 {
            self.x1 = x2 + 1;
            self.x2 = x1 - 1;
        }
        if self.height() < 0 {
            self.y1 = y2 + 1;
            self.y2 = y1 - 1;
        }
    }

    /// A rectangle with non-negative width and height, covering the same area.
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Move the top left corner by `(dx, dy)` and grow the size by `(dw, dh)`.
    pub fn adjust(&mut self, dx: i32, dy: i32, dw: i32, dh: i32) {
        self.x1 += dx;
        self.y1 += dy;
        self.x2 += dx + dw;
        self.y2 += dy + dh;
    }

    /// Adjust and rotate by the delta.
    pub fn adjust_w_angle(&mut self, dx: i32, dy: i32, dw: i32, dh: i32, delta: Angle) {
        self.adjust(dx, dy, dw, dh);
        self.rotate(delta);
    }

    /// A copy, adjusted.
    pub fn adjusted(&self, dx: i32, dy: i32, dw: i32, dh: i32) -> Self {
        let mut adjusted = *self;
        adjusted.adjust(dx, dy, dw, dh);
        adjusted
    }

    /// A copy, adjusted and rotated by the delta.
    pub fn adjusted_w_angle(&self, dx: i32, dy: i32, dw: i32, dh: i32, delta: Angle) -> Self {
        let mut adjusted = *self;
        adjusted.adjust_w_angle(dx, dy, dw, dh, delta);
        adjusted
    }

    /// Move the top left and the bottom right corner by their offsets.
    pub fn adjust_corners(&mut self, top_left: Point, bottom_right: Point) {
        self.x1 += top_left.x;
        self.y1 += top_left.y;
        self.x2 += bottom_right.x;
        self.y2 += bottom_right.y;
    }

    /// Adjust the corners and rotate by the delta.
    pub fn adjust_corners_w_angle(&mut self, top_left: Point, bottom_right: Point, delta: Angle) {
        self.adjust_corners(top_left, bottom_right);
        self.rotate(delta);
    }

    /// A copy, with adjusted corners.
    pub fn adjusted_corners(&self, top_left: Point, bottom_right: Point) -> Self {
        let mut adjusted = *self;
        adjusted.adjust_corners(top_left, bottom_right);
        adjusted
    }

    /// A copy, with adjusted corners and rotated by the delta.
    pub fn adjusted_corners_w_angle(
        &self,
        top_left: Point,
        bottom_right: Point,
        delta: Angle,
    ) -> Self {
        let mut adjusted = *self;
        adjusted.adjust_corners_w_angle(top_left, bottom_right, delta);
        adjusted
    }

    /// A copy, grown by the margins.
    pub fn margins_added(&self, margins: Margins) -> Self {
        self.adjusted_corners(
            Point::new(-margins.left, -margins.top),
            Point::new(margins.right, margins.bottom),
        )
    }

    /// A copy, shrunk by the margins.
    pub fn margins_removed(&self, margins: Margins) -> Self {
        self.margins_added(-margins)
    }

    /// Convert to a floating point rectangle.
    pub fn to_rectf(self) -> RectF {
        RectF::from(self)
    }
}

impl Transformable for Rect {
    type Offset = Point;

    fn translate(&mut self, offset: Point) {
        self.x1 += offset.x;
        self.y1 += offset.y;
        self.x2 += offset.x;
        self.y2 += offset.y;
    }

    fn angle(&self) -> Angle {
        Angle::from(self.angle)
    }

    fn set_angle(&mut self, angle: Angle) {
        self.angle = normalize_to_whole_degrees(angle);
    }
}

impl Shapeable for Rect {
    fn vertices(&self) -> Vec<na::Vector2<f64>> {
        RectF::from(*self).vertices()
    }

    fn pivot(&self) -> na::Vector2<f64> {
        RectF::from(*self).pivot()
    }

    fn is_null(&self) -> bool {
        Rect::is_null(self)
    }

    fn is_degenerate(&self) -> bool {
        !self.is_valid()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZQRect({},{} size {}x{} {} degrees)",
            self.x1,
            self.y1,
            self.width(),
            self.height(),
            self.angle
        )
    }
}

impl StreamSerialize for Rect {
    fn write_to<W: Write>(
        &self,
        writer: &mut W,
        version: StreamVersion,
    ) -> Result<(), StreamError> {
        write_int(writer, self.x1, version)?;
        write_int(writer, self.y1, version)?;
        write_int(writer, self.x2, version)?;
        write_int(writer, self.y2, version)?;
        write_int(writer, self.angle, version)
    }

    fn read_from<R: Read>(reader: &mut R, version: StreamVersion) -> Result<Self, StreamError> {
        let x1 = read_int(reader, version)?;
        let y1 = read_int(reader, version)?;
        let x2 = read_int(reader, version)?;
        let y2 = read_int(reader, version)?;
        let angle = read_int(reader, version)?;
        Ok(Self::from_corners(Point::new(x1, y1), Point::new(x2, y2)).with_angle(angle.into()))
    }
}

/// A rectangle with floating point coordinates, rotated around its center.
///
/// Stored as the top left corner and the size.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename = "rectf")]
pub struct RectF {
    #[serde(rename = "x", with = "crate::serialize::f64_dp3")]
    x: f64,
    #[serde(rename = "y", with = "crate::serialize::f64_dp3")]
    y: f64,
    #[serde(rename = "width", with = "crate::serialize::f64_dp3")]
    width: f64,
    #[serde(rename = "height", with = "crate::serialize::f64_dp3")]
    height: f64,
    #[serde(rename = "angle", with = "crate::serialize::f64_dp3")]
    angle: f64,
}

impl RectF {
    /// A new rectangle from its top left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            angle: 0.0,
        }
    }

    /// A new rectangle from its top left and bottom right corners.
    pub fn from_corners(top_left: PointF, bottom_right: PointF) -> Self {
        Self::new(
            top_left.x,
            top_left.y,
            bottom_right.x - top_left.x,
            bottom_right.y - top_left.y,
        )
    }

    /// With the given angle.
    pub fn with_angle(mut self, angle: Angle) -> Self {
        self.set_angle(angle);
        self
    }

    /// The angle in degrees.
    pub fn angle_degrees(&self) -> f64 {
        self.angle
    }

    /// The x coordinate of the left edge.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate of the top edge.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width and height.
    pub fn size(&self) -> na::Vector2<f64> {
        na::vector![self.width, self.height]
    }

    /// The left edge.
    pub fn left(&self) -> f64 {
        self.x
    }

    /// The top edge.
    pub fn top(&self) -> f64 {
        self.y
    }

    /// The right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// The bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// The top left corner.
    pub fn top_left(&self) -> PointF {
        PointF::new(self.left(), self.top())
    }

    /// The top right corner.
    pub fn top_right(&self) -> PointF {
        PointF::new(self.right(), self.top())
    }

    /// The bottom left corner.
    pub fn bottom_left(&self) -> PointF {
        PointF::new(self.left(), self.bottom())
    }

    /// The bottom right corner.
    pub fn bottom_right(&self) -> PointF {
        PointF::new(self.right(), self.bottom())
    }

    /// The center.
    pub fn center(&self) -> PointF {
        PointF::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// The position, size and the angle in degrees.
    pub fn coords(&self) -> (f64, f64, f64, f64, f64) {
        (self.x, self.y, self.width, self.height, self.angle)
    }

    /// The position, size and the angle in radians.
    pub fn coords_radians(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.x,
            self.y,
            self.width,
            self.height,
            self.angle_radians(),
        )
    }

    /// Set the corner coordinates, the angle is kept.
    pub fn set_coords(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.x = x1;
        self.y = y1;
        self.width = x2 - x1;
        self.height = y2 - y1;
    }

    /// Set the left edge, the right edge is kept.
    pub fn set_left(&mut self, left: f64) {
        self.width += self.x - left;
        self.x = left;
    }

    /// Set the top edge, the bottom edge is kept.
    pub fn set_top(&mut self, top: f64) {
        self.height += self.y - top;
        self.y = top;
    }

    /// Set the right edge, the left edge is kept.
    pub fn set_right(&mut self, right: f64) {
        self.width = right - self.x;
    }

    /// Set the bottom edge, the top edge is kept.
    pub fn set_bottom(&mut self, bottom: f64) {
        self.height = bottom - self.y;
    }

    /// Set the width, the left edge is kept.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Set the height, the top edge is kept.
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Move the top left corner to the position, keeping the size.
    pub fn move_to(&mut self, top_left: PointF) {
        self.x = top_left.x;
        self.y = top_left.y;
    }

    /// Move the center to the position, keeping the size.
    pub fn move_center(&mut self, center: PointF) {
        self.x = center.x - self.width * 0.5;
        self.y = center.y - self.height * 0.5;
    }

    /// Whether width and height are both zero.
    pub fn is_null(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Whether the rectangle has no area because it has no or negative extents.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Whether the rectangle has positive extents.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Flip negative extents so that width and height become non-negative, covering the same area.
    pub fn normalize(&mut self) {
        if self.width < 0.0 {
            self.x += self.width;
            self.width = -self.width;
        }
        if self.height < 0.0 {
            self.y += self.height;
            self.height = -self.height;
        }
    }

    /// A rectangle with non-negative width and height, covering the same area.
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Move the top left corner by `(dx, dy)` and grow the size by `(dw, dh)`.
    pub fn adjust(&mut self, dx: f64, dy: f64, dw: f64, dh: f64) {
        self.x += dx;
        self.y += dy;
        self.width += dw;
        self.height += dh;
    }

    /// Adjust and rotate by the delta.
    pub fn adjust_w_angle(&mut self, dx: f64, dy: f64, dw: f64, dh: f64, delta: Angle) {
        self.adjust(dx, dy, dw, dh);
        self.rotate(delta);
    }

    /// A copy, adjusted.
    pub fn adjusted(&self, dx: f64, dy: f64, dw: f64, dh: f64) -> Self {
        let mut adjusted = *self;
        adjusted.adjust(dx, dy, dw, dh);
        adjusted
    }

    /// A copy, adjusted and rotated by the delta.
    pub fn adjusted_w_angle(&self, dx: f64, dy: f64, dw: f64, dh: f64, delta: Angle) -> Self {
        let mut adjusted = *self;
        adjusted.adjust_w_angle(dx, dy, dw, dh, delta);
        adjusted
    }

    /// Move the top left and the bottom right corner by their offsets.
    pub fn adjust_corners(&mut self, top_left: PointF, bottom_right: PointF) {
        self.x += top_left.x;
        self.y += top_left.y;
        self.width += bottom_right.x - top_left.x;
        self.height += bottom_right.y - top_left.y;
    }

    /// Adjust the corners and rotate by the delta.
    pub fn adjust_corners_w_angle(&mut self, top_left: PointF, bottom_right: PointF, delta: Angle) {
        self.adjust_corners(top_left, bottom_right);
        self.rotate(delta);
    }

    /// A copy, with adjusted corners.
    pub fn adjusted_corners(&self, top_left: PointF, bottom_right: PointF) -> Self {
        let mut adjusted = *self;
        adjusted.adjust_corners(top_left, bottom_right);
        adjusted
    }

    /// A copy, with adjusted corners and rotated by the delta.
    pub fn adjusted_corners_w_angle(
        &self,
        top_left: PointF,
        bottom_right: PointF,
        delta: Angle,
    ) -> Self {
        let mut adjusted = *self;
        adjusted.adjust_corners_w_angle(top_left, bottom_right, delta);
        adjusted
    }

    /// A copy, grown by the margins.
    pub fn margins_added(&self, margins: MarginsF) -> Self {
        self.adjusted_corners(
            PointF::new(-margins.left, -margins.top),
            PointF::new(margins.right, margins.bottom),
        )
    }

    /// A copy, shrunk by the margins.
    pub fn margins_removed(&self, margins: MarginsF) -> Self {
        self.margins_added(-margins)
    }

    /// Convert to an integer rectangle, rounding position, size and angle.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.x.round() as i32,
            self.y.round() as i32,
            self.width.round() as i32,
            self.height.round() as i32,
        )
        .with_angle(Angle::degrees(self.angle))
    }
}

impl From<Rect> for RectF {
    fn from(rect: Rect) -> Self {
        Self {
            x: f64::from(rect.x1),
            y: f64::from(rect.y1),
            width: f64::from(rect.width()),
            height: f64::from(rect.height()),
            angle: f64::from(rect.angle),
        }
    }
}

impl PartialEq for RectF {
    fn eq(&self, other: &Self) -> bool {
        approx::relative_eq!(self.x, other.x)
            && approx::relative_eq!(self.y, other.y)
            && approx::relative_eq!(self.width, other.width)
            && approx::relative_eq!(self.height, other.height)
            && approx::relative_eq!(self.angle, other.angle)
    }
}

impl Transformable for RectF {
    type Offset = PointF;

    fn translate(&mut self, offset: PointF) {
        self.x += offset.x;
        self.y += offset.y;
    }

    fn angle(&self) -> Angle {
        Angle::degrees(self.angle)
    }

    fn set_angle(&mut self, angle: Angle) {
        self.angle = normalize_degrees(angle.as_degrees());
    }
}

impl Shapeable for RectF {
    fn vertices(&self) -> Vec<na::Vector2<f64>> {
        vec![
            self.top_right().to_vector(),
            self.bottom_right().to_vector(),
            self.bottom_left().to_vector(),
            self.top_left().to_vector(),
        ]
    }

    fn pivot(&self) -> na::Vector2<f64> {
        self.center().to_vector()
    }

    fn is_null(&self) -> bool {
        RectF::is_null(self)
    }

    fn is_degenerate(&self) -> bool {
        !self.is_valid()
    }
}

impl fmt::Display for RectF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZQRectF({},{} size {}x{} {} degrees)",
            self.x, self.y, self.width, self.height, self.angle
        )
    }
}

impl StreamSerialize for RectF {
    fn write_to<W: Write>(
        &self,
        writer: &mut W,
        _version: StreamVersion,
    ) -> Result<(), StreamError> {
        write_f64(writer, self.x)?;
        write_f64(writer, self.y)?;
        write_f64(writer, self.width)?;
        write_f64(writer, self.height)?;
        write_f64(writer, self.angle)
    }

    fn read_from<R: Read>(reader: &mut R, _version: StreamVersion) -> Result<Self, StreamError> {
        let x = read_f64(reader)?;
        let y = read_f64(reader)?;
        let width = read_f64(reader)?;
        let height = read_f64(reader)?;
        let angle = read_f64(reader)?;
        Ok(Self::new(x, y, width, height).with_angle(Angle::degrees(angle)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn display() {
        let rect = RectF::new(1.0, 2.0, 3.0, 4.0).with_angle(Angle::degrees(20.0));
        assert_eq!(rect.to_string(), "ZQRectF(1,2 size 3x4 20 degrees)");
        let rect = Rect::new(1, 2, 3, 4).with_angle(Angle::degrees(-90.0));
        assert_eq!(rect.to_string(), "ZQRect(1,2 size 3x4 270 degrees)");
    }

    #[test]
    fn translate_w_angle() {
        let rect = Rect::new(31, 32, 33, 34).with_angle(Angle::degrees(90.0));
        let translated = rect.translated_w_angle(Point::new(1, 1), Angle::degrees(2.0));
        assert_eq!(translated.top_left(), Point::new(32, 33));
        assert_eq!(translated.width(), 33);
        assert_eq!(translated.angle_degrees(), 92);

        let rect = RectF::new(31.0, 32.0, 33.0, 34.0).with_angle(Angle::degrees(90.0));
        let translated = rect.translated_w_angle(PointF::new(1.0, 1.0), Angle::radians(PI * 0.5));
        assert_eq!(translated.top_left(), PointF::new(32.0, 33.0));
        assert_relative_eq!(translated.angle_degrees(), 180.0);
    }

    #[test]
    fn translate_radians_integer() {
        let mut rect = Rect::new(0, 0, 10, 10).with_angle(Angle::degrees(90.0));
        rect.translate_w_angle(Point::new(1, 1), Angle::radians(PI * 0.5));
        assert_eq!(rect.angle_degrees(), 180);
        assert_relative_eq!(rect.angle_radians(), PI);
    }

    #[test]
    fn rotate_keeps_coordinates() {
        let rect = RectF::new(1.0, 2.0, 3.0, 4.0).with_angle(Angle::degrees(350.0));
        let rotated = rect.rotated(Angle::degrees(20.0)).rotated(Angle::degrees(30.0));
        assert_eq!(rotated.top_left(), rect.top_left());
        assert_relative_eq!(rotated.angle_degrees(), 40.0, epsilon = 1e-9);
        assert_eq!(rect.rotated(Angle::degrees(50.0)), rotated);
    }

    #[test]
    fn adjusted() {
        let rect = RectF::new(1.0, 2.0, 3.0, 4.0);
        let adjusted = rect.adjusted(1.0, 1.0, 1.0, 1.0);
        assert_eq!(adjusted.top_left(), PointF::new(2.0, 3.0));
        assert_eq!(adjusted.bottom_right(), PointF::new(6.0, 8.0));

        let adjusted = rect.adjusted_w_angle(1.0, 1.0, 1.0, 1.0, Angle::degrees(-10.0));
        assert_relative_eq!(adjusted.angle_degrees(), 350.0);

        let rect = Rect::new(1, 2, 3, 4);
        let adjusted = rect.adjusted(1, 1, 1, 1);
        assert_eq!(adjusted.top_left(), Point::new(2, 3));
        assert_eq!(adjusted.size(), (4, 5));
    }

    #[test]
    fn adjusted_corners_and_margins() {
        let rect = Rect::from_corners(Point::new(0, 0), Point::new(9, 9));
        let adjusted = rect.adjusted_corners(Point::new(1, 2), Point::new(-1, -2));
        assert_eq!(adjusted.top_left(), Point::new(1, 2));
        assert_eq!(adjusted.bottom_right(), Point::new(8, 7));

        let grown = rect.margins_added(Margins::uniform(2));
        assert_eq!(grown.top_left(), Point::new(-2, -2));
        assert_eq!(grown.bottom_right(), Point::new(11, 11));
        assert_eq!(grown.margins_removed(Margins::uniform(2)), rect);

        let rect = RectF::new(0.0, 0.0, 10.0, 10.0);
        let shrunk = rect.margins_removed(MarginsF::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(shrunk, RectF::new(1.0, 2.0, 6.0, 4.0));
    }

    #[test]
    fn validity() {
        assert!(Rect::default().is_null());
        assert!(Rect::default().is_empty());
        assert!(!Rect::default().is_valid());
        assert!(Rect::new(0, 0, 1, 1).is_valid());

        assert!(RectF::default().is_null());
        assert!(RectF::new(0.0, 0.0, -1.0, 2.0).is_empty());
        assert!(RectF::new(0.0, 0.0, 1.0, 2.0).is_valid());
    }

    #[test]
    fn normalized() {
        let rect = RectF::new(10.0, 10.0, -4.0, -6.0).with_angle(Angle::degrees(15.0));
        let normalized = rect.normalized();
        assert_eq!(
            normalized,
            RectF::new(6.0, 4.0, 4.0, 6.0).with_angle(Angle::degrees(15.0))
        );

        let rect = Rect::from_corners(Point::new(5, 5), Point::new(2, 3));
        let normalized = rect.normalized();
        assert_eq!(normalized.top_left(), Point::new(3, 4));
        assert_eq!(normalized.bottom_right(), Point::new(4, 4));
        assert_eq!(normalized.width(), -rect.width());
    }

    #[test]
    fn normalize_in_place() {
        let mut rect = RectF::new(10.0, 10.0, -4.0, -6.0).with_angle(Angle::degrees(15.0));
        rect.normalize();
        assert_eq!(rect, RectF::new(6.0, 4.0, 4.0, 6.0).with_angle(Angle::degrees(15.0)));
        assert!(rect.is_valid());

        let mut rect = Rect::from_corners(Point::new(5, 5), Point::new(2, 3));
        rect.normalize();
        assert_eq!(rect.top_left(), Point::new(3, 4));
        assert_eq!(rect.bottom_right(), Point::new(4, 4));

        // already normalized rects are left untouched
        let mut rect = Rect::new(1, 2, 3, 4);
        rect.normalize();
        assert_eq!(rect, Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn negative_extents_are_degenerate() {
        assert!(Shapeable::is_degenerate(&RectF::new(4.0, 2.0, -4.0, -2.0)));
        assert!(Shapeable::is_degenerate(&RectF::new(4.0, 2.0, 4.0, -2.0)));
        assert!(Shapeable::is_degenerate(&RectF::new(4.0, 2.0, 0.0, 2.0)));
        assert!(!Shapeable::is_degenerate(&RectF::new(4.0, 2.0, 4.0, 2.0)));

        assert!(Shapeable::is_degenerate(&Rect::new(4, 2, -4, -2)));
        assert!(Shapeable::is_degenerate(&Rect::new(4, 2, 0, 2)));
        assert!(!Shapeable::is_degenerate(&Rect::new(4, 2, 4, 2)));
        assert!(!Shapeable::is_degenerate(&Rect::new(4, 2, -4, -2).normalized()));
    }

    #[test]
    fn setters() {
        let mut rect = RectF::new(0.0, 0.0, 10.0, 10.0);
        rect.set_left(2.0);
        rect.set_bottom(5.0);
        assert_eq!(rect, RectF::new(2.0, 0.0, 8.0, 5.0));
        assert_eq!(rect.size(), na::vector![8.0, 5.0]);
        rect.move_center(PointF::new(0.0, 0.0));
        assert_eq!(rect.top_left(), PointF::new(-4.0, -2.5));

        let mut rect = Rect::new(0, 0, 10, 10);
        rect.move_to(Point::new(5, 5));
        assert_eq!(rect.bottom_right(), Point::new(14, 14));
        rect.move_center(Point::new(0, 0));
        assert_eq!(rect.center(), Point::new(0, 0));
    }

    #[test]
    fn conversions() {
        let rect = Rect::new(1, 2, 3, 4).with_angle(Angle::degrees(45.0));
        let rectf = RectF::from(rect);
        assert_eq!(
            rectf,
            RectF::new(1.0, 2.0, 3.0, 4.0).with_angle(Angle::degrees(45.0))
        );
        assert_eq!(rectf.to_rect(), rect);
        assert_eq!(
            RectF::new(0.6, 1.4, 2.5, 3.49).to_rect(),
            Rect::new(1, 1, 3, 3)
        );
    }

    #[test]
    fn equality() {
        let a = RectF::new(1.0, 2.0, 3.0, 4.0).with_angle(Angle::degrees(20.0));
        let b = RectF::new(1.0, 2.0, 3.0, 4.0).with_angle(Angle::degrees(20.0));
        assert_eq!(a, b);
        assert_ne!(a, RectF::new(1.0, 2.0, 3.0, 4.5).with_angle(Angle::degrees(20.0)));
        assert_ne!(a, RectF::new(1.0, 2.0, 3.0, 4.0).with_angle(Angle::degrees(21.0)));
        assert_ne!(
            Rect::new(1, 2, 3, 4),
            Rect::new(1, 2, 3, 4).with_angle(Angle::degrees(1.0))
        );
    }

    #[test]
    fn projection_order() {
        let vertices = RectF::new(0.0, 0.0, 4.0, 2.0).projected_vertices();
        assert_eq!(
            vertices,
            vec![
                na::vector![4.0, 0.0],
                na::vector![4.0, 2.0],
                na::vector![0.0, 2.0],
                na::vector![0.0, 0.0],
            ]
        );

        let vertices = RectF::new(0.0, 0.0, 4.0, 2.0)
            .with_angle(Angle::degrees(90.0))
            .projected_vertices();
        // rotated about the center (2, 1), the top right corner swings to the bottom
        assert_relative_eq!(vertices[0], na::vector![3.0, 3.0], epsilon = 1e-12);
        assert_relative_eq!(vertices[2], na::vector![1.0, -1.0], epsilon = 1e-12);
    }

    #[test]
    fn integer_projection_covers_pixels() {
        let vertices = Rect::new(0, 0, 2, 2).projected_vertices();
        assert_eq!(vertices[1], na::vector![2.0, 2.0]);
    }

    #[test]
    fn stream() {
        let rect = Rect::new(1, 2, 3, 4).with_angle(Angle::degrees(30.0));
        let bytes = rect.to_stream_bytes(StreamVersion::Legacy).unwrap();
        assert_eq!(bytes, vec![0, 1, 0, 2, 0, 3, 0, 5, 0, 30]);
        assert_eq!(
            Rect::read_from(&mut bytes.as_slice(), StreamVersion::Legacy).unwrap(),
            rect
        );

        let rect = RectF::new(1.0, 2.0, 3.0, 4.0).with_angle(Angle::degrees(30.0));
        let bytes = rect.to_stream_bytes(StreamVersion::Current).unwrap();
        assert_eq!(bytes.len(), 40);
        assert_eq!(
            RectF::read_from(&mut bytes.as_slice(), StreamVersion::Current).unwrap(),
            rect
        );
    }
    #[test]
    fn full_negative_turn_is_positive_zero() {
        let rect = RectF::new(1.0, 2.0, 3.0, 4.0).rotated(Angle::degrees(-360.0));
        assert!(!rect.angle_degrees().is_sign_negative());
        assert_eq!(rect.to_string(), "ZQRectF(1,2 size 3x4 0 degrees)");

        let bytes = rect.to_stream_bytes(StreamVersion::Current).unwrap();
        assert_eq!(&bytes[32..], &[0; 8]);
        assert_eq!(rect, RectF::new(1.0, 2.0, 3.0, 4.0));
    }
}
