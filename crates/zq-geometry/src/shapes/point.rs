// Imports
use crate::serialize::{read_f64, read_int, write_f64, write_int};
use crate::{StreamError, StreamSerialize, StreamVersion};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A point with integer coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename = "point")]
pub struct Point {
    #[serde(rename = "x")]
    /// The x coordinate.
    pub x: i32,
    #[serde(rename = "y")]
    /// The y coordinate.
    pub y: i32,
}

impl Point {
    /// A new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are zero.
    pub fn is_null(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// The sum of the absolute coordinates.
    pub fn manhattan_length(&self) -> i32 {
        self.x.abs() + self.y.abs()
    }

    /// The dot product.
    pub fn dot(&self, other: &Self) -> i32 {
        self.x * other.x + self.y * other.y
    }

    /// Point with x and y swapped.
    pub fn transposed(&self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Convert to a vector.
    pub fn to_vector(self) -> na::Vector2<f64> {
        na::vector![f64::from(self.x), f64::from(self.y)]
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Point {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Scales and rounds the coordinates.
impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        (PointF::from(self) * rhs).to_point()
    }
}

/// Divides and rounds the coordinates.
impl Div<f64> for Point {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        (PointF::from(self) / rhs).to_point()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZQPoint({},{})", self.x, self.y)
    }
}

impl StreamSerialize for Point {
    fn write_to<W: Write>(
        &self,
        writer: &mut W,
        version: StreamVersion,
    ) -> Result<(), StreamError> {
        write_int(writer, self.x, version)?;
        write_int(writer, self.y, version)
    }

    fn read_from<R: Read>(reader: &mut R, version: StreamVersion) -> Result<Self, StreamError> {
        let x = read_int(reader, version)?;
        let y = read_int(reader, version)?;
        Ok(Self::new(x, y))
    }
}

/// A point with floating point coordinates.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename = "pointf")]
pub struct PointF {
    #[serde(rename = "x", with = "crate::serialize::f64_dp3")]
    /// The x coordinate.
    pub x: f64,
    #[serde(rename = "y", with = "crate::serialize::f64_dp3")]
    /// The y coordinate.
    pub y: f64,
}

impl PointF {
    /// A new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are zero.
    pub fn is_null(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// The sum of the absolute coordinates.
    pub fn manhattan_length(&self) -> f64 {
        self.x.abs() + self.y.abs()
    }

    /// The dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Point with x and y swapped.
    pub fn transposed(&self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Convert to a point with integer coordinates, rounding each coordinate.
    pub fn to_point(self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }

    /// Convert to a vector.
    pub fn to_vector(self) -> na::Vector2<f64> {
        na::vector![self.x, self.y]
    }
}

impl PartialEq for PointF {
    fn eq(&self, other: &Self) -> bool {
        approx::relative_eq!(self.x, other.x) && approx::relative_eq!(self.y, other.y)
    }
}

impl From<Point> for PointF {
    fn from(point: Point) -> Self {
        Self::new(f64::from(point.x), f64::from(point.y))
    }
}

impl From<na::Vector2<f64>> for PointF {
    fn from(vector: na::Vector2<f64>) -> Self {
        Self::new(vector[0], vector[1])
    }
}

impl From<PointF> for na::Vector2<f64> {
    fn from(point: PointF) -> Self {
        point.to_vector()
    }
}

impl From<PointF> for na::Point2<f64> {
    fn from(point: PointF) -> Self {
        na::point![point.x, point.y]
    }
}

impl From<kurbo::Point> for PointF {
    fn from(point: kurbo::Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<PointF> for kurbo::Point {
    fn from(point: PointF) -> Self {
        kurbo::Point::new(point.x, point.y)
    }
}

impl Add for PointF {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for PointF {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for PointF {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for PointF {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for PointF {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for PointF {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for PointF {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl fmt::Display for PointF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZQPointF({},{})", self.x, self.y)
    }
}

impl StreamSerialize for PointF {
    fn write_to<W: Write>(
        &self,
        writer: &mut W,
        _version: StreamVersion,
    ) -> Result<(), StreamError> {
        write_f64(writer, self.x)?;
        write_f64(writer, self.y)
    }

    fn read_from<R: Read>(reader: &mut R, _version: StreamVersion) -> Result<Self, StreamError> {
        let x = read_f64(reader)?;
        let y = read_f64(reader)?;
        Ok(Self::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Point::new(1, -2).to_string(), "ZQPoint(1,-2)");
        assert_eq!(PointF::new(1.5, 2.0).to_string(), "ZQPointF(1.5,2)");
    }

    #[test]
    fn arithmetic() {
        let mut p = Point::new(1, 2) + Point::new(3, 4);
        assert_eq!(p, Point::new(4, 6));
        p -= Point::new(1, 1);
        assert_eq!(-p, Point::new(-3, -5));
        assert_eq!(Point::new(3, 3) * 0.5, Point::new(2, 2));
        assert_eq!(Point::new(-3, 4).manhattan_length(), 7);
        assert_eq!(Point::new(1, 2).dot(&Point::new(3, 4)), 11);
    }

    #[test]
    fn rounding_conversion() {
        assert_eq!(PointF::new(1.5, -2.5).to_point(), Point::new(2, -3));
        assert_eq!(PointF::from(Point::new(7, 8)), PointF::new(7.0, 8.0));
    }

    #[test]
    fn approximate_equality() {
        assert_eq!(PointF::new(0.1 + 0.2, 1.0), PointF::new(0.3, 1.0));
        assert_ne!(PointF::new(0.3, 1.0), PointF::new(0.3, 1.001));
    }

    #[test]
    fn stream() {
        let bytes = Point::new(1, -1)
            .to_stream_bytes(StreamVersion::Legacy)
            .unwrap();
        assert_eq!(bytes, vec![0x00, 0x01, 0xff, 0xff]);
        assert_eq!(
            Point::read_from(&mut bytes.as_slice(), StreamVersion::Legacy).unwrap(),
            Point::new(1, -1)
        );

        let bytes = PointF::new(0.5, 2.0)
            .to_stream_bytes(StreamVersion::Current)
            .unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(
            PointF::read_from(&mut bytes.as_slice(), StreamVersion::Current).unwrap(),
            PointF::new(0.5, 2.0)
        );
    }
}
