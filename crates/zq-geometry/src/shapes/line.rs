// Imports
use super::{Point, PointF, Shapeable};
use crate::angle::{normalize_degrees, normalize_to_whole_degrees};
use crate::transform::Transformable;
use crate::{Angle, GeometryConfig, StreamError, StreamSerialize, StreamVersion};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};

/// A line with integer coordinates, rotated around its center.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename = "line")]
pub struct Line {
    #[serde(rename = "p1")]
    p1: Point,
    #[serde(rename = "p2")]
    p2: Point,
    #[serde(rename = "angle")]
    angle: i32,
}

impl Line {
    /// A new line.
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2, angle: 0 }
    }

    /// A new line from the coordinates of its points.
    pub fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
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

    /// The start point.
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// The end point.
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// The x coordinate of the start point.
    pub fn x1(&self) -> i32 {
        self.p1.x
    }

    /// The y coordinate of the start point.
    pub fn y1(&self) -> i32 {
        self.p1.y
    }

    /// The x coordinate of the end point.
    pub fn x2(&self) -> i32 {
        self.p2.x
    }

    /// The y coordinate of the end point.
    pub fn y2(&self) -> i32 {
        self.p2.y
    }

    /// The horizontal component.
    pub fn dx(&self) -> i32 {
        self.p2.x - self.p1.x
    }

    /// The vertical component.
    pub fn dy(&self) -> i32 {
        self.p2.y - self.p1.y
    }

    /// The center, rounded towards the start point.
    pub fn center(&self) -> Point {
        Point::new(
            ((i64::from(self.p1.x) + i64::from(self.p2.x)) / 2) as i32,
            ((i64::from(self.p1.y) + i64::from(self.p2.y)) / 2) as i32,
        )
    }

    /// The point coordinates and the angle in degrees.
    pub fn coords(&self) -> (i32, i32, i32, i32, i32) {
        (self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.angle)
    }

    /// Set the start point.
    pub fn set_p1(&mut self, p1: Point) {
        self.p1 = p1;
    }

    /// Set the end point.
    pub fn set_p2(&mut self, p2: Point) {
        self.p2 = p2;
    }

    /// Set both points, the angle is kept.
    pub fn set_points(&mut self, p1: Point, p2: Point) {
        self.p1 = p1;
        self.p2 = p2;
    }

    /// Whether start and end point coincide.
    pub fn is_null(&self) -> bool {
        self.p1 == self.p2
    }

    /// Move the start and end point by their offsets.
    pub fn adjust(&mut self, p1_offset: Point, p2_offset: Point) {
        self.p1 += p1_offset;
        self.p2 += p2_offset;
    }

    /// Adjust and rotate by the delta.
    pub fn adjust_w_angle(&mut self, p1_offset: Point, p2_offset: Point, delta: Angle) {
        self.adjust(p1_offset, p2_offset);
        self.rotate(delta);
    }

    /// A copy, adjusted.
    pub fn adjusted(&self, p1_offset: Point, p2_offset: Point) -> Self {
        let mut adjusted = *self;
        adjusted.adjust(p1_offset, p2_offset);
        adjusted
    }

    /// A copy, adjusted and rotated by the delta.
    pub fn adjusted_w_angle(&self, p1_offset: Point, p2_offset: Point, delta: Angle) -> Self {
        let mut adjusted = *self;
        adjusted.adjust_w_angle(p1_offset, p2_offset, delta);
        adjusted
    }

    /// Convert to a floating point line.
    pub fn to_linef(self) -> LineF {
        LineF::from(self)
    }
}

impl Transformable for Line {
    type Offset = Point;

    fn translate(&mut self, offset: Point) {
        self.p1 += offset;
        self.p2 += offset;
    }

    fn angle(&self) -> Angle {
        Angle::from(self.angle)
    }

    fn set_angle(&mut self, angle: Angle) {
        self.angle = normalize_to_whole_degrees(angle);
    }
}

impl Shapeable for Line {
    fn vertices(&self) -> Vec<na::Vector2<f64>> {
        vec![self.p1.to_vector(), self.p2.to_vector()]
    }

    fn pivot(&self) -> na::Vector2<f64> {
        (self.p1.to_vector() + self.p2.to_vector()) * 0.5
    }

    fn is_null(&self) -> bool {
        Line::is_null(self)
    }

    fn is_degenerate(&self) -> bool {
        Line::is_null(self)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZQLine({},{} to {},{} {} degrees)",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.angle
        )
    }
}

/// Streams the endpoints only, a line read back has angle zero.
impl StreamSerialize for Line {
    fn write_to<W: Write>(
        &self,
        writer: &mut W,
        version: StreamVersion,
    ) -> Result<(), StreamError> {
        self.p1.write_to(writer, version)?;
        self.p2.write_to(writer, version)
    }

    fn read_from<R: Read>(reader: &mut R, version: StreamVersion) -> Result<Self, StreamError> {
        let p1 = Point::read_from(reader, version)?;
        let p2 = Point::read_from(reader, version)?;
        Ok(Self::new(p1, p2))
    }
}

/// How two lines intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// The lines are parallel or one of them is null.
    None,
    /// The lines intersect at the point, which lies on both of them.
    Bounded(PointF),
    /// The extensions of the lines intersect at the point, outside of at least one of them.
    Unbounded(PointF),
}

/// A line with floating point coordinates, rotated around its center.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename = "linef")]
pub struct LineF {
    #[serde(rename = "p1")]
    p1: PointF,
    #[serde(rename = "p2")]
    p2: PointF,
    #[serde(rename = "angle", with = "crate::serialize::f64_dp3")]
    angle: f64,
}

impl LineF {
    /// A new line.
    pub fn new(p1: PointF, p2: PointF) -> Self {
        Self { p1, p2, angle: 0.0 }
    }

    /// A new line from the coordinates of its points.
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(PointF::new(x1, y1), PointF::new(x2, y2))
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

    /// The start point.
    pub fn p1(&self) -> PointF {
        self.p1
    }

    /// The end point.
    pub fn p2(&self) -> PointF {
        self.p2
    }

    /// The x coordinate of the start point.
    pub fn x1(&self) -> f64 {
        self.p1.x
    }

    /// The y coordinate of the start point.
    pub fn y1(&self) -> f64 {
        self.p1.y
    }

    /// The x coordinate of the end point.
    pub fn x2(&self) -> f64 {
        self.p2.x
    }

    /// The y coordinate of the end point.
    pub fn y2(&self) -> f64 {
        self.p2.y
    }

    /// The horizontal component.
    pub fn dx(&self) -> f64 {
        self.p2.x - self.p1.x
    }

    /// The vertical component.
    pub fn dy(&self) -> f64 {
        self.p2.y - self.p1.y
    }

    /// The center.
    pub fn center(&self) -> PointF {
        (self.p1 + self.p2) * 0.5
    }

    /// The point coordinates and the angle in degrees.
    pub fn coords(&self) -> (f64, f64, f64, f64, f64) {
        (self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.angle)
    }

    /// The point coordinates and the angle in radians.
    pub fn coords_radians(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.p1.x,
            self.p1.y,
            self.p2.x,
            self.p2.y,
            self.angle_radians(),
        )
    }

    /// Set the start point.
    pub fn set_p1(&mut self, p1: PointF) {
        self.p1 = p1;
    }

    /// Set the end point.
    pub fn set_p2(&mut self, p2: PointF) {
        self.p2 = p2;
    }

    /// Set both points, the angle is kept.
    pub fn set_points(&mut self, p1: PointF, p2: PointF) {
        self.p1 = p1;
        self.p2 = p2;
    }

    /// Whether start and end point coincide.
    pub fn is_null(&self) -> bool {
        self.p1 == self.p2
    }

    /// The length.
    pub fn length(&self) -> f64 {
        self.dx().hypot(self.dy())
    }

    /// Set the length by moving the end point along the line. Null lines are left unchanged.
    pub fn set_length(&mut self, length: f64) {
        let current = self.length();
        if current == 0.0 {
            return;
        }
        self.p2 = self.p1 + (self.p2 - self.p1) * (length / current);
    }

    /// The direction of the unrotated line in degrees, counter-clockwise with the y-axis pointing down,
    /// in the range [0, 360).
    pub fn heading(&self) -> f64 {
        normalize_degrees((-self.dy()).atan2(self.dx()).to_degrees())
    }

    /// A line starting at the start point with the same direction and length 1.
    pub fn unit_vector(&self) -> Self {
        self.unit_vector_w_config(&GeometryConfig::default())
    }

    /// A line starting at the start point with the same direction and length 1,
    /// checking the length with the tolerance of the config.
    pub fn unit_vector_w_config(&self, config: &GeometryConfig) -> Self {
        let length = self.length();
        let unit = Self {
            p1: self.p1,
            p2: self.p1 + (self.p2 - self.p1) / length,
            angle: self.angle,
        };

        if !((unit.length() - 1.0).abs() < config.unit_length_tolerance) {
            tracing::warn!(
                "Unit vector of line `{self}` does not have length 1.0, length: {}",
                unit.length()
            );
        }
        unit
    }

    /// A line starting at the start point, perpendicular to this line and with the same length.
    pub fn normal_vector(&self) -> Self {
        Self {
            p1: self.p1,
            p2: self.p1 + PointF::new(self.dy(), -self.dx()),
            angle: self.angle,
        }
    }

    /// The point at the parameter, with 0.0 being the start and 1.0 the end point.
    pub fn point_at(&self, t: f64) -> PointF {
        self.p1 + (self.p2 - self.p1) * t
    }

    /// The intersection with the other line, both taken with their rotation applied.
    pub fn line_intersection(&self, other: &Self) -> LineIntersection {
        let [a, b] = self.realized_endpoints();
        let [c, d] = other.realized_endpoints();
        let ab = b - a;
        let cd = d - c;
        let denom = ab.perp(&cd);

        if denom == 0.0 || !denom.is_finite() {
            return LineIntersection::None;
        }
        let ac = c - a;
        let t = ac.perp(&cd) / denom;
        let u = ac.perp(&ab) / denom;
        let point = PointF::from(a + ab * t);

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            LineIntersection::Bounded(point)
        } else {
            LineIntersection::Unbounded(point)
        }
    }

    /// The end points with the rotation applied.
    pub fn realized_endpoints(&self) -> [na::Vector2<f64>; 2] {
        let projected = self.projected_vertices();
        [projected[0], projected[1]]
    }

    /// Move the start and end point by their offsets.
    pub fn adjust(&mut self, p1_offset: PointF, p2_offset: PointF) {
        self.p1 += p1_offset;
        self.p2 += p2_offset;
    }

    /// Adjust and rotate by the delta.
    pub fn adjust_w_angle(&mut self, p1_offset: PointF, p2_offset: PointF, delta: Angle) {
        self.adjust(p1_offset, p2_offset);
        self.rotate(delta);
    }

    /// A copy, adjusted.
    pub fn adjusted(&self, p1_offset: PointF, p2_offset: PointF) -> Self {
        let mut adjusted = *self;
        adjusted.adjust(p1_offset, p2_offset);
        adjusted
    }

    /// A copy, adjusted and rotated by the delta.
    pub fn adjusted_w_angle(&self, p1_offset: PointF, p2_offset: PointF, delta: Angle) -> Self {
        let mut adjusted = *self;
        adjusted.adjust_w_angle(p1_offset, p2_offset, delta);
        adjusted
    }

    /// Convert to an integer line, rounding the coordinates and the angle.
    pub fn to_line(self) -> Line {
        Line::new(self.p1.to_point(), self.p2.to_point()).with_angle(Angle::degrees(self.angle))
    }
}

impl From<Line> for LineF {
    fn from(line: Line) -> Self {
        Self {
            p1: line.p1.into(),
            p2: line.p2.into(),
            angle: f64::from(line.angle),
        }
    }
}

impl PartialEq for LineF {
    fn eq(&self, other: &Self) -> bool {
        self.p1 == other.p1 && self.p2 == other.p2 && approx::relative_eq!(self.angle, other.angle)
    }
}

impl Transformable for LineF {
    type Offset = PointF;

    fn translate(&mut self, offset: PointF) {
        self.p1 += offset;
        self.p2 += offset;
    }

    fn angle(&self) -> Angle {
        Angle::degrees(self.angle)
    }

    fn set_angle(&mut self, angle: Angle) {
        self.angle = normalize_degrees(angle.as_degrees());
    }
}

impl Shapeable for LineF {
    fn vertices(&self) -> Vec<na::Vector2<f64>> {
        vec![self.p1.to_vector(), self.p2.to_vector()]
    }

    fn pivot(&self) -> na::Vector2<f64> {
        self.center().to_vector()
    }

    fn is_null(&self) -> bool {
        LineF::is_null(self)
    }

    fn is_degenerate(&self) -> bool {
        LineF::is_null(self)
    }
}

impl fmt::Display for LineF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZQLineF({},{} to {},{} {} degrees)",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.angle
        )
    }
}

/// Streams the endpoints only, a line read back has angle zero.
impl StreamSerialize for LineF {
    fn write_to<W: Write>(
        &self,
        writer: &mut W,
        version: StreamVersion,
    ) -> Result<(), StreamError> {
        self.p1.write_to(writer, version)?;
        self.p2.write_to(writer, version)
    }

    fn read_from<R: Read>(reader: &mut R, version: StreamVersion) -> Result<Self, StreamError> {
        let p1 = PointF::read_from(reader, version)?;
        let p2 = PointF::read_from(reader, version)?;
        Ok(Self::new(p1, p2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn display() {
        let line = LineF::from_coords(1.0, 2.0, 3.0, 4.0).with_angle(Angle::degrees(20.0));
        assert_eq!(line.to_string(), "ZQLineF(1,2 to 3,4 20 degrees)");
        assert_eq!(
            Line::from_coords(1, 2, 3, 4).to_string(),
            "ZQLine(1,2 to 3,4 0 degrees)"
        );
    }

    #[test]
    fn null() {
        assert!(Line::default().is_null());
        assert!(LineF::default().is_null());
        assert!(LineF::from_coords(1.0, 1.0, 1.0, 1.0).is_null());
        assert!(!LineF::from_coords(0.0, 0.0, 1.0, 0.0).is_null());
    }

    #[test]
    fn length_and_heading() {
        let mut line = LineF::from_coords(0.0, 0.0, 3.0, 4.0);
        assert_relative_eq!(line.length(), 5.0);
        line.set_length(10.0);
        assert_eq!(line.p2(), PointF::new(6.0, 8.0));

        // y points down, so going up is 90 degrees
        assert_relative_eq!(LineF::from_coords(0.0, 0.0, 0.0, -1.0).heading(), 90.0);
        assert_relative_eq!(LineF::from_coords(0.0, 0.0, -1.0, 0.0).heading(), 180.0);
        assert_relative_eq!(LineF::from_coords(0.0, 0.0, 0.0, 1.0).heading(), 270.0);

        let mut null = LineF::default();
        null.set_length(5.0);
        assert!(null.is_null());
    }

    #[test]
    fn unit_and_normal_vector() {
        let line = LineF::from_coords(1.0, 1.0, 4.0, 5.0);
        let unit = line.unit_vector();
        assert_eq!(unit.p1(), line.p1());
        assert_relative_eq!(unit.length(), 1.0);
        assert_eq!(unit.p2(), PointF::new(1.6, 1.8));

        let normal = line.normal_vector();
        assert_eq!(normal.p2(), PointF::new(5.0, -2.0));
        assert_relative_eq!(normal.length(), line.length());
    }

    #[test]
    fn point_at() {
        let line = LineF::from_coords(0.0, 0.0, 10.0, 20.0);
        assert_eq!(line.point_at(0.5), line.center());
        assert_eq!(line.point_at(2.0), PointF::new(20.0, 40.0));
    }

    #[test]
    fn intersection() {
        let a = LineF::from_coords(0.0, 0.0, 2.0, 2.0);
        let b = LineF::from_coords(0.0, 2.0, 2.0, 0.0);
        assert_eq!(
            a.line_intersection(&b),
            LineIntersection::Bounded(PointF::new(1.0, 1.0))
        );

        let c = LineF::from_coords(3.0, 0.0, 4.0, 0.0);
        match a.line_intersection(&c) {
            LineIntersection::Unbounded(p) => assert_eq!(p, PointF::new(0.0, 0.0)),
            other => panic!("expected unbounded intersection, got {other:?}"),
        }

        let parallel = LineF::from_coords(0.0, 1.0, 2.0, 3.0);
        assert_eq!(a.line_intersection(&parallel), LineIntersection::None);
        assert_eq!(a.line_intersection(&LineF::default()), LineIntersection::None);
    }

    #[test]
    fn intersection_uses_rotation() {
        // horizontal line, rotated by a quarter turn around its center (1, 0) becomes vertical
        let a = LineF::from_coords(0.0, 0.0, 2.0, 0.0).with_angle(Angle::degrees(90.0));
        let b = LineF::from_coords(0.0, 0.5, 2.0, 0.5);
        match a.line_intersection(&b) {
            LineIntersection::Bounded(p) => {
                assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
                assert_relative_eq!(p.y, 0.5, epsilon = 1e-12);
            }
            other => panic!("expected bounded intersection, got {other:?}"),
        }
    }

    #[test]
    fn rotate_and_adjust() {
        let line = Line::from_coords(0, 0, 10, 0).with_angle(Angle::degrees(350.0));
        let rotated = line.rotated(Angle::degrees(20.0));
        assert_eq!(rotated.angle_degrees(), 10);
        assert_eq!(rotated.p1(), line.p1());
        assert_eq!(rotated.p2(), line.p2());

        let adjusted = line.adjusted_w_angle(Point::new(1, 1), Point::new(-1, 2), Angle::degrees(-350.0));
        assert_eq!(adjusted.coords(), (1, 1, 9, 2, 0));
    }

    #[test]
    fn conversions() {
        let line = Line::from_coords(1, 2, 3, 4).with_angle(Angle::degrees(45.0));
        let linef = LineF::from(line);
        assert_eq!(linef.coords(), (1.0, 2.0, 3.0, 4.0, 45.0));
        assert_eq!(linef.to_line(), line);
        assert_eq!(
            LineF::from_coords(0.4, 0.6, 1.5, -1.5).to_line(),
            Line::from_coords(0, 1, 2, -2)
        );
    }

    #[test]
    fn projects_two_vertices() {
        let line = LineF::from_coords(0.0, 0.0, 2.0, 0.0).with_angle(Angle::degrees(90.0));
        let vertices = line.projected_vertices();
        assert_eq!(vertices.len(), 2);
        assert_relative_eq!(vertices[0], na::vector![1.0, -1.0], epsilon = 1e-12);
        assert_relative_eq!(vertices[1], na::vector![1.0, 1.0], epsilon = 1e-12);
    }

    #[test]
    fn stream() {
        let line = Line::from_coords(1, 2, 3, 4);
        let bytes = line.to_stream_bytes(StreamVersion::Legacy).unwrap();
        assert_eq!(bytes, vec![0, 1, 0, 2, 0, 3, 0, 4]);
        assert_eq!(
            Line::read_from(&mut bytes.as_slice(), StreamVersion::Legacy).unwrap(),
            line
        );

        let line = LineF::from_coords(1.0, 2.0, 3.0, 4.0);
        let bytes = line.to_stream_bytes(StreamVersion::Current).unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(
            LineF::read_from(&mut bytes.as_slice(), StreamVersion::Current).unwrap(),
            line
        );
    }

    #[test]
    fn stream_skips_angle() {
        let rotated = LineF::from_coords(1.5, 2.0, 3.0, 4.0).with_angle(Angle::degrees(90.0));
        let bytes = rotated.to_stream_bytes(StreamVersion::Current).unwrap();
        assert_eq!(bytes.len(), 32);
        let read = LineF::read_from(&mut bytes.as_slice(), StreamVersion::Current).unwrap();
        assert_eq!(read.coords(), (1.5, 2.0, 3.0, 4.0, 0.0));

        let rotated = Line::from_coords(1, 2, 3, 4).with_angle(Angle::degrees(90.0));
        let bytes = rotated.to_stream_bytes(StreamVersion::Current).unwrap();
        assert_eq!(bytes.len(), 16);
    }
}
