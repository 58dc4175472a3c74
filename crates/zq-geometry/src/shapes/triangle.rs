// Imports
use super::{Point, PointF, Shapeable};
use crate::angle::{normalize_degrees, normalize_to_whole_degrees};
use crate::transform::Transformable;
use crate::{Angle, GeometryConfig, StreamError, StreamSerialize, StreamVersion};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};

/// Classification of a triangle by its largest interior angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleClass {
    /// All interior angles are smaller than 90 degrees.
    Acute,
    /// One interior angle is 90 degrees.
    Right,
    /// One interior angle is larger than 90 degrees.
    Obtuse,
    /// The vertices are collinear.
    Degenerate,
}

/// Classification of a triangle by its edge lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideClass {
    /// All edges have the same length.
    Equilateral,
    /// Two edges have the same length.
    Isosceles,
    /// All edges have different lengths.
    Scalene,
}

/// Measures shared by both triangle variants, computed on the unrotated vertices.
mod measure {
    use super::{AngleClass, SideClass};
    use crate::GeometryConfig;

    /// The edge lengths, each opposite to the vertex with the same index.
    pub(super) fn edge_lengths(v: &[na::Vector2<f64>; 3]) -> [f64; 3] {
        [
            (v[2] - v[1]).magnitude(),
            (v[2] - v[0]).magnitude(),
            (v[1] - v[0]).magnitude(),
        ]
    }

    /// The area by the shoelace formula.
    pub(super) fn area(v: &[na::Vector2<f64>; 3]) -> f64 {
        ((v[1] - v[0]).perp(&(v[2] - v[0])) * 0.5).abs()
    }

    /// The interior angles at each vertex in degrees, by the law of cosines.
    ///
    /// Zero for triangles with a zero length edge.
    pub(super) fn interior_angles(v: &[na::Vector2<f64>; 3]) -> [f64; 3] {
        let [a, b, c] = edge_lengths(v);
        if a == 0.0 || b == 0.0 || c == 0.0 {
            return [0.0; 3];
        }
        let angle_opposite = |opposite: f64, s1: f64, s2: f64| {
            ((s1 * s1 + s2 * s2 - opposite * opposite) / (2.0 * s1 * s2))
                .clamp(-1.0, 1.0)
                .acos()
                .to_degrees()
        };
        [
            angle_opposite(a, b, c),
            angle_opposite(b, a, c),
            angle_opposite(c, a, b),
        ]
    }

    pub(super) fn angle_class(v: &[na::Vector2<f64>; 3], config: &GeometryConfig) -> AngleClass {
        if area(v) == 0.0 {
            return AngleClass::Degenerate;
        }
        let largest = interior_angles(v).into_iter().fold(0.0, f64::max);

        if (largest - 90.0).abs() <= config.right_angle_tolerance_deg {
            AngleClass::Right
        } else if largest < 90.0 {
            AngleClass::Acute
        } else {
            AngleClass::Obtuse
        }
    }

    pub(super) fn side_class(v: &[na::Vector2<f64>; 3]) -> SideClass {
        let [a, b, c] = edge_lengths(v);
        let eq = |x: f64, y: f64| approx::relative_eq!(x, y, max_relative = 1e-9);

        match (eq(a, b), eq(b, c), eq(a, c)) {
            (true, true, _) => SideClass::Equilateral,
            (false, false, false) => SideClass::Scalene,
            _ => SideClass::Isosceles,
        }
    }
}

/// A triangle with integer coordinates, rotated around its centroid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename = "triangle")]
pub struct Triangle {
    #[serde(rename = "p1")]
    p1: Point,
    #[serde(rename = "p2")]
    p2: Point,
    #[serde(rename = "p3")]
    p3: Point,
    #[serde(rename = "angle")]
    angle: i32,
}

impl Triangle {
    /// A new triangle.
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            p1,
            p2,
            p3,
            angle: 0,
        }
    }

    /// A new triangle from the coordinates of its vertices.
    pub fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3))
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

    /// The first vertex.
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// The second vertex.
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// The third vertex.
    pub fn p3(&self) -> Point {
        self.p3
    }

    /// The vertex coordinates and the angle in degrees.
    pub fn coords(&self) -> (i32, i32, i32, i32, i32, i32, i32) {
        (
            self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x, self.p3.y, self.angle,
        )
    }

    /// The vertex coordinates and the angle in radians.
    pub fn coords_radians(&self) -> (i32, i32, i32, i32, i32, i32, f64) {
        (
            self.p1.x,
            self.p1.y,
            self.p2.x,
            self.p2.y,
            self.p3.x,
            self.p3.y,
            self.angle_radians(),
        )
    }

    /// Set the vertices, the angle is kept.
    pub fn set_points(&mut self, p1: Point, p2: Point, p3: Point) {
        self.p1 = p1;
        self.p2 = p2;
        self.p3 = p3;
    }

    /// Whether all vertices coincide.
    pub fn is_null(&self) -> bool {
        self.p1 == self.p2 && self.p2 == self.p3
    }

    /// The centroid, rounded.
    pub fn centroid(&self) -> Point {
        TriangleF::from(*self).centroid().to_point()
    }

    /// The edge lengths, each opposite to the vertex with the same index.
    pub fn edge_lengths(&self) -> [f64; 3] {
        measure::edge_lengths(&self.vertex_array())
    }

    /// The area.
    pub fn area(&self) -> f64 {
        measure::area(&self.vertex_array())
    }

    /// The interior angles at each vertex in degrees.
    pub fn interior_angles(&self) -> [f64; 3] {
        measure::interior_angles(&self.vertex_array())
    }

    /// Classification by the largest interior angle.
    pub fn angle_class(&self) -> AngleClass {
        measure::angle_class(&self.vertex_array(), &GeometryConfig::default())
    }

    /// Classification by the edge lengths.
    pub fn side_class(&self) -> SideClass {
        measure::side_class(&self.vertex_array())
    }

    /// Whether all interior angles are smaller than 90 degrees.
    pub fn is_acute(&self) -> bool {
        self.angle_class() == AngleClass::Acute
    }

    /// Whether one interior angle is 90 degrees.
    pub fn is_right(&self) -> bool {
        self.angle_class() == AngleClass::Right
    }

    /// Whether one interior angle is larger than 90 degrees.
    pub fn is_obtuse(&self) -> bool {
        self.angle_class() == AngleClass::Obtuse
    }

    /// Whether all edges have the same length.
    pub fn is_equilateral(&self) -> bool {
        self.side_class() == SideClass::Equilateral
    }

    /// Whether at least two edges have the same length.
    pub fn is_isosceles(&self) -> bool {
        self.side_class() != SideClass::Scalene
    }

    /// Whether all edges have different lengths.
    pub fn is_scalene(&self) -> bool {
        self.side_class() == SideClass::Scalene
    }

    /// Move each vertex by its offset.
    pub fn adjust(&mut self, p1_offset: Point, p2_offset: Point, p3_offset: Point) {
        self.p1 += p1_offset;
        self.p2 += p2_offset;
        self.p3 += p3_offset;
    }

    /// Adjust and rotate by the delta.
    pub fn adjust_w_angle(
        &mut self,
        p1_offset: Point,
        p2_offset: Point,
        p3_offset: Point,
        delta: Angle,
    ) {
        self.adjust(p1_offset, p2_offset, p3_offset);
        self.rotate(delta);
    }

    /// A copy, adjusted.
    pub fn adjusted(&self, p1_offset: Point, p2_offset: Point, p3_offset: Point) -> Self {
        let mut adjusted = *self;
        adjusted.adjust(p1_offset, p2_offset, p3_offset);
        adjusted
    }

    /// A copy, adjusted and rotated by the delta.
    pub fn adjusted_w_angle(
        &self,
        p1_offset: Point,
        p2_offset: Point,
        p3_offset: Point,
        delta: Angle,
    ) -> Self {
        let mut adjusted = *self;
        adjusted.adjust_w_angle(p1_offset, p2_offset, p3_offset, delta);
        adjusted
    }

    fn vertex_array(&self) -> [na::Vector2<f64>; 3] {
        [
            self.p1.to_vector(),
            self.p2.to_vector(),
            self.p3.to_vector(),
        ]
    }
}

impl Transformable for Triangle {
    type Offset = Point;

    fn translate(&mut self, offset: Point) {
        self.p1 += offset;
        self.p2 += offset;
        self.p3 += offset;
    }

    fn angle(&self) -> Angle {
        Angle::from(self.angle)
    }

    fn set_angle(&mut self, angle: Angle) {
        self.angle = normalize_to_whole_degrees(angle);
    }
}

impl Shapeable for Triangle {
    fn vertices(&self) -> Vec<na::Vector2<f64>> {
        self.vertex_array().to_vec()
    }

    fn pivot(&self) -> na::Vector2<f64> {
        let [a, b, c] = self.vertex_array();
        (a + b + c) / 3.0
    }

    fn is_null(&self) -> bool {
        Triangle::is_null(self)
    }

    fn is_degenerate(&self) -> bool {
        self.area() == 0.0
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZQTri({},{} {},{} {},{} {} degrees)",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x, self.p3.y, self.angle
        )
    }
}

/// Streams the vertices only, a triangle read back has angle zero.
impl StreamSerialize for Triangle {
    fn write_to<W: Write>(
        &self,
        writer: &mut W,
        version: StreamVersion,
    ) -> Result<(), StreamError> {
        self.p1.write_to(writer, version)?;
        self.p2.write_to(writer, version)?;
        self.p3.write_to(writer, version)
    }

    fn read_from<R: Read>(reader: &mut R, version: StreamVersion) -> Result<Self, StreamError> {
        let p1 = Point::read_from(reader, version)?;
        let p2 = Point::read_from(reader, version)?;
        let p3 = Point::read_from(reader, version)?;
        Ok(Self::new(p1, p2, p3))
    }
}

/// A triangle with floating point coordinates, rotated around its centroid.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename = "trianglef")]
pub struct TriangleF {
    #[serde(rename = "p1")]
    p1: PointF,
    #[serde(rename = "p2")]
    p2: PointF,
    #[serde(rename = "p3")]
    p3: PointF,
    #[serde(rename = "angle", with = "crate::serialize::f64_dp3")]
    angle: f64,
}

impl TriangleF {
    /// A new triangle.
    pub fn new(p1: PointF, p2: PointF, p3: PointF) -> Self {
        Self {
            p1,
            p2,
            p3,
            angle: 0.0,
        }
    }

    /// A new triangle from the coordinates of its vertices.
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        Self::new(
            PointF::new(x1, y1),
            PointF::new(x2, y2),
            PointF::new(x3, y3),
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

    /// The first vertex.
    pub fn p1(&self) -> PointF {
        self.p1
    }

    /// The second vertex.
    pub fn p2(&self) -> PointF {
        self.p2
    }

    /// The third vertex.
    pub fn p3(&self) -> PointF {
        self.p3
    }

    /// The vertex coordinates and the angle in degrees.
    pub fn coords(&self) -> (f64, f64, f64, f64, f64, f64, f64) {
        (
            self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x, self.p3.y, self.angle,
        )
    }

    /// The vertex coordinates and the angle in radians.
    pub fn coords_radians(&self) -> (f64, f64, f64, f64, f64, f64, f64) {
        (
            self.p1.x,
            self.p1.y,
            self.p2.x,
            self.p2.y,
            self.p3.x,
            self.p3.y,
            self.angle_radians(),
        )
    }

    /// Set the vertices, the angle is kept.
    pub fn set_points(&mut self, p1: PointF, p2: PointF, p3: PointF) {
        self.p1 = p1;
        self.p2 = p2;
        self.p3 = p3;
    }

    /// Whether all vertices coincide.
    pub fn is_null(&self) -> bool {
        self.p1 == self.p2 && self.p2 == self.p3
    }

    /// The centroid.
    pub fn centroid(&self) -> PointF {
        (self.p1 + self.p2 + self.p3) / 3.0
    }

    /// The edge lengths, each opposite to the vertex with the same index.
    pub fn edge_lengths(&self) -> [f64; 3] {
        measure::edge_lengths(&self.vertex_array())
    }

    /// The area.
    pub fn area(&self) -> f64 {
        measure::area(&self.vertex_array())
    }

    /// The interior angles at each vertex in degrees.
    pub fn interior_angles(&self) -> [f64; 3] {
        measure::interior_angles(&self.vertex_array())
    }

    /// Classification by the largest interior angle.
    pub fn angle_class(&self) -> AngleClass {
        self.angle_class_w_config(&GeometryConfig::default())
    }

    /// Classification by the largest interior angle, with the right angle tolerance of the config.
    pub fn angle_class_w_config(&self, config: &GeometryConfig) -> AngleClass {
        measure::angle_class(&self.vertex_array(), config)
    }

    /// Classification by the edge lengths.
    pub fn side_class(&self) -> SideClass {
        measure::side_class(&self.vertex_array())
    }

    /// Whether all interior angles are smaller than 90 degrees.
    pub fn is_acute(&self) -> bool {
        self.angle_class() == AngleClass::Acute
    }

    /// Whether one interior angle is 90 degrees.
    pub fn is_right(&self) -> bool {
        self.angle_class() == AngleClass::Right
    }

    /// Whether one interior angle is larger than 90 degrees.
    pub fn is_obtuse(&self) -> bool {
        self.angle_class() == AngleClass::Obtuse
    }

    /// Whether all edges have the same length.
    pub fn is_equilateral(&self) -> bool {
        self.side_class() == SideClass::Equilateral
    }

    /// Whether at least two edges have the same length.
    pub fn is_isosceles(&self) -> bool {
        self.side_class() != SideClass::Scalene
    }

    /// Whether all edges have different lengths.
    pub fn is_scalene(&self) -> bool {
        self.side_class() == SideClass::Scalene
    }

    /// Move each vertex by its offset.
    pub fn adjust(&mut self, p1_offset: PointF, p2_offset: PointF, p3_offset: PointF) {
        self.p1 += p1_offset;
        self.p2 += p2_offset;
        self.p3 += p3_offset;
    }

    /// Adjust and rotate by the delta.
    pub fn adjust_w_angle(
        &mut self,
        p1_offset: PointF,
        p2_offset: PointF,
        p3_offset: PointF,
        delta: Angle,
    ) {
        self.adjust(p1_offset, p2_offset, p3_offset);
        self.rotate(delta);
    }

    /// A copy, adjusted.
    pub fn adjusted(&self, p1_offset: PointF, p2_offset: PointF, p3_offset: PointF) -> Self {
        let mut adjusted = *self;
        adjusted.adjust(p1_offset, p2_offset, p3_offset);
        adjusted
    }

    /// A copy, adjusted and rotated by the delta.
    pub fn adjusted_w_angle(
        &self,
        p1_offset: PointF,
        p2_offset: PointF,
        p3_offset: PointF,
        delta: Angle,
    ) -> Self {
        let mut adjusted = *self;
        adjusted.adjust_w_angle(p1_offset, p2_offset, p3_offset, delta);
        adjusted
    }

    /// Convert to an integer triangle, rounding the coordinates and the angle.
    pub fn to_triangle(self) -> Triangle {
        Triangle::new(self.p1.to_point(), self.p2.to_point(), self.p3.to_point())
            .with_angle(Angle::degrees(self.angle))
    }

    fn vertex_array(&self) -> [na::Vector2<f64>; 3] {
        [
            self.p1.to_vector(),
            self.p2.to_vector(),
            self.p3.to_vector(),
        ]
    }
}

impl From<Triangle> for TriangleF {
    fn from(triangle: Triangle) -> Self {
        Self {
            p1: triangle.p1.into(),
            p2: triangle.p2.into(),
            p3: triangle.p3.into(),
            angle: f64::from(triangle.angle),
        }
    }
}

impl PartialEq for TriangleF {
    fn eq(&self, other: &Self) -> bool {
        self.p1 == other.p1
            && self.p2 == other.p2
            && self.p3 == other.p3
            && approx::relative_eq!(self.angle, other.angle)
    }
}

impl Transformable for TriangleF {
    type Offset = PointF;

    fn translate(&mut self, offset: PointF) {
        self.p1 += offset;
        self.p2 += offset;
        self.p3 += offset;
    }

    fn angle(&self) -> Angle {
        Angle::degrees(self.angle)
    }

    fn set_angle(&mut self, angle: Angle) {
        self.angle = normalize_degrees(angle.as_degrees());
    }
}

impl Shapeable for TriangleF {
    fn vertices(&self) -> Vec<na::Vector2<f64>> {
        self.vertex_array().to_vec()
    }

    fn pivot(&self) -> na::Vector2<f64> {
        self.centroid().to_vector()
    }

    fn is_null(&self) -> bool {
        TriangleF::is_null(self)
    }

    fn is_degenerate(&self) -> bool {
        self.area() == 0.0
    }
}

impl fmt::Display for TriangleF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZQTriF({},{} {},{} {},{} {} degrees)",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x, self.p3.y, self.angle
        )
    }
}

/// Streams the vertices only, a triangle read back has angle zero.
impl StreamSerialize for TriangleF {
    fn write_to<W: Write>(
        &self,
        writer: &mut W,
        version: StreamVersion,
    ) -> Result<(), StreamError> {
        self.p1.write_to(writer, version)?;
        self.p2.write_to(writer, version)?;
        self.p3.write_to(writer, version)
    }

    fn read_from<R: Read>(reader: &mut R, version: StreamVersion) -> Result<Self, StreamError> {
        let p1 = PointF::read_from(reader, version)?;
        let p2 = PointF::read_from(reader, version)?;
        let p3 = PointF::read_from(reader, version)?;
        Ok(Self::new(p1, p2, p3))
    }
}
