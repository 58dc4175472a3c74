// Imports
use crate::ext::Vector2Ext;
use crate::shapes::{Ellipse, EllipseF, Line, LineF, Rect, RectF, Triangle, TriangleF};
use crate::{PointF, Shapeable};
use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{Area, BooleanOps, Contains, Intersects};
use std::ops::{BitAnd, BitOr};

/// The result of uniting or intersecting two shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Region<S> {
    /// One operand was null, the other one is returned untouched (including its angle).
    Shape(S),
    /// The polygons resulting from the boolean operation. They carry no rotation of their own.
    Polygons(geo::MultiPolygon<f64>),
}

impl<S> Region<S>
where
    S: Shapeable,
{
    /// The region as polygons.
    pub fn to_multi_polygon(&self) -> geo::MultiPolygon<f64> {
        match self {
            Self::Shape(shape) => geo::MultiPolygon::new(vec![shape.to_polygon()]),
            Self::Polygons(polygons) => polygons.clone(),
        }
    }

    /// The untouched shape, if the operation was short-circuited.
    pub fn shape(&self) -> Option<&S> {
        match self {
            Self::Shape(shape) => Some(shape),
            Self::Polygons(_) => None,
        }
    }

    /// Consumes the region, returning the untouched shape if the operation was short-circuited.
    pub fn into_shape(self) -> Option<S> {
        match self {
            Self::Shape(shape) => Some(shape),
            Self::Polygons(_) => None,
        }
    }

    /// Whether the region covers no area.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Shape(shape) => shape.is_null() || shape.is_degenerate(),
            Self::Polygons(polygons) => polygons.0.is_empty() || polygons.unsigned_area() == 0.0,
        }
    }

    /// The covered area.
    pub fn area(&self) -> f64 {
        self.to_multi_polygon().unsigned_area()
    }

    /// The outline of the region. Every ring becomes a closed subpath.
    pub fn to_path(&self) -> kurbo::BezPath {
        let polygons = match self {
            Self::Shape(shape) => return shape.to_path(),
            Self::Polygons(polygons) => polygons,
        };

        let mut path = kurbo::BezPath::new();
        for polygon in polygons.iter() {
            for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
                let mut coords = ring.coords();
                let Some(first) = coords.next() else {
                    continue;
                };

                path.move_to(kurbo::Point::new(first.x, first.y));
                for coord in coords {
                    path.line_to(kurbo::Point::new(coord.x, coord.y));
                }
                path.close_path();
            }
        }
        path
    }
}

/// The projected outline of a shape, collapsed to a lower dimension when it has no area.
#[derive(Debug, Clone)]
enum Outline {
    Point(geo::Point<f64>),
    Segment(geo::LineString<f64>),
    Area(geo::Polygon<f64>),
}

impl Outline {
    fn from_shape<S: Shapeable>(shape: &S) -> Option<Self> {
        let vertices = shape.projected_vertices();
        let first = *vertices.first()?;

        if vertices.iter().all(|v| v.approx_eq(&first)) {
            return Some(Self::Point(first.to_geo_coord().into()));
        }

        let polygon = crate::projection::vertices_to_polygon(&vertices);
        if vertices.len() < 3 || polygon.unsigned_area() == 0.0 {
            let coords = vertices
                .iter()
                .map(|v| v.to_geo_coord())
                .collect::<Vec<geo::Coord<f64>>>();
            return Some(Self::Segment(geo::LineString::new(coords)));
        }

        Some(Self::Area(polygon))
    }

    fn intersects(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Point(a), Self::Point(b)) => a == b,
            (Self::Point(p), Self::Segment(l)) | (Self::Segment(l), Self::Point(p)) => {
                l.intersects(&p.0)
            }
            (Self::Point(p), Self::Area(a)) | (Self::Area(a), Self::Point(p)) => a.intersects(&p.0),
            (Self::Segment(a), Self::Segment(b)) => a.intersects(b),
            (Self::Segment(l), Self::Area(a)) | (Self::Area(a), Self::Segment(l)) => {
                l.intersects(a)
            }
            (Self::Area(a), Self::Area(b)) => a.intersects(b),
        }
    }

    /// Whether the outline touches the given boundary ring.
    fn touches_ring(&self, ring: &geo::LineString<f64>) -> bool {
        match self {
            Self::Point(p) => ring.intersects(&p.0),
            Self::Segment(l) => l.intersects(ring),
            Self::Area(a) => ring.intersects(a),
        }
    }
}

/// Set operations on rotated shapes, computed on their projected polygons.
///
/// `proper` excludes any contact with the boundary of the containing shape.
pub trait SetOps: Shapeable {
    /// Whether the point lies in the rotated shape.
    ///
    /// Always false for null or degenerate shapes.
    fn contains_point(&self, point: impl Into<PointF>, proper: bool) -> bool {
        if self.is_null() || self.is_degenerate() {
            return false;
        }
        let Some(Outline::Area(polygon)) = Outline::from_shape(self) else {
            return false;
        };
        let point: PointF = point.into();

        match polygon.coordinate_position(&point.to_vector().to_geo_coord()) {
            CoordPos::Inside => true,
            CoordPos::OnBoundary => !proper,
            CoordPos::Outside => false,
        }
    }

    /// Whether the other shape lies in the rotated shape.
    ///
    /// Always false if either shape is null or the containing shape is degenerate.
    /// An identical copy is contained, but not properly.
    fn contains<S: Shapeable>(&self, other: &S, proper: bool) -> bool {
        if self.is_null() || other.is_null() || self.is_degenerate() {
            return false;
        }
        let (Some(Outline::Area(container)), Some(inner)) =
            (Outline::from_shape(self), Outline::from_shape(other))
        else {
            return false;
        };

        let contained = match &inner {
            Outline::Point(p) => container.contains(p),
            Outline::Segment(l) => container.contains(l),
            Outline::Area(a) => container.contains(a),
        };
        if !proper {
            return contained;
        }
        contained && !inner.touches_ring(container.exterior())
    }

    /// Whether the rotated shapes share at least one point.
    ///
    /// Always false if either shape is null.
    fn intersects<S: Shapeable>(&self, other: &S) -> bool {
        if self.is_null() || other.is_null() {
            return false;
        }
        match (Outline::from_shape(self), Outline::from_shape(other)) {
            (Some(a), Some(b)) => a.intersects(&b),
            _ => false,
        }
    }

    /// The union of both rotated shapes.
    ///
    /// If one of them is null, the other one is returned untouched.
    fn united(&self, other: &Self) -> Region<Self>
    where
        Self: Sized,
    {
        if self.is_null() {
            return Region::Shape(other.clone());
        }
        if other.is_null() {
            return Region::Shape(self.clone());
        }

        let polygons = match (area_polygon(self), area_polygon(other)) {
            (Some(a), Some(b)) => a.union(&b),
            (Some(p), None) | (None, Some(p)) => geo::MultiPolygon::new(vec![p]),
            (None, None) => geo::MultiPolygon::new(vec![]),
        };
        Region::Polygons(polygons)
    }

    /// The intersection of both rotated shapes.
    ///
    /// If one of them is null, the other one is returned untouched.
    fn intersected(&self, other: &Self) -> Region<Self>
    where
        Self: Sized,
    {
        if self.is_null() {
            return Region::Shape(other.clone());
        }
        if other.is_null() {
            return Region::Shape(self.clone());
        }

        let polygons = match (area_polygon(self), area_polygon(other)) {
            (Some(a), Some(b)) => a.intersection(&b),
            _ => geo::MultiPolygon::new(vec![]),
        };
        Region::Polygons(polygons)
    }
}

impl<T> SetOps for T where T: Shapeable {}

/// The projected polygon, if the shape covers an area.
fn area_polygon<S: Shapeable>(shape: &S) -> Option<geo::Polygon<f64>> {
    match Outline::from_shape(shape) {
        Some(Outline::Area(polygon)) => Some(polygon),
        _ => {
            tracing::debug!("boolean operation with a degenerate operand, treating it as empty");
            None
        }
    }
}

macro_rules! impl_region_ops {
    ($($shape:ty),* $(,)?) => {
        $(
            impl BitOr for $shape {
                type Output = Region<$shape>;

                fn bitor(self, rhs: Self) -> Self::Output {
                    self.united(&rhs)
                }
            }

            impl BitAnd for $shape {
                type Output = Region<$shape>;

                fn bitand(self, rhs: Self) -> Self::Output {
                    self.intersected(&rhs)
                }
            }
        )*
    };
}

impl_region_ops!(Line, LineF, Triangle, TriangleF, Rect, RectF, Ellipse, EllipseF);
