#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

//! the zq-geometry crate provides rotatable 2D shapes (points, lines, triangles, rectangles and ellipses),
//! their projection into polygons and set operations on them.

// Modules
/// angles and angle normalization
pub mod angle;
/// configuration
pub mod config;
/// module for extension traits for foreign types
pub mod ext;
/// projection of rotated shapes into polygons
pub mod projection;
/// utilities for serializing / deserializing
pub mod serialize;
/// set operations on shapes
pub mod setops;
/// module for shapes
pub mod shapes;
/// module for transformation
pub mod transform;

// Re-exports
pub use angle::Angle;
pub use config::GeometryConfig;
pub use serialize::{StreamError, StreamSerialize, StreamVersion};
pub use setops::{Region, SetOps};
pub use shapes::{
    AngleClass, Ellipse, EllipseF, Line, LineF, LineIntersection, Margins, MarginsF, Point,
    PointF, Rect, RectF, Shapeable, SideClass, Triangle, TriangleF,
};
pub use transform::{Transform, Transformable};

// Renames
extern crate nalgebra as na;
extern crate parry2d_f64 as p2d;
