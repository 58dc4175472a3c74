// Modules
mod ellipse;
mod line;
mod margins;
mod point;
mod rectangle;
mod shapeable;
mod triangle;

// Re-exports
pub use ellipse::{Ellipse, EllipseF};
pub use line::{Line, LineF, LineIntersection};
pub use margins::{Margins, MarginsF};
pub use point::{Point, PointF};
pub use rectangle::{Rect, RectF};
pub use shapeable::Shapeable;
pub use triangle::{AngleClass, SideClass, Triangle, TriangleF};
