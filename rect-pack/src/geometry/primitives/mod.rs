mod edge;
mod oriented_rect;
mod point;
mod rect;
mod simple_polygon;
mod vector;

#[doc(inline)]
pub use edge::Edge;
#[doc(inline)]
pub use oriented_rect::Frame;
#[doc(inline)]
pub use oriented_rect::ORect;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use simple_polygon::SPolygon;
#[doc(inline)]
pub use vector::Vector;
