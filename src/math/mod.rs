mod color;
pub use color::Color;

mod point;
pub use point::Point2;

mod rect;
pub use rect::Rect;
