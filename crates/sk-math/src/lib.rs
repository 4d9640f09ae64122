pub mod rect;
pub mod vector;

pub use glam::{dvec2, DMat3, DVec2};
pub use rect::Rect;
pub use vector::Vector2Ext;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
