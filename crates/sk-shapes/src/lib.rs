//! ShapeKit collision shapes: ellipse/circle and rectangle behind a shared
//! capability trait, plus the instance pool that recycles them.

pub mod ellipse;
pub mod pool;
pub mod rect;
pub mod shape;

pub use ellipse::Ellipse;
pub use pool::{Pool, Poolable};
pub use shape::{Shape, ShapeKind};
