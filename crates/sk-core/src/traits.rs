use crate::error::Result;

/// Validate the derived state of a shape without modifying it.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Compute an axis-aligned bounding box as a `(min, max)` corner pair.
pub trait BoundingBox {
    type Point;
    fn bounding_box(&self) -> (Self::Point, Self::Point);
}
