use glam::DVec2;

/// Helpers on the 2D vector type that glam does not provide directly.
pub trait Vector2Ext {
    /// Rotate counter-clockwise by `angle` radians about `pivot`
    /// (the coordinate origin when `None`).
    fn rotate_about(self, angle: f64, pivot: Option<DVec2>) -> Self;
}

impl Vector2Ext for DVec2 {
    fn rotate_about(self, angle: f64, pivot: Option<DVec2>) -> Self {
        let pivot = pivot.unwrap_or(DVec2::ZERO);
        pivot + DVec2::from_angle(angle).rotate(self - pivot)
    }
}
