/// Distance tolerance used by opt-in shape comparisons.
///
/// Mutators never consult a tolerance; only queries such as
/// `Ellipse::is_circle` and validation take one.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Absolute tolerance in world units
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;

    pub fn new(linear: f64) -> Self {
        Self { linear }
    }

    pub fn default_precision() -> Self {
        Self::new(Self::DEFAULT_LINEAR)
    }

    pub fn loose() -> Self {
        Self::new(1e-4)
    }

    pub fn tight() -> Self {
        Self::new(1e-12)
    }

    /// `a` and `b` differ by less than the linear tolerance. NaN never compares equal.
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
