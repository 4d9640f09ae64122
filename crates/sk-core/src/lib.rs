pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{Result, SkError};
pub use tolerance::Tolerance;
