pub mod field;
pub mod log_setup;

pub use field::{Field, FieldError, PixelCoord};
