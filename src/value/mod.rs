//! Lazy property values

mod errors;
mod lazy;

pub use errors::{MissingValueError, ValueResult};
pub use lazy::{LazyValue, NoValue};
