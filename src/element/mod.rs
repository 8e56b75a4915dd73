//! Element data
//!
//! The per-request result object an engine populates, keyed by the engine's
//! data key, and the property-access path that decides between a stored
//! value and a diagnosed failure.

mod data;

pub use data::{ElementData, ElementDataBuilder};
