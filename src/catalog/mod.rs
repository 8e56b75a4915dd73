//! Property catalogs
//!
//! Each engine owns one catalog describing the properties it can populate:
//! their data type, the access tiers they are present in, and whether
//! configuration has excluded them.

mod types;

pub use types::{DataType, PropertyCatalog, PropertyDescriptor};
