//! Material strength data.
//!
//! - [`catalog`] - The immutable [`MaterialTable`] and CSV loading
//! - [`constants`] - Built-in strength limits

pub mod catalog;
pub mod constants;

pub use catalog::{Material, MaterialTable};
pub use constants::{BUILTIN_MATERIALS, DEFAULT_MATERIAL};
