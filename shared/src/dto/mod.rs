//! # Data Transfer Objects (DTOs)
//!
//! - [`portal`] - Submitted GIF items and network selection
//!
//! All types implement `Serialize`/`Deserialize` with snake_case field names;
//! enums serialize to lowercase strings.

pub mod portal;

pub use portal::*;
