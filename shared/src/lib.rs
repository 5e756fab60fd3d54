//! # Shared Data Transfer Objects Library
//!
//! Types shared by the controller (`lib-core`), the program codec (`lib-solana`)
//! and the browser front end (`gif-portal-web`).
//!
//! ## Structure
//!
//! - **[`dto`]**: Portal data types
//!   - **[`dto::portal`]**: [`GifItem`](dto::portal::GifItem) and [`Cluster`](dto::portal::Cluster)
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::explorer_address_url`]**: Build Solana Explorer links
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::portal::{Cluster, GifItem};
//! use shared::utils::explorer_address_url;
//!
//! let item = GifItem::new(
//!     "https://media.giphy.com/media/abc/giphy.gif",
//!     "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL",
//! );
//! let link = explorer_address_url(&item.user_address, Cluster::Devnet);
//! assert!(link.ends_with("?cluster=devnet"));
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
