//! Application constants

use shared::dto::portal::Cluster;

/// Anchor IDL of the deployed GIF program
pub const IDL_JSON: &str = include_str!("../../assets/idl.json");

/// Secret key of the shared base account
pub const BASE_ACCOUNT_KEYPAIR_JSON: &str = include_str!("../../assets/keypair.json");

pub const CLUSTER: Cluster = Cluster::Devnet;
