//! Anchor discriminators: the first 8 bytes of `sha256("<namespace>:<name>")`.
//!
//! Instructions use the `global` namespace with the snake_case method name,
//! accounts use the `account` namespace with the struct name as written.

use sha2::{Digest, Sha256};

pub const DISCRIMINATOR_LEN: usize = 8;

pub type Discriminator = [u8; DISCRIMINATOR_LEN];

/// Discriminator for an instruction named as in the IDL (`addGif`).
pub fn instruction_discriminator(idl_name: &str) -> Discriminator {
    sighash("global", &to_snake_case(idl_name))
}

/// Discriminator for an account type (`BaseAccount`).
pub fn account_discriminator(type_name: &str) -> Discriminator {
    sighash("account", type_name)
}

fn sighash(namespace: &str, name: &str) -> Discriminator {
    let digest = Sha256::digest(format!("{}:{}", namespace, name).as_bytes());
    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    out
}

/// `startStuffOff` → `start_stuff_off`
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
