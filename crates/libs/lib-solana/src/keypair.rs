//! # Keypair Loading
//!
//! Loads the base account keypair shipped with the front end.
//!
//! Two layouts are accepted:
//! - the serialized web3.js `Keypair` object:
//!   `{"_keypair":{"publicKey":{"0":n,..},"secretKey":{"0":n,..,"63":n}}}`
//! - the Solana CLI layout: a JSON array of 64 numbers
//!
//! In both, bytes `0..32` are the ed25519 seed and bytes `32..64` the public
//! key. The public half must match the key derived from the seed.

use serde_json::Value;
use solana_sdk::signature::{Keypair, Signer};
use tracing::debug;

use crate::error::{Result, SolanaError};

const SECRET_KEY_LEN: usize = 64;

/// Parse a keypair file.
pub fn keypair_from_json(json: &str) -> Result<Keypair> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| SolanaError::Keypair(format!("Failed to parse keypair JSON: {}", e)))?;

    let bytes = match &value {
        Value::Array(items) => bytes_from_array(items)?,
        Value::Object(map) => {
            let secret = map
                .get("_keypair")
                .and_then(|kp| kp.get("secretKey"))
                .ok_or_else(|| SolanaError::Keypair("missing _keypair.secretKey".to_string()))?;
            match secret {
                Value::Object(indexed) => bytes_from_indexed(indexed)?,
                Value::Array(items) => bytes_from_array(items)?,
                _ => {
                    return Err(SolanaError::Keypair(
                        "secretKey must be an object or an array".to_string(),
                    ))
                }
            }
        }
        _ => {
            return Err(SolanaError::Keypair(
                "keypair file must be an object or an array".to_string(),
            ))
        }
    };

    keypair_from_bytes(&bytes)
}

/// Build a keypair from 64 secret key bytes, checking the public half.
pub fn keypair_from_bytes(bytes: &[u8]) -> Result<Keypair> {
    if bytes.len() != SECRET_KEY_LEN {
        return Err(SolanaError::Keypair(format!(
            "expected {} bytes, got {}",
            SECRET_KEY_LEN,
            bytes.len()
        )));
    }

    let mut seed = [0u8; 32];
    seed.copy_from_slice(&bytes[..32]);
    let keypair = Keypair::new_from_array(seed);

    if keypair.pubkey().to_bytes()[..] != bytes[32..] {
        return Err(SolanaError::Keypair(
            "public key does not match the secret seed".to_string(),
        ));
    }

    debug!("Loaded keypair {}", keypair.pubkey());
    Ok(keypair)
}

fn bytes_from_array(items: &[Value]) -> Result<Vec<u8>> {
    items.iter().map(byte_value).collect()
}

/// `{"0": n, "1": n, ...}` with every index from 0 to 63 present.
fn bytes_from_indexed(map: &serde_json::Map<String, Value>) -> Result<Vec<u8>> {
    let mut bytes = vec![None; map.len()];
    for (key, value) in map {
        let index: usize = key
            .parse()
            .map_err(|_| SolanaError::Keypair(format!("non-numeric secretKey index '{}'", key)))?;
        let slot = bytes
            .get_mut(index)
            .ok_or_else(|| {
                SolanaError::Keypair(format!("secretKey index {} out of range", index))
            })?;
        *slot = Some(byte_value(value)?);
    }

    bytes
        .into_iter()
        .enumerate()
        .map(|(i, b)| {
            b.ok_or_else(|| SolanaError::Keypair(format!("secretKey index {} missing", i)))
        })
        .collect()
}

fn byte_value(value: &Value) -> Result<u8> {
    value
        .as_u64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| SolanaError::Keypair(format!("'{}' is not a byte", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{BASE_ACCOUNT, BUNDLED_KEYPAIR};

    const SECRET: [u8; 64] = [
        144, 127, 102, 119, 178, 13, 99, 54, 2, 186, 210, 100, 151, 21, 133, 13, 21, 177, 51, 178,
        161, 215, 186, 208, 179, 246, 164, 176, 170, 160, 214, 185, 80, 22, 251, 134, 192, 113, 86,
        110, 245, 227, 167, 62, 75, 4, 176, 86, 59, 248, 16, 147, 98, 238, 9, 79, 49, 79, 152, 63,
        63, 125, 205, 84,
    ];

    #[test]
    fn test_bundled_keypair() {
        let keypair = keypair_from_json(BUNDLED_KEYPAIR).unwrap();
        assert_eq!(keypair.pubkey().to_string(), BASE_ACCOUNT);
    }

    #[test]
    fn test_cli_array_layout() {
        let json = serde_json::to_string(&SECRET.to_vec()).unwrap();
        let keypair = keypair_from_json(&json).unwrap();
        assert_eq!(keypair.pubkey().to_string(), BASE_ACCOUNT);
    }

    #[test]
    fn test_rejects_mismatched_halves() {
        let mut bytes = SECRET;
        bytes[40] ^= 0xff;
        assert!(matches!(
            keypair_from_bytes(&bytes),
            Err(SolanaError::Keypair(_))
        ));
    }

    #[test]
    fn test_rejects_missing_index() {
        let mut map = serde_json::Map::new();
        for (i, b) in SECRET.iter().enumerate().skip(1) {
            map.insert(i.to_string(), Value::from(*b));
        }
        map.insert("64".to_string(), Value::from(0));
        let json = serde_json::json!({ "_keypair": { "secretKey": map } }).to_string();
        assert!(keypair_from_json(&json).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_byte() {
        let mut values: Vec<u64> = SECRET.iter().map(|b| *b as u64).collect();
        values[0] = 256;
        let json = serde_json::to_string(&values).unwrap();
        assert!(keypair_from_json(&json).is_err());
    }
}
