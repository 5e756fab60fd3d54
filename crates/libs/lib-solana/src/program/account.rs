//! # BaseAccount Decoding
//!
//! On-chain layout (Borsh, little endian):
//!
//! ```text
//! [discriminator: 8] [total_gifs: u64]
//! [gif_list: u32 len, then per item: u32 len + utf8 gif_link, 32-byte user_address]
//! [user_address: 32]
//! ```
//!
//! The account is allocated larger than its contents; trailing bytes are ignored.

use shared::dto::portal::GifItem;
use solana_sdk::pubkey::Pubkey;

use crate::error::{Result, SolanaError};
use crate::program::discriminator::{account_discriminator, DISCRIMINATOR_LEN};

pub const BASE_ACCOUNT_TYPE: &str = "BaseAccount";

/// Smallest encoded item: empty link plus the address.
const MIN_ITEM_LEN: usize = 4 + 32;

/// Decoded base account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseAccount {
    pub total_gifs: u64,
    pub gif_list: Vec<GifItem>,
    pub user_address: Pubkey,
}

impl BaseAccount {
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(data);

        let disc = reader.take(DISCRIMINATOR_LEN)?;
        if disc != account_discriminator(BASE_ACCOUNT_TYPE) {
            return Err(SolanaError::AccountDecode(format!(
                "discriminator {:?} is not a {}",
                disc, BASE_ACCOUNT_TYPE
            )));
        }

        let total_gifs = reader.u64()?;
        let count = reader.u32()? as usize;
        if count > reader.remaining() / MIN_ITEM_LEN {
            return Err(SolanaError::AccountDecode(format!(
                "gif_list claims {} items but only {} bytes remain",
                count,
                reader.remaining()
            )));
        }

        let mut gif_list = Vec::with_capacity(count);
        for _ in 0..count {
            let gif_link = reader.string()?;
            let user_address = reader.pubkey()?;
            gif_list.push(GifItem::new(gif_link, user_address.to_string()));
        }
        let user_address = reader.pubkey()?;

        Ok(Self {
            total_gifs,
            gif_list,
            user_address,
        })
    }

    /// Borsh encoding with discriminator, no padding.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(8 + 8 + 4 + self.gif_list.len() * 64 + 32);
        data.extend_from_slice(&account_discriminator(BASE_ACCOUNT_TYPE));
        data.extend_from_slice(&self.total_gifs.to_le_bytes());
        data.extend_from_slice(&(self.gif_list.len() as u32).to_le_bytes());
        for item in &self.gif_list {
            data.extend_from_slice(&(item.gif_link.len() as u32).to_le_bytes());
            data.extend_from_slice(item.gif_link.as_bytes());
            let user = crate::program::instruction::parse_pubkey(&item.user_address)?;
            data.extend_from_slice(&user.to_bytes());
        }
        data.extend_from_slice(&self.user_address.to_bytes());
        Ok(data)
    }
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(SolanaError::AccountDecode(format!(
                "truncated data: need {} bytes at offset {}, have {}",
                len,
                self.pos,
                self.remaining()
            )));
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(buf))
    }

    fn u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(buf))
    }

    fn string(&mut self) -> Result<String> {
        let len = self.u32()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| SolanaError::AccountDecode(format!("gif_link is not utf-8: {}", e)))
    }

    fn pubkey(&mut self) -> Result<Pubkey> {
        let mut buf = [0u8; 32];
        buf.copy_from_slice(self.take(32)?);
        Ok(Pubkey::new_from_array(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

    fn sample() -> BaseAccount {
        BaseAccount {
            total_gifs: 2,
            gif_list: vec![
                GifItem::new("https://media.giphy.com/a.gif", USER),
                GifItem::new("http://x/y.gif", USER),
            ],
            user_address: Pubkey::default(),
        }
    }

    #[test]
    fn test_decode_padded_account() {
        let mut data = sample().encode().unwrap();
        data.resize(9000, 0);

        let account = BaseAccount::decode(&data).unwrap();
        assert_eq!(account, sample());
        assert_eq!(account.gif_list[1].gif_link, "http://x/y.gif");
        assert_eq!(account.gif_list[1].user_address, USER);
    }

    #[test]
    fn test_decode_freshly_initialized() {
        let mut data = account_discriminator(BASE_ACCOUNT_TYPE).to_vec();
        data.resize(9000, 0);

        let account = BaseAccount::decode(&data).unwrap();
        assert_eq!(account.total_gifs, 0);
        assert!(account.gif_list.is_empty());
    }

    #[test]
    fn test_rejects_wrong_discriminator() {
        let mut data = sample().encode().unwrap();
        data[0] ^= 1;
        assert!(matches!(
            BaseAccount::decode(&data),
            Err(SolanaError::AccountDecode(_))
        ));
    }

    #[test]
    fn test_rejects_truncated_data() {
        let data = sample().encode().unwrap();
        for cut in [4, 12, 30, data.len() - 1] {
            assert!(
                BaseAccount::decode(&data[..cut]).is_err(),
                "decoding {} bytes should fail",
                cut
            );
        }
    }

    #[test]
    fn test_rejects_oversized_item_count() {
        let mut data = account_discriminator(BASE_ACCOUNT_TYPE).to_vec();
        data.extend_from_slice(&0u64.to_le_bytes());
        data.extend_from_slice(&u32::MAX.to_le_bytes());
        data.resize(200, 0);
        assert!(BaseAccount::decode(&data).is_err());
    }
}
