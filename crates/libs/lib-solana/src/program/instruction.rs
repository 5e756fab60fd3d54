//! # Instruction Builder
//!
//! Builds program instructions from the IDL: account metas come from the
//! instruction's declared account list, data is
//! `[discriminator (8 bytes)] ‖ borsh(args)`.
//!
//! Only the argument types the GIF program uses are encoded (`string`,
//! `u64`, `publicKey`).

use std::str::FromStr;

use lib_core::ProgramMethod;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::error::{Result, SolanaError};
use crate::idl::{IdlAccountItem, IdlInstruction};
use crate::program::discriminator::instruction_discriminator;

/// System program: 11111111111111111111111111111111
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new_from_array([0u8; 32]);

/// Argument value supplied for one IDL arg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    String(String),
    U64(u64),
    PublicKey(Pubkey),
}

impl ArgValue {
    fn idl_type(&self) -> &'static str {
        match self {
            ArgValue::String(_) => "string",
            ArgValue::U64(_) => "u64",
            ArgValue::PublicKey(_) => "publicKey",
        }
    }

    fn encode_into(&self, data: &mut Vec<u8>) -> Result<()> {
        match self {
            ArgValue::String(s) => {
                let len = u32::try_from(s.len()).map_err(|_| {
                    SolanaError::Instruction(format!("string argument too long: {} bytes", s.len()))
                })?;
                data.extend_from_slice(&len.to_le_bytes());
                data.extend_from_slice(s.as_bytes());
            }
            ArgValue::U64(n) => data.extend_from_slice(&n.to_le_bytes()),
            ArgValue::PublicKey(key) => data.extend_from_slice(&key.to_bytes()),
        }
        Ok(())
    }
}

/// Arguments carried by a method, in IDL order.
pub fn method_args(method: &ProgramMethod) -> Vec<ArgValue> {
    match method {
        ProgramMethod::StartStuffOff => Vec::new(),
        ProgramMethod::AddGif { gif_link } => vec![ArgValue::String(gif_link.clone())],
    }
}

/// Encode instruction data, checking the values against the IDL args.
pub fn encode_instruction_data(ix: &IdlInstruction, args: &[ArgValue]) -> Result<Vec<u8>> {
    if ix.args.len() != args.len() {
        return Err(SolanaError::Instruction(format!(
            "{} takes {} argument(s), got {}",
            ix.name,
            ix.args.len(),
            args.len()
        )));
    }

    let mut data = Vec::with_capacity(8 + args.len() * 36);
    data.extend_from_slice(&instruction_discriminator(&ix.name));

    for (field, value) in ix.args.iter().zip(args) {
        let expected = field.primitive().unwrap_or("<complex>");
        if expected != value.idl_type() {
            return Err(SolanaError::Instruction(format!(
                "argument '{}' of {} is {}, got {}",
                field.name,
                ix.name,
                expected,
                value.idl_type()
            )));
        }
        value.encode_into(&mut data)?;
    }

    Ok(data)
}

/// Accounts an instruction runs against, keyed by IDL account name.
#[derive(Debug, Clone, Copy)]
pub struct InstructionAccounts {
    pub base_account: Pubkey,
    pub user: Pubkey,
}

impl InstructionAccounts {
    pub fn parse(base_account: &str, user: &str) -> Result<Self> {
        Ok(Self {
            base_account: parse_pubkey(base_account)?,
            user: parse_pubkey(user)?,
        })
    }

    fn resolve(&self, item: &IdlAccountItem) -> Result<Pubkey> {
        match item.name.as_str() {
            "baseAccount" => Ok(self.base_account),
            "user" => Ok(self.user),
            "systemProgram" => Ok(SYSTEM_PROGRAM_ID),
            other => Err(SolanaError::Instruction(format!(
                "no address known for account '{}'",
                other
            ))),
        }
    }
}

/// Account metas in IDL order.
pub fn account_metas(
    ix: &IdlInstruction,
    accounts: &InstructionAccounts,
) -> Result<Vec<AccountMeta>> {
    ix.accounts
        .iter()
        .map(|item| {
            let key = accounts.resolve(item)?;
            Ok(if item.is_mut {
                AccountMeta::new(key, item.is_signer)
            } else {
                AccountMeta::new_readonly(key, item.is_signer)
            })
        })
        .collect()
}

/// Build a complete instruction for `method`.
pub fn build_instruction(
    program_id: Pubkey,
    ix: &IdlInstruction,
    method: &ProgramMethod,
    accounts: &InstructionAccounts,
) -> Result<Instruction> {
    Ok(Instruction {
        program_id,
        accounts: account_metas(ix, accounts)?,
        data: encode_instruction_data(ix, &method_args(method))?,
    })
}

pub fn parse_pubkey(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address).map_err(|_| SolanaError::InvalidAddress(address.to_string()))
}
