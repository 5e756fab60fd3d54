//! # GIF Program
//!
//! Codec for the deployed `myepicproject` Anchor program: instruction
//! encoding driven by the IDL, `BaseAccount` decoding and transaction assembly.

pub mod account;
pub mod discriminator;
pub mod instruction;
pub mod transaction_builder;

use lib_core::Invocation;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

use crate::error::Result;
use crate::idl::Idl;

pub use account::BaseAccount;
pub use instruction::{InstructionAccounts, SYSTEM_PROGRAM_ID};

/// The program as described by its IDL.
#[derive(Debug, Clone)]
pub struct GifProgram {
    program_id: Pubkey,
    idl: Idl,
}

impl GifProgram {
    pub fn new(idl: Idl) -> Result<Self> {
        let program_id = idl.program_id()?;
        for name in ["startStuffOff", "addGif"] {
            idl.instruction(name)?;
        }
        idl.account(account::BASE_ACCOUNT_TYPE)?;
        Ok(Self { program_id, idl })
    }

    pub fn from_idl_json(json: &str) -> Result<Self> {
        Self::new(Idl::from_json(json)?)
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    /// Instruction for one invocation.
    pub fn instruction(&self, invocation: &Invocation) -> Result<Instruction> {
        let accounts = InstructionAccounts::parse(&invocation.base_account, &invocation.user)?;
        let ix = self.idl.instruction(invocation.method.name())?;
        instruction::build_instruction(self.program_id, ix, &invocation.method, &accounts)
    }

    pub fn decode_base_account(&self, data: &[u8]) -> Result<BaseAccount> {
        BaseAccount::decode(data)
    }
}
