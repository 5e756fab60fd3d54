//! # IDL Handler
//!
//! Parses the Anchor IDL bundled with the front end. The IDL is the source of
//! truth for the program id and for each instruction's account list
//! (order, writability, signer flags) and argument types.
//!
//! Only the legacy Anchor layout is understood (`isMut` / `isSigner` account
//! flags, program address under `metadata.address`).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use tracing::info;

use crate::error::{Result, SolanaError};

/// IDL metadata structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlMetadata {
    pub address: String,
}

/// One account slot of an instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdlAccountItem {
    pub name: String,
    pub is_mut: bool,
    pub is_signer: bool,
}

/// Named, typed field (instruction argument or struct field).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: serde_json::Value,
}

impl IdlField {
    /// Primitive type name (`"string"`, `"u64"`, `"publicKey"`), if the field is one.
    pub fn primitive(&self) -> Option<&str> {
        self.ty.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    pub accounts: Vec<IdlAccountItem>,
    #[serde(default)]
    pub args: Vec<IdlField>,
}

/// Account or user type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlTypeDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: serde_json::Value,
}

/// IDL structure for Anchor programs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idl {
    pub version: String,
    pub name: String,
    pub instructions: Vec<IdlInstruction>,
    #[serde(default)]
    pub accounts: Vec<IdlTypeDef>,
    #[serde(default)]
    pub types: Vec<IdlTypeDef>,
    #[serde(default)]
    pub events: Vec<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
    pub metadata: IdlMetadata,
}

impl Idl {
    /// Parse and validate an IDL document.
    pub fn from_json(json: &str) -> Result<Self> {
        let idl: Idl = serde_json::from_str(json)
            .map_err(|e| SolanaError::IdlParse(format!("Failed to parse IDL JSON: {}", e)))?;

        let program_id = idl.program_id()?;
        info!(
            "IDL loaded: {} v{} ({} instructions, program {})",
            idl.name,
            idl.version,
            idl.instructions.len(),
            program_id
        );
        Ok(idl)
    }

    /// Program address recorded in the IDL metadata.
    pub fn program_id(&self) -> Result<Pubkey> {
        Pubkey::from_str(&self.metadata.address).map_err(|e| {
            SolanaError::IdlFormat(format!(
                "metadata.address '{}' is not a valid program id: {}",
                self.metadata.address, e
            ))
        })
    }

    pub fn instruction(&self, name: &str) -> Result<&IdlInstruction> {
        self.instructions
            .iter()
            .find(|ix| ix.name == name)
            .ok_or_else(|| {
                SolanaError::IdlFormat(format!("instruction '{}' not found in {}", name, self.name))
            })
    }

    pub fn account(&self, name: &str) -> Result<&IdlTypeDef> {
        self.accounts
            .iter()
            .find(|acc| acc.name == name)
            .ok_or_else(|| {
                SolanaError::IdlFormat(format!("account '{}' not found in {}", name, self.name))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::BUNDLED_IDL;

    #[test]
    fn test_bundled_idl_parses() {
        let idl = Idl::from_json(BUNDLED_IDL).unwrap();
        assert_eq!(idl.name, "myepicproject");
        assert_eq!(
            idl.program_id().unwrap().to_string(),
            "Bmn5Pp6urCR5S9kZc9QBthdCiHUb6tvVsaTt85874Znk"
        );
        assert!(idl.account("BaseAccount").is_ok());
    }

    #[test]
    fn test_instruction_accounts_follow_declaration_order() {
        let idl = Idl::from_json(BUNDLED_IDL).unwrap();

        let start = idl.instruction("startStuffOff").unwrap();
        let names: Vec<_> = start.accounts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["baseAccount", "user", "systemProgram"]);
        assert!(start.accounts[0].is_signer && start.accounts[0].is_mut);
        assert!(!start.accounts[2].is_mut);

        let add = idl.instruction("addGif").unwrap();
        assert!(!add.accounts[0].is_signer);
        assert_eq!(add.args.len(), 1);
        assert_eq!(add.args[0].primitive(), Some("string"));
    }

    #[test]
    fn test_unknown_instruction() {
        let idl = Idl::from_json(BUNDLED_IDL).unwrap();
        assert!(matches!(
            idl.instruction("removeGif"),
            Err(SolanaError::IdlFormat(_))
        ));
    }

    #[test]
    fn test_rejects_bad_program_address() {
        let json = r#"{
            "version": "0.1.0",
            "name": "broken",
            "instructions": [],
            "metadata": { "address": "not-a-key" }
        }"#;
        assert!(matches!(
            Idl::from_json(json),
            Err(SolanaError::IdlFormat(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Idl::from_json("{ \"version\": "),
            Err(SolanaError::IdlParse(_))
        ));
    }
}
