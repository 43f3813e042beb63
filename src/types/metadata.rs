//! Stored metadata for uploaded code and instantiated contracts.
//!
//! Plain schema. Existence of the referenced code and non-empty hashes are
//! checked by the persistence layer, not here.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::Address;
use crate::utils::serde_helpers::{as_hex, from_hex};
use crate::utils::Result;

/// Uploaded contract code, identified by its hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeInfo {
    #[serde(serialize_with = "as_hex", deserialize_with = "from_hex")]
    pub code_hash: Vec<u8>,
    pub creator: Address,
}

impl CodeInfo {
    pub fn new(code_hash: Vec<u8>, creator: Address) -> Self {
        Self { code_hash, creator }
    }

    /// Build the record for `bytecode`, hashing it with SHA-256.
    pub fn from_bytecode(bytecode: &[u8], creator: Address) -> Self {
        Self::new(code_hash(bytecode), creator)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// An instantiated contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    pub code_id: u64,
    pub creator: Address,
    /// Instantiation message, opaque to the ledger.
    pub init_msg: String,
}

impl Contract {
    pub fn new(code_id: u64, creator: Address, init_msg: impl Into<String>) -> Self {
        Self { code_id, creator, init_msg: init_msg.into() }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// SHA-256 of contract bytecode.
pub fn code_hash(bytecode: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(bytecode);
    hasher.finalize().to_vec()
}
