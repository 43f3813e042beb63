//! Common runtime types: the execution context handed to a contract call and
//! the raw result the runtime hands back.
//!
//! Field names are the JSON wire contract with the runtime.

use serde::{Deserialize, Serialize};

use crate::types::WasmCoin;
use crate::utils::serde_helpers::{as_hex, from_hex};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub height: u64,
    /// Unix seconds.
    pub time: i64,
    pub chain_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInfo {
    pub signer: String,
    pub sent_funds: Vec<WasmCoin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    pub address: String,
    pub balance: Vec<WasmCoin>,
}

/// Snapshot of block, caller and contract state for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionContext {
    pub block: BlockInfo,
    pub message: MessageInfo,
    pub contract: ContractInfo,
}

impl ExecutionContext {
    pub fn to_json(&self) -> crate::utils::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// What the runtime returns from an invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasmResult {
    #[serde(serialize_with = "as_hex", deserialize_with = "from_hex")]
    pub data: Vec<u8>,
    pub log: String,
    pub gas_used: u64,
}
