use serde::{Deserialize, Serialize};

use crate::utils::serde_helpers::{as_hex, from_hex};

/// Result of a transaction as recorded by the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxResult {
    #[serde(serialize_with = "as_hex", deserialize_with = "from_hex")]
    pub data: Vec<u8>,
    pub log: String,
    pub gas_used: u64,
}
