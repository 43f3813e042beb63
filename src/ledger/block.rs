use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Header fields of the block a contract call executes in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub height: u64,
    pub time: DateTime<Utc>,
    pub chain_id: String,
}

impl BlockHeader {
    pub fn new(height: u64, time: DateTime<Utc>, chain_id: impl Into<String>) -> Self {
        Self { height, time, chain_id: chain_id.into() }
    }

    /// Block time in whole unix seconds. Sub-second precision is dropped.
    pub fn unix_seconds(&self) -> i64 {
        self.time.timestamp()
    }
}
