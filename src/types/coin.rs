//! Coins on both sides of the boundary and the translation between them.
//!
//! Ledger coins carry an arbitrary-precision amount. Runtime coins carry the
//! same amount as a decimal string so no fixed-width integer sits in between.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::utils::serde_helpers::{as_decimal, from_decimal};
use crate::utils::{Result, WasmError};

/// Ordered list of ledger coins.
pub type Coins = Vec<Coin>;

/// Ledger coin: denomination plus arbitrary-precision amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde(serialize_with = "as_decimal", deserialize_with = "from_decimal")]
    pub amount: BigUint,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<BigUint>) -> Self {
        Self { denom: denom.into(), amount: amount.into() }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = WasmError;

    /// Parses `"<amount><denom>"`, e.g. `"1000utoken"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| WasmError::InvalidCoin(format!("missing denom in {:?}", s)))?;
        if split == 0 {
            return Err(WasmError::InvalidCoin(format!("missing amount in {:?}", s)));
        }
        let (amount, denom) = s.split_at(split);
        validate_denom(denom)?;
        Ok(Coin { denom: denom.to_string(), amount: parse_amount(amount)? })
    }
}

/// Runtime coin: the amount is a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WasmCoin {
    pub denom: String,
    pub amount: String,
}

impl WasmCoin {
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Self { denom: denom.into(), amount: amount.into() }
    }
}

impl From<&Coin> for WasmCoin {
    fn from(coin: &Coin) -> Self {
        WasmCoin { denom: coin.denom.clone(), amount: coin.amount.to_str_radix(10) }
    }
}

impl TryFrom<&WasmCoin> for Coin {
    type Error = WasmError;

    fn try_from(coin: &WasmCoin) -> Result<Self> {
        Ok(Coin { denom: coin.denom.clone(), amount: parse_amount(&coin.amount)? })
    }
}

/// Translate ledger coins into runtime coins, preserving order.
///
/// An empty input yields an empty vector.
pub fn to_wasm_coins(coins: &[Coin]) -> Vec<WasmCoin> {
    trace!(count = coins.len(), "translating ledger coins");
    coins.iter().map(WasmCoin::from).collect()
}

/// Translate runtime coins back into ledger coins, preserving order.
pub fn from_wasm_coins(coins: &[WasmCoin]) -> Result<Coins> {
    trace!(count = coins.len(), "translating runtime coins");
    coins.iter().map(Coin::try_from).collect()
}

/// Parse a comma separated coin list such as `"10utoken,3uatom"`.
pub fn parse_coins(s: &str) -> Result<Coins> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',').map(str::parse).collect()
}

/// Parse a non-negative decimal integer. Signs, exponents, separators and
/// fractions are rejected.
pub fn parse_amount(s: &str) -> Result<BigUint> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WasmError::InvalidAmount(s.to_string()));
    }
    BigUint::parse_bytes(s.as_bytes(), 10).ok_or_else(|| WasmError::InvalidAmount(s.to_string()))
}

// [a-zA-Z][a-zA-Z0-9/:._-]{2,127}
fn validate_denom(denom: &str) -> Result<()> {
    let mut chars = denom.chars();
    let first_ok = chars.next().map_or(false, |c| c.is_ascii_alphabetic());
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'));
    if !first_ok || !rest_ok || denom.len() < 3 || denom.len() > 128 {
        return Err(WasmError::InvalidDenom(denom.to_string()));
    }
    Ok(())
}
