//! Ledger account address.
//!
//! Raw bytes on the ledger side; the canonical string rendering (lowercase
//! hex, as account keys are rendered everywhere else on the node) is what
//! crosses into the runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::{Result, WasmError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(Vec<u8>);

impl Address {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl FromStr for Address {
    type Err = WasmError;

    fn from_str(s: &str) -> Result<Self> {
        hex::decode(s)
            .map(Address)
            .map_err(|e| WasmError::InvalidAddress(format!("{}: {}", s, e)))
    }
}

impl From<Vec<u8>> for Address {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Address {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        crate::utils::serde_helpers::as_hex(&self.0, s)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        crate::utils::serde_helpers::from_hex(d).map(Address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_lowercase_hex() {
        let addr = Address::new(vec![0xAB, 0x01, 0xff]);
        assert_eq!(addr.to_string(), "ab01ff");
    }

    #[test]
    fn parse_round_trip() {
        let addr: Address = "ab01ff".parse().unwrap();
        assert_eq!(addr.as_bytes(), &[0xab, 0x01, 0xff]);
        assert_eq!(addr.to_string().parse::<Address>().unwrap(), addr);
    }

    #[test]
    fn parse_rejects_non_hex() {
        let err = "addr1".parse::<Address>().unwrap_err();
        assert!(matches!(err, WasmError::InvalidAddress(_)));
    }

    #[test]
    fn serde_uses_string_form() {
        let addr = Address::new(b"addr1".to_vec());
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"6164647231\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
