use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::utils::{Result, WasmError};

pub const DEFAULT_CHAIN_ID: &str = "pecunovus-devnet";
pub const DEFAULT_MAX_WASM_SIZE: usize = 800 * 1024;

/// Tooling configuration for the boundary CLI.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WasmConfig {
    /// Chain id used when a command does not pass one.
    pub chain_id: String,
    /// Largest bytecode, in bytes, accepted for hashing into a CodeInfo.
    pub max_wasm_size: usize,
}

impl Default for WasmConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            max_wasm_size: DEFAULT_MAX_WASM_SIZE,
        }
    }
}

impl WasmConfig {
    /// Load config from a TOML file. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .map_err(|e| WasmError::Config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&data).map_err(|e| WasmError::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "chain_id = \"test-chain\"").unwrap();
        let cfg = WasmConfig::load(file.path()).unwrap();
        assert_eq!(cfg.chain_id, "test-chain");
        assert_eq!(cfg.max_wasm_size, DEFAULT_MAX_WASM_SIZE);
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WasmConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, WasmError::Config(_)));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_wasm_sz = 10").unwrap();
        assert!(matches!(WasmConfig::load(file.path()), Err(WasmError::Config(_))));
    }
}
