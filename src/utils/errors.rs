use thiserror::Error;

/// Errors raised while decoding values that cross the ledger/runtime boundary.
///
/// The translators themselves are total; only parsing, decoding and config
/// loading can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WasmError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid denom: {0}")]
    InvalidDenom(String),

    #[error("Invalid coin: {0}")]
    InvalidCoin(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<bincode::Error> for WasmError {
    fn from(e: bincode::Error) -> Self {
        WasmError::Encoding(e.to_string())
    }
}

impl From<serde_json::Error> for WasmError {
    fn from(e: serde_json::Error) -> Self {
        WasmError::Encoding(e.to_string())
    }
}

/// Convenience alias
pub type Result<T> = std::result::Result<T, WasmError>;
