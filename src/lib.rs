//! Boundary between the Pecu Novus ledger and its WASM contract runtime.
//!
//! - types: addresses, coins in ledger and runtime form, code/contract metadata
//! - ledger: block header, account access, transaction result
//! - runtime: execution context builder and result translation
//!
//! Every translation here is a pure function over caller-owned values.

pub mod cli;
pub mod config;
pub mod ledger;
pub mod runtime;
pub mod types;
pub mod utils;

pub use cli::run_cli;
pub use config::WasmConfig;
pub use ledger::{BaseAccount, BlockHeader, LedgerAccount, TxResult};
pub use runtime::{build_context, ledger_result, ExecutionContext, WasmResult};
pub use types::{Address, CodeInfo, Coin, Coins, Contract, WasmCoin};
pub use utils::{Result, WasmError};
