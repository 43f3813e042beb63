//! Types shared by the ledger and runtime sides of the boundary.
//!
//! - address: ledger account address and its canonical string form
//! - coin: ledger and runtime coins, translation between them
//! - metadata: Code Info and Contract Instance records

pub mod address;
pub mod coin;
pub mod metadata;

pub use address::Address;
pub use coin::{Coin, Coins, WasmCoin, to_wasm_coins, from_wasm_coins, parse_coins};
pub use metadata::{CodeInfo, Contract, code_hash};
