//! Ledger-side inputs and outputs of a contract call.
//!
//! The ledger owns accounts, balances and blocks; this module only describes
//! the shape in which they reach the boundary.

pub mod account;
pub mod block;
pub mod result;

pub use account::{LedgerAccount, BaseAccount};
pub use block::BlockHeader;
pub use result::TxResult;
