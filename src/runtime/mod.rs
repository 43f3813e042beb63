//! Runtime module: what crosses into and out of the contract runtime.
//!
//! Exposes:
//! - runtime_types: ExecutionContext and WasmResult, the runtime's wire shapes.
//! - context: builds an ExecutionContext from ledger state.
//! - result: turns a WasmResult into the ledger's TxResult.

pub mod runtime_types;
pub mod context;
pub mod result;

pub use runtime_types::{BlockInfo, MessageInfo, ContractInfo, ExecutionContext, WasmResult};
pub use context::build_context;
pub use result::ledger_result;
