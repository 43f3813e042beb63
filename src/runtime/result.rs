use tracing::debug;

use crate::ledger::TxResult;
use crate::runtime::runtime_types::WasmResult;

/// Re-type a runtime result as a ledger result. Values pass through unchanged.
pub fn ledger_result(result: WasmResult) -> TxResult {
    debug!(gas_used = result.gas_used, data_len = result.data.len(), "translating runtime result");
    TxResult {
        data: result.data,
        log: result.log,
        gas_used: result.gas_used,
    }
}

impl From<WasmResult> for TxResult {
    fn from(result: WasmResult) -> Self {
        ledger_result(result)
    }
}
