//! Execution context builder.
//!
//! Pure assembly: callers have already checked that the signer and contract
//! exist. Whatever state is passed in is carried into the context as is.

use tracing::debug;

use crate::ledger::{BlockHeader, LedgerAccount};
use crate::runtime::runtime_types::{BlockInfo, ContractInfo, ExecutionContext, MessageInfo};
use crate::types::{to_wasm_coins, Address, Coin};

/// Build the context for a call from `signer` sending `sent_funds` to `contract`.
///
/// Block time is truncated to whole seconds so every validator hands the
/// runtime the same value.
pub fn build_context<A>(
    block: &BlockHeader,
    signer: &Address,
    sent_funds: &[Coin],
    contract: &A,
) -> ExecutionContext
where
    A: LedgerAccount + ?Sized,
{
    let ctx = ExecutionContext {
        block: BlockInfo {
            height: block.height,
            time: block.unix_seconds(),
            chain_id: block.chain_id.clone(),
        },
        message: MessageInfo {
            signer: signer.to_string(),
            sent_funds: to_wasm_coins(sent_funds),
        },
        contract: ContractInfo {
            address: contract.address().to_string(),
            balance: to_wasm_coins(contract.coins()),
        },
    };
    debug!(
        height = ctx.block.height,
        chain_id = %ctx.block.chain_id,
        contract = %ctx.contract.address,
        funds = ctx.message.sent_funds.len(),
        "built execution context"
    );
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::BaseAccount;
    use crate::types::WasmCoin;
    use chrono::{TimeZone, Utc};

    fn header(secs: i64, nanos: u32) -> BlockHeader {
        BlockHeader::new(12345, Utc.timestamp_opt(secs, nanos).unwrap(), "test-chain")
    }

    #[test]
    fn fields_land_in_their_sections() {
        let signer = Address::new(b"addr1".to_vec());
        let contract = BaseAccount::new(Address::new(b"addr2".to_vec()), vec![Coin::new("utoken", 5000u32)]);
        let ctx = build_context(&header(1_700_000_000, 0), &signer, &[Coin::new("utoken", 1000u32)], &contract);

        assert_eq!(ctx.block, BlockInfo { height: 12345, time: 1_700_000_000, chain_id: "test-chain".into() });
        assert_eq!(ctx.message.signer, "6164647231");
        assert_eq!(ctx.message.sent_funds, vec![WasmCoin::new("utoken", "1000")]);
        assert_eq!(ctx.contract.address, "6164647232");
        assert_eq!(ctx.contract.balance, vec![WasmCoin::new("utoken", "5000")]);
    }

    #[test]
    fn sub_second_time_is_truncated_not_rounded() {
        let contract = BaseAccount::default();
        let ctx = build_context(&header(1_700_000_000, 999_000_000), &Address::default(), &[], &contract);
        assert_eq!(ctx.block.time, 1_700_000_000);
    }

    #[test]
    fn no_funds_and_empty_balance_are_empty_lists() {
        let contract = BaseAccount::new(Address::new(vec![1]), Vec::new());
        let ctx = build_context(&header(0, 0), &Address::new(vec![2]), &[], &contract);
        assert!(ctx.message.sent_funds.is_empty());
        assert!(ctx.contract.balance.is_empty());

        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["message"]["sent_funds"], serde_json::json!([]));
        assert_eq!(json["contract"]["balance"], serde_json::json!([]));
    }

    #[test]
    fn accepts_trait_objects() {
        let contract: Box<dyn LedgerAccount> = Box::new(BaseAccount::new(Address::new(vec![9]), Vec::new()));
        let ctx = build_context(&header(5, 0), &Address::new(vec![8]), &[], contract.as_ref());
        assert_eq!(ctx.contract.address, "09");
    }
}
