use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::config::WasmConfig;
use crate::ledger::{BaseAccount, BlockHeader};
use crate::runtime::{build_context, ledger_result, WasmResult};
use crate::types::{parse_coins, Address, CodeInfo};
use crate::utils::init_logging;

/// Inspect values crossing the ledger/contract-runtime boundary.
#[derive(Parser, Debug)]
#[clap(name = "pecunovus-wasm", version)]
pub struct Cli {
    /// Path to a TOML config file
    #[clap(long)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print the execution context a contract call would receive
    Context {
        #[clap(long)]
        height: u64,

        /// block time, RFC 3339
        #[clap(long)]
        time: String,

        /// defaults to the configured chain id
        #[clap(long)]
        chain_id: Option<String>,

        /// signer address (hex)
        #[clap(long)]
        signer: String,

        /// comma separated coins, e.g. 100utoken,5uatom
        #[clap(long, default_value = "")]
        funds: String,

        /// contract address (hex)
        #[clap(long)]
        contract: String,

        /// contract balance, comma separated coins
        #[clap(long, default_value = "")]
        balance: String,
    },
    /// Print the ledger result for a runtime result
    Result {
        /// payload (hex)
        #[clap(long, default_value = "")]
        data: String,

        #[clap(long, default_value = "")]
        log: String,

        #[clap(long)]
        gas_used: u64,
    },
    /// Hash a wasm file into a CodeInfo record
    CodeInfo {
        #[clap(long)]
        wasm: PathBuf,

        /// creator address (hex)
        #[clap(long)]
        creator: String,
    },
}

pub fn run_cli() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let out = execute(cli)?;
    println!("{}", out);
    Ok(())
}

/// Run one command and return its JSON output.
pub fn execute(cli: Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => WasmConfig::load(path)?,
        None => WasmConfig::default(),
    };

    match cli.cmd {
        Cmd::Context { height, time, chain_id, signer, funds, contract, balance } => {
            let time: DateTime<Utc> = DateTime::parse_from_rfc3339(&time)
                .with_context(|| format!("invalid block time {:?}", time))?
                .with_timezone(&Utc);
            let block = BlockHeader::new(height, time, chain_id.unwrap_or(config.chain_id));
            let signer: Address = signer.parse()?;
            let funds = parse_coins(&funds)?;
            let contract = BaseAccount::new(contract.parse()?, parse_coins(&balance)?);

            let ctx = build_context(&block, &signer, &funds, &contract);
            Ok(serde_json::to_string_pretty(&ctx)?)
        }
        Cmd::Result { data, log, gas_used } => {
            let data = hex::decode(&data).context("invalid hex payload")?;
            let res = ledger_result(WasmResult { data, log, gas_used });
            Ok(serde_json::to_string_pretty(&res)?)
        }
        Cmd::CodeInfo { wasm, creator } => {
            let bytecode = std::fs::read(&wasm).with_context(|| format!("reading {}", wasm.display()))?;
            if bytecode.len() > config.max_wasm_size {
                bail!(
                    "{} is {} bytes, limit is {}",
                    wasm.display(),
                    bytecode.len(),
                    config.max_wasm_size
                );
            }
            let info = CodeInfo::from_bytecode(&bytecode, creator.parse()?);
            info!(code_hash = %hex::encode(&info.code_hash), "hashed wasm code");
            Ok(serde_json::to_string_pretty(&info)?)
        }
    }
}
