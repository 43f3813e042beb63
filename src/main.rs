fn main() -> anyhow::Result<()> {
    pecunovus_wasm::run_cli()
}
