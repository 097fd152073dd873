//! ecorep binary entry point

fn main() -> anyhow::Result<()> {
    ecorep_cli::run_cli()
}
