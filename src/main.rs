use clap::Parser;
use stack_sync::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.run().map_err(anyhow::Error::new)
}
