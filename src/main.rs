use anyhow::Result;
use clap::Parser;
use weather_lookup::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weather_lookup::run(cli).await
}
