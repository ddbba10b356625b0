use anyhow::Result;
use clap::Parser;
use weather_accurate::{cli::Cli, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.validate()?;
    logging::init(cli.log_file.as_deref())?;
    weather_accurate::run(cli).await
}
