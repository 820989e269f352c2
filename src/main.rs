use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use keym::app::App;
use keym::cli::Cli;
use keym::store::ConfigStore;

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = ConfigStore::new(&cli.config)?;
    let mut app = App::new(store)
        .await
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let output = app.run(&cli.command).await?;
    println!("{}", output.trim_end());
    Ok(())
}
