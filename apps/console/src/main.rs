use std::sync::Arc;

use clap::{Parser, Subcommand};
use client::{DiskSaver, EmployeeManagerClient};
use platform_obs::ObsConfig;

mod config;
mod page;
mod text;
mod ui;

use config::{FetchOpts, ShowOpts};

#[derive(Parser, Debug)]
#[command(
    name = "employee-console",
    version,
    about = "Terminal client for the Employee Manager details page"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive details screen for one employee
    Show(ShowOpts),
    /// Print the details page once and exit
    Render(FetchOpts),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show(opts) => show(opts).await?,
        Commands::Render(opts) => render(opts).await?,
    }

    Ok(())
}

async fn show(opts: ShowOpts) -> anyhow::Result<()> {
    // The screen owns the terminal, so diagnostics go to a file.
    let _guard = platform_obs::init_tracing(ObsConfig {
        log_dir: Some(opts.log_dir.clone()),
        ..ObsConfig::default()
    })?;

    let client = EmployeeManagerClient::new(&opts.fetch.base_url)?;
    let saver = Arc::new(DiskSaver::new(&opts.download_dir));
    page::run(client, saver, &opts.fetch.employee_id).await
}

async fn render(opts: FetchOpts) -> anyhow::Result<()> {
    let _guard = platform_obs::init_tracing(ObsConfig::default())?;

    let client = EmployeeManagerClient::new(&opts.base_url)?;
    text::run(&client, &opts.employee_id).await
}
