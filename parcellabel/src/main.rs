use parcellabel::{AppConfig, Cli, telemetry};
use std::process::ExitCode;

// A current-thread runtime keeps the process single-threaded, which the local
// time lookup for label file names depends on.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::import().unwrap_or_else(|err| err.exit());

    // Create config with proper layering of CLI args
    let config = AppConfig::load(&cli)?;

    // Everything the run logs goes to the console and to the log file.
    telemetry::init(&config.log_file);

    let report = parcellabel::run(&cli.order_number, &cli.username, config).await?;

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
