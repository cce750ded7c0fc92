//! Maitre - Restaurant table reservation queue, console front end

mod menu;

use anyhow::Result;
use clap::Parser;
use maitre_core::application::FrontDesk;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "maitre")]
#[command(about = "Restaurant table reservation system", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of tables managed by the front desk
    #[arg(long, env = "MAITRE_TABLES", default_value_t = 10)]
    tables: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the menu dialogue
    let log_format = std::env::var("MAITRE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("maitre_core=info,maitre_cli=info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    info!("Maitre v{} starting...", maitre_core::VERSION);

    let mut desk = FrontDesk::new(cli.tables)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run(&mut desk, stdin.lock(), stdout.lock())?;

    Ok(())
}
