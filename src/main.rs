//! Roster Folders - server entry point.

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use roster_folders::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{print_banner, print_config_summary, print_error, print_warning},
    server, AppContext,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Io(_) => ExitCode::from(exit_codes::SERVER_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let addr = SocketAddr::new(config.server.host, config.server.port);

    // Print configuration summary
    print_config_summary(
        &addr.to_string(),
        &config.folders.subfolders,
        config.roster.name_column,
    );

    let ctx = Arc::new(AppContext::new(config));
    let routes = server::routes(ctx);

    info!(%addr, "starting server");
    warp::serve(routes).run(addr).await;

    Ok(())
}
