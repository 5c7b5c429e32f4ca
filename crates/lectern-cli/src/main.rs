//! CLI entry point - the composition root.
//!
//! Infrastructure is wired together only via bootstrap; command dispatch
//! routes to handlers.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lectern_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Logs go to stderr so they never interleave with chapter text.
///
/// `-v` flags win over `RUST_LOG`; without either only warnings are shown.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);
    let ctx = bootstrap(config)?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Chapters => handlers::chapters::execute(&ctx)?,
        Commands::Voices => handlers::voices::execute(&ctx)?,
        Commands::Read { chapter } => handlers::read::execute(&ctx, &chapter).await?,
        Commands::Interactive => handlers::interactive::execute(&ctx).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads API_KEY
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
