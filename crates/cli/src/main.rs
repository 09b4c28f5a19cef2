use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "planforge")]
#[command(about = "Business-plan dashboard API server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve {
        #[arg(short, long, default_value = "8787")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print summary statistics for a user.
    Stats { user_id: String },
    /// Print the plan list view for a user.
    Plans { user_id: String },
    /// Print the recent-activity feed for a user.
    Activities { user_id: String },
}

fn get_database_url() -> Result<String> {
    std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable must be set"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::Stats { user_id } => commands::query::stats(&user_id).await,
        Commands::Plans { user_id } => commands::query::plans(&user_id).await,
        Commands::Activities { user_id } => commands::query::activities(&user_id).await,
    }
}
