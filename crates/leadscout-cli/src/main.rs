use clap::{Parser, Subcommand};
use leadscout_pipeline::{run_company_search, run_people_search, PipelineDeps};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadscout")]
#[command(about = "Lead discovery from public developer and job-listing data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search and rank person leads by keyword and location.
    FindPeople {
        keyword: String,
        location: String,
        /// Cap on returned records; overrides the configured default.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search and rank hiring companies by job-listing keyword.
    FindCompanies { keyword: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = leadscout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = %config.env, "starting leadscout cli");

    let cli = Cli::parse();
    let mut deps = PipelineDeps::from_config(&config)?;

    match cli.command {
        Commands::FindPeople {
            keyword,
            location,
            limit,
        } => {
            if let Some(limit) = limit {
                deps.people_result_cap = limit;
            }
            let records = run_people_search(&deps, &keyword, &location).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Commands::FindCompanies { keyword } => {
            let records = run_company_search(&deps, &keyword).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}
