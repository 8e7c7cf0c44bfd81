mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "trendscript-cli")]
#[command(about = "TrendScript command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List trending topics
    Trends {
        /// Filter by category (case-insensitive)
        #[arg(long)]
        category: Option<String>,
        /// Filter by platform (twitter, youtube, reddit, tiktok)
        #[arg(long)]
        platform: Option<String>,
        /// Only trends whose topic, hashtags or insights contain this text
        #[arg(long)]
        search: Option<String>,
        /// Maximum number of trends to show
        #[arg(long, default_value_t = trendscript_trends::DEFAULT_LIMIT)]
        limit: usize,
    },
    /// List content templates
    Templates,
    /// List tone options
    Tones,
    /// Generate a content script for a trend
    Generate {
        #[arg(long)]
        trend_id: String,
        #[arg(long, default_value = "youtube-explainer")]
        template: String,
        #[arg(long, default_value = "professional")]
        tone: String,
        /// Extra free-text instructions for the model
        #[arg(long)]
        prompt: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(
            std::env::var("TRENDSCRIPT_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
        )
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Commands::Trends {
            category,
            platform,
            search,
            limit,
        } => commands::list_trends(category, platform.as_deref(), search.as_deref(), limit).await?,
        Commands::Templates => commands::list_templates()?,
        Commands::Tones => commands::list_tones()?,
        Commands::Generate {
            trend_id,
            template,
            tone,
            prompt,
        } => {
            let config = trendscript_core::load_app_config()?;
            commands::generate(&config, trend_id, template, tone, prompt).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
