//! Data Nerd CLI
//!
//! Command-line view of the job-market dashboard:
//! - Stat cards, top skills and trends in one go
//! - Top skills with filters and sort order
//! - Monthly trends for python, sql and aws
//! - Market momentum (gainers and losers)
//! - Default config generation

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use data_nerd::analytics::DashboardSummary;
use data_nerd::client::{AnalyticsApi, HttpAnalyticsClient};
use data_nerd::config::{generate_default_config, Config};
use data_nerd::dashboard::DashboardController;
use data_nerd::logging::init_logging;
use data_nerd::query::{Filter, SkillsQuery, SortBy};
use data_nerd::report;

const DASHBOARD_BAR_WIDTH: usize = 30;
const SKILLS_BAR_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "data-nerd")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Job-market analytics for data roles")]
#[command(long_about = "Data Nerd shows which skills data roles ask for, what they pay,\nand how demand moves month to month.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Analytics API base URL (overrides config and DATA_NERD_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stat cards, top skills and trends
    Dashboard {
        /// Job title filter (e.g. "Data Analyst")
        #[arg(short, long)]
        job_title: Option<String>,
        /// Country filter (e.g. "India")
        #[arg(short = 'C', long)]
        country: Option<String>,
    },

    /// Top skills for a role and country
    Skills {
        /// Job title filter
        #[arg(short, long)]
        job_title: Option<String>,
        /// Country filter
        #[arg(short = 'C', long)]
        country: Option<String>,
        /// Sort by demand (count) or pay (salary)
        #[arg(short, long, default_value = "count")]
        sort_by: SortBy,
        /// Restrict to one skill type (e.g. "programming")
        #[arg(short = 't', long)]
        skill_type: Option<String>,
    },

    /// Monthly demand for python, sql and aws
    Trends,

    /// Month-over-month gainers and losers
    Momentum,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct DashboardOutput<'a> {
    summary: DashboardSummary,
    skills: &'a [data_nerd::SkillResult],
    trends: &'a [data_nerd::TrendPoint],
    momentum: &'a [data_nerd::MomentumEntry],
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let json = match cli.format.as_str() {
        "json" => true,
        "table" => false,
        other => bail!("Unknown output format: {} (expected table or json)", other),
    };

    let settings = Settings {
        config: cli.config,
        api_url: cli.api_url,
    };

    match cli.command {
        Commands::Dashboard { job_title, country } => {
            let (config, client) = connect(&settings)?;
            let filter = build_filter(job_title, country);
            let dashboard =
                DashboardController::with_filter(Arc::new(client), config.dashboard, filter);

            dashboard.load().await;
            dashboard.settle().await;
            let snapshot = dashboard.snapshot().await;

            if let Some(error) = &snapshot.last_error {
                if snapshot.is_empty() {
                    bail!("{}", error);
                }
                eprintln!("Warning: {}", error.user_message());
            }

            if json {
                let output = DashboardOutput {
                    summary: snapshot.summary(),
                    skills: &snapshot.skills,
                    trends: &snapshot.trends,
                    momentum: &snapshot.momentum,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", report::render_summary(&snapshot.summary()));
                println!();
                println!("Top Skills");
                print!(
                    "{}",
                    report::render_skill_bars(&snapshot.skills, SortBy::Count, DASHBOARD_BAR_WIDTH)
                );
                println!();
                println!("Market Trends");
                print!("{}", report::render_trend_table(&snapshot.trends));
            }

            dashboard.shutdown().await;
        }

        Commands::Skills {
            job_title,
            country,
            sort_by,
            skill_type,
        } => {
            let (_, client) = connect(&settings)?;
            let mut query = SkillsQuery::new(build_filter(job_title, country)).sort_by(sort_by);
            if let Some(skill_type) = skill_type {
                query = query.skill_type(skill_type);
            }

            let response = client.top_skills(&query).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!(
                    "Top skills ({} jobs analyzed, sorted by {})",
                    data_nerd::analytics::format_count(response.total_jobs),
                    sort_by
                );
                println!();
                print!(
                    "{}",
                    report::render_skill_bars(&response.results, sort_by, SKILLS_BAR_WIDTH)
                );
            }
        }

        Commands::Trends => {
            let (_, client) = connect(&settings)?;
            let trends = client.skill_trends().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&trends)?);
            } else {
                print!("{}", report::render_trend_table(&trends));
            }
        }

        Commands::Momentum => {
            let (_, client) = connect(&settings)?;
            let momentum = client.momentum().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&momentum)?);
            } else {
                print!("{}", report::render_momentum(&momentum));
            }
        }

        Commands::Config { output } => write_default_config(output.as_ref())?,
    }

    Ok(())
}

/// Global flags that shape the connection
struct Settings {
    config: Option<PathBuf>,
    api_url: Option<String>,
}

/// Load config, set up logging and build the HTTP client
fn connect(settings: &Settings) -> anyhow::Result<(Config, HttpAnalyticsClient)> {
    let mut config = Config::load_default(settings.config.as_deref())?;
    if let Some(url) = &settings.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);
    tracing::debug!(base_url = %config.api.base_url, "Using analytics API");

    let client = HttpAnalyticsClient::new(config.client_config())
        .with_context(|| format!("Invalid API URL: {}", config.api.base_url))?;

    Ok((config, client))
}

fn build_filter(job_title: Option<String>, country: Option<String>) -> Filter {
    Filter::default()
        .with_job_title(job_title.unwrap_or_default())
        .with_country(country.unwrap_or_default())
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {:?}", parent))?;
            }
            std::fs::write(path, &config).with_context(|| format!("Failed to write {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }

    Ok(())
}
