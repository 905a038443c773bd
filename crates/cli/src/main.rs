//! ScamGuard command line entry point.
//!
//! Thin composition layer: loads configuration, builds the API client and
//! drives the core services the way the web pages do.

use std::sync::Arc;

use anyhow::{Context, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scamguard_client::ApiClient;
use scamguard_client::models::{Credentials, UserRole, UserStatus};
use scamguard_common::Config;
use scamguard_core::{
    DashboardService, ReportBoard, ReportFilter, ReportScope, UserDirectory, UserFilter,
    priority_tone, selection, status_label, truncate_description,
};

#[derive(Parser)]
#[command(name = "scamguard")]
#[command(about = "Community scam reporting client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and print the issued access token
    Login {
        email: String,

        /// Password; prefer the environment variable over the flag
        #[arg(long, env = "SCAMGUARD_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// List reports, optionally filtered
    Reports {
        /// Free-text search over title and description
        #[arg(short, long, default_value = "")]
        query: String,

        /// Scam type, or "all"
        #[arg(long = "type", default_value = "all")]
        scam_type: String,

        /// Workflow status, or "all"
        #[arg(long, default_value = "all")]
        status: String,

        /// Show only your own reports
        #[arg(long)]
        mine: bool,
    },

    /// Show the dashboard overview
    Dashboard,

    /// List user accounts (admin scope)
    Users {
        /// Free-text search over name and email
        #[arg(short, long, default_value = "")]
        query: String,

        /// Role, or "all"
        #[arg(long, default_value = "all")]
        role: String,

        /// Status, or "all"
        #[arg(long, default_value = "all")]
        status: String,
    },

    /// Probe backend health
    Health,
}

fn parse_role(value: &str) -> anyhow::Result<Option<UserRole>> {
    Ok(match value {
        "all" => None,
        "user" => Some(UserRole::User),
        "moderator" => Some(UserRole::Moderator),
        "admin" => Some(UserRole::Admin),
        other => bail!("unknown role: {other}"),
    })
}

fn parse_user_status(value: &str) -> anyhow::Result<Option<UserStatus>> {
    Ok(match value {
        "all" => None,
        "active" => Some(UserStatus::Active),
        "inactive" => Some(UserStatus::Inactive),
        "suspended" => Some(UserStatus::Suspended),
        "pending" => Some(UserStatus::Pending),
        other => bail!("unknown status: {other}"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scamguard=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("failed to load configuration")?;
    let client = ApiClient::new(&config.api).context("failed to build API client")?;

    match cli.command {
        Commands::Login { email, password } => {
            let payload = client.login(&Credentials { email, password }).await?;
            if let Some(user) = payload.user {
                info!(user_id = %user.id, "logged in");
            }
            println!("{}", payload.tokens.access.token);
        }
        Commands::Reports {
            query,
            scam_type,
            status,
            mine,
        } => {
            let scope = if mine {
                ReportScope::Mine
            } else {
                ReportScope::All
            };
            let mut board = ReportBoard::new(Arc::new(client), scope);
            board.filter = ReportFilter {
                query,
                scam_type: selection(&scam_type),
                status: selection(&status),
            };
            board.load().await;

            let visible = board.visible();
            if visible.is_empty() {
                println!("No reports found matching your criteria.");
                return Ok(());
            }
            for report in visible {
                println!(
                    "[{}] {} ({}) {}",
                    status_label(&report.status),
                    report.title,
                    report.scam_type.as_deref().unwrap_or("other"),
                    report.created_at.format("%-m/%-d/%Y"),
                );
                println!("    {}", truncate_description(&report.description));
            }
        }
        Commands::Dashboard => {
            let service = DashboardService::new(Arc::new(client));
            let overview = service.load_overview().await;

            let stats = &overview.stats;
            println!("Total reports:  {}", stats.total);
            println!("Resolved cases: {}", stats.resolved);
            println!("Success rate:   {:.1}%", stats.success_rate);
            println!("Active users:   {}", stats.active_users);

            println!("\nRecent reports:");
            for highlight in &overview.recent {
                println!(
                    "  {} - {} ({:?} tone, {})",
                    highlight.title,
                    highlight.priority.label(),
                    priority_tone(highlight.priority),
                    highlight.reported,
                );
            }

            println!("\nScam type distribution:");
            for bucket in &overview.distribution {
                println!(
                    "  {:<20} {:>4}  {:>3}%",
                    bucket.scam_type, bucket.count, bucket.percentage
                );
            }
        }
        Commands::Users {
            query,
            role,
            status,
        } => {
            let filter = UserFilter {
                query,
                role: parse_role(&role)?,
                status: parse_user_status(&status)?,
            };
            let mut directory = UserDirectory::new(Arc::new(client));
            directory.load().await;

            let visible = directory.filtered(&filter);
            if visible.is_empty() {
                println!("No users found matching your criteria.");
                return Ok(());
            }
            let now = Utc::now();
            for user in visible {
                println!(
                    "{:<24} {:<28} {:<10} {:<10} joined {}",
                    user.name,
                    user.email,
                    user.role.as_str(),
                    user.status.as_str(),
                    scamguard_core::time_ago(user.created_at, now),
                );
            }
        }
        Commands::Health => {
            let health = client.health().await?;
            println!("{}", health.status);
        }
    }

    Ok(())
}
