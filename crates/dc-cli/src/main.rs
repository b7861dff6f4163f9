//! DisposableCheck CLI

use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use dc_client::{ApiClient, ClientConfig};
use dc_seo::{sitemap, CANONICAL_ROUTES, SITE_ORIGIN};

#[derive(Parser)]
#[command(name = "dc")]
#[command(about = "DisposableCheck site tooling and API helper")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the sitemap artifact from the canonical route list
    Sitemap {
        /// Output file
        #[arg(short, long, default_value = "crates/dc-site/assets/sitemap.xml")]
        output: PathBuf,

        /// Site origin to resolve routes against
        #[arg(long, default_value = SITE_ORIGIN)]
        origin: String,
    },

    /// Check a single email address
    Check {
        /// Email address to check
        email: String,

        /// Ask the API for an MX/SMTP reachability probe
        #[arg(long)]
        reachable: bool,
    },

    /// Show aggregate usage statistics
    Stats,

    /// Report a candidate disposable domain
    Report {
        /// Domain to report
        domain: String,

        /// Why the domain is disposable
        #[arg(short, long)]
        reason: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    match cli.command {
        Commands::Sitemap { output, origin } => cmd_sitemap(output, origin),
        Commands::Check { email, reachable } => cmd_check(email, reachable).await,
        Commands::Stats => cmd_stats().await,
        Commands::Report { domain, reason } => cmd_report(domain, reason).await,
    }
}

fn cmd_sitemap(output: PathBuf, origin: String) {
    let xml = sitemap::render_sitemap(&origin, &CANONICAL_ROUTES, Utc::now().date_naive());

    if let Some(parent) = output.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            error!("Failed to create {}: {}", parent.display(), e);
            std::process::exit(1);
        }
    }

    match std::fs::write(&output, xml) {
        Ok(()) => info!(
            "Wrote sitemap with {} routes to {}",
            CANONICAL_ROUTES.len(),
            output.display()
        ),
        Err(e) => {
            error!("Failed to write {}: {}", output.display(), e);
            std::process::exit(1);
        }
    }
}

fn client_or_exit() -> ApiClient {
    match ApiClient::new(ClientConfig::default()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build API client: {}", e);
            std::process::exit(1);
        }
    }
}

async fn cmd_check(email: String, reachable: bool) {
    let client = client_or_exit();
    match client.check(&email, reachable).await {
        Ok(result) => {
            info!(
                "{}: domain={} disposable={} valid_format={}",
                result.email, result.domain, result.is_disposable, result.is_valid_format
            );
            if let Some(reacher) = result.reacher {
                info!("reachability: {}", reacher);
            }
        }
        Err(e) => {
            error!("Check failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn cmd_stats() {
    let client = client_or_exit();
    match client.stats().await {
        Ok(stats) => {
            info!("Emails checked:     {}", stats.total_emails_checked);
            info!("Disposable domains: {}", stats.total_disposable_domains);
            info!("Community reports:  {}", stats.community_reports);
        }
        Err(e) => {
            error!("Stats failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn cmd_report(domain: String, reason: Option<String>) {
    let client = client_or_exit();
    match client.report(&domain, reason.as_deref()).await {
        Ok(ack) => info!(
            "{}",
            ack.message
                .unwrap_or_else(|| "Report submitted for review".to_string())
        ),
        Err(e) => {
            error!("Report failed: {}", e);
            std::process::exit(1);
        }
    }
}
