//! MCP Dashboard CLI
//!
//! Terminal front end for the dashboard read model: lists configured MCP
//! services, reports their health, triggers manual re-checks and fetches
//! supervisor logs through the control backend.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use mcp_dashboard::config::{load_config, DashboardConfig};
use mcp_dashboard::dashboard::Dashboard;
use mcp_dashboard::health::HealthStatus;
use mcp_dashboard::logs::LogClient;
use mcp_dashboard::observability::init_tracing;
use mcp_dashboard::registry::ServiceConfig;

#[derive(Parser)]
#[command(name = "mcp-dashboard")]
#[command(about = "Dashboard for MCP service health and logs", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the control backend base URL.
    #[arg(short, long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the configured services
    Services,
    /// Check every enabled service once and report health
    Status,
    /// Re-check a single service and report its settled health
    Recheck {
        /// Service name as listed by `services`
        name: String,
    },
    /// Fetch supervisor container logs
    Logs {
        /// Number of trailing lines to fetch
        #[arg(long)]
        tail: Option<u32>,
        /// UNIX timestamp or relative time (e.g., "10m", "1h")
        #[arg(long)]
        since: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => DashboardConfig::default(),
    };
    if let Some(url) = cli.url {
        config.backend.base_url = url;
    }

    init_tracing(&config.observability);

    match cli.command {
        Commands::Services => {
            let dashboard = match connect(&config).await {
                Ok(dashboard) => dashboard,
                Err(code) => return code,
            };
            print_services(dashboard.services());
        }
        Commands::Status => {
            let dashboard = match connect(&config).await {
                Ok(dashboard) => dashboard,
                Err(code) => return code,
            };
            let statuses = dashboard.settle().await;
            print_statuses(&statuses);
        }
        Commands::Recheck { name } => {
            let dashboard = match connect(&config).await {
                Ok(dashboard) => dashboard,
                Err(code) => return code,
            };
            match dashboard.monitor(&name) {
                Some(monitor) if dashboard.recheck(&name) => {
                    let status = monitor.settled_status().await;
                    let service = Arc::new(monitor.service().clone());
                    print_statuses(&[(service, status)]);
                }
                _ => {
                    eprintln!("Error: no enabled service named '{}'", name);
                    return ExitCode::from(2);
                }
            }
        }
        Commands::Logs { tail, since } => {
            let client = LogClient::new(&config.backend, &config.logs);
            match client.fetch(tail, since.as_deref()).await {
                Ok(bundle) => {
                    println!("=== logs: {} ===", bundle.container_name);
                    print!("{}", bundle.logs);
                }
                Err(e) => {
                    eprintln!("Error: failed to fetch logs: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}

/// Connect to the backend, rendering the load-error view on failure.
async fn connect(config: &DashboardConfig) -> Result<Dashboard, ExitCode> {
    match Dashboard::connect(config).await {
        Ok(dashboard) => Ok(dashboard),
        Err(e) => {
            eprintln!("Error: failed to load services: {}", e);
            eprintln!("Please ensure the backend server is running and accessible.");
            Err(ExitCode::FAILURE)
        }
    }
}

fn print_services(services: &[Arc<ServiceConfig>]) {
    if services.is_empty() {
        println!("No services configured or found.");
        return;
    }
    println!("{:<16} {:<8} {:<8} URL", "NAME", "ENABLED", "PORT");
    for service in services {
        println!(
            "{:<16} {:<8} {:<8} {}",
            service.name,
            if service.enabled { "yes" } else { "no" },
            service.mcp_port.as_deref().unwrap_or("-"),
            service.mcp_url.as_deref().unwrap_or("-"),
        );
    }
}

fn print_statuses(statuses: &[(Arc<ServiceConfig>, HealthStatus)]) {
    if statuses.is_empty() {
        println!("No services configured or found.");
        return;
    }
    println!("{:<16} {:<12} {:<10} REASON", "NAME", "STATE", "TARGET");
    for (service, status) in statuses {
        let target = match status.service_accessible {
            Some(true) => "reachable",
            Some(false) => "blocked",
            None => "-",
        };
        println!(
            "{:<16} {:<12} {:<10} {}",
            service.name,
            status.kind.to_string(),
            target,
            status.reason.as_deref().unwrap_or("-"),
        );
    }
}
