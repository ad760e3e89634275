use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use internshield_client::{ScoringClient, build_scoring_client};
use internshield_core::{GaugeAnimator, MonotonicClock};
use internshield_dashboard::controller::NETWORK_NOTICE;
use internshield_dashboard::{
    Dashboard, DashboardConfig, SubmissionState, render_gauge_line, render_json, render_text,
};
use log::error;
use serde_json::json;

const EXIT_NETWORK: u8 = 1;
const EXIT_REJECTED: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "internshield", version, about = "InternShield internship scam risk dashboard")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(long, global = true, help = "Scoring endpoint (overrides INTERNSHIELD_ENDPOINT)")]
    endpoint: Option<String>,
    #[arg(long, global = true, help = "Request timeout in milliseconds")]
    timeout_ms: Option<u64>,
    #[arg(long, global = true, help = "Animation frame interval in milliseconds")]
    frame_ms: Option<u64>,
    #[arg(long, global = true, help = "Print the final score without animating")]
    no_animate: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a message and/or a sender domain.
    Analyze {
        #[arg(long, default_value = "")]
        message: String,
        #[arg(long, default_value = "")]
        domain: String,
    },
    /// Check that the scoring service is reachable.
    Health,
}

impl Cli {
    fn config(&self) -> DashboardConfig {
        let mut cfg = DashboardConfig::from_env();
        if let Some(endpoint) = self.endpoint.as_ref().filter(|v| !v.trim().is_empty()) {
            cfg.endpoint = endpoint.trim().to_string();
        }
        if let Some(ms) = self.timeout_ms {
            cfg.set_timeout_ms(ms);
        }
        if let Some(ms) = self.frame_ms {
            cfg.set_frame_ms(ms);
        }
        cfg
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match run(&cli).await {
        Ok(code) => code,
        Err(err) => {
            error!("internshield: {err}");
            ExitCode::from(EXIT_NETWORK)
        }
    }
}

async fn run(cli: &Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cfg = cli.config();
    let client = build_scoring_client(cfg.scoring_client_config())?;

    match &cli.command {
        Commands::Health => {
            let mut stdout = io::stdout().lock();
            match client.health().await {
                Ok(health) => {
                    if cli.json {
                        let body = json!({"status": "ok", "message": health.message});
                        writeln!(stdout, "{body}")?;
                    } else {
                        writeln!(stdout, "{}", health.message)?;
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    error!("health check failed: {err}");
                    if cli.json {
                        let body = json!({"status": "error", "message": NETWORK_NOTICE});
                        writeln!(stdout, "{body}")?;
                    } else {
                        writeln!(stdout, "! {NETWORK_NOTICE}")?;
                    }
                    Ok(ExitCode::from(EXIT_NETWORK))
                }
            }
        }
        Commands::Analyze { message, domain } => {
            analyze(cli, &cfg, client, message, domain).await
        }
    }
}

async fn analyze(
    cli: &Cli,
    cfg: &DashboardConfig,
    client: Arc<dyn ScoringClient>,
    message: &str,
    domain: &str,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let animate = !cli.json && !cli.no_animate;
    let animator = if animate {
        GaugeAnimator::new()
    } else {
        GaugeAnimator::with_duration(Duration::ZERO)
    };
    let mut dashboard =
        Dashboard::with_animator(client, Box::new(MonotonicClock::new()), animator);

    if dashboard.submit(message, domain).is_err() {
        emit(cli, &dashboard)?;
        return Ok(ExitCode::from(EXIT_REJECTED));
    }
    if animate {
        emit(cli, &dashboard)?;
    }

    dashboard.next_completion().await;
    if let SubmissionState::Failed(_) = dashboard.state() {
        emit(cli, &dashboard)?;
        return Ok(ExitCode::from(EXIT_NETWORK));
    }

    let mut stdout = io::stdout().lock();
    while dashboard.is_animating() {
        if animate {
            tokio::time::sleep(cfg.frame_interval).await;
        }
        if dashboard.on_frame().is_none() || !animate {
            continue;
        }
        let view = dashboard.view();
        if let Some(results) = &view.results {
            write!(stdout, "\r{}", render_gauge_line(results))?;
            stdout.flush()?;
        }
    }
    if animate {
        writeln!(stdout)?;
    }
    drop(stdout);

    emit(cli, &dashboard)?;
    Ok(ExitCode::SUCCESS)
}

fn emit(cli: &Cli, dashboard: &Dashboard) -> io::Result<()> {
    let view = dashboard.view();
    let mut stdout = io::stdout().lock();
    if cli.json {
        writeln!(stdout, "{}", render_json(&view))
    } else {
        write!(stdout, "{}", render_text(&view))
    }
}
