//! finratio CLI binary.
//!
//! Analyses one company from the terminal, or serves the web dashboard.

mod dashboard;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dashboard::DashboardState;
use finratio::data::yahoo::{ProviderConfig, YahooProvider};
use finratio::output::{ExportFormat, Exporter};
use finratio::{VERSION, analyze, normalize_symbol};
use indicatif::{ProgressBar, ProgressStyle};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Shown when a ticker has no statements.
const NO_DATA_MESSAGE: &str = "No financial data found for ticker";

#[derive(Parser)]
#[command(name = "finratio")]
#[command(about = "Financial ratio analysis over the last five fiscal years", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch statements for a company and print its ratios
    Analyze(AnalyzeArgs),

    /// Serve the web dashboard
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8501")]
        addr: SocketAddr,

        #[command(flatten)]
        provider: ProviderArgs,
    },
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Ticker symbol; prompted for when omitted
    symbol: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the ratio table to this file; a missing extension is taken from
    /// the export format
    #[arg(long)]
    export: Option<PathBuf>,

    /// Format of the exported file (csv, json or pretty-json)
    #[arg(long, default_value = "csv")]
    export_format: ExportFormat,

    /// Skip the per-ratio charts
    #[arg(long)]
    no_charts: bool,

    #[command(flatten)]
    provider: ProviderArgs,
}

#[derive(Args)]
struct ProviderArgs {
    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Minimum spacing between Yahoo requests in milliseconds
    #[arg(long, default_value = "250")]
    request_interval_ms: u64,
}

impl ProviderArgs {
    fn config(&self) -> ProviderConfig {
        ProviderConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            request_interval: Duration::from_millis(self.request_interval_ms),
            ..ProviderConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Tables and terminal charts
    Text,
    /// The full report as JSON
    Json,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => {
            init_tracing("warn");
            analyze_command(args).await?;
        }
        Commands::Serve { addr, provider } => {
            init_tracing("finratio=info,finratio_bin=info,tower_http=info");
            serve_command(addr, &provider).await?;
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(default_directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Ask for a ticker on stdin.
fn prompt_ticker() -> io::Result<String> {
    print!("Enter company ticker (e.g. AAPL, MSFT, TSLA): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

async fn analyze_command(args: AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let identifier = match args.symbol {
        Some(symbol) => symbol,
        None => prompt_ticker()?,
    };
    let symbol = normalize_symbol(&identifier)?;
    let provider = YahooProvider::with_config(args.provider.config())?;

    let spinner = (args.format == OutputFormat::Text).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("valid template"),
        );
        pb.set_message(format!("Fetching financial statements for {symbol}..."));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = analyze(&provider, &symbol).await;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    let Some(analysis) = result? else {
        println!("{NO_DATA_MESSAGE}: {symbol}");
        return Ok(());
    };
    let report = analysis.into_report();

    match args.format {
        OutputFormat::Text => print!("{}", report.to_text(!args.no_charts)),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(path) = args.export {
        let path = export_path(&path, args.export_format);
        report.ratios.export_to_file(&path, args.export_format)?;
        eprintln!("Ratios exported to {}", path.display());
    }

    Ok(())
}

fn export_path(path: &Path, format: ExportFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}

async fn serve_command(addr: SocketAddr, provider: &ProviderArgs) -> Result<(), Box<dyn Error>> {
    let provider = YahooProvider::with_config(provider.config())?;
    let app = dashboard::router(DashboardState::new(provider));

    let listener = TcpListener::bind(addr).await?;
    info!(
        "finratio dashboard v{} listening on http://{}",
        VERSION,
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("dashboard stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl-C, serving until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::try_parse_from([
            "finratio",
            "analyze",
            "msft",
            "--format",
            "json",
            "--export",
            "ratios.json",
            "--export-format",
            "pretty-json",
            "--request-interval-ms",
            "500",
        ])
        .unwrap();

        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.symbol.as_deref(), Some("msft"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.export_format, ExportFormat::PrettyJson);
        assert!(!args.no_charts);
        assert_eq!(args.provider.config().request_interval, Duration::from_millis(500));
        assert_eq!(args.provider.config().timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["finratio", "serve"]).unwrap();
        let Commands::Serve { addr, .. } = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(addr, "127.0.0.1:8501".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_export_path_extension() {
        assert_eq!(
            export_path(Path::new("out/msft"), ExportFormat::Csv),
            PathBuf::from("out/msft.csv")
        );
        assert_eq!(
            export_path(Path::new("ratios"), ExportFormat::PrettyJson),
            PathBuf::from("ratios.json")
        );
        assert_eq!(
            export_path(Path::new("ratios.txt"), ExportFormat::Json),
            PathBuf::from("ratios.txt")
        );
    }

    #[test]
    fn test_invalid_export_format() {
        assert!(Cli::try_parse_from(["finratio", "analyze", "AAPL", "--export-format", "xlsx"]).is_err());
    }
}
