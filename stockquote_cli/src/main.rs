mod output;

use std::sync::Mutex;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use stockquote_lib::{
    Client, QuoteWidget, Trigger, DEFAULT_BASE_URL, HOSTED_BASE_URL, LOCAL_BASE_URL,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::output::{OutputFormat, PanelPrinter};

#[derive(Parser)]
#[command(name = "stockquote")]
#[command(about = "Look up stock quotes from a quote service")]
struct Cli {
    /// Ticker to look up. Without it, one ticker is read per stdin line
    ticker: Option<String>,

    /// Output format: table, html or json
    #[arg(long, default_value = "table")]
    output: String,

    /// Quote service: local or hosted
    #[arg(long)]
    endpoint: Option<String>,

    /// Quote service base URL (overrides --endpoint)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds. Requests never time out when omitted
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn base_url(cli: &Cli) -> Result<&str> {
    if let Some(url) = cli.base_url.as_deref() {
        return Ok(url);
    }
    Ok(match cli.endpoint.as_deref() {
        None => DEFAULT_BASE_URL,
        Some("local") => LOCAL_BASE_URL,
        Some("hosted") => HOSTED_BASE_URL,
        Some(other) => bail!("unknown endpoint '{}': expected local or hosted", other),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stockquote=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "html" => OutputFormat::Html,
        _ => OutputFormat::Table,
    };

    let mut client = Client::with_base_url(base_url(&cli)?);
    if let Some(secs) = cli.timeout_secs {
        client = client.with_timeout(Duration::from_secs(secs));
    }
    tracing::debug!("Using quote service at {}", client.base_url());

    let widget = QuoteWidget::new(
        client,
        Mutex::new(cli.ticker.clone().unwrap_or_default()),
        PanelPrinter::new(format),
    );

    if cli.ticker.is_some() {
        widget.on_trigger(&Trigger::Click).await;
        return Ok(());
    }

    let enter = Trigger::KeyDown(Trigger::SUBMIT_KEY.to_string());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        *widget.input().lock().unwrap_or_else(|e| e.into_inner()) = line;
        widget.on_trigger(&enter).await;
    }

    Ok(())
}
