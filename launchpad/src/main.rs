//! launchpad-demo: scripted walk through a launchpad session.
//!
//! Launches a token, trades it, chats about it, asks for generated copy and
//! prints the resulting creator dashboard as JSON.

use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{reload, EnvFilter};

use launchpad::config::BackendKind;
use launchpad::{Launchpad, LaunchpadConfig};
use launchpad_core::{format_compact, simulate_monthly_revenue, RevenueSource, TokenDraft, TradeSide};

#[derive(Parser)]
#[command(name = "launchpad-demo")]
#[command(about = "Scripted walk through a launchpad session")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "launchpad.yaml", env = "LAUNCHPAD_CONFIG")]
    config: String,

    /// Use the mock backend instead of a live model
    #[arg(long)]
    offline: bool,

    /// Name of the token to launch
    #[arg(long, default_value = "Acme Robotics")]
    name: String,

    /// Ticker of the token to launch
    #[arg(long, default_value = "ACME")]
    ticker: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; the configured level is applied once the config is read
    let (filter, filter_handle) = reload::Layer::new(
        EnvFilter::from_default_env().add_directive("launchpad=info".parse()?),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = LaunchpadConfig::load_or_default(&cli.config)?;
    if cli.offline {
        config.agent.backend = BackendKind::Mock;
    }

    let level: Directive = format!("launchpad={}", config.general.log_level).parse()?;
    filter_handle.reload(EnvFilter::from_default_env().add_directive(level))?;

    info!(config = %cli.config, backend = ?config.agent.backend, "Starting launchpad-demo");

    let mut pad = Launchpad::new(config)?;
    pad.connect_wallet().await;

    let monthly = simulate_monthly_revenue(&[RevenueSource::Shopify, RevenueSource::Stripe], &mut rand::thread_rng());
    let draft = TokenDraft::new(&cli.name, &cli.ticker)
        .with_description("Warehouse robots for independent retailers.")
        .with_monthly_revenue(monthly);
    let token = pad.launch(draft).await?;
    info!(token_id = %token.id, ticker = %token.ticker, monthly_revenue = monthly, "Token launched");

    for (amount, side) in [(25.0, TradeSide::Buy), (10.0, TradeSide::Sell)] {
        let outcome = pad.trade(amount, side)?;
        info!(
            market_cap = outcome.token.market_cap,
            progress = outcome.token.bonding_curve_progress,
            "{}",
            outcome.trade.summary(&token.ticker)
        );
    }

    for text in ["Shipping already, wild.", "Curve is filling fast", "Not sure about the margins"] {
        pad.post_comment(text)?;
    }

    let (pitch, sentiment) = futures::join!(pad.request_pitch(&token.name, &token.ticker), pad.request_sentiment());
    let pitch = pitch?;
    let (pitch_done, sentiment_done) = futures::join!(pitch.wait(), async {
        match sentiment {
            Some(handle) => handle.wait().await,
            None => false,
        }
    });
    info!(pitch_done, sentiment_done, "Generations finished");

    println!("Pitch:     {}", pad.pitch_text().await.unwrap_or_default());
    println!("Sentiment: {}", pad.sentiment_text().await.unwrap_or_default());

    pad.open_profile().await?;
    let summary = pad.portfolio();
    info!(
        total = %format_compact(summary.total_market_cap),
        projects = summary.active_projects,
        "Portfolio"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
