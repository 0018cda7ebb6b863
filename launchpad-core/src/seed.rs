//! Demo data loaded into a fresh session.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::types::Token;

/// A project announced on the pre-startup board but not yet launched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct UpcomingProject {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub description: String,
    pub image_url: String,
    /// Countdown until launch, `HH:MM:SS`
    pub launch_time: String,
    /// Users on the waitlist
    pub waiting_count: u32,
}

#[allow(clippy::too_many_arguments)]
fn token(
    id: &str,
    name: &str,
    ticker: &str,
    description: &str,
    market_cap: f64,
    progress: f64,
    creator: &str,
    u_profits: f64,
    age_ms: i64,
    monthly_revenue: f64,
    change_24h: f64,
) -> Token {
    Token {
        id: id.to_string(),
        name: name.to_string(),
        ticker: ticker.to_string(),
        description: description.to_string(),
        image_url: format!("https://picsum.photos/seed/{}/200/200", ticker.to_lowercase()),
        market_cap,
        bonding_curve_progress: progress,
        creator: creator.to_string(),
        creator_u_profits: u_profits,
        created_at: Utc::now() - Duration::milliseconds(age_ms),
        monthly_revenue: Some(monthly_revenue),
        yearly_revenue: Some(monthly_revenue * 12.0),
        change_24h,
    }
}

/// The four tokens every session starts with, newest first.
pub fn demo_tokens() -> Vec<Token> {
    vec![
        token(
            "1",
            "PureLife Organics",
            "PURE",
            "Certified organic supplements and wellness products. 15k+ monthly subscribers verified on Shopify.",
            450_000.0,
            65.0,
            "0xSarah",
            125_000.0,
            0,
            85_000.0,
            12.5,
        ),
        token(
            "2",
            "Vision Pro Accessories",
            "VPA",
            "Premium aftermarket straps and cases for spatial computing headsets. High margin niche.",
            8_900.0,
            12.0,
            "TimC",
            1_200.0,
            100_000,
            850.0,
            -4.2,
        ),
        token(
            "3",
            "Nova Streetwear",
            "NOVA",
            "Limited edition urban fashion drops. 500k+ social following and sold-out inventory every month.",
            890_000.0,
            92.0,
            "Jony",
            340_000.0,
            500_000,
            145_000.0,
            24.8,
        ),
        token(
            "4",
            "My Startup",
            "MINE",
            "This is a test project created by the user.",
            50_000.0,
            25.0,
            "You",
            21_000.0,
            200_000,
            2_100.0,
            2.1,
        ),
    ]
}

/// Projects shown on the pre-startup board.
pub fn upcoming_projects() -> Vec<UpcomingProject> {
    [
        (
            "p1",
            "Nebula AI",
            "NEB",
            "DeFi aggregated through neural networks. The last trading bot you will ever need.",
            "nebula",
            "04:23:12",
            1420,
        ),
        (
            "p2",
            "EcoChain",
            "LEAF",
            "Carbon credits on-chain. Save the planet while you ape.",
            "leaf",
            "08:45:00",
            890,
        ),
        (
            "p3",
            "SoundWave",
            "WAVE",
            "Decentralized music streaming where artists actually get paid.",
            "wave",
            "12:00:00",
            2300,
        ),
    ]
    .into_iter()
    .map(|(id, name, ticker, description, seed, launch_time, waiting_count)| UpcomingProject {
        id: id.to_string(),
        name: name.to_string(),
        ticker: ticker.to_string(),
        description: description.to_string(),
        image_url: format!("https://picsum.photos/seed/{}/400/300", seed),
        launch_time: launch_time.to_string(),
        waiting_count,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_tokens_satisfy_invariants() {
        let tokens = demo_tokens();
        assert_eq!(tokens.len(), 4);
        for t in &tokens {
            assert!(t.market_cap >= 0.0);
            assert!((0.0..=100.0).contains(&t.bonding_curve_progress));
            assert_eq!(t.yearly_revenue, t.monthly_revenue.map(|m| m * 12.0));
        }
    }

    #[test]
    fn test_upcoming_projects() {
        let projects = upcoming_projects();
        let tickers: Vec<&str> = projects.iter().map(|p| p.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["NEB", "LEAF", "WAVE"]);
        assert_eq!(projects[2].waiting_count, 2300);
    }
}
