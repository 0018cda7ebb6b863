//! Portfolio statistics for a creator's dashboard.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::types::Token;

/// Fractions used to estimate creator and trader value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioParams {
    /// Share of market cap owned by the creator
    pub creator_ownership: f64,
    /// Share of market cap counted as trader profit (uProfits)
    pub trader_profit_share: f64,
}

impl Default for PortfolioParams {
    fn default() -> Self {
        Self {
            creator_ownership: 0.05,
            trader_profit_share: 0.42,
        }
    }
}

/// Aggregate view over the tokens one user launched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PortfolioSummary {
    /// Sum of market caps
    pub total_market_cap: f64,
    /// Estimated value of the creator allocation
    pub creator_equity: f64,
    /// Estimated profit generated for traders
    pub u_profits: f64,
    /// Mean 24h change across tokens.
    ///
    /// Every token counts equally regardless of market cap.
    pub change_24h: f64,
    /// Number of launched tokens
    pub active_projects: usize,
    /// Token with the highest market cap, first one on ties
    pub best_performer: Option<Token>,
}

impl PortfolioSummary {
    /// Summarize `tokens` with the default fractions.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> Self {
        Self::with_params(tokens, &PortfolioParams::default())
    }

    /// Summarize `tokens` with custom fractions.
    pub fn with_params<'a>(tokens: impl IntoIterator<Item = &'a Token>, params: &PortfolioParams) -> Self {
        let tokens: Vec<&Token> = tokens.into_iter().collect();

        let total_market_cap: f64 = tokens.iter().map(|t| t.market_cap).sum();
        let change_24h = if tokens.is_empty() {
            0.0
        } else {
            tokens.iter().map(|t| t.change_24h).sum::<f64>() / tokens.len() as f64
        };

        let mut best: Option<&Token> = None;
        for &token in &tokens {
            match best {
                Some(b) if token.market_cap <= b.market_cap => {}
                _ => best = Some(token),
            }
        }

        Self {
            total_market_cap,
            creator_equity: total_market_cap * params.creator_ownership,
            u_profits: total_market_cap * params.trader_profit_share,
            change_24h,
            active_projects: tokens.len(),
            best_performer: best.cloned(),
        }
    }

    /// Whether the portfolio is flat or up over 24h.
    pub fn is_up(&self) -> bool {
        self.change_24h >= 0.0
    }
}

/// Short dashboard form of a number: `1.2M`, `8.9k`, or the number itself.
pub fn format_compact(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_tokens;

    #[test]
    fn test_empty_portfolio() {
        let summary = PortfolioSummary::from_tokens(std::iter::empty());

        assert_eq!(summary.total_market_cap, 0.0);
        assert_eq!(summary.creator_equity, 0.0);
        assert_eq!(summary.u_profits, 0.0);
        assert_eq!(summary.change_24h, 0.0);
        assert_eq!(summary.active_projects, 0);
        assert!(summary.best_performer.is_none());
    }

    #[test]
    fn test_single_token_change_is_exact() {
        let tokens = demo_tokens();
        let summary = PortfolioSummary::from_tokens(&tokens[1..2]);

        assert_eq!(summary.change_24h, tokens[1].change_24h);
        assert_eq!(summary.total_market_cap, 8_900.0);
        assert_eq!(summary.best_performer.as_ref().map(|t| t.id.as_str()), Some("2"));
    }

    #[test]
    fn test_fractions_and_mean() {
        let tokens = demo_tokens();
        let summary = PortfolioSummary::from_tokens(&tokens);

        let total = 450_000.0 + 8_900.0 + 890_000.0 + 50_000.0;
        assert_eq!(summary.total_market_cap, total);
        assert!((summary.creator_equity - total * 0.05).abs() < 1e-6);
        assert!((summary.u_profits - total * 0.42).abs() < 1e-6);

        let mean = (12.5 - 4.2 + 24.8 + 2.1) / 4.0;
        assert!((summary.change_24h - mean).abs() < 1e-9);
        assert_eq!(summary.best_performer.unwrap().ticker, "NOVA");
        assert_eq!(summary.active_projects, 4);
    }

    #[test]
    fn test_best_performer_tie_takes_first() {
        let mut tokens = demo_tokens();
        tokens[0].market_cap = 1_000.0;
        tokens[1].market_cap = 2_000.0;
        tokens[2].market_cap = 2_000.0;
        tokens[3].market_cap = 500.0;

        let summary = PortfolioSummary::from_tokens(&tokens);
        assert_eq!(summary.best_performer.unwrap().id, "2");
    }

    #[test]
    fn test_custom_params() {
        let tokens = demo_tokens();
        let params = PortfolioParams {
            creator_ownership: 0.1,
            trader_profit_share: 0.5,
        };
        let summary = PortfolioSummary::with_params(&tokens[3..], &params);
        assert_eq!(summary.creator_equity, 5_000.0);
        assert_eq!(summary.u_profits, 25_000.0);
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(890_000.0), "890.0k");
        assert_eq!(format_compact(1_020_000.0), "1.0M");
        assert_eq!(format_compact(8_900.0), "8.9k");
        assert_eq!(format_compact(850.0), "850");
    }
}
