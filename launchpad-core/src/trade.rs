//! Linear price-impact model for simulated trades.
//!
//! Every USDC traded moves the market cap by `market_cap_per_unit`, the
//! bonding curve by `curve_per_unit` percentage points and the 24h change by
//! `1 / change_divisor` percentage points. Sells floor market cap and curve
//! progress at zero; buys cap progress at 100.

use serde::{Deserialize, Serialize};

use crate::types::{Token, TradeSide, MAX_CURVE_PROGRESS};

/// Constants of the trade simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeParams {
    /// Market cap moved per unit traded
    pub market_cap_per_unit: f64,
    /// Curve progress moved per unit traded
    pub curve_per_unit: f64,
    /// Units traded per percentage point of 24h change
    pub change_divisor: f64,
    /// Optional symmetric clamp on the 24h change; unbounded when `None`
    pub change_24h_limit: Option<f64>,
}

impl Default for TradeParams {
    fn default() -> Self {
        Self {
            market_cap_per_unit: 1000.0,
            curve_per_unit: 0.5,
            change_divisor: 10.0,
            change_24h_limit: None,
        }
    }
}

/// Rejected simulator constants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TradeParamsError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("change_divisor must be positive, got {0}")]
    NonPositiveDivisor(f64),
}

impl TradeParams {
    /// Clamp the 24h change to `[-limit, limit]`.
    pub fn with_change_limit(mut self, limit: f64) -> Self {
        self.change_24h_limit = Some(limit.abs());
        self
    }

    /// Check the constants keep market cap and progress in range.
    pub fn validate(&self) -> Result<(), TradeParamsError> {
        let mut fields = vec![
            ("market_cap_per_unit", self.market_cap_per_unit),
            ("curve_per_unit", self.curve_per_unit),
            ("change_divisor", self.change_divisor),
        ];
        if let Some(limit) = self.change_24h_limit {
            fields.push(("change_24h_limit", limit));
        }

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(TradeParamsError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(TradeParamsError::Negative { field, value });
            }
        }
        if self.change_divisor == 0.0 {
            return Err(TradeParamsError::NonPositiveDivisor(self.change_divisor));
        }
        Ok(())
    }
}

/// Apply a trade of `amount` to `token`, returning the updated record.
///
/// Callers validate `amount > 0`; the catalog does so before calling.
/// Market cap stays non-negative and progress within `[0, 100]` even for
/// constants that fail [`TradeParams::validate`].
pub fn simulate_trade(token: &Token, amount: f64, side: TradeSide, params: &TradeParams) -> Token {
    let market_cap_impact = amount * params.market_cap_per_unit;
    let curve_impact = amount * params.curve_per_unit;
    let change_impact = side.sign() * (amount / params.change_divisor);

    let market_cap = match side {
        TradeSide::Buy => token.market_cap + market_cap_impact,
        TradeSide::Sell => token.market_cap - market_cap_impact,
    }
    .max(0.0);

    let bonding_curve_progress = match side {
        TradeSide::Buy => token.bonding_curve_progress + curve_impact,
        TradeSide::Sell => token.bonding_curve_progress - curve_impact,
    }
    .clamp(0.0, MAX_CURVE_PROGRESS);

    let mut change_24h = token.change_24h + change_impact;
    if let Some(limit) = params.change_24h_limit {
        let limit = limit.abs();
        change_24h = change_24h.clamp(-limit, limit);
    }

    Token {
        market_cap,
        bonding_curve_progress,
        change_24h,
        ..token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn token(market_cap: f64, progress: f64, change: f64) -> Token {
        Token {
            id: "t".to_string(),
            name: "Test".to_string(),
            ticker: "TST".to_string(),
            description: String::new(),
            image_url: String::new(),
            market_cap,
            bonding_curve_progress: progress,
            creator: "You".to_string(),
            creator_u_profits: 0.0,
            created_at: Utc::now(),
            monthly_revenue: None,
            yearly_revenue: None,
            change_24h: change,
        }
    }

    #[test]
    fn test_buy_impact() {
        let before = token(1000.0, 5.0, 0.0);
        let after = simulate_trade(&before, 10.0, TradeSide::Buy, &TradeParams::default());

        assert_eq!(after.market_cap, 11_000.0);
        assert_eq!(after.bonding_curve_progress, 10.0);
        assert_eq!(after.change_24h, 1.0);
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn test_sell_floors_at_zero() {
        let before = token(3000.0, 2.0, 1.5);
        let after = simulate_trade(&before, 50.0, TradeSide::Sell, &TradeParams::default());

        assert_eq!(after.market_cap, 0.0);
        assert_eq!(after.bonding_curve_progress, 0.0);
        assert_eq!(after.change_24h, -3.5);
    }

    #[test]
    fn test_buy_caps_progress() {
        let before = token(5000.0, 95.0, 0.0);
        let after = simulate_trade(&before, 100.0, TradeSide::Buy, &TradeParams::default());

        assert_eq!(after.bonding_curve_progress, 100.0);
        assert_eq!(after.market_cap, 105_000.0);
    }

    #[test]
    fn test_buy_then_sell_restores_cap_and_curve() {
        let params = TradeParams::default();
        let before = token(20_000.0, 40.0, 3.0);
        let bought = simulate_trade(&before, 7.5, TradeSide::Buy, &params);
        let sold = simulate_trade(&bought, 7.5, TradeSide::Sell, &params);

        assert!((sold.market_cap - before.market_cap).abs() < 1e-9);
        assert!((sold.bonding_curve_progress - before.bonding_curve_progress).abs() < 1e-9);
        // Unbounded change moves by exact opposites.
        assert!((sold.change_24h - before.change_24h).abs() < 1e-9);
    }

    #[test]
    fn test_change_limit_breaks_symmetry() {
        let params = TradeParams::default().with_change_limit(100.0);
        let before = token(20_000.0, 40.0, 95.0);
        let bought = simulate_trade(&before, 200.0, TradeSide::Buy, &params);
        assert_eq!(bought.change_24h, 100.0);

        let sold = simulate_trade(&bought, 200.0, TradeSide::Sell, &params);
        assert_eq!(sold.change_24h, 80.0);
        assert_ne!(sold.change_24h, before.change_24h);
    }

    #[test]
    fn test_invariants_hold_over_sequence() {
        let params = TradeParams::default();
        let mut state = token(5000.0, 0.0, 0.0);
        let script = [
            (3.0, TradeSide::Buy),
            (500.0, TradeSide::Sell),
            (250.0, TradeSide::Buy),
            (0.25, TradeSide::Sell),
            (1000.0, TradeSide::Buy),
            (2000.0, TradeSide::Sell),
        ];

        for (amount, side) in script {
            state = simulate_trade(&state, amount, side, &params);
            assert!(state.market_cap >= 0.0);
            assert!((0.0..=100.0).contains(&state.bonding_curve_progress));
        }
    }

    #[test]
    fn test_validate_defaults() {
        assert_eq!(TradeParams::default().validate(), Ok(()));
        assert_eq!(TradeParams::default().with_change_limit(-5.0).validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let negative_cap = TradeParams { market_cap_per_unit: -1000.0, ..Default::default() };
        assert!(matches!(
            negative_cap.validate(),
            Err(TradeParamsError::Negative { field: "market_cap_per_unit", .. })
        ));

        let negative_curve = TradeParams { curve_per_unit: -0.5, ..Default::default() };
        assert!(matches!(
            negative_curve.validate(),
            Err(TradeParamsError::Negative { field: "curve_per_unit", .. })
        ));

        let zero_divisor = TradeParams { change_divisor: 0.0, ..Default::default() };
        assert_eq!(zero_divisor.validate(), Err(TradeParamsError::NonPositiveDivisor(0.0)));

        let negative_limit = TradeParams { change_24h_limit: Some(-5.0), ..Default::default() };
        assert!(matches!(
            negative_limit.validate(),
            Err(TradeParamsError::Negative { field: "change_24h_limit", .. })
        ));

        let infinite = TradeParams { market_cap_per_unit: f64::INFINITY, ..Default::default() };
        assert!(matches!(infinite.validate(), Err(TradeParamsError::NotFinite { .. })));

        let nan_limit = TradeParams { change_24h_limit: Some(f64::NAN), ..Default::default() };
        assert!(matches!(nan_limit.validate(), Err(TradeParamsError::NotFinite { .. })));
    }

    #[test]
    fn test_negative_limit_clamps_by_magnitude() {
        let params = TradeParams { change_24h_limit: Some(-5.0), ..Default::default() };
        let after = simulate_trade(&token(5000.0, 0.0, 4.5), 10.0, TradeSide::Buy, &params);
        assert_eq!(after.change_24h, 5.0);
    }

    #[test]
    fn test_negative_constants_keep_ranges() {
        let params = TradeParams {
            market_cap_per_unit: -1000.0,
            curve_per_unit: -0.5,
            ..Default::default()
        };
        let after = simulate_trade(&token(5000.0, 0.0, 0.0), 10.0, TradeSide::Buy, &params);
        assert_eq!(after.market_cap, 0.0);
        assert_eq!(after.bonding_curve_progress, 0.0);
    }
}
