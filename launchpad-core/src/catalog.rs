//! In-memory token catalog.
//!
//! Tokens are kept newest-first. The catalog is the only place tokens are
//! created or replaced, so id uniqueness and immutable creation timestamps
//! are enforced here.

use chrono::Utc;
use tracing::{debug, info};

use crate::seed::demo_tokens;
use crate::trade::{simulate_trade, TradeParams};
use crate::types::{Token, TokenDraft, Trade, TradeSide};

/// Market cap assigned to every freshly launched token.
pub const SEED_MARKET_CAP: f64 = 5000.0;

/// Error types for catalog operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// No token with this id
    #[error("Token not found: {0}")]
    TokenNotFound(String),

    /// Trade amount was zero, negative or not finite
    #[error("Invalid trade amount: {0}")]
    InvalidAmount(f64),

    /// Draft failed validation
    #[error("Invalid draft: {0}")]
    InvalidDraft(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Result of a successful trade.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeOutcome {
    /// Token state after the trade
    pub token: Token,
    /// Receipt for the trade
    pub trade: Trade,
}

/// Ordered collection of tokens keyed by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Tokens, newest first
    tokens: Vec<Token>,
    /// Simulator constants
    params: TradeParams,
    /// Market cap for new launches
    seed_market_cap: f64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            params: TradeParams::default(),
            seed_market_cap: SEED_MARKET_CAP,
        }
    }

    /// Create a catalog holding the demo tokens.
    pub fn seeded() -> Self {
        Self::new().with_tokens(demo_tokens())
    }

    /// Replace the contents with `tokens`, kept in the given order.
    ///
    /// Later duplicates of an id are dropped.
    pub fn with_tokens(mut self, tokens: Vec<Token>) -> Self {
        self.tokens.clear();
        for token in tokens {
            if self.get(&token.id).is_none() {
                self.tokens.push(token);
            }
        }
        self
    }

    /// Set simulator constants.
    pub fn with_params(mut self, params: TradeParams) -> Self {
        self.params = params;
        self
    }

    /// Set the market cap assigned to new launches.
    pub fn with_seed_market_cap(mut self, market_cap: f64) -> Self {
        self.seed_market_cap = market_cap.max(0.0);
        self
    }

    /// Simulator constants in use.
    pub fn params(&self) -> &TradeParams {
        &self.params
    }

    /// Launch a token from a draft, attributing it to `creator`.
    pub fn create(&mut self, draft: TokenDraft, creator: impl Into<String>) -> Result<Token> {
        let name = draft.name.trim();
        let ticker = draft.ticker.trim().to_uppercase();

        if name.is_empty() {
            return Err(CatalogError::InvalidDraft("name is required".to_string()));
        }
        if ticker.is_empty() {
            return Err(CatalogError::InvalidDraft("ticker is required".to_string()));
        }
        for (field, value) in [
            ("monthly_revenue", draft.monthly_revenue),
            ("yearly_revenue", draft.yearly_revenue),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(CatalogError::InvalidDraft(format!(
                        "{} must be a non-negative number, got {}",
                        field, v
                    )));
                }
            }
        }

        let yearly_revenue = draft
            .yearly_revenue
            .or_else(|| draft.monthly_revenue.map(|m| m * 12.0));
        let image_url = draft
            .image_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/200/200", ticker));

        let mut id = uuid::Uuid::new_v4().to_string();
        while self.get(&id).is_some() {
            id = uuid::Uuid::new_v4().to_string();
        }

        let token = Token {
            id,
            name: name.to_string(),
            ticker,
            description: draft.description,
            image_url,
            market_cap: self.seed_market_cap,
            bonding_curve_progress: 0.0,
            creator: creator.into(),
            creator_u_profits: 0.0,
            created_at: Utc::now(),
            monthly_revenue: draft.monthly_revenue,
            yearly_revenue,
            change_24h: 0.0,
        };

        info!(
            token_id = %token.id,
            ticker = %token.ticker,
            creator = %token.creator,
            "Token launched"
        );

        self.tokens.insert(0, token.clone());
        Ok(token)
    }

    /// Apply a simulated trade to the token with `token_id`.
    pub fn apply_trade(&mut self, token_id: &str, amount: f64, side: TradeSide) -> Result<TradeOutcome> {
        self.apply_trade_as(token_id, amount, side, "anonymous")
    }

    /// Apply a simulated trade, recording `user` on the receipt.
    pub fn apply_trade_as(
        &mut self,
        token_id: &str,
        amount: f64,
        side: TradeSide,
        user: &str,
    ) -> Result<TradeOutcome> {
        let slot = self
            .tokens
            .iter_mut()
            .find(|t| t.id == token_id)
            .ok_or_else(|| CatalogError::TokenNotFound(token_id.to_string()))?;

        if !amount.is_finite() || amount <= 0.0 {
            return Err(CatalogError::InvalidAmount(amount));
        }

        let updated = simulate_trade(slot, amount, side, &self.params);
        let trade = Trade {
            id: uuid::Uuid::new_v4().to_string(),
            token_id: token_id.to_string(),
            side,
            amount,
            user: user.to_string(),
            timestamp: Utc::now(),
            market_cap_before: slot.market_cap,
            market_cap_after: updated.market_cap,
        };

        debug!(
            token_id = %token_id,
            side = ?side,
            amount,
            market_cap = updated.market_cap,
            progress = updated.bonding_curve_progress,
            "Trade applied"
        );

        *slot = updated.clone();
        Ok(TradeOutcome {
            token: updated,
            trade,
        })
    }

    /// Look up a token by id.
    pub fn get(&self, token_id: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == token_id)
    }

    /// All tokens, newest first.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens whose name or ticker contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&Token> {
        let needle = term.trim().to_lowercase();
        self.tokens
            .iter()
            .filter(|t| {
                needle.is_empty()
                    || t.name.to_lowercase().contains(&needle)
                    || t.ticker.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Tokens launched by any of `identities`, in catalog order.
    pub fn created_by(&self, identities: &[&str]) -> Vec<&Token> {
        self.tokens
            .iter()
            .filter(|t| identities.iter().any(|id| t.is_created_by(id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_create_acme() {
        let mut catalog = Catalog::seeded();
        let existing: HashSet<String> = catalog.tokens().iter().map(|t| t.id.clone()).collect();

        let token = catalog.create(TokenDraft::new("Acme", "acme"), "You").unwrap();

        assert_eq!(token.ticker, "ACME");
        assert_eq!(token.market_cap, 5000.0);
        assert_eq!(token.bonding_curve_progress, 0.0);
        assert_eq!(token.creator_u_profits, 0.0);
        assert_eq!(token.change_24h, 0.0);
        assert!(!existing.contains(&token.id));
        assert_eq!(token.image_url, "https://picsum.photos/seed/ACME/200/200");
    }

    #[test]
    fn test_create_is_newest_first() {
        let mut catalog = Catalog::new();
        let first = catalog.create(TokenDraft::new("First", "one"), "You").unwrap();
        let second = catalog.create(TokenDraft::new("Second", "two"), "You").unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tokens()[0].id, second.id);
        assert_eq!(catalog.tokens()[1].id, first.id);
    }

    #[test]
    fn test_create_derives_yearly_revenue() {
        let mut catalog = Catalog::new();
        let token = catalog
            .create(TokenDraft::new("Shop", "shop").with_monthly_revenue(2100.0), "You")
            .unwrap();

        assert_eq!(token.monthly_revenue, Some(2100.0));
        assert_eq!(token.yearly_revenue, Some(25_200.0));
    }

    #[test]
    fn test_create_rejects_invalid_drafts() {
        let mut catalog = Catalog::new();

        let err = catalog.create(TokenDraft::new("  ", "abc"), "You").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDraft(_)));

        let err = catalog.create(TokenDraft::new("Name", ""), "You").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDraft(_)));

        let err = catalog
            .create(TokenDraft::new("Name", "abc").with_monthly_revenue(-1.0), "You")
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDraft(_)));

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_apply_trade_updates_in_place() {
        let mut catalog = Catalog::new();
        let token = catalog.create(TokenDraft::new("Acme", "acme"), "You").unwrap();

        let outcome = catalog
            .apply_trade_as(&token.id, 2.0, TradeSide::Buy, "You")
            .unwrap();

        assert_eq!(outcome.token.market_cap, 7000.0);
        assert_eq!(outcome.trade.market_cap_before, 5000.0);
        assert_eq!(outcome.trade.market_cap_after, 7000.0);
        assert_eq!(outcome.trade.user, "You");
        assert_eq!(catalog.get(&token.id).unwrap().market_cap, 7000.0);
        assert_eq!(catalog.get(&token.id).unwrap().created_at, token.created_at);
    }

    #[test]
    fn test_apply_trade_unknown_token() {
        let mut catalog = Catalog::seeded();
        let before: Vec<Token> = catalog.tokens().to_vec();

        let err = catalog.apply_trade("missing", 1.0, TradeSide::Buy).unwrap_err();

        assert_eq!(err, CatalogError::TokenNotFound("missing".to_string()));
        assert_eq!(catalog.tokens(), before.as_slice());
    }

    #[test]
    fn test_apply_trade_invalid_amount() {
        let mut catalog = Catalog::seeded();
        for amount in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = catalog.apply_trade("1", amount, TradeSide::Buy).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidAmount(_)));
        }
        assert_eq!(catalog.get("1").unwrap().market_cap, 450_000.0);
    }

    #[test]
    fn test_search() {
        let catalog = Catalog::seeded();

        let hits: Vec<&str> = catalog.search("nova").iter().map(|t| t.ticker.as_str()).collect();
        assert_eq!(hits, vec!["NOVA"]);

        let hits = catalog.search("vpa");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Vision Pro Accessories");

        assert_eq!(catalog.search("").len(), catalog.len());
        assert!(catalog.search("zzz").is_empty());
    }

    #[test]
    fn test_created_by() {
        let mut catalog = Catalog::seeded();
        catalog
            .create(TokenDraft::new("Wallet Shop", "wal"), "0x847...F2A")
            .unwrap();

        let mine = catalog.created_by(&["You", "0x847...F2A"]);
        let tickers: Vec<&str> = mine.iter().map(|t| t.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["WAL", "MINE"]);
    }

    #[test]
    fn test_with_tokens_drops_duplicate_ids() {
        let mut tokens = demo_tokens();
        tokens.push(tokens[0].clone());
        let catalog = Catalog::new().with_tokens(tokens);
        assert_eq!(catalog.len(), 4);
    }
}
