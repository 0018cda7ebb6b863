//! Launchpad core - tokens, trades and portfolios.
//!
//! Everything in this crate is synchronous, in-memory arithmetic:
//!
//! - [`Catalog`]: newest-first collection of launched tokens
//! - [`simulate_trade`]: pure price-impact model for buys and sells
//! - [`PortfolioSummary`]: dashboard statistics over one creator's tokens
//! - [`Navigator`]: explicit view state machine
//! - [`CommentThread`]: chat for the token currently on screen
//!
//! # Example
//!
//! ```
//! use launchpad_core::{Catalog, TokenDraft, TradeSide};
//!
//! let mut catalog = Catalog::new();
//! let token = catalog.create(TokenDraft::new("Acme", "acme"), "You").unwrap();
//! assert_eq!(token.ticker, "ACME");
//!
//! let outcome = catalog.apply_trade(&token.id, 10.0, TradeSide::Buy).unwrap();
//! assert_eq!(outcome.token.market_cap, 15_000.0);
//! ```

pub mod aggregate;
pub mod catalog;
pub mod comment;
pub mod revenue;
pub mod seed;
pub mod trade;
pub mod types;
pub mod view;

// Re-export main types
pub use aggregate::{format_compact, PortfolioParams, PortfolioSummary};
pub use catalog::{Catalog, CatalogError, TradeOutcome, SEED_MARKET_CAP};
pub use comment::{CommentError, CommentThread};
pub use revenue::{simulate_monthly_revenue, RevenueSource};
pub use seed::{demo_tokens, upcoming_projects, UpcomingProject};
pub use trade::{simulate_trade, TradeParams, TradeParamsError};
pub use types::*;
pub use view::{NavigationError, Navigator, View};
