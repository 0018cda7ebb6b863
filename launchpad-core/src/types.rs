//! Records shared across the launchpad crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Upper bound of bonding-curve progress.
pub const MAX_CURVE_PROGRESS: f64 = 100.0;

/// A launched token representing an online business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Token {
    /// Unique, immutable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short uppercase symbol
    pub ticker: String,
    /// Pitch or description text
    pub description: String,
    /// Image reference
    pub image_url: String,
    /// Market capitalization in USDC, never negative
    pub market_cap: f64,
    /// Cosmetic bonding-curve progress, 0 to 100
    pub bonding_curve_progress: f64,
    /// Creator identity (display name or wallet address)
    pub creator: String,
    /// Cumulative trader profit attributed to the creator
    pub creator_u_profits: f64,
    /// When the token was launched
    pub created_at: DateTime<Utc>,
    /// Verified monthly revenue
    pub monthly_revenue: Option<f64>,
    /// Verified yearly revenue, roughly 12x monthly
    pub yearly_revenue: Option<f64>,
    /// 24-hour percentage change
    pub change_24h: f64,
}

impl Token {
    /// Whether the 24h change is zero or positive.
    pub fn is_up(&self) -> bool {
        self.change_24h >= 0.0
    }

    /// Whether `identity` launched this token.
    pub fn is_created_by(&self, identity: &str) -> bool {
        self.creator == identity
    }
}

/// User input for launching a new token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct TokenDraft {
    pub name: String,
    /// Ticker as typed; uppercased on creation
    pub ticker: String,
    pub description: String,
    /// Defaults to a seeded placeholder image when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_revenue: Option<f64>,
    /// Derived from monthly revenue when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearly_revenue: Option<f64>,
}

impl TokenDraft {
    /// Create a draft with a name and ticker.
    pub fn new(name: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ticker: ticker.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set monthly revenue.
    pub fn with_monthly_revenue(mut self, revenue: f64) -> Self {
        self.monthly_revenue = Some(revenue);
        self
    }

    /// Set yearly revenue explicitly.
    pub fn with_yearly_revenue(mut self, revenue: f64) -> Self {
        self.yearly_revenue = Some(revenue);
        self
    }
}

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// +1 for buys, -1 for sells.
    pub fn sign(self) -> f64 {
        match self {
            TradeSide::Buy => 1.0,
            TradeSide::Sell => -1.0,
        }
    }

    /// Past-tense verb for notifications.
    pub fn past_tense(self) -> &'static str {
        match self {
            TradeSide::Buy => "bought",
            TradeSide::Sell => "sold",
        }
    }
}

/// Receipt of a simulated trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Trade {
    pub id: String,
    pub token_id: String,
    pub side: TradeSide,
    /// Amount in USDC
    pub amount: f64,
    pub user: String,
    pub timestamp: DateTime<Utc>,
    pub market_cap_before: f64,
    pub market_cap_after: f64,
}

impl Trade {
    /// Human-readable confirmation, e.g. "Successfully bought 10 USDC worth of ACME".
    pub fn summary(&self, ticker: &str) -> String {
        format!(
            "Successfully {} {} USDC worth of {}",
            self.side.past_tense(),
            self.amount,
            ticker
        )
    }
}

/// A chat comment on a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Comment {
    pub id: String,
    pub token_id: String,
    pub user: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Whether the comment was produced by the text generator
    pub is_ai: bool,
}
