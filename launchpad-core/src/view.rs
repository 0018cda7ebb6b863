//! Screen navigation as an explicit state machine.
//!
//! ```text
//!             open_token(id)
//!   Home ────────────────────▶ Detail { id }
//!    ▲ ▲  ◀──────── back ─────────┘
//!    │ │
//!    │ └── go_home ── PreStartup ◀── open_pre_startups (any view)
//!    │
//!    └──── go_home ── Profile ◀── open_profile (wallet connected)
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// The screen being shown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// Token grid and search
    #[default]
    Home,
    /// One token's chart, trade panel and chat
    Detail { token_id: String },
    /// The connected user's dashboard
    Profile,
    /// Upcoming launches
    PreStartup,
}

impl View {
    /// Token id shown by a detail view.
    pub fn token_id(&self) -> Option<&str> {
        match self {
            View::Detail { token_id } => Some(token_id),
            _ => None,
        }
    }

    /// Whether the "Live Startups" tab is highlighted.
    pub fn is_live_tab(&self) -> bool {
        matches!(self, View::Home | View::Detail { .. })
    }
}

/// Error types for navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// Profile requires a connected wallet
    #[error("Wallet not connected")]
    WalletNotConnected,

    /// Detail view requested for a token that does not exist
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    /// Operation needs a detail view
    #[error("No token is open")]
    NoTokenOpen,
}

/// Tracks the current view and wallet connection.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    view: View,
    wallet_connected: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Whether the wallet is connected.
    pub fn wallet_connected(&self) -> bool {
        self.wallet_connected
    }

    /// Wallet button: connects on first press, opens the profile afterwards.
    pub fn press_wallet(&mut self) -> &View {
        if self.wallet_connected {
            self.set(View::Profile);
        } else {
            self.wallet_connected = true;
            debug!("Wallet connected");
        }
        &self.view
    }

    /// Logo or "Live Startups" tab.
    pub fn go_home(&mut self) -> &View {
        self.set(View::Home)
    }

    /// "Pre-Startups" tab.
    pub fn open_pre_startups(&mut self) -> &View {
        self.set(View::PreStartup)
    }

    /// Open the detail view for `token_id`; `exists` reports whether the
    /// token is known to the catalog.
    pub fn open_token(&mut self, token_id: impl Into<String>, exists: bool) -> Result<&View, NavigationError> {
        let token_id = token_id.into();
        if !exists {
            return Err(NavigationError::UnknownToken(token_id));
        }
        Ok(self.set(View::Detail { token_id }))
    }

    /// Open the profile dashboard.
    pub fn open_profile(&mut self) -> Result<&View, NavigationError> {
        if !self.wallet_connected {
            return Err(NavigationError::WalletNotConnected);
        }
        Ok(self.set(View::Profile))
    }

    /// Back button on detail and profile views.
    pub fn back(&mut self) -> &View {
        self.set(View::Home)
    }

    fn set(&mut self, view: View) -> &View {
        if self.view != view {
            debug!(from = ?self.view, to = ?view, "View changed");
            self.view = view;
        }
        &self.view
    }
}
