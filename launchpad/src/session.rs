//! One user's session: view state, wallet, trades, chat and generated copy.

use std::sync::Arc;
use tracing::{debug, info};

use launchpad_agent::{CopywriterService, GenerationHandle, GenerationKind, GenerationSlot};
use launchpad_core::{
    upcoming_projects, Catalog, Comment, CommentThread, NavigationError, Navigator,
    PortfolioSummary, Token, TokenDraft, TradeOutcome, TradeSide, UpcomingProject, View,
};

use crate::config::LaunchpadConfig;
use crate::types::{LaunchpadError, Result};

/// Interim text while a sentiment summary is generating.
pub const SENTIMENT_INTERIM: &str = "Analyzing market chatter...";

/// Interim text while a pitch is generating.
pub const PITCH_INTERIM: &str = "Thinking...";

/// A single user's launchpad session.
pub struct Launchpad {
    config: LaunchpadConfig,
    catalog: Catalog,
    navigator: Navigator,
    /// Chat for the open token, if any
    thread: Option<CommentThread>,
    copywriter: Arc<CopywriterService>,
    pitch: GenerationSlot,
    sentiment: GenerationSlot,
}

impl Launchpad {
    /// Create a session, building the text-generation backend from `config`.
    pub fn new(config: LaunchpadConfig) -> Result<Self> {
        let copywriter = CopywriterService::new(config.agent.build_backend()?)
            .with_config(config.agent.service.clone());
        Ok(Self::with_copywriter(config, Arc::new(copywriter)))
    }

    /// Create a session over an existing copywriter.
    pub fn with_copywriter(config: LaunchpadConfig, copywriter: Arc<CopywriterService>) -> Self {
        let catalog = if config.general.seed_demo_data {
            Catalog::seeded()
        } else {
            Catalog::new()
        }
        .with_params(config.trading.simulator.clone())
        .with_seed_market_cap(config.trading.seed_market_cap);

        info!(
            user = %config.user.display_name,
            tokens = catalog.len(),
            model = %copywriter.model(),
            "Launchpad session started"
        );

        Self {
            config,
            catalog,
            navigator: Navigator::new(),
            thread: None,
            copywriter,
            pitch: GenerationSlot::new(GenerationKind::Pitch),
            sentiment: GenerationSlot::new(GenerationKind::Sentiment),
        }
    }

    pub fn config(&self) -> &LaunchpadConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn copywriter(&self) -> Arc<CopywriterService> {
        Arc::clone(&self.copywriter)
    }

    pub fn view(&self) -> &View {
        self.navigator.view()
    }

    pub fn wallet_connected(&self) -> bool {
        self.navigator.wallet_connected()
    }

    /// Token shown in the detail view.
    pub fn selected_token(&self) -> Option<&Token> {
        self.view().token_id().and_then(|id| self.catalog.get(id))
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Wallet button: connects first, opens the profile once connected.
    pub async fn connect_wallet(&mut self) -> View {
        let view = self.navigator.press_wallet().clone();
        self.sync_thread().await;
        view
    }

    pub async fn go_home(&mut self) -> View {
        let view = self.navigator.go_home().clone();
        self.sync_thread().await;
        view
    }

    pub async fn open_pre_startups(&mut self) -> View {
        let view = self.navigator.open_pre_startups().clone();
        self.sync_thread().await;
        view
    }

    /// Open the detail view for a catalog token.
    pub async fn open_token(&mut self, token_id: &str) -> Result<View> {
        let exists = self.catalog.get(token_id).is_some();
        let view = self.navigator.open_token(token_id, exists)?.clone();
        self.sync_thread().await;
        Ok(view)
    }

    pub async fn open_profile(&mut self) -> Result<View> {
        let view = self.navigator.open_profile()?.clone();
        self.sync_thread().await;
        Ok(view)
    }

    /// Back button: returns home and drops the selection.
    pub async fn back(&mut self) -> View {
        let view = self.navigator.back().clone();
        self.sync_thread().await;
        view
    }

    /// Keep the comment thread scoped to the open token.
    async fn sync_thread(&mut self) {
        let open = self.navigator.view().token_id();
        let current = self.thread.as_ref().map(|t| t.token_id());
        if open == current {
            return;
        }

        debug!(from = ?current, to = ?open, "Resetting comment thread");
        self.thread = open.map(CommentThread::new);
        self.sentiment.clear().await;
    }

    // ------------------------------------------------------------------
    // Tokens and trades
    // ------------------------------------------------------------------

    /// Launch a token as the local user and open it.
    pub async fn launch(&mut self, draft: TokenDraft) -> Result<Token> {
        let token = self
            .catalog
            .create(draft, self.config.user.display_name.clone())?;
        self.open_token(&token.id).await?;
        Ok(token)
    }

    /// Trade on the token in the detail view.
    pub fn trade(&mut self, amount: f64, side: TradeSide) -> Result<TradeOutcome> {
        let token_id = self
            .view()
            .token_id()
            .map(String::from)
            .ok_or(NavigationError::NoTokenOpen)?;
        self.trade_token(&token_id, amount, side)
    }

    /// Trade on any catalog token.
    pub fn trade_token(&mut self, token_id: &str, amount: f64, side: TradeSide) -> Result<TradeOutcome> {
        let user = self.config.user.display_name.clone();
        Ok(self.catalog.apply_trade_as(token_id, amount, side, &user)?)
    }

    /// Tokens whose name or ticker matches `term`.
    pub fn search(&self, term: &str) -> Vec<&Token> {
        self.catalog.search(term)
    }

    /// Pre-startup listings.
    pub fn upcoming(&self) -> Vec<UpcomingProject> {
        upcoming_projects()
    }

    /// Dashboard over the tokens the local user launched.
    pub fn portfolio(&self) -> PortfolioSummary {
        let user = &self.config.user;
        let identities = [user.display_name.as_str(), user.wallet_address.as_str()];
        PortfolioSummary::with_params(self.catalog.created_by(&identities), &self.config.portfolio)
    }

    // ------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------

    /// Post a comment on the open token.
    pub fn post_comment(&mut self, text: &str) -> Result<Comment> {
        let user = self.config.user.display_name.clone();
        let thread = self.thread.as_mut().ok_or(NavigationError::NoTokenOpen)?;
        let comment = thread.post(user, text)?.clone();
        debug!(token_id = %comment.token_id, "Comment posted");
        Ok(comment)
    }

    /// Comments on the open token, oldest first.
    pub fn comments(&self) -> &[Comment] {
        self.thread.as_ref().map(|t| t.comments()).unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Generated copy
    // ------------------------------------------------------------------

    /// Summarize the open token's chat. Nothing happens without comments.
    pub async fn request_sentiment(&self) -> Option<GenerationHandle> {
        let texts = self.thread.as_ref().map(|t| t.texts()).unwrap_or_default();
        if texts.is_empty() {
            return None;
        }

        let copywriter = Arc::clone(&self.copywriter);
        let handle = self
            .sentiment
            .start(Some(SENTIMENT_INTERIM.to_string()), async move {
                copywriter.summarize_sentiment(&texts).await
            })
            .await;
        Some(handle)
    }

    /// Generate a pitch for a draft name and ticker.
    pub async fn request_pitch(&self, name: &str, ticker: &str) -> Result<GenerationHandle> {
        let (name, ticker) = (name.trim().to_string(), ticker.trim().to_string());
        if name.is_empty() || ticker.is_empty() {
            return Err(LaunchpadError::InvalidRequest(
                "pitch needs a name and a ticker".to_string(),
            ));
        }

        let copywriter = Arc::clone(&self.copywriter);
        Ok(self
            .pitch
            .start(Some(PITCH_INTERIM.to_string()), async move {
                copywriter.generate_pitch(&name, &ticker).await
            })
            .await)
    }

    /// Pitch text to display.
    pub async fn pitch_text(&self) -> Option<String> {
        self.pitch.display().await
    }

    /// Sentiment text to display.
    pub async fn sentiment_text(&self) -> Option<String> {
        self.sentiment.display().await
    }
}
