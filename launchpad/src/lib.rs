//! Launchpad - a single user's session on the token launchpad.
//!
//! Ties the core catalog and view state machine to the generated-copy
//! service:
//!
//! - **Navigation**: Home, token detail, profile and pre-startup views
//! - **Trading**: simulated buys and sells on the open token
//! - **Chat**: a comment thread scoped to the open token
//! - **Generated copy**: pitch and sentiment slots that never show stale text
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     Launchpad                       │
//! │                                                     │
//! │  ┌─────────┐  ┌───────────┐  ┌───────────────────┐  │
//! │  │ Catalog │  │ Navigator │  │ CommentThread     │  │
//! │  └─────────┘  └───────────┘  └───────────────────┘  │
//! │                      │                              │
//! │        ┌─────────────▼──────────────┐               │
//! │        │ GenerationSlot x2          │               │
//! │        │   └─ CopywriterService     │               │
//! │        └────────────────────────────┘               │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod session;
pub mod types;

// Re-export main types
pub use config::LaunchpadConfig;
pub use session::Launchpad;
pub use types::*;
