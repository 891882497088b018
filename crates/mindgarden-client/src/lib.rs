//! HTTP client SDK for the MindGarden habit and mood tracking API.
//!
//! This crate provides a typed client for interacting with the MindGarden
//! server, plus the persisted session state (auth token and cached
//! subscription tier) every request depends on.
//!
//! # Example
//!
//! ```no_run
//! use mindgarden_client::MindgardenClient;
//!
//! # async fn example() -> mindgarden_client::Result<()> {
//! // Create a client
//! let client = MindgardenClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! // Check server health
//! if client.health().is_healthy().await {
//!     println!("Server is up!");
//! }
//!
//! // Log in; the token is persisted and attached to every later request
//! client.auth().login("a@b.com", "hunter2").await?;
//!
//! // Track a habit and check in
//! client.habits().create("meditate").await?;
//! let habits = client.habits().list().await?;
//! println!("{} habits", habits.len());
//!
//! // Premium-gated endpoints surface a 403 as a typed error
//! match client.ai().deep_dive("sleep").await {
//!     Ok(dive) => println!("{}", dive.response),
//!     Err(e) if e.is_premium_required() => println!("Upgrade to unlock deep dives"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! The client provides access to all server endpoints:
//!
//! - **Auth**: login, signup, local logout
//! - **Habits**: list, create, delete
//! - **Check-ins**: submit the daily check-in
//! - **Insights**: today's mood average and habit streaks
//! - **AI**: suggestions and premium deep dives
//! - **Billing**: upgrade, with tier caching
//! - **Export**: reflections export
//! - **Metrics**: windowed analytics and the daily snapshot
//! - **Health**: server health checks
//!
//! # Session persistence
//!
//! The token and cached tier live in a pluggable [`KeyValueStore`]. The
//! default is in-memory; use [`FileStore`] for state that survives
//! restarts, or inject your own implementation.

pub mod api;
pub mod client;
pub mod error;
pub mod session;
pub mod types;

pub use client::{ClientBuilder, MindgardenClient};
pub use error::{Error, Result};
pub use session::{FileStore, KeyValueStore, MemoryStore, Session, Tier};
pub use types::*;

// Re-export API types that are commonly used with query methods
pub use api::AnalyticsQuery;
