//! API endpoint implementations.

mod ai;
mod auth;
mod billing;
mod checkins;
mod export;
mod habits;
mod health;
mod insights;
mod metrics;

pub use ai::AiApi;
pub use auth::AuthApi;
pub use billing::BillingApi;
pub use checkins::CheckinsApi;
pub use export::ExportApi;
pub use habits::HabitsApi;
pub use health::HealthApi;
pub use insights::InsightsApi;
pub use metrics::{AnalyticsQuery, MetricsApi};
