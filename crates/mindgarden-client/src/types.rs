//! Request and response types for the MindGarden API.
//!
//! These types mirror the server's API contract.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─────────────────────────────────────────────────────────────────────────────
// Auth
// ─────────────────────────────────────────────────────────────────────────────

/// Credentials sent to the login and signup endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Habits
// ─────────────────────────────────────────────────────────────────────────────

/// A tracked habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Habit ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Whether the habit is active.
    pub active: bool,
}

/// Request to create a habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHabitRequest {
    /// Display name.
    pub name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Check-ins
// ─────────────────────────────────────────────────────────────────────────────

/// Per-habit completion flag within a check-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitResult {
    /// Habit the flag applies to.
    pub habit_id: i64,
    /// Whether the habit was completed.
    pub done: bool,
}

/// Request to submit a daily check-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinRequest {
    /// Check-in date (`YYYY-MM-DD`).
    pub date: String,
    /// Mood rating.
    pub mood: i64,
    /// Free-form reflection note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Completion flags, one per habit.
    pub habit_results: Vec<HabitResult>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Insights
// ─────────────────────────────────────────────────────────────────────────────

/// Raw envelope returned by `GET /insights/today`.
///
/// The mood average may be absent or non-numeric and the streaks field is
/// a JSON-encoded string requiring a secondary parse; use
/// [`TodayInsights`] for the decoded form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsEnvelope {
    /// Rolling 7-day mood average, as sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_avg_7d: Option<serde_json::Value>,
    /// JSON-encoded `{"habits": [{"habit_id", "streak"}]}` payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habit_streaks_json: Option<String>,
}

/// Current streak for one habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStreak {
    /// Habit ID.
    pub habit_id: i64,
    /// Consecutive days completed.
    pub streak: i64,
}

/// Inner payload of the streaks field, after the secondary parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct HabitStreaksPayload {
    #[serde(default)]
    pub habits: Vec<HabitStreak>,
}

/// Decoded insights for today.
#[derive(Debug, Clone, PartialEq)]
pub struct TodayInsights {
    /// Rolling 7-day mood average; `None` when absent or non-numeric.
    pub mood_avg_7d: Option<f64>,
    /// Per-habit streaks; empty when the streaks payload was missing or
    /// malformed.
    pub streaks: Vec<HabitStreak>,
}

// ─────────────────────────────────────────────────────────────────────────────
// AI suggestions
// ─────────────────────────────────────────────────────────────────────────────

/// A past reflection retrieved as supporting context for a suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedReflection {
    /// Relevance score.
    pub score: f64,
    /// Date of the check-in the reflection came from.
    pub checkin_date: String,
    /// Reflection text.
    pub text: String,
    /// Reflection ID.
    pub reflection_id: i64,
}

/// Context attached to a suggestion.
///
/// The shape varies with what the server had available; unrecognized
/// fields are preserved in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionContext {
    /// Past reflections judged relevant to the suggestion.
    #[serde(default)]
    pub retrieved_reflections: Vec<RetrievedReflection>,
    /// Any further context fields the server included.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// An AI-generated suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSuggestion {
    /// Suggestion text.
    pub suggestion: String,
    /// Tone (gentle, neutral, pushy).
    pub tone: String,
    /// Supporting context, when the server attached any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<SuggestionContext>,
}

/// Request for a deep-dive analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepDiveRequest {
    /// Topic to analyze.
    pub topic: String,
}

/// Deep-dive analysis response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepDiveResponse {
    /// Topic that was analyzed.
    pub topic: String,
    /// Analysis text.
    pub response: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Billing and export
// ─────────────────────────────────────────────────────────────────────────────

/// Response after an upgrade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeResponse {
    /// Tier the account now has, as reported by the server.
    pub subscription_tier: String,
}

/// One exported reflection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reflection {
    /// Check-in date.
    pub date: String,
    /// Mood rating, if recorded.
    #[serde(default)]
    pub mood: Option<i64>,
    /// Reflection note, if recorded.
    #[serde(default)]
    pub note: Option<String>,
}

/// Response for the reflections export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionsExport {
    /// Number of reflections exported.
    pub count: usize,
    /// The reflections, oldest first.
    pub reflections: Vec<Reflection>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Metrics
// ─────────────────────────────────────────────────────────────────────────────

/// Windowed analytics response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    /// Date the window ends on (UTC).
    pub date_utc: String,
    /// Window length in days.
    pub window_days: u32,
    /// First day of the window (UTC).
    pub window_start_utc: String,
    /// Check-ins within the window.
    pub checkins_window: u64,
    /// AI suggestion requests within the window.
    pub ai_suggestions_count_window: u64,
    /// Mean suggestion latency in the window, if any requests were made.
    #[serde(default)]
    pub ai_suggestions_latency_ms_avg_window: Option<f64>,
    /// p95 suggestion latency in the window, if any requests were made.
    #[serde(default)]
    pub ai_suggestions_latency_ms_p95_window: Option<f64>,
    /// Tier as reported by the server.
    pub subscription_tier: String,
}

/// Daily metrics snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Snapshot date (UTC).
    pub date_utc: String,
    /// Check-ins created today.
    pub checkins_today: u64,
    /// AI suggestion requests today.
    pub ai_suggestions_count_today: u64,
    /// Mean suggestion latency today, if any requests were made.
    #[serde(default)]
    pub ai_suggestions_latency_ms_avg_today: Option<f64>,
    /// p95 suggestion latency today, if any requests were made.
    #[serde(default)]
    pub ai_suggestions_latency_ms_p95_today: Option<f64>,
}
