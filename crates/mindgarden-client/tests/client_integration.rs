//! Integration tests driving the client against a mock HTTP server.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mindgarden_client::{
    CheckinRequest, Error, HabitResult, MemoryStore, MindgardenClient, Tier,
};

fn client_for(server: &MockServer) -> MindgardenClient {
    MindgardenClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_bearer_header_sent_when_token_is_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/habits"))
        .and(header("Authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.session().set_token("T");

    let habits = client.habits().list().await.unwrap();
    assert!(habits.is_empty());
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/habits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.habits().list().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_cleared_token_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/habits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.session().set_token("T");
    client.auth().logout();
    client.habits().list().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_login_persists_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "a@b.com", "password": "pw"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "T", "token_type": "bearer"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = client.auth().login("a@b.com", "pw").await.unwrap();

    assert_eq!(token, "T");
    assert_eq!(client.session().token().as_deref(), Some("T"));
}

#[tokio::test]
async fn test_login_missing_token_field_is_shape_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.auth().login("a@b.com", "pw").await.unwrap_err();

    assert!(matches!(err, Error::Shape(_)));
    assert_eq!(client.session().token(), None);
}

#[tokio::test]
async fn test_empty_body_parses_to_null() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthz"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client.health().check().await.unwrap();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_non_json_body_round_trips_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthz"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client.health().check().await.unwrap();
    assert_eq!(body, json!("ok"));
}

#[tokio::test]
async fn test_delete_habit_interpolates_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/habits/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.habits().delete(7).await.unwrap();
}

#[tokio::test]
async fn test_premium_gate_yields_api_error_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai/deep_dive"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"detail": "Premium feature. Upgrade required."})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.ai().deep_dive("sleep").await.unwrap_err();

    match &err {
        Error::Api { status, body } => {
            assert_eq!(*status, 403);
            assert_eq!(body, &json!({"detail": "Premium feature. Upgrade required."}));
        }
        other => panic!("expected API error, got {other:?}"),
    }
    assert!(err.is_premium_required());
    assert_eq!(err.detail(), Some("Premium feature. Upgrade required."));
}

#[tokio::test]
async fn test_upgrade_persists_reported_tier() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upgrade"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"subscription_tier": "premium"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let tier = client.billing().upgrade().await.unwrap();

    assert_eq!(tier, Tier::Premium);
    assert_eq!(client.session().tier(), Tier::Premium);
}

#[tokio::test]
async fn test_upgrade_normalizes_unknown_tier() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upgrade"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"subscription_tier": "platinum"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let tier = client.billing().upgrade().await.unwrap();

    assert_eq!(tier, Tier::Free);
    assert_eq!(client.session().tier(), Tier::Free);
}

#[tokio::test]
async fn test_logout_clears_token_and_tier() {
    let client = MindgardenClient::builder()
        .base_url("http://localhost:8000")
        .build()
        .unwrap();

    client.session().set_token("T");
    client.session().set_tier(Tier::Premium);
    client.auth().logout();

    assert_eq!(client.session().token(), None);
    assert_eq!(client.session().tier(), Tier::Free);
}

#[tokio::test]
async fn test_checkin_posts_composite_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/checkins"))
        .and(body_json(json!({
            "date": "2026-08-06",
            "mood": 7,
            "note": "slept well",
            "habit_results": [
                {"habit_id": 1, "done": true},
                {"habit_id": 2, "done": false},
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .checkins()
        .submit(CheckinRequest {
            date: "2026-08-06".to_string(),
            mood: 7,
            note: Some("slept well".to_string()),
            habit_results: vec![
                HabitResult {
                    habit_id: 1,
                    done: true,
                },
                HabitResult {
                    habit_id: 2,
                    done: false,
                },
            ],
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_insights_decode_is_idempotent() {
    let streaks = json!({"habits": [{"habit_id": 1, "streak": 3}]}).to_string();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/insights/today"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mood_avg_7d": 6.5,
            "habit_streaks_json": streaks,
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.insights().today().await.unwrap();
    let second = client.insights().today().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.mood_avg_7d, Some(6.5));
    assert_eq!(first.streaks.len(), 1);
    assert_eq!(first.streaks[0].habit_id, 1);
    assert_eq!(first.streaks[0].streak, 3);
}

#[tokio::test]
async fn test_analytics_sends_window_and_caches_tier() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/metrics/analytics"))
        .and(query_param("days", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "date_utc": "2026-08-06",
            "window_days": 30,
            "window_start_utc": "2026-07-07",
            "checkins_window": 12,
            "ai_suggestions_count_window": 4,
            "ai_suggestions_latency_ms_avg_window": 82.5,
            "ai_suggestions_latency_ms_p95_window": 140.0,
            "subscription_tier": "premium",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.metrics().analytics(30).await.unwrap();

    assert_eq!(response.window_days, 30);
    assert_eq!(response.checkins_window, 12);
    assert_eq!(client.session().tier(), Tier::Premium);
}

#[tokio::test]
async fn test_suggestion_context_decodes_variable_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ai/suggestions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suggestion": "take a short walk",
            "tone": "gentle",
            "context": {
                "retrieved_reflections": [
                    {
                        "score": 0.87,
                        "checkin_date": "2026-08-01",
                        "text": "felt calmer after walking",
                        "reflection_id": 12,
                    }
                ],
                "features": {"avg_mood": 5.5},
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let suggestion = client.ai().suggestion().await.unwrap();

    assert_eq!(suggestion.tone, "gentle");
    let context = suggestion.context.unwrap();
    assert_eq!(context.retrieved_reflections.len(), 1);
    assert_eq!(context.retrieved_reflections[0].reflection_id, 12);
    assert!(context.extra.contains_key("features"));
}

#[tokio::test]
async fn test_export_reflections_decodes_nullable_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/export/reflections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "reflections": [
                {"date": "2026-08-01", "mood": 6, "note": "walked"},
                {"date": "2026-08-02", "mood": null, "note": null},
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let export = client.export().reflections().await.unwrap();

    assert_eq!(export.count, 2);
    assert_eq!(export.reflections[0].mood, Some(6));
    assert_eq!(export.reflections[1].mood, None);
    assert_eq!(export.reflections[1].note, None);
}

#[tokio::test]
async fn test_injected_store_is_shared_across_clients() {
    let store = Arc::new(MemoryStore::new());

    let first = MindgardenClient::builder()
        .base_url("http://localhost:8000")
        .store(store.clone())
        .build()
        .unwrap();
    first.session().set_token("T");

    let second = MindgardenClient::builder()
        .base_url("http://localhost:8000")
        .store(store)
        .build()
        .unwrap();
    assert_eq!(second.session().token().as_deref(), Some("T"));
}
