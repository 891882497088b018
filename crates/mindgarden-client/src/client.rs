//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::api::{
    AiApi, AuthApi, BillingApi, CheckinsApi, ExportApi, HabitsApi, HealthApi, InsightsApi,
    MetricsApi,
};
use crate::error::{Error, Result};
use crate::session::{KeyValueStore, MemoryStore, Session};

/// Environment variable holding the API base URL.
const ENV_API_BASE: &str = "MINDGARDEN_API_BASE";

/// Default login path.
const DEFAULT_LOGIN_PATH: &str = "/auth/login";

/// Default field carrying the token in the login response.
const DEFAULT_TOKEN_FIELD: &str = "access_token";

/// MindGarden API client.
///
/// Provides typed access to all MindGarden server endpoints.
///
/// # Example
///
/// ```no_run
/// use mindgarden_client::MindgardenClient;
///
/// # async fn example() -> mindgarden_client::Result<()> {
/// let client = MindgardenClient::builder()
///     .base_url("http://localhost:8000")
///     .build()?;
///
/// client.auth().login("a@b.com", "hunter2").await?;
/// let habits = client.habits().list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MindgardenClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// Optional per-request timeout; the transport default applies when unset.
    pub(crate) timeout: Option<Duration>,
    /// Persisted session state (token + cached tier).
    pub(crate) session: Session,
    /// Path the login request posts to.
    pub(crate) login_path: String,
    /// Field carrying the token in the login response.
    pub(crate) token_field: String,
}

impl MindgardenClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client from the environment.
    ///
    /// Reads the base URL from `MINDGARDEN_API_BASE`.
    pub fn from_env() -> Result<Self> {
        match std::env::var(ENV_API_BASE) {
            Ok(base) if !base.is_empty() => Self::builder().base_url(base).build(),
            _ => Err(Error::Config(format!("{ENV_API_BASE} is not set"))),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Access the persisted session state (token + cached tier).
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    pub(crate) fn login_path(&self) -> &str {
        &self.inner.login_path
    }

    pub(crate) fn token_field(&self) -> &str {
        &self.inner.token_field
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the auth API.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access the habits API.
    pub fn habits(&self) -> HabitsApi {
        HabitsApi::new(self.clone())
    }

    /// Access the check-ins API.
    pub fn checkins(&self) -> CheckinsApi {
        CheckinsApi::new(self.clone())
    }

    /// Access the insights API.
    pub fn insights(&self) -> InsightsApi {
        InsightsApi::new(self.clone())
    }

    /// Access the AI suggestions API.
    pub fn ai(&self) -> AiApi {
        AiApi::new(self.clone())
    }

    /// Access the billing API.
    pub fn billing(&self) -> BillingApi {
        BillingApi::new(self.clone())
    }

    /// Access the reflections export API.
    pub fn export(&self) -> ExportApi {
        ExportApi::new(self.clone())
    }

    /// Access the metrics API.
    pub fn metrics(&self) -> MetricsApi {
        MetricsApi::new(self.clone())
    }

    /// Access the health API.
    pub fn health(&self) -> HealthApi {
        HealthApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self.get_raw(path).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Make a GET request, returning the normalized body untyped.
    pub(crate) async fn get_raw(&self, path: &str) -> Result<Value> {
        let url = self.url(path)?;
        self.execute(self.inner.http.get(url)).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let value = self.execute(self.inner.http.get(url).query(query)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let value = self.post_raw(path, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Make a POST request, returning the normalized body untyped.
    pub(crate) async fn post_raw<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.execute(self.inner.http.post(url).json(body)).await
    }

    /// Make a POST request, discarding the response body.
    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: serde::Serialize + ?Sized,
    {
        self.post_raw(path, body).await?;
        Ok(())
    }

    /// Make a bodyless POST request.
    pub(crate) async fn post_empty<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        let value = self.execute(self.inner.http.post(url)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Make a DELETE request, discarding the response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path)?;
        self.execute(self.inner.http.delete(url)).await?;
        Ok(())
    }

    /// Send a request and normalize the outcome.
    ///
    /// Injects the bearer token when the session has one and the request
    /// carries no Authorization header of its own, then maps the response:
    /// normalized body on 2xx, `Error::Api` otherwise.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let mut request = request.build()?;

        if let Some(timeout) = self.inner.timeout {
            *request.timeout_mut() = Some(timeout);
        }

        if !request.headers().contains_key(AUTHORIZATION) {
            if let Some(token) = self.inner.session.token() {
                let value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| Error::Config("auth token is not a valid header value".to_string()))?;
                request.headers_mut().insert(AUTHORIZATION, value);
            }
        }

        tracing::debug!(method = %request.method(), url = %request.url(), "Issuing request");

        let response = self.inner.http.execute(request).await?;
        let status = response.status();
        let body = parse_body(response.text().await?);

        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Normalize a response body.
///
/// Empty bodies become null, invalid JSON round-trips as the raw text.
fn parse_body(text: String) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => Value::String(text),
    }
}

/// Builder for creating a MindgardenClient.
pub struct ClientBuilder {
    base_url: Option<String>,
    store: Option<Arc<dyn KeyValueStore>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    login_path: String,
    token_field: String,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            store: None,
            timeout: None,
            user_agent: None,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            token_field: DEFAULT_TOKEN_FIELD.to_string(),
        }
    }

    /// Set the base URL for the server. Required.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the session store. Defaults to a fresh in-memory store.
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set a per-request timeout. None by default; the transport's own
    /// defaults apply when unset.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the path the login request posts to.
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Set the field carrying the token in the login response.
    pub fn token_field(mut self, field: impl Into<String>) -> Self {
        self.token_field = field.into();
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<MindgardenClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("mindgarden-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder().user_agent(user_agent).build()?;

        let session = Session::new(
            self.store
                .unwrap_or_else(|| Arc::new(MemoryStore::new())),
        );

        Ok(MindgardenClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
                session,
                login_path: self.login_path,
                token_field: self.token_field,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
