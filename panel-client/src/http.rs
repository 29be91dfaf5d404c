//! HTTP client for the admin panel API
//!
//! One typed method per endpoint, replacing the per-action fetch blocks of
//! the original panel. Payloads are validated locally before any request is
//! sent. A 401 from any authorized call ends the session: the in-memory
//! token and the persisted copy are both cleared, and the error is returned
//! so the caller can fall back to the login view.

use crate::session::{Session, SessionStore, StoredSession};
use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{
    EmployeeListResponse, ExportFormat, LoginRequest, LoginResponse, StatusResponse,
};
use shared::models::{EmployeeCreate, EmployeeRecord, EmployeeUpdate};
use validator::Validate;

/// HTTP client for making network requests to the panel backend
#[derive(Debug, Clone)]
pub struct PanelClient {
    client: Client,
    base_url: String,
    session: Session,
    store: Option<SessionStore>,
}

impl PanelClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        let mut session = Session::new();
        if let Some(token) = &config.token {
            session.set_login(token.clone());
        }

        Self {
            client,
            base_url: config.base_url.clone(),
            session,
            store: config.session_path.clone().map(SessionStore::at_path),
        }
    }

    /// Try to resume a previously persisted session.
    ///
    /// Returns `true` if a stored token was loaded. The token is not
    /// verified here; the first authorized call does that.
    pub fn resume(&mut self) -> bool {
        let Some(store) = &self.store else {
            return false;
        };
        match store.load() {
            Some(stored) => {
                self.session.set_login(stored.token);
                true
            }
            None => false,
        }
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    /// Whether the client currently holds a session token
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The configured server base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.session.token().map(|t| format!("Bearer {}", t))
    }

    /// Drop the session after an authentication failure, stored copy included.
    fn expire_session(&mut self) {
        tracing::warn!("Session rejected by server, returning to anonymous state");
        self.session.clear();
        if let Some(store) = &self.store {
            if let Err(e) = store.delete() {
                tracing::warn!(error = %e, "Failed to delete stored session");
            }
        }
    }

    /// Enforce the session state machine: any 401 forces Anonymous.
    fn check_auth<T>(&mut self, result: ClientResult<T>) -> ClientResult<T> {
        if let Err(e) = &result {
            if e.is_auth_failure() {
                self.expire_session();
            }
        }
        result
    }

    // ========== Request helpers ==========

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.delete(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request returning the raw body (report downloads)
    async fn get_bytes(&self, path: &str) -> ClientResult<Vec<u8>> {
        let mut request = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, &text));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, &text));
        }

        response.json().await.map_err(Into::into)
    }

    /// Map a non-success status and its body to the error taxonomy
    fn status_error(status: StatusCode, body: &str) -> ClientError {
        let message = Self::extract_message(body);
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Internal(message),
        }
    }

    /// Pull the human-readable message out of an error body
    fn extract_message(body: &str) -> String {
        match serde_json::from_str::<StatusResponse>(body) {
            Ok(status) => status.message,
            Err(_) if body.is_empty() => "request failed".to_string(),
            Err(_) => body.to_string(),
        }
    }

    // ========== Auth API ==========

    /// Login with username and password.
    ///
    /// On success the session is established and, if a session path is
    /// configured, the token is persisted for auto-resume.
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        if username.is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "username and password are required".to_string(),
            ));
        }

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        // A 401 here is bad credentials, not an expired session; the
        // anonymous session stays as it was.
        let response: LoginResponse = self.post("/login", &request).await?;

        self.session.set_login(response.token.clone());
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&StoredSession {
                token: response.token.clone(),
            }) {
                tracing::warn!(error = %e, "Failed to persist session token");
            }
        }

        tracing::info!(username, "Logged in");
        Ok(response)
    }

    /// Logout.
    ///
    /// The local session is cleared regardless of whether the server call
    /// succeeds; logout is never fatal.
    pub async fn logout(&mut self) {
        let result: ClientResult<StatusResponse> = self.post_empty("/logout").await;
        if let Err(e) = result {
            tracing::warn!(error = %e, "Logout request failed, clearing session anyway");
        }
        self.session.clear();
        if let Some(store) = &self.store {
            if let Err(e) = store.delete() {
                tracing::warn!(error = %e, "Failed to delete stored session");
            }
        }
        tracing::info!("Logged out");
    }

    // ========== Employee API ==========

    /// Fetch the full employee list
    pub async fn list_employees(&mut self) -> ClientResult<Vec<EmployeeRecord>> {
        let result = self.get::<EmployeeListResponse>("/employees").await;
        self.check_auth(result).map(|r| r.employees)
    }

    /// Create a new employee record.
    ///
    /// The payload is validated locally; invalid input never reaches the
    /// network.
    pub async fn add_employee(&mut self, payload: &EmployeeCreate) -> ClientResult<StatusResponse> {
        payload.validate()?;
        let result = self.post("/add", payload).await;
        self.check_auth(result)
    }

    /// Update an existing employee record (full replace of mutable fields)
    pub async fn update_employee(
        &mut self,
        id: i64,
        payload: &EmployeeUpdate,
    ) -> ClientResult<StatusResponse> {
        payload.validate()?;
        let result = self.put(&format!("/employee/{}", id), payload).await;
        self.check_auth(result)
    }

    /// Delete an employee record by id
    pub async fn delete_employee(&mut self, id: i64) -> ClientResult<StatusResponse> {
        let result = self.delete(&format!("/employee/{}", id)).await;
        self.check_auth(result)
    }

    /// Download a report in the given format, returning the raw file bytes
    pub async fn export_report(&mut self, format: ExportFormat) -> ClientResult<Vec<u8>> {
        let result = self
            .get_bytes(&format!("/export/{}", format.path_segment()))
            .await;
        self.check_auth(result)
    }

    // ========== Misc API ==========

    /// Liveness probe against the backend root endpoint
    pub async fn health(&self) -> ClientResult<()> {
        let response = self.client.get(self.url("/")).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::status_error(status, &text));
        }
        Ok(())
    }
}
