use leptos::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{header, Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::types::{ApiError, ApiErrorKind},
    config,
    state::session::SessionStore,
};

/// One variant per backend endpoint. Used for logging and for the message a
/// failure falls back to when the body carries none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    Register,
    Login,
    GetUser,
    UpdateUser,
    ApplyLeave,
    ListLeave,
    UpdateLeaveStatus,
    LeaveBalance,
}

impl ApiOperation {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            ApiOperation::Register => "Registration failed",
            ApiOperation::Login => "Login failed",
            ApiOperation::GetUser => "Failed to fetch user details",
            ApiOperation::UpdateUser => "Failed to update user details",
            ApiOperation::ApplyLeave => "Failed to apply for leave",
            ApiOperation::ListLeave => "Failed to fetch leave applications",
            ApiOperation::UpdateLeaveStatus => "Failed to update leave status",
            ApiOperation::LeaveBalance => "Failed to fetch leave balance",
        }
    }

    /// A 401 here means the stored token is no longer accepted.
    fn signals_expired_session(&self) -> bool {
        !matches!(self, ApiOperation::Register | ApiOperation::Login)
    }
}

/// Status and body of a completed exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Option<SessionStore>,
    bearer_override: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: None,
            bearer_override: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
            session: None,
            bearer_override: None,
        }
    }

    pub fn with_session(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&SessionStore> {
        self.session.as_ref()
    }

    /// Copy of this client that authenticates with `token` before the
    /// session holds it (the user lookup that completes a login).
    pub(crate) fn with_bearer(&self, token: &str) -> Self {
        let mut client = self.clone();
        client.bearer_override = Some(token.to_string());
        client
    }

    fn bearer_token(&self) -> Option<String> {
        self.bearer_override
            .clone()
            .or_else(|| self.session.as_ref().and_then(SessionStore::token))
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn request_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(token) = self.bearer_token() {
            match header::HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(header::AUTHORIZATION, value);
                }
                Err(_) => log::warn!("stored token is not a valid header value; sending without it"),
            }
        }
        headers
    }

    /// Issues exactly one request and decodes a JSON success body into `R`.
    pub(crate) async fn send_json<B, R>(
        &self,
        operation: ApiOperation,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, path);
        let mut builder = self
            .client
            .request(method.clone(), &url)
            .headers(self.request_headers());
        if let Some(body) = body {
            let encoded = serde_json::to_vec(body).map_err(|e| {
                ApiError::validation(format!("Failed to encode request: {}", e))
            })?;
            builder = builder.body(encoded);
        }
        let request = builder.build().map_err(|e| {
            log::error!("{:?} could not build request: {}", operation, e);
            ApiError::network(operation.fallback_message())
        })?;

        log::debug!("{} {}", method, path);
        let response = self.execute(operation, request).await?;
        log::debug!("{} {} -> {}", method, path, response.status);

        if response.is_success() {
            return serde_json::from_str(&response.body).map_err(|e| {
                log::warn!("{:?} returned an unreadable body: {}", operation, e);
                ApiError::server(format!("Failed to parse response: {}", e))
            });
        }

        if response.status == 401 && operation.signals_expired_session() {
            if let Some(session) = &self.session {
                log::warn!("{:?} rejected the session token; logging out", operation);
                session.logout();
            }
        }
        let error = normalize_error(operation, response.status, &response.body);
        log::warn!(
            "{:?} failed with {}: {}",
            operation,
            response.status,
            error.message
        );
        Err(error)
    }

    async fn execute(
        &self,
        operation: ApiOperation,
        request: reqwest::Request,
    ) -> Result<RawResponse, ApiError> {
        if let Some(mocked) = mocked_response(&request) {
            return mocked.map_err(|reason| {
                log::error!("{:?} request failed: {}", operation, reason);
                ApiError::network(operation.fallback_message())
            });
        }
        let response = self.client.execute(request).await.map_err(|e| {
            log::error!("{:?} request failed: {}", operation, e);
            ApiError::network(operation.fallback_message())
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            log::error!("{:?} response could not be read: {}", operation, e);
            ApiError::network(operation.fallback_message())
        })?;
        Ok(RawResponse { status, body })
    }
}

/// Maps a failed exchange to the error surfaced to views.
pub fn normalize_error(operation: ApiOperation, status: u16, body: &str) -> ApiError {
    let message = extract_message(body).unwrap_or_else(|| operation.fallback_message().to_string());
    ApiError {
        message,
        kind: ApiErrorKind::from_status(status),
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "detail", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

/// Everything but RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

pub fn use_api_client() -> ApiClient {
    match use_context::<ApiClient>() {
        Some(client) => client,
        None => ApiClient::new().with_session(crate::state::session::use_session()),
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mocked_response(_request: &reqwest::Request) -> Option<Result<RawResponse, String>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mocked_response(request: &reqwest::Request) -> Option<Result<RawResponse, String>> {
    let url = request.url().as_str().to_string();
    let responder = MOCKS.with(|mocks| {
        mocks
            .borrow()
            .iter()
            .rev()
            .find(|(base, _)| url.starts_with(base.as_str()))
            .map(|(_, responder)| responder.clone())
    })?;
    Some(responder.respond(request))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub trait TestResponder {
    fn respond(&self, request: &reqwest::Request) -> Result<RawResponse, String>;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
thread_local! {
    static MOCKS: std::cell::RefCell<Vec<(String, std::sync::Arc<dyn TestResponder>)>> =
        std::cell::RefCell::new(Vec::new());
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn register_mock(base_url: String, responder: std::sync::Arc<dyn TestResponder>) {
    MOCKS.with(|mocks| mocks.borrow_mut().push((base_url, responder)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_message_wins_over_fallback() {
        let error = normalize_error(
            ApiOperation::Login,
            401,
            r#"{"detail":"Invalid credentials"}"#,
        );
        assert_eq!(error.message, "Invalid credentials");
        assert_eq!(error.kind, ApiErrorKind::Auth);

        let error = normalize_error(ApiOperation::Register, 400, r#"{"message":"Email taken"}"#);
        assert_eq!(error.message, "Email taken");
        assert_eq!(error.kind, ApiErrorKind::Validation);
    }

    #[test]
    fn empty_or_missing_body_uses_fallback() {
        let error = normalize_error(ApiOperation::ListLeave, 500, "{}");
        assert_eq!(error.message, "Failed to fetch leave applications");
        assert_eq!(error.kind, ApiErrorKind::Server);

        let error = normalize_error(ApiOperation::LeaveBalance, 502, "<html>bad gateway</html>");
        assert_eq!(error.message, "Failed to fetch leave balance");

        let error = normalize_error(ApiOperation::GetUser, 404, r#"{"message":"  "}"#);
        assert_eq!(error.message, "Failed to fetch user details");
        assert_eq!(error.kind, ApiErrorKind::NotFound);
    }

    #[test]
    fn non_string_detail_is_ignored() {
        let error = normalize_error(
            ApiOperation::ApplyLeave,
            422,
            r#"{"detail":[{"loc":["body","start_date"],"msg":"field required"}]}"#,
        );
        assert_eq!(error.message, "Failed to apply for leave");
    }

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(encode_segment("abc123"), "abc123");
        assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
        assert_eq!(encode_segment("u-employee"), "u-employee");
        assert_eq!(encode_segment("a_b.c~d"), "a_b.c~d");
        assert_eq!(encode_segment("x?y#z"), "x%3Fy%23z");
    }

    #[test]
    fn only_session_bound_operations_expire_sessions() {
        assert!(!ApiOperation::Login.signals_expired_session());
        assert!(!ApiOperation::Register.signals_expired_session());
        assert!(ApiOperation::ListLeave.signals_expired_session());
    }
}
