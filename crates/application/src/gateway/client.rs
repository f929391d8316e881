//! The authenticated request gateway.

use std::sync::Arc;
use std::time::Duration;

use elodan_domain::{AccessToken, FormData, HttpMethod, QueryParams, RequestBody, RequestOptions};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ApiError, ApiResult};
use crate::gateway::config::GatewayConfig;
use crate::gateway::refresh::{RefreshCoordinator, RefreshFailed, RefreshTicket};
use crate::ports::{HttpTransport, TokenStorage, TransportRequest, TransportResponse};

/// Authenticated request gateway.
///
/// Issues HTTP requests with automatic bearer-token attachment, one-shot
/// session refresh on expiry, and transparent replay. Concurrent requests
/// observing a 401 share a single refresh call: the first becomes the
/// leader and performs it, the rest park and are woken in registration
/// order once it resolves.
///
/// Hold the gateway in an `Arc` and share the handle across services; all
/// state (token slot, refresh coordination) is interior.
pub struct ApiGateway {
    config: GatewayConfig,
    transport: Arc<dyn HttpTransport>,
    tokens: Arc<dyn TokenStorage>,
    refresh: RefreshCoordinator,
}

impl ApiGateway {
    /// Creates a gateway over the given transport and token storage.
    #[must_use]
    pub fn new(
        config: GatewayConfig,
        transport: Arc<dyn HttpTransport>,
        tokens: Arc<dyn TokenStorage>,
    ) -> Self {
        Self {
            config,
            transport,
            tokens,
            refresh: RefreshCoordinator::new(),
        }
    }

    /// Returns the gateway configuration.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    // --- token slot -------------------------------------------------------

    /// Stores the access token; observable by the next request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backing store cannot be
    /// written.
    pub async fn set_token(&self, token: AccessToken) -> ApiResult<()> {
        self.tokens.store(&token).await?;
        Ok(())
    }

    /// Returns the currently held token, if any.
    ///
    /// Storage read failures degrade to "no token held", so callers see
    /// the same behavior as an absent credential.
    pub async fn token(&self) -> Option<AccessToken> {
        match self.tokens.load().await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "token storage read failed");
                None
            }
        }
    }

    /// Clears the stored token; subsequent requests go out
    /// unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backing store cannot be
    /// written.
    pub async fn clear_token(&self) -> ApiResult<()> {
        self.tokens.clear().await?;
        Ok(())
    }

    // --- convenience verbs ------------------------------------------------

    /// Issues a GET request.
    ///
    /// # Errors
    ///
    /// See [`ApiGateway::request`].
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(endpoint, RequestOptions::new()).await
    }

    /// Issues a GET request with query parameters.
    ///
    /// # Errors
    ///
    /// See [`ApiGateway::request`].
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: QueryParams,
    ) -> ApiResult<T> {
        self.request(endpoint, RequestOptions::new().with_query(query))
            .await
    }

    /// Issues a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiGateway::request`].
    pub async fn post<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> ApiResult<T> {
        self.request(
            endpoint,
            RequestOptions::new()
                .with_method(HttpMethod::Post)
                .with_json(body),
        )
        .await
    }

    /// Issues a POST request without a body.
    ///
    /// # Errors
    ///
    /// See [`ApiGateway::request`].
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(
            endpoint,
            RequestOptions::new().with_method(HttpMethod::Post),
        )
        .await
    }

    /// Issues a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiGateway::request`].
    pub async fn patch<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> ApiResult<T> {
        self.request(
            endpoint,
            RequestOptions::new()
                .with_method(HttpMethod::Patch)
                .with_json(body),
        )
        .await
    }

    /// Issues a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`ApiGateway::request`].
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(
            endpoint,
            RequestOptions::new().with_method(HttpMethod::Delete),
        )
        .await
    }

    /// Issues a POST request with a multipart form body.
    ///
    /// The form is passed through untouched; the transport supplies the
    /// content type with the boundary.
    ///
    /// # Errors
    ///
    /// See [`ApiGateway::request`].
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: FormData,
    ) -> ApiResult<T> {
        self.request(
            endpoint,
            RequestOptions::new()
                .with_method(HttpMethod::Post)
                .with_body(RequestBody::Form(form)),
        )
        .await
    }

    /// Issues a PATCH request with a multipart form body.
    ///
    /// # Errors
    ///
    /// See [`ApiGateway::request`].
    pub async fn patch_form<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: FormData,
    ) -> ApiResult<T> {
        self.request(
            endpoint,
            RequestOptions::new()
                .with_method(HttpMethod::Patch)
                .with_body(RequestBody::Form(form)),
        )
        .await
    }

    // --- core -------------------------------------------------------------

    /// Issues a request and returns the parsed JSON body.
    ///
    /// Behavior:
    /// 1. The full URL is built from the configured base URL (absolute
    ///    endpoints pass through) and the query parameters.
    /// 2. Headers are assembled from the defaults, the caller's headers,
    ///    and the current token; multipart bodies drop any explicit
    ///    content-type header.
    /// 3. A 401 on a non-exempt endpoint joins the single-flight refresh
    ///    and replays the request with headers rebuilt from the fresh
    ///    token. A 401 after replay re-enters the same path; the cycle
    ///    terminates because a dead session makes the refresh itself fail.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Timeout`] when the call exceeds its deadline.
    /// - [`ApiError::SessionExpired`] when a 401 cannot be resolved by
    ///   refreshing; the stored token is cleared.
    /// - [`ApiError::Api`] for any other non-2xx status, carrying the
    ///   parsed error payload (an empty object when unparsable).
    /// - [`ApiError::Transport`] for network-level failures.
    /// - [`ApiError::Decode`] when a success body is not valid JSON.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let url = self.build_url(endpoint, &options.query)?;
        debug!(method = %options.method, %url, "issuing request");

        loop {
            let response = self.execute_once(&url, &options).await?;

            if response.status == 401 && !self.config.is_refresh_exempt(endpoint) {
                debug!(%url, "received 401, joining session refresh");
                self.refresh_session().await?;
                continue;
            }

            return Self::finish(&response);
        }
    }

    /// Builds the full request URL: base prefix for relative endpoints and
    /// the serialized query string, appended with `&` when the endpoint
    /// already carries one.
    fn build_url(&self, endpoint: &str, query: &QueryParams) -> ApiResult<String> {
        let mut url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("{}{}", self.config.base_url, endpoint)
        };

        let query_string = query.to_query_string();
        if !query_string.is_empty() {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&query_string);
        }

        // Validate early so the transport never sees a malformed URL.
        Url::parse(&url).map_err(|e| ApiError::InvalidUrl(format!("{e}: {url}")))?;
        Ok(url)
    }

    /// Assembles the outgoing header set from the defaults, the caller's
    /// headers, and the current token.
    async fn build_headers(&self, options: &RequestOptions) -> Vec<(String, String)> {
        let mut headers = self.config.default_headers.clone();
        for (name, value) in &options.headers {
            headers.insert(name.clone(), value.clone());
        }
        if let Some(token) = self.token().await {
            headers.insert("Authorization".to_string(), token.bearer_header());
        }
        // Multipart bodies carry their own content type with the boundary;
        // an explicit header would clobber it.
        if options.body.is_multipart() {
            headers.retain(|name, _| !name.eq_ignore_ascii_case("content-type"));
        }
        headers.into_iter().collect()
    }

    /// Performs one transport call with freshly built headers.
    async fn execute_once(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> ApiResult<TransportResponse> {
        let timeout_ms = options.timeout_ms.unwrap_or(self.config.timeout_ms);
        let request = TransportRequest {
            method: options.method,
            url: url.to_string(),
            headers: self.build_headers(options).await,
            body: options.body.clone(),
            timeout: Duration::from_millis(timeout_ms),
        };
        self.transport
            .execute(request)
            .await
            .map_err(ApiError::from_transport)
    }

    /// Turns a terminal response into the caller's result.
    fn finish<T: DeserializeOwned>(response: &TransportResponse) -> ApiResult<T> {
        if response.is_success() {
            let body: &[u8] = if response.body.is_empty() {
                b"null"
            } else {
                &response.body
            };
            return serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()));
        }

        // Error bodies are parsed best-effort; anything unparsable
        // degrades to an empty object.
        let body = serde_json::from_slice(&response.body)
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Err(ApiError::Api {
            status: response.status,
            body,
        })
    }

    /// Resolves a 401 by joining the single-flight refresh.
    ///
    /// Returns `Ok(())` once a fresh token is stored and the caller may
    /// replay, or [`ApiError::SessionExpired`] when the session cannot be
    /// renewed.
    async fn refresh_session(&self) -> ApiResult<()> {
        match self.refresh.begin().await {
            RefreshTicket::Follower(outcome) => match outcome.await {
                Ok(Ok(())) => Ok(()),
                // A failed refresh, or a leader that went away, both mean
                // the session is gone.
                Ok(Err(RefreshFailed)) | Err(_) => Err(ApiError::SessionExpired),
            },
            RefreshTicket::Leader => match self.run_refresh().await {
                Ok(()) => {
                    info!("session refreshed");
                    self.refresh.complete(Ok(())).await;
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, "session refresh failed, clearing token");
                    if let Err(err) = self.tokens.clear().await {
                        warn!(error = %err, "failed to clear token after refresh failure");
                    }
                    self.refresh.complete(Err(RefreshFailed)).await;
                    Err(ApiError::SessionExpired)
                }
            },
        }
    }

    /// Performs the refresh call and stores the new token.
    ///
    /// The call carries the default headers only: the refresh credential
    /// is an httpOnly cookie held by the transport, and the expired bearer
    /// token is deliberately left off.
    async fn run_refresh(&self) -> ApiResult<()> {
        let url = self.build_url(&self.config.refresh_endpoint, &QueryParams::new())?;
        let request = TransportRequest {
            method: HttpMethod::Post,
            url,
            headers: self
                .config
                .default_headers
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            body: RequestBody::None,
            timeout: Duration::from_millis(self.config.timeout_ms),
        };

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(ApiError::from_transport)?;

        if !response.is_success() {
            let body = serde_json::from_slice(&response.body)
                .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
            return Err(ApiError::Api {
                status: response.status,
                body,
            });
        }

        let payload: Value = serde_json::from_slice(&response.body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let Some(token) = extract_access_token(&payload) else {
            // Well-formed 2xx without a token is still a dead session.
            return Err(ApiError::SessionExpired);
        };

        debug!(token = %token.preview(), "storing refreshed token");
        self.tokens.store(&token).await?;
        Ok(())
    }
}

/// Pulls the access token out of a refresh payload.
///
/// Accepts `data.accessToken` with a top-level `accessToken` fallback;
/// empty strings count as absent.
fn extract_access_token(payload: &Value) -> Option<AccessToken> {
    let nested = payload
        .get("data")
        .and_then(|data| data.get("accessToken"))
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty());
    let top_level = payload
        .get("accessToken")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty());
    nested.or(top_level).map(AccessToken::new)
}
