//! REST client with session interceptors.
//!
//! ARCHITECTURE
//! ============
//! Two flavors share one request path:
//! - `Interception::Session` attaches `Authorization: Bearer <access>` and
//!   treats any 401 as the end of the session (cookies cleared, full page
//!   load of `/login`).
//! - `Interception::Public` is used for `/auth/*` calls; a 401 there is a
//!   wrong password, not an expired session, so it surfaces as a form error.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ApiError::Unavailable`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::state::session::Session;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Public (`/auth/*`) calls give up after this long.
pub const PUBLIC_TIMEOUT_MS: u32 = 10_000;

/// Backend base URL, fixed at build time through `SPROUT_API_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("SPROUT_API_URL").unwrap_or(DEFAULT_API_URL)
}

pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interception {
    Public,
    Session,
}

/// What the response phase does with a status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseDisposition {
    Success,
    EndSession,
    Failure,
}

pub fn classify_status(status: u16, interception: Interception) -> ResponseDisposition {
    match (status, interception) {
        (200..=299, _) => ResponseDisposition::Success,
        (401, Interception::Session) => ResponseDisposition::EndSession,
        _ => ResponseDisposition::Failure,
    }
}

/// Request phase: the `Authorization` header to attach, if any.
pub fn authorization_header(session: &Session, interception: Interception) -> Option<String> {
    match interception {
        Interception::Session => session.bearer(),
        Interception::Public => None,
    }
}

/// Decode an error response body; non-JSON text is kept as a string.
pub fn error_body(text: &str) -> Option<serde_json::Value> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_owned())))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    interception: Interception,
    timeout_ms: Option<u32>,
}

impl ApiClient {
    /// Client for unauthenticated `/auth/*` endpoints.
    pub fn public() -> Self {
        Self {
            base_url: api_base_url().to_owned(),
            interception: Interception::Public,
            timeout_ms: Some(PUBLIC_TIMEOUT_MS),
        }
    }

    /// Client for resource endpoints that need the session.
    pub fn session() -> Self {
        Self { base_url: api_base_url().to_owned(), interception: Interception::Session, timeout_ms: None }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn interception(&self) -> Interception {
        self.interception
    }

    pub fn timeout_ms(&self) -> Option<u32> {
        self.timeout_ms
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send_json`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json::<(), T>(Method::Get, path, None).await
    }

    /// `POST` a JSON body and decode a JSON reply.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send_json`].
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send_json(Method::Post, path, Some(body)).await
    }

    /// `POST` a JSON body and ignore whatever comes back.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send_json`].
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Method::Post, path, Some(body)).await.map(|_| ())
    }

    /// Send a request through both interceptor phases and decode the reply.
    ///
    /// # Errors
    ///
    /// - `Network` / `Timeout` when no response arrived.
    /// - `Unauthorized` for a 401 on a session client (cookies already cleared).
    /// - `Status` for any other non-2xx, carrying the decoded body.
    /// - `Decode` when a 2xx body does not match `T`.
    /// - `Unavailable` during server rendering.
    pub async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.send(method, path, body).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::RequestBuilder;

        let url = self.url(path);
        let mut builder = match method {
            Method::Get => RequestBuilder::new(&url).method(gloo_net::http::Method::GET),
            Method::Post => RequestBuilder::new(&url).method(gloo_net::http::Method::POST),
            Method::Put => RequestBuilder::new(&url).method(gloo_net::http::Method::PUT),
            Method::Patch => RequestBuilder::new(&url).method(gloo_net::http::Method::PATCH),
            Method::Delete => RequestBuilder::new(&url).method(gloo_net::http::Method::DELETE),
        }
        .header("Content-Type", "application/json");

        if let Some(auth) = authorization_header(&Session::load(), self.interception) {
            builder = builder.header("Authorization", &auth);
        }

        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let sent = match self.timeout_ms {
            Some(ms) => with_timeout(request.send(), ms).await?,
            None => request.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        match classify_status(resp.status(), self.interception) {
            ResponseDisposition::Success => Ok(resp),
            ResponseDisposition::EndSession => {
                log::warn!("{} {url} returned 401, ending session", method_name(method));
                crate::state::session::end_session();
                Err(ApiError::Unauthorized)
            }
            ResponseDisposition::Failure => {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                Err(ApiError::Status { status, body: error_body(&text) })
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send<B: Serialize>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), ApiError> {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn method_name(method: Method) -> &'static str {
    match method {
        Method::Get => "GET",
        Method::Post => "POST",
        Method::Put => "PUT",
        Method::Patch => "PATCH",
        Method::Delete => "DELETE",
    }
}

#[cfg(feature = "hydrate")]
async fn with_timeout<F: std::future::Future>(fut: F, ms: u32) -> Result<F::Output, ApiError> {
    use futures::future::{Either, select};

    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(ms));
    match select(fut, timer).await {
        Either::Left((out, _)) => Ok(out),
        Either::Right(_) => Err(ApiError::Timeout),
    }
}
