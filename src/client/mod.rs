//! Client layer: orchestrates transport calls and maps wire outcomes to typed results.

mod http;
mod otp;
mod sms;
mod template;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::domain::{ArgumentError, AuthKey, Envelope};
use crate::transport::{ApiFailure, FailureKind};

use self::http::{HttpRequest, HttpTransport, ReqwestTransport};

pub use otp::Otp;
pub use sms::Sms;
pub use template::Template;

/// Default root of the MSG91 v5 control API.
pub const DEFAULT_BASE_URL: &str = "https://control.msg91.com/api/v5";
/// Host serving the legacy OTP endpoints and the v2 `sendsms` endpoint.
pub const DEFAULT_LEGACY_URL: &str = "http://api.msg91.com";
/// Per-call budget applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Msg91Client`] operations.
///
/// Every failed call yields exactly one of these. API failures keep the HTTP status and the
/// response body (`details`) for logging or branching.
pub enum Msg91Error {
    /// A local precondition failed; nothing was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// MSG91 answered `401`.
    #[error("authentication failed (HTTP {status}): {message}")]
    Authentication {
        message: String,
        status: u16,
        details: Value,
    },

    /// MSG91 answered `400`, or marked the body `"type": "validation"`.
    #[error("validation failed (HTTP {status}): {message}")]
    Validation {
        message: String,
        status: u16,
        details: Value,
    },

    /// Any other unsuccessful response.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        message: String,
        status: u16,
        details: Value,
    },

    /// The request never completed (DNS, TLS, connection refused, timeout), or the HTTP
    /// client could not be built.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),
}

impl Msg91Error {
    /// HTTP status of an API failure; `None` for local and transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. }
            | Self::Validation { status, .. }
            | Self::Api { status, .. } => Some(*status),
            Self::InvalidArgument(_) | Self::Transport(_) => None,
        }
    }

    /// Response body of an API failure.
    pub fn details(&self) -> Option<&Value> {
        match self {
            Self::Authentication { details, .. }
            | Self::Validation { details, .. }
            | Self::Api { details, .. } => Some(details),
            Self::InvalidArgument(_) | Self::Transport(_) => None,
        }
    }

    /// Provider message of an API failure (or the operation's fallback message).
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Authentication { message, .. }
            | Self::Validation { message, .. }
            | Self::Api { message, .. } => Some(message.as_str()),
            Self::InvalidArgument(_) | Self::Transport(_) => None,
        }
    }
}

impl From<ApiFailure> for Msg91Error {
    fn from(failure: ApiFailure) -> Self {
        let ApiFailure {
            kind,
            message,
            status,
            details,
        } = failure;
        match kind {
            FailureKind::Authentication => Self::Authentication {
                message,
                status,
                details,
            },
            FailureKind::Validation => Self::Validation {
                message,
                status,
                details,
            },
            FailureKind::Api => Self::Api {
                message,
                status,
                details,
            },
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`Msg91Client`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct Msg91ClientBuilder {
    auth: AuthKey,
    base_url: String,
    legacy_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl Msg91ClientBuilder {
    /// Create a builder with the default endpoints and a 30 second timeout.
    pub fn new(auth: AuthKey) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            legacy_url: DEFAULT_LEGACY_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the v5 API root used by flow, report and template calls.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the host used by the OTP endpoints and the v2 `sendsms` endpoint.
    pub fn legacy_url(mut self, legacy_url: impl Into<String>) -> Self {
        self.legacy_url = legacy_url.into();
        self
    }

    /// Set the timeout applied to each request as a whole.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`Msg91Client`].
    pub fn build(self) -> Result<Msg91Client, Msg91Error> {
        let base_url = parse_root(&self.base_url)?;
        let legacy_url = parse_root(&self.legacy_url)?;

        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| Msg91Error::Transport(Box::new(err)))?;

        Ok(Msg91Client::with_transport(
            self.auth,
            base_url,
            legacy_url,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

#[derive(Clone)]
/// High-level MSG91 client.
///
/// Holds the auth key and endpoint configuration; every call builds its own request, so one
/// instance can be shared freely across tasks. Operations are grouped by resource:
/// [`Msg91Client::otp`], [`Msg91Client::sms`] and [`Msg91Client::template`].
pub struct Msg91Client {
    auth: AuthKey,
    base_url: Url,
    legacy_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for Msg91Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Msg91Client")
            .field("base_url", &self.base_url.as_str())
            .field("legacy_url", &self.legacy_url.as_str())
            .field("auth", &self.auth)
            .finish()
    }
}

impl Msg91Client {
    /// Create a client with the default endpoints and timeout.
    ///
    /// For more customization, use [`Msg91Client::builder`].
    pub fn new(auth: AuthKey) -> Result<Self, Msg91Error> {
        Self::builder(auth).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: AuthKey) -> Msg91ClientBuilder {
        Msg91ClientBuilder::new(auth)
    }

    fn with_transport(
        auth: AuthKey,
        base_url: Url,
        legacy_url: Url,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            auth,
            base_url,
            legacy_url,
            http,
        }
    }

    pub fn otp(&self) -> Otp<'_> {
        Otp::new(self)
    }

    pub fn sms(&self) -> Sms<'_> {
        Sms::new(self)
    }

    pub fn template(&self) -> Template<'_> {
        Template::new(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn legacy_url(&self) -> &Url {
        &self.legacy_url
    }

    fn legacy_endpoint(&self, path: &str, query: &[(String, String)]) -> Result<Url, Msg91Error> {
        let mut url = join_path(&self.legacy_url, path)?;
        append_query(&mut url, query);
        Ok(url)
    }

    fn api_endpoint(&self, path: &str, query: &[(String, String)]) -> Result<Url, Msg91Error> {
        let mut url = join_path(&self.base_url, path)?;
        append_query(&mut url, query);
        Ok(url)
    }

    /// Attach the `authkey` header expected by the JSON endpoints.
    fn authorized(&self, request: HttpRequest) -> HttpRequest {
        request.header(AuthKey::FIELD, self.auth.expose())
    }

    /// Issue one request and classify its outcome.
    ///
    /// `default_message` is reported when a failed response carries no usable `message`.
    async fn dispatch(
        &self,
        request: HttpRequest,
        default_message: &'static str,
    ) -> Result<Envelope, Msg91Error> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            method = ?request.method,
            path = request.url.path(),
            "sending MSG91 request"
        );

        let response = self.http.execute(request).await.map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "MSG91 request did not complete");
            Msg91Error::Transport(err)
        })?;

        let outcome =
            crate::transport::classify_response(response.status, &response.body, default_message);

        #[cfg(feature = "tracing")]
        match &outcome {
            Ok(_) => tracing::debug!(status = response.status, "MSG91 request succeeded"),
            Err(failure) => tracing::warn!(
                status = failure.status,
                kind = ?failure.kind,
                message = %failure.message,
                "MSG91 request failed"
            ),
        }

        outcome.map_err(Msg91Error::from)
    }
}

fn parse_root(input: &str) -> Result<Url, Msg91Error> {
    let invalid = || ArgumentError::InvalidUrl {
        input: input.to_owned(),
    };
    let url = Url::parse(input).map_err(|_| invalid())?;
    if url.cannot_be_a_base() {
        return Err(invalid().into());
    }
    Ok(url)
}

/// Join `path` below `base`, keeping every segment of `base` (`/api/v5` + `flow` gives
/// `/api/v5/flow`).
fn join_path(base: &Url, path: &str) -> Result<Url, Msg91Error> {
    let mut root = base.clone();
    if !root.path().ends_with('/') {
        let with_slash = format!("{}/", root.path());
        root.set_path(&with_slash);
    }
    root.join(path).map_err(|_| {
        ArgumentError::InvalidUrl {
            input: format!("{base}{path}"),
        }
        .into()
    })
}

fn append_query(url: &mut Url, query: &[(String, String)]) {
    if query.is_empty() {
        return;
    }
    url.query_pairs_mut()
        .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
}
