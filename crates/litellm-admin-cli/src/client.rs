//! Session configuration, error types, and the authenticated HTTP transport.

use std::error::Error as StdError;
use std::fmt::{self, Debug, Formatter};

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::cli::OutputFormat;

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";
pub(crate) const ENV_BASE_URL: &str = "LITELLM_API_BASE";
pub(crate) const ENV_MASTER_KEY: &str = "LITELLM_MASTER_KEY";
pub(crate) const ENV_INSECURE: &str = "LITELLM_INSECURE";

const CONTENT_TYPE_JSON: &str = "application/json";

/// Failures raised by [`AdminClient`].
#[derive(Debug, Error)]
pub(crate) enum ClientError {
    /// The gateway answered with a non-2xx status.
    #[error("API Error: {status} - {body}")]
    Api { status: u16, body: String },
    /// The request never produced a response (DNS, refused connection, TLS).
    #[error("request to {path} failed")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// A 2xx response whose body did not match the expected shape.
    #[error("failed to decode response from {path}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),
}

/// Convenience alias for transport results.
pub(crate) type ClientResult<T> = Result<T, ClientError>;

/// CLI-level error type. Every variant maps to exit code 1.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Failure(#[from] anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Validation(_) | Self::Client(_) | Self::Failure(_) => 1,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Config(message) | Self::Validation(message) => message.clone(),
            Self::Client(ClientError::Api { .. }) => self.to_string(),
            Self::Client(error) => error_chain(error),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Immutable per-invocation settings, validated before any request is built.
#[derive(Clone)]
pub(crate) struct SessionConfig {
    pub(crate) base_url: String,
    pub(crate) master_key: String,
    pub(crate) verify_tls: bool,
    pub(crate) output: OutputFormat,
    pub(crate) request_id: String,
}

impl SessionConfig {
    /// Validate the raw connection settings.
    ///
    /// Both the base URL and the master key must be present and non-blank; the
    /// base URL must also parse as an absolute URL.
    pub(crate) fn new(
        base_url: Option<&str>,
        master_key: Option<&str>,
        verify_tls: bool,
        output: OutputFormat,
        request_id: String,
    ) -> CliResult<Self> {
        let base_url = base_url.map(str::trim).filter(|value| !value.is_empty());
        let master_key = master_key.map(str::trim).filter(|value| !value.is_empty());
        let (Some(base_url), Some(master_key)) = (base_url, master_key) else {
            return Err(CliError::config(format!(
                "{ENV_BASE_URL} and {ENV_MASTER_KEY} are required \
                 (set them as environment variables or pass --base-url and --master-key)"
            )));
        };

        parse_url(base_url).map_err(CliError::config)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            master_key: master_key.to_string(),
            verify_tls,
            output,
            request_id,
        })
    }
}

impl Debug for SessionConfig {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SessionConfig")
            .field("base_url", &self.base_url)
            .field("master_key", &"<redacted>")
            .field("verify_tls", &self.verify_tls)
            .field("output", &self.output)
            .field("request_id", &self.request_id)
            .finish()
    }
}

/// Parse the gateway URL provided to the CLI.
pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}

/// Decode a response that was fetched as raw JSON into a typed view of it.
pub(crate) fn decode<T: DeserializeOwned>(path: &str, value: &Value) -> ClientResult<T> {
    T::deserialize(value).map_err(|source| ClientError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Whether `LITELLM_INSECURE=1` asks for TLS verification to be skipped.
#[must_use]
pub(crate) fn insecure_from_env() -> bool {
    std::env::var(ENV_INSECURE).is_ok_and(|value| value.trim() == "1")
}

/// Bearer-authenticated JSON transport for the gateway admin API.
///
/// Every request carries `Authorization: Bearer <master key>` and
/// `Content-Type: application/json`. Non-2xx answers become
/// [`ClientError::Api`] with the status and raw body; nothing is retried.
pub(crate) struct AdminClient {
    http: Client,
    base_url: String,
    master_key: String,
}

impl AdminClient {
    pub(crate) fn new(config: &SessionConfig) -> ClientResult<Self> {
        let mut default_headers = HeaderMap::new();
        if let Ok(request_id) = HeaderValue::from_str(&config.request_id) {
            default_headers.insert(HEADER_REQUEST_ID, request_id);
        }

        let mut builder = Client::builder().default_headers(default_headers);
        if !config.verify_tls {
            tracing::warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build().map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            master_key: config.master_key.clone(),
        })
    }

    /// Issue a GET request with the supplied query parameters.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let request = self.request(Method::GET, path).query(query);
        self.send(path, request).await
    }

    /// Issue a POST request with a JSON body.
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path).json(body);
        self.send(path, request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        self.http
            .request(method, url)
            .bearer_auth(&self.master_key)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        tracing::debug!(path, "sending request");
        let transport = |source| ClientError::Transport {
            path: path.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        tracing::debug!(path, status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
pub(crate) const TEST_MASTER_KEY: &str = "sk-master";

#[cfg(test)]
pub(crate) fn test_client(base_url: &str) -> AdminClient {
    let config = SessionConfig::new(
        Some(base_url),
        Some(TEST_MASTER_KEY),
        true,
        OutputFormat::Json,
        "test-request".to_string(),
    )
    .expect("valid session config");
    AdminClient::new(&config).expect("client should build")
}

/// Number of requests a mock has served.
#[cfg(test)]
#[allow(deprecated)]
pub(crate) fn request_count(mock: &httpmock::Mock<'_>) -> usize {
    mock.hits()
}
