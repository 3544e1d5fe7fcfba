//! ZeroBounce async client implementation.

use crate::{Error, Result, ValidationResult};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const V1_BASE_URL: &str = "https://api.zerobounce.net/v1";
const V2_BASE_URL: &str = "https://api.zerobounce.net/v2";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const SUB_STATUS_TIMEOUT: &str = "timeout_exceeded";
const SUB_STATUS_EXCEPTION: &str = "exception_occurred";

/// ZeroBounce API revision targeted by a [`Client`].
///
/// The two revisions expose the same operations but differ in base URL,
/// validate endpoint naming, query parameter casing, and which
/// [`ValidationResult`] fields the service populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// Legacy v1 API: `/validate` plus a separate `/validatewithip`
    /// endpoint, `apikey`/`ipAddress` parameter naming.
    V1,
    /// Current v2 API: one `/validate` endpoint with an optional
    /// `ip_address` parameter.
    #[default]
    V2,
}

impl ApiVersion {
    fn default_base_url(self) -> &'static str {
        match self {
            ApiVersion::V1 => V1_BASE_URL,
            ApiVersion::V2 => V2_BASE_URL,
        }
    }
}

/// Async client for the ZeroBounce email validation service.
///
/// Use [`Client::new`] for defaults (v2 API, 30 second timeout) or
/// [`Client::builder`] for custom settings like the request timeout or a
/// different API revision.
///
/// The client is stateless after construction and safe to share across
/// tasks; the underlying connection pool is reused between calls.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    version: ApiVersion,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a new ZeroBounce client with default settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use zerobounce_client::Client;
    /// # fn main() -> Result<(), zerobounce_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Get the API revision this client targets.
    pub fn api_version(&self) -> ApiVersion {
        self.version
    }

    /// Fetch the number of credits remaining on the account.
    ///
    /// Unlike [`validate`](Client::validate) this call has no degraded
    /// fallback: a non-2xx status, a transport failure, or a response
    /// without a usable `Credits` field all surface as errors, because a
    /// credits check is a precondition the caller needs to know failed.
    ///
    /// # Examples
    /// ```no_run
    /// # use zerobounce_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), zerobounce_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// let credits = client.get_credits().await?;
    /// println!("{credits} credits left");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_credits(&self) -> Result<u64> {
        let url = format!("{}/getcredits", self.base_url);
        debug!(url = %url, "GET getcredits");

        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::RequestFailed { status, body });
        }

        credits_from_json(&serde_json::from_str(&body)?)
    }

    /// Validate a single email address, optionally with the submitting IP
    /// address for geolocation enrichment.
    ///
    /// The email is not checked locally; the service performs all semantic
    /// validation. When `ip` is `None` the IP parameter is omitted from the
    /// request entirely and the IP-derived fields of the result stay `None`.
    ///
    /// A non-2xx status is returned as [`Error::RequestFailed`]. Every other
    /// failure (timeout, connection error, undecodable body) yields a
    /// degraded [`ValidationResult`] with `status` `"Unknown"` and
    /// `sub_status` `"timeout_exceeded"` or `"exception_occurred"`, so that
    /// a batch of validations does not abort on one bad lookup.
    ///
    /// # Examples
    /// ```no_run
    /// # use zerobounce_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), zerobounce_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// let result = client.validate("flossie@example.com", None).await?;
    /// println!("{:?} ({:?})", result.status, result.sub_status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn validate(&self, email: &str, ip: Option<&str>) -> Result<ValidationResult> {
        let (url, params) = self.validate_request_parts(email, ip);
        debug!(url = %url, email, "GET validate");

        let response = match self.http.get(&url).query(&params).send().await {
            Ok(response) => response,
            Err(err) => return Ok(degrade(email, &err)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RequestFailed { status, body });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return Ok(degrade(email, &err)),
        };

        match serde_json::from_str::<Value>(&body) {
            Ok(json) => Ok(ValidationResult::from_json(&json, self.version)),
            Err(err) => {
                warn!(email, %err, "undecodable validate response, degrading");
                Ok(ValidationResult::degraded(email, SUB_STATUS_EXCEPTION))
            }
        }
    }

    /// Endpoint URL and query parameters for a validate call, per revision.
    fn validate_request_parts(
        &self,
        email: &str,
        ip: Option<&str>,
    ) -> (String, Vec<(&'static str, String)>) {
        match self.version {
            ApiVersion::V2 => {
                let mut params = vec![
                    ("api_key", self.api_key.clone()),
                    ("email", email.to_string()),
                ];
                if let Some(ip) = ip {
                    params.push(("ip_address", ip.to_string()));
                }
                (format!("{}/validate", self.base_url), params)
            }
            ApiVersion::V1 => {
                let mut params = vec![
                    ("apikey", self.api_key.clone()),
                    ("email", email.to_string()),
                ];
                let endpoint = match ip {
                    Some(ip) => {
                        params.push(("ipAddress", ip.to_string()));
                        "validatewithip"
                    }
                    None => "validate",
                };
                (format!("{}/{}", self.base_url, endpoint), params)
            }
        }
    }
}

/// Convert a validate-call transport error into the degraded result shape.
fn degrade(email: &str, err: &reqwest::Error) -> ValidationResult {
    let sub_status = if err.is_timeout() {
        SUB_STATUS_TIMEOUT
    } else {
        SUB_STATUS_EXCEPTION
    };
    warn!(email, %err, sub_status, "validate call failed, degrading");
    ValidationResult::degraded(email, sub_status)
}

/// Extract the `Credits` count, tolerating the number-or-string encodings
/// the service has used over time.
fn credits_from_json(body: &Value) -> Result<u64> {
    match body.get("Credits") {
        Some(Value::Number(n)) => n
            .as_u64()
            .ok_or_else(|| Error::ResponseParse(format!("non-integer Credits value: {n}"))),
        Some(Value::String(s)) => s
            .parse()
            .map_err(|_| Error::ResponseParse(format!("non-numeric Credits value: {s:?}"))),
        _ => Err(Error::ResponseParse("missing Credits field".to_string())),
    }
}

/// Builder for configuring a ZeroBounce client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: Option<String>,
    timeout: Duration,
    version: ApiVersion,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - v2 API
    /// - 30 second request timeout
    /// - Official ZeroBounce base URL for the selected revision
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            version: ApiVersion::default(),
        }
    }

    /// Set the total request timeout (default: 30 seconds).
    ///
    /// This is the only cancellation mechanism: a validate call that
    /// exceeds it returns the degraded timeout result, a credits call
    /// returns an error.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Target a specific API revision (default: [`ApiVersion::V2`]).
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Override the base URL.
    ///
    /// Useful for testing against a local mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(Client {
            http,
            api_key: self.api_key,
            base_url: self
                .base_url
                .unwrap_or_else(|| self.version.default_base_url().to_string()),
            version: self.version,
        })
    }
}
