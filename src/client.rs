//! The gateway client for the two-phase payment protocol.
//!
//! [`ZarinPal`] runs the same six-phase pipeline for both operations —
//! validate, encode, build, send, read, decode — and maps the first failing
//! phase to a classified [`Error`]. The client is stateless after
//! construction: the endpoint set is resolved once, every call is a single
//! bounded network round trip, and a shared instance is safe to use
//! concurrently.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Endpoints;
use crate::error::{Error, Operation, Phase};
use crate::types::{PaymentRequest, PaymentResponse, VerificationRequest, VerificationResponse};
use crate::validation::ValidationError;

/// Default per-call timeout. On expiry the call fails with the transport
/// classification rather than hanging.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`ZarinPal`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Selects the sandbox endpoint set instead of production.
    pub sandbox: bool,

    /// Per-call HTTP timeout.
    pub timeout: Duration,

    /// Optional pre-configured reqwest client. If `None`, a new client is
    /// built with the configured timeout.
    pub http_client: Option<reqwest::Client>,

    /// Optional endpoint override, taking precedence over the sandbox flag.
    pub endpoints: Option<Endpoints>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            sandbox: false,
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
            endpoints: None,
        }
    }
}

impl ClientConfig {
    /// Creates a config for the given environment.
    #[must_use]
    pub fn new(sandbox: bool) -> Self {
        Self {
            sandbox,
            ..Self::default()
        }
    }

    /// Sets the per-call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Overrides the endpoint set, e.g. to point at a mock gateway.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }
}

/// Async ZarinPal gateway client.
///
/// Cheap to clone; clones share the underlying connection pool. See the
/// [crate docs](crate) for the full three-step flow.
#[derive(Debug, Clone)]
pub struct ZarinPal {
    merchant_id: String,
    endpoints: Endpoints,
    http: reqwest::Client,
}

impl ZarinPal {
    /// Creates a client for the given merchant with default configuration.
    #[must_use]
    pub fn new(merchant_id: impl Into<String>, sandbox: bool) -> Self {
        Self::with_config(merchant_id, ClientConfig::new(sandbox))
    }

    /// Creates a client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying TLS backend cannot be initialized.
    #[must_use]
    pub fn with_config(merchant_id: impl Into<String>, config: ClientConfig) -> Self {
        let endpoints = config
            .endpoints
            .unwrap_or_else(|| Endpoints::new(config.sandbox));
        let http = config.http_client.unwrap_or_else(|| {
            reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .expect("failed to build reqwest::Client")
        });

        Self {
            merchant_id: merchant_id.into(),
            endpoints,
            http,
        }
    }

    /// Returns the merchant identifier this client was built with.
    #[must_use]
    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    /// Returns the resolved endpoint set.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Returns the page the payer should be redirected to for the authority
    /// token obtained from [`Self::request_payment`] (step 2).
    #[must_use]
    pub fn start_pay_url(&self, authority: &str) -> String {
        self.endpoints.start_pay(authority)
    }

    /// Requests a payment session from the gateway (step 1).
    ///
    /// On success returns the gateway's status and the authority token that
    /// correlates the remaining steps. The status is returned as-is; the
    /// caller decides what [`STATUS_OK`](crate::types::STATUS_OK) means.
    ///
    /// The validator runs before anything touches the network;
    /// [`validation::payment_request`](crate::validation::payment_request)
    /// is the default rule set.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] classified as [`Operation::Payment`] with the
    /// first failing [`Phase`] (codes 10–15).
    pub async fn request_payment<V>(
        &self,
        request: &PaymentRequest,
        validator: V,
    ) -> Result<PaymentResponse, Error>
    where
        V: Fn(&PaymentRequest) -> Result<(), ValidationError>,
    {
        self.call(
            Operation::Payment,
            &self.endpoints.payment_url,
            request,
            validator,
        )
        .await
    }

    /// Confirms a completed payment with the gateway (step 3).
    ///
    /// The request carries the original amount plus the authority token from
    /// steps 1 and 3. Statuses [`STATUS_OK`](crate::types::STATUS_OK) and
    /// [`STATUS_ALREADY_VERIFIED`](crate::types::STATUS_ALREADY_VERIFIED)
    /// both denote a verified transaction;
    /// [`validation::verification_request`](crate::validation::verification_request)
    /// is the default rule set.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] classified as [`Operation::Verification`] with
    /// the first failing [`Phase`] (codes 30–35).
    pub async fn verify_payment<V>(
        &self,
        request: &VerificationRequest,
        validator: V,
    ) -> Result<VerificationResponse, Error>
    where
        V: Fn(&VerificationRequest) -> Result<(), ValidationError>,
    {
        self.call(
            Operation::Verification,
            &self.endpoints.verification_url,
            request,
            validator,
        )
        .await
    }

    /// Runs the six-phase pipeline shared by both operations.
    ///
    /// The HTTP status is not inspected: the gateway reports failures in the
    /// JSON body, so a non-2xx response surfaces at the decode phase unless
    /// its body matches the wire shape.
    async fn call<Req, Resp, V>(
        &self,
        operation: Operation,
        url: &str,
        request: &Req,
        validator: V,
    ) -> Result<Resp, Error>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
        V: Fn(&Req) -> Result<(), ValidationError>,
    {
        validator(request).map_err(|e| Error::new(operation, Phase::Validation, e))?;

        let body =
            serde_json::to_vec(request).map_err(|e| Error::new(operation, Phase::Encode, e))?;

        let outbound = self
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .build()
            .map_err(|e| Error::new(operation, Phase::BuildRequest, e))?;

        debug!(%operation, url, "sending gateway request");

        let response = self
            .http
            .execute(outbound)
            .await
            .map_err(|e| Error::new(operation, Phase::Transport, e))?;

        let status = response.status();

        // bytes() consumes the body in full, releasing the connection back
        // to the pool on both the success and the error path below.
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::new(operation, Phase::ReadBody, e))?;

        debug!(
            %operation,
            status = status.as_u16(),
            body_len = bytes.len(),
            "gateway responded"
        );

        serde_json::from_slice(&bytes).map_err(|e| Error::new(operation, Phase::Decode, e))
    }
}
