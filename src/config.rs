//! Gateway endpoint configuration.
//!
//! ZarinPal publishes two fixed endpoint sets — production and sandbox —
//! each consisting of a payment-request URL, a start-pay base URL (the page
//! the payer is redirected to), and a verification URL. [`Endpoints`] is the
//! resolved triple, selected once at client construction and held immutably
//! for the client's lifetime.

/// Production payment-request endpoint.
pub const API_PAYMENT_URL: &str = "https://api.zarinpal.com/pg/v4/payment/request.json";

/// Production start-pay base URL; the authority token is appended to it.
pub const API_START_PAY_URL: &str = "https://zarinpal.com/pg/StartPay/";

/// Production verification endpoint.
pub const API_VERIFICATION_URL: &str = "https://api.zarinpal.com/pg/v4/payment/verify.json";

/// Sandbox payment-request endpoint (legacy WebGate path).
pub const SANDBOX_PAYMENT_URL: &str =
    "https://sandbox.zarinpal.com/pg/rest/WebGate/PaymentRequest.json";

/// Sandbox start-pay base URL.
pub const SANDBOX_START_PAY_URL: &str = "https://sandbox.zarinpal.com/pg/StartPay/";

/// Sandbox verification endpoint (legacy WebGate path).
pub const SANDBOX_VERIFICATION_URL: &str =
    "https://sandbox.zarinpal.com/pg/rest/WebGate/PaymentVerification.json";

/// The three gateway URLs a client needs.
///
/// Built from a sandbox flag via [`Endpoints::new`]. The fields are public so
/// tests and self-hosted mirrors can substitute their own URLs through
/// [`ClientConfig::with_endpoints`](crate::client::ClientConfig::with_endpoints).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Payment-request endpoint (operation 1).
    pub payment_url: String,

    /// Start-pay base URL; [`Endpoints::start_pay`] appends the authority.
    pub start_pay_url: String,

    /// Verification endpoint (operation 2).
    pub verification_url: String,
}

impl Endpoints {
    /// Resolves the endpoint set for the given environment.
    #[must_use]
    pub fn new(sandbox: bool) -> Self {
        if sandbox {
            Self {
                payment_url: SANDBOX_PAYMENT_URL.to_owned(),
                start_pay_url: SANDBOX_START_PAY_URL.to_owned(),
                verification_url: SANDBOX_VERIFICATION_URL.to_owned(),
            }
        } else {
            Self {
                payment_url: API_PAYMENT_URL.to_owned(),
                start_pay_url: API_START_PAY_URL.to_owned(),
                verification_url: API_VERIFICATION_URL.to_owned(),
            }
        }
    }

    /// Returns the page the payer is sent to for the given authority token.
    #[must_use]
    pub fn start_pay(&self, authority: &str) -> String {
        format!("{}{authority}", self.start_pay_url)
    }
}
