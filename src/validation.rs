//! Field validation for gateway request shapes.
//!
//! One function per request shape, each checking the gateway's static rules
//! and reporting the first violation with the offending wire field named.
//! The client takes validators as injected function values
//! (`Fn(&T) -> Result<(), ValidationError>`), so callers can substitute
//! stricter rule sets or a no-op for pre-validated input — the functions
//! here are the defaults.
//!
//! Validation is pure: no network or encoding side effects, so malformed
//! input never reaches the transport.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::types::{
    GatewayCallback, METADATA_EMAIL, METADATA_MOBILE, PaymentRequest, VerificationRequest,
};

/// Required length of a merchant identifier.
pub const MERCHANT_ID_LEN: usize = 36;

/// Required length of an authority token.
pub const AUTHORITY_LEN: usize = 36;

/// Minimum payment amount in Rial.
pub const MIN_AMOUNT: u64 = 1000;

/// Required length of the `mobile` metadata value.
const MOBILE_LEN: usize = 11;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

/// A request field that violated a validation rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    /// The offending field, named as it appears on the wire.
    pub field: &'static str,
    /// Why the field was rejected.
    pub reason: String,
}

impl ValidationError {
    /// Creates a new validation error for the given field.
    #[must_use]
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Validates a payment request (step 1).
///
/// # Errors
///
/// Returns the first violated rule: merchant id length, amount minimum,
/// blank description, malformed callback URL, or a bad `mobile`/`email`
/// metadata value. Unknown metadata keys are not rejected.
pub fn payment_request(request: &PaymentRequest) -> Result<(), ValidationError> {
    merchant_id(&request.merchant_id)?;
    amount(request.amount)?;

    if request.description.is_empty() {
        return Err(ValidationError::new("Description", "cannot be blank"));
    }

    if request.callback_url.is_empty() {
        return Err(ValidationError::new("CallbackURL", "cannot be blank"));
    }
    Url::parse(&request.callback_url)
        .map_err(|e| ValidationError::new("CallbackURL", format!("must be a valid URL: {e}")))?;

    if let Some(metadata) = &request.metadata {
        if let Some(mobile) = metadata.get(METADATA_MOBILE) {
            if mobile.chars().count() != MOBILE_LEN {
                return Err(ValidationError::new(
                    "Metadata",
                    format!("{METADATA_MOBILE} must be exactly {MOBILE_LEN} characters"),
                ));
            }
        }
        if let Some(email) = metadata.get(METADATA_EMAIL) {
            if !EMAIL_PATTERN.is_match(email) {
                return Err(ValidationError::new(
                    "Metadata",
                    format!("{METADATA_EMAIL} must be a valid email address"),
                ));
            }
        }
    }

    Ok(())
}

/// Validates the redirect parameters the gateway sends back (step 3).
///
/// # Errors
///
/// Returns an error when the status is anything other than the exact
/// literals `"OK"` or `"NOK"`, or when the authority token is malformed.
pub fn gateway_callback(callback: &GatewayCallback) -> Result<(), ValidationError> {
    if callback.status != "OK" && callback.status != "NOK" {
        return Err(ValidationError::new("Status", "invalid status"));
    }
    authority(&callback.authority)
}

/// Validates a verification request (step 3).
///
/// # Errors
///
/// Returns the first violated rule: merchant id length, amount minimum, or
/// a malformed authority token.
pub fn verification_request(request: &VerificationRequest) -> Result<(), ValidationError> {
    merchant_id(&request.merchant_id)?;
    amount(request.amount)?;
    authority(&request.authority)
}

fn merchant_id(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("MerchantID", "cannot be blank"));
    }
    if value.chars().count() != MERCHANT_ID_LEN {
        return Err(ValidationError::new(
            "MerchantID",
            format!("the length must be exactly {MERCHANT_ID_LEN}"),
        ));
    }
    Ok(())
}

fn amount(value: u64) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::new("Amount", "cannot be blank"));
    }
    if value < MIN_AMOUNT {
        return Err(ValidationError::new(
            "Amount",
            format!("must be no less than {MIN_AMOUNT}"),
        ));
    }
    Ok(())
}

fn authority(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("Authority", "cannot be blank"));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            "Authority",
            "must contain digits only",
        ));
    }
    if value.len() != AUTHORITY_LEN {
        return Err(ValidationError::new(
            "Authority",
            format!("the length must be exactly {AUTHORITY_LEN}"),
        ));
    }
    Ok(())
}
