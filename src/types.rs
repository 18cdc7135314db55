//! JSON wire types for the ZarinPal payment protocol.
//!
//! Field names on the wire are PascalCase and must be preserved verbatim for
//! compatibility with the gateway; every struct maps them explicitly with
//! `#[serde(rename = "...")]`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Gateway status denoting a successful request or a verified transaction.
pub const STATUS_OK: i64 = 100;

/// Verification status for a transaction that was already verified.
///
/// The gateway treats 100 and 101 both as verified; it does not document any
/// further difference, and this crate does not infer one.
pub const STATUS_ALREADY_VERIFIED: i64 = 101;

/// Metadata key for the payer's mobile number (exactly 11 characters).
pub const METADATA_MOBILE: &str = "mobile";

/// Metadata key for the payer's email address.
pub const METADATA_EMAIL: &str = "email";

/// Payment request sent to the gateway (step 1).
///
/// # JSON Format
///
/// ```json
/// {
///   "MerchantID": "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx",
///   "Amount": 10000,
///   "Description": "order #4721",
///   "CallbackURL": "https://shop.example/zarinpal/callback",
///   "Metadata": { "mobile": "09111111111", "email": "payer@example.com" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Merchant account identifier, exactly 36 characters. Opaque — the
    /// gateway assigns it and this crate never parses it.
    #[serde(rename = "MerchantID")]
    pub merchant_id: String,

    /// Amount in Rial (the minor currency unit). Minimum 1000.
    #[serde(rename = "Amount")]
    pub amount: u64,

    /// Human-readable description shown on the gateway page.
    #[serde(rename = "Description")]
    pub description: String,

    /// URL the gateway redirects the payer back to after payment.
    #[serde(rename = "CallbackURL")]
    pub callback_url: String,

    /// Optional extra payer details. Only the [`METADATA_MOBILE`] and
    /// [`METADATA_EMAIL`] keys are validated; unknown keys pass through.
    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// Gateway response to a payment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// Gateway status; [`STATUS_OK`] means the request was accepted.
    /// The client returns the value as-is and never branches on it.
    #[serde(rename = "Status")]
    pub status: i64,

    /// 36-digit authority token correlating the remaining steps.
    #[serde(rename = "Authority")]
    pub authority: String,
}

/// Parameters the gateway attaches when redirecting the payer back (step 3).
///
/// Not constructed by this crate — the merchant's web layer receives it on
/// the callback URL. Its validation rule lives in
/// [`validation::gateway_callback`](crate::validation::gateway_callback).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayCallback {
    /// `"OK"` for a completed payment, `"NOK"` for failure or cancellation.
    #[serde(rename = "Status")]
    pub status: String,

    /// The authority token from step 1.
    #[serde(rename = "Authority")]
    pub authority: String,
}

/// Verification request sent to the gateway after the callback (step 3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// Merchant account identifier, exactly 36 characters.
    #[serde(rename = "MerchantID")]
    pub merchant_id: String,

    /// Amount in Rial; must match the original request's amount exactly.
    #[serde(rename = "Amount")]
    pub amount: u64,

    /// The 36-digit authority token received in step 1.
    #[serde(rename = "Authority")]
    pub authority: String,
}

/// Gateway response to a verification request — the settlement proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResponse {
    /// Gateway status; [`STATUS_OK`] and [`STATUS_ALREADY_VERIFIED`] both
    /// denote a verified transaction.
    #[serde(rename = "Status")]
    pub status: i64,

    /// The gateway's transaction reference identifier.
    #[serde(rename = "RefID")]
    pub ref_id: i64,

    /// Masked card number the payer paid with.
    #[serde(rename = "CardPan")]
    pub card_pan: String,

    /// Hash of the payer's card number.
    #[serde(rename = "CardHash")]
    pub card_hash: String,

    /// Fee model applied to the transaction.
    #[serde(rename = "FeeType")]
    pub fee_type: String,

    /// Fee charged, in Rial.
    #[serde(rename = "Fee")]
    pub fee: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_request_wire_names() {
        let request = PaymentRequest {
            merchant_id: "m".repeat(36),
            amount: 10_000,
            description: "order #4721".to_owned(),
            callback_url: "https://shop.example/callback".to_owned(),
            metadata: Some(HashMap::from([(
                METADATA_MOBILE.to_owned(),
                "09111111111".to_owned(),
            )])),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["MerchantID"], "m".repeat(36));
        assert_eq!(value["Amount"], 10_000);
        assert_eq!(value["Description"], "order #4721");
        assert_eq!(value["CallbackURL"], "https://shop.example/callback");
        assert_eq!(value["Metadata"]["mobile"], "09111111111");
    }

    #[test]
    fn payment_request_omits_absent_metadata() {
        let request = PaymentRequest {
            merchant_id: "m".repeat(36),
            amount: 10_000,
            description: "order".to_owned(),
            callback_url: "https://shop.example/callback".to_owned(),
            metadata: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("Metadata").is_none());
    }

    #[test]
    fn payment_response_decodes_gateway_json() {
        let authority = "0".repeat(36);
        let json = format!(r#"{{"Status":100,"Authority":"{authority}"}}"#);
        let response: PaymentResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.status, STATUS_OK);
        assert_eq!(response.authority, authority);
    }

    #[test]
    fn verification_request_roundtrip() {
        let original = VerificationRequest {
            merchant_id: "m".repeat(36),
            amount: 10_000,
            authority: "1".repeat(36),
        };
        let value = serde_json::to_value(&original).unwrap();
        assert_eq!(value["MerchantID"], "m".repeat(36));
        assert_eq!(value["Amount"], 10_000);
        assert_eq!(value["Authority"], "1".repeat(36));

        let decoded: VerificationRequest = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn verification_response_decodes_gateway_json() {
        let json = r#"{
            "Status": 101,
            "RefID": 201785960,
            "CardPan": "502229******1234",
            "CardHash": "1EBE3EBEBE35C7EC0F8D6EE4F2F859107A87822CA179BC9528767EA7B5489B69",
            "FeeType": "Merchant",
            "Fee": 1200
        }"#;
        let response: VerificationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, STATUS_ALREADY_VERIFIED);
        assert_eq!(response.ref_id, 201_785_960);
        assert_eq!(response.card_pan, "502229******1234");
        assert_eq!(response.fee_type, "Merchant");
        assert_eq!(response.fee, 1200);
    }
}
