#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async client for the ZarinPal online-payment gateway.
//!
//! ZarinPal payments are a three-step flow:
//!
//! 1. The merchant backend sends a [`PaymentRequest`](types::PaymentRequest)
//!    and receives an authority token ([`ZarinPal::request_payment`]).
//! 2. The payer is redirected to the gateway's start-pay page for that
//!    authority ([`ZarinPal::start_pay_url`]) and completes or cancels the
//!    payment there.
//! 3. The gateway redirects the payer back to the merchant's callback URL
//!    with a [`GatewayCallback`](types::GatewayCallback); the merchant then
//!    confirms the payment with a
//!    [`VerificationRequest`](types::VerificationRequest)
//!    ([`ZarinPal::verify_payment`]) and receives the settlement proof.
//!
//! Steps 1 and 3 are network calls made by this crate; step 2 happens in the
//! payer's browser. Every failure is classified by operation and phase with a
//! stable numeric code — see [`error`].
//!
//! # Modules
//!
//! - [`client`] — the [`ZarinPal`] gateway client and its configuration
//! - [`config`] — production/sandbox endpoint URLs
//! - [`error`] — operation/phase error taxonomy with numeric codes
//! - [`types`] — JSON wire types for both operations
//! - [`validation`] — field validation rules, injectable into the client
//!
//! # Example
//!
//! ```no_run
//! use zarinpal::types::PaymentRequest;
//! use zarinpal::{ZarinPal, validation};
//!
//! # async fn run() -> Result<(), zarinpal::Error> {
//! let client = ZarinPal::new("xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx", false);
//!
//! let request = PaymentRequest {
//!     merchant_id: client.merchant_id().to_owned(),
//!     amount: 10_000,
//!     description: "order #4721".to_owned(),
//!     callback_url: "https://shop.example/zarinpal/callback".to_owned(),
//!     metadata: None,
//! };
//!
//! let response = client
//!     .request_payment(&request, validation::payment_request)
//!     .await?;
//!
//! // Redirect the payer to:
//! let _link = client.start_pay_url(&response.authority);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod validation;

pub use client::{ClientConfig, ZarinPal};
pub use config::Endpoints;
pub use error::{Error, Operation, Phase};
pub use validation::ValidationError;
