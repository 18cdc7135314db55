//! Error taxonomy for gateway operations.
//!
//! Every failure carries the [`Operation`] it occurred in and the [`Phase`]
//! that failed, so callers can branch on the failing phase without matching
//! message text. [`Error::code`] derives the historical numeric code space:
//! payment failures occupy 10–15 and verification failures 30–35, phase
//! order validation / encode / build / transport / read / decode.

use std::fmt;

/// Which gateway operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// The payment-request operation (step 1).
    Payment,
    /// The verification operation (step 3).
    Verification,
}

impl Operation {
    /// Base of this operation's code decade.
    const fn code_base(self) -> u8 {
        match self {
            Self::Payment => 10,
            Self::Verification => 30,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payment => f.write_str("payment"),
            Self::Verification => f.write_str("verification"),
        }
    }
}

/// Which phase of an operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Request validation rejected the input; nothing was sent.
    Validation,
    /// Encoding the request body to JSON failed.
    Encode,
    /// Constructing the outbound HTTP request failed.
    BuildRequest,
    /// Sending the request failed (DNS, connection refused, timeout, TLS).
    Transport,
    /// Reading the response body failed (truncated or interrupted read).
    ReadBody,
    /// Decoding the response body into the wire shape failed.
    Decode,
}

impl Phase {
    /// Offset of this phase within an operation's code decade.
    const fn code_offset(self) -> u8 {
        match self {
            Self::Validation => 0,
            Self::Encode => 1,
            Self::BuildRequest => 2,
            Self::Transport => 3,
            Self::ReadBody => 4,
            Self::Decode => 5,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => f.write_str("validation"),
            Self::Encode => f.write_str("request encode"),
            Self::BuildRequest => f.write_str("request build"),
            Self::Transport => f.write_str("send"),
            Self::ReadBody => f.write_str("response read"),
            Self::Decode => f.write_str("response decode"),
        }
    }
}

/// A classified gateway client failure.
///
/// Display includes the numeric code, the operation, the phase, and the
/// underlying cause's text, e.g.
/// `zarinpal error 13: payment send: error sending request`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("zarinpal error {}: {operation} {phase}: {message}", self.code())]
pub struct Error {
    /// The operation that failed.
    pub operation: Operation,
    /// The phase that failed.
    pub phase: Phase,
    /// The underlying cause's description.
    pub message: String,
}

impl Error {
    /// Creates an error for the given operation and phase, wrapping the
    /// underlying cause's text.
    #[must_use]
    pub fn new(operation: Operation, phase: Phase, cause: impl fmt::Display) -> Self {
        Self {
            operation,
            phase,
            message: cause.to_string(),
        }
    }

    /// Numeric failure code: the operation's decade plus the phase offset.
    #[must_use]
    pub const fn code(&self) -> u8 {
        self.operation.code_base() + self.phase.code_offset()
    }
}
