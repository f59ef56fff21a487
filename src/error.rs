//! Errors for claimgate

use serde_json::Value;
use thiserror::Error;

/// Claimgate errors
///
/// Every policy violation is a distinct variant carrying the claim involved
/// and enough context (expected vs. actual) to format a useful message.
/// A violation is a final decision, never retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Temporal policy violations
    // ============================================================================
    #[error("Token expired at {expired_at} (now: {now}, skew: {skew}s)")]
    TokenExpired {
        expired_at: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token not valid until {not_before} (now: {now}, skew: {skew}s)")]
    TokenNotYetValid {
        not_before: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token issued in future at {issued_at} (now: {now}, skew: {skew}s)")]
    TokenIssuedInFuture { issued_at: i64, now: i64, skew: u64 },

    // ============================================================================
    // Identity and content policy violations
    // ============================================================================
    #[error("Token issuer mismatch: expected '{expected}', found {found:?}")]
    TokenIssuerMismatch {
        expected: String,
        found: Option<String>,
    },

    #[error("Token subject mismatch: expected '{expected}', found {found:?}")]
    TokenSubjectMismatch {
        expected: String,
        found: Option<String>,
    },

    #[error("Token audience mismatch: expected '{expected}', found {found:?}")]
    TokenAudienceMismatch {
        expected: String,
        found: Vec<String>,
    },

    #[error("Token claim '{claim}' mismatch: expected {expected}, found {found:?}")]
    TokenClaimMismatch {
        claim: String,
        expected: Value,
        found: Option<Value>,
    },

    // ============================================================================
    // Claim shape errors
    // ============================================================================
    #[error("Claim '{claim}' value is malformed: expected {expected}")]
    ClaimValueMalformed {
        claim: String,
        expected: &'static str,
    },

    #[error("Timestamp out of bounds: {value} (valid range: {min} to {max})")]
    TimestampOutOfBounds { value: i64, min: i64, max: i64 },

    #[error("Integer overflow in timestamp arithmetic")]
    TimestampOverflow,

    // ============================================================================
    // Format errors
    // ============================================================================
    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),
}

/// Result type alias for claimgate operations
pub type Result<T> = std::result::Result<T, Error>;
