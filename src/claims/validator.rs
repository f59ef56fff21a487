//! Claims validation policy and pipeline.
//!
//! A [`ValidationConfig`] is assembled once per call, either from an ordered
//! list of [`ValidationOption`]s or through the builder methods, and is
//! immutable afterwards. Validation runs the three temporal checks first
//! (each one a no-op when its claim is absent), then the opt-in checks in
//! registration order, and stops at the first failure.

use crate::claims::StandardClaims;
use crate::clock::{apply_skew, validate_timestamp_bounds, Clock};
use crate::error::{Error, Result};
use serde_json::Value;

/// A single configuration entry for claims validation.
///
/// Options are applied in order: `Clock` and `AcceptableSkew` are singleton
/// settings where the last entry wins, while the requirement options each
/// register an independent check, so the same kind may appear several times
/// (for example two `ClaimValue` entries for two different claim names).
#[derive(Debug, Clone)]
pub enum ValidationOption {
    /// Tolerance in seconds applied to every temporal comparison (default: 0)
    AcceptableSkew(u64),
    /// Clock supplying "now" (default: the system clock)
    Clock(Clock),
    /// Require the issuer (iss) to equal the given value
    Issuer(String),
    /// Require the subject (sub) to equal the given value
    Subject(String),
    /// Require the audience (aud) to contain the given value
    Audience(String),
    /// Require the named claim to equal the given value
    ClaimValue(String, Value),
    /// Run claims validation as part of parsing ([`crate::parse()`]).
    ///
    /// Consumed by the parse entry point; ignored by [`validate`] itself.
    Validate(bool),
}

/// An opt-in claim check, evaluated in registration order.
#[derive(Debug, Clone)]
enum ClaimCheck {
    Issuer(String),
    Subject(String),
    Audience(String),
    ClaimValue(String, Value),
}

impl ClaimCheck {
    fn evaluate<C: StandardClaims>(&self, claims: &C) -> Result<()> {
        match self {
            ClaimCheck::Issuer(expected) => match claims.issuer() {
                Some(iss) if iss == expected => Ok(()),
                found => Err(Error::TokenIssuerMismatch {
                    expected: expected.clone(),
                    found: found.map(str::to_string),
                }),
            },
            ClaimCheck::Subject(expected) => match claims.subject() {
                Some(sub) if sub == expected => Ok(()),
                found => Err(Error::TokenSubjectMismatch {
                    expected: expected.clone(),
                    found: found.map(str::to_string),
                }),
            },
            ClaimCheck::Audience(expected) => {
                let audience = claims.audience();
                if audience.iter().any(|aud| aud == expected) {
                    Ok(())
                } else {
                    Err(Error::TokenAudienceMismatch {
                        expected: expected.clone(),
                        found: audience.to_vec(),
                    })
                }
            }
            // An absent claim is a mismatch, even against an empty expected
            // value: equality is literal, never "claim must be absent".
            ClaimCheck::ClaimValue(name, expected) => match claims.claim(name) {
                Some(ref found) if found == expected => Ok(()),
                found => Err(Error::TokenClaimMismatch {
                    claim: name.clone(),
                    expected: expected.clone(),
                    found,
                }),
            },
        }
    }
}

/// Configuration for claims validation
///
/// Holds the effective clock, the acceptable skew, and the ordered list of
/// opt-in checks. Cloneable and immutable once built; concurrent validation
/// calls share nothing.
#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    clock: Clock,
    skew_seconds: u64,
    checks: Vec<ClaimCheck>,
}

impl ValidationConfig {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an ordered option list into a config.
    ///
    /// Later `Clock`/`AcceptableSkew` entries override earlier ones; the
    /// requirement options accumulate in order.
    pub fn from_options(options: impl IntoIterator<Item = ValidationOption>) -> Self {
        let mut config = Self::new();
        for option in options {
            match option {
                ValidationOption::AcceptableSkew(seconds) => config.skew_seconds = seconds,
                ValidationOption::Clock(clock) => config.clock = clock,
                ValidationOption::Issuer(expected) => {
                    config.checks.push(ClaimCheck::Issuer(expected));
                }
                ValidationOption::Subject(expected) => {
                    config.checks.push(ClaimCheck::Subject(expected));
                }
                ValidationOption::Audience(expected) => {
                    config.checks.push(ClaimCheck::Audience(expected));
                }
                ValidationOption::ClaimValue(name, expected) => {
                    config.checks.push(ClaimCheck::ClaimValue(name, expected));
                }
                // Belongs to the parse stage, not to validation.
                ValidationOption::Validate(_) => {}
            }
        }
        config
    }

    /// Set clock skew tolerance in seconds
    pub fn acceptable_skew(mut self, seconds: u64) -> Self {
        self.skew_seconds = seconds;
        self
    }

    /// Replace the clock supplying "now"
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Require a specific issuer
    pub fn require_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.checks.push(ClaimCheck::Issuer(issuer.into()));
        self
    }

    /// Require a specific subject
    pub fn require_subject(mut self, subject: impl Into<String>) -> Self {
        self.checks.push(ClaimCheck::Subject(subject.into()));
        self
    }

    /// Require the audience to contain a specific value
    pub fn require_audience(mut self, audience: impl Into<String>) -> Self {
        self.checks.push(ClaimCheck::Audience(audience.into()));
        self
    }

    /// Require a claim to equal a specific value
    pub fn require_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.checks
            .push(ClaimCheck::ClaimValue(name.into(), value.into()));
        self
    }

    /// Validate a claim set against this config.
    ///
    /// The temporal checks always run when their claim is present: expiration,
    /// not-before, issued-at, in that order. The clock is read once; the skew
    /// is applied identically in every comparison. The first failing check is
    /// returned and nothing after it runs.
    pub fn validate<C: StandardClaims>(&self, claims: &C) -> Result<()> {
        let now = self.clock.now();
        let skew = self.skew_seconds;

        if let Some(exp) = claims.expiration() {
            validate_timestamp_bounds(exp)?;
            // Acceptable until skew seconds past the stated expiration.
            if now > apply_skew(exp, skew, true)? {
                return Err(Error::TokenExpired {
                    expired_at: exp,
                    now,
                    skew,
                });
            }
        }

        if let Some(nbf) = claims.not_before() {
            validate_timestamp_bounds(nbf)?;
            // Accepted up to skew seconds ahead of the stated activation time.
            if now < apply_skew(nbf, skew, false)? {
                return Err(Error::TokenNotYetValid {
                    not_before: nbf,
                    now,
                    skew,
                });
            }
        }

        if let Some(iat) = claims.issued_at() {
            validate_timestamp_bounds(iat)?;
            // Issued further in the future than tolerance means clock or data
            // problems; mirrors the not-before comparison.
            if iat > apply_skew(now, skew, true)? {
                return Err(Error::TokenIssuedInFuture {
                    issued_at: iat,
                    now,
                    skew,
                });
            }
        }

        for check in &self.checks {
            check.evaluate(claims)?;
        }

        Ok(())
    }
}

/// Validate a claim set against an ordered list of options.
///
/// Equivalent to folding the options into a [`ValidationConfig`] and calling
/// [`ValidationConfig::validate`]. A [`ValidationOption::Validate`] entry is
/// ignored here; it only matters to [`crate::parse()`].
pub fn validate<C: StandardClaims>(
    claims: &C,
    options: impl IntoIterator<Item = ValidationOption>,
) -> Result<()> {
    ValidationConfig::from_options(options).validate(claims)
}
