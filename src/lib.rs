//! # claimgate - Policy-Driven JWT Claims Validation
//!
//! > Minimal validation of decoded JWT claim sets against a configurable policy.
//!
//! **claimgate** is the claims-validation half of a token-handling stack: it
//! assumes a claim set has already been decoded and materialized in memory
//! (signature verification, key management, and the wire format belong to the
//! decoding side) and answers one question: does this claim set satisfy the
//! caller's policy?
//!
//! ## Overview
//!
//! A policy is an ordered list of [`ValidationOption`]s. The three temporal
//! checks (expiration, not-before, issued-at) always run when their claim is
//! present; everything else is opt-in. All temporal comparisons share a single
//! acceptable-skew tolerance and a single [`Clock`] reading, and the clock is
//! injectable, so validation is deterministic under test and trivially
//! parallel-safe. Checks run in a fixed order (expiration, not-before,
//! issued-at, then the opt-in checks in the order their options were supplied)
//! and evaluation stops at the first failure. Validation failures are binary
//! gate conditions, so the first violated policy is all the caller needs.
//!
//! ## Quick Start
//!
//! ```ignore
//! use claimgate::{validate, ClaimSet, ValidationOption};
//!
//! let mut claims = ClaimSet::new();
//! claims.set_claim("iss", "https://trusted.com")?;
//! claims.set_claim("exp", 1_700_003_600)?;
//!
//! validate(&claims, [
//!     ValidationOption::Issuer("https://trusted.com".into()),
//!     ValidationOption::AcceptableSkew(60),
//! ])?;
//! ```
//!
//! ## Validation Flow
//!
//! ```text
//! options (ordered)
//!     │ fold, last write wins for clock/skew
//!     ▼
//! ValidationConfig (immutable per call)
//!     │ exp → nbf → iat → opt-in checks, in registration order
//!     ▼
//! Ok(()) or the first failure
//! ```
//!
//! ## Options
//!
//! - `AcceptableSkew(seconds)` - tolerance applied symmetrically to every
//!   temporal comparison (default: 0)
//! - `Clock(clock)` - replace the system clock ([`Clock::Fixed`] or
//!   [`Clock::from_fn`] for deterministic tests)
//! - `Issuer(value)` / `Subject(value)` - exact, case-sensitive equality on
//!   the `iss` / `sub` claim
//! - `Audience(value)` - the `aud` sequence must contain the value exactly
//! - `ClaimValue(name, value)` - exact equality on any named claim; may be
//!   given several times for different names
//! - `Validate(flag)` - consumed by [`parse()`]; parsing and validation are
//!   orthogonal stages composed by that entry point
//!
//! ## Claim Container
//!
//! [`ClaimSet`] stores the registered claims (`iss`, `sub`, `aud`, `exp`,
//! `nbf`, `iat`, `jti`) in typed fields and everything else in a custom claim
//! map. Values are type-checked on the way in, so a malformed shape (say, a
//! number where the audience sequence belongs) is rejected as
//! [`Error::ClaimValueMalformed`] before validation ever runs. The pipeline
//! itself is generic over the read-only [`StandardClaims`] trait.
//!
//! ## References
//!
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) - JSON Web Token (JWT)
//! - [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1) - Registered Claim Names

// Internal modules
pub(crate) mod claims;
pub(crate) mod clock;
pub(crate) mod parse;

mod error;

// Public interface
pub use claims::{validate, ClaimSet, StandardClaims, ValidationConfig, ValidationOption};
pub use clock::Clock;
pub use error::{Error, Result};
pub use parse::parse;
