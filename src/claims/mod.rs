//! Claim set container and read-only claim accessors.
//!
//! A [`ClaimSet`] holds the standard JWT claims from
//! [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1)
//! plus arbitrary custom claims. Values are type-checked when they enter the
//! set ([`ClaimSet::set_claim`] and the JSON constructors), so validation only
//! ever sees well-shaped claims. Validation itself reads claims through the
//! [`StandardClaims`] trait and never mutates the set.

mod validator;

pub use validator::{validate, ValidationConfig, ValidationOption};

use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Read-only access to a claim set.
///
/// The validation pipeline is generic over this trait, so any claim container
/// exposing these accessors can be validated. Absent claims are `None` (or an
/// empty slice for the audience), never an error.
pub trait StandardClaims {
    /// Issuer (iss) - identifies the principal that issued the JWT
    fn issuer(&self) -> Option<&str>;
    /// Subject (sub) - identifies the principal that is the subject of the JWT
    fn subject(&self) -> Option<&str>;
    /// Audience (aud) - the recipients that the JWT is intended for; empty when absent
    fn audience(&self) -> &[String];
    /// Expiration Time (exp) - seconds since Unix epoch
    fn expiration(&self) -> Option<i64>;
    /// Not Before (nbf) - the time before which the JWT MUST NOT be accepted
    fn not_before(&self) -> Option<i64>;
    /// Issued At (iat) - the time at which the JWT was issued
    fn issued_at(&self) -> Option<i64>;
    /// JWT ID (jti) - a unique identifier for the JWT
    fn jwt_id(&self) -> Option<&str>;
    /// Untyped lookup by claim name, covering registered and custom claims alike.
    fn claim(&self, name: &str) -> Option<Value>;
}

/// A decoded JWT claim set.
///
/// Registered claims live in typed fields; everything else goes into a custom
/// claim map keyed by name. [`ClaimSet::set_claim`] routes by claim name and
/// rejects values of the wrong JSON shape, mirroring what a decoder would do
/// when materializing a token payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimSet {
    /// Issuer (iss)
    pub issuer: Option<String>,
    /// Subject (sub)
    pub subject: Option<String>,
    /// Audience (aud); a single string is normalized to a one-element sequence
    pub audience: Vec<String>,
    /// Expiration Time (exp)
    pub expiration: Option<i64>,
    /// Not Before (nbf)
    pub not_before: Option<i64>,
    /// Issued At (iat)
    pub issued_at: Option<i64>,
    /// JWT ID (jti)
    pub jwt_id: Option<String>,

    custom: BTreeMap<String, Value>,
}

impl ClaimSet {
    /// Create an empty claim set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a claim by name, routing registered claim names to their typed fields.
    ///
    /// Registered names (`iss`, `sub`, `aud`, `exp`, `nbf`, `iat`, `jti`) are
    /// type-checked: a wrong JSON shape is rejected with
    /// [`Error::ClaimValueMalformed`]. The audience accepts a single string or
    /// an array of strings. Any other name becomes a custom claim and accepts
    /// any value.
    pub fn set_claim(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        match name {
            "iss" => self.issuer = Some(expect_string(name, value)?),
            "sub" => self.subject = Some(expect_string(name, value)?),
            "jti" => self.jwt_id = Some(expect_string(name, value)?),
            "aud" => self.audience = expect_audience(value)?,
            "exp" => self.expiration = Some(expect_timestamp(name, value)?),
            "nbf" => self.not_before = Some(expect_timestamp(name, value)?),
            "iat" => self.issued_at = Some(expect_timestamp(name, value)?),
            _ => {
                self.custom.insert(name.to_string(), value);
            }
        }
        Ok(())
    }

    /// Build a claim set from a JSON document
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(data)
            .map_err(|e| Error::FormatInvalidJson(e.to_string()))?;

        let Value::Object(entries) = value else {
            return Err(Error::FormatInvalidJson(
                "expected a JSON object".to_string(),
            ));
        };

        let mut claims = Self::new();
        for (name, value) in entries {
            claims.set_claim(&name, value)?;
        }
        Ok(claims)
    }

    /// Build a claim set from a JSON string
    pub fn from_json_str(data: &str) -> Result<Self> {
        Self::from_json_slice(data.as_bytes())
    }

    /// Serialize to a JSON value.
    ///
    /// A one-element audience is written back as a plain string, matching the
    /// normalization applied on the way in.
    pub fn to_json_value(&self) -> Value {
        let mut entries = Map::new();
        if let Some(iss) = &self.issuer {
            entries.insert("iss".to_string(), Value::from(iss.clone()));
        }
        if let Some(sub) = &self.subject {
            entries.insert("sub".to_string(), Value::from(sub.clone()));
        }
        match self.audience.len() {
            0 => {}
            1 => {
                entries.insert("aud".to_string(), Value::from(self.audience[0].clone()));
            }
            _ => {
                entries.insert("aud".to_string(), Value::from(self.audience.clone()));
            }
        }
        if let Some(exp) = self.expiration {
            entries.insert("exp".to_string(), Value::from(exp));
        }
        if let Some(nbf) = self.not_before {
            entries.insert("nbf".to_string(), Value::from(nbf));
        }
        if let Some(iat) = self.issued_at {
            entries.insert("iat".to_string(), Value::from(iat));
        }
        if let Some(jti) = &self.jwt_id {
            entries.insert("jti".to_string(), Value::from(jti.clone()));
        }
        for (name, value) in &self.custom {
            entries.insert(name.clone(), value.clone());
        }
        Value::Object(entries)
    }

    /// Serialize to a JSON string
    pub fn to_json_string(&self) -> String {
        self.to_json_value().to_string()
    }
}

impl StandardClaims for ClaimSet {
    fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    fn audience(&self) -> &[String] {
        &self.audience
    }

    fn expiration(&self) -> Option<i64> {
        self.expiration
    }

    fn not_before(&self) -> Option<i64> {
        self.not_before
    }

    fn issued_at(&self) -> Option<i64> {
        self.issued_at
    }

    fn jwt_id(&self) -> Option<&str> {
        self.jwt_id.as_deref()
    }

    fn claim(&self, name: &str) -> Option<Value> {
        match name {
            "iss" => self.issuer.clone().map(Value::from),
            "sub" => self.subject.clone().map(Value::from),
            "jti" => self.jwt_id.clone().map(Value::from),
            "aud" => {
                if self.audience.is_empty() {
                    None
                } else {
                    Some(Value::from(self.audience.clone()))
                }
            }
            "exp" => self.expiration.map(Value::from),
            "nbf" => self.not_before.map(Value::from),
            "iat" => self.issued_at.map(Value::from),
            _ => self.custom.get(name).cloned(),
        }
    }
}

fn expect_string(name: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(Error::ClaimValueMalformed {
            claim: name.to_string(),
            expected: "string",
        }),
    }
}

fn expect_timestamp(name: &str, value: Value) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| Error::ClaimValueMalformed {
            claim: name.to_string(),
            expected: "integer timestamp",
        })
}

fn expect_audience(value: Value) -> Result<Vec<String>> {
    let malformed = || Error::ClaimValueMalformed {
        claim: "aud".to_string(),
        expected: "string or array of strings",
    };
    match value {
        Value::String(s) => Ok(vec![s]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err(malformed()),
            })
            .collect(),
        _ => Err(malformed()),
    }
}
