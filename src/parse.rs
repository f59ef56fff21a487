//! Claim-set parsing with optional validation.
//!
//! Parsing and validation are orthogonal stages: this entry point decodes a
//! claim-set JSON document, and only runs the validation pipeline when asked
//! to via [`ValidationOption::Validate`]. The remaining options configure that
//! pipeline and are ignored otherwise.

use crate::claims::{validate, ClaimSet, ValidationOption};
use crate::error::Result;

/// Parse a claim-set JSON document, optionally validating the result.
///
/// With `ValidationOption::Validate(true)` among the options (the last such
/// entry wins), the decoded claims are validated against the remaining
/// options and any failure is propagated as this function's own failure.
/// Without it, the document is only decoded and the options are ignored.
pub fn parse(
    data: &[u8],
    options: impl IntoIterator<Item = ValidationOption>,
) -> Result<ClaimSet> {
    let options: Vec<ValidationOption> = options.into_iter().collect();
    let claims = ClaimSet::from_json_slice(data)?;

    let should_validate = options
        .iter()
        .rev()
        .find_map(|option| match option {
            ValidationOption::Validate(enabled) => Some(*enabled),
            _ => None,
        })
        .unwrap_or(false);

    if should_validate {
        tracing::debug!("Validating parsed claim set");
        if let Err(err) = validate(&claims, options) {
            tracing::warn!("Claim validation failed: {:?}", err);
            return Err(err);
        }
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;
    use crate::error::Error;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64
    }

    #[test]
    fn test_parse_without_validation() {
        // Expired claims still parse when validation was not requested.
        let json = format!(r#"{{"iss":"https://example.com","exp":{}}}"#, now() - 3600);
        let claims = parse(json.as_bytes(), []).unwrap();
        assert_eq!(claims.issuer.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_parse_options_ignored_without_flag() {
        let json = format!(r#"{{"exp":{}}}"#, now() - 3600);
        let result = parse(
            json.as_bytes(),
            [ValidationOption::Issuer("https://other.com".to_string())],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_with_validation() {
        let json = format!(r#"{{"exp":{}}}"#, now() - 3600);

        let result = parse(json.as_bytes(), [ValidationOption::Validate(true)]);
        assert!(matches!(result, Err(Error::TokenExpired { .. })));

        let result = parse(
            json.as_bytes(),
            [
                ValidationOption::Validate(true),
                ValidationOption::AcceptableSkew(7200),
            ],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_validate_flag_last_write_wins() {
        let json = format!(r#"{{"exp":{}}}"#, now() - 3600);
        let result = parse(
            json.as_bytes(),
            [
                ValidationOption::Validate(true),
                ValidationOption::Validate(false),
            ],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_with_clock_option() {
        let exp = now() - 3600;
        let json = format!(r#"{{"exp":{exp}}}"#);
        let result = parse(
            json.as_bytes(),
            [
                ValidationOption::Validate(true),
                ValidationOption::Clock(Clock::Fixed(exp - 60)),
            ],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_invalid_document() {
        assert!(matches!(
            parse(b"not json", []),
            Err(Error::FormatInvalidJson(_))
        ));
        assert!(matches!(
            parse(b"[1,2,3]", [ValidationOption::Validate(true)]),
            Err(Error::FormatInvalidJson(_))
        ));
    }
}
