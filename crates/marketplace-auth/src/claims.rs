//! Verified token payload.

use serde::{Deserialize, Deserializer, Serialize};

/// Role tags carried by header-channel tokens.
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const SELLER: &str = "seller";
}

/// JWT claims.
///
/// Outside this crate a `Claims` value can only be obtained from
/// [`TokenVerifier`](crate::TokenVerifier), so holding one means the token it
/// came from was checked in the current request.
///
/// - `sub`: subject id (user, seller or admin)
/// - `role`: role tag, present on administrative and seller tokens
/// - `iat`: issued-at (seconds since epoch)
/// - `exp`: expiry (seconds since epoch)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "numeric_date")]
    pub iat: i64,
    #[serde(deserialize_with = "numeric_date")]
    pub exp: i64,
}

/// Accepts a JSON number of seconds, integral or fractional, positive or
/// negative. Fractions are floored.
fn numeric_date<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumericDate {
        Whole(i64),
        Fraction(f64),
    }

    match NumericDate::deserialize(deserializer)? {
        NumericDate::Whole(secs) => Ok(secs),
        NumericDate::Fraction(secs) if secs.is_finite() => Ok(secs.floor() as i64),
        NumericDate::Fraction(_) => Err(serde::de::Error::custom("invalid numeric date")),
    }
}

impl Claims {
    pub(crate) fn new(sub: &str, role: Option<&str>, iat: i64, exp: i64) -> Self {
        Self {
            sub: sub.to_string(),
            role: role.map(str::to_string),
            iat,
            exp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize_without_role() {
        let claims = Claims::new("u1", None, 1_700_000_000, 1_700_003_600);
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"u1""#));
        assert!(!serialized.contains("role"));
    }

    #[test]
    fn test_claims_serialize_with_role() {
        let claims = Claims::new("a1", Some(roles::ADMIN), 1_700_000_000, 1_700_003_600);
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""role":"admin""#));
    }

    #[test]
    fn test_claims_deserialize_defaults() {
        let json = r#"{"sub":"u2","exp":9999999999}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "u2");
        assert_eq!(claims.role, None);
        assert_eq!(claims.iat, 0);
        assert_eq!(claims.exp, 9999999999);
    }

    #[test]
    fn test_claims_require_exp() {
        let json = r#"{"sub":"u2"}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_claims_accept_negative_and_fractional_dates() {
        let claims: Claims = serde_json::from_str(r#"{"sub":"u1","exp":-5}"#).unwrap();
        assert_eq!(claims.exp, -5);

        let claims: Claims =
            serde_json::from_str(r#"{"sub":"u1","iat":1000.9,"exp":1100.5}"#).unwrap();
        assert_eq!(claims.iat, 1000);
        assert_eq!(claims.exp, 1100);
    }

    #[test]
    fn test_claims_reject_non_numeric_dates() {
        let json = r#"{"sub":"u1","exp":"tomorrow"}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }
}
