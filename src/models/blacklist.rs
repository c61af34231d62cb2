use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A revoked OAuth2 token identifier (JTI).
///
/// One row per revocation; the signature is the unique key and rows are
/// immutable once written. Rows whose `expires_at` has passed are kept until
/// an external maintenance job removes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OAuth2BlacklistedJti {
    pub signature: String,
    pub expires_at: DateTime<Utc>, // When the token would naturally expire
}

impl OAuth2BlacklistedJti {
    /// Check whether the token this record blacklists has already expired
    /// on its own.
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_is_expired_for_past_expiry() {
        let jti = OAuth2BlacklistedJti {
            signature: "sig".to_string(),
            expires_at: Utc::now() - Duration::hours(1),
        };
        assert!(jti.is_expired());
    }

    #[test]
    fn test_is_not_expired_for_future_expiry() {
        let jti = OAuth2BlacklistedJti {
            signature: "sig".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        };
        assert!(!jti.is_expired());
    }

    #[test]
    fn test_serializes_with_column_names() {
        let jti = OAuth2BlacklistedJti {
            signature: "sig".to_string(),
            expires_at: Utc::now(),
        };

        let json = serde_json::to_value(&jti).unwrap();
        assert_eq!(json["signature"], "sig");
        assert!(json.get("expires_at").is_some());
    }
}
