/// Blacklisted JTI lookup operations
use crate::error::{BlacklistError, Result, StoreError};
use crate::models::OAuth2BlacklistedJti;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Read access to the blacklist table.
///
/// One capability: run the parameterized signature lookup and decode at most
/// one row into typed fields. Zero rows is `Ok(None)`, not an error; mapping
/// that onto the not-found sentinel is the lookup's job. Implementations
/// must be safe for concurrent use.
#[async_trait]
pub trait BlacklistStore: Send + Sync {
    /// Fetch the blacklist row whose signature matches exactly, if any.
    async fn select_blacklisted_jti(
        &self,
        signature: &str,
    ) -> std::result::Result<Option<OAuth2BlacklistedJti>, StoreError>;
}

/// Load a blacklisted OAuth2 JTI by its token signature.
///
/// Returns the record when exactly one row matches, `NotFound` when none
/// does, and `Query` (with the original store error as cause) on any other
/// store failure. Cancelling `cancel` drops the in-flight query and yields
/// `Cancelled`. Read-only; a failed attempt is surfaced immediately, never
/// retried.
pub async fn load_oauth2_blacklisted_jti<S>(
    store: &S,
    cancel: &CancellationToken,
    signature: &str,
) -> Result<OAuth2BlacklistedJti>
where
    S: BlacklistStore + ?Sized,
{
    tokio::select! {
        biased;

        _ = cancel.cancelled() => Err(BlacklistError::Cancelled {
            signature: signature.to_string(),
        }),
        result = store.select_blacklisted_jti(signature) => match result {
            Ok(Some(jti)) => Ok(jti),
            Ok(None) => Err(BlacklistError::NotFound),
            Err(source) => {
                tracing::error!("Database error: {}", source);
                Err(BlacklistError::Query {
                    signature: signature.to_string(),
                    source,
                })
            }
        },
    }
}

/// Check if a token (by JTI signature) is blacklisted
pub async fn is_jti_blacklisted<S>(
    store: &S,
    cancel: &CancellationToken,
    signature: &str,
) -> Result<bool>
where
    S: BlacklistStore + ?Sized,
{
    match load_oauth2_blacklisted_jti(store, cancel, signature).await {
        Ok(_) => Ok(true),
        Err(BlacklistError::NotFound) => Ok(false),
        Err(err) => Err(err),
    }
}
