use thiserror::Error;

pub type Result<T> = std::result::Result<T, BlacklistError>;

/// Error reported by a backing store implementation.
///
/// Boxed so the concrete store error (e.g. `sqlx::Error`) survives as an
/// inspectable cause behind the trait seam.
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum BlacklistError {
    /// No blacklist row matched the signature. This is an expected outcome
    /// that callers branch on, so it is never wrapped.
    #[error("oauth2 blacklisted JTI not found")]
    NotFound,

    /// The store failed for any reason other than "no rows". The original
    /// error stays reachable through `source()`.
    #[error("error selecting oauth2 blacklisted JTI with signature '{signature}': {source}")]
    Query {
        signature: String,
        #[source]
        source: StoreError,
    },

    /// The caller's execution context was cancelled before the store
    /// responded.
    #[error("lookup of oauth2 blacklisted JTI with signature '{signature}' was cancelled")]
    Cancelled { signature: String },
}
