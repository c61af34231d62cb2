/// Token Blacklist Library
///
/// Provides read access to the persistent blacklist of revoked OAuth2 token
/// identifiers (JTIs). Revocation writes and expiry sweeps belong to the
/// surrounding system; this crate only loads blacklist records by token
/// signature.
///
/// ## Modules
///
/// - `config`: Database settings
/// - `db`: Blacklist store trait, lookup operations, Postgres implementation
/// - `error`: Error types
/// - `models`: Data models
pub mod config;
pub mod db;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use db::{is_jti_blacklisted, load_oauth2_blacklisted_jti, BlacklistStore, PgBlacklistStore};
pub use error::{BlacklistError, Result, StoreError};
pub use models::OAuth2BlacklistedJti;
