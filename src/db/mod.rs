/// Database operations for blacklist storage
pub mod blacklist;
pub mod postgres;

// Re-export commonly used types
pub use blacklist::{is_jti_blacklisted, load_oauth2_blacklisted_jti, BlacklistStore};
pub use postgres::PgBlacklistStore;
