// ============================================================================
// Durable Store - Postgres via sqlx
// ============================================================================
//
// The pool is established lazily by the first caller that needs it and
// cached for the process lifetime. Order submission treats every failure
// here as survivable; retrieval does not.
//
// ============================================================================

pub mod connection;
pub mod order_store;

pub use connection::Database;
pub use order_store::{OrderStore, PgOrderStore, StoreError};
