// ============================================================================
// Fiorente Storefront - Restaurant Menu, Cart & Order Service
// ============================================================================
//
// Library surface for the Fiorente storefront:
// - Catalog: static menu data with lookup/search/filter
// - Cart: client-side selection state with local snapshot persistence
// - Checkout: customer form validation
// - Orders: submission with best-effort persistence and read-only retrieval
//
// The HTTP layer (actix-web) lives under `api`, the durable store (Postgres
// via sqlx) under `db`. Order submission deliberately degrades without
// failure: a valid order always gets a number, even when the store is down.
//
// ============================================================================

pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
