// ============================================================================
// Domain Layer - Storefront Business Logic
// ============================================================================
//
// This module contains the storefront's domain code, one subdirectory per
// concern:
// - cart: client-side selection state and its snapshot persistence
// - checkout: customer form validation
// - order: order payloads, numbering, and submission validation
//
// This layer knows nothing about HTTP or the durable store.
//
// ============================================================================

pub mod cart;
pub mod checkout;
pub mod order;
