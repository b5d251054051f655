// ============================================================================
// Cart Domain - The Customer's In-Progress Selection
// ============================================================================
//
// The cart is single-session, client-resident state: items with quantities,
// a pair of derived totals, and a UI-visibility flag. Every mutation writes
// the full snapshot back to a `CartStorage`; a snapshot that fails to load
// or parse yields an empty cart instead of an error.
//
// ============================================================================

pub mod persistence;
pub mod store;

// Re-export for convenience
pub use persistence::*;
pub use store::*;
