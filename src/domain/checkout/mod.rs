// ============================================================================
// Checkout Domain - Customer Form Validation
// ============================================================================

pub mod form;

pub use form::*;
