// ============================================================================
// Order Domain - Submitted Orders
// ============================================================================
//
// Everything about an order once the customer hits "submit":
// - Value objects (Order, OrderLine, DeliveryType, OrderStatus)
// - Draft validation (OrderDraft -> Order)
// - Order number generation (FIO-YYYYMMDD-XXXX)
// - Errors (OrderError enum)
//
// An order is created once and never mutated afterwards; status transitions
// past `pendiente` belong to back-office tooling, not this service.
//
// ============================================================================

pub mod errors;
pub mod number;
pub mod value_objects;

// Re-export for convenience
pub use errors::*;
pub use number::*;
pub use value_objects::*;
