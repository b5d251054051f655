// ============================================================================
// Order Validation Errors
// ============================================================================
//
// Error messages are the customer-facing Spanish strings the storefront
// client displays verbatim.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Faltan campos requeridos")]
    MissingFields,

    #[error("El pedido debe tener al menos un producto")]
    EmptyItems,

    #[error("La dirección es requerida para envíos")]
    MissingDeliveryAddress,
}
