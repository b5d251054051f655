use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::{OrderStore, StoreError};
use crate::domain::order::OrderDraft;
use crate::error::ApiError;

// ============================================================================
// Order Endpoints
// ============================================================================
//
// POST /pedidos never fails a valid submission because of the store: the
// customer always walks away with an order number, and a failed write is
// logged with the full payload so the order can be recovered manually.
// GET /pedidos has no such fallback; without the store there is nothing
// meaningful to return.
//
// ============================================================================

/// How many orders the admin listing returns.
pub const RECENT_ORDERS_LIMIT: i64 = 100;

/// POST /pedidos - Submit a new order.
pub async fn create_order(
    store: web::Data<dyn OrderStore>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    // Manual parse: a broken request body is an internal fault of the
    // submission path, not a user-correctable validation error.
    let draft: OrderDraft = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse order payload");
        ApiError::Internal("Error al procesar el pedido".to_string())
    })?;

    // Validation failures stop here: no order number, nothing persisted.
    let order = draft.submit()?;

    let saved_to_db = match store.insert(&order).await {
        Ok(()) => {
            tracing::info!(order_number = %order.order_number, "Pedido guardado en base de datos");
            true
        }
        Err(e) => {
            // Keep the full payload in the log so the order can be entered
            // manually; the customer still gets their number.
            tracing::error!(
                order_number = %order.order_number,
                error = %e,
                payload = %serde_json::to_string(&order).unwrap_or_default(),
                "No se pudo guardar el pedido en la base de datos"
            );
            false
        }
    };

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "orderNumber": order.order_number.clone(),
        "order": order,
        "message": "Pedido creado exitosamente",
        "savedToDb": saved_to_db,
    })))
}

#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    #[serde(rename = "orderNumber")]
    pub order_number: Option<String>,
}

/// GET /pedidos - Look up one order by number, or list the most recent
/// orders for administrative review.
pub async fn get_orders(
    store: web::Data<dyn OrderStore>,
    query: web::Query<OrdersQuery>,
) -> Result<HttpResponse, ApiError> {
    match &query.order_number {
        Some(order_number) => {
            let order = store
                .find_by_number(order_number)
                .await
                .map_err(read_failure)?
                .ok_or_else(|| ApiError::NotFound("Pedido no encontrado".to_string()))?;

            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "order": order,
            })))
        }
        None => {
            let orders = store
                .recent(RECENT_ORDERS_LIMIT)
                .await
                .map_err(read_failure)?;

            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "orders": orders,
            })))
        }
    }
}

fn read_failure(err: StoreError) -> ApiError {
    tracing::error!(error = %err, "Error al obtener pedidos");
    ApiError::Internal("Error al obtener pedidos".to_string())
}

// ============================================================================
// Unit Tests
// ============================================================================
