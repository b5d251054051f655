use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use super::number::generate_order_number;

// ============================================================================
// Order Value Objects
// ============================================================================
//
// Wire names are camelCase and enum values are the Spanish strings the
// original storefront client ships with (`retiro`, `pendiente`, ...), so an
// existing client keeps working unchanged.
//
// ============================================================================

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    /// Pickup at the restaurant.
    #[default]
    Retiro,
    /// Home delivery; requires a delivery address.
    Envio,
}

impl DeliveryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryType::Retiro => "retiro",
            DeliveryType::Envio => "envio",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "retiro" => Some(DeliveryType::Retiro),
            "envio" => Some(DeliveryType::Envio),
            _ => None,
        }
    }
}

/// Order lifecycle status. Only `Pendiente` is ever assigned here; the
/// remaining transitions happen in back-office tooling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pendiente,
    Confirmado,
    EnPreparacion,
    Listo,
    Entregado,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pendiente => "pendiente",
            OrderStatus::Confirmado => "confirmado",
            OrderStatus::EnPreparacion => "en_preparacion",
            OrderStatus::Listo => "listo",
            OrderStatus::Entregado => "entregado",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pendiente" => Some(OrderStatus::Pendiente),
            "confirmado" => Some(OrderStatus::Confirmado),
            "en_preparacion" => Some(OrderStatus::EnPreparacion),
            "listo" => Some(OrderStatus::Listo),
            "entregado" => Some(OrderStatus::Entregado),
            _ => None,
        }
    }
}

/// One frozen line of an order: a snapshot of the cart entry at submission
/// time, not a reference to a live cart or catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    /// Unit price in integer currency units (ARS).
    pub price: i64,
    pub quantity: u32,
}

/// A submitted, numbered order. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub delivery_type: DeliveryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    pub items: Vec<OrderLine>,
    /// Client-computed total; deliberately not recomputed server-side.
    pub total_amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// The raw submission payload as it arrives over the wire. Every field is
/// optional so presence checks stay in one place (`submit`) instead of being
/// scattered over deserialization failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub delivery_type: Option<DeliveryType>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<OrderLine>>,
    #[serde(default)]
    pub total_amount: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl OrderDraft {
    /// Validate the draft and promote it to a full `Order`.
    ///
    /// The order number is generated only after every check passes, and the
    /// creation timestamp is assigned here, server-side. Blank optional
    /// fields are dropped rather than stored as empty strings.
    pub fn submit(self) -> Result<Order, OrderError> {
        let customer_name = required_text(self.customer_name)?;
        let customer_phone = required_text(self.customer_phone)?;
        let delivery_type = self.delivery_type.ok_or(OrderError::MissingFields)?;
        let total_amount = self.total_amount.ok_or(OrderError::MissingFields)?;
        let items = self.items.ok_or(OrderError::MissingFields)?;

        if items.is_empty() {
            return Err(OrderError::EmptyItems);
        }

        let delivery_address = optional_text(self.delivery_address);
        if delivery_type == DeliveryType::Envio && delivery_address.is_none() {
            return Err(OrderError::MissingDeliveryAddress);
        }

        Ok(Order {
            order_number: generate_order_number(),
            customer_name,
            customer_phone,
            customer_email: optional_text(self.customer_email),
            delivery_type,
            delivery_address,
            items,
            total_amount,
            notes: optional_text(self.notes),
            status: OrderStatus::Pendiente,
            created_at: Utc::now(),
        })
    }
}

fn required_text(value: Option<String>) -> Result<String, OrderError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(OrderError::MissingFields),
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// ============================================================================
// Unit Tests
// ============================================================================
