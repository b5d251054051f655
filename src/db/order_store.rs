use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::Row;

use super::connection::Database;
use crate::domain::order::{DeliveryType, Order, OrderLine, OrderStatus};

// ============================================================================
// Order Store
// ============================================================================
//
// One insert per order, no multi-row atomicity. Items are embedded as a
// JSONB array of plain line records, mirroring the wire shape.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached at all.
    #[error("durable store unavailable: {0}")]
    Unavailable(String),

    /// The store answered but the operation failed.
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A persisted row no longer matches the expected shape.
    #[error("stored order is malformed: {0}")]
    Decode(String),
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert(&self, order: &Order) -> Result<(), StoreError>;

    async fn find_by_number(&self, order_number: &str) -> Result<Option<Order>, StoreError>;

    /// The most recent orders, newest first.
    async fn recent(&self, limit: i64) -> Result<Vec<Order>, StoreError>;
}

const INSERT_ORDER: &str = "
INSERT INTO orders (
    order_number, customer_name, customer_phone, customer_email,
    delivery_type, delivery_address, items, total_amount, notes,
    status, created_at
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)";

const SELECT_COLUMNS: &str = "
SELECT order_number, customer_name, customer_phone, customer_email,
       delivery_type, delivery_address, items, total_amount, notes,
       status, created_at
  FROM orders";

pub struct PgOrderStore {
    db: Arc<Database>,
}

impl PgOrderStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    async fn pool(&self) -> Result<sqlx::PgPool, StoreError> {
        self.db
            .pool()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn insert(&self, order: &Order) -> Result<(), StoreError> {
        let pool = self.pool().await?;

        sqlx::query(INSERT_ORDER)
            .bind(&order.order_number)
            .bind(&order.customer_name)
            .bind(&order.customer_phone)
            .bind(&order.customer_email)
            .bind(order.delivery_type.as_str())
            .bind(&order.delivery_address)
            .bind(Json(&order.items))
            .bind(order.total_amount)
            .bind(&order.notes)
            .bind(order.status.as_str())
            .bind(order.created_at)
            .execute(&pool)
            .await?;

        Ok(())
    }

    async fn find_by_number(&self, order_number: &str) -> Result<Option<Order>, StoreError> {
        let pool = self.pool().await?;

        let query = format!("{SELECT_COLUMNS} WHERE order_number = $1");
        let row = sqlx::query(&query)
            .bind(order_number)
            .fetch_optional(&pool)
            .await?;

        row.map(order_from_row).transpose()
    }

    async fn recent(&self, limit: i64) -> Result<Vec<Order>, StoreError> {
        let pool = self.pool().await?;

        let query = format!("{SELECT_COLUMNS} ORDER BY created_at DESC LIMIT $1");
        let rows = sqlx::query(&query).bind(limit).fetch_all(&pool).await?;

        rows.into_iter().map(order_from_row).collect()
    }
}

fn order_from_row(row: PgRow) -> Result<Order, StoreError> {
    let delivery_raw: String = row.try_get("delivery_type")?;
    let delivery_type = DeliveryType::parse(&delivery_raw)
        .ok_or_else(|| StoreError::Decode(format!("unknown delivery type {delivery_raw:?}")))?;

    let status_raw: String = row.try_get("status")?;
    let status = OrderStatus::parse(&status_raw)
        .ok_or_else(|| StoreError::Decode(format!("unknown status {status_raw:?}")))?;

    let items: Json<Vec<OrderLine>> = row.try_get("items")?;

    Ok(Order {
        order_number: row.try_get("order_number")?,
        customer_name: row.try_get("customer_name")?,
        customer_phone: row.try_get("customer_phone")?,
        customer_email: row.try_get("customer_email")?,
        delivery_type,
        delivery_address: row.try_get("delivery_address")?,
        items: items.0,
        total_amount: row.try_get("total_amount")?,
        notes: row.try_get("notes")?,
        status,
        created_at: row.try_get("created_at")?,
    })
}

// ============================================================================
// Test Doubles
// ============================================================================
