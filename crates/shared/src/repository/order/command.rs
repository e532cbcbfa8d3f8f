use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::CreateOrderRequest,
    errors::RepositoryError,
    model::{CartItem, ORDER_STATUS_PENDING, Order as OrderModel},
};
use async_trait::async_trait;
use sqlx::{Postgres, Transaction, types::Json};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{error, info, warn};
use uuid::Uuid;

const UNKNOWN_PRODUCT: &str = "Unknown Product";

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    /// Locks every product row the cart references, in `product_id` order.
    async fn lock_products(
        tx: &mut Transaction<'_, Postgres>,
        cart_items: &[CartItem],
    ) -> Result<BTreeMap<Uuid, LockedProduct>, RepositoryError> {
        let ids: Vec<Uuid> = cart_items
            .iter()
            .filter_map(|item| Uuid::parse_str(&item.id).ok())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let rows: Vec<(Uuid, String, i32)> = sqlx::query_as(
            r#"
            SELECT product_id, name, stock
            FROM products
            WHERE product_id = ANY($1)
            ORDER BY product_id
            FOR UPDATE
            "#,
        )
        .bind(&ids)
        .fetch_all(&mut **tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to lock cart products: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows
            .into_iter()
            .map(|(id, name, stock)| {
                (
                    id,
                    LockedProduct {
                        name,
                        available: stock,
                        reserved: 0,
                    },
                )
            })
            .collect())
    }

    /// Walks the cart in order and books each line against the locked rows.
    /// The first line that cannot be served decides the error.
    fn reserve_lines(
        locked: &mut BTreeMap<Uuid, LockedProduct>,
        cart_items: &[CartItem],
    ) -> Result<(), RepositoryError> {
        for item in cart_items {
            let Ok(product_id) = Uuid::parse_str(&item.id) else {
                warn!("⚠️ Cart line references malformed product id {:?}", item.id);
                return Err(RepositoryError::StockShortage {
                    product: UNKNOWN_PRODUCT.into(),
                });
            };

            let Some(product) = locked.get_mut(&product_id) else {
                warn!("⚠️ Cart line references missing product {product_id}");
                return Err(RepositoryError::StockShortage {
                    product: UNKNOWN_PRODUCT.into(),
                });
            };

            if product.available < item.quantity {
                warn!(
                    "⚠️ Not enough stock for {}: requested {}, available {}",
                    product.name, item.quantity, product.available
                );
                return Err(RepositoryError::StockShortage {
                    product: product.name.clone(),
                });
            }

            product.available -= item.quantity;
            product.reserved += item.quantity;
        }

        Ok(())
    }

    async fn apply_reservations(
        tx: &mut Transaction<'_, Postgres>,
        locked: &BTreeMap<Uuid, LockedProduct>,
    ) -> Result<(), RepositoryError> {
        for (product_id, product) in locked.iter().filter(|(_, p)| p.reserved > 0) {
            sqlx::query(
                r#"
                UPDATE products
                SET stock = stock - $2,
                    updated_at = current_timestamp
                WHERE product_id = $1
                "#,
            )
            .bind(product_id)
            .bind(product.reserved)
            .execute(&mut **tx)
            .await?;

            info!(
                "📉 Reserved {} of product {} ({product_id})",
                product.reserved, product.name
            );
        }

        Ok(())
    }
}

struct LockedProduct {
    name: String,
    available: i32,
    reserved: i32,
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn place_order(&self, req: &CreateOrderRequest) -> Result<OrderModel, RepositoryError> {
        let cart_items: Vec<CartItem> = req.cart_items.iter().cloned().map(Into::into).collect();

        let mut tx = self.db.begin().await.map_err(|err| {
            error!("❌ Failed to begin order transaction: {err:?}");
            RepositoryError::from(err)
        })?;

        // Returning early drops `tx`, which rolls back and releases the row locks.
        let mut locked = Self::lock_products(&mut tx, &cart_items).await?;
        Self::reserve_lines(&mut locked, &cart_items)?;
        Self::apply_reservations(&mut tx, &locked).await?;

        let item_count = cart_items.len();

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (order_id, form_data, cart_items, total_price, shipping_cost,
                tax, discount, order_status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, current_timestamp, current_timestamp)
            RETURNING order_id, form_data, cart_items, total_price, shipping_cost, tax,
                discount, order_status, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(Json(req.form_data.clone()))
        .bind(Json(cart_items))
        .bind(req.total_price)
        .bind(req.shipping_cost)
        .bind(req.tax)
        .bind(req.discount)
        .bind(ORDER_STATUS_PENDING)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert order: {err:?}");
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit order {}: {:?}", order.order_id, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created order ID {} with {item_count} items",
            order.order_id
        );
        Ok(order)
    }
}
