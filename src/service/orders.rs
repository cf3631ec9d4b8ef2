use super::is_foreign_key_violation;
use crate::error::AppError;
use crate::models::Order;
use crate::schemas::OrderCreate;
use sqlx::PgConnection;

const ORDER_COLUMNS: &str = "id, customer_id, price, created_at, notes";

pub struct OrderService;

impl OrderService {
    /// Insert an order; `created_at` is assigned by the database. The caller checks the
    /// customer first, a foreign-key failure here means it vanished in between.
    pub async fn create(conn: &mut PgConnection, input: &OrderCreate) -> Result<Order, AppError> {
        tracing::debug!(customer_id = input.customer_id, price = %input.price, "insert order");
        let sql = format!(
            "INSERT INTO orders (customer_id, price, notes) VALUES ($1, $2, $3) RETURNING {}",
            ORDER_COLUMNS
        );
        sqlx::query_as::<_, Order>(&sql)
            .bind(input.customer_id)
            .bind(input.price)
            .bind(&input.notes)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    return AppError::Conflict("Failed to commit the new order".into());
                }
                AppError::Db(e)
            })
    }

    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Order>, AppError> {
        let sql = format!("SELECT {} FROM orders ORDER BY id DESC", ORDER_COLUMNS);
        let rows = sqlx::query_as::<_, Order>(&sql).fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    pub async fn list_for_customer(conn: &mut PgConnection, customer_id: i64) -> Result<Vec<Order>, AppError> {
        let sql = format!(
            "SELECT {} FROM orders WHERE customer_id = $1 ORDER BY id DESC",
            ORDER_COLUMNS
        );
        let rows = sqlx::query_as::<_, Order>(&sql)
            .bind(customer_id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }
}
