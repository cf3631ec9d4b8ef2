use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// An order row. Removed together with its customer (`ON DELETE CASCADE`).
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub notes: Option<String>,
}
