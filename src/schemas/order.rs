use super::rules::price;
use super::Validate;
use crate::error::AppError;
use crate::models::Order;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `price` accepts a JSON number or a decimal string. `customer_id` is checked against
/// the customers table by the handler, not here.
#[derive(Clone, Debug, Deserialize)]
pub struct OrderCreate {
    pub customer_id: i64,
    pub price: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Validate for OrderCreate {
    fn validate(&self) -> Result<(), AppError> {
        price("price", &self.price)
    }
}

/// `price` is serialized as a decimal string so no precision is lost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRead {
    pub id: i64,
    pub customer_id: i64,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl From<Order> for OrderRead {
    fn from(o: Order) -> Self {
        OrderRead {
            id: o.id,
            customer_id: o.customer_id,
            price: o.price,
            created_at: o.created_at,
            notes: o.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn price_from_string_or_number() {
        let a: OrderCreate =
            serde_json::from_value(serde_json::json!({ "customer_id": 1, "price": "10.50" })).unwrap();
        let b: OrderCreate =
            serde_json::from_value(serde_json::json!({ "customer_id": 1, "price": 10.5 })).unwrap();
        assert_eq!(a.price, b.price);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn customer_id_must_be_an_integer() {
        let res: Result<OrderCreate, _> =
            serde_json::from_value(serde_json::json!({ "customer_id": "abc", "price": 1 }));
        assert!(res.is_err());
    }

    #[test]
    fn too_precise_price_is_rejected() {
        let input = OrderCreate {
            customer_id: 1,
            price: Decimal::from_str("1.001").unwrap(),
            notes: None,
        };
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn price_serializes_as_string() {
        let read = OrderRead {
            id: 1,
            customer_id: 2,
            price: Decimal::from_str("12.50").unwrap(),
            created_at: DateTime::<Utc>::from_timestamp(0, 0).unwrap(),
            notes: None,
        };
        let v = serde_json::to_value(read).unwrap();
        assert_eq!(v["price"], "12.50");
    }
}
