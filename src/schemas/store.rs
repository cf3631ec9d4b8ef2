use super::item::ItemBrief;
use super::rules::{required_text, STORE_LOCATION_MAX, STORE_NAME_MAX};
use super::Validate;
use crate::error::AppError;
use crate::models::Store;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
pub struct StoreCreate {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub item_ids: Vec<i64>,
}

impl Validate for StoreCreate {
    fn validate(&self) -> Result<(), AppError> {
        required_text("name", &self.name, STORE_NAME_MAX)?;
        required_text("location", &self.location, STORE_LOCATION_MAX)
    }
}

/// Full replacement of a store's item set. An empty list clears it.
#[derive(Clone, Debug, Deserialize)]
pub struct StoreItemsUpdate {
    pub item_ids: Vec<i64>,
}

/// Any integer is accepted; ids with no item row are reported by the handler.
impl Validate for StoreItemsUpdate {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRead {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub items: Vec<ItemBrief>,
}

impl StoreRead {
    pub fn new(store: Store, items: Vec<ItemBrief>) -> Self {
        StoreRead {
            id: store.id,
            name: store.name,
            location: store.location,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_ids_default_to_empty() {
        let input: StoreCreate =
            serde_json::from_value(serde_json::json!({ "name": "Main", "location": "Oslo" })).unwrap();
        assert!(input.item_ids.is_empty());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn replacement_requires_item_ids() {
        let res: Result<StoreItemsUpdate, _> = serde_json::from_value(serde_json::json!({}));
        assert!(res.is_err());
    }

    #[test]
    fn zero_and_negative_ids_are_left_to_the_existence_check() {
        let input = StoreItemsUpdate { item_ids: vec![1, 0, -3] };
        assert!(input.validate().is_ok());
        let create = StoreCreate { name: "Main".into(), location: "Oslo".into(), item_ids: vec![0] };
        assert!(create.validate().is_ok());
    }

    #[test]
    fn location_is_required() {
        let input = StoreCreate { name: "Main".into(), location: "".into(), item_ids: vec![] };
        assert!(input.validate().is_err());
    }
}
