use super::rules::{required_text, ITEM_NAME_MAX};
use super::Validate;
use crate::error::AppError;
use crate::models::{Item, StoreItemRow};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for ItemCreate {
    fn validate(&self) -> Result<(), AppError> {
        required_text("name", &self.name, ITEM_NAME_MAX)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRead {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Item> for ItemRead {
    fn from(item: Item) -> Self {
        ItemRead {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}

/// Item as embedded in a store: no description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBrief {
    pub id: i64,
    pub name: String,
}

impl From<StoreItemRow> for ItemBrief {
    fn from(row: StoreItemRow) -> Self {
        ItemBrief { id: row.id, name: row.name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_optional() {
        let input: ItemCreate = serde_json::from_value(serde_json::json!({ "name": "Lamp" })).unwrap();
        assert_eq!(input.description, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn name_must_be_text() {
        let res: Result<ItemCreate, _> = serde_json::from_value(serde_json::json!({ "name": 12 }));
        assert!(res.is_err());
    }

    #[test]
    fn brief_omits_description() {
        let brief = ItemBrief::from(StoreItemRow { store_id: 1, id: 5, name: "Lamp".into() });
        assert_eq!(
            serde_json::to_value(brief).unwrap(),
            serde_json::json!({ "id": 5, "name": "Lamp" })
        );
    }
}
