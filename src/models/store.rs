#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub location: String,
}

/// One associated item joined through `item_store`, tagged with the owning store.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct StoreItemRow {
    pub store_id: i64,
    pub id: i64,
    pub name: String,
}
