use super::is_foreign_key_violation;
use crate::error::AppError;
use crate::models::{Store, StoreItemRow};
use sqlx::PgConnection;

pub struct StoreService;

impl StoreService {
    pub async fn create(conn: &mut PgConnection, name: &str, location: &str) -> Result<Store, AppError> {
        tracing::debug!(name, location, "insert store");
        let store = sqlx::query_as::<_, Store>(
            "INSERT INTO stores (name, location) VALUES ($1, $2) RETURNING id, name, location",
        )
        .bind(name)
        .bind(location)
        .fetch_one(&mut *conn)
        .await?;
        Ok(store)
    }

    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Store>, AppError> {
        let rows = sqlx::query_as::<_, Store>("SELECT id, name, location FROM stores ORDER BY id DESC")
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    pub async fn get(conn: &mut PgConnection, id: i64) -> Result<Option<Store>, AppError> {
        let row = sqlx::query_as::<_, Store>("SELECT id, name, location FROM stores WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Like [`get`](Self::get) but takes a row lock, so concurrent replacements of the same
    /// store's items run one after the other.
    pub async fn get_for_update(conn: &mut PgConnection, id: i64) -> Result<Option<Store>, AppError> {
        let row = sqlx::query_as::<_, Store>("SELECT id, name, location FROM stores WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Items associated with any of `store_ids`, ordered by store then item id.
    pub async fn items_for(conn: &mut PgConnection, store_ids: &[i64]) -> Result<Vec<StoreItemRow>, AppError> {
        if store_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, StoreItemRow>(
            r#"
            SELECT s.store_id, i.id, i.name
            FROM item_store s
            JOIN items i ON i.id = s.item_id
            WHERE s.store_id = ANY($1)
            ORDER BY s.store_id, i.id
            "#,
        )
        .bind(store_ids)
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows)
    }

    /// Link items to a store. Duplicate ids collapse onto the `(item_id, store_id)` key.
    pub async fn attach_items(conn: &mut PgConnection, store_id: i64, item_ids: &[i64]) -> Result<(), AppError> {
        if item_ids.is_empty() {
            return Ok(());
        }
        tracing::debug!(store_id, count = item_ids.len(), "attach items");
        sqlx::query(
            r#"
            INSERT INTO item_store (item_id, store_id)
            SELECT DISTINCT item_id, $2::bigint FROM UNNEST($1::bigint[]) AS t(item_id)
            ON CONFLICT (item_id, store_id) DO NOTHING
            "#,
        )
        .bind(item_ids)
        .bind(store_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                return AppError::Conflict("Referenced item no longer exists".into());
            }
            AppError::Db(e)
        })?;
        Ok(())
    }

    /// Swap the whole item set. Callers run this inside a transaction so the delete and the
    /// insert commit together.
    pub async fn replace_items(conn: &mut PgConnection, store_id: i64, item_ids: &[i64]) -> Result<(), AppError> {
        sqlx::query("DELETE FROM item_store WHERE store_id = $1")
            .bind(store_id)
            .execute(&mut *conn)
            .await?;
        Self::attach_items(conn, store_id, item_ids).await
    }

    /// Delete by id; only `item_store` rows cascade, items stay.
    pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete store");
        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
