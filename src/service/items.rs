use crate::error::AppError;
use crate::models::Item;
use crate::schemas::ItemCreate;
use sqlx::PgConnection;
use std::collections::{BTreeSet, HashSet};

pub struct ItemService;

impl ItemService {
    pub async fn create(conn: &mut PgConnection, input: &ItemCreate) -> Result<Item, AppError> {
        tracing::debug!(name = %input.name, "insert item");
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (name, description) VALUES ($1, $2) RETURNING id, name, description",
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(&mut *conn)
        .await?;
        Ok(item)
    }

    /// All items, newest first.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Item>, AppError> {
        let items = sqlx::query_as::<_, Item>("SELECT id, name, description FROM items ORDER BY id DESC")
            .fetch_all(&mut *conn)
            .await?;
        Ok(items)
    }

    /// Requested ids with no matching item row, sorted and de-duplicated.
    pub async fn find_missing(conn: &mut PgConnection, ids: &[i64]) -> Result<Vec<i64>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let found: Vec<i64> = sqlx::query_scalar("SELECT id FROM items WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&mut *conn)
            .await?;
        Ok(missing_ids(ids, &found))
    }
}

/// Set difference `requested - found`, ascending, each id once.
pub fn missing_ids(requested: &[i64], found: &[i64]) -> Vec<i64> {
    let found: HashSet<i64> = found.iter().copied().collect();
    requested
        .iter()
        .copied()
        .filter(|id| !found.contains(id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::missing_ids;

    #[test]
    fn reports_only_absent_ids() {
        assert_eq!(missing_ids(&[1, 2, 999], &[1, 2]), vec![999]);
    }

    #[test]
    fn missing_ids_are_sorted_and_unique() {
        assert_eq!(missing_ids(&[9, 3, 9, 1, 3], &[1]), vec![3, 9]);
    }

    #[test]
    fn nothing_missing() {
        assert!(missing_ids(&[2, 2, 1], &[1, 2]).is_empty());
        assert!(missing_ids(&[], &[]).is_empty());
    }
}
