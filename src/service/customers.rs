use super::is_unique_violation;
use crate::error::AppError;
use crate::models::Customer;
use crate::schemas::{CustomerCreate, CustomerUpdate};
use sqlx::PgConnection;

const EMAIL_TAKEN: &str = "Email already exists";

pub struct CustomerService;

impl CustomerService {
    /// Insert a customer. A duplicate email is reported by the unique constraint and
    /// becomes `AppError::Conflict`.
    pub async fn create(conn: &mut PgConnection, input: &CustomerCreate) -> Result<Customer, AppError> {
        tracing::debug!(email = %input.email, "insert customer");
        sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (email, name) VALUES ($1, $2) RETURNING id, email, name",
        )
        .bind(&input.email)
        .bind(&input.name)
        .fetch_one(&mut *conn)
        .await
        .map_err(email_conflict)
    }

    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Customer>, AppError> {
        let rows = sqlx::query_as::<_, Customer>("SELECT id, email, name FROM customers ORDER BY id DESC")
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    pub async fn get(conn: &mut PgConnection, id: i64) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, Customer>("SELECT id, email, name FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    pub async fn exists(conn: &mut PgConnection, id: i64) -> Result<bool, AppError> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(found)
    }

    /// Overwrite the provided fields. Returns `None` when no customer has `id`.
    pub async fn update(
        conn: &mut PgConnection,
        id: i64,
        input: &CustomerUpdate,
    ) -> Result<Option<Customer>, AppError> {
        tracing::debug!(id, "update customer");
        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET email = COALESCE($2, email), name = COALESCE($3, name)
            WHERE id = $1
            RETURNING id, email, name
            "#,
        )
        .bind(id)
        .bind(&input.email)
        .bind(&input.name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(email_conflict)
    }

    /// Delete by id; orders go with it through `ON DELETE CASCADE`. Returns false when
    /// nothing was deleted.
    pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete customer");
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn email_conflict(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e) {
        return AppError::Conflict(EMAIL_TAKEN.into());
    }
    AppError::Db(e)
}
