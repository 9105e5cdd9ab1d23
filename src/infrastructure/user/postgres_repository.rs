//! PostgreSQL user repository implementation

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::domain::user::{User, UserRepository, UserTier};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository.
///
/// The `users_identity_key` index rejects a second user with the same
/// normalized name, email and address, so concurrent admissions cannot both
/// be written.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the users table and identity index if missing
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                address TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                money NUMERIC NOT NULL,
                user_type TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create users table: {}", e)))?;

        sqlx::query(
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS users_identity_key
            ON users (lower(btrim(name)), lower(btrim(email)), lower(btrim(address)))
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create identity index: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT name, address, email, phone, money, user_type
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        rows.iter().map(row_to_user).collect()
    }

    async fn add(&self, user: User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (name, address, email, phone, money, user_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.name())
        .bind(user.address())
        .bind(user.email())
        .bind(user.phone())
        .bind(user.money())
        .bind(user.tier().as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!("User '{}' already exists", user.email()))
            } else {
                DomainError::storage(format!("Failed to add user: {}", e))
            }
        })?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to reach users database: {}", e)))?;

        Ok(())
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let column = |e: sqlx::Error| DomainError::storage(format!("Failed to read user row: {}", e));

    let name: String = row.try_get("name").map_err(column)?;
    let address: String = row.try_get("address").map_err(column)?;
    let email: String = row.try_get("email").map_err(column)?;
    let phone: String = row.try_get("phone").map_err(column)?;
    let money: Decimal = row.try_get("money").map_err(column)?;
    let user_type: String = row.try_get("user_type").map_err(column)?;

    let tier = UserTier::from_label(&user_type)
        .map_err(|e| DomainError::storage(format!("Invalid stored user: {}", e)))?;

    Ok(User::new(name, address, email, phone, money, tier))
}
