//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sp_core::domain::entities::user::{User, UserRole};
use sp_core::errors::{AuthError, DomainError};
use sp_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| database_error(format!("Failed to get id: {}", e)))?;

        let role_str: String = row
            .try_get("role")
            .map_err(|e| database_error(format!("Failed to get role: {}", e)))?;
        let role = match role_str.as_str() {
            "seller" => UserRole::Seller,
            _ => UserRole::User,
        };

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| database_error(format!("Invalid UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| database_error(format!("Failed to get name: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| database_error(format!("Failed to get email: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| database_error(format!("Failed to get password_hash: {}", e)))?,
            role,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| database_error(format!("Failed to get phone_number: {}", e)))?,
            country: row
                .try_get("country")
                .map_err(|e| database_error(format!("Failed to get country: {}", e)))?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| database_error(format!("Failed to get is_verified: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| database_error(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| database_error(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    fn role_str(role: UserRole) -> &'static str {
        match role {
            UserRole::User => "user",
            UserRole::Seller => "seller",
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, name, email, password_hash, role, phone_number, country,
                   is_verified, created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT COUNT(*) as count FROM users WHERE email = ?";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error(format!("Database query failed: {}", e)))?;

        let count: i64 = row
            .try_get("count")
            .map_err(|e| database_error(format!("Failed to get count: {}", e)))?;

        Ok(count > 0)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, name, email, password_hash, role, phone_number,
                               country, is_verified, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(Self::role_str(user.role))
            .bind(&user.phone_number)
            .bind(&user.country)
            .bind(user.is_verified)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(user),
            // Unique index on email makes concurrent duplicate inserts lose cleanly
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AuthError::UserAlreadyExists.into())
            }
            Err(e) => Err(database_error(format!("Failed to insert user: {}", e))),
        }
    }
}

fn database_error(message: String) -> DomainError {
    DomainError::Database { message }
}
