//! User entity representing a registered account in the Shoply marketplace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the role of an account in the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A buyer shopping on the marketplace
    User,
    /// A seller operating a shop on the marketplace
    Seller,
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address used as the account identity
    pub email: String,

    /// Bcrypt digest of the account password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Account role
    pub role: UserRole,

    /// Contact phone number (sellers only)
    pub phone_number: Option<String>,

    /// Country of operation (sellers only)
    pub country: Option<String>,

    /// Whether the email address has been verified
    pub is_verified: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, unverified User instance
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role,
            phone_number: None,
            country: None,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach seller contact details
    pub fn with_seller_contact(
        mut self,
        phone_number: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.phone_number = Some(phone_number.into());
        self.country = Some(country.into());
        self
    }

    /// Marks the account email as verified
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_unverified() {
        let user = User::new("Alice", "alice@example.com", "$2b$10$digest", UserRole::User);
        assert!(!user.is_verified);
        assert_eq!(user.role, UserRole::User);
        assert!(user.phone_number.is_none());
    }

    #[test]
    fn test_verify_updates_timestamp() {
        let mut user = User::new("Bob", "bob@example.com", "$2b$10$digest", UserRole::Seller);
        let created = user.updated_at;
        user.verify();
        assert!(user.is_verified);
        assert!(user.updated_at >= created);
    }

    #[test]
    fn test_seller_contact() {
        let user = User::new("Carol", "carol@example.com", "$2b$10$digest", UserRole::Seller)
            .with_seller_contact("+61400000000", "AU");
        assert_eq!(user.phone_number.as_deref(), Some("+61400000000"));
        assert_eq!(user.country.as_deref(), Some("AU"));
    }
}
