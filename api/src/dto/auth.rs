//! DTOs for the registration endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use sp_core::domain::entities::user::UserRole;
use sp_core::services::registration::{RegistrationData, VerificationData};

/// Request body for `POST /api/v1/auth/register`
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "invalid email address"))]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "password must be 6-128 characters"))]
    pub password: String,

    /// Account role, "user" (default) or "seller"
    #[serde(default)]
    pub role: Option<String>,

    /// Required when role is "seller"
    pub phone_number: Option<String>,

    /// Required when role is "seller"
    pub country: Option<String>,
}

impl RegisterRequest {
    pub fn role(&self) -> UserRole {
        match self.role.as_deref() {
            Some("seller") => UserRole::Seller,
            _ => UserRole::User,
        }
    }

    pub fn into_registration_data(self) -> RegistrationData {
        RegistrationData {
            name: self.name,
            email: self.email,
            password: self.password,
            phone_number: self.phone_number,
            country: self.country,
        }
    }
}

/// Response body for a successful registration request
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    /// When another code can be requested
    pub next_resend_at: DateTime<Utc>,
}

/// Request body for `POST /api/v1/auth/verify`
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "invalid email address"))]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "password must be 6-128 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "otp is required"))]
    pub otp: String,

    #[serde(default)]
    pub role: Option<String>,

    pub phone_number: Option<String>,

    pub country: Option<String>,
}

impl VerifyRequest {
    pub fn role(&self) -> UserRole {
        match self.role.as_deref() {
            Some("seller") => UserRole::Seller,
            _ => UserRole::User,
        }
    }

    pub fn into_verification_data(self) -> VerificationData {
        VerificationData {
            name: self.name,
            email: self.email,
            password: self.password,
            otp: self.otp,
            phone_number: self.phone_number,
            country: self.country,
        }
    }
}

/// Response body for a successful verification
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub message: String,
    pub user_id: Uuid,
}
