//! Request payloads for the registration flow

/// Fields submitted when requesting registration
#[derive(Debug, Clone, Default)]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Required for sellers
    pub phone_number: Option<String>,
    /// Required for sellers
    pub country: Option<String>,
}

/// Fields submitted when completing registration with an OTP
#[derive(Debug, Clone, Default)]
pub struct VerificationData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub otp: String,
    pub phone_number: Option<String>,
    pub country: Option<String>,
}
