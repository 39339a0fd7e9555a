//! Registration request validation

use sp_shared::utils::validation::is_valid_email;

use crate::domain::entities::user::UserRole;
use crate::errors::ValidationError;

use super::types::RegistrationData;

/// Validate the shape of a registration request
///
/// `name`, `email` and `password` are always required; sellers must also
/// provide `phone_number` and `country`. The email must match a
/// `local@domain.tld` shaped pattern.
pub fn validate_registration_data(
    data: &RegistrationData,
    role: UserRole,
) -> Result<(), ValidationError> {
    let missing_base = data.name.trim().is_empty()
        || data.email.trim().is_empty()
        || data.password.trim().is_empty();

    let missing_seller = role == UserRole::Seller
        && (is_blank(data.phone_number.as_deref()) || is_blank(data.country.as_deref()));

    if missing_base || missing_seller {
        return Err(ValidationError::MissingRequiredFields);
    }

    if !is_valid_email(&data.email) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    Ok(())
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
