//! Donor contact details value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Contact details for the person making a donation.
///
/// All three fields are required by the gateway for receipt delivery, so
/// construction rejects empty values after trimming whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorInfo {
    name: String,
    email: String,
    phone: String,
}

impl DonorInfo {
    /// Creates donor info, rejecting any empty field.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();
        let phone = phone.into().trim().to_string();

        if name.is_empty() {
            return Err(ValidationError::empty_field("donor_name"));
        }
        if email.is_empty() {
            return Err(ValidationError::empty_field("donor_email"));
        }
        if phone.is_empty() {
            return Err(ValidationError::empty_field("donor_phone"));
        }

        Ok(Self { name, email, phone })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}
