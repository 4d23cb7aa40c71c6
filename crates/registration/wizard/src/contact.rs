//! Contact fields shared by every form

use registration_types::{RegistrationError, RegistrationResult};

/// The four contact fields collected on every form. Instagram is the
/// only optional one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub instagram: String,
}

impl ContactFields {
    /// Required-field presence check, enforced at submit time
    pub fn validate_required(&self) -> RegistrationResult<()> {
        if self.name.trim().is_empty() {
            return Err(RegistrationError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(RegistrationError::MissingField("email"));
        }
        if self.phone.trim().is_empty() {
            return Err(RegistrationError::MissingField("phone"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Aina".into(),
            email: "aina@example.com".into(),
            phone: "+60 12-345 6789".into(),
            instagram: String::new(),
        }
    }

    #[test]
    fn test_instagram_is_optional() {
        assert!(filled().validate_required().is_ok());
    }

    #[test]
    fn test_whitespace_only_fields_are_missing() {
        let mut contact = filled();
        contact.phone = "   ".into();
        assert_eq!(
            contact.validate_required(),
            Err(RegistrationError::MissingField("phone"))
        );
    }
}
