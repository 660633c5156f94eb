//! Form state for the register and login panels. Both exist only for the
//! duration of one submission and auto-clear on success by resetting to
//! `Default`.

use crate::features::auth::types::{Address, LoginRequest, RegisterRequest};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub date_of_birth: String,
    pub gender: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

impl RegisterForm {
    /// Builds the wire payload. Empty optional fields are omitted, and the
    /// nested address object is omitted when all of its fields are empty.
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone: optional(&self.phone),
            date_of_birth: optional(&self.date_of_birth),
            gender: optional(&self.gender),
            address: self.address(),
        }
    }

    fn address(&self) -> Option<Address> {
        let address = Address {
            street: optional(&self.street),
            city: optional(&self.city),
            state: optional(&self.state),
            country: optional(&self.country),
            zip_code: optional(&self.zip_code),
        };
        let empty = address.street.is_none()
            && address.city.is_none()
            && address.state.is_none()
            && address.country.is_none()
            && address.zip_code.is_none();

        if empty { None } else { Some(address) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginForm, RegisterForm};

    #[test]
    fn empty_optionals_are_dropped_from_the_payload() {
        let form = RegisterForm {
            first_name: " Jo ".to_string(),
            last_name: "Doe".to_string(),
            email: "jo@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            phone: "   ".to_string(),
            ..RegisterForm::default()
        };

        let request = form.to_request();

        assert_eq!(request.first_name, "Jo");
        assert_eq!(request.phone, None);
        assert_eq!(request.gender, None);
        assert!(request.address.is_none());
    }

    #[test]
    fn a_single_address_field_produces_a_nested_object() {
        let form = RegisterForm {
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            email: "jo@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            city: "Lisbon".to_string(),
            ..RegisterForm::default()
        };

        let address = form.to_request().address.expect("address should be kept");
        assert_eq!(address.city.as_deref(), Some("Lisbon"));
        assert_eq!(address.street, None);
    }

    #[test]
    fn clearing_resets_every_field() {
        let mut form = RegisterForm {
            email: "jo@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            ..RegisterForm::default()
        };
        assert_ne!(form, RegisterForm::default());
        form = RegisterForm::default();
        assert_eq!(form, RegisterForm::default());

        let mut login = LoginForm {
            email: "jo@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
        };
        assert_ne!(login, LoginForm::default());
        login = LoginForm::default();
        assert_eq!(login, LoginForm::default());
    }

    #[test]
    fn login_request_trims_the_email_only() {
        let form = LoginForm {
            email: " jo@example.com ".to_string(),
            password: " hunter2 ".to_string(),
        };

        let request = form.to_request();
        assert_eq!(request.email, "jo@example.com");
        assert_eq!(request.password, " hunter2 ");
    }
}
