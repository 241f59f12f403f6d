use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

fn check_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(format!("Invalid email: {}", email)),
    }
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_email(&self.email)?;
        if self.password.is_empty() {
            return Err("Password is required".to_string());
        }
        Ok(())
    }
}

impl RegistrationRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        check_email(&self.email)?;
        if self.password.is_empty() {
            return Err("Password is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        let ok = LoginRequest {
            email: "admin@example.com".into(),
            password: "secret".into(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = LoginRequest {
            email: "admin".into(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());

        let no_password = LoginRequest {
            password: String::new(),
            ..ok
        };
        assert_eq!(no_password.validate(), Err("Password is required".to_string()));
    }

    #[test]
    fn test_registration_requires_name() {
        let request = RegistrationRequest {
            name: "  ".into(),
            email: "a@b.io".into(),
            password: "x".into(),
        };
        assert_eq!(request.validate(), Err("Name is required".to_string()));
    }
}
