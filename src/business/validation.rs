//! Record form validation

use crate::error::{FieldError, VaultError, Result};
use crate::storage::NewCredential;

/// Check the required fields of a credential
///
/// Title and username must be non-blank; the password only non-empty,
/// since surrounding whitespace may be part of the secret. All failing
/// fields are reported together.
pub fn validate_credential(fields: &NewCredential) -> Result<()> {
    let mut errors = Vec::new();

    if fields.title.trim().is_empty() {
        errors.push(FieldError { field: "title", message: "Title is required" });
    }

    if fields.username.trim().is_empty() {
        errors.push(FieldError { field: "username", message: "Username is required" });
    }

    if fields.password.is_empty() {
        errors.push(FieldError { field: "password", message: "Password is required" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(VaultError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed_fields(fields: &NewCredential) -> Vec<&'static str> {
        match validate_credential(fields) {
            Err(VaultError::Validation(errors)) => errors.iter().map(|e| e.field).collect(),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(()) => Vec::new(),
        }
    }

    #[test]
    fn test_valid() {
        assert!(validate_credential(&NewCredential::new("Mail", "john", "pw")).is_ok());
    }

    #[test]
    fn test_all_missing() {
        let fields = NewCredential::default();
        assert_eq!(failed_fields(&fields), vec!["title", "username", "password"]);
    }

    #[test]
    fn test_blank_title_and_username() {
        let fields = NewCredential::new("   ", "\t", "pw");
        assert_eq!(failed_fields(&fields), vec!["title", "username"]);
    }

    #[test]
    fn test_whitespace_password_allowed() {
        let fields = NewCredential::new("Mail", "john", "   ");
        assert!(validate_credential(&fields).is_ok());
    }

    #[test]
    fn test_messages() {
        let Err(VaultError::Validation(errors)) = validate_credential(&NewCredential::default()) else {
            panic!("Expected Validation");
        };
        let messages: Vec<&str> = errors.iter().map(|e| e.message).collect();
        assert_eq!(
            messages,
            vec!["Title is required", "Username is required", "Password is required"]
        );
    }

    #[test]
    fn test_optional_fields_not_required() {
        let fields = NewCredential {
            website: None,
            category: None,
            notes: None,
            ..NewCredential::new("Mail", "john", "pw")
        };
        assert!(validate_credential(&fields).is_ok());
    }
}
