//! Password hashing and verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::{distr::Alphanumeric, Rng};

use crate::server::error::{internal::InternalError, AppError};

/// Minimum accepted password length for sign-up and password changes.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hashes a password with Argon2 and a random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?
        .to_string();

    Ok(hash)
}

/// Verifies a password against a stored hash. Malformed hashes never verify.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Generates a random alphanumeric password, used for members created without one.
pub fn generate_password(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Rejects passwords shorter than `MIN_PASSWORD_LENGTH`.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::bad_request(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("correct horse").unwrap();

        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("wrong horse", &hash));
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify_password("anything", "unusable"));
    }

    #[test]
    fn generated_passwords_differ() {
        let a = generate_password(16);
        let b = generate_password(16);

        assert_eq!(a.len(), 16);
        assert_ne!(a, b);
    }

    #[test]
    fn short_password_rejected() {
        assert!(matches!(
            validate_password("short"),
            Err(AppError::BadRequest(_))
        ));
        assert!(validate_password("long enough").is_ok());
    }
}
