//! # Password Hashing
//!
//! Salted, iterated SHA-256 digests for stored credentials. The stored form
//! is `"<salt-hex>$<digest-hex>"` so the salt travels with the hash and no
//! separate column is needed.
//!
//! Verification re-derives the digest from the candidate password and the
//! stored salt and compares the hex forms.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Stretching rounds applied on top of the initial salt+password digest.
const STRETCH_ROUNDS: u32 = 100_000;

/// Hash a password under a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4();
    let digest = derive(salt.as_bytes(), password);
    format!("{}${}", hex::encode(salt.as_bytes()), digest)
}

/// Check a candidate password against a stored `"salt$digest"` string.
///
/// Malformed stored values never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    derive(&salt, password) == digest_hex
}

fn derive(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    let mut digest = hasher.finalize();
    for _ in 0..STRETCH_ROUNDS {
        let mut hasher = Sha256::new();
        hasher.update(&digest);
        digest = hasher.finalize();
    }
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let stored = hash_password("geheim123");
        assert!(verify_password("geheim123", &stored));
        assert!(!verify_password("geheim124", &stored));
        assert!(!verify_password("", &stored));
    }

    #[test]
    fn test_salts_differ_per_hash() {
        let a = hash_password("gleiches-passwort");
        let b = hash_password("gleiches-passwort");
        assert_ne!(a, b);
        assert!(verify_password("gleiches-passwort", &a));
        assert!(verify_password("gleiches-passwort", &b));
    }

    #[test]
    fn test_stored_format() {
        let stored = hash_password("pw");
        let (salt_hex, digest_hex) = stored.split_once('$').unwrap();
        assert_eq!(salt_hex.len(), 32);
        assert_eq!(digest_hex.len(), 64);
    }

    #[test]
    fn test_malformed_stored_values_never_verify() {
        assert!(!verify_password("pw", ""));
        assert!(!verify_password("pw", "kein-trenner"));
        assert!(!verify_password("pw", "nicht-hex$abcdef"));
    }
}
