use crate::{PasswordError, hash_password, verify_password};

#[test]
fn test_hash_is_not_the_password() {
    let hash = hash_password("pw1").unwrap();

    assert_ne!(hash, "pw1");
    assert!(hash.starts_with("$argon2id$"));
}

#[test]
fn test_correct_password_verifies() {
    let hash = hash_password("pw1").unwrap();

    assert!(verify_password("pw1", &hash).is_ok());
}

#[test]
fn test_wrong_password_fails() {
    let hash = hash_password("pw1").unwrap();

    assert!(matches!(
        verify_password("wrong", &hash),
        Err(PasswordError::Mismatch)
    ));
}

#[test]
fn test_same_password_hashes_differently() {
    // Random salt per call: both hashes verify, but the strings differ.
    let a = hash_password("pw1").unwrap();
    let b = hash_password("pw1").unwrap();

    assert_ne!(a, b);
    assert!(verify_password("pw1", &a).is_ok());
    assert!(verify_password("pw1", &b).is_ok());
}

#[test]
fn test_malformed_hash_fails() {
    assert!(matches!(
        verify_password("pw1", "not-a-phc-string"),
        Err(PasswordError::MalformedHash)
    ));
}
