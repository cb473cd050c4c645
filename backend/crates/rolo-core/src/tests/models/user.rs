use crate::User;

#[test]
fn test_user_new() {
    let user = User::new("alice".to_string(), "$argon2id$stub".to_string());

    assert_eq!(user.username, "alice");
    assert_eq!(user.password_hash, "$argon2id$stub");
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_user_new_assigns_distinct_ids() {
    let a = User::new("alice".to_string(), "h".to_string());
    let b = User::new("bob".to_string(), "h".to_string());

    assert_ne!(a.id, b.id);
}
