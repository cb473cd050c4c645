use crate::{Contact, ContactChanges};

fn sample_contact() -> Contact {
    Contact::new(
        "u1".to_string(),
        "Bob".to_string(),
        "b@x.com".to_string(),
        "1".to_string(),
    )
}

#[test]
fn test_contact_new() {
    let contact = sample_contact();

    assert_eq!(contact.user_id, "u1");
    assert_eq!(contact.name, "Bob");
    assert_eq!(contact.email, "b@x.com");
    assert_eq!(contact.phone, "1");
    assert_eq!(contact.created_at, contact.updated_at);
}

#[test]
fn test_apply_partial_changes() {
    let mut contact = sample_contact();
    let original_email = contact.email.clone();

    contact.apply(&ContactChanges {
        name: Some("Robert".to_string()),
        phone: Some("555".to_string()),
        ..ContactChanges::default()
    });

    assert_eq!(contact.name, "Robert");
    assert_eq!(contact.phone, "555");
    assert_eq!(contact.email, original_email);
    assert_eq!(contact.user_id, "u1");
}

#[test]
fn test_apply_full_changes() {
    let mut contact = sample_contact();

    contact.apply(&ContactChanges {
        user_id: Some("u2".to_string()),
        name: Some("Carol".to_string()),
        email: Some("c@x.com".to_string()),
        phone: Some("2".to_string()),
    });

    assert_eq!(contact.user_id, "u2");
    assert_eq!(contact.name, "Carol");
    assert_eq!(contact.email, "c@x.com");
    assert_eq!(contact.phone, "2");
}

#[test]
fn test_apply_empty_changes_keeps_fields() {
    let mut contact = sample_contact();
    let before = contact.clone();

    contact.apply(&ContactChanges::default());

    assert_eq!(contact.name, before.name);
    assert_eq!(contact.email, before.email);
    assert_eq!(contact.phone, before.phone);
    assert_eq!(contact.user_id, before.user_id);
    assert!(contact.updated_at >= before.updated_at);
}
