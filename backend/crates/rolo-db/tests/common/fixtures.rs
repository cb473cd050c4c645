use rolo_core::Contact;

/// Builds an unsaved contact owned by `user_id`
pub fn create_test_contact(user_id: &str, name: &str) -> Contact {
    Contact::new(
        user_id.to_string(),
        name.to_string(),
        format!("{}@example.com", name.to_lowercase()),
        "555-0100".to_string(),
    )
}
