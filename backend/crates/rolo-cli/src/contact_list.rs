//! Local contact-list view state.
//!
//! The CLI's stand-in for the browser page: a locally held list, one
//! shared form, and at most one contact in edit mode. After a confirmed
//! server success the local list is patched in place (append on create,
//! replace on update, retain on delete) instead of re-fetching.

use crate::client::Client;
use crate::contact_record::ContactRecord;

/// Values from the shared contact form.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Default)]
pub struct ContactList {
    contacts: Vec<ContactRecord>,
    editing: Option<String>,
}

impl ContactList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[ContactRecord] {
        &self.contacts
    }

    /// Id of the contact currently in edit mode, if any.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn find(&self, id: &str) -> Option<&ContactRecord> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Fetch the owner-scoped list from the server.
    ///
    /// A fetch failure is logged and leaves the list empty; there is no
    /// retry and no error surface beyond the log.
    pub async fn refresh(&mut self, client: &Client, user_id: &str) {
        match client.list_contacts(user_id).await {
            Ok(contacts) => self.contacts = contacts,
            Err(e) => {
                log::error!("Failed to fetch contacts: {}", e);
                self.contacts.clear();
            }
        }
    }

    /// Put a contact into edit mode. Only one edit target at a time;
    /// starting a new edit replaces the previous one. `false` when the
    /// id is not in the local list.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.editing = Some(id.to_string());
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Submit the shared form: update when a contact is in edit mode,
    /// create otherwise. On success the local list is patched in place
    /// and (for updates) edit mode ends. On failure the state is left
    /// as-is and `None` is returned; the error goes to the log.
    pub async fn submit(
        &mut self,
        client: &Client,
        user_id: &str,
        form: &ContactForm,
    ) -> Option<ContactRecord> {
        let result = match self.editing.clone() {
            Some(id) => client
                .update_contact(&id, &form.name, &form.email, &form.phone)
                .await
                .map(|updated| {
                    if let Some(slot) = self.contacts.iter_mut().find(|c| c.id == updated.id) {
                        *slot = updated.clone();
                    }
                    self.editing = None;
                    updated
                }),
            None => client
                .create_contact(user_id, &form.name, &form.email, &form.phone)
                .await
                .map(|created| {
                    self.contacts.push(created.clone());
                    created
                }),
        };

        match result {
            Ok(contact) => Some(contact),
            Err(e) => {
                log::error!("Failed to save contact: {}", e);
                None
            }
        }
    }

    /// Delete a contact; the local list drops it only after the server
    /// confirmed the delete.
    pub async fn remove(&mut self, client: &Client, id: &str) -> bool {
        match client.delete_contact(id).await {
            Ok(_) => {
                self.contacts.retain(|c| c.id != id);
                true
            }
            Err(e) => {
                log::error!("Failed to delete contact: {}", e);
                false
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn with_contacts(contacts: Vec<ContactRecord>) -> Self {
        Self {
            contacts,
            editing: None,
        }
    }
}
