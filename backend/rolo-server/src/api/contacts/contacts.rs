//! Contact REST API handlers
//!
//! CRUD over the contact store, scoped by the caller-supplied owner
//! identifier. There is deliberately no check that the caller *is* that
//! owner; update and delete address contacts by id alone. See DESIGN.md.

use crate::{
    ApiError, ApiResult, ContactDto, CreateContactRequest, DeleteResponse, ListContactsQuery,
    UpdateContactRequest,
};

use crate::state::AppState;

use rolo_core::Contact;
use rolo_db::ContactRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// GET /api/contacts?userId=...
///
/// List contacts for an owner. An owner with no contacts is an empty
/// array, not an error.
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(query): Query<ListContactsQuery>,
) -> ApiResult<Json<Vec<ContactDto>>> {
    let user_id = query
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::Validation {
            message: "User ID is required".to_string(),
            field: Some("userId".into()),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let repo = ContactRepository::new(state.pool.clone());
    let contacts = repo.find_by_owner(&user_id).await?;

    Ok(Json(contacts.into_iter().map(ContactDto::from).collect()))
}

/// POST /api/contacts
///
/// Create a contact from the caller-supplied fields plus owner id.
pub async fn create_contact(
    State(state): State<AppState>,
    Json(req): Json<CreateContactRequest>,
) -> ApiResult<Json<ContactDto>> {
    let contact = Contact::new(req.user_id, req.name, req.email, req.phone);

    let repo = ContactRepository::new(state.pool.clone());
    repo.create(&contact).await?;

    log::info!("Created contact {} for owner {}", contact.id, contact.user_id);

    Ok(Json(ContactDto::from(contact)))
}

/// PUT /api/contacts/:id
///
/// Full or partial field replace; returns the post-update record.
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateContactRequest>,
) -> ApiResult<Json<ContactDto>> {
    let contact_id = Uuid::parse_str(&id)?;

    let repo = ContactRepository::new(state.pool.clone());
    let contact = repo
        .update(contact_id, &req.into())
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "Contact not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!("Updated contact {}", contact.id);

    Ok(Json(ContactDto::from(contact)))
}

/// DELETE /api/contacts/:id
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let contact_id = Uuid::parse_str(&id)?;

    let repo = ContactRepository::new(state.pool.clone());
    let deleted = repo.delete(contact_id).await?;

    if !deleted {
        return Err(ApiError::NotFound {
            message: "Contact not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted contact {}", contact_id);

    Ok(Json(DeleteResponse {
        message: "Contact deleted successfully".to_string(),
    }))
}
