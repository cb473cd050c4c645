pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::auth,
        auth_request::AuthRequest,
        auth_response::AuthResponse,
    },
    contacts::{
        contact_dto::ContactDto,
        contacts::{create_contact, delete_contact, list_contacts, update_contact},
        create_contact_request::CreateContactRequest,
        list_contacts_query::ListContactsQuery,
        update_contact_request::UpdateContactRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
