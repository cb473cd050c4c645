use serde::{Deserialize, Serialize};

/// Client-cached identity: who is using this terminal.
///
/// A convenience record, not a credential - the server never sees or
/// validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub id: String,
    pub username: String,
}
