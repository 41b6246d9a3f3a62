//! Space Payloads
//!
//! Request bodies for space routes.

use serde::Serialize;

/// Body of `POST /spaces/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSpace {
    pub name: String,
    pub parent_id: Option<u32>,
}

/// Body of `PUT /spaces/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceUpdate {
    pub name: String,
}

/// Body of `PUT /spaces/{id}/parent`
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MoveSpaceArgs {
    pub new_parent_id: Option<u32>,
}
