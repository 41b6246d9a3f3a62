//! Item Payloads
//!
//! Request bodies for item routes.

use serde::Serialize;

/// Body of `POST /items/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub space_id: Option<u32>,
}

/// Body of `PUT /items/{id}` (full-field update)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemUpdate {
    pub name: String,
    pub description: Option<String>,
    pub space_id: Option<u32>,
}

/// Body of `PUT /items/{id}/space`
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MoveItemArgs {
    pub new_space_id: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned_space_serializes_as_null() {
        let body = serde_json::to_value(MoveItemArgs { new_space_id: None }).unwrap();
        assert_eq!(body, serde_json::json!({ "new_space_id": null }));
    }
}
