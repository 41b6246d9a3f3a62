//! Backend API
//!
//! REST bindings to the inventory backend, organized by domain.
//! `InventoryApi` is the seam: components use `HttpApi`, logic takes any
//! implementation so it can run against an in-memory double.

mod http;
mod item;
mod space;
mod voice;
#[cfg(test)]
pub(crate) mod testing;

use std::fmt;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Categories, ContainerDetails, EntityKind, Item, Space, VoiceReply};

pub use http::HttpApi;
pub use item::*;
pub use space::*;
pub(crate) use voice::InterpretArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Every backend route the organizer talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListItems,
    ListSpaces,
    SpaceChildren(u32),
    ListCategories,
    Container(u32),
    CreateItem,
    CreateSpace,
    UpdateItem(u32),
    UpdateSpace(u32),
    MoveItem(u32),
    MoveSpace(u32),
    DeleteItem(u32),
    DeleteSpace(u32),
    Interpret(EntityKind),
}

impl Endpoint {
    pub fn verb(&self) -> Verb {
        use Endpoint::*;
        match self {
            ListItems | ListSpaces | SpaceChildren(_) | ListCategories | Container(_) => Verb::Get,
            CreateItem | CreateSpace | Interpret(_) => Verb::Post,
            UpdateItem(_) | UpdateSpace(_) | MoveItem(_) | MoveSpace(_) => Verb::Put,
            DeleteItem(_) | DeleteSpace(_) => Verb::Delete,
        }
    }

    pub fn path(&self) -> String {
        use Endpoint::*;
        match self {
            ListItems | CreateItem => "/items/".to_string(),
            ListSpaces => "/spaces-recursive/".to_string(),
            CreateSpace => "/spaces/".to_string(),
            SpaceChildren(id) => format!("/spaces/{}/children", id),
            ListCategories => "/categories/".to_string(),
            Container(id) => format!("/containers/{}", id),
            UpdateItem(id) | DeleteItem(id) => format!("/items/{}", id),
            UpdateSpace(id) | DeleteSpace(id) => format!("/spaces/{}", id),
            MoveItem(id) => format!("/items/{}/space", id),
            MoveSpace(id) => format!("/spaces/{}/parent", id),
            Interpret(kind) => format!("/voice/interpret?object_type={}", kind.as_query()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.verb() {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        };
        write!(f, "{} {}", verb, self.path())
    }
}

/// Operations the organizer needs from the backend
#[async_trait(?Send)]
pub trait InventoryApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError>;
    /// Flat space list (recursive listing flattened)
    async fn list_spaces(&self) -> Result<Vec<Space>, ApiError>;
    async fn list_space_children(&self, id: u32) -> Result<Vec<Space>, ApiError>;
    async fn list_categories(&self) -> Result<Categories, ApiError>;
    async fn get_container(&self, id: u32) -> Result<ContainerDetails, ApiError>;

    async fn create_item(&self, item: &NewItem) -> Result<(), ApiError>;
    async fn create_space(&self, space: &NewSpace) -> Result<(), ApiError>;
    async fn update_item(&self, id: u32, update: &ItemUpdate) -> Result<Item, ApiError>;
    async fn update_space(&self, id: u32, update: &SpaceUpdate) -> Result<Space, ApiError>;
    async fn move_item(&self, id: u32, new_space_id: Option<u32>) -> Result<(), ApiError>;
    async fn move_space(&self, id: u32, new_parent_id: Option<u32>) -> Result<(), ApiError>;
    async fn delete_item(&self, id: u32) -> Result<(), ApiError>;
    async fn delete_space(&self, id: u32) -> Result<(), ApiError>;

    async fn interpret(&self, text: &str, object_type: EntityKind) -> Result<VoiceReply, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relocation_routes() {
        assert_eq!(Endpoint::MoveItem(10).to_string(), "PUT /items/10/space");
        assert_eq!(Endpoint::MoveSpace(2).to_string(), "PUT /spaces/2/parent");
    }

    #[test]
    fn test_read_routes() {
        assert_eq!(Endpoint::ListItems.to_string(), "GET /items/");
        assert_eq!(Endpoint::ListSpaces.to_string(), "GET /spaces-recursive/");
        assert_eq!(Endpoint::SpaceChildren(4).to_string(), "GET /spaces/4/children");
        assert_eq!(Endpoint::ListCategories.to_string(), "GET /categories/");
        assert_eq!(Endpoint::Container(7).to_string(), "GET /containers/7");
    }

    #[test]
    fn test_write_routes() {
        assert_eq!(Endpoint::CreateItem.to_string(), "POST /items/");
        assert_eq!(Endpoint::CreateSpace.to_string(), "POST /spaces/");
        assert_eq!(Endpoint::UpdateItem(3).to_string(), "PUT /items/3");
        assert_eq!(Endpoint::UpdateSpace(3).to_string(), "PUT /spaces/3");
        assert_eq!(Endpoint::DeleteItem(3).to_string(), "DELETE /items/3");
        assert_eq!(Endpoint::DeleteSpace(3).to_string(), "DELETE /spaces/3");
    }

    #[test]
    fn test_interpret_route_carries_object_type() {
        assert_eq!(
            Endpoint::Interpret(EntityKind::Space).to_string(),
            "POST /voice/interpret?object_type=space"
        );
        assert_eq!(Endpoint::Interpret(EntityKind::Item).path(), "/voice/interpret?object_type=item");
    }
}
