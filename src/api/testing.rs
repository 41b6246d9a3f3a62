//! In-memory `InventoryApi` that records every call.

use std::cell::RefCell;

use async_trait::async_trait;

use super::{Endpoint, InventoryApi, ItemUpdate, NewItem, NewSpace, SpaceUpdate, Verb};
use crate::error::ApiError;
use crate::hierarchy::is_descendant;
use crate::models::{Categories, ContainerDetails, ContainerInfo, EntityKind, Item, Space, VoiceReply};

#[derive(Default)]
pub(crate) struct RecordingApi {
    pub calls: RefCell<Vec<Endpoint>>,
    pub bodies: RefCell<Vec<serde_json::Value>>,
    pub spaces: RefCell<Vec<Space>>,
    pub items: RefCell<Vec<Item>>,
    pub voice_reply: RefCell<VoiceReply>,
    /// Returned by every call while set
    pub fail_with: RefCell<Option<ApiError>>,
}

impl RecordingApi {
    pub fn with(spaces: Vec<Space>, items: Vec<Item>) -> Self {
        Self {
            spaces: RefCell::new(spaces),
            items: RefCell::new(items),
            ..Default::default()
        }
    }

    /// Calls that change backend state
    pub fn mutations(&self) -> Vec<Endpoint> {
        self.calls
            .borrow()
            .iter()
            .copied()
            .filter(|e| e.verb() != Verb::Get)
            .collect()
    }

    fn record(&self, endpoint: Endpoint, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(endpoint);
        if let Some(body) = body {
            self.bodies.borrow_mut().push(body);
        }
        match self.fail_with.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> u32 {
        let max_space = self.spaces.borrow().iter().map(|s| s.id).max().unwrap_or(0);
        let max_item = self.items.borrow().iter().map(|i| i.id).max().unwrap_or(0);
        max_space.max(max_item) + 1
    }

    fn not_found(endpoint: Endpoint) -> ApiError {
        ApiError::Status { endpoint: endpoint.to_string(), status: 404, detail: Some("Not found".into()) }
    }
}

#[async_trait(?Send)]
impl InventoryApi for RecordingApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        self.record(Endpoint::ListItems, None)?;
        Ok(self.items.borrow().clone())
    }

    async fn list_spaces(&self) -> Result<Vec<Space>, ApiError> {
        self.record(Endpoint::ListSpaces, None)?;
        Ok(self.spaces.borrow().clone())
    }

    async fn list_space_children(&self, id: u32) -> Result<Vec<Space>, ApiError> {
        self.record(Endpoint::SpaceChildren(id), None)?;
        Ok(self.spaces.borrow().iter().filter(|s| s.parent_id == Some(id)).cloned().collect())
    }

    async fn list_categories(&self) -> Result<Categories, ApiError> {
        self.record(Endpoint::ListCategories, None)?;
        Ok(Categories::default())
    }

    async fn get_container(&self, id: u32) -> Result<ContainerDetails, ApiError> {
        self.record(Endpoint::Container(id), None)?;
        let container = self.spaces.borrow().iter().find(|s| s.id == id).map(|s| ContainerInfo {
            id: s.id,
            name: s.name.clone(),
            default_location: None,
        });
        let items = self.items.borrow().iter().filter(|i| i.space_id == Some(id)).cloned().collect();
        Ok(ContainerDetails { container, items })
    }

    async fn create_item(&self, item: &NewItem) -> Result<(), ApiError> {
        self.record(Endpoint::CreateItem, serde_json::to_value(item).ok())?;
        let id = self.next_id();
        self.items.borrow_mut().push(Item {
            id,
            name: item.name.clone(),
            description: item.description.clone(),
            space_id: item.space_id,
        });
        Ok(())
    }

    async fn create_space(&self, space: &NewSpace) -> Result<(), ApiError> {
        self.record(Endpoint::CreateSpace, serde_json::to_value(space).ok())?;
        let id = self.next_id();
        self.spaces.borrow_mut().push(Space {
            id,
            name: space.name.clone(),
            parent_id: space.parent_id,
            depth: 0,
            children: Vec::new(),
        });
        Ok(())
    }

    async fn update_item(&self, id: u32, update: &ItemUpdate) -> Result<Item, ApiError> {
        self.record(Endpoint::UpdateItem(id), serde_json::to_value(update).ok())?;
        let mut items = self.items.borrow_mut();
        let item = items.iter_mut().find(|i| i.id == id).ok_or_else(|| Self::not_found(Endpoint::UpdateItem(id)))?;
        item.name = update.name.clone();
        item.description = update.description.clone();
        item.space_id = update.space_id;
        Ok(item.clone())
    }

    async fn update_space(&self, id: u32, update: &SpaceUpdate) -> Result<Space, ApiError> {
        self.record(Endpoint::UpdateSpace(id), serde_json::to_value(update).ok())?;
        let mut spaces = self.spaces.borrow_mut();
        let space = spaces.iter_mut().find(|s| s.id == id).ok_or_else(|| Self::not_found(Endpoint::UpdateSpace(id)))?;
        space.name = update.name.clone();
        Ok(space.clone())
    }

    async fn move_item(&self, id: u32, new_space_id: Option<u32>) -> Result<(), ApiError> {
        self.record(Endpoint::MoveItem(id), Some(serde_json::json!({ "new_space_id": new_space_id })))?;
        if let Some(item) = self.items.borrow_mut().iter_mut().find(|i| i.id == id) {
            item.space_id = new_space_id;
        }
        Ok(())
    }

    async fn move_space(&self, id: u32, new_parent_id: Option<u32>) -> Result<(), ApiError> {
        self.record(Endpoint::MoveSpace(id), Some(serde_json::json!({ "new_parent_id": new_parent_id })))?;
        if let Some(space) = self.spaces.borrow_mut().iter_mut().find(|s| s.id == id) {
            space.parent_id = new_parent_id;
        }
        Ok(())
    }

    async fn delete_item(&self, id: u32) -> Result<(), ApiError> {
        self.record(Endpoint::DeleteItem(id), None)?;
        self.items.borrow_mut().retain(|i| i.id != id);
        Ok(())
    }

    async fn delete_space(&self, id: u32) -> Result<(), ApiError> {
        self.record(Endpoint::DeleteSpace(id), None)?;
        // Cascade like the backend: nested spaces and their items go too
        let doomed: Vec<u32> = {
            let spaces = self.spaces.borrow();
            spaces.iter().filter(|s| s.id == id || is_descendant(&spaces, id, s.id)).map(|s| s.id).collect()
        };
        self.spaces.borrow_mut().retain(|s| !doomed.contains(&s.id));
        self.items.borrow_mut().retain(|i| !i.space_id.is_some_and(|sid| doomed.contains(&sid)));
        Ok(())
    }

    async fn interpret(&self, text: &str, object_type: EntityKind) -> Result<VoiceReply, ApiError> {
        self.record(Endpoint::Interpret(object_type), Some(serde_json::json!({ "text": text })))?;
        Ok(self.voice_reply.borrow().clone())
    }
}
