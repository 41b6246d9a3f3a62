//! User Actions
//!
//! Fetch, create, edit, delete and command interpretation. Each takes the
//! backend as a parameter; components pass the `HttpApi` from context.

use crate::api::{InventoryApi, ItemUpdate, NewItem, NewSpace, SpaceUpdate};
use crate::error::{ApiError, Result, ValidationError};
use crate::models::{EntityKind, Item, Space, VoiceAction};

/// Both collections as returned by the backend
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub spaces: Vec<Space>,
    pub items: Vec<Item>,
}

/// Re-read the whole inventory
pub async fn fetch_inventory<A: InventoryApi + ?Sized>(api: &A) -> std::result::Result<Snapshot, ApiError> {
    let spaces = api.list_spaces().await?;
    let items = api.list_items().await?;
    log::debug!("[APP] fetched {} spaces, {} items", spaces.len(), items.len());
    Ok(Snapshot { spaces, items })
}

pub async fn fetch_category_names<A: InventoryApi + ?Sized>(api: &A) -> std::result::Result<Vec<String>, ApiError> {
    Ok(api.list_categories().await?.names())
}

/// What the backend reports about one space
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceDetails {
    pub default_location: Option<String>,
    pub child_spaces: usize,
    pub items: usize,
}

/// Container record plus direct children of a space
pub async fn fetch_space_details<A: InventoryApi + ?Sized>(api: &A, id: u32) -> std::result::Result<SpaceDetails, ApiError> {
    let details = api.get_container(id).await?;
    let children = api.list_space_children(id).await?;
    Ok(SpaceDetails {
        default_location: details.container.and_then(|c| c.default_location).and_then(|l| optional_text(&l)),
        child_spaces: children.len(),
        items: details.items.len(),
    })
}

/// Trimmed name, or an error if nothing is left
pub fn validate_name(kind: EntityKind, raw: &str) -> std::result::Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName(kind));
    }
    Ok(name.to_string())
}

fn optional_text(raw: &str) -> Option<String> {
    let text = raw.trim();
    (!text.is_empty()).then(|| text.to_string())
}

pub async fn create_space<A: InventoryApi + ?Sized>(api: &A, name: &str, parent_id: Option<u32>) -> Result<()> {
    let name = validate_name(EntityKind::Space, name)?;
    api.create_space(&NewSpace { name, parent_id }).await?;
    Ok(())
}

pub async fn create_item<A: InventoryApi + ?Sized>(
    api: &A,
    name: &str,
    description: &str,
    space_id: Option<u32>,
) -> Result<()> {
    let name = validate_name(EntityKind::Item, name)?;
    api.create_item(&NewItem { name, description: optional_text(description), space_id }).await?;
    Ok(())
}

/// Full-field item update; returns the backend's copy
pub async fn edit_item<A: InventoryApi + ?Sized>(
    api: &A,
    id: u32,
    name: &str,
    description: &str,
    space_id: Option<u32>,
) -> Result<Item> {
    let name = validate_name(EntityKind::Item, name)?;
    let update = ItemUpdate { name, description: optional_text(description), space_id };
    Ok(api.update_item(id, &update).await?)
}

pub async fn edit_space<A: InventoryApi + ?Sized>(api: &A, id: u32, name: &str) -> Result<Space> {
    let name = validate_name(EntityKind::Space, name)?;
    Ok(api.update_space(id, &SpaceUpdate { name }).await?)
}

pub async fn delete_item<A: InventoryApi + ?Sized>(api: &A, id: u32) -> Result<()> {
    api.delete_item(id).await?;
    Ok(())
}

/// Backend cascades to nested spaces and their items
pub async fn delete_space<A: InventoryApi + ?Sized>(api: &A, id: u32) -> Result<()> {
    api.delete_space(id).await?;
    Ok(())
}

/// What the UI should do with an interpreted command
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceOutcome {
    pub message: String,
    pub action: VoiceAction,
    /// Name to put in the search box for find actions
    pub lookup: Option<String>,
}

impl VoiceOutcome {
    pub fn needs_reload(&self) -> bool {
        self.action.refreshes_inventory()
    }
}

pub async fn interpret_command<A: InventoryApi + ?Sized>(api: &A, text: &str, object_type: EntityKind) -> Result<VoiceOutcome> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyCommand.into());
    }

    let reply = api.interpret(text, object_type).await?;
    let parsed = reply.parsed_response;
    log::info!("[VOICE] action={:?}", parsed.action);

    let lookup = match parsed.action {
        VoiceAction::FindItem => parsed.item_name,
        VoiceAction::FindSpace => parsed.space_name,
        _ => None,
    }
    .and_then(|name| optional_text(&name));

    Ok(VoiceOutcome {
        message: reply.final_result.message,
        action: parsed.action,
        lookup,
    })
}
