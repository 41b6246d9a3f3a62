//! Drag-and-Drop Reorganizer
//!
//! Turns a drop into at most one relocation request. The caller reloads
//! the inventory afterwards; nothing is patched locally.

use leptos_dragdrop::{accepts, DragPayload, DropTarget};

use crate::api::InventoryApi;
use crate::error::{ActionError, Result};
use crate::hierarchy::would_create_cycle;
use crate::models::Space;

/// A change of container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relocation {
    Item { id: u32, space_id: Option<u32> },
    Space { id: u32, parent_id: Option<u32> },
}

/// Decide what a drop means. `Ok(None)` when the drop policy refuses it.
pub fn plan_relocation(spaces: &[Space], payload: DragPayload, target: DropTarget) -> Result<Option<Relocation>> {
    if !accepts(payload, target) {
        return Ok(None);
    }

    let destination = target.destination();
    match payload {
        DragPayload::Item(id) => Ok(Some(Relocation::Item { id, space_id: destination })),
        DragPayload::Space(id) => {
            if would_create_cycle(spaces, id, destination) {
                if let Some(new_parent) = destination {
                    return Err(ActionError::WouldCreateCycle { space_id: id, new_parent });
                }
            }
            Ok(Some(Relocation::Space { id, parent_id: destination }))
        }
    }
}

/// Plan the drop and issue the matching relocation request
pub async fn relocate<A: InventoryApi + ?Sized>(
    api: &A,
    spaces: &[Space],
    payload: DragPayload,
    target: DropTarget,
) -> Result<Option<Relocation>> {
    let Some(relocation) = plan_relocation(spaces, payload, target)? else {
        log::debug!("[DND] {:?} refused by {:?}", payload, target);
        return Ok(None);
    };

    match relocation {
        Relocation::Item { id, space_id } => api.move_item(id, space_id).await?,
        Relocation::Space { id, parent_id } => api.move_space(id, parent_id).await?,
    }
    log::info!("[DND] relocated {:?}", relocation);
    Ok(Some(relocation))
}
