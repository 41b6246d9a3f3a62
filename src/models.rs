//! Frontend Models
//!
//! Data structures matching backend records.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Space data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<u32>,
    #[serde(default)]
    pub depth: u32,
    /// Present only in recursive listings; emptied by `flatten_spaces`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Space>,
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub space_id: Option<u32>,
}

/// Response of `GET /spaces-recursive/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpacesEnvelope {
    #[serde(default)]
    pub spaces: Vec<Space>,
}

/// Response of `GET /categories/`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Categories {
    #[serde(default)]
    pub categories: BTreeMap<String, serde_json::Value>,
}

impl Categories {
    pub fn names(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContainerInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub default_location: Option<String>,
}

/// Response of `GET /containers/{id}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContainerDetails {
    #[serde(default)]
    pub container: Option<ContainerInfo>,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// The two record kinds the organizer manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Item,
    Space,
}

impl EntityKind {
    /// Value of the `object_type` query parameter
    pub fn as_query(&self) -> &'static str {
        match self {
            EntityKind::Item => "item",
            EntityKind::Space => "space",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Item => write!(f, "Item"),
            EntityKind::Space => write!(f, "Space"),
        }
    }
}

/// Action tag returned by the command interpreter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceAction {
    MoveItem,
    MoveSpace,
    CreateItem,
    CreateSpace,
    DeleteItem,
    DeleteSpace,
    CreateNestedSpace,
    FindItem,
    FindSpace,
    #[default]
    #[serde(other)]
    Unknown,
}

impl VoiceAction {
    /// Whether the backend changed the inventory while handling this action
    pub fn refreshes_inventory(&self) -> bool {
        !matches!(self, VoiceAction::FindItem | VoiceAction::FindSpace | VoiceAction::Unknown)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParsedCommand {
    #[serde(default)]
    pub action: VoiceAction,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub space_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FinalResult {
    #[serde(default)]
    pub message: String,
}

/// Response of `POST /voice/interpret`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VoiceReply {
    #[serde(rename = "parsedResponse", default)]
    pub parsed_response: ParsedCommand,
    #[serde(rename = "finalResult", default)]
    pub final_result: FinalResult,
}

/// Flatten a recursive space listing into the flat parent-referencing form.
/// Parents come before their children; repeated ids keep the first copy.
pub fn flatten_spaces(spaces: Vec<Space>) -> Vec<Space> {
    fn walk(space: Space, parent: Option<u32>, seen: &mut HashSet<u32>, out: &mut Vec<Space>) {
        let Space { id, name, parent_id, depth, children } = space;
        if !seen.insert(id) {
            return;
        }
        out.push(Space { id, name, parent_id: parent_id.or(parent), depth, children: Vec::new() });
        for child in children {
            walk(child, Some(id), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for space in spaces {
        walk(space, None, &mut seen, &mut out);
    }
    out
}
