//! Navigation Cursor
//!
//! `List` shows the top-level spaces, `Detail(id)` one space's subtree.

use crate::hierarchy::find_space;
use crate::models::Space;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Detail(u32),
}

impl ViewMode {
    /// Currently viewed space, if any
    pub fn cursor(&self) -> Option<u32> {
        match self {
            ViewMode::List => None,
            ViewMode::Detail(id) => Some(*id),
        }
    }

    pub fn select(id: u32) -> Self {
        ViewMode::Detail(id)
    }

    /// Step up one level: to the parent space, or to the list when the
    /// current space is top-level (or gone).
    pub fn back(self, spaces: &[Space]) -> Self {
        match self {
            ViewMode::List => ViewMode::List,
            ViewMode::Detail(id) => match find_space(spaces, id).and_then(|s| s.parent_id) {
                Some(parent) => ViewMode::Detail(parent),
                None => ViewMode::List,
            },
        }
    }
}
