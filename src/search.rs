//! Search
//!
//! Case-insensitive substring filter over the fetched lists.

use crate::hierarchy::breadcrumb_label;
use crate::models::{Item, Space};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchHit {
    /// Matching item with the path of its space ("Garage > Shelf")
    Item { item: Item, location: Option<String> },
    /// Matching space with the path of its parent
    Space { space: Space, location: Option<String> },
}

impl SearchHit {
    /// Stable key for keyed rendering
    pub fn key(&self) -> String {
        match self {
            SearchHit::Item { item, .. } => format!("item-{}", item.id),
            SearchHit::Space { space, .. } => format!("space-{}", space.id),
        }
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn location_of(spaces: &[Space], id: Option<u32>) -> Option<String> {
    let id = id?;
    match breadcrumb_label(spaces, id) {
        Ok(label) if !label.is_empty() => Some(label),
        Ok(_) => None,
        Err(e) => {
            log::warn!("[SEARCH] no location for space {}: {}", id, e);
            None
        }
    }
}

/// Items matching `query` by name or description, then spaces matching
/// by name. A blank query matches nothing.
pub fn search(spaces: &[Space], items: &[Item], query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let item_hits = items
        .iter()
        .filter(|item| {
            contains(&item.name, &needle)
                || item.description.as_deref().is_some_and(|d| contains(d, &needle))
        })
        .map(|item| SearchHit::Item { item: item.clone(), location: location_of(spaces, item.space_id) });

    let space_hits = spaces
        .iter()
        .filter(|space| contains(&space.name, &needle))
        .map(|space| SearchHit::Space { space: space.clone(), location: location_of(spaces, space.parent_id) });

    item_hits.chain(space_hits).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<Space>, Vec<Item>) {
        let spaces = vec![
            Space { id: 1, name: "Garage".into(), parent_id: None, depth: 0, children: Vec::new() },
            Space { id: 2, name: "Shelf".into(), parent_id: Some(1), depth: 1, children: Vec::new() },
        ];
        let items = vec![
            Item { id: 10, name: "Drill".into(), description: Some("Cordless, 18V".into()), space_id: Some(2) },
            Item { id: 11, name: "Tape".into(), description: None, space_id: None },
        ];
        (spaces, items)
    }

    #[test]
    fn test_drill_example() {
        let (spaces, items) = fixture();
        let hits = search(&spaces, &items, "drill");
        assert_eq!(hits.len(), 1);
        match &hits[0] {
            SearchHit::Item { item, location } => {
                assert_eq!(item.id, 10);
                assert_eq!(location.as_deref(), Some("Garage > Shelf"));
            }
            other => panic!("unexpected hit {:?}", other),
        }
    }

    #[test]
    fn test_matches_description_and_spaces() {
        let (spaces, items) = fixture();
        let hits = search(&spaces, &items, "CORDLESS");
        assert_eq!(hits.len(), 1);

        let hits = search(&spaces, &items, "s");
        let keys: Vec<String> = hits.iter().map(|h| h.key()).collect();
        assert_eq!(keys, vec!["item-10", "space-2"]);
        assert!(matches!(&hits[1], SearchHit::Space { location: Some(l), .. } if l == "Garage"));
    }

    #[test]
    fn test_no_match_is_empty() {
        let (spaces, items) = fixture();
        assert!(search(&spaces, &items, "snowboard").is_empty());
        assert!(search(&spaces, &items, "   ").is_empty());
    }

    #[test]
    fn test_search_leaves_inputs_untouched() {
        let (spaces, items) = fixture();
        let before = (spaces.clone(), items.clone());
        let _ = search(&spaces, &items, "a");
        assert_eq!((spaces, items), before);
    }
}
