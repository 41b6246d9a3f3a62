//! Hierarchy Utilities
//!
//! Traversals over the flat, parent-referencing space list.
//! Every walk keeps a visited set, so a broken parent graph ends in
//! `HierarchyError::Cycle` instead of unbounded recursion.

use std::collections::{HashMap, HashSet};

use crate::error::HierarchyError;
use crate::models::{Item, Space};

/// Indentation unit for dropdown labels (non-breaking spaces per level)
const INDENT_UNIT: usize = 4;

/// One breadcrumb segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub id: u32,
    pub name: String,
}

/// A row of the rendered tree, in display order
#[derive(Debug, Clone, PartialEq)]
pub enum TreeRow {
    Space { space: Space, depth: usize },
    Item { item: Item, depth: usize },
}

pub fn find_space(spaces: &[Space], id: u32) -> Option<&Space> {
    spaces.iter().find(|s| s.id == id)
}

/// Spaces whose parent is `parent_id` (`None` = top-level spaces)
pub fn children_of(spaces: &[Space], parent_id: Option<u32>) -> Vec<&Space> {
    spaces.iter().filter(|s| s.parent_id == parent_id).collect()
}

/// Items stored directly in `space_id` (`None` = unassigned items)
pub fn items_in(items: &[Item], space_id: Option<u32>) -> Vec<&Item> {
    items.iter().filter(|i| i.space_id == space_id).collect()
}

/// Ancestor path of `id`, root first, ending at `id` itself.
/// A missing lookup truncates the path.
pub fn breadcrumb(spaces: &[Space], id: u32) -> Result<Vec<Crumb>, HierarchyError> {
    let mut path = Vec::new();
    let mut seen = HashSet::new();
    let mut current = Some(id);

    while let Some(space_id) = current {
        let Some(space) = find_space(spaces, space_id) else { break };
        if !seen.insert(space.id) {
            return Err(HierarchyError::Cycle { space_id: space.id });
        }
        path.push(Crumb { id: space.id, name: space.name.clone() });
        current = space.parent_id;
    }

    path.reverse();
    Ok(path)
}

/// Breadcrumb names joined as "Garage > Shelf"
pub fn breadcrumb_label(spaces: &[Space], id: u32) -> Result<String, HierarchyError> {
    let names: Vec<String> = breadcrumb(spaces, id)?.into_iter().map(|c| c.name).collect();
    Ok(names.join(" > "))
}

/// True if `candidate` sits somewhere below `ancestor`
pub fn is_descendant(spaces: &[Space], ancestor: u32, candidate: u32) -> bool {
    let mut seen = HashSet::new();
    let mut current = find_space(spaces, candidate).and_then(|s| s.parent_id);

    while let Some(id) = current {
        if id == ancestor {
            return true;
        }
        if !seen.insert(id) {
            return false;
        }
        current = find_space(spaces, id).and_then(|s| s.parent_id);
    }
    false
}

/// Would reparenting `moving` under `new_parent` close a loop?
pub fn would_create_cycle(spaces: &[Space], moving: u32, new_parent: Option<u32>) -> bool {
    match new_parent {
        Some(parent) => parent == moving || is_descendant(spaces, moving, parent),
        None => false,
    }
}

/// Parent -> children map. Spaces pointing at a parent that is not in
/// the list are filed under `None` and treated as roots.
fn children_map(spaces: &[Space]) -> HashMap<Option<u32>, Vec<&Space>> {
    let known: HashSet<u32> = spaces.iter().map(|s| s.id).collect();
    let mut map: HashMap<Option<u32>, Vec<&Space>> = HashMap::new();
    for space in spaces {
        if let Some(parent) = space.parent_id.filter(|p| known.contains(p)) {
            map.entry(Some(parent)).or_insert_with(|| children_of(spaces, Some(parent)));
        }
    }
    let roots: Vec<&Space> = spaces.iter().filter(|s| !s.parent_id.is_some_and(|p| known.contains(&p))).collect();
    if !roots.is_empty() {
        map.insert(None, roots);
    }
    map
}

/// Depth-first (space, depth) pairs for the whole forest
fn walk_forest(spaces: &[Space]) -> Result<Vec<(&Space, usize)>, HierarchyError> {
    fn collect<'a>(
        parent: Option<u32>,
        depth: usize,
        map: &HashMap<Option<u32>, Vec<&'a Space>>,
        seen: &mut HashSet<u32>,
        out: &mut Vec<(&'a Space, usize)>,
    ) -> Result<(), HierarchyError> {
        if let Some(children) = map.get(&parent) {
            for space in children {
                if !seen.insert(space.id) {
                    return Err(HierarchyError::Cycle { space_id: space.id });
                }
                out.push((*space, depth));
                collect(Some(space.id), depth + 1, map, seen, out)?;
            }
        }
        Ok(())
    }

    let map = children_map(spaces);
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    collect(None, 0, &map, &mut seen, &mut out)?;

    check_reached(spaces, &seen)?;
    Ok(out)
}

/// Anything a root walk did not reach hangs off a cycle
fn check_reached(spaces: &[Space], seen: &HashSet<u32>) -> Result<(), HierarchyError> {
    match spaces.iter().filter(|s| !seen.contains(&s.id)).map(|s| s.id).min() {
        Some(stranded) => Err(HierarchyError::Cycle { space_id: stranded }),
        None => Ok(()),
    }
}

fn indent_label(name: &str, depth: usize) -> String {
    format!("{}{}", "\u{00A0}".repeat(depth * INDENT_UNIT), name)
}

/// (id, indented name) pairs for "select a space" dropdowns
pub fn indented_options(spaces: &[Space]) -> Result<Vec<(u32, String)>, HierarchyError> {
    Ok(walk_forest(spaces)?
        .into_iter()
        .map(|(space, depth)| (space.id, indent_label(&space.name, depth)))
        .collect())
}

/// Dropdown choices for a new parent of `moving`: everything except
/// `moving` itself and its descendants
pub fn reparent_options(spaces: &[Space], moving: u32) -> Result<Vec<(u32, String)>, HierarchyError> {
    Ok(indented_options(spaces)?
        .into_iter()
        .filter(|(id, _)| *id != moving && !is_descendant(spaces, moving, *id))
        .collect())
}

/// Tree rows in display order: each space, then its items, then its
/// child spaces. `root = None` renders the whole forest; `Some(id)`
/// renders that space's subtree with the space itself at depth 0.
pub fn flatten_rows(spaces: &[Space], items: &[Item], root: Option<u32>) -> Result<Vec<TreeRow>, HierarchyError> {
    fn push_space<'a>(
        space: &'a Space,
        depth: usize,
        map: &HashMap<Option<u32>, Vec<&'a Space>>,
        items: &[Item],
        seen: &mut HashSet<u32>,
        out: &mut Vec<TreeRow>,
    ) -> Result<(), HierarchyError> {
        if !seen.insert(space.id) {
            return Err(HierarchyError::Cycle { space_id: space.id });
        }
        out.push(TreeRow::Space { space: space.clone(), depth });
        for item in items_in(items, Some(space.id)) {
            out.push(TreeRow::Item { item: item.clone(), depth: depth + 1 });
        }
        if let Some(children) = map.get(&Some(space.id)) {
            for child in children {
                push_space(child, depth + 1, map, items, seen, out)?;
            }
        }
        Ok(())
    }

    let map = children_map(spaces);
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    match root {
        Some(id) => {
            if let Some(space) = find_space(spaces, id) {
                push_space(space, 0, &map, items, &mut seen, &mut out)?;
            }
        }
        None => {
            if let Some(roots) = map.get(&None) {
                for space in roots {
                    push_space(space, 0, &map, items, &mut seen, &mut out)?;
                }
            }
            check_reached(spaces, &seen)?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_space(id: u32, name: &str, parent_id: Option<u32>) -> Space {
        Space { id, name: name.to_string(), parent_id, depth: 0, children: Vec::new() }
    }

    fn make_item(id: u32, name: &str, space_id: Option<u32>) -> Item {
        Item { id, name: name.to_string(), description: None, space_id }
    }

    fn garage() -> Vec<Space> {
        vec![
            make_space(1, "Garage", None),
            make_space(2, "Shelf", Some(1)),
            make_space(3, "Bin", Some(2)),
            make_space(4, "Attic", None),
            make_space(5, "Toolbox", Some(1)),
        ]
    }

    #[test]
    fn test_breadcrumb_root_first() {
        let spaces = garage();
        let names: Vec<String> = breadcrumb(&spaces, 3).unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Garage", "Shelf", "Bin"]);
        assert_eq!(breadcrumb_label(&spaces, 2).unwrap(), "Garage > Shelf");
    }

    #[test]
    fn test_breadcrumb_starts_at_a_root() {
        let spaces = garage();
        for space in &spaces {
            let path = breadcrumb(&spaces, space.id).unwrap();
            let first = find_space(&spaces, path[0].id).unwrap();
            assert_eq!(first.parent_id, None);
            assert_eq!(path.last().unwrap().id, space.id);
        }
    }

    #[test]
    fn test_breadcrumb_truncates_on_dangling_parent() {
        let spaces = vec![make_space(2, "Shelf", Some(99)), make_space(3, "Bin", Some(2))];
        let names: Vec<String> = breadcrumb(&spaces, 3).unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Shelf", "Bin"]);
        assert!(breadcrumb(&spaces, 42).unwrap().is_empty());
    }

    #[test]
    fn test_breadcrumb_detects_cycle() {
        let spaces = vec![make_space(1, "A", Some(2)), make_space(2, "B", Some(1))];
        assert!(matches!(breadcrumb(&spaces, 1), Err(HierarchyError::Cycle { .. })));
    }

    #[test]
    fn test_children_partition() {
        let spaces = garage();
        let mut seen = Vec::new();
        for parent in std::iter::once(None).chain(spaces.iter().map(|s| Some(s.id))) {
            for child in children_of(&spaces, parent) {
                assert!(!seen.contains(&child.id), "space {} listed under two parents", child.id);
                seen.push(child.id);
            }
        }
        seen.sort();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_indented_options() {
        let options = indented_options(&garage()).unwrap();
        let ids: Vec<u32> = options.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5, 4]);
        assert_eq!(options[0].1, "Garage");
        assert_eq!(options[1].1, format!("{}Shelf", "\u{00A0}".repeat(4)));
        assert_eq!(options[2].1, format!("{}Bin", "\u{00A0}".repeat(8)));
    }

    #[test]
    fn test_indented_options_reject_cycle() {
        let mut spaces = garage();
        spaces.push(make_space(6, "Loop A", Some(7)));
        spaces.push(make_space(7, "Loop B", Some(6)));
        assert_eq!(indented_options(&spaces), Err(HierarchyError::Cycle { space_id: 6 }));
    }

    #[test]
    fn test_reparent_options_exclude_subtree() {
        let ids: Vec<u32> = reparent_options(&garage(), 2).unwrap().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 5, 4]);
    }

    #[test]
    fn test_would_create_cycle() {
        let spaces = garage();
        assert!(would_create_cycle(&spaces, 1, Some(3)));
        assert!(would_create_cycle(&spaces, 2, Some(2)));
        assert!(!would_create_cycle(&spaces, 3, Some(4)));
        assert!(!would_create_cycle(&spaces, 3, None));
    }

    #[test]
    fn test_flatten_rows_forest() {
        let spaces = garage();
        let items = vec![make_item(10, "Drill", Some(2)), make_item(11, "Loose", None)];
        let rows = flatten_rows(&spaces, &items, None).unwrap();

        let order: Vec<(char, u32, usize)> = rows
            .iter()
            .map(|row| match row {
                TreeRow::Space { space, depth } => ('s', space.id, *depth),
                TreeRow::Item { item, depth } => ('i', item.id, *depth),
            })
            .collect();
        assert_eq!(
            order,
            vec![('s', 1, 0), ('s', 2, 1), ('i', 10, 2), ('s', 3, 2), ('s', 5, 1), ('s', 4, 0)]
        );
    }

    #[test]
    fn test_flatten_rows_subtree() {
        let spaces = garage();
        let rows = flatten_rows(&spaces, &[], Some(2)).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(matches!(&rows[0], TreeRow::Space { space, depth: 0 } if space.id == 2));
        assert!(matches!(&rows[1], TreeRow::Space { space, depth: 1 } if space.id == 3));

        assert!(flatten_rows(&spaces, &[], Some(99)).unwrap().is_empty());
    }

    #[test]
    fn test_flatten_rows_reports_cycle_beside_root() {
        let spaces = vec![make_space(1, "Garage", None), make_space(6, "Box", Some(7)), make_space(7, "Crate", Some(6))];
        let items = vec![make_item(10, "Drill", Some(6))];
        assert_eq!(flatten_rows(&spaces, &items, None), Err(HierarchyError::Cycle { space_id: 6 }));
        assert_eq!(indented_options(&spaces), Err(HierarchyError::Cycle { space_id: 6 }));
    }

    #[test]
    fn test_flatten_rows_cycle_below_cursor() {
        let spaces = vec![make_space(1, "A", Some(2)), make_space(2, "B", Some(1))];
        assert!(flatten_rows(&spaces, &[], Some(1)).is_err());
    }
}
