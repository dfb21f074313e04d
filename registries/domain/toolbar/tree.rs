/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Forest of toolbar items.
//!
//! Every sibling list holds unique tags and stays sorted by `order`, stably,
//! so items with equal order keep their insertion order. Parents are only
//! looked up among top-level items.

use super::item::ToolbarItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InsertOutcome {
    /// The named parent existed and the item went into its children.
    pub(crate) attached_to_parent: bool,
    pub(crate) replaced: bool,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ItemTree {
    items: Vec<ToolbarItem>,
}

impl ItemTree {
    pub(crate) fn items(&self) -> &[ToolbarItem] {
        &self.items
    }

    pub(crate) fn top_level(&self, tag: &str) -> Option<&ToolbarItem> {
        self.items.iter().find(|item| item.tag() == tag)
    }

    fn parent_index(&self, parent_tag: Option<&str>) -> Option<usize> {
        let parent_tag = parent_tag?;
        self.items.iter().position(|item| item.tag() == parent_tag)
    }

    /// Children of the top-level item tagged `parent_tag`, or the top level
    /// itself when there is no such item.
    pub(crate) fn sibling_list_for(&mut self, parent_tag: Option<&str>) -> &mut Vec<ToolbarItem> {
        match self.parent_index(parent_tag) {
            Some(index) => &mut self.items[index].children,
            None => &mut self.items,
        }
    }

    pub(crate) fn insert(&mut self, parent_tag: Option<&str>, item: ToolbarItem) -> InsertOutcome {
        let attached_to_parent = self.parent_index(parent_tag).is_some();
        if parent_tag.is_some() && !attached_to_parent {
            log::debug!(
                "toolbar: parent '{}' of '{}' not found, registering at top level",
                parent_tag.unwrap_or_default(),
                item.tag()
            );
        }
        let replaced = insert_sorted(self.sibling_list_for(parent_tag), item).is_some();
        InsertOutcome {
            attached_to_parent,
            replaced,
        }
    }

    /// Removes `tag` from the scope `parent_tag` resolves to.
    pub(crate) fn remove(&mut self, tag: &str, parent_tag: Option<&str>) -> Option<ToolbarItem> {
        let siblings = self.sibling_list_for(parent_tag);
        let index = siblings.iter().position(|item| item.tag() == tag)?;
        Some(siblings.remove(index))
    }

    pub(crate) fn find_by_tag(&self, tag: &str) -> Option<&ToolbarItem> {
        find_by_tag(&self.items, tag)
    }

    pub(crate) fn reset_to(&mut self, mut items: Vec<ToolbarItem>) {
        items.sort_by_key(ToolbarItem::order);
        self.items = items;
    }

    pub(crate) fn take_items(&mut self) -> Vec<ToolbarItem> {
        std::mem::take(&mut self.items)
    }
}

/// Drops any sibling sharing `item`'s tag, appends `item` and re-sorts.
/// Returns the replaced sibling.
pub(crate) fn insert_sorted(
    siblings: &mut Vec<ToolbarItem>,
    item: ToolbarItem,
) -> Option<ToolbarItem> {
    let replaced = siblings
        .iter()
        .position(|existing| existing.tag() == item.tag())
        .map(|index| siblings.remove(index));
    siblings.push(item);
    siblings.sort_by_key(ToolbarItem::order);
    replaced
}

/// Pre-order search: an item is checked before its children, and the first
/// match in sibling order wins.
pub fn find_by_tag<'a>(scope: &'a [ToolbarItem], tag: &str) -> Option<&'a ToolbarItem> {
    for item in scope {
        if item.tag() == tag {
            return Some(item);
        }
        if let Some(found) = find_by_tag(item.children(), tag) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registries::domain::toolbar::ToolbarItemSpec;
    use proptest::prelude::*;

    fn item(tag: &str, order: i32) -> ToolbarItem {
        ToolbarItemSpec::new(tag, tag.to_uppercase())
            .order(order)
            .build(false)
    }

    fn tags(items: &[ToolbarItem]) -> Vec<&str> {
        items.iter().map(ToolbarItem::tag).collect()
    }

    #[test]
    fn insert_keeps_siblings_sorted_by_order() {
        let mut tree = ItemTree::default();
        tree.insert(None, item("c", 30));
        tree.insert(None, item("a", 10));
        tree.insert(None, item("b", 20));

        assert_eq!(tags(tree.items()), vec!["a", "b", "c"]);
    }

    #[test]
    fn equal_orders_keep_insertion_order() {
        let mut tree = ItemTree::default();
        tree.insert(None, item("zeta", 0));
        tree.insert(None, item("alpha", 0));
        tree.insert(None, item("first", -1));

        assert_eq!(tags(tree.items()), vec!["first", "zeta", "alpha"]);
    }

    #[test]
    fn duplicate_tag_replaces_existing_sibling() {
        let mut tree = ItemTree::default();
        tree.insert(None, item("a", 1));
        tree.insert(None, item("b", 2));
        let outcome = tree.insert(
            None,
            ToolbarItemSpec::new("a", "Renamed").order(3).build(false),
        );

        assert!(outcome.replaced);
        assert_eq!(tags(tree.items()), vec!["b", "a"]);
        assert_eq!(tree.items()[1].name(), "Renamed");
    }

    #[test]
    fn child_attaches_to_existing_parent() {
        let mut tree = ItemTree::default();
        tree.insert(None, item("file", 0));
        let outcome = tree.insert(Some("file"), item("open", 0));

        assert!(outcome.attached_to_parent);
        assert_eq!(tree.items().len(), 1);
        assert_eq!(tags(tree.items()[0].children()), vec!["open"]);
    }

    #[test]
    fn unknown_parent_degrades_to_top_level() {
        let mut tree = ItemTree::default();
        let outcome = tree.insert(Some("missing"), item("orphan", 0));

        assert!(!outcome.attached_to_parent);
        assert_eq!(tags(tree.items()), vec!["orphan"]);
    }

    #[test]
    fn parents_are_only_found_at_top_level() {
        let mut tree = ItemTree::default();
        tree.insert(None, item("file", 0));
        tree.insert(Some("file"), item("recent", 0));
        tree.insert(Some("recent"), item("doc", 0));

        assert_eq!(tags(tree.items()), vec!["file", "doc"]);
        assert!(!tree.items()[0].children()[0].has_children());
    }

    #[test]
    fn same_tag_may_live_under_different_parents() {
        let mut tree = ItemTree::default();
        tree.insert(None, item("left", 0));
        tree.insert(None, item("right", 1));
        tree.insert(Some("left"), item("close", 0));
        tree.insert(Some("right"), item("close", 0));

        assert_eq!(tree.items()[0].children().len(), 1);
        assert_eq!(tree.items()[1].children().len(), 1);
    }

    #[test]
    fn find_by_tag_prefers_shallower_match() {
        let mut tree = ItemTree::default();
        tree.insert(None, item("x", 0));
        tree.insert(Some("x"), ToolbarItemSpec::new("y", "Nested").build(false));
        tree.insert(None, ToolbarItemSpec::new("y", "Top").order(1).build(false));

        assert_eq!(tree.find_by_tag("y").map(ToolbarItem::name), Some("Nested"));
        assert!(tree.find_by_tag("nope").is_none());
    }

    #[test]
    fn remove_targets_the_resolved_scope() {
        let mut tree = ItemTree::default();
        tree.insert(None, item("menu", 0));
        tree.insert(Some("menu"), item("entry", 0));

        assert!(tree.remove("entry", None).is_none());
        assert!(tree.remove("entry", Some("menu")).is_some());
        assert!(!tree.items()[0].has_children());
        assert!(tree.remove("menu", None).is_some());
        assert!(tree.items().is_empty());
    }

    proptest! {
        #[test]
        fn siblings_sorted_and_stable_for_any_orders(orders in prop::collection::vec(-5i32..5, 0..24)) {
            let mut tree = ItemTree::default();
            for (index, order) in orders.iter().enumerate() {
                tree.insert(None, item(&format!("t{index}"), *order));
            }

            let observed: Vec<(i32, usize)> = tree
                .items()
                .iter()
                .map(|item| {
                    let index = item.tag()[1..].parse::<usize>().unwrap();
                    (item.order(), index)
                })
                .collect();
            let mut expected = observed.clone();
            expected.sort();
            prop_assert_eq!(observed, expected);
        }

        #[test]
        fn reinserting_a_tag_never_duplicates(orders in prop::collection::vec(-3i32..3, 1..12)) {
            let mut tree = ItemTree::default();
            for order in &orders {
                tree.insert(None, item("same", *order));
            }
            prop_assert_eq!(tree.items().len(), 1);
            prop_assert_eq!(tree.items()[0].order(), *orders.last().unwrap());
        }
    }
}
