/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use super::item::ToolbarItem;
use super::tree;
use crate::registries::atomic::visibility::{VisibilityCheckers, resolve_visibility};

/// Read-only view of the toolbar handed to update listeners.
///
/// Carries the visibility checker chain so a renderer can resolve delegated
/// visibility without reaching back into the registry.
#[derive(Debug, Clone, Copy)]
pub struct ToolbarSnapshot<'a> {
    items: &'a [ToolbarItem],
    checkers: &'a VisibilityCheckers,
}

impl<'a> ToolbarSnapshot<'a> {
    pub fn new(items: &'a [ToolbarItem], checkers: &'a VisibilityCheckers) -> Self {
        Self { items, checkers }
    }

    pub fn items(&self) -> &'a [ToolbarItem] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn tags(&self) -> Vec<&'a str> {
        self.items.iter().map(ToolbarItem::tag).collect()
    }

    pub fn find(&self, tag: &str) -> Option<&'a ToolbarItem> {
        tree::find_by_tag(self.items, tag)
    }

    pub fn is_visible(&self, item: &ToolbarItem) -> bool {
        resolve_visibility(item, self.checkers)
    }

    /// Visible members of `scope`, in order.
    pub fn visible_in(&self, scope: &'a [ToolbarItem]) -> Vec<&'a ToolbarItem> {
        scope.iter().filter(|item| self.is_visible(item)).collect()
    }

    /// Visible top-level items, in order.
    pub fn visible_items(&self) -> Vec<&'a ToolbarItem> {
        self.visible_in(self.items)
    }
}
