/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::registries::atomic::action::ActionSpec;
use crate::registries::atomic::icon::IconRef;
use crate::registries::atomic::visibility::VisibilitySpec;

/// Reserved name that turns an item into a separator.
pub const DIVIDER_NAME: &str = "DIVIDER";

/// One entry of the toolbar. Only the registry creates items; everything
/// outside the crate sees them read-only.
#[derive(Debug, Clone)]
pub struct ToolbarItem {
    tag: String,
    name: String,
    icon: Option<IconRef>,
    tooltip: Option<String>,
    order: i32,
    visibility: VisibilitySpec,
    primary_action: ActionSpec,
    secondary_icon: Option<IconRef>,
    secondary_action: Option<ActionSpec>,
    pub(crate) children: Vec<ToolbarItem>,
    pinned: bool,
}

impl ToolbarItem {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_divider(&self) -> bool {
        self.name == DIVIDER_NAME
    }

    pub fn icon(&self) -> Option<&IconRef> {
        self.icon.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.icon.as_ref().is_some_and(IconRef::is_image)
    }

    /// Image URL of the icon, or `""` when the icon is absent or a font class.
    pub fn image_url(&self) -> &str {
        self.icon
            .as_ref()
            .and_then(IconRef::image_url)
            .unwrap_or_default()
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn visibility(&self) -> &VisibilitySpec {
        &self.visibility
    }

    pub fn primary_action(&self) -> &ActionSpec {
        &self.primary_action
    }

    pub fn secondary_icon(&self) -> Option<&IconRef> {
        self.secondary_icon.as_ref()
    }

    /// `None` means the item has no secondary action at all, which is not the
    /// same as a secondary action that does nothing.
    pub fn secondary_action(&self) -> Option<&ActionSpec> {
        self.secondary_action.as_ref()
    }

    pub fn children(&self) -> &[ToolbarItem] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }
}

/// Everything a controller supplies when registering an item.
#[derive(Debug, Clone)]
pub struct ToolbarItemSpec {
    tag: String,
    name: String,
    icon: Option<IconRef>,
    tooltip: Option<String>,
    visibility: VisibilitySpec,
    primary_action: ActionSpec,
    order: i32,
    parent_tag: Option<String>,
    secondary_icon: Option<IconRef>,
    secondary_action: Option<ActionSpec>,
}

impl ToolbarItemSpec {
    pub fn new(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            icon: None,
            tooltip: None,
            visibility: VisibilitySpec::default(),
            primary_action: ActionSpec::default(),
            order: 0,
            parent_tag: None,
            secondary_icon: None,
            secondary_action: None,
        }
    }

    pub fn divider(tag: impl Into<String>) -> Self {
        Self::new(tag, DIVIDER_NAME).visible(true)
    }

    pub fn icon(mut self, icon: impl Into<IconRef>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn visible(mut self, visibility: impl Into<VisibilitySpec>) -> Self {
        self.visibility = visibility.into();
        self
    }

    pub fn action(mut self, action: impl Into<ActionSpec>) -> Self {
        self.primary_action = action.into();
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn parent(mut self, parent_tag: impl Into<String>) -> Self {
        self.parent_tag = Some(parent_tag.into());
        self
    }

    pub fn secondary_icon(mut self, icon: impl Into<IconRef>) -> Self {
        self.secondary_icon = Some(icon.into());
        self
    }

    pub fn secondary_action(mut self, action: impl Into<ActionSpec>) -> Self {
        self.secondary_action = Some(action.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn parent_tag(&self) -> Option<&str> {
        self.parent_tag.as_deref()
    }

    pub(crate) fn clear_parent(&mut self) {
        self.parent_tag = None;
    }

    pub(crate) fn build(self, pinned: bool) -> ToolbarItem {
        ToolbarItem {
            tag: self.tag,
            name: self.name,
            icon: self.icon,
            tooltip: self.tooltip,
            order: self.order,
            visibility: self.visibility,
            primary_action: self.primary_action,
            secondary_icon: self.secondary_icon,
            secondary_action: self.secondary_action,
            children: Vec::new(),
            pinned,
        }
    }
}
