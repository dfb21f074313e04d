/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crossbeam_channel::Receiver;

use super::item::{ToolbarItem, ToolbarItemSpec};
use super::snapshot::ToolbarSnapshot;
use super::tree::{self, ItemTree};
use crate::events::{SubscriptionId, ToolbarEventBus};
use crate::navigation::{NavigationEvent, NavigationSinks};
use crate::registries::atomic::action::{ActionExecution, ActionSpec};
use crate::registries::atomic::visibility::{VisibilityCheckers, resolve_visibility};

/// The single toolbar shared by all page controllers.
///
/// Every registration publishes exactly one `toolbar.updated` broadcast before
/// returning. Navigation start silently cuts the toolbar back to its pinned
/// items; navigation success always publishes, so a page that registers
/// nothing still clears the previous page's items from the screen.
///
/// Actions and listeners run while the registry is borrowed. A callback that
/// needs to mutate the registry should fetch the action with
/// [`ToolbarRegistry::action_for`] and run it after the borrow ends.
#[derive(Debug)]
pub struct ToolbarRegistry {
    tree: ItemTree,
    /// Pinned items in pin order, as last registered.
    pinned: Vec<ToolbarItem>,
    checkers: VisibilityCheckers,
    bus: ToolbarEventBus,
    sinks: NavigationSinks,
}

impl ToolbarRegistry {
    pub fn new(sinks: NavigationSinks, bus: ToolbarEventBus) -> Self {
        Self {
            tree: ItemTree::default(),
            pinned: Vec::new(),
            checkers: VisibilityCheckers::default(),
            bus,
            sinks,
        }
    }

    pub fn with_sinks(sinks: NavigationSinks) -> Self {
        Self::new(sinks, ToolbarEventBus::new())
    }

    pub fn add_item(&mut self, spec: ToolbarItemSpec) {
        self.register(spec, false);
    }

    /// Registers a top-level item that survives navigation resets. Any parent
    /// named in `spec` is ignored.
    pub fn add_pinned_item(&mut self, mut spec: ToolbarItemSpec) {
        if let Some(parent_tag) = spec.parent_tag() {
            log::debug!(
                "toolbar: pinned item '{}' cannot nest under '{parent_tag}', pinning at top level",
                spec.tag()
            );
        }
        spec.clear_parent();
        self.register(spec, true);
    }

    fn register(&mut self, spec: ToolbarItemSpec, pinned: bool) {
        let parent_tag = spec.parent_tag().map(str::to_string);
        let item = spec.build(pinned);
        let tag = item.tag().to_string();

        if pinned {
            self.pinned.retain(|existing| existing.tag() != tag);
            self.pinned.push(item.clone());
        }

        let outcome = self.tree.insert(parent_tag.as_deref(), item);
        let verb = if outcome.replaced { "replaced" } else { "added" };
        match parent_tag.as_deref().filter(|_| outcome.attached_to_parent) {
            Some(parent) => log::debug!("toolbar: {verb} '{tag}' under '{parent}'"),
            None => log::debug!("toolbar: {verb} '{tag}'"),
        }
        self.notify();
    }

    /// Removes `tag` from the scope `parent_tag` resolves to. Removing a
    /// top-level tag also unpins it. Publishes only when something changed.
    pub fn remove_item(&mut self, tag: &str, parent_tag: Option<&str>) -> bool {
        let at_top_level = parent_tag.is_none_or(|parent| self.tree.top_level(parent).is_none());
        let removed_live = self.tree.remove(tag, parent_tag).is_some();

        let mut unpinned = false;
        if at_top_level {
            let before = self.pinned.len();
            self.pinned.retain(|existing| existing.tag() != tag);
            unpinned = self.pinned.len() != before;
        }

        if !(removed_live || unpinned) {
            return false;
        }
        log::debug!("toolbar: removed '{tag}'{}", if unpinned { " (unpinned)" } else { "" });
        self.notify();
        true
    }

    /// Runs the primary action of the first item tagged `tag`. With `scope`,
    /// only the descendants of the item tagged `scope` are searched. Unknown
    /// tags are ignored.
    pub fn perform_action(&self, tag: &str, scope: Option<&str>) -> ActionExecution {
        match self.find_in_scope(tag, scope) {
            Some(item) => item.primary_action().execute(&self.sinks).with_tag(tag),
            None => {
                log::debug!("toolbar: no item '{tag}' to perform");
                ActionExecution::not_found()
            }
        }
    }

    /// Like [`Self::perform_action`] for the secondary action. Items without
    /// one report an unsucceeded execution.
    pub fn perform_secondary_action(&self, tag: &str, scope: Option<&str>) -> ActionExecution {
        match self
            .find_in_scope(tag, scope)
            .and_then(ToolbarItem::secondary_action)
        {
            Some(action) => action.execute(&self.sinks).with_tag(tag),
            None => ActionExecution::not_found(),
        }
    }

    /// Clone of the primary action of `tag`, for running outside a borrow of
    /// the registry.
    pub fn action_for(&self, tag: &str) -> Option<ActionSpec> {
        self.tree
            .find_by_tag(tag)
            .map(|item| item.primary_action().clone())
    }

    fn find_in_scope(&self, tag: &str, scope: Option<&str>) -> Option<&ToolbarItem> {
        match scope {
            None => self.tree.find_by_tag(tag),
            Some(scope_tag) => {
                let parent = self.tree.find_by_tag(scope_tag)?;
                tree::find_by_tag(parent.children(), tag)
            }
        }
    }

    pub fn on_visibility_check<F>(&mut self, checker: F)
    where
        F: Fn(&ToolbarItem) -> bool + 'static,
    {
        self.checkers.register(checker);
    }

    pub fn on_update<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ToolbarSnapshot<'_>) + 'static,
    {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn handle_navigation_event(&mut self, event: NavigationEvent) {
        log::debug!("toolbar: {}", event.label());
        match event {
            NavigationEvent::Start => self.on_navigation_start(),
            NavigationEvent::Success => self.on_navigation_success(),
        }
    }

    /// Cuts the toolbar back to the pinned items without publishing. A pinned
    /// item still in the toolbar keeps the children attached to it since.
    pub fn on_navigation_start(&mut self) {
        let mut live = self.tree.take_items();
        let restored = self
            .pinned
            .iter()
            .map(|pinned| {
                live.iter()
                    .position(|item| item.is_pinned() && item.tag() == pinned.tag())
                    .map(|index| live.swap_remove(index))
                    .unwrap_or_else(|| pinned.clone())
            })
            .collect();
        self.tree.reset_to(restored);
    }

    pub fn on_navigation_success(&mut self) {
        self.notify();
    }

    /// Drains queued navigation events on the calling thread. Returns how
    /// many were handled.
    pub fn pump_navigation_events(&mut self, events: &Receiver<NavigationEvent>) -> usize {
        let mut handled = 0;
        for event in events.try_iter() {
            self.handle_navigation_event(event);
            handled += 1;
        }
        handled
    }

    /// Current top-level items, in order.
    pub fn items(&self) -> &[ToolbarItem] {
        self.tree.items()
    }

    pub fn snapshot(&self) -> ToolbarSnapshot<'_> {
        ToolbarSnapshot::new(self.tree.items(), &self.checkers)
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&ToolbarItem> {
        self.tree.find_by_tag(tag)
    }

    pub fn is_visible(&self, item: &ToolbarItem) -> bool {
        resolve_visibility(item, &self.checkers)
    }

    pub fn pinned_tags(&self) -> Vec<&str> {
        self.pinned.iter().map(ToolbarItem::tag).collect()
    }

    pub fn sinks(&self) -> &NavigationSinks {
        &self.sinks
    }

    pub fn event_bus(&self) -> &ToolbarEventBus {
        &self.bus
    }

    fn notify(&mut self) {
        let snapshot = ToolbarSnapshot::new(self.tree.items(), &self.checkers);
        self.bus.publish(&snapshot);
    }
}

impl Default for ToolbarRegistry {
    fn default() -> Self {
        Self::new(NavigationSinks::default(), ToolbarEventBus::new())
    }
}
