/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Change notification for the toolbar.
//!
//! [`ToolbarEventBus`] is an explicitly constructed observer list for the
//! `toolbar.updated` channel. Listeners run synchronously, in subscription
//! order, and receive a read-only [`ToolbarSnapshot`] of the current items.
//! A listener that panics unwinds through [`ToolbarEventBus::publish`] and the
//! listeners after it are not called.

use std::fmt;

use crate::registries::domain::toolbar::ToolbarSnapshot;

pub const CHANNEL_TOOLBAR_UPDATED: &str = "toolbar.updated";

type UpdateListener = Box<dyn FnMut(&ToolbarSnapshot<'_>)>;

/// Handle returned by [`ToolbarEventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

#[derive(Default)]
pub struct ToolbarEventBus {
    listeners: Vec<(SubscriptionId, UpdateListener)>,
    next_id: u64,
    published: u64,
}

impl ToolbarEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ToolbarSnapshot<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        log::debug!("{CHANNEL_TOOLBAR_UPDATED}: listener {id} subscribed");
        id
    }

    /// Returns `false` when `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = self.listeners.len() != before;
        if removed {
            log::debug!("{CHANNEL_TOOLBAR_UPDATED}: listener {id} unsubscribed");
        }
        removed
    }

    pub fn publish(&mut self, snapshot: &ToolbarSnapshot<'_>) {
        self.published += 1;
        log::trace!(
            "{CHANNEL_TOOLBAR_UPDATED}: broadcast #{} to {} listener(s)",
            self.published,
            self.listeners.len()
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(snapshot);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of broadcasts since construction.
    pub fn published_count(&self) -> u64 {
        self.published
    }
}

impl fmt::Debug for ToolbarEventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolbarEventBus")
            .field("listeners", &self.listeners.len())
            .field("published", &self.published)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registries::atomic::visibility::VisibilityCheckers;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn empty_snapshot(checkers: &VisibilityCheckers) -> ToolbarSnapshot<'_> {
        ToolbarSnapshot::new(&[], checkers)
    }

    #[test]
    fn publish_reaches_listeners_in_subscription_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut bus = ToolbarEventBus::new();
        for name in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            bus.subscribe(move |_| calls.borrow_mut().push(name));
        }

        let checkers = VisibilityCheckers::default();
        bus.publish(&empty_snapshot(&checkers));

        assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);
        assert_eq!(bus.published_count(), 1);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let calls = Rc::new(RefCell::new(0));
        let mut bus = ToolbarEventBus::new();
        let counter = Rc::clone(&calls);
        let id = bus.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));

        let checkers = VisibilityCheckers::default();
        bus.publish(&empty_snapshot(&checkers));
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn subscription_ids_are_not_reused() {
        let mut bus = ToolbarEventBus::new();
        let first = bus.subscribe(|_| {});
        bus.unsubscribe(first);
        let second = bus.subscribe(|_| {});
        assert_ne!(first, second);
    }
}
