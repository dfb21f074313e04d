/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Shared toolbar registry.
//!
//! Short-lived page controllers contribute items to a single hierarchical
//! toolbar through [`ToolbarRegistry`]. The registry keeps sibling lists
//! ordered, replaces items on duplicate tags, resolves visibility and actions
//! through closed descriptor types, and follows the host's navigation
//! lifecycle: the toolbar is cut back to its pinned items when navigation
//! starts and re-announced to listeners when navigation succeeds.

pub mod config;
pub mod events;
pub mod navigation;
pub mod registries;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ManifestError, ManifestItem, ToolbarManifest};
pub use events::{CHANNEL_TOOLBAR_UPDATED, SubscriptionId, ToolbarEventBus};
pub use navigation::{LocationSink, NavigationEvent, NavigationSinks, RouterSink};
pub use registries::atomic::action::{ActionExecution, ActionKind, ActionSpec};
pub use registries::atomic::icon::IconRef;
pub use registries::atomic::visibility::{VisibilityCheckers, VisibilitySpec};
pub use registries::domain::toolbar::{
    DIVIDER_NAME, ToolbarItem, ToolbarItemSpec, ToolbarRegistry, ToolbarSnapshot,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
