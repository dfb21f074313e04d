/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Toolbar domain registry: the item forest, its read-only snapshot and the
//! registry that ties both to listeners and navigation.

mod item;
mod registry;
mod snapshot;
pub(crate) mod tree;

pub use item::{DIVIDER_NAME, ToolbarItem, ToolbarItemSpec};
pub use registry::ToolbarRegistry;
pub use snapshot::ToolbarSnapshot;
pub use tree::find_by_tag;
