/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::fmt;

use serde::{Deserialize, Serialize};

pub(crate) const IMAGE_ICON_PREFIX: &str = "img:";

/// Icon reference as supplied by the registering controller: either an icon
/// font class name or, with an `img:` prefix, an image URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_image(&self) -> bool {
        self.0.starts_with(IMAGE_ICON_PREFIX)
    }

    /// Image URL with the prefix removed, or `None` for font icons.
    pub fn image_url(&self) -> Option<&str> {
        self.0.strip_prefix(IMAGE_ICON_PREFIX)
    }

    /// Font class name, or `None` for image icons.
    pub fn font_class(&self) -> Option<&str> {
        (!self.is_image()).then_some(self.0.as_str())
    }
}

impl From<&str> for IconRef {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for IconRef {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
