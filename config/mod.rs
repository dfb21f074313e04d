/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Declarative toolbar manifest.
//!
//! A host can seed the toolbar from a TOML file instead of code:
//!
//! ```toml
//! [[pinned]]
//! tag = "home"
//! name = "Home"
//! icon = "fa-home"
//! visible = true
//! action = "/"
//!
//! [[item]]
//! tag = "admin"
//! name = "Admin"
//! visible = "role:admin"
//! action = "ref:/admin"
//! ```
//!
//! `visible` and `action` take the same untyped descriptors a controller
//! would pass: booleans are literal visibility, any other visibility value is
//! delegated to the registered checkers, and action strings are classified by
//! prefix. Callbacks and predicates have no manifest form.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registries::atomic::action::ActionSpec;
use crate::registries::atomic::icon::IconRef;
use crate::registries::atomic::visibility::VisibilitySpec;
use crate::registries::domain::toolbar::{ToolbarItemSpec, ToolbarRegistry};

const MANIFEST_DIR: &str = "toolbar-registry";
const MANIFEST_FILE: &str = "toolbar.toml";

#[derive(Debug)]
pub enum ManifestError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Io(e) => write!(f, "IO error: {e}"),
            ManifestError::Parse(e) => write!(f, "Manifest parse error: {e}"),
        }
    }
}

impl std::error::Error for ManifestError {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestItem {
    pub tag: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub visible: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub action: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_icon: Option<IconRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_action: Option<Value>,
}

impl ManifestItem {
    pub fn to_spec(&self) -> ToolbarItemSpec {
        let mut spec = ToolbarItemSpec::new(self.tag.as_str(), self.name.as_str())
            .order(self.order)
            .visible(VisibilitySpec::from_value(&self.visible))
            .action(ActionSpec::from_value(&self.action));
        if let Some(icon) = &self.icon {
            spec = spec.icon(icon.clone());
        }
        if let Some(tooltip) = &self.tooltip {
            spec = spec.tooltip(tooltip.as_str());
        }
        if let Some(parent) = &self.parent {
            spec = spec.parent(parent.as_str());
        }
        if let Some(icon) = &self.secondary_icon {
            spec = spec.secondary_icon(icon.clone());
        }
        if let Some(action) = &self.secondary_action {
            spec = spec.secondary_action(ActionSpec::from_value(action));
        }
        spec
    }
}

/// Pinned and page-level items to register at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolbarManifest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pinned: Vec<ManifestItem>,
    #[serde(default, rename = "item", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ManifestItem>,
}

impl ToolbarManifest {
    pub fn from_toml_str(source: &str) -> Result<Self, ManifestError> {
        toml::from_str(source).map_err(|e| ManifestError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ManifestError> {
        toml::to_string_pretty(self).map_err(|e| ManifestError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let source = fs::read_to_string(path)
            .map_err(|e| ManifestError::Io(format!("{}: {e}", path.display())))?;
        let manifest = Self::from_toml_str(&source)?;
        log::info!(
            "toolbar: loaded manifest {} ({} pinned, {} items)",
            path.display(),
            manifest.pinned.len(),
            manifest.items.len()
        );
        Ok(manifest)
    }

    /// Loads the manifest at [`Self::default_path`]. A missing file is an
    /// empty manifest.
    pub fn load_default() -> Result<Self, ManifestError> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("toolbar: no manifest at {}", path.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn default_path() -> Result<PathBuf, ManifestError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ManifestError::Io("config dir not found".to_string()))?;
        Ok(config_dir.join(MANIFEST_DIR).join(MANIFEST_FILE))
    }

    /// Registers pinned entries first, then page items, each in file order.
    pub fn apply(&self, registry: &mut ToolbarRegistry) {
        for entry in &self.pinned {
            registry.add_pinned_item(entry.to_spec());
        }
        for entry in &self.items {
            registry.add_item(entry.to_spec());
        }
    }
}
