/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Item actions.
//!
//! An [`ActionSpec`] is classified once, when the item is built, from whatever
//! the registering controller supplied:
//!
//! * nothing, or an empty string: no-op
//! * text starting with `http`: absolute URL for the browser location sink
//! * text starting with `ref:`: relative URL, prefix stripped, for the
//!   browser location sink
//! * any other text: in-app path for the router sink
//! * a closure: invoked with no arguments

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::navigation::NavigationSinks;

pub(crate) const ABSOLUTE_URL_PREFIX: &str = "http";
pub(crate) const RELATIVE_REF_PREFIX: &str = "ref:";

pub type ActionCallback = Rc<dyn Fn()>;

#[derive(Clone, Default)]
pub enum ActionSpec {
    #[default]
    None,
    Callback(ActionCallback),
    AbsoluteUrl(String),
    /// Holds the destination with the `ref:` prefix already removed.
    RelativeRef(String),
    InternalPath(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    None,
    Callback,
    AbsoluteUrl,
    RelativeRef,
    InternalPath,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Callback => "callback",
            Self::AbsoluteUrl => "absolute_url",
            Self::RelativeRef => "relative_ref",
            Self::InternalPath => "internal_path",
        }
    }
}

/// Outcome of running an action, for callers that want to know what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionExecution {
    /// Tag of the item whose action ran, when the action was found by tag.
    pub tag: Option<String>,
    pub kind: ActionKind,
    /// Destination handed to a navigation sink, if any.
    pub target: Option<String>,
    /// `true` when something was dispatched.
    pub succeeded: bool,
}

impl ActionExecution {
    pub(crate) fn not_found() -> Self {
        Self {
            tag: None,
            kind: ActionKind::None,
            target: None,
            succeeded: false,
        }
    }

    pub(crate) fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }
}

impl ActionSpec {
    /// Classifies a textual action descriptor.
    pub fn classify(descriptor: impl Into<String>) -> Self {
        let descriptor = descriptor.into();
        if descriptor.is_empty() {
            return Self::None;
        }
        if descriptor.starts_with(ABSOLUTE_URL_PREFIX) {
            return Self::AbsoluteUrl(descriptor);
        }
        if let Some(remainder) = descriptor.strip_prefix(RELATIVE_REF_PREFIX) {
            return Self::RelativeRef(remainder.to_string());
        }
        Self::InternalPath(descriptor)
    }

    pub fn callback<F>(callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self::Callback(Rc::new(callback))
    }

    /// Classifies an untyped descriptor, e.g. one read from a manifest.
    ///
    /// Shapes other than null and string have no defined meaning and resolve to
    /// a no-op.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::None,
            Value::String(text) => Self::classify(text.as_str()),
            other => {
                log::warn!("toolbar: unrecognized action descriptor {other}, treating as no-op");
                Self::None
            }
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::None => ActionKind::None,
            Self::Callback(_) => ActionKind::Callback,
            Self::AbsoluteUrl(_) => ActionKind::AbsoluteUrl,
            Self::RelativeRef(_) => ActionKind::RelativeRef,
            Self::InternalPath(_) => ActionKind::InternalPath,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The destination this action navigates to, if it navigates at all.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::AbsoluteUrl(target) | Self::RelativeRef(target) | Self::InternalPath(target) => {
                Some(target.as_str())
            }
            Self::None | Self::Callback(_) => None,
        }
    }

    pub fn execute(&self, sinks: &NavigationSinks) -> ActionExecution {
        match self {
            Self::None => {}
            Self::Callback(callback) => callback(),
            Self::AbsoluteUrl(href) | Self::RelativeRef(href) => sinks.location().assign(href),
            Self::InternalPath(path) => sinks.router().navigate(path),
        }
        let kind = self.kind();
        log::debug!("toolbar: executed {} action", kind.label());
        ActionExecution {
            tag: None,
            kind,
            target: self.target().map(str::to_string),
            succeeded: kind != ActionKind::None,
        }
    }
}

impl From<&str> for ActionSpec {
    fn from(descriptor: &str) -> Self {
        Self::classify(descriptor)
    }
}

impl From<String> for ActionSpec {
    fn from(descriptor: String) -> Self {
        Self::classify(descriptor)
    }
}

impl<T> From<Option<T>> for ActionSpec
where
    T: Into<ActionSpec>,
{
    fn from(descriptor: Option<T>) -> Self {
        descriptor.map(Into::into).unwrap_or_default()
    }
}

impl fmt::Debug for ActionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Callback(_) => f.write_str("Callback(..)"),
            Self::AbsoluteUrl(href) => f.debug_tuple("AbsoluteUrl").field(href).finish(),
            Self::RelativeRef(href) => f.debug_tuple("RelativeRef").field(href).finish(),
            Self::InternalPath(path) => f.debug_tuple("InternalPath").field(path).finish(),
        }
    }
}
