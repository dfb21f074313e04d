/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Item visibility.
//!
//! Items without a visibility descriptor are hidden. Literal booleans and
//! closures answer for themselves; any other data is handed, together with the
//! item, to the externally registered [`VisibilityCheckers`], and the item is
//! visible only if every checker agrees.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::registries::domain::toolbar::ToolbarItem;

pub type VisibilityPredicate = Rc<dyn Fn() -> bool>;
pub type VisibilityChecker = Rc<dyn Fn(&ToolbarItem) -> bool>;

#[derive(Clone)]
pub enum VisibilitySpec {
    Literal(bool),
    /// Evaluated without the item; capture any context at registration time.
    Predicate(VisibilityPredicate),
    /// Opaque token judged by the registered checkers.
    Delegated(Value),
}

impl VisibilitySpec {
    pub fn hidden() -> Self {
        Self::Literal(false)
    }

    pub fn visible() -> Self {
        Self::Literal(true)
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Self::Predicate(Rc::new(predicate))
    }

    pub fn delegated(token: impl Into<Value>) -> Self {
        let token = token.into();
        if token.is_null() {
            return Self::hidden();
        }
        Self::Delegated(token)
    }

    /// Classifies an untyped descriptor: null hides, booleans are literal,
    /// everything else is delegated.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::hidden(),
            Value::Bool(literal) => Self::Literal(*literal),
            other => Self::Delegated(other.clone()),
        }
    }

    pub fn is_delegated(&self) -> bool {
        matches!(self, Self::Delegated(_))
    }

    /// The delegated token, if any.
    pub fn token(&self) -> Option<&Value> {
        match self {
            Self::Delegated(token) => Some(token),
            Self::Literal(_) | Self::Predicate(_) => None,
        }
    }
}

impl Default for VisibilitySpec {
    fn default() -> Self {
        Self::hidden()
    }
}

impl From<bool> for VisibilitySpec {
    fn from(literal: bool) -> Self {
        Self::Literal(literal)
    }
}

impl<T> From<Option<T>> for VisibilitySpec
where
    T: Into<VisibilitySpec>,
{
    fn from(descriptor: Option<T>) -> Self {
        descriptor.map(Into::into).unwrap_or_default()
    }
}

impl fmt::Debug for VisibilitySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Delegated(token) => f.debug_tuple("Delegated").field(token).finish(),
        }
    }
}

/// Ordered chain of checkers consulted for delegated visibility.
#[derive(Clone, Default)]
pub struct VisibilityCheckers {
    checkers: Vec<VisibilityChecker>,
}

impl VisibilityCheckers {
    pub fn register<F>(&mut self, checker: F)
    where
        F: Fn(&ToolbarItem) -> bool + 'static,
    {
        self.checkers.push(Rc::new(checker));
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Conjunction over all checkers, in registration order, stopping at the
    /// first `false`. An empty chain accepts.
    pub fn accepts(&self, item: &ToolbarItem) -> bool {
        self.checkers.iter().all(|checker| checker(item))
    }
}

impl fmt::Debug for VisibilityCheckers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityCheckers")
            .field("len", &self.checkers.len())
            .finish()
    }
}

pub fn resolve_visibility(item: &ToolbarItem, checkers: &VisibilityCheckers) -> bool {
    match item.visibility() {
        VisibilitySpec::Literal(literal) => *literal,
        VisibilitySpec::Predicate(predicate) => predicate(),
        VisibilitySpec::Delegated(_) => checkers.accepts(item),
    }
}
