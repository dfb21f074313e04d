/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Navigation boundary of the toolbar.
//!
//! The registry neither starts navigations nor decides how a page change is
//! carried out. It listens for [`NavigationEvent`]s raised by the host and,
//! when an item action asks for a page change, hands the destination to one of
//! two sinks: a browser-level [`LocationSink`] that replaces the whole
//! location, or an in-app [`RouterSink`] that performs client-side routing.

use std::fmt;
use std::rc::Rc;

/// Discrete lifecycle signals raised by the host around a screen transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationEvent {
    /// Fired before the next screen begins loading.
    Start,
    /// Fired after the next screen has finished loading.
    Success,
}

impl NavigationEvent {
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "navigation.start",
            Self::Success => "navigation.success",
        }
    }
}

/// Browser-level sink: performs a full location change to `href`.
pub trait LocationSink {
    fn assign(&self, href: &str);
}

impl<F> LocationSink for F
where
    F: Fn(&str),
{
    fn assign(&self, href: &str) {
        self(href)
    }
}

/// In-app router sink: performs client-side navigation to `path`.
pub trait RouterSink {
    fn navigate(&self, path: &str);
}

impl<F> RouterSink for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}

struct DetachedLocation;

impl LocationSink for DetachedLocation {
    fn assign(&self, href: &str) {
        log::warn!("toolbar: no location sink installed, dropping navigation to '{href}'");
    }
}

struct DetachedRouter;

impl RouterSink for DetachedRouter {
    fn navigate(&self, path: &str) {
        log::warn!("toolbar: no router sink installed, dropping route to '{path}'");
    }
}

/// The pair of outbound navigation sinks an action may dispatch to.
#[derive(Clone)]
pub struct NavigationSinks {
    location: Rc<dyn LocationSink>,
    router: Rc<dyn RouterSink>,
}

impl NavigationSinks {
    pub fn new<L, R>(location: L, router: R) -> Self
    where
        L: LocationSink + 'static,
        R: RouterSink + 'static,
    {
        Self {
            location: Rc::new(location),
            router: Rc::new(router),
        }
    }

    /// Sinks that only log. Used until the host wires real ones in.
    pub fn detached() -> Self {
        Self {
            location: Rc::new(DetachedLocation),
            router: Rc::new(DetachedRouter),
        }
    }

    pub fn location(&self) -> &dyn LocationSink {
        self.location.as_ref()
    }

    pub fn router(&self) -> &dyn RouterSink {
        self.router.as_ref()
    }
}

impl Default for NavigationSinks {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for NavigationSinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationSinks").finish_non_exhaustive()
    }
}
