/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::cell::RefCell;
use std::rc::Rc;

use crate::navigation::NavigationSinks;

/// Navigation sinks that record every destination instead of navigating.
#[derive(Debug, Clone, Default)]
pub struct RecordingSinks {
    locations: Rc<RefCell<Vec<String>>>,
    routes: Rc<RefCell<Vec<String>>>,
}

impl RecordingSinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sinks(&self) -> NavigationSinks {
        let locations = Rc::clone(&self.locations);
        let routes = Rc::clone(&self.routes);
        NavigationSinks::new(
            move |href: &str| locations.borrow_mut().push(href.to_string()),
            move |path: &str| routes.borrow_mut().push(path.to_string()),
        )
    }

    pub fn locations(&self) -> Vec<String> {
        self.locations.borrow().clone()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.borrow().clone()
    }
}
