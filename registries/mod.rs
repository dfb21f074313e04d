//! Atomic resolvers (actions, visibility, icons) and the toolbar domain
//! registry built on top of them.

pub mod atomic;
pub mod domain;
