pub mod action;
pub mod icon;
pub mod visibility;
