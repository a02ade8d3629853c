//! Interactive terminal lab for twoproblems
pub mod app;
pub mod card;
pub mod header;
pub mod input;
pub mod overlay;
pub mod theme;
pub mod ui;
#[allow(clippy::module_inception)]
pub mod viewer;
