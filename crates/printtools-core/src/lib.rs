pub mod config;
pub mod consts;
pub mod error;
pub mod field;
pub mod form;
pub mod i18n;
pub mod io;
pub mod layout;
pub mod paper;
pub mod preview;
pub mod render;
pub mod route;
pub mod tile;
pub mod units;
