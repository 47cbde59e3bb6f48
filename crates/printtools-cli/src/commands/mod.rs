pub mod config;
pub mod layout;
pub mod presets;
pub mod render;
pub mod sheet;
