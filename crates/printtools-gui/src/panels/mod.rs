pub mod helpers;
pub mod home;
pub mod menu_bar;
pub mod not_found;
pub mod preview;
pub mod status;
pub mod tiler;
mod tips;
