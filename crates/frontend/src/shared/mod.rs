pub mod components;
pub mod config;
pub mod icons;
pub mod page_frame;
pub mod screen;
pub mod theme;
