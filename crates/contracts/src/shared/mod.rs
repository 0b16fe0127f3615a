pub mod config;
pub mod destination;
pub mod interaction;
pub mod spacing;
pub mod style;
pub mod tab_list;
pub mod theme;
