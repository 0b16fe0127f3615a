//! Framework-free building blocks of the tab bar: theme tokens, spacing,
//! style rules, destinations and the tab list model.

pub mod enums;
pub mod shared;
