pub mod explore;
pub mod home;
pub mod not_found;
pub mod tv_focus;
