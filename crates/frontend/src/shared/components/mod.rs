pub mod external_link;
pub mod symbol_view;
pub mod themed_text;
pub mod themed_view;
