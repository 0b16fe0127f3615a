pub mod color_scheme;
pub mod platform;
pub mod text_type;
pub mod theme_color;

pub use color_scheme::ColorScheme;
pub use platform::Platform;
pub use text_type::TextType;
pub use theme_color::ThemeColor;
