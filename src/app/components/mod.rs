pub mod breadcrumb;
pub mod menu_glyph;

pub use breadcrumb::Breadcrumb;
pub use menu_glyph::MenuGlyph;
