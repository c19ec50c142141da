use dioxus::prelude::*;

use crate::domain::models::MenuIcon;

/// Inline icon for a menu entry
#[component]
pub fn MenuGlyph(
    icon: MenuIcon,
    /// Extra BEM modifier, e.g. `c-menu-glyph--small`
    #[props(default = "")]
    class: &'static str,
) -> Element {
    let glyph_class = if class.is_empty() {
        "c-menu-glyph".to_string()
    } else {
        format!("c-menu-glyph {}", class)
    };
    let icon_name = icon.as_str();
    let glyph = icon.glyph();

    rsx! {
        span {
            class: "{glyph_class}",
            "data-icon": "{icon_name}",
            "aria-hidden": "true",
            "{glyph}"
        }
    }
}
