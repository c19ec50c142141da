use dioxus::prelude::*;

use crate::config::ShellConfig;
use crate::domain::menu::FRANCHISEE_MENU;
use crate::domain::models::resolve_active;

/// Header with the brand link and the title of the active entry
#[component]
pub fn Navbar(current_path: String) -> Element {
    let config = use_context::<ShellConfig>();
    let trail = resolve_active(FRANCHISEE_MENU, &current_path);
    let page_title = trail.title();
    let brand = config.brand.clone();

    rsx! {
        header { class: "c-navbar",
            Link {
                to: config.home_href.clone(),
                class: "c-navbar__logo",
                "{brand}"
            }
            if let Some(title) = page_title {
                h1 { class: "c-navbar__title", "{title}" }
            }
        }
    }
}
