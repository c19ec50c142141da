use dioxus::prelude::*;

use crate::app::layouts::{GlobalSidebar, Navbar};
use crate::app::pages::portal_routes::Route;
use crate::config::ShellConfig;
use crate::shared::hooks::use_navigation_state;

/// Layout wrapping every portal route: panel, header, routed content
#[component]
pub fn PageShell() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let config = use_context::<ShellConfig>();
    let nav = use_navigation_state(&config);
    let current_path = use_route::<Route>().to_string();

    let layout_class = if nav.is_open() {
        "c-layout"
    } else {
        "c-layout c-layout--collapsed"
    };

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "{layout_class}",
            GlobalSidebar { nav, current_path: current_path.clone() }

            div { class: "c-layout__body",
                Navbar { current_path }

                main { class: "c-layout__main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
