use dioxus::prelude::*;

use crate::app::layouts::PageShell;
use crate::app::pages::PortalPage;
use crate::config::ShellConfig;
use crate::domain::menu::HOME_HREF;
use crate::shared::hooks::use_menu_audit;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Landing page
    #[redirect("/", || home_route())]
    #[layout(PageShell)]
        // Every portal path resolves against the menu
        #[route("/:..segments")]
        PortalPage { segments: Vec<String> },
}

/// Route for the portal landing page
pub fn home_route() -> Route {
    Route::PortalPage {
        segments: HOME_HREF
            .trim_start_matches('/')
            .split('/')
            .map(str::to_string)
            .collect(),
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(ShellConfig::load_embedded);
    use_menu_audit();

    use_effect(|| {
        tracing::info!("Franchisee portal shell mounted");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::all_hrefs;

    #[test]
    fn test_menu_paths_parse_to_portal_page() {
        let route = "/franchisee/finance/invoices".parse::<Route>().ok();
        assert_eq!(
            route,
            Some(Route::PortalPage {
                segments: vec![
                    "franchisee".to_string(),
                    "finance".to_string(),
                    "invoices".to_string(),
                ],
            })
        );
    }

    #[test]
    fn test_home_route_matches_home_href() {
        assert_eq!(home_route().to_string(), HOME_HREF);
        assert_eq!(HOME_HREF.parse::<Route>().ok(), Some(home_route()));
    }

    #[test]
    fn test_every_menu_href_round_trips() {
        for href in all_hrefs() {
            let route = href.parse::<Route>().ok();
            assert_eq!(route.map(|r| r.to_string()).as_deref(), Some(href));
        }
    }
}
