use dioxus::prelude::*;

use crate::app::components::breadcrumb::trail_labels;
use crate::app::components::{Breadcrumb, MenuGlyph};
use crate::config::ShellConfig;
use crate::domain::menu::FRANCHISEE_MENU;
use crate::domain::models::resolve_active;
use crate::shared::logging::log_route_resolved;

/// Content area for any portal path.
///
/// Known paths get a heading and breadcrumb from the menu; anything else
/// renders a not-found block linking back home.
#[component]
pub fn PortalPage(segments: Vec<String>) -> Element {
    let config = use_context::<ShellConfig>();
    let path = format!("/{}", segments.join("/"));

    let trail = resolve_active(FRANCHISEE_MENU, &path);
    log_route_resolved(
        &path,
        trail.section.map(|section| section.id),
        trail.child.map(|child| child.display_name),
    );

    let (Some(section), Some((section_label, child_label))) = (trail.section, trail_labels(&trail))
    else {
        return rsx! {
            div { class: "c-page c-page--not-found",
                h2 { class: "c-page__title", "Page not found" }
                p { class: "c-page__description", "Nothing in the portal lives at {path}." }
                Link {
                    to: config.home_href.clone(),
                    class: "c-page__back-link",
                    "← Back to dashboard"
                }
            }
        };
    };

    let icon = trail.child.map(|child| child.icon).unwrap_or(section.icon);
    let title = child_label.unwrap_or(section_label);

    rsx! {
        div { class: "c-page",
            Breadcrumb { section: section_label, child: child_label }
            header { class: "c-page__header",
                MenuGlyph { icon }
                h2 { class: "c-page__title", "{title}" }
            }
            section { class: "c-page__body",
                p { class: "c-page__description",
                    "{title} content is provided by the portal module mounted at {path}."
                }
            }
        }
    }
}
