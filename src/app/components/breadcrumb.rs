use dioxus::prelude::*;

use crate::domain::models::ActiveTrail;

/// `Section › Child` trail for the content header
#[component]
pub fn Breadcrumb(
    section: &'static str,
    #[props(!optional)]
    child: Option<&'static str>,
) -> Element {
    rsx! {
        nav { class: "c-breadcrumb", "aria-label": "Breadcrumb",
            span { class: "c-breadcrumb__item", "{section}" }
            if let Some(child) = child {
                span { class: "c-breadcrumb__separator", "›" }
                span { class: "c-breadcrumb__item c-breadcrumb__item--current", "{child}" }
            }
        }
    }
}

/// Build breadcrumb labels from a resolved trail
pub fn trail_labels(trail: &ActiveTrail<'_>) -> Option<(&'static str, Option<&'static str>)> {
    trail
        .section
        .map(|section| (section.display_name, trail.child.map(|child| child.display_name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::FRANCHISEE_MENU;
    use crate::domain::models::resolve_active;

    #[test]
    fn test_trail_labels_for_child_route() {
        let trail = resolve_active(FRANCHISEE_MENU, "/franchisee/finance/payouts");
        assert_eq!(trail_labels(&trail), Some(("Finance", Some("Payouts"))));
    }

    #[test]
    fn test_trail_labels_for_direct_link() {
        let trail = resolve_active(FRANCHISEE_MENU, "/franchisee/support");
        assert_eq!(trail_labels(&trail), Some(("Support", None)));
    }

    #[test]
    fn test_trail_labels_unknown() {
        let trail = resolve_active(FRANCHISEE_MENU, "/nowhere");
        assert_eq!(trail_labels(&trail), None);
    }
}
