use dioxus::prelude::*;

use crate::app::components::MenuGlyph;
use crate::domain::menu::FRANCHISEE_MENU;
use crate::domain::models::{is_child_active, is_section_active, MenuChild, MenuSection};
use crate::shared::hooks::NavigationState;

/// Collapsible panel listing every menu section.
///
/// `current_path` comes from the router and is only compared, never
/// modified. All state changes go through `nav`.
#[component]
pub fn GlobalSidebar(nav: NavigationState, current_path: String) -> Element {
    let panel_class = nav.panel.read().width_class();
    let is_open = nav.is_open();
    let toggle_label = if is_open { "Collapse menu" } else { "Expand menu" };
    let toggle_icon = if is_open { "«" } else { "»" };

    rsx! {
        aside { class: "c-sidebar {panel_class}",
            div { class: "c-sidebar__header",
                if is_open {
                    h2 { class: "c-sidebar__title", "Menu" }
                }
                button {
                    class: "c-sidebar__toggle",
                    r#type: "button",
                    aria_label: "{toggle_label}",
                    "aria-expanded": "{is_open}",
                    onclick: move |_| nav.toggle_panel(),
                    "{toggle_icon}"
                }
            }

            nav { class: "c-sidebar__nav",
                ul { class: "c-sidebar__sections",
                    for section in FRANCHISEE_MENU.iter() {
                        SidebarSection {
                            key: "{section.id}",
                            section,
                            nav,
                            current_path: current_path.clone(),
                        }
                    }
                }
            }
        }
    }
}

pub fn section_item_class(active: bool, expanded: bool) -> &'static str {
    match (active, expanded) {
        (true, true) => "c-sidebar__section c-sidebar__section--active c-sidebar__section--expanded",
        (true, false) => "c-sidebar__section c-sidebar__section--active",
        (false, true) => "c-sidebar__section c-sidebar__section--expanded",
        (false, false) => "c-sidebar__section",
    }
}

pub fn child_link_class(active: bool) -> &'static str {
    if active {
        "c-sidebar__child c-sidebar__child--active"
    } else {
        "c-sidebar__child"
    }
}

/// Children rendered under a section header; none while collapsed
pub fn visible_children(section: &'static MenuSection, expanded: bool) -> &'static [MenuChild] {
    if expanded { section.children } else { &[] }
}

/// One section: a toggle header with its children, or a single direct link
#[component]
fn SidebarSection(
    section: &'static MenuSection,
    nav: NavigationState,
    current_path: String,
) -> Element {
    let active = is_section_active(section, &current_path);
    let expanded = nav.is_expanded(section.id);
    let show_labels = nav.is_open();

    let item_class = section_item_class(active, expanded);
    let children = visible_children(section, expanded);
    let display_name = section.display_name;
    let section_id = section.id;

    if !section.has_children() {
        let href = section.direct_href.unwrap_or_default();
        return rsx! {
            li { class: "{item_class}", "data-section": "{section_id}", title: "{display_name}",
                Link {
                    to: href,
                    class: "c-sidebar__section-header",
                    MenuGlyph { icon: section.icon }
                    if show_labels {
                        span { class: "c-sidebar__section-label", "{display_name}" }
                    }
                }
            }
        };
    }

    let chevron = if expanded { "▾" } else { "▸" };

    rsx! {
        li { class: "{item_class}", "data-section": "{section_id}",
            button {
                class: "c-sidebar__section-header",
                r#type: "button",
                title: "{display_name}",
                "aria-expanded": "{expanded}",
                onclick: move |_| nav.toggle_section(section_id),
                MenuGlyph { icon: section.icon }
                if show_labels {
                    span { class: "c-sidebar__section-label", "{display_name}" }
                    span { class: "c-sidebar__chevron", "{chevron}" }
                }
            }

            if !children.is_empty() {
                ul { class: "c-sidebar__children",
                    for child in children.iter() {
                        SidebarChildLink {
                            key: "{child.href}",
                            child,
                            active: is_child_active(child, &current_path),
                            show_label: show_labels,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarChildLink(child: &'static MenuChild, active: bool, show_label: bool) -> Element {
    let link_class = child_link_class(active);
    let display_name = child.display_name;

    rsx! {
        li { title: "{display_name}",
            Link {
                to: child.href,
                class: "{link_class}",
                MenuGlyph { icon: child.icon, class: "c-menu-glyph--small" }
                if show_label {
                    span { class: "c-sidebar__child-label", "{display_name}" }
                }
            }
        }
    }
}
