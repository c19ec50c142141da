//! Panel and section expansion state, plus active-route matching.
//!
//! Everything here is plain data so the rules can be checked without
//! mounting a component. The hooks in `shared::hooks` wrap these types in
//! signals.

use std::collections::BTreeMap;

use super::menu::{MenuChild, MenuSection};

/// Open/closed flag of the collapsible panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    open: bool,
}

impl PanelState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the panel and return the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Width modifier applied to the panel element
    pub fn width_class(&self) -> &'static str {
        if self.open {
            "c-sidebar--open"
        } else {
            "c-sidebar--collapsed"
        }
    }
}

/// Per-section expanded flags, keyed by section id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    flags: BTreeMap<String, bool>,
}

impl ExpansionState {
    /// Every section starts collapsed except `default_expanded`
    pub fn with_default(sections: &[MenuSection], default_expanded: &str) -> Self {
        let flags = sections
            .iter()
            .map(|section| (section.id.to_string(), section.id == default_expanded))
            .collect();
        Self { flags }
    }

    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.flags.get(section_id).copied().unwrap_or(false)
    }

    /// Flip one section's flag and return its new value.
    /// An id seen for the first time is recorded as expanded.
    pub fn toggle(&mut self, section_id: &str) -> bool {
        let flag = self.flags.entry(section_id.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn expanded_ids(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, expanded)| **expanded)
            .map(|(id, _)| id.as_str())
    }
}

/// A child link is active only on an exact route match
pub fn is_child_active(child: &MenuChild, route: &str) -> bool {
    child.href == route
}

/// A section is active when the route starts with its direct href or
/// equals one of its children's hrefs
pub fn is_section_active(section: &MenuSection, route: &str) -> bool {
    let direct = section
        .direct_href
        .is_some_and(|href| !href.is_empty() && route.starts_with(href));
    direct || section.children.iter().any(|child| is_child_active(child, route))
}

/// Section and child highlighted for a given route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveTrail<'a> {
    pub section: Option<&'a MenuSection>,
    pub child: Option<&'a MenuChild>,
}

impl<'a> ActiveTrail<'a> {
    /// Child name when a child matches, otherwise the section name
    pub fn title(&self) -> Option<&'static str> {
        self.child
            .map(|child| child.display_name)
            .or_else(|| self.section.map(|section| section.display_name))
    }
}

/// Resolve `route` against the menu.
///
/// The first section holding an exact child match wins; otherwise the first
/// section whose direct href prefixes the route.
pub fn resolve_active<'a>(sections: &'a [MenuSection], route: &str) -> ActiveTrail<'a> {
    for section in sections {
        if let Some(child) = section.child_by_href(route) {
            return ActiveTrail {
                section: Some(section),
                child: Some(child),
            };
        }
    }

    ActiveTrail {
        section: sections.iter().find(|section| is_section_active(section, route)),
        child: None,
    }
}
