use dioxus::prelude::*;

use crate::config::ShellConfig;
use crate::domain::menu::{audit_menu, FRANCHISEE_MENU};
use crate::domain::models::{ExpansionState, PanelState};
use crate::shared::logging::{
    log_menu_audit_result, log_menu_defect, log_panel_toggled, log_section_toggled,
};

/// Panel and section state for the mounted shell
#[derive(Clone, Copy, PartialEq)]
pub struct NavigationState {
    pub panel: Signal<PanelState>,
    pub expansion: Signal<ExpansionState>,
}

impl NavigationState {
    pub fn is_open(&self) -> bool {
        self.panel.read().is_open()
    }

    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.expansion.read().is_expanded(section_id)
    }

    /// Open or close the panel
    pub fn toggle_panel(&self) {
        let mut panel = self.panel;
        let open = panel.write().toggle();
        log_panel_toggled(open);
    }

    /// Expand or collapse one section
    pub fn toggle_section(&self, section_id: &str) {
        let mut expansion = self.expansion;
        let expanded = expansion.write().toggle(section_id);
        log_section_toggled(section_id, expanded);
    }
}

/// Hook holding the shell's panel and expansion state.
/// State lives as long as the calling component stays mounted.
pub fn use_navigation_state(config: &ShellConfig) -> NavigationState {
    let panel_open = config.panel_open;
    let default_expanded = config.default_expanded.clone();

    let panel = use_signal(move || PanelState::new(panel_open));
    let expansion =
        use_signal(move || ExpansionState::with_default(FRANCHISEE_MENU, &default_expanded));

    NavigationState { panel, expansion }
}

/// Audit the menu once per app mount and log every defect
pub fn use_menu_audit() {
    use_hook(|| {
        let defects = audit_menu(FRANCHISEE_MENU);
        for defect in &defects {
            log_menu_defect(defect);
        }
        log_menu_audit_result(FRANCHISEE_MENU.len(), defects.len());
    });
}
