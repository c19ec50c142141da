//! Structured logging helpers for the portal shell
//!
//! Every event carries an `operation` field so the shell's activity can be
//! filtered with a single directive.

use crate::shared::errors::ShellError;

/// Operation tag attached to each log event
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    MenuAudit,
    PanelToggle,
    SectionToggle,
    RouteResolution,
    ConfigLoad,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::MenuAudit => "menu_audit",
            LogOperation::PanelToggle => "panel_toggle",
            LogOperation::SectionToggle => "section_toggle",
            LogOperation::RouteResolution => "route_resolution",
            LogOperation::ConfigLoad => "config_load",
        }
    }
}

/// Log the outcome of the startup menu audit
pub fn log_menu_audit_result(section_count: usize, defect_count: usize) {
    if defect_count == 0 {
        tracing::info!(
            operation = LogOperation::MenuAudit.as_str(),
            section_count = section_count,
            "Menu audit passed"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::MenuAudit.as_str(),
            section_count = section_count,
            defect_count = defect_count,
            "Menu audit found configuration defects"
        );
    }
}

/// Log a single menu defect
pub fn log_menu_defect(defect: &ShellError) {
    tracing::warn!(
        operation = LogOperation::MenuAudit.as_str(),
        defect = %defect,
        "Menu configuration defect"
    );
}

pub fn log_panel_toggled(open: bool) {
    tracing::debug!(
        operation = LogOperation::PanelToggle.as_str(),
        open = open,
        "Panel toggled"
    );
}

pub fn log_section_toggled(section_id: &str, expanded: bool) {
    tracing::debug!(
        operation = LogOperation::SectionToggle.as_str(),
        section_id = section_id,
        expanded = expanded,
        "Section toggled"
    );
}

/// Log how a route resolved against the menu
pub fn log_route_resolved(path: &str, section_id: Option<&str>, child: Option<&str>) {
    match section_id {
        Some(section_id) => tracing::debug!(
            operation = LogOperation::RouteResolution.as_str(),
            path = path,
            section_id = section_id,
            child = child.unwrap_or("-"),
            "Route resolved"
        ),
        None => tracing::debug!(
            operation = LogOperation::RouteResolution.as_str(),
            path = path,
            "Route matches no menu entry"
        ),
    }
}

pub fn log_config_loaded(brand: &str, default_expanded: &str, panel_open: bool) {
    tracing::info!(
        operation = LogOperation::ConfigLoad.as_str(),
        brand = brand,
        default_expanded = default_expanded,
        panel_open = panel_open,
        "Shell config loaded"
    );
}

pub fn log_config_error(error: &ShellError) {
    tracing::error!(
        operation = LogOperation::ConfigLoad.as_str(),
        error = %error,
        "Invalid shell config"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::MenuAudit.as_str(), "menu_audit");
        assert_eq!(LogOperation::PanelToggle.as_str(), "panel_toggle");
        assert_eq!(LogOperation::SectionToggle.as_str(), "section_toggle");
        assert_eq!(LogOperation::RouteResolution.as_str(), "route_resolution");
        assert_eq!(LogOperation::ConfigLoad.as_str(), "config_load");
    }
}
