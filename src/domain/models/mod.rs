pub mod menu;
pub mod navigation;

pub use menu::{MenuChild, MenuIcon, MenuSection};
pub use navigation::{
    is_child_active, is_section_active, resolve_active, ActiveTrail, ExpansionState, PanelState,
};
