// Custom Dioxus hooks
pub mod use_navigation;

pub use use_navigation::{use_menu_audit, use_navigation_state, NavigationState};
