pub mod global_sidebar;
pub mod navbar;
pub mod page_shell;

pub use global_sidebar::GlobalSidebar;
pub use navbar::Navbar;
pub use page_shell::PageShell;
