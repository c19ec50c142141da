pub mod portal_page;
pub mod portal_routes;

pub use portal_page::PortalPage;
