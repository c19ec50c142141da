pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the portal App
pub use pages::portal_routes::App;
