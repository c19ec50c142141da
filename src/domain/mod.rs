// Menu data and navigation rules
// Pure Rust, no framework dependencies

pub mod menu;
pub mod models;
