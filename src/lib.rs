// Public API exports (shared between client and server)
pub mod domain;
pub mod shared;
pub mod config;

// App is always available
pub mod app;
