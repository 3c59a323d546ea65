// src/application/mod.rs
pub mod error;
pub mod services;
pub mod templates;

// Re-export key services for easier imports
pub use services::link_service_impl::LinkServiceImpl;
