// src/application/templates/mod.rs
pub mod page;
