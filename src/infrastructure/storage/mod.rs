// src/infrastructure/storage/mod.rs
pub mod file_store;
