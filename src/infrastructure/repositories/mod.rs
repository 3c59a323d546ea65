// src/infrastructure/repositories/mod.rs
pub mod file_repository;
pub mod json_import_repository;
pub mod memory_repository;
