// src/domain/repositories/mod.rs
pub mod import_repository;
pub mod repository;
