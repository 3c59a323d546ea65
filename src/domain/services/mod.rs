// src/domain/services/mod.rs
pub mod confirmation;
