// src/infrastructure/mod.rs
pub mod confirmation;
pub mod di;
pub mod error;
pub(crate) mod json;
pub mod repositories;
pub mod storage;
