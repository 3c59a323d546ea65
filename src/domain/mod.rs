// src/domain/mod.rs
pub mod category;
pub mod error;
pub mod grouping;
pub mod link;
pub mod repositories;
pub mod services;
