// src/domain/services/confirmation.rs
use crate::domain::link::LinkRecord;

/// Asks the user before a destructive operation goes through.
///
/// Kept as a trait so the interactive y/N prompt stays out of the
/// application layer and tests can script the answer.
pub trait ConfirmationProvider {
    fn confirm_delete(&self, record: &LinkRecord) -> bool;
}
