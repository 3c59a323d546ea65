// src/infrastructure/confirmation.rs
use crate::domain::link::LinkRecord;
use crate::domain::services::confirmation::ConfirmationProvider;
use std::io;
use std::io::Write;

/// Interactive y/N prompt on the terminal. Anything but an explicit
/// yes counts as declined.
#[derive(Debug, Default)]
pub struct StdinConfirmation;

impl StdinConfirmation {
    pub fn new() -> Self {
        Self
    }
}

impl ConfirmationProvider for StdinConfirmation {
    fn confirm_delete(&self, record: &LinkRecord) -> bool {
        eprint!("Delete \"{}\" ({})? (y/N): ", record.title, record.url);
        io::stderr().flush().ok();

        let mut user_input = String::new();
        if io::stdin().read_line(&mut user_input).is_err() {
            return false;
        }

        matches!(user_input.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
