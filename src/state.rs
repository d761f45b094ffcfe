//! Shared application state
//!
//! Built once in `main` and cloned into every handler. The guest directory is
//! read-only; the registration log is owned by the service behind its own lock.

use std::sync::Arc;

use crate::config::Config;
use crate::directory::{DirectoryError, GuestDirectory};
use crate::registration::RegistrationService;

#[derive(Clone)]
pub struct AppState {
    pub registrations: Arc<RegistrationService>,
}

impl AppState {
    pub fn new(directory: GuestDirectory) -> Self {
        Self {
            registrations: Arc::new(RegistrationService::new(Arc::new(directory))),
        }
    }

    /// Load the guest list named by `config` and wrap it in fresh state.
    pub fn from_config(config: &Config) -> Result<Self, DirectoryError> {
        let directory = GuestDirectory::load(&config.guest_list_path)?;
        Ok(Self::new(directory))
    }
}
