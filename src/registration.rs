//! Guest registration
//!
//! Resolves a self-reported name against the [`GuestDirectory`] and records
//! at most one [`Registration`] per guest. Repeat check-ins for the same guest
//! return the original assignment without touching the log.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::directory::{normalize_name, GuestDirectory, SeatAssignment};

/// Client-correctable registration failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Name is required.")]
    NameRequired,

    #[error("Name not found. Please check spelling or contact an organiser.")]
    NotFound { name: String },
}

/// One checked-in guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub table_number: i32,
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    /// ISO-8601 UTC with millisecond precision, e.g. `2026-10-16T18:04:05.123Z`
    pub fn timestamp(&self) -> String {
        self.registered_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Outcome of a successful `register` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    pub seat: SeatAssignment,
    /// False when the guest had already checked in
    pub newly_registered: bool,
}

/// Registrations in check-in order, keyed by normalized name
#[derive(Debug, Default)]
pub struct RegistrationLog {
    entries: Vec<Registration>,
    keys: HashSet<String>,
}

impl RegistrationLog {
    /// Append unless `key` is already present. Returns true if appended.
    fn record(&mut self, key: String, registration: Registration) -> bool {
        if !self.keys.insert(key) {
            return false;
        }
        self.entries.push(registration);
        true
    }

    pub fn entries(&self) -> &[Registration] {
        &self.entries
    }
}

pub struct RegistrationService {
    directory: Arc<GuestDirectory>,
    log: Mutex<RegistrationLog>,
}

impl RegistrationService {
    pub fn new(directory: Arc<GuestDirectory>) -> Self {
        Self {
            directory,
            log: Mutex::new(RegistrationLog::default()),
        }
    }

    /// Check in the guest named `raw_name`, stamped with the current time.
    pub async fn register(&self, raw_name: &str) -> Result<CheckIn, RegistrationError> {
        self.register_at(raw_name, Utc::now()).await
    }

    /// Check in the guest named `raw_name`, stamped with `now` if this is
    /// their first check-in.
    pub async fn register_at(
        &self,
        raw_name: &str,
        now: DateTime<Utc>,
    ) -> Result<CheckIn, RegistrationError> {
        let key = normalize_name(raw_name);
        if key.is_empty() {
            return Err(RegistrationError::NameRequired);
        }

        let seat = self
            .directory
            .resolve(&key)
            .ok_or_else(|| RegistrationError::NotFound {
                name: raw_name.trim().to_string(),
            })?;

        // Lookup and append under one lock so concurrent identical requests
        // produce a single record.
        let newly_registered = self.log.lock().await.record(
            key,
            Registration {
                name: seat.name.clone(),
                table_number: seat.table_number,
                registered_at: now,
            },
        );

        Ok(CheckIn {
            seat,
            newly_registered,
        })
    }

    /// Snapshot of the log in check-in order
    pub async fn registrations(&self) -> Vec<Registration> {
        self.log.lock().await.entries().to_vec()
    }
}
