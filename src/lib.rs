//! Guest check-in server
//!
//! Guests type their name on arrival; the server matches it against the
//! seating plan loaded at startup, records the check-in once, and tells them
//! their table. Organisers download the check-in list as CSV.

pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod registration;
pub mod router;
pub mod routes;
pub mod state;

pub use config::Config;
pub use directory::GuestDirectory;
pub use registration::{RegistrationError, RegistrationService};
pub use router::build_router;
pub use state::AppState;
