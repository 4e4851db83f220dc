//! Lincoln Hotels TUI Library
//!
//! Core functionality for the Lincoln Hotels booking and concierge TUI:
//! the reservation wizard state machine, static catalogs, form
//! validation, and the saved booking request format.

pub mod app;
pub mod booking;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod forms;
pub mod request_file;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use booking::{
    price_summary, BookingTransitionError, BookingWizard, DraftReservation, PriceSummary,
    WizardStage, TAX_RATE,
};
pub use catalog::{amenities, room_by_id, rooms, vehicle_by_id, vehicles, Amenity, CatalogEntry};
pub use error::LincolnTuiError;
pub use forms::{
    email_looks_valid, ChauffeurState, ContactState, LoginState, SignupState, DEMO_EMAIL,
    DEMO_PASSWORD,
};
pub use request_file::BookingRequest;
pub use types::{Department, TripDuration};
