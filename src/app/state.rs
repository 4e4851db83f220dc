//! Application state definitions
//!
//! Contains the top-level AppState and AppMode types plus per-screen
//! state owned by the running application.

use crate::forms::{ChauffeurState, ContactState, LoginState, SignupState};
use crate::ui::wizard::ReservationScreenState;

/// Application operating modes, one per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Home menu - entry point for all screens
    Home,
    /// Three-step booking wizard
    Reservations,
    /// Chauffeur booking form
    Chauffeur,
    /// Services and amenities listing
    Services,
    /// About page
    About,
    /// Contact form
    Contact,
    /// Sign-in form
    Login,
    /// Account creation form
    Signup,
}

impl AppMode {
    /// Screen title shown in the chrome.
    pub fn title(&self) -> &'static str {
        match self {
            AppMode::Home => "Lincoln Hotels",
            AppMode::Reservations => "Reserve Your Stay",
            AppMode::Chauffeur => "Chauffeur Service",
            AppMode::Services => "Services & Amenities",
            AppMode::About => "About Lincoln Hotels",
            AppMode::Contact => "Contact Us",
            AppMode::Login => "Sign In",
            AppMode::Signup => "Create Account",
        }
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether the status message is an error
    pub status_is_error: bool,
    /// Home menu selection state
    pub home_selection: usize,
    /// Scroll offset for the about page
    pub about_scroll: u16,
    /// Scroll offset for the services page
    pub services_scroll: u16,
    /// Booking wizard screen state
    pub reservations: ReservationScreenState,
    /// Chauffeur form state
    pub chauffeur: ChauffeurState,
    /// Contact form state
    pub contact: ContactState,
    /// Login form state
    pub login: LoginState,
    /// Signup form state
    pub signup: SignupState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Home,
            status_message: String::new(),
            status_is_error: false,
            home_selection: 0,
            about_scroll: 0,
            services_scroll: 0,
            reservations: ReservationScreenState::new(),
            chauffeur: ChauffeurState::new(),
            contact: ContactState::new(),
            login: LoginState::new(),
            signup: SignupState::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to a new screen, resetting the one being left.
    ///
    /// In-progress drafts do not survive navigation: leaving the
    /// reservations screen discards the wizard, and form screens come
    /// back blank.
    pub fn enter_mode(&mut self, mode: AppMode) {
        match self.mode {
            AppMode::Reservations => self.reservations = ReservationScreenState::new(),
            AppMode::Chauffeur => self.chauffeur = ChauffeurState::new(),
            AppMode::Contact => self.contact = ContactState::new(),
            AppMode::Login => self.login = LoginState::new(),
            AppMode::Signup => self.signup = SignupState::new(),
            AppMode::About => self.about_scroll = 0,
            AppMode::Services => self.services_scroll = 0,
            AppMode::Home => {}
        }
        self.mode = mode;
        self.clear_status();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    pub fn clear_status(&mut self) {
        self.status_message.clear();
        self.status_is_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_starts_at_home() {
        let state = AppState::default();
        assert_eq!(state.mode, AppMode::Home);
        assert_eq!(state.home_selection, 0);
        assert!(state.status_message.is_empty());
    }

    #[test]
    fn leaving_reservations_discards_draft() {
        let mut state = AppState::default();
        state.enter_mode(AppMode::Reservations);
        state.reservations.check_in_input = "2026-09-01".to_string();
        state.reservations.check_out_input = "2026-09-04".to_string();
        state.reservations.sync_dates();
        assert_eq!(state.reservations.wizard.draft().night_count(), 3);

        state.enter_mode(AppMode::Home);
        state.enter_mode(AppMode::Reservations);
        assert_eq!(state.reservations.wizard.draft().night_count(), 0);
    }

    #[test]
    fn entering_mode_clears_status() {
        let mut state = AppState::default();
        state.set_error("something went wrong");
        state.enter_mode(AppMode::About);
        assert!(state.status_message.is_empty());
        assert!(!state.status_is_error);
    }
}
