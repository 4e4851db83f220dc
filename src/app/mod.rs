//! Application module
//!
//! Contains the main application struct, event loop, and per-screen
//! key handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState};

use crate::booking::WizardStage;
use crate::request_file::BookingRequest;
use crate::ui::pages::HOME_MENU;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::path::PathBuf;
use std::time::Duration;

/// Main application struct.
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// When set, submitted bookings are written here as JSON.
    save_request_path: Option<PathBuf>,
}

impl App {
    pub fn new(save_request_path: Option<PathBuf>) -> Self {
        info!("Creating new App instance");
        Self {
            state: AppState::new(),
            ui_renderer: UiRenderer::new(),
            save_request_path,
        }
    }

    /// Read-only view of the application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main event loop until the user quits.
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> crate::error::Result<()> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| self.ui_renderer.render(f, &self.state))?;

            if !crossterm::event::poll(Duration::from_millis(50))? {
                continue;
            }
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key_event(key) {
                        break;
                    }
                }
                _ => {}
            }
        }

        info!("Main loop finished");
        Ok(())
    }

    /// Handle a key press. Returns true when the application should exit.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.state.mode {
            AppMode::Home => self.handle_home_key(key),
            AppMode::About | AppMode::Services => {
                self.handle_page_key(key);
                false
            }
            AppMode::Reservations => {
                self.handle_reservations_key(key);
                false
            }
            AppMode::Chauffeur => {
                self.handle_chauffeur_key(key);
                false
            }
            AppMode::Contact => {
                self.handle_contact_key(key);
                false
            }
            AppMode::Login => {
                self.handle_login_key(key);
                false
            }
            AppMode::Signup => {
                self.handle_signup_key(key);
                false
            }
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                if self.state.home_selection > 0 {
                    self.state.home_selection -= 1;
                }
            }
            KeyCode::Down => {
                if self.state.home_selection + 1 < HOME_MENU.len() {
                    self.state.home_selection += 1;
                }
            }
            KeyCode::Enter => {
                let mode = match self.state.home_selection {
                    0 => AppMode::Reservations,
                    1 => AppMode::Chauffeur,
                    2 => AppMode::Services,
                    3 => AppMode::About,
                    4 => AppMode::Contact,
                    5 => AppMode::Login,
                    _ => AppMode::Signup,
                };
                debug!("Entering mode {:?}", mode);
                self.state.enter_mode(mode);
            }
            _ => {}
        }
        false
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        let scroll = match self.state.mode {
            AppMode::About => &mut self.state.about_scroll,
            _ => &mut self.state.services_scroll,
        };
        match key.code {
            KeyCode::Esc => self.state.enter_mode(AppMode::Home),
            KeyCode::Up => *scroll = scroll.saturating_sub(1),
            KeyCode::Down => *scroll = scroll.saturating_add(1),
            KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
            KeyCode::PageDown => *scroll = scroll.saturating_add(10),
            _ => {}
        }
    }

    fn handle_reservations_key(&mut self, key: KeyEvent) {
        let screen = &mut self.state.reservations;
        // Any interaction dismisses the previous submit acknowledgment;
        // a fresh submit re-sets it after this handler runs.
        screen.ack = None;
        match key.code {
            KeyCode::Esc => {
                // Navigating away discards the in-progress draft.
                self.state.enter_mode(AppMode::Home);
                return;
            }
            KeyCode::Tab => screen.next_field(),
            KeyCode::BackTab => screen.previous_field(),
            KeyCode::Up if screen.wizard.stage() == WizardStage::SelectStay => screen.room_up(),
            KeyCode::Down if screen.wizard.stage() == WizardStage::SelectStay => {
                screen.room_down()
            }
            KeyCode::Left if screen.wizard.stage() == WizardStage::SelectStay => {
                screen.adjust_guests(-1)
            }
            KeyCode::Right if screen.wizard.stage() == WizardStage::SelectStay => {
                screen.adjust_guests(1)
            }
            KeyCode::Backspace => {
                if let Some(text) = screen.current_text_mut() {
                    if text.pop().is_some() {
                        screen.sync_dates();
                    } else {
                        // Empty field: Backspace steps back a stage.
                        match screen.wizard.retreat() {
                            Ok(stage) => debug!("Retreated to {:?}", stage),
                            Err(e) => debug!("Retreat blocked: {}", e),
                        }
                    }
                } else {
                    match screen.wizard.retreat() {
                        Ok(stage) => debug!("Retreated to {:?}", stage),
                        Err(e) => debug!("Retreat blocked: {}", e),
                    }
                }
                return;
            }
            KeyCode::Enter => {
                self.handle_reservation_enter();
                return;
            }
            KeyCode::Char(c) => {
                if let Some(text) = screen.current_text_mut() {
                    text.push(c);
                    screen.sync_dates();
                }
            }
            _ => {}
        }
        self.state.clear_status();
    }

    fn handle_reservation_enter(&mut self) {
        let screen = &mut self.state.reservations;
        if screen.wizard.stage() == WizardStage::Confirmation {
            match screen.wizard.submit() {
                Ok(draft) => {
                    info!(
                        "Booking submitted: room {:?}, {} nights",
                        draft.room_id,
                        draft.night_count()
                    );
                    let mut ack = "Reservation confirmed! A confirmation email is on its way."
                        .to_string();
                    if let Some(ref path) = self.save_request_path {
                        match BookingRequest::from_draft(&draft) {
                            Some(request) => match request.save_to_file(path) {
                                Ok(()) => {
                                    ack = format!(
                                        "Reservation confirmed! Request saved to {}",
                                        path.display()
                                    );
                                }
                                Err(e) => {
                                    warn!("Failed to save booking request: {:#}", e);
                                    self.state.set_error(format!(
                                        "Booking confirmed but saving failed: {}",
                                        e
                                    ));
                                    self.state.reservations.ack = Some(ack);
                                    return;
                                }
                            },
                            None => warn!("Submitted draft was missing fields, nothing saved"),
                        }
                    }
                    screen.ack = Some(ack.clone());
                    self.state.set_status(ack);
                }
                Err(e) => self.state.set_error(e.to_string()),
            }
        } else {
            match screen.wizard.advance() {
                Ok(stage) => {
                    debug!("Advanced to {:?}", stage);
                    self.state.clear_status();
                }
                Err(e) => self.state.set_error(e.to_string()),
            }
        }
    }

    fn handle_chauffeur_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.chauffeur;
        match key.code {
            KeyCode::Esc => {
                self.state.enter_mode(AppMode::Home);
                return;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Left | KeyCode::Right => {
                use crate::forms::ChauffeurField;
                match form.current() {
                    ChauffeurField::Vehicle => form.cycle_vehicle(),
                    ChauffeurField::Duration => form.cycle_duration(),
                    ChauffeurField::Passengers => {
                        if key.code == KeyCode::Right {
                            form.passengers = form.passengers.saturating_add(1);
                        } else if form.passengers > 1 {
                            form.passengers -= 1;
                        }
                    }
                    _ => {}
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = form.current_value_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = form.current_value_mut() {
                    text.push(c);
                }
            }
            KeyCode::Enter => {
                if form.submit() {
                    let estimate = form.estimate();
                    self.state
                        .set_status(format!("Chauffeur booked, estimated total ${}", estimate));
                } else {
                    self.state
                        .set_error("Please complete all required fields before booking");
                }
                return;
            }
            _ => {}
        }
        self.state.clear_status();
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.contact;
        match key.code {
            KeyCode::Esc => {
                self.state.enter_mode(AppMode::Home);
                return;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Left | KeyCode::Right => {
                if form.current() == crate::forms::ContactField::Department {
                    form.cycle_department();
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = form.current_value_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = form.current_value_mut() {
                    text.push(c);
                }
            }
            KeyCode::Enter => {
                if form.submit() {
                    self.state.set_status("Message sent to our concierge team");
                } else {
                    self.state
                        .set_error("Name, email, subject, and message are required");
                }
                return;
            }
            _ => {}
        }
        self.state.clear_status();
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.login;
        match key.code {
            KeyCode::Esc => {
                self.state.enter_mode(AppMode::Home);
                return;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Char(' ') if form.current_value_mut().is_none() => form.toggle_current(),
            KeyCode::Backspace => {
                if let Some(text) = form.current_value_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = form.current_value_mut() {
                    text.push(c);
                }
            }
            KeyCode::Enter => {
                if form.submit() {
                    self.state.set_status("Signed in successfully");
                }
            }
            _ => {}
        }
    }

    fn handle_signup_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.signup;
        match key.code {
            KeyCode::Esc => {
                self.state.enter_mode(AppMode::Home);
                return;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Char(' ') if form.current_value_mut().is_none() => form.toggle_current(),
            KeyCode::Backspace => {
                if let Some(text) = form.current_value_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = form.current_value_mut() {
                    text.push(c);
                }
            }
            KeyCode::Enter => {
                if form.submit() {
                    self.state.set_status("Account created, welcome to Lincoln Hotels");
                }
            }
            _ => {}
        }
    }
}
