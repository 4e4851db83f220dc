//! Form state for the login, signup, contact, and chauffeur screens
//!
//! Each form follows the same pattern as the booking wizard draft: fields
//! are mutated unconditionally as the guest types, and completeness/format
//! checks run only when the form is submitted. Validation failures are
//! collected into human-readable messages and shown next to the form;
//! nothing is propagated further. Submissions are simulated, there is no
//! backing service.

use crate::catalog;
use crate::types::{Department, TripDuration};
use chrono::NaiveDate;

/// Loose email shape check: one `@`, a non-empty local part, and a dotted
/// domain, with no whitespace anywhere.
pub fn email_looks_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|p| !p.is_empty())
}

// ============================================================================
// Signup
// ============================================================================

/// Input field identifiers for the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    AgreeToTerms,
    SubscribeNewsletter,
}

impl SignupField {
    /// Get all fields in order.
    pub fn all() -> &'static [Self] {
        &[
            Self::FirstName,
            Self::LastName,
            Self::Email,
            Self::Phone,
            Self::Password,
            Self::ConfirmPassword,
            Self::AgreeToTerms,
            Self::SubscribeNewsletter,
        ]
    }

    /// Get field label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::AgreeToTerms => "I agree to the terms and conditions",
            Self::SubscribeNewsletter => "Subscribe to the newsletter",
        }
    }

    /// Check if field should be masked.
    pub fn is_password(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Check if field is a checkbox toggled with space.
    pub fn is_toggle(&self) -> bool {
        matches!(self, Self::AgreeToTerms | Self::SubscribeNewsletter)
    }
}

/// State for the signup screen.
#[derive(Debug, Clone)]
pub struct SignupState {
    pub current_field: usize,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
    pub subscribe_newsletter: bool,
    /// Validation messages from the last submit attempt.
    pub errors: Vec<String>,
    /// Whether the simulated signup has succeeded.
    pub submitted: bool,
}

impl Default for SignupState {
    fn default() -> Self {
        Self {
            current_field: 0,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            agree_to_terms: false,
            subscribe_newsletter: true,
            errors: Vec::new(),
            submitted: false,
        }
    }
}

impl SignupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to previous field.
    pub fn previous_field(&mut self) {
        if self.current_field > 0 {
            self.current_field -= 1;
        }
    }

    /// Move to next field.
    pub fn next_field(&mut self) {
        if self.current_field < SignupField::all().len() - 1 {
            self.current_field += 1;
        }
    }

    /// Get current field.
    pub fn current(&self) -> SignupField {
        SignupField::all()[self.current_field]
    }

    /// Mutable reference to the current text field value, or None for the
    /// checkbox fields. Editing clears stale errors.
    pub fn current_value_mut(&mut self) -> Option<&mut String> {
        self.errors.clear();
        match self.current() {
            SignupField::FirstName => Some(&mut self.first_name),
            SignupField::LastName => Some(&mut self.last_name),
            SignupField::Email => Some(&mut self.email),
            SignupField::Phone => Some(&mut self.phone),
            SignupField::Password => Some(&mut self.password),
            SignupField::ConfirmPassword => Some(&mut self.confirm_password),
            SignupField::AgreeToTerms | SignupField::SubscribeNewsletter => None,
        }
    }

    /// Toggle the current checkbox field, if the cursor is on one.
    pub fn toggle_current(&mut self) {
        self.errors.clear();
        match self.current() {
            SignupField::AgreeToTerms => self.agree_to_terms = !self.agree_to_terms,
            SignupField::SubscribeNewsletter => {
                self.subscribe_newsletter = !self.subscribe_newsletter
            }
            _ => {}
        }
    }

    /// Validate all fields, collecting every failure into a message list.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.first_name.trim().is_empty() {
            errors.push("First name is required".to_string());
        }
        if self.last_name.trim().is_empty() {
            errors.push("Last name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.push("Email is required".to_string());
        }
        if self.phone.trim().is_empty() {
            errors.push("Phone number is required".to_string());
        }
        if self.password.is_empty() {
            errors.push("Password is required".to_string());
        }
        if self.password.len() < 8 {
            errors.push("Password must be at least 8 characters".to_string());
        }
        if self.password != self.confirm_password {
            errors.push("Passwords do not match".to_string());
        }
        if !self.agree_to_terms {
            errors.push("You must agree to the terms and conditions".to_string());
        }
        if !self.email.is_empty() && !email_looks_valid(&self.email) {
            errors.push("Please enter a valid email address".to_string());
        }

        errors
    }

    /// Attempt the simulated signup. On failure the messages are stored for
    /// display; on success the form is marked submitted.
    pub fn submit(&mut self) -> bool {
        let errors = self.validate();
        if errors.is_empty() {
            self.submitted = true;
            true
        } else {
            self.errors = errors;
            false
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Demo credential accepted by the simulated login.
pub const DEMO_EMAIL: &str = "demo@lincolnhotels.com";
pub const DEMO_PASSWORD: &str = "demo123";

/// Input field identifiers for the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
    RememberMe,
}

impl LoginField {
    pub fn all() -> &'static [Self] {
        &[Self::Email, Self::Password, Self::RememberMe]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email Address",
            Self::Password => "Password",
            Self::RememberMe => "Remember me",
        }
    }

    pub fn is_password(&self) -> bool {
        matches!(self, Self::Password)
    }
}

/// State for the login screen.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub current_field: usize,
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    /// Error from the last submit attempt; cleared on the next edit.
    pub error: Option<String>,
    /// Whether the simulated login has succeeded.
    pub authenticated: bool,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous_field(&mut self) {
        if self.current_field > 0 {
            self.current_field -= 1;
        }
    }

    pub fn next_field(&mut self) {
        if self.current_field < LoginField::all().len() - 1 {
            self.current_field += 1;
        }
    }

    pub fn current(&self) -> LoginField {
        LoginField::all()[self.current_field]
    }

    /// Mutable reference to the current text field, or None for the
    /// remember-me checkbox. Editing clears a stale error.
    pub fn current_value_mut(&mut self) -> Option<&mut String> {
        self.error = None;
        match self.current() {
            LoginField::Email => Some(&mut self.email),
            LoginField::Password => Some(&mut self.password),
            LoginField::RememberMe => None,
        }
    }

    pub fn toggle_current(&mut self) {
        if self.current() == LoginField::RememberMe {
            self.remember_me = !self.remember_me;
        }
    }

    /// Attempt the simulated login against the demo credential.
    pub fn submit(&mut self) -> bool {
        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some("Please fill in all fields".to_string());
            return false;
        }
        if self.email == DEMO_EMAIL && self.password == DEMO_PASSWORD {
            self.authenticated = true;
            self.error = None;
            true
        } else {
            self.error = Some("Invalid email or password".to_string());
            false
        }
    }
}

// ============================================================================
// Contact
// ============================================================================

/// Input field identifiers for the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Department,
    Message,
}

impl ContactField {
    pub fn all() -> &'static [Self] {
        &[
            Self::Name,
            Self::Email,
            Self::Phone,
            Self::Subject,
            Self::Department,
            Self::Message,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Subject => "Subject",
            Self::Department => "Department",
            Self::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Subject | Self::Message)
    }
}

/// State for the contact screen.
#[derive(Debug, Clone, Default)]
pub struct ContactState {
    pub current_field: usize,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub department: Department,
    pub message: String,
    /// Success acknowledgment flag; reset when the guest starts typing again.
    pub submitted: bool,
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous_field(&mut self) {
        if self.current_field > 0 {
            self.current_field -= 1;
        }
    }

    pub fn next_field(&mut self) {
        if self.current_field < ContactField::all().len() - 1 {
            self.current_field += 1;
        }
    }

    pub fn current(&self) -> ContactField {
        ContactField::all()[self.current_field]
    }

    /// Mutable reference to the current text field, or None for the
    /// department selector.
    pub fn current_value_mut(&mut self) -> Option<&mut String> {
        self.submitted = false;
        match self.current() {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Phone => Some(&mut self.phone),
            ContactField::Subject => Some(&mut self.subject),
            ContactField::Department => None,
            ContactField::Message => Some(&mut self.message),
        }
    }

    /// Cycle the department selector.
    pub fn cycle_department(&mut self) {
        use strum::IntoEnumIterator;
        let all: Vec<Department> = Department::iter().collect();
        let idx = all.iter().position(|d| *d == self.department).unwrap_or(0);
        self.department = all[(idx + 1) % all.len()];
    }

    /// All required fields filled.
    pub fn is_complete(&self) -> bool {
        ContactField::all()
            .iter()
            .filter(|f| f.is_required())
            .all(|f| match f {
                ContactField::Name => !self.name.trim().is_empty(),
                ContactField::Email => !self.email.trim().is_empty(),
                ContactField::Subject => !self.subject.trim().is_empty(),
                ContactField::Message => !self.message.trim().is_empty(),
                _ => true,
            })
    }

    /// Simulated submission: on success the form resets and the
    /// acknowledgment flag is set.
    pub fn submit(&mut self) -> bool {
        if !self.is_complete() {
            return false;
        }
        *self = Self {
            submitted: true,
            ..Self::default()
        };
        true
    }
}

// ============================================================================
// Chauffeur booking
// ============================================================================

/// Input field identifiers for the chauffeur booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChauffeurField {
    PickupDate,
    PickupLocation,
    Destination,
    Vehicle,
    Duration,
    Passengers,
    FirstName,
    LastName,
    Email,
    Phone,
    SpecialRequests,
}

impl ChauffeurField {
    pub fn all() -> &'static [Self] {
        &[
            Self::PickupDate,
            Self::PickupLocation,
            Self::Destination,
            Self::Vehicle,
            Self::Duration,
            Self::Passengers,
            Self::FirstName,
            Self::LastName,
            Self::Email,
            Self::Phone,
            Self::SpecialRequests,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PickupDate => "Pickup Date (YYYY-MM-DD)",
            Self::PickupLocation => "Pickup Location",
            Self::Destination => "Destination",
            Self::Vehicle => "Vehicle",
            Self::Duration => "Duration",
            Self::Passengers => "Passengers",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::SpecialRequests => "Special Requests",
        }
    }
}

/// State for the chauffeur booking screen.
#[derive(Debug, Clone)]
pub struct ChauffeurState {
    pub current_field: usize,
    /// Raw date text; parsed on demand so partial input never errors.
    pub pickup_date_input: String,
    pub pickup_location: String,
    pub destination: String,
    pub vehicle_id: Option<String>,
    pub duration: TripDuration,
    pub passengers: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
    pub submitted: bool,
}

impl Default for ChauffeurState {
    fn default() -> Self {
        Self {
            current_field: 0,
            pickup_date_input: String::new(),
            pickup_location: String::new(),
            destination: String::new(),
            vehicle_id: None,
            duration: TripDuration::default(),
            passengers: 1,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            special_requests: String::new(),
            submitted: false,
        }
    }
}

impl ChauffeurState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous_field(&mut self) {
        if self.current_field > 0 {
            self.current_field -= 1;
        }
    }

    pub fn next_field(&mut self) {
        if self.current_field < ChauffeurField::all().len() - 1 {
            self.current_field += 1;
        }
    }

    pub fn current(&self) -> ChauffeurField {
        ChauffeurField::all()[self.current_field]
    }

    /// Mutable reference to the current text field, or None for the
    /// vehicle/duration/passenger selectors.
    pub fn current_value_mut(&mut self) -> Option<&mut String> {
        self.submitted = false;
        match self.current() {
            ChauffeurField::PickupDate => Some(&mut self.pickup_date_input),
            ChauffeurField::PickupLocation => Some(&mut self.pickup_location),
            ChauffeurField::Destination => Some(&mut self.destination),
            ChauffeurField::FirstName => Some(&mut self.first_name),
            ChauffeurField::LastName => Some(&mut self.last_name),
            ChauffeurField::Email => Some(&mut self.email),
            ChauffeurField::Phone => Some(&mut self.phone),
            ChauffeurField::SpecialRequests => Some(&mut self.special_requests),
            ChauffeurField::Vehicle
            | ChauffeurField::Duration
            | ChauffeurField::Passengers => None,
        }
    }

    /// Parsed pickup date, if the raw input is a valid calendar date.
    pub fn pickup_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.pickup_date_input.trim(), "%Y-%m-%d").ok()
    }

    /// The selected vehicle catalog entry.
    pub fn selected_vehicle(&self) -> Option<&'static catalog::CatalogEntry> {
        self.vehicle_id.as_deref().and_then(catalog::vehicle_by_id)
    }

    /// Cycle the vehicle selector through the catalog.
    pub fn cycle_vehicle(&mut self) {
        let vehicles = catalog::vehicles();
        let next_idx = match self.vehicle_id.as_deref() {
            Some(id) => {
                let idx = vehicles.iter().position(|v| v.id == id).unwrap_or(0);
                (idx + 1) % vehicles.len()
            }
            None => 0,
        };
        self.vehicle_id = Some(vehicles[next_idx].id.to_string());
    }

    /// Cycle the duration selector.
    pub fn cycle_duration(&mut self) {
        use strum::IntoEnumIterator;
        let all: Vec<TripDuration> = TripDuration::iter().collect();
        let idx = all.iter().position(|d| *d == self.duration).unwrap_or(0);
        self.duration = all[(idx + 1) % all.len()];
    }

    /// Price estimate: hourly rate times billable hours, 0 with no vehicle.
    pub fn estimate(&self) -> u32 {
        self.selected_vehicle()
            .map(|vehicle| vehicle.rate * self.duration.hours())
            .unwrap_or(0)
    }

    /// All required fields filled and the party fits the vehicle.
    pub fn is_complete(&self) -> bool {
        self.pickup_date().is_some()
            && !self.pickup_location.trim().is_empty()
            && !self.destination.trim().is_empty()
            && !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
            && self
                .selected_vehicle()
                .is_some_and(|vehicle| self.passengers <= vehicle.capacity)
    }

    /// Simulated booking request submission.
    pub fn submit(&mut self) -> bool {
        if self.is_complete() {
            self.submitted = true;
        }
        self.submitted
    }
}
