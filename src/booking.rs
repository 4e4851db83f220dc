//! Reservation wizard state machine
//!
//! This module is the authoritative source of truth for booking progress.
//! It enforces valid stage transitions and makes it impossible to reach the
//! confirmation summary with an incomplete draft.
//!
//! # Design Principles
//!
//! - **Single Source of Truth**: the `BookingWizard` owns the current stage
//!   and the draft reservation
//! - **Validated Transitions**: advancing requires the current stage to be
//!   complete; retreating never clears entered fields
//! - **No Global State**: state is owned by `BookingWizard`, not global/static
//! - **Pure Derivations**: night count and price summary are pure functions
//!   over the draft and the room catalog, recomputed on demand
//!
//! # Stage Flow
//!
//! ```text
//! SelectStay
//!     ↓
//! GuestInfo
//!     ↓
//! Confirmation  --submit()-->  draft handed back, wizard reset
//! ```

use crate::catalog;
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Tax applied on top of the room subtotal.
pub const TAX_RATE: f64 = 0.15;

/// Booking stages in sequential order.
///
/// The wizard progresses through these stages linearly. Users cannot skip
/// stages or proceed without completing required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WizardStage {
    /// Stage 1: select check-in/check-out dates, guest count, and a room.
    SelectStay = 0,
    /// Stage 2: guest contact details.
    GuestInfo = 1,
    /// Stage 3: review the booking and the price summary; submit is the
    /// only forward action.
    Confirmation = 2,
}

impl WizardStage {
    /// Returns the numeric order of this stage (0-2)
    #[inline]
    pub const fn order(self) -> u8 {
        self as u8
    }

    /// Returns the next stage in the sequence, or None at Confirmation
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::SelectStay => Some(Self::GuestInfo),
            Self::GuestInfo => Some(Self::Confirmation),
            Self::Confirmation => None,
        }
    }

    /// Returns the previous stage in the sequence, or None at SelectStay
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::SelectStay => None,
            Self::GuestInfo => Some(Self::SelectStay),
            Self::Confirmation => Some(Self::GuestInfo),
        }
    }

    /// Returns a human-readable title for this stage
    pub const fn title(self) -> &'static str {
        match self {
            Self::SelectStay => "Select Dates & Room",
            Self::GuestInfo => "Guest Information",
            Self::Confirmation => "Confirmation",
        }
    }

    /// Returns the step number (1-indexed for display)
    pub const fn step_number(self) -> usize {
        self as usize + 1
    }

    /// Total number of wizard steps
    pub const TOTAL_STEPS: usize = 3;

    /// Returns all stages in order
    pub const fn all_stages() -> &'static [Self] {
        &[Self::SelectStay, Self::GuestInfo, Self::Confirmation]
    }
}

impl Default for WizardStage {
    fn default() -> Self {
        Self::SelectStay
    }
}

impl fmt::Display for WizardStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Errors that can occur during wizard transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingTransitionError {
    /// Attempted to advance past an incomplete stage
    #[error("Cannot leave stage \"{stage}\": {reason}")]
    IncompleteStage {
        stage: WizardStage,
        reason: String,
    },

    /// Attempted to advance from the final stage (use submit instead)
    #[error("Already at the final stage; submit the booking instead")]
    AtFinalStage,

    /// Attempted to retreat from the initial stage
    #[error("Already at the first stage")]
    AtFirstStage,

    /// Attempted to submit before reaching the confirmation stage
    #[error("Cannot submit from stage \"{stage}\"")]
    NotAtConfirmation { stage: WizardStage },
}

/// The in-progress, unsaved booking state held by the wizard.
///
/// Fields are written unconditionally as the guest types; validation only
/// happens at stage-advance time. The draft is discarded on submit or when
/// the reservations screen is left.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftReservation {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
    pub room_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
}

impl Default for DraftReservation {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            guests: 1,
            room_id: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            special_requests: String::new(),
        }
    }
}

impl DraftReservation {
    /// Number of nights between check-in and check-out.
    ///
    /// Yields 0 when either date is missing. Uses the absolute difference so
    /// the computation is total over all inputs; inverted ranges are rejected
    /// separately at the stage gate.
    pub fn night_count(&self) -> u32 {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                (check_out - check_in).num_days().unsigned_abs() as u32
            }
            _ => 0,
        }
    }

    /// The selected room catalog entry, if one is chosen.
    pub fn selected_room(&self) -> Option<&'static catalog::CatalogEntry> {
        self.room_id.as_deref().and_then(catalog::room_by_id)
    }
}

/// Price breakdown for the confirmation screen.
///
/// `tax` and `total` carry full floating-point precision; rounding happens
/// only at display time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceSummary {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Compute the price summary for a draft against the room catalog.
///
/// Pure over `(draft, catalog)`: returns all three figures zeroed when no
/// room is selected or the stay spans zero nights.
pub fn price_summary(draft: &DraftReservation) -> PriceSummary {
    let nights = draft.night_count();
    match draft.selected_room() {
        Some(room) if nights > 0 => {
            let subtotal = f64::from(room.rate) * f64::from(nights);
            let tax = subtotal * TAX_RATE;
            PriceSummary {
                subtotal,
                tax,
                total: subtotal + tax,
            }
        }
        _ => PriceSummary::default(),
    }
}

/// Context for the three-stage reservation wizard.
///
/// Owns the current stage and the draft, and provides validated transition
/// methods. Field edits go through `draft_mut()` and are never validated at
/// write time; completion is gate-checked when advancing.
///
/// # Example
///
/// ```
/// use lincoln_tui::booking::{BookingWizard, WizardStage};
///
/// let mut wizard = BookingWizard::new();
/// assert_eq!(wizard.stage(), WizardStage::SelectStay);
///
/// // Cannot advance with an empty draft
/// assert!(wizard.advance().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BookingWizard {
    stage: WizardStage,
    draft: DraftReservation,
}

impl BookingWizard {
    /// Create a wizard at the first stage with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current stage
    #[inline]
    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    /// Read access to the draft
    #[inline]
    pub fn draft(&self) -> &DraftReservation {
        &self.draft
    }

    /// Write access to the draft; writes are unvalidated (last write wins)
    #[inline]
    pub fn draft_mut(&mut self) -> &mut DraftReservation {
        &mut self.draft
    }

    /// Check whether a stage's required fields are filled.
    ///
    /// - `SelectStay`: both dates and a room id present, and the check-out
    ///   date strictly after check-in
    /// - `GuestInfo`: first/last name, email, and phone all non-empty
    /// - `Confirmation`: always complete (submit is the only action)
    pub fn is_complete(&self, stage: WizardStage) -> bool {
        self.completion_blocker(stage).is_none()
    }

    /// The reason a stage is incomplete, or None when it is complete.
    pub fn completion_blocker(&self, stage: WizardStage) -> Option<String> {
        match stage {
            WizardStage::SelectStay => {
                let check_in = match self.draft.check_in {
                    Some(d) => d,
                    None => return Some("check-in date is required".to_string()),
                };
                let check_out = match self.draft.check_out {
                    Some(d) => d,
                    None => return Some("check-out date is required".to_string()),
                };
                if check_out <= check_in {
                    return Some("check-out must be after check-in".to_string());
                }
                if self.draft.room_id.is_none() {
                    return Some("a room must be selected".to_string());
                }
                None
            }
            WizardStage::GuestInfo => {
                let required = [
                    (&self.draft.first_name, "first name"),
                    (&self.draft.last_name, "last name"),
                    (&self.draft.email, "email"),
                    (&self.draft.phone, "phone"),
                ];
                for (value, label) in required {
                    if value.trim().is_empty() {
                        return Some(format!("{} is required", label));
                    }
                }
                None
            }
            WizardStage::Confirmation => None,
        }
    }

    /// Advance to the next stage.
    ///
    /// # Errors
    ///
    /// - `AtFinalStage` when already at Confirmation
    /// - `IncompleteStage` when the current stage's required fields are not
    ///   all filled (the UI surfaces this by keeping the action disabled)
    pub fn advance(&mut self) -> Result<WizardStage, BookingTransitionError> {
        let next = self.stage.next().ok_or(BookingTransitionError::AtFinalStage)?;

        if let Some(reason) = self.completion_blocker(self.stage) {
            return Err(BookingTransitionError::IncompleteStage {
                stage: self.stage,
                reason,
            });
        }

        self.stage = next;
        Ok(next)
    }

    /// Move one stage backward. Entered fields persist.
    ///
    /// # Errors
    ///
    /// - `AtFirstStage` when already at SelectStay
    pub fn retreat(&mut self) -> Result<WizardStage, BookingTransitionError> {
        let previous = self
            .stage
            .previous()
            .ok_or(BookingTransitionError::AtFirstStage)?;
        self.stage = previous;
        Ok(previous)
    }

    /// Submit the booking.
    ///
    /// Valid only at the Confirmation stage. Hands the completed draft back
    /// to the caller and resets the wizard to an empty first stage.
    ///
    /// # Errors
    ///
    /// - `NotAtConfirmation` when called from an earlier stage
    pub fn submit(&mut self) -> Result<DraftReservation, BookingTransitionError> {
        if self.stage != WizardStage::Confirmation {
            return Err(BookingTransitionError::NotAtConfirmation { stage: self.stage });
        }
        let confirmed = std::mem::take(&mut self.draft);
        self.stage = WizardStage::SelectStay;
        Ok(confirmed)
    }

    /// Discard the draft and return to the first stage.
    pub fn reset(&mut self) {
        self.stage = WizardStage::SelectStay;
        self.draft = DraftReservation::default();
    }
}

// Convert BookingTransitionError to the main error type
impl From<BookingTransitionError> for crate::error::LincolnTuiError {
    fn from(err: BookingTransitionError) -> Self {
        crate::error::LincolnTuiError::BookingTransition(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn filled_stay(wizard: &mut BookingWizard) {
        let draft = wizard.draft_mut();
        draft.check_in = Some(date(2025, 6, 1));
        draft.check_out = Some(date(2025, 6, 4));
        draft.room_id = Some("deluxe".to_string());
    }

    fn filled_guest(wizard: &mut BookingWizard) {
        let draft = wizard.draft_mut();
        draft.first_name = "Ada".to_string();
        draft.last_name = "Lovelace".to_string();
        draft.email = "ada@example.com".to_string();
        draft.phone = "+1 555 0100".to_string();
    }

    // =========================================================================
    // WizardStage Tests
    // =========================================================================

    #[test]
    fn test_stage_order_is_sequential() {
        for (i, stage) in WizardStage::all_stages().iter().enumerate() {
            assert_eq!(stage.order() as usize, i);
            assert_eq!(stage.step_number(), i + 1);
        }
    }

    #[test]
    fn test_stage_next_forms_chain() {
        let mut current = WizardStage::SelectStay;
        let mut count = 0;
        while let Some(next) = current.next() {
            current = next;
            count += 1;
        }
        assert_eq!(current, WizardStage::Confirmation);
        assert_eq!(count, WizardStage::TOTAL_STEPS - 1);
    }

    #[test]
    fn test_stage_previous_forms_reverse_chain() {
        let mut current = WizardStage::Confirmation;
        let mut count = 0;
        while let Some(prev) = current.previous() {
            current = prev;
            count += 1;
        }
        assert_eq!(current, WizardStage::SelectStay);
        assert_eq!(count, WizardStage::TOTAL_STEPS - 1);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(WizardStage::SelectStay.to_string(), "Select Dates & Room");
        assert_eq!(WizardStage::Confirmation.to_string(), "Confirmation");
    }

    // =========================================================================
    // Derivation Tests
    // =========================================================================

    #[test]
    fn test_night_count_day1_to_day4_is_3() {
        let mut draft = DraftReservation::default();
        draft.check_in = Some(date(2025, 6, 1));
        draft.check_out = Some(date(2025, 6, 4));
        assert_eq!(draft.night_count(), 3);
    }

    #[test]
    fn test_night_count_missing_dates_is_0() {
        let mut draft = DraftReservation::default();
        assert_eq!(draft.night_count(), 0);
        draft.check_in = Some(date(2025, 6, 1));
        assert_eq!(draft.night_count(), 0);
    }

    #[test]
    fn test_night_count_inverted_is_absolute() {
        let mut draft = DraftReservation::default();
        draft.check_in = Some(date(2025, 6, 4));
        draft.check_out = Some(date(2025, 6, 1));
        assert_eq!(draft.night_count(), 3);
    }

    #[test]
    fn test_price_summary_deluxe_3_nights() {
        let mut draft = DraftReservation::default();
        draft.check_in = Some(date(2025, 6, 1));
        draft.check_out = Some(date(2025, 6, 4));
        draft.room_id = Some("deluxe".to_string()); // 399/night

        let summary = price_summary(&draft);
        assert_eq!(summary.subtotal, 1197.0);
        assert!((summary.tax - 179.55).abs() < 1e-9);
        assert!((summary.total - 1376.55).abs() < 1e-9);
    }

    #[test]
    fn test_price_summary_no_room_is_zero() {
        let mut draft = DraftReservation::default();
        draft.check_in = Some(date(2025, 6, 1));
        draft.check_out = Some(date(2025, 6, 4));

        let summary = price_summary(&draft);
        assert_eq!(summary, PriceSummary::default());
    }

    #[test]
    fn test_price_summary_zero_nights_is_zero() {
        let mut draft = DraftReservation::default();
        draft.room_id = Some("presidential".to_string());
        assert_eq!(price_summary(&draft), PriceSummary::default());
    }

    // =========================================================================
    // BookingWizard Transition Tests
    // =========================================================================

    #[test]
    fn test_wizard_starts_empty_at_select_stay() {
        let wizard = BookingWizard::new();
        assert_eq!(wizard.stage(), WizardStage::SelectStay);
        assert_eq!(wizard.draft().guests, 1);
        assert!(wizard.draft().room_id.is_none());
    }

    #[test]
    fn test_advance_blocked_when_incomplete() {
        let mut wizard = BookingWizard::new();
        let err = wizard.advance().unwrap_err();
        assert!(matches!(err, BookingTransitionError::IncompleteStage { .. }));
        assert_eq!(wizard.stage(), WizardStage::SelectStay);
    }

    #[test]
    fn test_advance_blocked_on_inverted_dates() {
        let mut wizard = BookingWizard::new();
        filled_stay(&mut wizard);
        wizard.draft_mut().check_in = Some(date(2025, 6, 10));
        wizard.draft_mut().check_out = Some(date(2025, 6, 5));

        let err = wizard.advance().unwrap_err();
        assert!(matches!(
            err,
            BookingTransitionError::IncompleteStage { .. }
        ));
        assert!(err.to_string().contains("check-out must be after check-in"));
    }

    #[test]
    fn test_advance_through_all_stages() {
        let mut wizard = BookingWizard::new();
        filled_stay(&mut wizard);
        wizard.advance().expect("to GuestInfo");
        assert_eq!(wizard.stage(), WizardStage::GuestInfo);

        filled_guest(&mut wizard);
        wizard.advance().expect("to Confirmation");
        assert_eq!(wizard.stage(), WizardStage::Confirmation);

        let err = wizard.advance().unwrap_err();
        assert_eq!(err, BookingTransitionError::AtFinalStage);
    }

    #[test]
    fn test_retreat_then_advance_preserves_draft() {
        let mut wizard = BookingWizard::new();
        filled_stay(&mut wizard);
        wizard.advance().expect("to GuestInfo");
        filled_guest(&mut wizard);

        let before = wizard.draft().clone();
        wizard.retreat().expect("back to SelectStay");
        assert_eq!(wizard.stage(), WizardStage::SelectStay);
        assert_eq!(wizard.draft(), &before);

        wizard.advance().expect("forward again");
        assert_eq!(wizard.stage(), WizardStage::GuestInfo);
        assert_eq!(wizard.draft(), &before);
    }

    #[test]
    fn test_retreat_from_first_stage_fails() {
        let mut wizard = BookingWizard::new();
        let err = wizard.retreat().unwrap_err();
        assert_eq!(err, BookingTransitionError::AtFirstStage);
    }

    #[test]
    fn test_set_field_twice_is_idempotent() {
        let mut wizard = BookingWizard::new();
        wizard.draft_mut().first_name = "Grace".to_string();
        let once = wizard.draft().clone();
        wizard.draft_mut().first_name = "Grace".to_string();
        assert_eq!(wizard.draft(), &once);
    }

    #[test]
    fn test_submit_only_from_confirmation() {
        let mut wizard = BookingWizard::new();
        let err = wizard.submit().unwrap_err();
        assert!(matches!(
            err,
            BookingTransitionError::NotAtConfirmation { .. }
        ));
    }

    #[test]
    fn test_submit_resets_wizard() {
        let mut wizard = BookingWizard::new();
        filled_stay(&mut wizard);
        wizard.advance().expect("to GuestInfo");
        filled_guest(&mut wizard);
        wizard.advance().expect("to Confirmation");

        let confirmed = wizard.submit().expect("submit succeeds");
        assert_eq!(confirmed.first_name, "Ada");
        assert_eq!(confirmed.night_count(), 3);

        assert_eq!(wizard.stage(), WizardStage::SelectStay);
        assert_eq!(wizard.draft(), &DraftReservation::default());
    }

    #[test]
    fn test_guest_info_requires_all_fields() {
        let mut wizard = BookingWizard::new();
        filled_stay(&mut wizard);
        wizard.advance().expect("to GuestInfo");

        wizard.draft_mut().first_name = "Ada".to_string();
        wizard.draft_mut().last_name = "Lovelace".to_string();
        // email and phone still missing
        assert!(!wizard.is_complete(WizardStage::GuestInfo));
        assert!(wizard.advance().is_err());

        filled_guest(&mut wizard);
        assert!(wizard.is_complete(WizardStage::GuestInfo));
    }

    #[test]
    fn test_confirmation_is_always_complete() {
        let wizard = BookingWizard::new();
        assert!(wizard.is_complete(WizardStage::Confirmation));
    }

    #[test]
    fn test_reset_clears_draft() {
        let mut wizard = BookingWizard::new();
        filled_stay(&mut wizard);
        wizard.advance().expect("to GuestInfo");
        wizard.reset();
        assert_eq!(wizard.stage(), WizardStage::SelectStay);
        assert_eq!(wizard.draft(), &DraftReservation::default());
    }
}
