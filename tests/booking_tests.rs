//! Tests for the booking wizard and saved booking requests
//!
//! These tests verify:
//! - The full SelectStay → GuestInfo → Confirmation flow
//! - Stage gating on incomplete or inverted input
//! - Price summary math at the integration level
//! - BookingRequest save/load/validate round-trips

use chrono::NaiveDate;
use lincoln_tui::booking::{price_summary, BookingWizard, WizardStage, TAX_RATE};
use lincoln_tui::request_file::BookingRequest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn filled_wizard() -> BookingWizard {
    let mut wizard = BookingWizard::new();
    {
        let draft = wizard.draft_mut();
        draft.check_in = Some(date(2026, 9, 1));
        draft.check_out = Some(date(2026, 9, 4));
        draft.guests = 2;
        draft.room_id = Some("deluxe".to_string());
        draft.first_name = "Ada".to_string();
        draft.last_name = "Lincoln".to_string();
        draft.email = "ada@example.com".to_string();
        draft.phone = "555-0102".to_string();
    }
    wizard
}

// =============================================================================
// Wizard Flow Tests
// =============================================================================

#[test]
fn test_full_booking_flow() {
    let mut wizard = filled_wizard();
    assert_eq!(wizard.stage(), WizardStage::SelectStay);

    assert_eq!(wizard.advance().unwrap(), WizardStage::GuestInfo);
    assert_eq!(wizard.advance().unwrap(), WizardStage::Confirmation);

    let draft = wizard.submit().unwrap();
    assert_eq!(draft.night_count(), 3);
    assert_eq!(draft.room_id.as_deref(), Some("deluxe"));

    // Submission resets the wizard for the next guest
    assert_eq!(wizard.stage(), WizardStage::SelectStay);
    assert!(wizard.draft().room_id.is_none());
}

#[test]
fn test_advance_blocked_without_room() {
    let mut wizard = filled_wizard();
    wizard.draft_mut().room_id = None;
    assert!(wizard.advance().is_err());
    assert_eq!(wizard.stage(), WizardStage::SelectStay);
}

#[test]
fn test_advance_blocked_on_inverted_dates() {
    let mut wizard = filled_wizard();
    wizard.draft_mut().check_in = Some(date(2026, 9, 4));
    wizard.draft_mut().check_out = Some(date(2026, 9, 1));
    let err = wizard.advance().unwrap_err();
    assert!(err.to_string().contains("check-out"));
}

#[test]
fn test_submit_only_from_confirmation() {
    let mut wizard = filled_wizard();
    assert!(wizard.submit().is_err());
    wizard.advance().unwrap();
    assert!(wizard.submit().is_err());
}

#[test]
fn test_retreat_keeps_draft() {
    let mut wizard = filled_wizard();
    wizard.advance().unwrap();
    wizard.retreat().unwrap();
    assert_eq!(wizard.stage(), WizardStage::SelectStay);
    assert_eq!(wizard.draft().first_name, "Ada");
}

#[test]
fn test_price_summary_for_three_deluxe_nights() {
    let wizard = filled_wizard();
    let summary = price_summary(wizard.draft());
    assert!((summary.subtotal - 1197.0).abs() < 1e-9);
    assert!((summary.tax - 1197.0 * TAX_RATE).abs() < 1e-9);
    assert!((summary.total - 1376.55).abs() < 1e-9);
}

// =============================================================================
// Booking Request File Tests
// =============================================================================

#[test]
fn test_request_round_trip_through_file() {
    let wizard = filled_wizard();
    let request = BookingRequest::from_draft(wizard.draft()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.json");
    request.save_to_file(&path).unwrap();

    let loaded = BookingRequest::load_from_file(&path).unwrap();
    assert_eq!(loaded.room_id, "deluxe");
    assert_eq!(loaded.nights, 3);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_request_rejects_unknown_room() {
    let wizard = filled_wizard();
    let mut request = BookingRequest::from_draft(wizard.draft()).unwrap();
    request.room_id = "penthouse".to_string();
    assert!(request.validate().is_err());
}

#[test]
fn test_request_rejects_oversized_party() {
    let wizard = filled_wizard();
    let mut request = BookingRequest::from_draft(wizard.draft()).unwrap();
    request.guests = 99;
    assert!(request.validate().is_err());
}

#[test]
fn test_load_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(BookingRequest::load_from_file(&path).is_err());
}
