//! Property-Based Tests
//!
//! Uses proptest for testing invariants and edge cases
//!
//! These tests verify:
//! - Enum string round-trips (parse → to_string → parse)
//! - Pricing invariants over arbitrary stays
//! - Wizard stage ordering properties

use chrono::NaiveDate;
use proptest::prelude::*;

// =============================================================================
// TripDuration Enum Property Tests
// =============================================================================

use lincoln_tui::types::TripDuration;

/// Strategy for generating valid TripDuration variants
fn duration_strategy() -> impl Strategy<Value = TripDuration> {
    prop_oneof![
        Just(TripDuration::TwoHours),
        Just(TripDuration::FourHours),
        Just(TripDuration::SixHours),
        Just(TripDuration::EightHours),
        Just(TripDuration::FullDay),
    ]
}

proptest! {
    /// TripDuration: to_string → parse round-trip is identity
    #[test]
    fn duration_roundtrip(d in duration_strategy()) {
        let s = d.to_string();
        let parsed: TripDuration = s.parse().expect("Should parse");
        prop_assert_eq!(d, parsed);
    }

    /// TripDuration: billable hours are positive and at most a full day
    #[test]
    fn duration_hours_in_range(d in duration_strategy()) {
        prop_assert!(d.hours() >= 2);
        prop_assert!(d.hours() <= 12);
    }
}

// =============================================================================
// Department Enum Property Tests
// =============================================================================

use lincoln_tui::types::Department;

fn department_strategy() -> impl Strategy<Value = Department> {
    prop_oneof![
        Just(Department::General),
        Just(Department::Reservations),
        Just(Department::Dining),
        Just(Department::Spa),
        Just(Department::Chauffeur),
        Just(Department::Feedback),
    ]
}

proptest! {
    /// Department: to_string → parse round-trip is identity
    #[test]
    fn department_roundtrip(dept in department_strategy()) {
        let s = dept.to_string();
        let parsed: Department = s.parse().expect("Should parse");
        prop_assert_eq!(dept, parsed);
    }

    /// Department: labels are non-empty and human-cased
    #[test]
    fn department_label_is_valid(dept in department_strategy()) {
        let label = dept.label();
        prop_assert!(!label.is_empty());
        prop_assert!(label.chars().next().map(char::is_uppercase).unwrap_or(false));
    }
}

// =============================================================================
// Pricing Properties
// =============================================================================

use lincoln_tui::booking::{price_summary, DraftReservation, TAX_RATE};
use lincoln_tui::catalog;

fn room_id_strategy() -> impl Strategy<Value = String> {
    let ids: Vec<String> = catalog::rooms().iter().map(|r| r.id.to_string()).collect();
    proptest::sample::select(ids)
}

fn draft_strategy() -> impl Strategy<Value = DraftReservation> {
    (room_id_strategy(), 0i64..3650, 1i64..60, 1u32..6).prop_map(
        |(room_id, start_offset, nights, guests)| {
            let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
            let check_in = base + chrono::Duration::days(start_offset);
            DraftReservation {
                check_in: Some(check_in),
                check_out: Some(check_in + chrono::Duration::days(nights)),
                guests,
                room_id: Some(room_id),
                ..Default::default()
            }
        },
    )
}

proptest! {
    /// Total always equals subtotal plus tax
    #[test]
    fn total_is_subtotal_plus_tax(draft in draft_strategy()) {
        let summary = price_summary(&draft);
        prop_assert!((summary.total - (summary.subtotal + summary.tax)).abs() < 1e-6);
    }

    /// Tax is exactly the configured rate applied to the subtotal
    #[test]
    fn tax_matches_rate(draft in draft_strategy()) {
        let summary = price_summary(&draft);
        prop_assert!((summary.tax - summary.subtotal * TAX_RATE).abs() < 1e-6);
    }

    /// Subtotal equals nightly rate times night count
    #[test]
    fn subtotal_is_rate_times_nights(draft in draft_strategy()) {
        let summary = price_summary(&draft);
        let room = draft.selected_room().expect("strategy always picks a room");
        let expected = f64::from(room.rate) * f64::from(draft.night_count());
        prop_assert!((summary.subtotal - expected).abs() < 1e-6);
    }

    /// Night count is symmetric in the two dates
    #[test]
    fn night_count_is_symmetric(draft in draft_strategy()) {
        let mut flipped = draft.clone();
        std::mem::swap(&mut flipped.check_in, &mut flipped.check_out);
        prop_assert_eq!(draft.night_count(), flipped.night_count());
    }
}

// =============================================================================
// Wizard Stage Properties
// =============================================================================

use lincoln_tui::booking::WizardStage;

fn stage_strategy() -> impl Strategy<Value = WizardStage> {
    prop_oneof![
        Just(WizardStage::SelectStay),
        Just(WizardStage::GuestInfo),
        Just(WizardStage::Confirmation),
    ]
}

proptest! {
    /// next then previous returns to the same stage (when both exist)
    #[test]
    fn stage_next_previous_roundtrip(stage in stage_strategy()) {
        if let Some(next) = stage.next() {
            prop_assert_eq!(next.previous(), Some(stage));
        }
    }

    /// Stage order matches step numbering
    #[test]
    fn stage_order_matches_step_number(stage in stage_strategy()) {
        prop_assert_eq!(usize::from(stage.order()) + 1, stage.step_number());
    }
}
