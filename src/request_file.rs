//! Booking request files
//!
//! A confirmed reservation can be exported as pretty-printed JSON and
//! validated later with `lincoln-tui validate <file>`. This is the only
//! persistence in the application; nothing is sent anywhere.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::booking::{price_summary, DraftReservation};
use crate::catalog;

/// A completed booking request that can be saved/loaded as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    /// Room catalog id, e.g. "deluxe"
    pub room_id: String,
    pub special_requests: String,
    pub nights: u32,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl BookingRequest {
    /// Build a request from a draft that passed the Confirmation stage.
    ///
    /// Returns None if the draft is missing dates or a room (a submitted
    /// draft always has them; this is the seam for callers holding an
    /// arbitrary draft).
    pub fn from_draft(draft: &DraftReservation) -> Option<Self> {
        let check_in = draft.check_in?;
        let check_out = draft.check_out?;
        let room_id = draft.room_id.clone()?;
        let summary = price_summary(draft);

        Some(Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            check_in,
            check_out,
            guests: draft.guests,
            room_id,
            special_requests: draft.special_requests.clone(),
            nights: draft.night_count(),
            subtotal: summary.subtotal,
            tax: summary.tax,
            total: summary.total,
        })
    }

    /// Save the request to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize booking request to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write booking request to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a request from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read booking request from {:?}", path.as_ref()))?;

        let request: Self =
            serde_json::from_str(&content).context("Failed to parse booking request JSON")?;

        Ok(request)
    }

    /// Validate the request against the catalog and basic guest rules.
    pub fn validate(&self) -> Result<()> {
        if self.check_out <= self.check_in {
            anyhow::bail!(
                "check-out {} must be after check-in {}",
                self.check_out,
                self.check_in
            );
        }

        let room = catalog::room_by_id(&self.room_id)
            .with_context(|| format!("unknown room id: {}", self.room_id))?;

        if self.guests == 0 {
            anyhow::bail!("guest count must be at least 1");
        }
        if self.guests > room.capacity {
            anyhow::bail!(
                "{} sleeps at most {} guests, request has {}",
                room.name,
                room.capacity,
                self.guests
            );
        }

        for (value, label) in [
            (&self.first_name, "first name"),
            (&self.last_name, "last name"),
            (&self.email, "email"),
            (&self.phone, "phone"),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("{} must not be empty", label);
            }
        }

        if !crate::forms::email_looks_valid(&self.email) {
            anyhow::bail!("email address {:?} is not valid", self.email);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_request() -> BookingRequest {
        BookingRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            check_in: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
            guests: 2,
            room_id: "deluxe".to_string(),
            special_requests: String::new(),
            nights: 3,
            subtotal: 1197.0,
            tax: 179.55,
            total: 1376.55,
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("booking.json");

        let request = sample_request();
        request.save_to_file(&path).expect("save succeeds");

        let loaded = BookingRequest::load_from_file(&path).expect("load succeeds");
        assert_eq!(loaded, request);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().expect("create temp dir");
        let err = BookingRequest::load_from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_validate_accepts_sample() {
        sample_request().validate().expect("sample is valid");
    }

    #[test]
    fn test_validate_rejects_inverted_dates() {
        let mut request = sample_request();
        request.check_out = request.check_in;
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("must be after"));
    }

    #[test]
    fn test_validate_rejects_unknown_room() {
        let mut request = sample_request();
        request.room_id = "penthouse".to_string();
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("unknown room id"));
    }

    #[test]
    fn test_validate_rejects_over_capacity() {
        let mut request = sample_request();
        request.guests = 6; // deluxe sleeps 2
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("sleeps at most"));
    }

    #[test]
    fn test_from_draft_requires_dates_and_room() {
        let draft = DraftReservation::default();
        assert!(BookingRequest::from_draft(&draft).is_none());

        let mut draft = DraftReservation::default();
        draft.check_in = NaiveDate::from_ymd_opt(2025, 6, 1);
        draft.check_out = NaiveDate::from_ymd_opt(2025, 6, 4);
        draft.room_id = Some("deluxe".to_string());
        draft.first_name = "Ada".to_string();

        let request = BookingRequest::from_draft(&draft).expect("complete draft converts");
        assert_eq!(request.nights, 3);
        assert_eq!(request.subtotal, 1197.0);
    }
}
