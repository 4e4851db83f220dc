//! Type-safe domain types for lincoln-tui
//!
//! This module replaces stringly-typed form values with proper Rust enums
//! that provide compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Department routing for the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Department {
    #[default]
    #[strum(serialize = "general")]
    General,
    #[strum(serialize = "reservations")]
    Reservations,
    #[strum(serialize = "dining")]
    Dining,
    #[strum(serialize = "spa")]
    Spa,
    #[strum(serialize = "chauffeur")]
    Chauffeur,
    #[strum(serialize = "feedback")]
    Feedback,
}

impl Department {
    /// Human-readable label shown in the department selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Reservations => "Reservations",
            Self::Dining => "Dining & Events",
            Self::Spa => "Spa & Wellness",
            Self::Chauffeur => "Chauffeur Service",
            Self::Feedback => "Feedback & Complaints",
        }
    }
}

/// Chauffeur booking duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum TripDuration {
    #[default]
    #[strum(serialize = "2")]
    TwoHours,
    #[strum(serialize = "4")]
    FourHours,
    #[strum(serialize = "6")]
    SixHours,
    #[strum(serialize = "8")]
    EightHours,
    #[strum(serialize = "full-day")]
    FullDay,
}

impl TripDuration {
    /// Number of billable hours for this duration.
    pub fn hours(&self) -> u32 {
        match self {
            Self::TwoHours => 2,
            Self::FourHours => 4,
            Self::SixHours => 6,
            Self::EightHours => 8,
            Self::FullDay => 12,
        }
    }

    /// Human-readable label shown in the duration selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TwoHours => "2 Hours",
            Self::FourHours => "4 Hours",
            Self::SixHours => "6 Hours",
            Self::EightHours => "8 Hours",
            Self::FullDay => "Full Day (12 Hours)",
        }
    }
}
