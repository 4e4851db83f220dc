//! Static catalogs of bookable offerings
//!
//! Rooms and chauffeur vehicles share one record shape: an id for lookup,
//! a display name, a rate (per night for rooms, per hour for vehicles),
//! an occupancy limit, and presentation metadata. Amenities carry no rate
//! and are never looked up by id, so they keep a smaller record.
//!
//! The catalogs are immutable configuration: the wizard and forms consume
//! them by id lookup only and never mutate them.

use serde::Serialize;

/// A bookable offering (room or vehicle).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Stable id used for lookup and saved booking requests.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Rate in whole dollars: per night for rooms, per hour for vehicles.
    pub rate: u32,
    /// Maximum occupancy (guests for rooms, passengers for vehicles).
    pub capacity: u32,
    /// Presentation text for size or passenger range.
    pub capacity_label: &'static str,
    /// Headline features.
    pub features: &'static [&'static str],
    /// Short marketing description.
    pub description: &'static str,
    /// Relative image reference used by the brand site assets.
    pub image: &'static str,
}

/// A hotel amenity shown on the services screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Amenity {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

const ROOMS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "presidential",
        name: "Presidential Suite",
        rate: 999,
        capacity: 4,
        capacity_label: "120 sqm",
        features: &["Ocean View", "Private Balcony", "Butler Service", "Jacuzzi"],
        description: "Ultimate luxury with panoramic views",
        image: "../images/presidential.png",
    },
    CatalogEntry {
        id: "honeymoon",
        name: "Honeymoon Suite",
        rate: 799,
        capacity: 2,
        capacity_label: "70 sqm",
        features: &["Ocean View", "Champagne Service", "Private Terrace", "King Bed"],
        description: "Romantic retreat designed for unforgettable moments",
        image: "../images/honeymoon.jpg",
    },
    CatalogEntry {
        id: "executive",
        name: "Executive Suite",
        rate: 699,
        capacity: 3,
        capacity_label: "80 sqm",
        features: &["City View", "Living Area", "Work Desk", "Mini Bar"],
        description: "Perfect for business travelers",
        image: "../images/executive-room.jpg",
    },
    CatalogEntry {
        id: "family",
        name: "Family Suite",
        rate: 599,
        capacity: 5,
        capacity_label: "90 sqm",
        features: &["Separate Bedroom", "Kids Area", "Kitchenette", "Extra Bed"],
        description: "Spacious comfort for the whole family",
        image: "../images/family.jpg",
    },
    CatalogEntry {
        id: "deluxe",
        name: "Deluxe King Room",
        rate: 399,
        capacity: 2,
        capacity_label: "45 sqm",
        features: &["King Bed", "City View", "Modern Bathroom", "Smart TV"],
        description: "Elegant comfort with modern amenities",
        image: "../images/DeluxeKingRoom.png",
    },
    CatalogEntry {
        id: "superior",
        name: "Superior Twin Room",
        rate: 349,
        capacity: 2,
        capacity_label: "40 sqm",
        features: &["Twin Beds", "Garden View", "Work Area", "Rain Shower"],
        description: "Comfortable accommodation",
        image: "../images/SuperiorTwinRoom.jpg",
    },
];

const VEHICLES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "luxury-sedan",
        name: "Luxury Sedan",
        rate: 120,
        capacity: 3,
        capacity_label: "1-3 passengers",
        features: &["Mercedes S-Class", "Premium Leather", "Climate Control", "WiFi"],
        description: "Perfect for business meetings and airport transfers",
        image: "../images/sedan.jpg",
    },
    CatalogEntry {
        id: "suv",
        name: "Premium SUV",
        rate: 180,
        capacity: 6,
        capacity_label: "1-6 passengers",
        features: &["BMW X7", "Spacious Interior", "Entertainment System", "Privacy Glass"],
        description: "Ideal for families and group transportation",
        image: "../images/suv.jpg",
    },
    CatalogEntry {
        id: "limousine",
        name: "Stretch Limousine",
        rate: 350,
        capacity: 8,
        capacity_label: "1-8 passengers",
        features: &["Luxury Interior", "Mini Bar", "Mood Lighting", "Sound System"],
        description: "Ultimate luxury for special occasions",
        image: "../images/limo.jpg",
    },
    CatalogEntry {
        id: "executive-van",
        name: "Executive Van",
        rate: 250,
        capacity: 14,
        capacity_label: "1-14 passengers",
        features: &["Mercedes Sprinter", "Conference Seating", "WiFi", "Power Outlets"],
        description: "Perfect for corporate events and group transfers",
        image: "../images/van.jpg",
    },
];

const AMENITIES: &[Amenity] = &[
    Amenity {
        title: "Fine Dining",
        description: "Award-winning restaurants with world-class cuisine",
        features: &["Rooftop restaurant", "Wine cellar", "Private dining", "24h room service"],
    },
    Amenity {
        title: "Luxury Spa",
        description: "Full-service spa with rejuvenating treatments",
        features: &["Massage therapy", "Facial treatments", "Sauna & steam", "Couples suites"],
    },
    Amenity {
        title: "Recreation",
        description: "World-class recreational facilities for all ages",
        features: &["Infinity pool", "Poolside bar", "Water sports", "Kids pool"],
    },
    Amenity {
        title: "Fitness Center",
        description: "State-of-the-art equipment and personal training",
        features: &["Modern equipment", "Personal trainers", "Yoga classes", "Open 24/7"],
    },
    Amenity {
        title: "Business Services",
        description: "Complete business facilities for corporate guests",
        features: &["Conference rooms", "Meeting facilities", "Secretarial services", "High-speed WiFi"],
    },
    Amenity {
        title: "Concierge",
        description: "24/7 concierge service for all your needs",
        features: &["Tour arrangements", "Restaurant reservations", "Event tickets", "Transportation"],
    },
];

/// All room offerings, most expensive first.
pub fn rooms() -> &'static [CatalogEntry] {
    ROOMS
}

/// All chauffeur vehicles.
pub fn vehicles() -> &'static [CatalogEntry] {
    VEHICLES
}

/// All hotel amenities shown on the services screen.
pub fn amenities() -> &'static [Amenity] {
    AMENITIES
}

/// Look up a room by id.
pub fn room_by_id(id: &str) -> Option<&'static CatalogEntry> {
    ROOMS.iter().find(|room| room.id == id)
}

/// Look up a vehicle by id.
pub fn vehicle_by_id(id: &str) -> Option<&'static CatalogEntry> {
    VEHICLES.iter().find(|vehicle| vehicle.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_lookup() {
        let room = room_by_id("deluxe").expect("deluxe room exists");
        assert_eq!(room.name, "Deluxe King Room");
        assert_eq!(room.rate, 399);
    }

    #[test]
    fn test_unknown_id_returns_none() {
        assert!(room_by_id("penthouse").is_none());
        assert!(vehicle_by_id("helicopter").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        for entries in [rooms(), vehicles()] {
            for (i, a) in entries.iter().enumerate() {
                for b in &entries[i + 1..] {
                    assert_ne!(a.id, b.id, "duplicate id {}", a.id);
                }
            }
        }
    }

    #[test]
    fn test_entries_are_well_formed() {
        for entry in rooms().iter().chain(vehicles()) {
            assert!(!entry.id.is_empty());
            assert!(!entry.name.is_empty());
            assert!(entry.rate > 0);
            assert!(entry.capacity > 0);
            assert!(!entry.features.is_empty());
        }
    }

    #[test]
    fn test_vehicle_lookup() {
        let van = vehicle_by_id("executive-van").expect("van exists");
        assert_eq!(van.capacity, 14);
        assert_eq!(van.rate, 250);
    }
}
