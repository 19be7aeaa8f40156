//! crates/cura_core/src/directory.rs
//!
//! The fixed doctor directory shown under doctor-bound pathways.

use crate::domain::DoctorRecord;

static DOCTORS: [DoctorRecord; 3] = [
    DoctorRecord {
        id: "1",
        name: "Dr. Sarah Chen",
        specialization: "Family Medicine",
        distance: "1.2 km away",
        next_availability: "Tomorrow at 2:00 PM",
        rating: 4.8,
    },
    DoctorRecord {
        id: "2",
        name: "Dr. Michael Rodriguez",
        specialization: "Internal Medicine",
        distance: "2.3 km away",
        next_availability: "Today at 4:30 PM",
        rating: 4.9,
    },
    DoctorRecord {
        id: "3",
        name: "Dr. Priya Sharma",
        specialization: "General Practice",
        distance: "0.8 km away",
        next_availability: "Tomorrow at 10:00 AM",
        rating: 4.7,
    },
];

/// Always the same three doctors, in the same order.
pub fn list_doctors() -> &'static [DoctorRecord] {
    &DOCTORS
}

pub fn find_doctor(id: &str) -> Option<&'static DoctorRecord> {
    DOCTORS.iter().find(|d| d.id == id)
}
