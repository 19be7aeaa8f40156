//! crates/cura_core/src/booking.rs
//!
//! The appointment booking stub. Nothing is scheduled anywhere: a complete
//! request is echoed back as a confirmation, an incomplete one is rejected.

use chrono::{Duration, NaiveDate};

use crate::directory::find_doctor;
use crate::domain::{BookingRecord, Notice};

/// The slots offered for every doctor on every day.
pub const TIME_SLOTS: [&str; 7] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "02:00 PM", "03:00 PM", "04:00 PM", "05:00 PM",
];

/// How far ahead the date picker lets a user book.
pub const BOOKING_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("No doctor was selected")]
    MissingDoctor,
    #[error("No date was selected")]
    MissingDate,
    #[error("No time slot was selected")]
    MissingTimeSlot,
}

/// A confirmed booking and the texts announcing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub record: BookingRecord,
    pub doctor_name: String,
    /// The chat message confirming the appointment.
    pub confirmation: String,
    pub notice: Notice,
}

/// Books an appointment. Any missing or empty argument rejects the request.
///
/// There is no availability or double-booking check, and an id outside the
/// directory is accepted under the name "Doctor".
pub fn book(
    doctor_id: Option<&str>,
    date: Option<NaiveDate>,
    time_slot: Option<&str>,
) -> Result<Booking, BookingError> {
    let doctor_id = doctor_id
        .filter(|id| !id.is_empty())
        .ok_or(BookingError::MissingDoctor)?;
    let date = date.ok_or(BookingError::MissingDate)?;
    let time_slot = time_slot
        .filter(|slot| !slot.is_empty())
        .ok_or(BookingError::MissingTimeSlot)?;

    let doctor_name = find_doctor(doctor_id).map_or("Doctor", |d| d.name);

    let confirmation = format!(
        "Great! Your appointment with {doctor_name} has been booked for {} at {time_slot}. You'll receive a confirmation email shortly with all the details and location information.",
        date.format("%A, %B %-d, %Y")
    );
    let notice = Notice::info(
        "Appointment Booked!",
        format!(
            "Your appointment with {doctor_name} is confirmed for {} at {time_slot}",
            date.format("%b %-d")
        ),
    );

    Ok(Booking {
        record: BookingRecord {
            doctor_id: doctor_id.to_string(),
            date,
            time_slot: time_slot.to_string(),
        },
        doctor_name: doctor_name.to_string(),
        confirmation,
        notice,
    })
}

/// Whether the date picker offers `date`: from tomorrow up to thirty days out.
///
/// [`book`] does not enforce this.
pub fn is_bookable_date(date: NaiveDate, today: NaiveDate) -> bool {
    date > today && date <= today + Duration::days(BOOKING_WINDOW_DAYS)
}
