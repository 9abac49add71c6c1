//! Reservation records

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::Property;

/// Reservation row from `reservations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub id: i32,
    pub property_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A past stay: the reserved property, the reservation dates and the
/// property's average review rating.
///
/// The reservation id is selected as `reservation_id` so it cannot collide
/// with the property's `id` column.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct GuestReservation {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub reservation_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub average_rating: Option<f64>,
}

impl GuestReservation {
    pub fn reservation(&self) -> Reservation {
        Reservation {
            id: self.reservation_id,
            property_id: self.property.id,
            guest_id: self.guest_id,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Number of nights booked.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
