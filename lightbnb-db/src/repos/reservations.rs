//! Reservation repository
//!
//! Lists a guest's completed stays with the reserved property and its
//! average rating, in a single JOIN query.

use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::models::GuestReservation;

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Past reservations for a guest, earliest start date first.
    ///
    /// A reservation ending today or later is not past and is left out.
    /// Properties without reviews are kept with `average_rating: None`.
    #[instrument(skip(self))]
    pub async fn list_past_for_guest(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> Result<Vec<GuestReservation>> {
        let rows = sqlx::query_as::<_, GuestReservation>(
            r#"
            SELECT
                properties.*,
                reservations.id AS reservation_id,
                reservations.guest_id,
                reservations.start_date,
                reservations.end_date,
                avg(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            AND reservations.end_date < now()::date
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date, reservations.id
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        debug!(count = rows.len(), "past reservations loaded");
        Ok(rows)
    }
}
