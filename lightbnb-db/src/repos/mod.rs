//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool; one statement per operation, no transactions
//! - Lookups return `Ok(None)`, lists return an empty `Vec` when nothing matches
//! - Relies on DB constraints (no check-then-insert); violations surface as
//!   typed [`crate::DbError`] variants

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::ReservationRepo;
pub use users::UserRepo;
