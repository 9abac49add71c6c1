//! Domain records and caller-supplied inputs
//!
//! Records derive `FromRow` so repositories can map rows directly; inputs
//! (`NewUser`, `NewProperty`, `SearchFilter`) derive `Deserialize` so callers
//! can build them from JSON or query strings.

pub mod filter;
pub mod property;
pub mod reservation;
pub mod user;
pub mod validation;

pub use filter::{SearchFilter, DEFAULT_LIMIT};
pub use property::{FieldSpec, NewProperty, Property, PropertyListing, PROPERTY_FIELDS};
pub use reservation::{GuestReservation, Reservation};
pub use user::{NewUser, User};
pub use validation::ValidationError;
