//! lightbnb-db: data access for the LightBnB rental catalog
//!
//! Looks up and registers users, lists a guest's past reservations, and
//! searches properties with optional filters against PostgreSQL.
//!
//! # Layers
//!
//! - [`query`] - pure statement compilers (property search, property insert).
//!   No I/O, fully unit tested.
//! - [`repos`] - thin repositories that borrow a [`PgPool`], run exactly one
//!   statement per operation and map rows into [`models`].
//!
//! The pool is created explicitly by the caller (see [`pool::connect`]) and
//! closed at shutdown with [`PgPool::close`].

pub mod config;
pub mod error;
pub mod models;
pub mod pool;
pub mod query;
pub mod repos;

pub use config::DbConfig;
pub use error::{DbError, Result};
pub use models::{
    GuestReservation, NewProperty, NewUser, Property, PropertyListing, Reservation, SearchFilter,
    User, ValidationError, DEFAULT_LIMIT,
};
pub use pool::{connect, create_pool, create_pool_with_options};
pub use repos::{PropertyRepo, ReservationRepo, UserRepo};
pub use sqlx::PgPool;
