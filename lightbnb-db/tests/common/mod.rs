//! Shared fixtures for database integration tests
//!
//! Each test gets its own schema so tests can run in parallel against one
//! database. Run with:
//!   DATABASE_URL=postgres://... cargo test -p lightbnb-db -- --ignored

#![allow(dead_code)]

use chrono::NaiveDate;
use lightbnb_db::{NewProperty, NewUser, PgPool, PropertyRepo, UserRepo};
use sqlx::postgres::PgPoolOptions;
use sqlx::Executor;
use tracing_subscriber::EnvFilter;

const SCHEMA: &str = r#"
CREATE TABLE users (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    password VARCHAR(255) NOT NULL
);

CREATE TABLE properties (
    id SERIAL PRIMARY KEY,
    owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    title VARCHAR(255) NOT NULL,
    description TEXT,
    thumbnail_photo_url VARCHAR(255),
    cover_photo_url VARCHAR(255),
    cost_per_night INTEGER NOT NULL DEFAULT 0,
    parking_spaces INTEGER NOT NULL DEFAULT 0,
    number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
    number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
    country VARCHAR(255) NOT NULL,
    street VARCHAR(255) NOT NULL,
    city VARCHAR(255) NOT NULL,
    province VARCHAR(255) NOT NULL,
    post_code VARCHAR(255) NOT NULL,
    active BOOLEAN NOT NULL DEFAULT TRUE
);

CREATE TABLE reservations (
    id SERIAL PRIMARY KEY,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
    guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
);

CREATE TABLE property_reviews (
    id SERIAL PRIMARY KEY,
    guest_id INTEGER REFERENCES users(id) ON DELETE CASCADE,
    property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
    reservation_id INTEGER REFERENCES reservations(id) ON DELETE CASCADE,
    rating SMALLINT NOT NULL DEFAULT 0,
    message TEXT
);
"#;

/// A pool whose connections all see a freshly created, private schema
pub struct TestDb {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

/// Route repository logs (including compiled SQL) to the test output.
/// Quiet unless RUST_LOG is set, e.g. RUST_LOG=lightbnb_db=debug.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    // Every test calls this; only the first install wins
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

impl TestDb {
    pub async fn new() -> Self {
        init_tracing();
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let schema = format!("lightbnb_test_{}", uuid::Uuid::new_v4().simple());

        let admin = lightbnb_db::create_pool_with_options(&url, 1)
            .await
            .expect("admin pool creation failed");
        admin
            .execute(format!("CREATE SCHEMA {schema}").as_str())
            .await
            .expect("create schema failed");

        let search_path = format!("SET search_path TO {schema}");
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .after_connect(move |conn, _meta| {
                let search_path = search_path.clone();
                Box::pin(async move {
                    conn.execute(search_path.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .expect("pool creation failed");

        sqlx::raw_sql(SCHEMA)
            .execute(&pool)
            .await
            .expect("schema setup failed");

        Self {
            pool,
            admin,
            schema,
        }
    }

    pub async fn teardown(self) {
        self.pool.close().await;
        self.admin
            .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
            .await
            .expect("drop schema failed");
        self.admin.close().await;
    }

    pub async fn user(&self, name: &str, email: &str) -> i32 {
        UserRepo::new(&self.pool)
            .create(&NewUser {
                name: name.to_owned(),
                email: email.to_owned(),
                password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_owned(),
            })
            .await
            .expect("user insert failed")
            .id
    }

    pub async fn property(&self, owner_id: i32, title: &str, city: &str, cost_per_night: i32) -> i32 {
        PropertyRepo::new(&self.pool)
            .create(&new_property(owner_id, title, city, cost_per_night))
            .await
            .expect("property insert failed")
            .id
    }

    pub async fn review(&self, property_id: i32, rating: i16) {
        sqlx::query("INSERT INTO property_reviews (property_id, rating) VALUES ($1, $2)")
            .bind(property_id)
            .bind(rating)
            .execute(&self.pool)
            .await
            .expect("review insert failed");
    }

    pub async fn reservation(
        &self,
        property_id: i32,
        guest_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> i32 {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO reservations (property_id, guest_id, start_date, end_date) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(property_id)
        .bind(guest_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_one(&self.pool)
        .await
        .expect("reservation insert failed");
        id
    }

    /// The store's notion of today, which decides what counts as past.
    pub async fn today(&self) -> NaiveDate {
        let (today,): (NaiveDate,) = sqlx::query_as("SELECT now()::date")
            .fetch_one(&self.pool)
            .await
            .expect("date query failed");
        today
    }
}

pub fn new_property(owner_id: i32, title: &str, city: &str, cost_per_night: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: title.to_owned(),
        description: None,
        thumbnail_photo_url: None,
        cover_photo_url: None,
        cost_per_night,
        parking_spaces: None,
        number_of_bathrooms: None,
        number_of_bedrooms: None,
        country: "Canada".to_owned(),
        street: "1 Main Street".to_owned(),
        city: city.to_owned(),
        province: "British Columbia".to_owned(),
        post_code: "V5K 0A1".to_owned(),
        active: None,
    }
}
