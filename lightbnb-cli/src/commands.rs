//! Subcommand handlers
//!
//! Each handler validates its input, opens the pool, runs one repository
//! operation, prints the result as JSON and closes the pool.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use lightbnb_db::{
    DbConfig, NewProperty, NewUser, PgPool, PropertyRepo, ReservationRepo, SearchFilter,
    UserRepo, DEFAULT_LIMIT,
};
use serde::Serialize;
use tracing::info;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("key").required(true).args(["email", "id"])))]
pub struct UserArgs {
    /// Exact email address
    #[arg(long)]
    pub email: Option<String>,

    /// User id
    #[arg(long)]
    pub id: Option<i32>,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Stored credential (hash it before passing it in)
    #[arg(long)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct ReservationsArgs {
    /// Guest user id
    #[arg(long)]
    pub guest_id: i32,

    /// Maximum reservations to return
    #[arg(long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Substring of the city (case-sensitive)
    #[arg(long)]
    pub city: Option<String>,

    /// Only properties owned by this user id
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// Minimum price per night, in dollars
    #[arg(long, allow_negative_numbers = true)]
    pub min_price: Option<i64>,

    /// Maximum price per night, in dollars
    #[arg(long, allow_negative_numbers = true)]
    pub max_price: Option<i64>,

    /// Minimum average review rating
    #[arg(long, allow_negative_numbers = true)]
    pub min_rating: Option<f64>,

    /// Maximum properties to return
    #[arg(long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,
}

impl SearchArgs {
    fn filter(&self) -> SearchFilter {
        SearchFilter {
            city: self.city.clone(),
            owner_id: self.owner_id,
            minimum_price_per_night: self.min_price,
            maximum_price_per_night: self.max_price,
            minimum_rating: self.min_rating,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddPropertyArgs {
    /// JSON file with the property fields, or - for stdin
    #[arg(long)]
    pub json: PathBuf,
}

impl AddPropertyArgs {
    fn load(&self) -> Result<NewProperty> {
        let raw = if self.json.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read property JSON from stdin")?;
            buf
        } else {
            std::fs::read_to_string(&self.json)
                .with_context(|| format!("Failed to read {}", self.json.display()))?
        };

        let value: serde_json::Value =
            serde_json::from_str(&raw).context("Property input is not valid JSON")?;
        NewProperty::from_json(value).context("Invalid property")
    }
}

async fn open_pool(config: &DbConfig) -> Result<PgPool> {
    lightbnb_db::connect(config)
        .await
        .context("Failed to connect to database")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run_user(args: UserArgs, config: &DbConfig) -> Result<()> {
    let pool = open_pool(config).await?;
    let repo = UserRepo::new(&pool);

    let user = match (&args.email, args.id) {
        (Some(email), _) => repo.find_by_email(email).await,
        (None, Some(id)) => repo.find_by_id(id).await,
        (None, None) => Ok(None),
    };
    pool.close().await;

    let user = user.context("User lookup failed")?;
    if user.is_none() {
        info!("No matching user");
    }
    print_json(&user)
}

pub async fn run_register(args: RegisterArgs, config: &DbConfig) -> Result<()> {
    let pool = open_pool(config).await?;
    let created = UserRepo::new(&pool)
        .create(&NewUser {
            name: args.name,
            email: args.email,
            password: args.password,
        })
        .await;
    pool.close().await;

    print_json(&created.context("Registration failed")?)
}

pub async fn run_reservations(args: ReservationsArgs, config: &DbConfig) -> Result<()> {
    let pool = open_pool(config).await?;
    let stays = ReservationRepo::new(&pool)
        .list_past_for_guest(args.guest_id, args.limit)
        .await;
    pool.close().await;

    print_json(&stays.context("Listing reservations failed")?)
}

pub async fn run_search(args: SearchArgs, config: &DbConfig) -> Result<()> {
    let filter = args.filter();
    let pool = open_pool(config).await?;
    let listings = PropertyRepo::new(&pool).search(&filter, args.limit).await;
    pool.close().await;

    print_json(&listings.context("Property search failed")?)
}

pub async fn run_add_property(args: AddPropertyArgs, config: &DbConfig) -> Result<()> {
    // Reject bad input before touching the database
    let property = args.load()?;

    let pool = open_pool(config).await?;
    let created = PropertyRepo::new(&pool).create(&property).await;
    pool.close().await;

    print_json(&created.context("Creating property failed")?)
}
