//! Property repository
//!
//! - search: statement from [`compile_search`], one row per property
//! - create: statement from [`compile_insert`], returns the stored row

use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::models::{NewProperty, Property, PropertyListing, SearchFilter};
use crate::query::{compile_insert, compile_search};

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Properties matching `filter`, cheapest first, at most `limit`.
    #[instrument(skip(self))]
    pub async fn search(&self, filter: &SearchFilter, limit: i64) -> Result<Vec<PropertyListing>> {
        let query = compile_search(filter, limit);
        debug!(sql = %query.sql, params = query.params.len(), "compiled property search");

        let rows = query
            .query_as::<PropertyListing>()
            .fetch_all(self.pool)
            .await?;

        debug!(count = rows.len(), "property search complete");
        Ok(rows)
    }

    /// Insert a property, returning the stored row.
    ///
    /// An `owner_id` with no matching user fails with
    /// [`crate::DbError::ForeignKeyViolation`].
    #[instrument(skip_all, fields(owner_id = property.owner_id))]
    pub async fn create(&self, property: &NewProperty) -> Result<Property> {
        let query = compile_insert(property);
        debug!(sql = %query.sql, params = query.params.len(), "compiled property insert");

        let created = query.query_as::<Property>().fetch_one(self.pool).await?;

        debug!(property_id = created.id, "property created");
        Ok(created)
    }
}
