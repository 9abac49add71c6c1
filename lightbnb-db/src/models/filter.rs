//! Property search criteria

use serde::Deserialize;

/// Result count used when the caller does not pass one
pub const DEFAULT_LIMIT: i64 = 10;

/// Optional criteria for [`crate::PropertyRepo::search`]
///
/// Prices are in major currency units (dollars); the search compiler
/// converts them to the stored minor units.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    /// Case-sensitive substring of the property's city
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<i64>,
    pub maximum_price_per_night: Option<i64>,
    pub minimum_rating: Option<f64>,
}

impl SearchFilter {
    /// City to match, ignoring a blank value.
    pub fn city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .filter(|city| !city.trim().is_empty())
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_price_range(mut self, minimum: Option<i64>, maximum: Option<i64>) -> Self {
        self.minimum_price_per_night = minimum;
        self.maximum_price_per_night = maximum;
        self
    }

    pub fn with_minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }
}
