//! Property records and the allow-listed insert payload

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::ValidationError;

/// Property row from `properties`
///
/// `cost_per_night` is in minor currency units (cents).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Search result: a property and the average of its review ratings
/// (`None` when it has no reviews).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// A column a caller may supply when creating a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
}

const fn required(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        required: true,
    }
}

const fn optional(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        required: false,
    }
}

/// Every column accepted by [`NewProperty`], in insert order.
///
/// Anything outside this list is rejected; `id` is assigned by the store.
pub const PROPERTY_FIELDS: &[FieldSpec] = &[
    required("owner_id"),
    required("title"),
    optional("description"),
    optional("thumbnail_photo_url"),
    optional("cover_photo_url"),
    required("cost_per_night"),
    optional("parking_spaces"),
    optional("number_of_bathrooms"),
    optional("number_of_bedrooms"),
    required("country"),
    required("street"),
    required("city"),
    required("province"),
    required("post_code"),
    optional("active"),
];

/// Payload for [`crate::PropertyRepo::create`]
///
/// Optional fields left as `None` are omitted from the insert so the
/// store's column defaults apply. `cost_per_night` is stored as given, in
/// minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
    pub cost_per_night: i32,
    pub parking_spaces: Option<i32>,
    pub number_of_bathrooms: Option<i32>,
    pub number_of_bedrooms: Option<i32>,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: Option<bool>,
}

impl NewProperty {
    /// Build a payload from a JSON object, checking its keys against
    /// [`PROPERTY_FIELDS`] before reading any values.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::UnknownField`] for a key outside the allow-list
    /// - [`ValidationError::MissingField`] for an absent required key
    /// - [`ValidationError::Empty`] for a blank required text value
    /// - [`ValidationError::Invalid`] for a non-object payload or a value of
    ///   the wrong type
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(fields) = &value else {
            return Err(ValidationError::Invalid {
                reason: "property payload must be a JSON object".to_owned(),
            });
        };

        if let Some(unknown) = fields
            .keys()
            .find(|key| !PROPERTY_FIELDS.iter().any(|spec| spec.name == key.as_str()))
        {
            return Err(ValidationError::UnknownField {
                field: unknown.clone(),
            });
        }

        if let Some(missing) = PROPERTY_FIELDS
            .iter()
            .find(|spec| spec.required && !fields.contains_key(spec.name))
        {
            return Err(ValidationError::MissingField {
                field: missing.name,
            });
        }

        if let Some(blank) = PROPERTY_FIELDS.iter().find(|spec| {
            spec.required
                && fields
                    .get(spec.name)
                    .and_then(Value::as_str)
                    .is_some_and(|text| text.trim().is_empty())
        }) {
            return Err(ValidationError::Empty { field: blank.name });
        }

        serde_json::from_value(value).map_err(|err| ValidationError::Invalid {
            reason: err.to_string(),
        })
    }
}
