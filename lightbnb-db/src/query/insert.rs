//! Property insert compiler
//!
//! Column names come from [`NewProperty`]'s fixed field set, never from
//! caller-supplied keys. Optional fields that are `None` are left out so
//! the table defaults apply.

use crate::models::NewProperty;

use super::{CompiledQuery, SqlParam};

/// Present fields of `property` as (column, value), in
/// [`crate::models::PROPERTY_FIELDS`] order.
pub fn property_columns(property: &NewProperty) -> Vec<(&'static str, SqlParam)> {
    let text = |value: &str| Some(SqlParam::Text(value.to_owned()));
    let opt_text = |value: &Option<String>| value.as_deref().map(|v| SqlParam::Text(v.to_owned()));

    let columns = [
        ("owner_id", Some(SqlParam::Int(property.owner_id))),
        ("title", text(&property.title)),
        ("description", opt_text(&property.description)),
        ("thumbnail_photo_url", opt_text(&property.thumbnail_photo_url)),
        ("cover_photo_url", opt_text(&property.cover_photo_url)),
        ("cost_per_night", Some(SqlParam::Int(property.cost_per_night))),
        ("parking_spaces", property.parking_spaces.map(SqlParam::Int)),
        ("number_of_bathrooms", property.number_of_bathrooms.map(SqlParam::Int)),
        ("number_of_bedrooms", property.number_of_bedrooms.map(SqlParam::Int)),
        ("country", text(&property.country)),
        ("street", text(&property.street)),
        ("city", text(&property.city)),
        ("province", text(&property.province)),
        ("post_code", text(&property.post_code)),
        ("active", property.active.map(SqlParam::Bool)),
    ];

    columns
        .into_iter()
        .filter_map(|(column, value)| value.map(|value| (column, value)))
        .collect()
}

/// Compile `INSERT INTO properties (...) VALUES ($1, ...) RETURNING *`.
pub fn compile_insert(property: &NewProperty) -> CompiledQuery {
    let (columns, params): (Vec<&str>, Vec<SqlParam>) =
        property_columns(property).into_iter().unzip();

    let placeholders: Vec<String> = (1..=params.len()).map(|n| format!("${n}")).collect();

    let sql = format!(
        "INSERT INTO properties ({}) VALUES ({}) RETURNING *",
        columns.join(", "),
        placeholders.join(", ")
    );

    CompiledQuery { sql, params }
}
