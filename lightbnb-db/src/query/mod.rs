//! Statement compilers
//!
//! Both compilers are pure: they return the statement text and its bound
//! values, and never touch the pool. Values only ever reach the store as
//! positional parameters (`$1`, `$2`, ...); the text contains nothing
//! supplied by the caller.

pub mod insert;
pub mod search;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

pub use insert::compile_insert;
pub use search::compile_search;

/// A value bound to one positional placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i32),
    BigInt(i64),
    Float(f64),
    Bool(bool),
}

/// Statement text plus its parameters, in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl CompiledQuery {
    /// Prepare the statement with every parameter bound, mapping rows to `O`.
    pub fn query_as<O>(&self) -> QueryAs<'_, Postgres, O, PgArguments>
    where
        O: for<'r> FromRow<'r, PgRow>,
    {
        self.params
            .iter()
            .fold(sqlx::query_as::<Postgres, O>(&self.sql), |query, param| match param {
                SqlParam::Text(value) => query.bind(value.as_str()),
                SqlParam::Int(value) => query.bind(*value),
                SqlParam::BigInt(value) => query.bind(*value),
                SqlParam::Float(value) => query.bind(*value),
                SqlParam::Bool(value) => query.bind(*value),
            })
    }
}
