//! Property search compiler
//!
//! Turns a [`SearchFilter`] and a limit into one aggregated, filtered and
//! limited `SELECT`. Predicates are collected first and numbered when the
//! statement is rendered, walking the text from left to right, so the
//! `$n` in the text is always the n-th entry of `params`.

use crate::models::SearchFilter;

use super::{CompiledQuery, SqlParam};

const SELECT_LISTINGS: &str = "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating
FROM properties
LEFT JOIN property_reviews ON properties.id = property_reviews.property_id";

/// Stored prices are in cents, filter prices in dollars.
const MINOR_UNITS_PER_MAJOR: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Eq,
    Gte,
    Lte,
    Like,
}

impl Op {
    fn as_sql(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Gte => ">=",
            Op::Lte => "<=",
            Op::Like => "LIKE",
        }
    }
}

#[derive(Debug, Clone)]
struct Predicate {
    expr: &'static str,
    op: Op,
    value: SqlParam,
}

/// Row predicates (`WHERE`) and aggregate predicates (`HAVING`)
#[derive(Debug, Default)]
struct SearchBuilder {
    row: Vec<Predicate>,
    aggregate: Vec<Predicate>,
}

impl SearchBuilder {
    fn filter(&mut self, expr: &'static str, op: Op, value: SqlParam) -> &mut Self {
        self.row.push(Predicate { expr, op, value });
        self
    }

    fn having(&mut self, expr: &'static str, op: Op, value: SqlParam) -> &mut Self {
        self.aggregate.push(Predicate { expr, op, value });
        self
    }

    fn render(self, limit: i64) -> CompiledQuery {
        let mut params = Vec::with_capacity(self.row.len() + self.aggregate.len() + 1);
        let mut sql = String::from(SELECT_LISTINGS);

        push_clause(&mut sql, &mut params, "WHERE", self.row);
        sql.push_str("\nGROUP BY properties.id");
        push_clause(&mut sql, &mut params, "HAVING", self.aggregate);
        sql.push_str("\nORDER BY properties.cost_per_night, properties.id");

        params.push(SqlParam::BigInt(limit));
        sql.push_str(&format!("\nLIMIT ${}", params.len()));

        CompiledQuery { sql, params }
    }
}

/// Appends `keyword p1 AND p2 ...`, or nothing when there are no predicates.
fn push_clause(
    sql: &mut String,
    params: &mut Vec<SqlParam>,
    keyword: &str,
    predicates: Vec<Predicate>,
) {
    if predicates.is_empty() {
        return;
    }

    let rendered: Vec<String> = predicates
        .into_iter()
        .map(|predicate| {
            params.push(predicate.value);
            format!(
                "{} {} ${}",
                predicate.expr,
                predicate.op.as_sql(),
                params.len()
            )
        })
        .collect();

    sql.push_str(&format!("\n{keyword} {}", rendered.join(" AND ")));
}

fn to_minor_units(major: i64) -> i64 {
    major.saturating_mul(MINOR_UNITS_PER_MAJOR)
}

/// Compile a property search.
///
/// Absent criteria add nothing. Values are not range-checked: a negative
/// limit or an inverted price range reaches the store as given.
pub fn compile_search(filter: &SearchFilter, limit: i64) -> CompiledQuery {
    let mut builder = SearchBuilder::default();

    if let Some(city) = filter.city() {
        builder.filter(
            "properties.city",
            Op::Like,
            SqlParam::Text(format!("%{city}%")),
        );
    }
    if let Some(owner_id) = filter.owner_id {
        builder.filter("properties.owner_id", Op::Eq, SqlParam::Int(owner_id));
    }
    if let Some(minimum) = filter.minimum_price_per_night {
        builder.filter(
            "properties.cost_per_night",
            Op::Gte,
            SqlParam::BigInt(to_minor_units(minimum)),
        );
    }
    if let Some(maximum) = filter.maximum_price_per_night {
        builder.filter(
            "properties.cost_per_night",
            Op::Lte,
            SqlParam::BigInt(to_minor_units(maximum)),
        );
    }
    if let Some(rating) = filter.minimum_rating {
        builder.having(
            "avg(property_reviews.rating)",
            Op::Gte,
            SqlParam::Float(rating),
        );
    }

    builder.render(limit)
}
