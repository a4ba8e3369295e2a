//! Entity store.
//!
//! Every mutation runs inside its own `DatabaseTransaction`. A transaction
//! that is dropped without `commit` rolls back, so early returns through
//! `?` never leave one open.

mod artist;
mod show;
mod venue;

pub use artist::ArtistRepository;
pub use show::{CounterpartRow, ShowListingRow, ShowRepository};
pub use venue::VenueRepository;

use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ColumnTrait, DbErr, SqlErr,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("{entity} {name} is still referenced by existing shows")]
    ReferentialConstraint { entity: &'static str, name: String },

    #[error("{entity} with id {id} has not been listed")]
    MissingReference { entity: &'static str, id: i32 },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl StoreError {
    /// Maps a failed delete, turning foreign key violations raised by the
    /// engine into `ReferentialConstraint`.
    fn from_delete(err: DbErr, entity: &'static str, name: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::ReferentialConstraint {
                entity,
                name: name.to_string(),
            },
            _ => Self::Database(err),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Case-insensitive `name LIKE %term%`, with wildcards in `term` escaped.
///
/// Case folding of the column is left to the engine's `lower()`. Postgres
/// folds every letter; SQLite's built-in `lower()` folds ASCII only, so on
/// SQLite a non-ASCII letter stored in upper case never matches.
pub(crate) fn name_contains<C: ColumnTrait>(column: C, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
    Expr::expr(Func::lower(Expr::col((column.entity_name(), column))))
        .like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("plain"), "plain");
    }
}
