use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::StoreError;
use crate::templates::error_page;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    ReferentialConstraint(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            StoreError::ReferentialConstraint { .. } => {
                Self::ReferentialConstraint(err.to_string())
            }
            StoreError::Database(e) => Self::Database(e),
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "A database error occurred.".to_string())
            }
            Self::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::ReferentialConstraint(ref msg) => {
                tracing::warn!("Referential constraint: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            Self::Store(ref e) => {
                tracing::error!("Store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, error_page(status, &message, &[])).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_statuses() {
        let not_found: AppError = StoreError::NotFound { entity: "Venue", id: 7 }.into();
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let blocked: AppError = StoreError::ReferentialConstraint {
            entity: "Artist",
            name: "Guns N Petals".to_string(),
        }
        .into();
        assert!(matches!(blocked, AppError::ReferentialConstraint(_)));
        assert_eq!(blocked.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_remaining_store_errors_are_server_errors() {
        let missing: AppError = StoreError::MissingReference { entity: "Venue", id: 3 }.into();
        assert!(matches!(missing, AppError::Store(_)));
        assert_eq!(missing.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let db: AppError = StoreError::Database(sea_orm::DbErr::Custom("boom".into())).into();
        assert!(matches!(db, AppError::Database(_)));
        assert_eq!(db.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
