use aula_core::error::ServiceError;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use sea_orm::DbErr;
use serde_json::json;
use std::error::Error;

/// Error surface of the HTTP layer. Service errors keep their taxonomy until
/// this point and are translated to a status code exactly once, here.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("authentication required")]
    Unauthorized,
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("internal server error")]
    Internal,
}

impl From<DbErr> for ApiError {
    fn from(error: DbErr) -> Self {
        Self::Service(ServiceError::Db(error))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Service(error) => match error {
                ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, error.to_string()),
                ServiceError::MissingReference { .. } | ServiceError::Validation(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
                }
                ServiceError::Conflict(_) => (StatusCode::CONFLICT, error.to_string()),
                ServiceError::Db(error) => {
                    tracing::error!(error = error as &dyn Error, "unhandled database error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
                }
            },
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::Forbidden(_) => (StatusCode::FORBIDDEN, self.to_string()),
            Self::Internal => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::from(ServiceError::NotFound { entity: "course", id: 7 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let response =
            ApiError::from(ServiceError::Conflict("duplicate".to_owned())).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_missing_reference_maps_to_422() {
        let response =
            ApiError::from(ServiceError::MissingReference { entity: "category", id: 3 }).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_db_error_is_opaque() {
        let response = ApiError::from(DbErr::Custom("boom".to_owned())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
