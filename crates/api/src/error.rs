use actix_web::{http::StatusCode, HttpResponse};
use study_api_api_structs::ErrorResponse;
use thiserror::Error;

/// Errors that are returned to the client.
///
/// The display value is used as the `message` of the JSON error body,
/// so it must never contain details about the underlying failure.
#[derive(Error, Debug)]
pub enum StudyError {
    /// `source` is kept for logging and is never sent to the client
    #[error("{message}")]
    InternalError {
        message: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("{0}")]
    BadClientData(String),
    #[error("{0}")]
    NotFound(String),
}

impl StudyError {
    pub fn internal<T: Into<String>>(message: T, source: anyhow::Error) -> Self {
        Self::InternalError {
            message: message.into(),
            source,
        }
    }

    pub fn user_not_found() -> Self {
        Self::NotFound("User not found".into())
    }
}

impl actix_web::error::ResponseError for StudyError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::{body::to_bytes, ResponseError};

    #[actix_web::test]
    async fn error_body_is_json_message() {
        let res = StudyError::user_not_found().error_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(res.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.message, "User not found");
    }

    #[actix_web::test]
    async fn internal_error_body_hides_the_source() {
        let res = StudyError::internal("Error updating user", anyhow::anyhow!("pool timed out"))
            .error_response();
        let body = to_bytes(res.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Error updating user"}));
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            StudyError::internal("Error fetching users", anyhow::anyhow!("connection reset"))
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            StudyError::BadClientData("Name and email are required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
