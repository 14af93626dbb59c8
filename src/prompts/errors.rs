use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum PromptsApiError {
    ApiKeyRequired,
    OriginalPromptRequired,
}

impl PromptsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::ApiKeyRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "API key is required".to_string(),
            },
            Self::OriginalPromptRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Original prompt is required".to_string(),
            },
        }
    }
}
