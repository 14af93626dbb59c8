use axum::{
    async_trait,
    body::HttpBody,
    extract::FromRequest,
    http::{header::CONTENT_TYPE, Request},
    BoxError, Form, Json,
};
use serde::de::DeserializeOwned;

use super::api_error::ApiError;

/// Body extractor that reads JSON or urlencoded forms by content type.
/// Requests without a recognised content type yield `T::default()`.
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for JsonOrForm<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let essence = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(|value| value.trim().to_ascii_lowercase())
            .unwrap_or_default();

        match essence.as_str() {
            "application/json" => {
                let Json(value) = Json::<T>::from_request(req, state).await?;
                Ok(Self(value))
            }
            "application/x-www-form-urlencoded" => {
                let Form(value) = Form::<T>::from_request(req, state).await?;
                Ok(Self(value))
            }
            _ => Ok(Self(T::default())),
        }
    }
}
