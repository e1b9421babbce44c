//! Custom Axum extractors

use axum::extract::{FromRequest, Request};

use crate::application::dto::{CreateItemDto, CreateOrderDto, UpdateItemDto, UpdateOrderDto};

use super::error::ApiError;

/// A JSON request body whose structural rejection shares the handlers'
/// validation path.
///
/// Axum's bare `Json` extractor answers malformed or incomplete bodies with
/// 422; this API treats a body missing a required field the same as a body
/// failing a semantic check, so both come back as 400 with the entity's
/// "data is invalid" message.
pub trait RequestBody: serde::de::DeserializeOwned {
    /// Message returned when the body cannot be deserialized.
    const INVALID_MESSAGE: &'static str;
}

impl RequestBody for CreateItemDto {
    const INVALID_MESSAGE: &'static str = "Item data is invalid";
}

impl RequestBody for UpdateItemDto {
    const INVALID_MESSAGE: &'static str = "Item data is invalid";
}

impl RequestBody for CreateOrderDto {
    const INVALID_MESSAGE: &'static str = "Order data is invalid";
}

impl RequestBody for UpdateOrderDto {
    const INVALID_MESSAGE: &'static str = "Order data is invalid";
}

/// Extract and validate a JSON request body.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: RequestBody,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(body)) => Ok(Self(body)),
            Err(rejection) => {
                tracing::error!(error = %rejection, "{}", T::INVALID_MESSAGE);
                Err(ApiError::Invalid(T::INVALID_MESSAGE.to_string()))
            }
        }
    }
}
