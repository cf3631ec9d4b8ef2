//! JSON body extractor that runs [`Validate`] before the handler sees the payload.

use crate::error::AppError;
use crate::schemas::Validate;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// Deserialized and validated request body. Syntax, type, and rule failures all surface
/// as `AppError::Validation`.
#[derive(Clone, Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::ItemCreate;
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest};

    fn json_request(body: &str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .uri("/items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_body() {
        let ValidatedJson(item) = ValidatedJson::<ItemCreate>::from_request(json_request(r#"{"name":"Lamp"}"#), &())
            .await
            .unwrap();
        assert_eq!(item.name, "Lamp");
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let err = ValidatedJson::<ItemCreate>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn rule_failures_are_validation_errors() {
        let err = ValidatedJson::<ItemCreate>::from_request(json_request(r#"{"name":""}"#), &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "name is required"));
    }
}
