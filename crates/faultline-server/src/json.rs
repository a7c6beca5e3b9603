use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::response::Response;
use faultline_core::RequestContext;
use faultline_responder::Responder;
use serde::de::DeserializeOwned;

/// JSON request body whose rejections are answered with a 400 envelope
///
/// Malformed JSON, a wrong content type, or a body that does not match `T`
/// all produce `{"error": "<reason>"}` instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();
        let ctx = RequestContext::from(&parts);
        let responder = parts.extensions.get::<Responder>().cloned().unwrap_or_default();

        match Json::<T>::from_request(Request::from_parts(parts, body), state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(responder.bad_request(&ctx, &rejection.body_text())),
        }
    }
}
