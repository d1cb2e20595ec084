//! Raw request body extractor.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};

use crate::error::AppError;
use crate::state::AppState;

/// The buffered request body, left unparsed for [`sj_core::request`].
///
/// Unlike a bare [`Bytes`] extractor, a body that cannot be read (for example
/// one over the size limit) is rejected with a failure envelope.
#[derive(Debug, Clone)]
pub struct RequestBody(pub Bytes);

impl FromRequest<AppState> for RequestBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(RequestBody(bytes))
    }
}
