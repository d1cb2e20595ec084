//! Response envelopes shared by all API handlers.
//!
//! Every response is `{ "Status": "success", "Data": ... }` or
//! `{ "Status": "fail", "Err": "..." }`, always with HTTP 200. Clients read
//! the outcome from `Status`.

use axum::Json;
use serde::Serialize;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_FAIL: &str = "fail";

/// Successful outcome carrying `data`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuccessResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            data,
        }
    }
}

/// Failed outcome carrying the error message.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FailResponse {
    pub status: &'static str,
    pub err: String,
}

impl FailResponse {
    pub fn new(err: impl Into<String>) -> Self {
        Self {
            status: STATUS_FAIL,
            err: err.into(),
        }
    }
}

/// Handler return type for a successful envelope.
pub type Envelope<T> = Json<SuccessResponse<T>>;

/// Wrap `data` in a success envelope.
pub fn success<T: Serialize>(data: T) -> Envelope<T> {
    Json(SuccessResponse::new(data))
}
