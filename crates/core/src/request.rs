//! Parsing and validation of `{ "Data": { ... } }` request envelopes.
//!
//! Every write endpoint receives its payload wrapped in a `Data` object.
//! Fields are checked in declaration order: a missing field fails with
//! [`CoreError::MissingField`], a field of the wrong JSON type with
//! [`CoreError::WrongType`]. Numbers may arrive as floats and are narrowed
//! to integers.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::DbId;

type Payload = Map<String, Value>;

/// Decode a raw body and return the object stored under `Data`.
pub fn parse_envelope(body: &[u8]) -> Result<Payload, CoreError> {
    let root: Value = serde_json::from_slice(body)
        .map_err(|e| CoreError::Malformed(format!("invalid JSON body: {e}")))?;

    let Value::Object(mut root) = root else {
        return Err(CoreError::Malformed("request body must be a JSON object".into()));
    };

    match root.remove("Data") {
        Some(Value::Object(data)) => Ok(data),
        Some(_) => Err(CoreError::WrongType("Data".into())),
        None => Err(CoreError::MissingField("Data".into())),
    }
}

/// Fail with `MissingField` for the first name in `fields` absent from `payload`.
pub fn require_fields(payload: &Payload, fields: &[&str]) -> Result<(), CoreError> {
    match fields.iter().find(|f| !payload.contains_key(**f)) {
        Some(missing) => Err(CoreError::MissingField((*missing).to_string())),
        None => Ok(()),
    }
}

/// Read a string field.
pub fn string_field(payload: &Payload, field: &str) -> Result<String, CoreError> {
    match payload.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(CoreError::WrongType(field.to_string())),
        None => Err(CoreError::MissingField(field.to_string())),
    }
}

/// Read a numeric field and narrow it to an integer.
///
/// Fractions truncate toward zero. Non-numeric values and numbers outside the
/// `i64` range are rejected.
pub fn int_field(payload: &Payload, field: &str) -> Result<i64, CoreError> {
    let wrong = || CoreError::WrongType(field.to_string());
    match payload.get(field) {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            let f = n.as_f64().ok_or_else(wrong)?;
            if !f.is_finite() || f < i64::MIN as f64 || f >= i64::MAX as f64 {
                return Err(wrong());
            }
            Ok(f.trunc() as i64)
        }
        Some(_) => Err(wrong()),
        None => Err(CoreError::MissingField(field.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Typed requests
// ---------------------------------------------------------------------------

/// `{ "Data": { "Title", "Image" } }` -- `Image` is the remote URL to download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSeriesRequest {
    pub title: String,
    pub image: String,
}

/// `{ "Data": { "Name", "Password" } }` for account creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRequest {
    pub name: String,
    pub password: String,
}

/// `{ "Data": { "Name", "Password" } }` for sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInRequest {
    pub name: String,
    pub password: String,
}

/// `{ "Data": { "SeriesID" } }`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesListRequest {
    pub series_id: DbId,
}

/// `{ "Data": { "SeriesID", "Session", "Episode" } }`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastWatchedRequest {
    pub series_id: DbId,
    pub session: i64,
    pub episode: i64,
}

/// `{ "Data": { "Name", "URL" } }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEpisodeResourceRequest {
    pub name: String,
    pub url: String,
}

impl NewSeriesRequest {
    pub fn parse(body: &[u8]) -> Result<Self, CoreError> {
        let data = parse_envelope(body)?;
        require_fields(&data, &["Title", "Image"])?;
        Ok(Self {
            title: string_field(&data, "Title")?,
            image: string_field(&data, "Image")?,
        })
    }
}

impl NewUserRequest {
    pub fn parse(body: &[u8]) -> Result<Self, CoreError> {
        let data = parse_envelope(body)?;
        require_fields(&data, &["Name", "Password"])?;
        Ok(Self {
            name: string_field(&data, "Name")?,
            password: string_field(&data, "Password")?,
        })
    }
}

impl SignInRequest {
    pub fn parse(body: &[u8]) -> Result<Self, CoreError> {
        let NewUserRequest { name, password } = NewUserRequest::parse(body)?;
        Ok(Self { name, password })
    }
}

impl SeriesListRequest {
    pub fn parse(body: &[u8]) -> Result<Self, CoreError> {
        let data = parse_envelope(body)?;
        require_fields(&data, &["SeriesID"])?;
        Ok(Self {
            series_id: int_field(&data, "SeriesID")?,
        })
    }
}

impl LastWatchedRequest {
    pub fn parse(body: &[u8]) -> Result<Self, CoreError> {
        let data = parse_envelope(body)?;
        require_fields(&data, &["SeriesID", "Session", "Episode"])?;
        Ok(Self {
            series_id: int_field(&data, "SeriesID")?,
            session: int_field(&data, "Session")?,
            episode: int_field(&data, "Episode")?,
        })
    }
}

impl NewEpisodeResourceRequest {
    pub fn parse(body: &[u8]) -> Result<Self, CoreError> {
        let data = parse_envelope(body)?;
        require_fields(&data, &["Name", "URL"])?;
        Ok(Self {
            name: string_field(&data, "Name")?,
            url: string_field(&data, "URL")?,
        })
    }
}
