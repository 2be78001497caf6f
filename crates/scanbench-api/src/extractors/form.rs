//! JSON-or-form request body extractor.

use axum::extract::rejection::FormRejection;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use axum::Form;
use bytes::Bytes;
use serde_json::{Map, Value};

/// Request body fields decoded from JSON or `application/x-www-form-urlencoded`.
///
/// Anything that does not decode to an object (other content types, empty
/// or malformed bodies, JSON arrays) yields no fields, so field validation
/// reports the problem instead of a decoding error. Only a failure to read
/// the body at all is rejected.
#[derive(Debug, Clone, Default)]
pub struct FormFields(Map<String, Value>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyEncoding {
    Json,
    UrlEncoded,
    Other,
}

impl BodyEncoding {
    fn of(headers: &HeaderMap) -> Self {
        let mime = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        {
            Self::Json
        } else if mime == "application/x-www-form-urlencoded" {
            Self::UrlEncoded
        } else {
            Self::Other
        }
    }
}

impl FormFields {
    /// Decode a JSON body. Non-object or malformed JSON yields no fields.
    pub fn from_json(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Self(map),
            _ => Self::default(),
        }
    }

    /// Build from decoded form pairs. The first occurrence of a key wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut map = Map::new();
        for (key, value) in pairs {
            map.entry(key).or_insert(Value::String(value));
        }
        Self(map)
    }

    /// Non-empty string value of `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Integer value of `key`, given either as a JSON integer or as a
    /// string holding one.
    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match BodyEncoding::of(req.headers()) {
            BodyEncoding::Json => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Ok(Self::from_json(&body))
            }
            BodyEncoding::UrlEncoded => {
                match Form::<Vec<(String, String)>>::from_request(req, state).await {
                    Ok(Form(pairs)) => Ok(Self::from_pairs(pairs)),
                    Err(
                        FormRejection::FailedToDeserializeForm(_)
                        | FormRejection::FailedToDeserializeFormBody(_),
                    ) => Ok(Self::default()),
                    Err(rejection) => Err(rejection.into_response()),
                }
            }
            BodyEncoding::Other => Ok(Self::default()),
        }
    }
}
