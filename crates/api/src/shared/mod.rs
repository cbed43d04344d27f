pub mod usecase;

use crate::error::StudyError;
use actix_web::{dev::Payload, web, FromRequest, HttpMessage, HttpRequest};
use serde::de::DeserializeOwned;
use std::{future::Future, pin::Pin};

/// Request body that may be sent either as JSON or as an urlencoded form.
///
/// A request without a body, or with any other content type, reads as
/// `T::default()`. Only a body that is present and fails to parse is
/// rejected.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

impl<T> JsonOrForm<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

enum BodyKind {
    Json,
    Form,
    Ignored,
}

impl BodyKind {
    fn of(req: &HttpRequest) -> Self {
        let content_type = req.content_type().to_ascii_lowercase();
        if content_type == "application/json" || content_type.ends_with("+json") {
            Self::Json
        } else if content_type == "application/x-www-form-urlencoded" {
            Self::Form
        } else {
            Self::Ignored
        }
    }
}

fn parse_body<T: DeserializeOwned + Default>(
    kind: BodyKind,
    bytes: &[u8],
) -> Result<T, StudyError> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(T::default());
    }
    match kind {
        BodyKind::Json => serde_json::from_slice(bytes)
            .map_err(|e| StudyError::BadClientData(format!("Json deserialize error: {}", e))),
        BodyKind::Form => {
            let form = std::str::from_utf8(bytes)
                .map_err(|_| StudyError::BadClientData("Form body is not valid UTF-8".into()))?;
            web::Query::<T>::from_query(form)
                .map(web::Query::into_inner)
                .map_err(|e| StudyError::BadClientData(e.to_string()))
        }
        BodyKind::Ignored => Ok(T::default()),
    }
}

impl<T: DeserializeOwned + Default + 'static> FromRequest for JsonOrForm<T> {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let kind = BodyKind::of(req);
        let bytes = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = bytes.await?;
            parse_body(kind, &bytes)
                .map(JsonOrForm)
                .map_err(actix_web::Error::from)
        })
    }
}
