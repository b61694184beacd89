use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::Error;

/// JSON request body, rejected with a 400 [`Error::ValidationError`] when malformed.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

/// Path parameters, rejected with a 400 [`Error::ValidationError`] when unparseable.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);
