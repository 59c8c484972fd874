//! Request extractors
//!
//! Wraps axum's extractors so their rejections go out through [`AppError`]
//! and share its JSON error body.

use crate::error::AppError;
use axum::extract::FromRequest;

/// JSON body extractor that rejects with [`AppError::InvalidBody`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
