//! Shared-secret guard for on-demand revalidation.
//!
//! Implements constant-time comparison to mitigate timing attacks.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::errors::AppError;

/// Header carrying the revalidation secret.
pub const SECRET_HEADER: &str = "x-revalidate-secret";

/// Secret guard layer function that takes the expected secret as a parameter.
pub async fn secret_guard_layer(
    expected_secret: Option<String>,
    request: Request,
    next: Next,
) -> Response {
    // No secret configured: revalidation is open
    let Some(expected) = expected_secret else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(SECRET_HEADER)
        .and_then(|v| v.to_str().ok())
        .or_else(|| {
            request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
        })
        .map(|s| s.to_string());

    match provided {
        Some(secret) if constant_time_compare(&secret, &expected) => next.run(request).await,
        Some(_) => AppError::Unauthorized("Invalid revalidation secret".to_string()).into_response(),
        None => AppError::Unauthorized("Missing revalidation secret".to_string()).into_response(),
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
