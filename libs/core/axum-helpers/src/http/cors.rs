use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer for the configured browser origins.
///
/// # Arguments
/// * `origins` - Allowed origins, e.g. `["http://localhost:5173"]`
///
/// # Returns
/// A configured `CorsLayer` with:
/// - The listed origins (none when the list is empty, so only same-origin requests work)
/// - The methods the API uses (GET, POST, PATCH, DELETE, OPTIONS)
/// - Content-Type and Accept request headers
/// - 1 hour max age
///
/// An origin that is not a valid header value yields `InvalidInput`.
pub fn create_cors_layer(origins: &[String]) -> io::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid CORS origin '{}': {}", origin, e),
                )
            })
        })
        .collect::<io::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}
