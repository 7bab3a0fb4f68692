//! Device identity carried on every authenticated request.

use axum::http::HeaderMap;

use crate::error::ServiceError;

/// Header clients use to present their stable device identifier.
pub const DEVICE_ID_HEADER: &str = "x-device-id";

/// Extract the caller's device id from the request headers.
///
/// The id is an opaque token minted and persisted by the client device; the
/// backend only requires it to be present and non-blank.
pub fn require_device_id(headers: &HeaderMap) -> Result<String, ServiceError> {
    headers
        .get(DEVICE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| value.to_owned())
        .ok_or_else(|| {
            ServiceError::NotAuthenticated("missing device id header `X-Device-Id`".into())
        })
}
