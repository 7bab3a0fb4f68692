/// Chip catalog lookups.
pub mod catalog_service;
/// Chip assignment and transfer rules.
pub mod chip_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Room lifecycle and membership.
pub mod room_service;
/// Hole scoring and the shared hole pointer.
pub mod score_service;
/// Server-Sent Events streaming service.
pub mod sse_service;
/// Final standings aggregation.
pub mod standings_service;
