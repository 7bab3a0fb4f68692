use axum::{Json, Router, extract::State, routing::get};

use crate::{dto::catalog::CatalogResponse, services::catalog_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/catalog",
    responses((status = 200, description = "Chip catalog in play order", body = CatalogResponse))
)]
/// Return the chip set every room plays with.
pub async fn get_catalog(State(state): State<SharedState>) -> Json<CatalogResponse> {
    Json(catalog_service::catalog(&state).await)
}

/// Configure the catalog routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/catalog", get(get_catalog))
}
