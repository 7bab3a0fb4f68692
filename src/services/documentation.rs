use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Chip Locked Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::rooms::create_room,
        crate::routes::rooms::join_room,
        crate::routes::rooms::get_room,
        crate::routes::rooms::finish_room,
        crate::routes::scores::record_score,
        crate::routes::scores::advance_hole,
        crate::routes::scores::step_back_hole,
        crate::routes::scores::get_standings,
        crate::routes::chips::assign_chip,
        crate::routes::chips::transfer_chip,
        crate::routes::catalog::get_catalog,
        crate::routes::sse::room_stream,
        crate::routes::sse::catalog_stream,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::room::CreateRoomRequest,
            crate::dto::room::JoinRoomRequest,
            crate::dto::room::RoomCreatedResponse,
            crate::dto::room::RoomJoinedResponse,
            crate::dto::room::RoomSnapshot,
            crate::dto::room::PlayerDto,
            crate::dto::room::ChipAssignmentDto,
            crate::dto::score::RecordScoreRequest,
            crate::dto::chip::AssignChipRequest,
            crate::dto::chip::TransferChipRequest,
            crate::dto::standings::StandingsResponse,
            crate::dto::standings::StandingEntry,
            crate::dto::catalog::CatalogResponse,
            crate::dto::catalog::ChipTypeDto,
            crate::state::status::RoomStatus,
            crate::state::catalog::ChipKind,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rooms", description = "Room lifecycle and membership"),
        (name = "scores", description = "Hole scores and the shared hole pointer"),
        (name = "chips", description = "Chip assignment and transfers"),
        (name = "catalog", description = "Chip catalog lookups"),
        (name = "sse", description = "Server-sent events streams"),
    )
)]
pub struct ApiDoc;
