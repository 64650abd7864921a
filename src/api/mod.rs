//! REST API layer: route handlers, DTOs, OpenAPI document, and router
//! composition.
//!
//! Event endpoints are mounted under `/api`; system endpoints live at the
//! root.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::events::list_events,
        handlers::events::featured_event,
        handlers::events::upcoming_events,
        handlers::events::events_by_category,
        handlers::events::get_event,
        handlers::events::create_event,
        handlers::events::update_event,
        handlers::events::delete_event,
        handlers::system::health_handler,
        handlers::system::categories_handler,
    ),
    components(schemas(
        crate::domain::Event,
        crate::domain::EventCategory,
        crate::domain::EventId,
        dto::CreateEventRequest,
        dto::UpdateEventRequest,
        dto::CategoryInfo,
        handlers::system::HealthResponse,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "Events", description = "Event catalog queries and management"),
        (name = "System", description = "Health and configuration endpoints"),
    ),
    info(
        title = "Event Catalog API",
        description = "Browsable catalog of performances, healing sessions and workshops",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
