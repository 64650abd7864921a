//! Event CRUD and query handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreateEventRequest, UpcomingParams, UpdateEventRequest};
use crate::app_state::AppState;
use crate::domain::{Event, EventCategory, EventId};
use crate::error::{CatalogError, ErrorResponse};

/// `GET /api/events` — List all events.
///
/// # Errors
///
/// Returns [`CatalogError`] on internal failures.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Events",
    summary = "List events",
    description = "Returns every event in the catalog, ordered by id.",
    responses(
        (status = 200, description = "All events", body = Vec<Event>),
        (status = 500, description = "Internal error", body = ErrorResponse),
    )
)]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, CatalogError> {
    Ok(Json(state.event_service.list_events().await))
}

/// `GET /api/events/featured` — The event flagged for homepage promotion.
///
/// # Errors
///
/// Returns [`CatalogError::NoFeaturedEvent`] if no event is flagged.
#[utoipa::path(
    get,
    path = "/api/events/featured",
    tag = "Events",
    summary = "Get the featured event",
    description = "Returns the featured event. When several are flagged, the one with the lowest id wins.",
    responses(
        (status = 200, description = "Featured event", body = Event),
        (status = 404, description = "No featured event", body = ErrorResponse),
    )
)]
pub async fn featured_event(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, CatalogError> {
    Ok(Json(state.event_service.featured_event().await?))
}

/// `GET /api/events/upcoming?limit=N` — Events dated now or later, soonest first.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRequest`] if `limit` is not a
/// non-negative integer.
#[utoipa::path(
    get,
    path = "/api/events/upcoming",
    tag = "Events",
    summary = "List upcoming events",
    description = "Returns events whose date is at or after the current time, sorted ascending by date and capped at `limit`.",
    params(UpcomingParams),
    responses(
        (status = 200, description = "Upcoming events", body = Vec<Event>),
        (status = 400, description = "Invalid limit", body = ErrorResponse),
    )
)]
pub async fn upcoming_events(
    State(state): State<AppState>,
    params: Result<Query<UpcomingParams>, QueryRejection>,
) -> Result<impl IntoResponse, CatalogError> {
    let Query(params) = params?;
    Ok(Json(state.event_service.upcoming_events(params.limit).await))
}

/// `GET /api/events/category/{category}` — Events in one category.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidCategory`] for unknown category names.
#[utoipa::path(
    get,
    path = "/api/events/category/{category}",
    tag = "Events",
    summary = "List events by category",
    description = "Returns every event whose category matches exactly (case-sensitive).",
    params(
        ("category" = EventCategory, Path, description = "Performance, Healing or Workshop"),
    ),
    responses(
        (status = 200, description = "Matching events", body = Vec<Event>),
        (status = 400, description = "Invalid category", body = ErrorResponse),
    )
)]
pub async fn events_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, CatalogError> {
    let category: EventCategory = category.parse()?;
    Ok(Json(state.event_service.events_by_category(category).await))
}

/// `GET /api/events/{id}` — Single event.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidEventId`] for malformed ids and
/// [`CatalogError::EventNotFound`] for unknown ones.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "Events",
    summary = "Get event details",
    params(
        ("id" = u32, Path, description = "Event id"),
    ),
    responses(
        (status = 200, description = "Event details", body = Event),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CatalogError> {
    let id: EventId = id.parse()?;
    Ok(Json(state.event_service.get_event(id).await?))
}

/// `POST /api/events` — Create an event.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRequest`] on malformed or invalid payloads.
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "Events",
    summary = "Create an event",
    description = "Validates the payload and stores it under the next sequential id.",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Invalid event data", body = ErrorResponse),
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CatalogError> {
    let Json(req) = payload?;
    let new = req.validate()?;
    let event = state.event_service.create_event(new).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// `PATCH /api/events/{id}` — Partially update an event.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidEventId`] or
/// [`CatalogError::InvalidRequest`] on bad input and
/// [`CatalogError::EventNotFound`] for unknown ids.
#[utoipa::path(
    patch,
    path = "/api/events/{id}",
    tag = "Events",
    summary = "Update an event",
    description = "Overwrites only the fields present in the body. `null` clears `imageUrl`, `price` or `ticketUrl` and is rejected on every other field.",
    params(
        ("id" = u32, Path, description = "Event id"),
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Updated event", body = Event),
        (status = 400, description = "Invalid id or event data", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEventRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CatalogError> {
    let id: EventId = id.parse()?;
    let Json(req) = payload?;
    let patch = req.validate()?;
    Ok(Json(state.event_service.update_event(id, patch).await?))
}

/// `DELETE /api/events/{id}` — Remove an event.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidEventId`] for malformed ids and
/// [`CatalogError::EventNotFound`] for unknown ones.
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = "Events",
    summary = "Delete an event",
    params(
        ("id" = u32, Path, description = "Event id"),
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CatalogError> {
    let id: EventId = id.parse()?;
    state.event_service.delete_event(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/featured", get(featured_event))
        .route("/events/upcoming", get(upcoming_events))
        .route("/events/category/{category}", get(events_by_category))
        .route(
            "/events/{id}",
            get(get_event).patch(update_event).delete(delete_event),
        )
}
