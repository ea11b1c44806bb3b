//! Event API routes
//!
//! Reads are public except `/mine`; writes require a bearer token.

use crate::auth::{require_auth, AuthUser};
use crate::error::ApiResult;
use crate::repositories::{EventDetail, EventRecord};
use crate::services::EventService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use events_shared::{EventPayload, JSend};

/// Create event routes
pub fn event_routes(state: AppState) -> Router<AppState> {
    let auth = middleware::from_fn_with_state(state, require_auth);

    Router::new()
        .route(
            "/",
            get(list_events).merge(post(create_event).route_layer(auth.clone())),
        )
        .route("/mine", get(list_my_events).route_layer(auth.clone()))
        .route(
            "/:id",
            get(get_event).merge(put(update_event).route_layer(auth)),
        )
}

/// GET /api/v1/events - All events
#[utoipa::path(
    get,
    path = "/api/v1/events",
    responses(
        (status = 200, description = "JSend success carrying every event", body = [EventRecord]),
    ),
    tag = "events",
)]
pub(crate) async fn list_events(State(state): State<AppState>) -> ApiResult<Json<JSend<Vec<EventRecord>>>> {
    let events = EventService::list_all(state.events()).await?;
    Ok(Json(JSend::success(events)))
}

/// GET /api/v1/events/mine - Events owned by the caller
#[utoipa::path(
    get,
    path = "/api/v1/events/mine",
    responses(
        (status = 200, description = "JSend success carrying the caller's events", body = [EventRecord]),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearerAuth" = [])),
    tag = "events",
)]
pub(crate) async fn list_my_events(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<JSend<Vec<EventRecord>>>> {
    let events = EventService::list_for_user(state.events(), auth.user_id).await?;
    Ok(Json(JSend::success(events)))
}

/// GET /api/v1/events/:id - One event with its type name
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "JSend success carrying the event", body = EventDetail),
        (status = 400, description = "Non-numeric id"),
        (status = 404, description = "No event with that id"),
    ),
    tag = "events",
)]
pub(crate) async fn get_event(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<JSend<EventDetail>>> {
    let Path(id) = id?;
    let event = EventService::get(state.events(), id).await?;
    Ok(Json(JSend::success(event)))
}

/// POST /api/v1/events - Create an event owned by the caller
#[utoipa::path(
    post,
    path = "/api/v1/events",
    request_body = EventPayload,
    responses(
        (status = 201, description = "JSend success carrying the created event", body = EventRecord),
        (status = 400, description = "Missing field, failed validation or unknown event type"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearerAuth" = [])),
    tag = "events",
)]
pub(crate) async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<JSend<EventRecord>>)> {
    let Json(payload) = payload?;
    let event = EventService::create(state.events(), auth.user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(JSend::success(event))))
}

/// PUT /api/v1/events/:id - Replace one of the caller's events
#[utoipa::path(
    put,
    path = "/api/v1/events/{id}",
    params(("id" = i32, Path, description = "Event id, repeated in the payload")),
    request_body = EventPayload,
    responses(
        (status = 200, description = "JSend success with \"Event updated\""),
        (status = 400, description = "Path and payload ids differ, or failed validation"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Event belongs to another user"),
        (status = 404, description = "No event with that id"),
    ),
    security(("bearerAuth" = [])),
    tag = "events",
)]
pub(crate) async fn update_event(
    State(state): State<AppState>,
    auth: AuthUser,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> ApiResult<Json<JSend<String>>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    EventService::update(state.events(), auth.user_id, id, payload).await?;
    Ok(Json(JSend::success("Event updated".to_string())))
}
