use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use tracing::{debug, instrument};

use shiki_core::{
    model::{self, TimeEventId},
    timeline,
};

use crate::{
    app_state::SharedState,
    http_error::{ApiResult, HttpError},
    schema::{Photo, TimeEvent, TimelineGroup, TimelineResponse},
};

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(get_timeline_events))
        .route("/groups", get(get_timeline_groups))
        .route("/:id", get(get_timeline_event))
        .route("/:id/photos", get(get_timeline_event_photos))
}

fn lookup_event(app_state: &SharedState, id: i64) -> ApiResult<&model::TimeEvent> {
    timeline::get_event(app_state.events, TimeEventId(id))
        .ok_or_else(|| HttpError::NotFound(format!("no timeline event with id {}", id)))
}

#[utoipa::path(
    get,
    path = "/api/timeline",
    responses((status = 200, body = [TimeEvent]))
)]
#[instrument(skip(app_state))]
pub async fn get_timeline_events(
    State(app_state): State<SharedState>,
) -> ApiResult<Json<Vec<TimeEvent>>> {
    Ok(Json(app_state.events.iter().map(TimeEvent::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/timeline/{id}",
    params(("id" = i64, Path, description = "Timeline event id")),
    responses(
        (status = 200, body = TimeEvent),
        (status = 404, description = "No event with this id")
    )
)]
#[instrument(skip(app_state))]
pub async fn get_timeline_event(
    State(app_state): State<SharedState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TimeEvent>> {
    let event = lookup_event(&app_state, id)?;
    Ok(Json(event.into()))
}

#[utoipa::path(
    get,
    path = "/api/timeline/{id}/photos",
    params(("id" = i64, Path, description = "Timeline event id")),
    responses(
        (status = 200, body = [Photo]),
        (status = 404, description = "No event with this id")
    )
)]
#[instrument(skip(app_state))]
pub async fn get_timeline_event_photos(
    State(app_state): State<SharedState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<Photo>>> {
    let event = lookup_event(&app_state, id)?;
    let photos: Vec<Photo> = app_state
        .catalog
        .photos_in_event(event)
        .map(Photo::from)
        .collect();
    debug!(event = %event.id, count = photos.len());
    Ok(Json(photos))
}

#[utoipa::path(
    get,
    path = "/api/timeline/groups",
    responses((status = 200, body = TimelineResponse))
)]
#[instrument(skip(app_state))]
pub async fn get_timeline_groups(
    State(app_state): State<SharedState>,
) -> ApiResult<Json<TimelineResponse>> {
    let now = Utc::now();
    let grouped = timeline::group_photos(app_state.events, app_state.catalog.all());
    Ok(Json(TimelineResponse {
        date: now,
        groups: grouped.groups.iter().map(TimelineGroup::from).collect(),
        unassigned: grouped.unassigned.iter().map(Photo::from).collect(),
    }))
}
