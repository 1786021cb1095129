use axum::{
    extract::{Path, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use axum_extra::body::AsyncReadBody;
use camino::{Utf8Component, Utf8Path};
use serde::Deserialize;
use tracing::{instrument, warn};
use utoipa::IntoParams;

use shiki_core::{
    catalog::PhotoFilter,
    model::{self, PhotoId, Season},
};

use crate::{
    app_state::SharedState,
    http_error::{ApiResult, HttpError},
    mime_type::guess_mime_type_path,
    schema::Photo,
};

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(get_photos))
        .route("/:id", get(get_photo))
        .route("/:id/file", get(get_photo_file))
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PhotoQuery {
    pub year: Option<i32>,
    /// One of 春, 夏, 秋, 冬
    pub season: Option<String>,
}

fn lookup_photo(app_state: &SharedState, id: i64) -> ApiResult<&model::Photo> {
    app_state
        .catalog
        .get(PhotoId(id))
        .ok_or_else(|| HttpError::NotFound(format!("no photo with id {}", id)))
}

#[utoipa::path(
    get,
    path = "/api/photos",
    params(PhotoQuery),
    responses(
        (status = 200, body = [Photo]),
        (status = 400, description = "Invalid season")
    )
)]
#[instrument(skip(app_state))]
pub async fn get_photos(
    State(app_state): State<SharedState>,
    Query(query): Query<PhotoQuery>,
) -> ApiResult<Json<Vec<Photo>>> {
    let season: Option<Season> = query.season.as_deref().map(str::parse::<Season>).transpose()?;
    let filter = PhotoFilter {
        year: query.year,
        season,
    };
    Ok(Json(
        app_state.catalog.filter(&filter).map(Photo::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/photos/{id}",
    params(("id" = i64, Path, description = "Photo id")),
    responses(
        (status = 200, body = Photo),
        (status = 404, description = "No photo with this id")
    )
)]
#[instrument(skip(app_state))]
pub async fn get_photo(
    State(app_state): State<SharedState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Photo>> {
    let photo = lookup_photo(&app_state, id)?;
    Ok(Json(photo.into()))
}

fn is_remote(src: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        src.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// `src` may only name a file below the photo directory
fn stays_inside(src: &Utf8Path) -> bool {
    src.components()
        .any(|component| matches!(component, Utf8Component::Normal(_)))
        && src.components().all(|component| {
            matches!(
                component,
                Utf8Component::Normal(_) | Utf8Component::CurDir
            )
        })
}

#[utoipa::path(
    get,
    path = "/api/photos/{id}/file",
    params(("id" = i64, Path, description = "Photo id")),
    responses(
        (status = 200, description = "The image file"),
        (status = 307, description = "Redirect to a remote image"),
        (status = 400, description = "Photo source points outside of the photo directory"),
        (status = 404, description = "No photo with this id or file not found")
    )
)]
#[instrument(skip(app_state))]
pub async fn get_photo_file(
    State(app_state): State<SharedState>,
    Path(id): Path<i64>,
) -> ApiResult<Response> {
    let photo = lookup_photo(&app_state, id)?;
    if is_remote(&photo.src) {
        return Ok(Redirect::temporary(&photo.src).into_response());
    }
    let photo_dir = app_state
        .photo_dir
        .as_ref()
        .ok_or_else(|| HttpError::NotFound("no photo directory configured".into()))?;
    let src = Utf8Path::new(&photo.src);
    if !stays_inside(src) {
        warn!("photo {} has a source outside the photo directory", photo.id);
        return Err(HttpError::BadRequest(format!(
            "invalid source for photo {}",
            id
        )));
    }
    let path = photo_dir.join(src);
    let file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("file for photo {} not found: {}", photo.id, path);
            return Err(HttpError::NotFound(format!("file for photo {} not found", id)));
        }
        Err(err) => return Err(err.into()),
    };
    if !file.metadata().await?.is_file() {
        warn!("source of photo {} is not a file: {}", photo.id, path);
        return Err(HttpError::NotFound(format!("file for photo {} not found", id)));
    }
    let mut headers = HeaderMap::new();
    if let Some(mime_type) = guess_mime_type_path(&path) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(mime_type));
    }
    Ok((headers, AsyncReadBody::new(file)).into_response())
}
