use utoipa::OpenApi;

use crate::{routes, schema};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::timeline::get_timeline_events,
        routes::timeline::get_timeline_event,
        routes::timeline::get_timeline_event_photos,
        routes::timeline::get_timeline_groups,
        routes::photo::get_photos,
        routes::photo::get_photo,
        routes::photo::get_photo_file,
    ),
    components(schemas(
        schema::Season,
        schema::Photo,
        schema::TimeEvent,
        schema::TimelineGroup,
        schema::TimelineResponse,
    )),
    tags((name = "shiki"))
)]
pub struct ApiDoc;

/// `get_timeline_events` -> `getTimelineEvents`
fn to_camel_case(snake: &str) -> String {
    let mut words = snake.split('_').filter(|word| !word.is_empty());
    let mut camel = words.next().unwrap_or_default().to_owned();
    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(chars.as_str());
        }
    }
    camel
}

/// The API document with operation ids in camelCase for generated front-end clients
pub fn api_document() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    for path_item in doc.paths.paths.values_mut() {
        for operation in path_item.operations.values_mut() {
            operation.operation_id = operation.operation_id.as_deref().map(to_camel_case);
        }
    }
    doc
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for path in [
            "/api/timeline",
            "/api/timeline/{id}",
            "/api/timeline/{id}/photos",
            "/api/timeline/groups",
            "/api/photos",
            "/api/photos/{id}",
            "/api/photos/{id}/file",
        ] {
            assert!(paths.contains(&path), "missing {}", path);
        }
    }

    #[test]
    fn camel_case_conversion() {
        assert_eq!(to_camel_case("get_photo_file"), "getPhotoFile");
        assert_eq!(to_camel_case("get_photos"), "getPhotos");
        assert_eq!(to_camel_case("photos"), "photos");
        assert_eq!(to_camel_case("get__photo_"), "getPhoto");
    }

    #[test]
    fn operation_ids_are_camel_case() {
        let doc = api_document();
        let mut ids: Vec<String> = doc
            .paths
            .paths
            .values()
            .flat_map(|item| item.operations.values())
            .filter_map(|op| op.operation_id.clone())
            .collect();
        ids.sort();
        assert_eq!(
            ids,
            vec![
                "getPhoto",
                "getPhotoFile",
                "getPhotos",
                "getTimelineEvent",
                "getTimelineEventPhotos",
                "getTimelineEvents",
                "getTimelineGroups",
            ]
        );
    }
}
