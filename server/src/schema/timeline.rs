use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use shiki_core::{model, timeline};

use super::{Photo, Season};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeEvent {
    pub id: i64,
    pub year: i32,
    pub season: Season,
}

impl From<&model::TimeEvent> for TimeEvent {
    fn from(value: &model::TimeEvent) -> Self {
        TimeEvent {
            id: value.id.0,
            year: value.year,
            season: value.season.into(),
        }
    }
}

/// Every timeline event with the photos taken during it
///
/// `groups` contains all events in timeline order, also those without photos.
/// Photos that belong to no event are listed in `unassigned`.
/// `date` is the time the response was put together.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    pub date: DateTime<Utc>,
    pub groups: Vec<TimelineGroup>,
    pub unassigned: Vec<Photo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineGroup {
    pub event: TimeEvent,
    pub photos: Vec<Photo>,
}

impl From<&timeline::TimelineGroup> for TimelineGroup {
    fn from(value: &timeline::TimelineGroup) -> Self {
        TimelineGroup {
            event: (&value.event).into(),
            photos: value.photos.iter().map(Photo::from).collect(),
        }
    }
}
