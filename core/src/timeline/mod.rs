use itertools::Itertools;

use crate::model::{Photo, Season, TimeEvent, TimeEventId};


/// The seasons of 2024, ordered by id which is also chronological order
pub const TIMELINE_EVENTS: [TimeEvent; 4] = [
    TimeEvent {
        id: TimeEventId(1),
        year: 2024,
        season: Season::Spring,
    },
    TimeEvent {
        id: TimeEventId(2),
        year: 2024,
        season: Season::Summer,
    },
    TimeEvent {
        id: TimeEventId(3),
        year: 2024,
        season: Season::Autumn,
    },
    TimeEvent {
        id: TimeEventId(4),
        year: 2024,
        season: Season::Winter,
    },
];

pub fn timeline_events() -> &'static [TimeEvent] {
    &TIMELINE_EVENTS
}

pub fn get_event(events: &[TimeEvent], id: TimeEventId) -> Option<&TimeEvent> {
    events.iter().find(|event| event.id == id)
}

pub fn find_event(events: &[TimeEvent], year: i32, season: Season) -> Option<&TimeEvent> {
    events.iter().find(|event| event.matches(year, season))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineGroup {
    pub event: TimeEvent,
    pub photos: Vec<Photo>,
}

/// Photos grouped under the events they belong to
///
/// `groups` has one entry per event, in event order, including events without photos.
/// Photos whose year and season match no event end up in `unassigned`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub groups: Vec<TimelineGroup>,
    pub unassigned: Vec<Photo>,
}

#[tracing::instrument(skip_all, level = "debug")]
pub fn group_photos<'a>(
    events: &[TimeEvent],
    photos: impl IntoIterator<Item = &'a Photo>,
) -> Timeline {
    let mut by_event = photos
        .into_iter()
        .sorted_by_key(|photo| photo.id)
        .into_group_map_by(|photo| find_event(events, photo.year, photo.season).map(|e| e.id));
    let groups = events
        .iter()
        .map(|event| TimelineGroup {
            event: *event,
            photos: by_event
                .remove(&Some(event.id))
                .unwrap_or_default()
                .into_iter()
                .cloned()
                .collect(),
        })
        .collect();
    let unassigned: Vec<Photo> = by_event
        .remove(&None)
        .unwrap_or_default()
        .into_iter()
        .cloned()
        .collect();
    if !unassigned.is_empty() {
        tracing::debug!(count = unassigned.len(), "photos outside of the timeline");
    }
    Timeline { groups, unassigned }
}
