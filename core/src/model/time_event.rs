use serde::{Deserialize, Serialize};

use super::{Season, TimeEventId};

/// A point on the timeline, one season of one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeEvent {
    pub id: TimeEventId,
    pub year: i32,
    pub season: Season,
}

impl TimeEvent {
    pub fn matches(&self, year: i32, season: Season) -> bool {
        self.year == year && self.season == season
    }
}
