use serde::{Deserialize, Serialize};

use super::{PhotoId, Season, TimeEvent};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    /// Image locator, either a path relative to the photo directory or an absolute URL
    pub src: String,
    pub year: i32,
    pub season: Season,
    /// Accessibility text
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    pub location: String,
}

impl Photo {
    pub fn is_in_event(&self, event: &TimeEvent) -> bool {
        event.matches(self.year, self.season)
    }
}

#[cfg(test)]
mod test {
    use claims::{assert_err, assert_ok};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn story_is_optional() {
        let photo: Photo = assert_ok!(serde_json::from_str::<Photo>(
            r#"{"id": 7, "src": "img/7.jpg", "year": 2024, "season": "夏",
                "alt": "beach", "location": "Kamakura"}"#
        ));
        assert_eq!(photo.story, None);
        assert_eq!(photo.season, Season::Summer);
        let json = serde_json::to_value(&photo).unwrap();
        assert!(json.get("story").is_none());
    }

    #[test]
    fn out_of_enum_season_is_rejected() {
        let err = assert_err!(serde_json::from_str::<Photo>(
            r#"{"id": 7, "src": "img/7.jpg", "year": 2024, "season": "summer",
                "alt": "beach", "location": "Kamakura"}"#
        ));
        assert!(err.to_string().contains("invalid season"), "{}", err);
    }
}
