use serde::Serialize;
use utoipa::ToSchema;

use shiki_core::model;

/// Season of the year, always one of the four single character literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Season {
    #[serde(rename = "春")]
    Spring,
    #[serde(rename = "夏")]
    Summer,
    #[serde(rename = "秋")]
    Autumn,
    #[serde(rename = "冬")]
    Winter,
}

impl From<model::Season> for Season {
    fn from(value: model::Season) -> Self {
        match value {
            model::Season::Spring => Season::Spring,
            model::Season::Summer => Season::Summer,
            model::Season::Autumn => Season::Autumn,
            model::Season::Winter => Season::Winter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    pub src: String,
    pub year: i32,
    pub season: Season,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    pub location: String,
}

impl From<&model::Photo> for Photo {
    fn from(value: &model::Photo) -> Self {
        Photo {
            id: value.id.0,
            src: value.src.clone(),
            year: value.year,
            season: value.season.into(),
            alt: value.alt.clone(),
            story: value.story.clone(),
            location: value.location.clone(),
        }
    }
}
