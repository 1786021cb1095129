use proptest::prelude::*;

use crate::model::{Photo, PhotoId, Season};

pub fn arb_season() -> impl Strategy<Value = Season> {
    prop_oneof![
        Just(Season::Spring),
        Just(Season::Summer),
        Just(Season::Autumn),
        Just(Season::Winter),
    ]
}

prop_compose! {
    pub fn arb_photo(id: i64)
    (
        year in 2022..2026i32,
        season in arb_season(),
        alt in "[a-z ]{0,20}",
        story in proptest::option::of("[a-z ]{1,40}"),
        location in "[A-Z][a-z]{2,10}",
    ) -> Photo {
        Photo {
            id: PhotoId(id),
            src: format!("photos/{}.jpg", id),
            year,
            season,
            alt,
            story,
            location,
        }
    }
}

/// Photos with distinct ids in arbitrary order
pub fn arb_photos(max_len: usize) -> impl Strategy<Value = Vec<Photo>> {
    prop::collection::hash_set(0..1000i64, 0..max_len)
        .prop_flat_map(|ids| ids.into_iter().map(arb_photo).collect::<Vec<_>>())
        .prop_shuffle()
}
