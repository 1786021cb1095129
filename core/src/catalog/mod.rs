use std::collections::BTreeMap;

use camino::Utf8Path as Path;
use eyre::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    model::{Photo, PhotoId, Season, TimeEvent},
    timeline,
};

#[cfg(test)]
mod test;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate photo id {0}")]
    DuplicatePhotoId(PhotoId),
}

/// All photos known to the gallery, ordered by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoCatalog {
    photos: BTreeMap<PhotoId, Photo>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhotoFilter {
    pub year: Option<i32>,
    pub season: Option<Season>,
}

impl PhotoFilter {
    pub fn matches(&self, photo: &Photo) -> bool {
        self.year.map_or(true, |year| photo.year == year)
            && self.season.map_or(true, |season| photo.season == season)
    }
}

impl PhotoCatalog {
    pub fn new(photos: impl IntoIterator<Item = Photo>) -> Result<PhotoCatalog, CatalogError> {
        let mut by_id = BTreeMap::new();
        for photo in photos {
            let id = photo.id;
            if by_id.insert(id, photo).is_some() {
                return Err(CatalogError::DuplicatePhotoId(id));
            }
        }
        Ok(PhotoCatalog { photos: by_id })
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn all(&self) -> impl Iterator<Item = &Photo> {
        self.photos.values()
    }

    pub fn get(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.get(&id)
    }

    pub fn filter<'a>(&'a self, filter: &'a PhotoFilter) -> impl Iterator<Item = &'a Photo> {
        self.photos.values().filter(|photo| filter.matches(photo))
    }

    pub fn photos_in_event<'a>(&'a self, event: &'a TimeEvent) -> impl Iterator<Item = &'a Photo> {
        self.photos.values().filter(|photo| photo.is_in_event(event))
    }

    /// Photos whose year and season match none of the given events
    pub fn outside_of<'a>(
        &'a self,
        events: &'a [TimeEvent],
    ) -> impl Iterator<Item = &'a Photo> {
        self.photos
            .values()
            .filter(|photo| timeline::find_event(events, photo.year, photo.season).is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    photos: Vec<Photo>,
}

/// Parse catalog file contents. `.json` files hold an array of photos,
/// everything else is read as TOML with a `[[photos]]` array.
pub fn parse_catalog(path: &Path, contents: &str) -> Result<PhotoCatalog> {
    let photos: Vec<Photo> = match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("json") => {
            serde_json::from_str(contents).wrap_err("Error parsing JSON photo catalog")?
        }
        _ => {
            let toml_catalog: TomlCatalog =
                toml::from_str(contents).wrap_err("Error parsing TOML photo catalog")?;
            toml_catalog.photos
        }
    };
    Ok(PhotoCatalog::new(photos)?)
}

#[tracing::instrument]
pub async fn read_catalog(path: &Path) -> Result<PhotoCatalog> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .context(format!("Error reading photo catalog {}", path))?;
    let catalog = parse_catalog(path, &contents).context(format!("In photo catalog {}", path))?;
    for photo in catalog.outside_of(timeline::timeline_events()) {
        warn!(
            "photo {} ({} {}) does not belong to any timeline event",
            photo.id, photo.year, photo.season
        );
    }
    info!("Loaded {} photos", catalog.len());
    Ok(catalog)
}
