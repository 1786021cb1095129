use std::sync::Arc;

use camino::Utf8PathBuf as PathBuf;
use shiki_core::{catalog::PhotoCatalog, model::TimeEvent};

pub struct AppState {
    pub catalog: PhotoCatalog,
    pub events: &'static [TimeEvent],
    pub photo_dir: Option<PathBuf>,
    pub static_dir: PathBuf,
}

pub type SharedState = Arc<AppState>;
