use axum::Router;
use tower_http::services::ServeDir;

use crate::{app_state::SharedState, spa_serve_dir::SpaServeDirService};

pub mod photo;
pub mod timeline;


/// All API routes plus the front-end as fallback
pub fn app_router(shared_state: SharedState) -> Router {
    let static_dir = ServeDir::new(shared_state.static_dir.as_std_path());
    Router::new()
        .nest("/api/timeline", timeline::router())
        .nest("/api/photos", photo::router())
        .fallback_service(SpaServeDirService::new(static_dir))
        .with_state(shared_state)
}
